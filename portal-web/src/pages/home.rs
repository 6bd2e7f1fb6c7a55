use yew::{Html, function_component, html};
use yew_router::prelude::*;
use yewdux::prelude::use_selector;

use crate::routes::Route;
use crate::stores::session::SessionState;

#[function_component(HomePage)]
pub fn home_page() -> Html {
    let authenticated = use_selector(|state: &SessionState| state.is_authenticated());

    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-4">
                    <h1 class="text-4xl font-bold">{"StudyPortal"}</h1>
                    <p class="text-base-content/70">
                        {"Get step-by-step help with assignments and build better study habits with your AI tutor."}
                    </p>
                    if *authenticated {
                        <Link<Route> to={Route::Dashboard} classes="btn btn-primary">
                            {"Open dashboard"}
                        </Link<Route>>
                    } else {
                        <div class="flex justify-center gap-3">
                            <Link<Route> to={Route::Login} classes="btn btn-primary">
                                {"Sign in"}
                            </Link<Route>>
                            <Link<Route> to={Route::Signup} classes="btn btn-outline">
                                {"Create account"}
                            </Link<Route>>
                        </div>
                    }
                </div>
            </div>
        </div>
    }
}
