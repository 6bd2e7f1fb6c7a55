use yew::{Html, function_component, html};
use yew_router::prelude::*;

use crate::routes::Route;

#[function_component(NotFoundPage)]
pub fn not_found_page() -> Html {
    html! {
        <div class="hero min-h-screen bg-base-200">
            <div class="hero-content text-center">
                <div class="max-w-md space-y-4">
                    <h1 class="text-5xl font-bold">{"404"}</h1>
                    <p class="text-base-content/70">{"That page doesn't exist."}</p>
                    <Link<Route> to={Route::Home} classes="btn btn-primary">
                        {"Go home"}
                    </Link<Route>>
                </div>
            </div>
        </div>
    }
}
