use wasm_bindgen_futures::spawn_local;
use yew::{Html, function_component, html, use_effect_with, use_state};
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::api::PortalClient;
use crate::components::Loading;
use crate::routes::{self, Route};
use crate::stores::session::{SessionState, SessionStore};

#[function_component(App)]
pub fn app() -> Html {
    let (_session, dispatch) = use_store::<SessionState>();
    let ready = use_state(|| false);

    // Restore the session once on startup before the first route renders, so
    // pages below never see a half-initialized session.
    {
        let ready = ready.clone();
        let dispatch = dispatch.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let store = SessionStore::new(PortalClient::shared(), dispatch);
                store.initialize().await;
                ready.set(true);
            });
            || ()
        });
    }

    if !*ready {
        return html! { <Loading /> };
    }

    html! {
        <BrowserRouter>
            <Switch<Route> render={routes::switch} />
        </BrowserRouter>
    }
}
