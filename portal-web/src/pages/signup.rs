use shared::models::SignupRequest;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::hooks::use_navigator;
use yewdux::prelude::use_store;

use crate::api::{ApiError, PortalClient};
use crate::routes::Route;
use crate::stores::session::{SessionState, SessionStore};

fn signup_error_message(err: &ApiError) -> String {
    match err {
        ApiError::Status { status, body } if status.is_client_error() && !body.is_empty() => {
            // Backend reports things like an already-registered email here.
            body.clone()
        }
        ApiError::Status { status, .. } => format!("Signup failed: {status}"),
        ApiError::Unauthorized => "Signup failed".to_string(),
        ApiError::Network(_) => "Unable to connect to server".to_string(),
    }
}

fn text_setter(handle: &UseStateHandle<String>) -> Callback<InputEvent> {
    let handle = handle.clone();
    Callback::from(move |event: InputEvent| {
        if let Some(input) = event.target_dyn_into::<HtmlInputElement>() {
            handle.set(input.value());
        }
    })
}

#[function_component(SignupPage)]
pub fn signup_page() -> Html {
    let (session, dispatch) = use_store::<SessionState>();
    let first_name = use_state(String::new);
    let last_name = use_state(String::new);
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| None::<String>);
    let navigator = use_navigator().unwrap();

    let onsubmit = {
        let first_name = first_name.clone();
        let last_name = last_name.clone();
        let email = email.clone();
        let password = password.clone();
        let error_handle = error.clone();
        let dispatch = dispatch.clone();
        let navigator = navigator;
        Callback::from(move |event: SubmitEvent| {
            event.prevent_default();
            let request = SignupRequest {
                first_name: (*first_name).clone(),
                last_name: (*last_name).clone(),
                email: (*email).clone(),
                password: (*password).clone(),
            };
            error_handle.set(None);
            let error_ref = error_handle.clone();
            let dispatch = dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let store = SessionStore::new(PortalClient::shared(), dispatch);
                match store.signup(request).await {
                    Ok(()) => navigator.push(&Route::Dashboard),
                    Err(err) => error_ref.set(Some(signup_error_message(&err))),
                }
            });
        })
    };

    let is_busy = session.loading;
    let disable_submit = (*first_name).is_empty()
        || (*last_name).is_empty()
        || (*email).is_empty()
        || (*password).is_empty()
        || is_busy;

    html! {
        <div class="flex items-center justify-center min-h-screen bg-base-200">
            <div class="card w-full max-w-md shadow-lg bg-base-100">
                <form class="card-body" onsubmit={onsubmit}>
                    <h2 class="card-title text-2xl">{"Create your account"}</h2>
                    if let Some(message) = &*error {
                        <div class="alert alert-error">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="form-control">
                        <label class="label" for="first-name">
                            <span class="label-text">{"First name"}</span>
                        </label>
                        <input
                            id="first-name"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*first_name).clone()}
                            oninput={text_setter(&first_name)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="last-name">
                            <span class="label-text">{"Last name"}</span>
                        </label>
                        <input
                            id="last-name"
                            class="input input-bordered"
                            type="text"
                            required=true
                            value={(*last_name).clone()}
                            oninput={text_setter(&last_name)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="email">
                            <span class="label-text">{"Email"}</span>
                        </label>
                        <input
                            id="email"
                            class="input input-bordered"
                            type="email"
                            required=true
                            value={(*email).clone()}
                            oninput={text_setter(&email)}
                        />
                    </div>
                    <div class="form-control">
                        <label class="label" for="password">
                            <span class="label-text">{"Password"}</span>
                        </label>
                        <input
                            id="password"
                            class="input input-bordered"
                            type="password"
                            required=true
                            value={(*password).clone()}
                            oninput={text_setter(&password)}
                        />
                    </div>
                    <div class="form-control mt-6">
                        <button class="btn btn-primary" type="submit" disabled={disable_submit}>
                            {if is_busy { "Creating account..." } else { "Sign up" }}
                        </button>
                    </div>
                </form>
            </div>
        </div>
    }
}
