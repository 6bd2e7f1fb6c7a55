use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::api::PortalClient;
use crate::components::ConversationList;
use crate::routes::Route;
use crate::stores::conversations::{ConversationsState, ConversationsStore};

/// Full conversation history, with open/delete actions. Opening a
/// conversation loads it and returns to the dashboard.
#[function_component(ArchivedChatsPage)]
pub fn archived_chats_page() -> Html {
    let (conversations, dispatch) = use_store::<ConversationsState>();
    let navigator = use_navigator().unwrap();
    let error = use_state(|| None::<String>);

    {
        let dispatch = dispatch.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                let store = ConversationsStore::new(PortalClient::shared(), dispatch);
                match store.fetch_conversations().await {
                    Ok(()) => {}
                    Err(err) if err.is_unauthorized() => navigator.push(&Route::Login),
                    Err(err) => error.set(Some(format!("Failed to load conversations: {err}"))),
                }
            });
            || ()
        });
    }

    let on_select = {
        let dispatch = dispatch.clone();
        let error = error.clone();
        let navigator = navigator.clone();
        Callback::from(move |id: Uuid| {
            let store = ConversationsStore::new(PortalClient::shared(), dispatch.clone());
            let error = error.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                match store.load_conversation(id).await {
                    Ok(()) => navigator.push(&Route::Dashboard),
                    Err(err) => error.set(Some(format!("Failed to load conversation: {err}"))),
                }
            });
        })
    };

    let on_delete = {
        let dispatch = dispatch.clone();
        let error = error.clone();
        Callback::from(move |id: Uuid| {
            let store = ConversationsStore::new(PortalClient::shared(), dispatch.clone());
            let error = error.clone();
            spawn_local(async move {
                if let Err(err) = store.delete_conversation(id).await {
                    error.set(Some(format!("Failed to delete conversation: {err}")));
                }
            });
        })
    };

    html! {
        <div class="max-w-2xl mx-auto p-6 space-y-4">
            <div class="flex items-center justify-between">
                <h1 class="text-2xl font-bold">{"Archived chats"}</h1>
                <Link<Route> to={Route::Dashboard} classes="btn btn-ghost btn-sm">
                    {"Back to dashboard"}
                </Link<Route>>
            </div>
            if let Some(message) = &*error {
                <div class="alert alert-error">
                    <span>{message.clone()}</span>
                </div>
            }
            <div class="card bg-base-100 shadow">
                <ConversationList
                    conversations={conversations.conversations.clone()}
                    selected={None::<Uuid>}
                    {on_select}
                    {on_delete}
                />
            </div>
        </div>
    }
}
