use uuid::Uuid;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;
use yewdux::prelude::use_store;

use crate::api::PortalClient;
use crate::components::{ChatComposer, ConversationList, MessageNode};
use crate::routes::Route;
use crate::stores::conversations::{ConversationsState, ConversationsStore};
use crate::stores::session::{SessionState, SessionStore};

#[function_component(DashboardPage)]
pub fn dashboard_page() -> Html {
    let (conversations, dispatch) = use_store::<ConversationsState>();
    let (session, session_dispatch) = use_store::<SessionState>();
    let navigator = use_navigator().unwrap();
    let draft = use_state(String::new);
    let error = use_state(|| None::<String>);

    // Load the history list once; an expired token bounces straight back to
    // the login screen.
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
        Callback::from(move |id: Uuid| {
            let store = ConversationsStore::new(PortalClient::shared(), dispatch.clone());
            let error = error.clone();
            spawn_local(async move {
                if let Err(err) = store.load_conversation(id).await {
                    error.set(Some(format!("Failed to load conversation: {err}")));
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

    let on_new_chat = {
        let dispatch = dispatch.clone();
        Callback::from(move |_| {
            ConversationsStore::new(PortalClient::shared(), dispatch.clone()).start_new_chat();
        })
    };

    let on_submit = {
        let dispatch = dispatch.clone();
        let draft = draft.clone();
        let error = error.clone();
        Callback::from(move |()| {
            let text = (*draft).clone();
            let store = ConversationsStore::new(PortalClient::shared(), dispatch.clone());
            let draft = draft.clone();
            let error = error.clone();
            spawn_local(async move {
                match store.send_message(&text).await {
                    Ok(()) => draft.set(String::new()),
                    Err(err) => error.set(Some(format!("Failed to send message: {err}"))),
                }
            });
        })
    };

    let on_logout = {
        let session_dispatch = session_dispatch.clone();
        let navigator = navigator;
        Callback::from(move |event: MouseEvent| {
            event.prevent_default();
            let session_dispatch = session_dispatch.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                let store = SessionStore::new(PortalClient::shared(), session_dispatch);
                store.logout().await;
                navigator.push(&Route::Login);
            });
        })
    };

    let on_text_change = {
        let draft = draft.clone();
        Callback::from(move |text: String| draft.set(text))
    };

    let selected = conversations.current.as_ref().map(|current| current.id());
    let greeting = session
        .user
        .as_ref()
        .map(|user| user.full_name())
        .unwrap_or_default();

    html! {
        <div class="flex flex-col h-screen">
            <header class="navbar bg-base-100 border-b border-base-300 px-4">
                <div class="flex-1">
                    <span class="text-lg font-semibold">{"StudyPortal"}</span>
                </div>
                <div class="flex items-center gap-3">
                    <Link<Route> to={Route::ArchivedChats} classes="btn btn-ghost btn-sm">
                        {"Archived chats"}
                    </Link<Route>>
                    <span class="text-sm text-base-content/70">{ greeting }</span>
                    <button class="btn btn-ghost btn-sm" type="button" onclick={on_logout}>
                        {"Log out"}
                    </button>
                </div>
            </header>

            <div class="flex flex-1 overflow-hidden">
                <aside class="w-72 border-r border-base-300 flex flex-col">
                    <div class="p-3">
                        <button class="btn btn-primary btn-sm w-full" type="button" onclick={on_new_chat}>
                            {"New chat"}
                        </button>
                    </div>
                    <div class="flex-1 overflow-y-auto">
                        <ConversationList
                            conversations={conversations.conversations.clone()}
                            {selected}
                            {on_select}
                            {on_delete}
                        />
                    </div>
                </aside>

                <main class="flex-1 flex flex-col p-4 overflow-hidden">
                    if let Some(message) = &*error {
                        <div class="alert alert-error mb-3">
                            <span>{message.clone()}</span>
                        </div>
                    }
                    <div class="flex-1 overflow-y-auto">
                        {
                            match conversations.current.as_ref() {
                                Some(current) => html! {
                                    <>
                                        { for current.messages.iter().map(|message| html! {
                                            <MessageNode message={message.clone()} />
                                        })}
                                    </>
                                },
                                None => html! {
                                    <div class="h-full flex items-center justify-center text-base-content/60">
                                        {"Ask the assistant about an assignment, or pick a conversation."}
                                    </div>
                                },
                            }
                        }
                    </div>
                    <div class="pt-3">
                        <ChatComposer
                            text={(*draft).clone()}
                            {on_text_change}
                            {on_submit}
                            disabled={conversations.loading}
                            placeholder={"Ask your study assistant...".to_string()}
                        />
                    </div>
                </main>
            </div>
        </div>
    }
}
