use shared::models::ConversationSummary;
use uuid::Uuid;
use yew::{Callback, Html, Properties, classes, function_component, html};

#[derive(Properties, PartialEq)]
pub struct ConversationListProps {
    pub conversations: Vec<ConversationSummary>,
    #[prop_or(None)]
    pub selected: Option<Uuid>,
    pub on_select: Callback<Uuid>,
    pub on_delete: Callback<Uuid>,
}

#[function_component(ConversationList)]
pub fn conversation_list(props: &ConversationListProps) -> Html {
    if props.conversations.is_empty() {
        return html! {
            <div class="p-4 text-sm text-base-content/70">
                {"No conversations yet. Ask the assistant something to begin."}
            </div>
        };
    }

    html! {
        <ul class="divide-y divide-base-300">
            { for props.conversations.iter().map(|summary| {
                let is_selected = props.selected.is_some_and(|id| id == summary.id);
                let id = summary.id;
                let on_select = props.on_select.clone();
                let on_delete = props.on_delete.clone();
                let class = if is_selected {
                    classes!("p-3", "bg-base-300", "cursor-pointer")
                } else {
                    classes!("p-3", "hover:bg-base-200", "cursor-pointer")
                };
                html! {
                    <li
                        class={class}
                        onclick={Callback::from(move |_| on_select.emit(id))}
                    >
                        <div class="flex items-center justify-between">
                            <div class="text-sm font-medium text-base-content">{ summary.title.clone() }</div>
                            <button
                                class="btn btn-ghost btn-xs"
                                type="button"
                                onclick={Callback::from(move |event: yew::MouseEvent| {
                                    event.stop_propagation();
                                    on_delete.emit(id);
                                })}
                            >
                                {"Delete"}
                            </button>
                        </div>
                        <div class="text-xs text-base-content/70 mt-1">
                            { summary.chat_type.label() }
                        </div>
                        <div class="text-xs text-base-content/50 mt-1">
                            { format!("Started {}", summary.created_at.0.format("%Y-%m-%d %H:%M")) }
                        </div>
                    </li>
                }
            })}
        </ul>
    }
}
