use shared::models::{ChatMessage, MessageRole};
use yew::{Html, Properties, classes, function_component, html};

use super::MathBlock;

#[derive(Properties, PartialEq, Clone)]
pub struct MessageNodeProps {
    pub message: ChatMessage,
}

const fn role_classes(role: &MessageRole) -> &'static str {
    match role {
        MessageRole::User => "bg-primary text-primary-content",
        MessageRole::Assistant => "bg-base-200 text-base-content",
    }
}

#[function_component(MessageNode)]
pub fn message_node(props: &MessageNodeProps) -> Html {
    let bubble = classes!(
        "rounded-xl",
        "px-4",
        "py-3",
        "shadow-sm",
        role_classes(&props.message.sender)
    );

    html! {
        <div class="mb-3 space-y-1">
            <div class="flex items-center gap-2 text-xs text-base-content/70">
                <span class="font-semibold">{ props.message.sender.label() }</span>
            </div>
            <div class={bubble}>
                <MathBlock content={props.message.content.clone()} />
            </div>
        </div>
    }
}
