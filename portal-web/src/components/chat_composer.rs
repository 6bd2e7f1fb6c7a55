use web_sys::HtmlTextAreaElement;
use yew::{Callback, Html, Properties, TargetCast, classes, function_component, html};

#[derive(Properties, PartialEq, Clone)]
pub struct ChatComposerProps {
    pub text: String,
    pub on_text_change: Callback<String>,
    pub on_submit: Callback<()>,
    #[prop_or(false)]
    pub disabled: bool,
    #[prop_or_default]
    pub placeholder: String,
}

#[function_component(ChatComposer)]
pub fn chat_composer(props: &ChatComposerProps) -> Html {
    let on_change = {
        let on_text_change = props.on_text_change.clone();
        Callback::from(move |event: yew::events::InputEvent| {
            let target: HtmlTextAreaElement = event.target_unchecked_into();
            on_text_change.emit(target.value());
        })
    };

    let on_keydown = {
        let on_submit = props.on_submit.clone();
        let disabled = props.disabled;
        Callback::from(move |event: yew::events::KeyboardEvent| {
            if event.key() == "Enter" && !event.shift_key() && !disabled {
                event.prevent_default();
                on_submit.emit(());
            }
        })
    };

    let on_submit = {
        let on_submit = props.on_submit.clone();
        Callback::from(move |event: yew::events::SubmitEvent| {
            event.prevent_default();
            on_submit.emit(());
        })
    };

    html! {
        <form class="space-y-3" onsubmit={on_submit}>
            <textarea
                class={classes!("textarea", "textarea-bordered", "w-full", "min-h-[4rem]")}
                placeholder={props.placeholder.clone()}
                value={props.text.clone()}
                oninput={on_change}
                onkeydown={on_keydown}
                disabled={props.disabled}
            />
            <div class="flex items-center justify-end">
                <button
                    class="btn btn-primary"
                    type="submit"
                    disabled={props.disabled || props.text.trim().is_empty()}
                >
                    {"Send"}
                </button>
            </div>
        </form>
    }
}
