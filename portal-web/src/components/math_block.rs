use js_sys::{Array, Function, Promise, Reflect};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::{JsFuture, spawn_local};
use yew::{Html, Properties, function_component, html, use_effect_with, use_node_ref};

#[derive(Properties, PartialEq, Clone)]
pub struct MathBlockProps {
    /// Text that may contain TeX delimiters.
    pub content: String,
    #[prop_or(false)]
    pub inline: bool,
}

/// Renders message text and asks the page-level MathJax bundle to typeset it
/// after mount. Typesetting failures leave the raw text in place.
#[function_component(MathBlock)]
pub fn math_block(props: &MathBlockProps) -> Html {
    let node = use_node_ref();

    {
        let node = node.clone();
        use_effect_with(props.content.clone(), move |_| {
            if let Some(element) = node.cast::<web_sys::Element>() {
                spawn_local(async move {
                    if let Err(err) = typeset(&element).await {
                        log::warn!("MathJax typeset error: {err:?}");
                    }
                });
            }
            || ()
        });
    }

    if props.inline {
        html! { <span ref={node} class="math-inline">{ props.content.clone() }</span> }
    } else {
        html! { <div ref={node} class="math-display">{ props.content.clone() }</div> }
    }
}

async fn typeset(element: &web_sys::Element) -> Result<(), JsValue> {
    let window = web_sys::window().ok_or_else(|| JsValue::from_str("no window"))?;
    let mathjax = Reflect::get(&window, &JsValue::from_str("MathJax"))?;
    if mathjax.is_undefined() {
        return Err(JsValue::from_str("MathJax not loaded yet"));
    }
    let typeset: Function = Reflect::get(&mathjax, &JsValue::from_str("typesetPromise"))?.dyn_into()?;
    let targets = Array::new();
    targets.push(element);
    let promise: Promise = typeset.call1(&mathjax, &targets)?.dyn_into()?;
    JsFuture::from(promise).await?;
    Ok(())
}
