mod api;
mod app;
mod auth;
mod components;
mod config;
mod pages;
mod routes;
#[cfg(test)]
mod routes_test;
mod stores;

use app::App;
use yew::Renderer;
use yew::{Html, function_component, html};
use yewdux::YewduxRoot;

#[function_component(Root)]
fn root() -> Html {
    html! {
        <YewduxRoot>
            <App />
        </YewduxRoot>
    }
}

fn main() {
    // Surface full panic payloads in the browser console.
    std::panic::set_hook(Box::new(|info| {
        let message = info
            .payload()
            .downcast_ref::<String>()
            .cloned()
            .or_else(|| info.payload().downcast_ref::<&str>().map(|s| (*s).to_string()))
            .unwrap_or_else(|| "unknown panic".to_string());
        let location = info
            .location()
            .map(|location| format!(" at {}:{}:{}", location.file(), location.line(), location.column()))
            .unwrap_or_default();
        web_sys::console::error_1(&format!("Panic: {message}{location}").into());
    }));

    web_sys::console::log_1(&"Starting StudyPortal".into());

    Renderer::<Root>::new().render();
}
