use yew::{Html, function_component, html};

#[function_component(Loading)]
pub fn loading() -> Html {
    html! {
        <div class="flex items-center justify-center min-h-screen">
            <div class="flex flex-col items-center gap-3">
                <span class="text-xl font-semibold">{"StudyPortal"}</span>
                <span class="loading loading-dots loading-md"></span>
            </div>
        </div>
    }
}
