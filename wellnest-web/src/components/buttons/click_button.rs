use leptos::ev::MouseEvent;
use leptos::*;

#[component]
pub fn ClickButton<F>(
    text: &'static str,
    style_class: &'static str,
    on_click: F,
) -> impl IntoView
where
    F: Fn(MouseEvent) + 'static,
{
    view! {
        <button type="button" class=style_class on:click=on_click>
            {text}
        </button>
    }
}
