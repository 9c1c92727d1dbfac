use leptos::*;

/// Mutually exclusive choices rendered as pill-shaped buttons. Exactly one
/// option carries the `active` class.
#[component]
pub fn PillOptions<T>(
    options: Vec<(T, &'static str)>,
    #[prop(into)] selected: Signal<T>,
    #[prop(into)] on_select: Callback<T>,
    #[prop(into)] disabled: Signal<bool>,
) -> impl IntoView
where
    T: Copy + PartialEq + 'static,
{
    view! {
        <div class="pill-options">
            {options
                .into_iter()
                .map(|(value, label)| {
                    view! {
                        <button
                            type="button"
                            class="pill"
                            class:active=move || selected.get() == value
                            disabled=move || disabled.get()
                            on:click=move |_| on_select.call(value)
                        >
                            {label}
                        </button>
                    }
                })
                .collect_view()}
        </div>
    }
}
