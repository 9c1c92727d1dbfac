use leptos::ev::MouseEvent;
use leptos::*;

/// Overlay with a centred dialog body. Clicking the overlay closes it;
/// clicks inside the body do not reach the overlay.
#[component]
pub fn Modal(
    title: &'static str,
    #[prop(into)] on_close: Callback<()>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="modal-overlay" on:click=move |_| on_close.call(())>
            <div
                class="modal"
                role="dialog"
                aria-modal="true"
                on:click=|ev: MouseEvent| ev.stop_propagation()
            >
                <div class="modal-header">
                    <h3>{title}</h3>
                    <button
                        type="button"
                        class="close-btn"
                        aria-label="Close"
                        on:click=move |_| on_close.call(())
                    >
                        "×"
                    </button>
                </div>
                {children()}
            </div>
        </div>
    }
}
