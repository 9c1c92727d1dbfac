use leptos::*;
use wellnest::Feedback;

#[component]
pub fn SubmissionStatusView(
    #[prop(into)] feedback: Signal<Option<Feedback>>,
) -> impl IntoView {
    move || {
        feedback.get().map(|feedback| {
            let class = if feedback.is_error() {
                "submit-message error"
            } else {
                "submit-message success"
            };
            view! {
                <div class=class>
                    {feedback.message().to_string()}
                </div>
            }
        })
    }
}
