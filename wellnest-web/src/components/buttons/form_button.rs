use leptos::*;

const SUBMIT_TEXT: &str = "Submit";
const SUBMITTING_TEXT: &str = "Submitting...";

#[derive(Clone)]
pub struct FormButton {
    text: String,
    busy_text: String,
}

impl Default for FormButton {
    fn default() -> Self {
        Self::new(None)
    }
}

impl FormButton {
    pub fn new(text: Option<&str>) -> Self {
        Self {
            text: text.unwrap_or(SUBMIT_TEXT).to_string(),
            busy_text: SUBMITTING_TEXT.to_string(),
        }
    }

    pub fn text(&self, busy: bool) -> String {
        if busy {
            self.busy_text.clone()
        } else {
            self.text.clone()
        }
    }

    pub fn button_class(&self, busy: bool) -> String {
        if busy {
            "submit-btn submitting".to_string()
        } else {
            "submit-btn".to_string()
        }
    }

    pub fn into_view(self, busy: Signal<bool>) -> impl IntoView {
        let button = self.clone();
        view! {
            <button
                type="submit"
                class=move || button.button_class(busy.get())
                disabled=move || busy.get()
            >
                {move || self.text(busy.get())}
            </button>
        }
        .into_view()
    }
}
