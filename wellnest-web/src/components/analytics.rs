use leptos::*;

use crate::vars::ANALYTICS_SCRIPT;

/// Page-view beacon. Mounted passively; nothing on the page depends on it.
#[component]
pub fn Analytics() -> impl IntoView {
    view! { <script defer src=ANALYTICS_SCRIPT></script> }
}
