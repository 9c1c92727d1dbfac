use std::rc::Rc;

use leptos::*;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement};
use wellnest::{
    PageOptions, PostgrestSink, SinkConfig, SubmissionWorkflow,
};

use crate::api::FetchTransport;
use crate::base::state::{PageContext, PageState};
use crate::base::timer::BrowserTimer;

/// Fresh element attached to the document body to mount a view into.
pub fn container() -> HtmlElement {
    let document = document();
    let container = document
        .create_element("div")
        .unwrap()
        .unchecked_into::<HtmlElement>();
    document.body().unwrap().append_child(&container).unwrap();
    container
}

pub fn click(container: &HtmlElement, selector: &str) {
    container
        .query_selector(selector)
        .unwrap()
        .unwrap_or_else(|| panic!("no element matches {}", selector))
        .unchecked_into::<HtmlElement>()
        .click();
}

pub fn select_all(container: &HtmlElement, selector: &str) -> Vec<Element> {
    let nodes = container.query_selector_all(selector).unwrap();
    (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .map(|node| node.unchecked_into::<Element>())
        .collect()
}

/// Page context whose sink is never reached unless a form is submitted.
pub fn page_context(page: PageState) -> PageContext {
    let config = SinkConfig::new("https://test.supabase.co", "anon").unwrap();
    let sink = PostgrestSink::new(config, FetchTransport::new());
    PageContext {
        state: page,
        workflow: Rc::new(SubmissionWorkflow::new(
            sink,
            BrowserTimer,
            PageOptions::default(),
        )),
    }
}
