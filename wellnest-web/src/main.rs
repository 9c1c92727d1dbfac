use std::panic::{self, PanicHookInfo};
use std::rc::Rc;

use leptos::{mount_to_body, view};
use wellnest::{PageOptions, PostgrestSink, SinkConfig, SubmissionWorkflow};
use wellnest_web::app::App;
use wellnest_web::{build_time_var, BrowserTimer, FetchTransport};

fn custom_panic_hook(info: &PanicHookInfo) {
    // print panic message only - not entire stack trace
    let message = info.to_string();
    log::error!("{}", message);
}

pub fn main() {
    _ = console_log::init_with_level(log::Level::Debug);
    panic::set_hook(Box::new(custom_panic_hook));

    // refuse to render anything without credentials
    let config = match SinkConfig::from_lookup(build_time_var) {
        Ok(config) => config,
        Err(err) => {
            log::error!("{}", err);
            wasm_bindgen::throw_str(&err.to_string());
        }
    };
    log::debug!("Submitting leads to {}", config.url());

    let sink = PostgrestSink::new(config, FetchTransport::new());
    let workflow = Rc::new(SubmissionWorkflow::new(
        sink,
        BrowserTimer,
        PageOptions::default(),
    ));
    mount_to_body(move || view! { <App workflow /> })
}
