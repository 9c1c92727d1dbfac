pub(crate) mod api;
pub(crate) mod base;
pub(crate) mod components;
pub(crate) mod vars;

pub mod app;

pub use api::FetchTransport;
pub use base::state::{PageContext, PageState, PageWorkflow};
pub use base::timer::{BrowserTimer, ScheduledTask};
pub use vars::build_time_var;
