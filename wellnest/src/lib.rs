pub(crate) mod config;
pub(crate) mod error;
pub(crate) mod http;
pub(crate) mod lead;
pub(crate) mod options;
pub(crate) mod sink;
pub(crate) mod state;
pub(crate) mod workflow;

pub use config::{SinkConfig, SUPABASE_ANON_KEY_KEY, SUPABASE_URL_KEY};
pub use error::{
    ConfigError, SinkError, SubmissionError, SUBMIT_FAILED_MESSAGE,
};
pub use lead::{
    UsageFrequency, UserForm, UserFormEdit, UserSubmission, UsesSimilar,
    VendorForm, VendorFormEdit, VendorSubmission,
};
pub use options::{FeedbackStyle, PageOptions};
pub use sink::{DataSink, PostgrestError, PostgrestSink, Table};
pub use state::{
    CloseTicket, Feedback, FormPhase, LandingState, ModalKind, Outcome,
    SUCCESS_MESSAGE,
};
pub use workflow::{StateCell, SubmissionWorkflow, SubmitOutcome, Timer};

// transport seam; the browser build plugs its fetch client in here
pub mod external {
    pub use crate::http::{
        HttpClientError, HttpClientResponse, HttpClientResult, HttpRequest,
        HttpTransport,
    };
}
pub use external::*;
