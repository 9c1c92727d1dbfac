mod feedback_dialog;
mod submission_status_view;
mod text_input;
mod user_form;
mod vendor_form;

pub use feedback_dialog::FeedbackDialog;
pub use submission_status_view::SubmissionStatusView;
pub use text_input::TextInput;
pub use user_form::UserSignupForm;
pub use vendor_form::VendorSignupForm;
