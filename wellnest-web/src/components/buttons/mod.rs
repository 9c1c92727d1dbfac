mod click_button;
mod form_button;
mod pill_options;

pub use click_button::ClickButton;
pub use form_button::FormButton;
pub use pill_options::PillOptions;
