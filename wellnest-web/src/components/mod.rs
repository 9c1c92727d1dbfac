mod analytics;
mod categories;
mod landing;
mod modal;
#[cfg(test)]
mod testing;

pub mod buttons;
pub mod forms;

pub use analytics::Analytics;
pub use landing::LandingPage;
pub use modal::Modal;
