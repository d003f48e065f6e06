//! Record models for the four panel collections.

mod brand;
mod config_entry;
mod representative;
mod request;

pub use brand::Brand;
pub use config_entry::PanelConfigEntry;
pub use representative::Representative;
pub use request::MessageRequest;
