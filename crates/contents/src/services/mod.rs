//! Supporting services.

pub mod locale;
pub mod site;

pub use locale::{LocaleService, Localizer};
pub use site::SiteDefinition;
