//! HTTP middleware components.
//!
//! Resolves the request principal and interface language.

pub mod language;
pub mod principal;

pub use language::{ResolvedLanguage, negotiate_language};
pub use principal::{USER_HEADER, resolve_principal};
