//! Content management module.
//!
//! This module provides:
//! - ContentTypeRegistry: Content type definitions declared by the site
//! - ItemFactory: Transient item instantiation for access checks
//! - FilterBox: Filter and sort options for the admin contents list

pub mod filter_box;
mod item_service;
mod type_registry;

pub use filter_box::{FilterBox, FilterViewModel, SelectOption};
pub use item_service::{ContentInstantiator, ItemFactory};
pub use type_registry::{ContentDefinitionStore, ContentTypeRegistry};
