//! Theme engine and template rendering.

mod engine;

pub use engine::{FILTER_BOX_TEMPLATE, ThemeEngine};
