//! Content type definitions.
//!
//! Content types describe the kinds of items the admin can manage. Only
//! the parts the contents list needs are modelled here.

use serde::{Deserialize, Serialize};

/// Content type record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentTypeDefinition {
    /// Machine name (e.g., "article", "page").
    pub name: String,

    /// Human-readable label.
    pub display_name: String,

    /// Type settings.
    #[serde(default)]
    pub settings: ContentTypeSettings,
}

/// Admin-facing settings of a content type.
///
/// Missing keys are treated as `false`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContentTypeSettings {
    /// Whether items of this type appear in the admin contents list.
    pub listable: bool,
}

impl ContentTypeDefinition {
    /// Create a definition with default (non-listable) settings.
    pub fn new(name: impl Into<String>, display_name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            display_name: display_name.into(),
            settings: ContentTypeSettings::default(),
        }
    }

    /// Mark this type as listable.
    pub fn listable(mut self) -> Self {
        self.settings.listable = true;
        self
    }
}
