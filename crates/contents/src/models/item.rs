//! Content item model.
//!
//! Only transient items are built here: the filter box needs an item of a
//! given type as the subject of an authorization check, never a stored one.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Item publication status: unpublished.
pub const STATUS_DRAFT: i16 = 0;

/// Content item record.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ContentItem {
    pub id: Uuid,
    pub item_type: String,
    /// Author; `None` until the item is saved by someone.
    pub author_id: Option<Uuid>,
    pub status: i16,
    pub created: DateTime<Utc>,
}

impl ContentItem {
    /// Build a new, unsaved item of the given type.
    pub fn new_transient(item_type: impl Into<String>) -> Self {
        Self {
            id: Uuid::now_v7(),
            item_type: item_type.into(),
            author_id: None,
            status: STATUS_DRAFT,
            created: Utc::now(),
        }
    }

    /// Whether the given user authored this item.
    pub fn is_owned_by(&self, user_id: Uuid) -> bool {
        self.author_id == Some(user_id)
    }
}
