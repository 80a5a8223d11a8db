//! Item instantiation.
//!
//! Builds transient items of registered content types. Nothing created
//! here is persisted.

use anyhow::{Result, bail};
use async_trait::async_trait;
use tracing::debug;

use super::type_registry::ContentTypeRegistry;
use crate::models::ContentItem;

/// Creates new, unsaved content items.
#[async_trait]
pub trait ContentInstantiator: Send + Sync {
    async fn new_item(&self, type_name: &str) -> Result<ContentItem>;
}

/// Instantiates items of types known to a [`ContentTypeRegistry`].
#[derive(Debug, Clone)]
pub struct ItemFactory {
    types: ContentTypeRegistry,
}

impl ItemFactory {
    pub fn new(types: ContentTypeRegistry) -> Self {
        Self { types }
    }
}

#[async_trait]
impl ContentInstantiator for ItemFactory {
    async fn new_item(&self, type_name: &str) -> Result<ContentItem> {
        let Some(def) = self.types.get(type_name) else {
            bail!("unknown content type: {type_name}");
        };

        let item = ContentItem::new_transient(def.name);
        debug!(item_id = %item.id, item_type = %type_name, "instantiated transient item");
        Ok(item)
    }
}
