//! Content type registry.
//!
//! Holds the content type definitions declared in the site file and
//! serves them to the admin UI.

use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use parking_lot::RwLock;
use tracing::info;

use crate::models::ContentTypeDefinition;

/// Source of content type definitions.
#[async_trait]
pub trait ContentDefinitionStore: Send + Sync {
    /// List every content type definition.
    async fn list_type_definitions(&self) -> Result<Vec<ContentTypeDefinition>>;
}

/// In-memory registry of content types.
///
/// Definitions keep their registration order; registering a name twice
/// replaces the earlier definition in place.
#[derive(Clone, Default)]
pub struct ContentTypeRegistry {
    types: Arc<RwLock<Vec<ContentTypeDefinition>>>,
}

impl ContentTypeRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry pre-populated with definitions.
    pub fn with_types(defs: impl IntoIterator<Item = ContentTypeDefinition>) -> Self {
        let registry = Self::new();
        for def in defs {
            registry.register(def);
        }
        registry
    }

    /// Register (or replace) a content type definition.
    pub fn register(&self, def: ContentTypeDefinition) {
        let mut types = self.types.write();
        if let Some(existing) = types.iter_mut().find(|t| t.name == def.name) {
            info!(type_name = %def.name, "replaced content type");
            *existing = def;
        } else {
            info!(type_name = %def.name, "registered content type");
            types.push(def);
        }
    }

    /// Get a content type by machine name.
    pub fn get(&self, type_name: &str) -> Option<ContentTypeDefinition> {
        self.types.read().iter().find(|t| t.name == type_name).cloned()
    }

    /// List all content types in registration order.
    pub fn list(&self) -> Vec<ContentTypeDefinition> {
        self.types.read().clone()
    }

    pub fn len(&self) -> usize {
        self.types.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.read().is_empty()
    }
}

#[async_trait]
impl ContentDefinitionStore for ContentTypeRegistry {
    async fn list_type_definitions(&self) -> Result<Vec<ContentTypeDefinition>> {
        Ok(self.list())
    }
}

impl std::fmt::Debug for ContentTypeRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentTypeRegistry")
            .field("types", &self.len())
            .finish()
    }
}
