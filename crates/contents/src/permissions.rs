//! Permission checks against content items.

use anyhow::Result;
use async_trait::async_trait;
use tracing::debug;

use crate::models::{ContentItem, UserContext};

/// Permission to edit a content item.
pub const EDIT_CONTENT: &str = "EditContent";

/// Authorization decisions about a principal acting on a content item.
#[async_trait]
pub trait AuthorizationService: Send + Sync {
    async fn authorize(
        &self,
        user: &UserContext,
        permission: &str,
        item: &ContentItem,
    ) -> Result<bool>;
}

/// Role-style permission service.
///
/// Users carry permission strings such as `edit any content` or
/// `edit article content`. Checks are resolved against those strings:
///
/// - `administer site` grants everything.
/// - [`EDIT_CONTENT`] is granted by `edit any content`, `edit {type} content`,
///   or, for items the user authored, `edit own content` / `edit own {type} content`.
/// - Any other permission name must be held verbatim.
#[derive(Debug, Clone, Default)]
pub struct PermissionService;

impl PermissionService {
    pub fn new() -> Self {
        Self
    }

    fn can_edit(user: &UserContext, item: &ContentItem) -> bool {
        let item_type = &item.item_type;
        if user.has_permission("edit any content")
            || user.has_permission(&format!("edit {item_type} content"))
        {
            return true;
        }

        item.is_owned_by(user.id)
            && (user.has_permission("edit own content")
                || user.has_permission(&format!("edit own {item_type} content")))
    }
}

#[async_trait]
impl AuthorizationService for PermissionService {
    async fn authorize(
        &self,
        user: &UserContext,
        permission: &str,
        item: &ContentItem,
    ) -> Result<bool> {
        if !user.authenticated {
            return Ok(false);
        }

        // Admins have all permissions
        if user.is_admin() {
            return Ok(true);
        }

        let granted = match permission {
            EDIT_CONTENT => Self::can_edit(user, item),
            other => user.has_permission(other),
        };

        debug!(
            user = %user.name,
            permission = %permission,
            item_type = %item.item_type,
            granted,
            "authorization check"
        );
        Ok(granted)
    }
}
