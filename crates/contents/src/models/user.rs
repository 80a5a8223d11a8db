//! Users and the per-request principal.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Anonymous user UUID (nil UUID).
pub const ANONYMOUS_USER_ID: Uuid = Uuid::nil();

/// Permission that bypasses every other check.
pub const ADMINISTER_SITE: &str = "administer site";

/// User record as declared in the site file.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    #[serde(default = "Uuid::now_v7")]
    pub id: Uuid,
    pub name: String,
    #[serde(default)]
    pub is_admin: bool,
    #[serde(default)]
    pub permissions: Vec<String>,
}

impl User {
    /// Build the request principal for this user.
    pub fn context(&self) -> UserContext {
        let mut permissions = self.permissions.clone();
        if self.is_admin && !permissions.iter().any(|p| p == ADMINISTER_SITE) {
            permissions.push(ADMINISTER_SITE.to_string());
        }
        UserContext {
            id: self.id,
            name: self.name.clone(),
            authenticated: true,
            permissions,
        }
    }
}

/// Principal of the current request.
///
/// Authentication middleware stores one of these in the request
/// extensions; handlers treat a missing extension as "no principal".
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserContext {
    /// User ID (Uuid::nil() for anonymous).
    pub id: Uuid,
    pub name: String,
    pub authenticated: bool,
    pub permissions: Vec<String>,
}

impl UserContext {
    /// Create context for anonymous user.
    pub fn anonymous() -> Self {
        Self {
            id: ANONYMOUS_USER_ID,
            name: "anonymous".to_string(),
            authenticated: false,
            permissions: Vec::new(),
        }
    }

    /// Create context for authenticated user.
    pub fn authenticated(id: Uuid, name: impl Into<String>, permissions: Vec<String>) -> Self {
        Self {
            id,
            name: name.into(),
            authenticated: true,
            permissions,
        }
    }

    pub fn has_permission(&self, permission: &str) -> bool {
        self.permissions.iter().any(|p| p == permission)
    }

    pub fn is_admin(&self) -> bool {
        self.has_permission(ADMINISTER_SITE)
    }
}

impl Default for UserContext {
    fn default() -> Self {
        Self::anonymous()
    }
}
