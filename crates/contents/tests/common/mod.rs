#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Common test utilities for integration tests.
//!
//! Provides in-memory collaborators for the filter box (content type
//! stores, an allow-list authorizer, a translation table) and a
//! [`TestApp`] wrapping the real router.

#![allow(dead_code)]

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use anyhow::{Result, bail};
use async_trait::async_trait;
use axum::Router;
use axum::body::Body;
use axum::http::Request;
use axum::response::Response;
use http_body_util::BodyExt;
use parking_lot::Mutex;
use tower::ServiceExt;
use uuid::Uuid;

use contents_filterbox::content::{ContentDefinitionStore, ContentInstantiator, FilterBox};
use contents_filterbox::models::{ContentItem, ContentTypeDefinition, User, UserContext};
use contents_filterbox::permissions::{AuthorizationService, EDIT_CONTENT};
use contents_filterbox::services::Localizer;
use contents_filterbox::theme::ThemeEngine;
use contents_filterbox::{AppState, routes};

/// Store returning a fixed list of definitions, duplicates included.
pub struct StaticStore(pub Vec<ContentTypeDefinition>);

#[async_trait]
impl ContentDefinitionStore for StaticStore {
    async fn list_type_definitions(&self) -> Result<Vec<ContentTypeDefinition>> {
        Ok(self.0.clone())
    }
}

/// Store that always fails.
pub struct FailingStore;

#[async_trait]
impl ContentDefinitionStore for FailingStore {
    async fn list_type_definitions(&self) -> Result<Vec<ContentTypeDefinition>> {
        bail!("content definition store unavailable")
    }
}

/// Instantiates items of any type.
pub struct AnyItems;

#[async_trait]
impl ContentInstantiator for AnyItems {
    async fn new_item(&self, type_name: &str) -> Result<ContentItem> {
        Ok(ContentItem::new_transient(type_name))
    }
}

/// Grants `EditContent` on the listed types and records every check.
#[derive(Default)]
pub struct AllowList {
    allowed: HashSet<String>,
    fail_on: Option<String>,
    calls: Mutex<Vec<(String, String)>>,
}

impl AllowList {
    pub fn new(allowed: &[&str]) -> Self {
        Self {
            allowed: allowed.iter().map(|s| s.to_string()).collect(),
            ..Default::default()
        }
    }

    /// Fail when asked about this type.
    pub fn failing_on(mut self, type_name: &str) -> Self {
        self.fail_on = Some(type_name.to_string());
        self
    }

    /// (permission, item type) pairs in the order they were checked.
    pub fn calls(&self) -> Vec<(String, String)> {
        self.calls.lock().clone()
    }

    pub fn checked_types(&self) -> Vec<String> {
        self.calls().into_iter().map(|(_, t)| t).collect()
    }
}

#[async_trait]
impl AuthorizationService for AllowList {
    async fn authorize(
        &self,
        _user: &UserContext,
        permission: &str,
        item: &ContentItem,
    ) -> Result<bool> {
        self.calls
            .lock()
            .push((permission.to_string(), item.item_type.clone()));

        if self.fail_on.as_deref() == Some(item.item_type.as_str()) {
            bail!("authorization service unavailable");
        }
        Ok(permission == EDIT_CONTENT && self.allowed.contains(&item.item_type))
    }
}

/// Translation table keyed by (language, source); context is ignored.
#[derive(Default)]
pub struct Translations(pub HashMap<(String, String), String>);

impl Translations {
    pub fn with(mut self, language: &str, source: &str, translation: &str) -> Self {
        self.0.insert(
            (language.to_string(), source.to_string()),
            translation.to_string(),
        );
        self
    }
}

impl Localizer for Translations {
    fn translate(&self, source: &str, _context: &str, language: &str) -> String {
        self.0
            .get(&(language.to_string(), source.to_string()))
            .cloned()
            .unwrap_or_else(|| source.to_string())
    }
}

/// The article/page/secret catalogue plus a non-listable widget type.
pub fn catalogue() -> Vec<ContentTypeDefinition> {
    vec![
        ContentTypeDefinition::new("secret", "Secret").listable(),
        ContentTypeDefinition::new("page", "Basic page").listable(),
        ContentTypeDefinition::new("widget", "Widget"),
        ContentTypeDefinition::new("article", "Article").listable(),
    ]
}

/// Build a filter box over the given store and authorizer.
pub fn filter_box_with(
    store: impl ContentDefinitionStore + 'static,
    authorizer: Arc<AllowList>,
    translations: Translations,
) -> FilterBox {
    FilterBox::new(
        Arc::new(store),
        Arc::new(AnyItems),
        authorizer,
        Arc::new(translations),
    )
}

/// An authenticated editor.
pub fn editor() -> UserContext {
    UserContext::authenticated(
        Uuid::now_v7(),
        "editor",
        vec!["edit article content".to_string()],
    )
}

/// Test application wrapping the real router.
pub struct TestApp {
    router: Router,
    pub state: AppState,
}

impl TestApp {
    /// App over a filter box with fake collaborators.
    pub fn with_filter_box(filter_box: FilterBox, users: Vec<User>) -> Self {
        let theme = ThemeEngine::builtin().expect("built-in templates compile");
        let state = AppState::from_parts(filter_box, users, theme, "en", vec!["fr".to_string()]);
        Self::from_state(state)
    }

    pub fn from_state(state: AppState) -> Self {
        Self {
            router: routes::app(state.clone()),
            state,
        }
    }

    /// Send a request to the test application.
    pub async fn request(&self, request: Request<Body>) -> Response {
        self.router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request")
    }

    /// GET a path, optionally as a named user.
    pub async fn get(&self, path: &str, user: Option<&str>) -> Response {
        let mut builder = Request::get(path);
        if let Some(user) = user {
            builder = builder.header("x-user", user);
        }
        self.request(builder.body(Body::empty()).unwrap()).await
    }
}

/// A site user with the given permissions.
pub fn site_user(name: &str, permissions: &[&str]) -> User {
    User {
        id: Uuid::now_v7(),
        name: name.to_string(),
        is_admin: false,
        permissions: permissions.iter().map(|p| p.to_string()).collect(),
    }
}

/// Collect a response body as a string.
pub async fn body_string(response: Response) -> String {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    String::from_utf8(bytes.to_vec()).unwrap()
}
