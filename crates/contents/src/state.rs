//! Application state shared across all handlers.

use std::sync::Arc;

use anyhow::{Context, Result};
use dashmap::DashMap;
use tracing::info;

use crate::config::Config;
use crate::content::{ContentTypeRegistry, FilterBox, ItemFactory};
use crate::models::User;
use crate::permissions::PermissionService;
use crate::services::{LocaleService, SiteDefinition};
use crate::theme::ThemeEngine;

/// Shared application state.
///
/// Wrapped in Arc internally so Clone is cheap.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    /// Filter box builder with its collaborators.
    filter_box: FilterBox,

    /// Known users by name.
    users: DashMap<String, User>,

    theme: ThemeEngine,

    default_language: String,

    /// Languages accepted by negotiation, default language included.
    known_languages: Vec<String>,
}

impl AppState {
    /// Build state from configuration: reads the site file and templates.
    pub async fn new(config: &Config) -> Result<Self> {
        let site = SiteDefinition::load(&config.site_file)
            .await
            .context("failed to load site definition")?;

        let theme = match &config.template_dir {
            Some(dir) => ThemeEngine::new(dir)?,
            None => ThemeEngine::builtin()?,
        };

        Ok(Self::from_site(site, theme, &config.default_language))
    }

    /// Wire the default services for a parsed site definition.
    pub fn from_site(site: SiteDefinition, theme: ThemeEngine, default_language: &str) -> Self {
        let types = ContentTypeRegistry::with_types(site.content_types);

        let locale = LocaleService::new();
        for (language, entries) in &site.translations {
            locale.load_language(language, entries);
        }

        let filter_box = FilterBox::new(
            Arc::new(types.clone()),
            Arc::new(ItemFactory::new(types.clone())),
            Arc::new(PermissionService::new()),
            Arc::new(locale),
        );

        let state = Self::from_parts(
            filter_box,
            site.users,
            theme,
            default_language,
            site.languages,
        );

        info!(
            content_types = types.len(),
            users = state.inner.users.len(),
            languages = ?state.known_languages(),
            "site loaded"
        );
        state
    }

    /// Assemble state from already-built parts.
    pub fn from_parts(
        filter_box: FilterBox,
        users: Vec<User>,
        theme: ThemeEngine,
        default_language: &str,
        languages: Vec<String>,
    ) -> Self {
        let default_language = default_language.to_lowercase();
        let mut known_languages = vec![default_language.clone()];
        for language in languages {
            let language = language.to_lowercase();
            if !known_languages.contains(&language) {
                known_languages.push(language);
            }
        }

        let users = users.into_iter().map(|u| (u.name.clone(), u)).collect();

        Self {
            inner: Arc::new(AppStateInner {
                filter_box,
                users,
                theme,
                default_language,
                known_languages,
            }),
        }
    }

    pub fn filter_box(&self) -> &FilterBox {
        &self.inner.filter_box
    }

    pub fn theme(&self) -> &ThemeEngine {
        &self.inner.theme
    }

    /// Look up a user by name.
    pub fn find_user(&self, name: &str) -> Option<User> {
        self.inner.users.get(name).map(|u| u.clone())
    }

    pub fn default_language(&self) -> &str {
        &self.inner.default_language
    }

    pub fn known_languages(&self) -> &[String] {
        &self.inner.known_languages
    }

    pub fn user_count(&self) -> usize {
        self.inner.users.len()
    }
}
