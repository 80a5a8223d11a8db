//! Filter box for the admin contents list.
//!
//! Builds the drop-down option lists shown above the contents list:
//! status, sort field, sort direction and content type. The content type
//! list only offers types the current user may edit.

use std::collections::HashSet;
use std::future::Future;
use std::sync::Arc;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use super::item_service::ContentInstantiator;
use super::type_registry::ContentDefinitionStore;
use crate::models::{
    ContentOptions, ContentTypeDefinition, ContentsOrder, ContentsStatus, SortDirection,
    UserContext,
};
use crate::permissions::{AuthorizationService, EDIT_CONTENT};
use crate::services::locale::Localizer;

/// Translation context for filter box labels.
pub const LOCALE_CONTEXT: &str = "contents";

/// One entry of a drop-down list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SelectOption {
    pub text: String,
    pub value: String,
    pub selected: bool,
}

impl SelectOption {
    pub fn new(text: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            value: value.into(),
            selected: false,
        }
    }
}

/// Everything the filter box template needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FilterViewModel {
    pub options: ContentOptions,
    pub content_sorts: Vec<SelectOption>,
    pub sort_directions: Vec<SelectOption>,
    pub content_statuses: Vec<SelectOption>,
    pub content_types: Vec<SelectOption>,
}

/// Mark the first option whose value equals `selected`.
///
/// Returns the index of the selected option, or `None` (leaving every
/// option unselected) when nothing matches.
pub fn select_by_value(options: &mut [SelectOption], selected: &str) -> Option<usize> {
    let index = options.iter().position(|o| o.value == selected)?;
    options[index].selected = true;
    Some(index)
}

/// Keep the definitions for which `is_authorized` returns true.
///
/// The predicate is awaited once per definition, in input order; the
/// first error aborts the whole pass.
pub async fn retain_authorized<F, Fut>(
    definitions: Vec<ContentTypeDefinition>,
    mut is_authorized: F,
) -> Result<Vec<ContentTypeDefinition>>
where
    F: FnMut(&ContentTypeDefinition) -> Fut,
    Fut: Future<Output = Result<bool>>,
{
    let mut retained = Vec::with_capacity(definitions.len());
    for def in definitions {
        if is_authorized(&def).await? {
            retained.push(def);
        }
    }
    Ok(retained)
}

fn status_label(status: ContentsStatus) -> &'static str {
    match status {
        ContentsStatus::Latest => "latest",
        ContentsStatus::Owner => "owned by me",
        ContentsStatus::Published => "published",
        ContentsStatus::Draft => "unpublished",
        ContentsStatus::AllVersions => "all versions",
    }
}

fn order_label(order: ContentsOrder) -> &'static str {
    match order {
        ContentsOrder::Created => "recently created",
        ContentsOrder::Modified => "recently modified",
        ContentsOrder::Published => "recently published",
    }
}

// Capitalised unlike the other labels; existing translations key on it.
fn direction_label(direction: SortDirection) -> &'static str {
    match direction {
        SortDirection::Descending => "Descending",
        SortDirection::Ascending => "Ascending",
    }
}

/// Builds [`FilterViewModel`]s from listing options and the current user.
#[derive(Clone)]
pub struct FilterBox {
    types: Arc<dyn ContentDefinitionStore>,
    items: Arc<dyn ContentInstantiator>,
    authorizer: Arc<dyn AuthorizationService>,
    locale: Arc<dyn Localizer>,
}

impl FilterBox {
    pub fn new(
        types: Arc<dyn ContentDefinitionStore>,
        items: Arc<dyn ContentInstantiator>,
        authorizer: Arc<dyn AuthorizationService>,
        locale: Arc<dyn Localizer>,
    ) -> Self {
        Self {
            types,
            items,
            authorizer,
            locale,
        }
    }

    /// Build the filter box view model.
    ///
    /// Returns `Ok(None)` when there is nothing to render: no options, or
    /// no authenticated principal. Failures of the content type store, the
    /// item factory or the authorizer are returned as errors.
    pub async fn build(
        &self,
        options: Option<&ContentOptions>,
        principal: Option<&UserContext>,
        language: &str,
    ) -> Result<Option<FilterViewModel>> {
        let Some(options) = options else {
            return Ok(None);
        };
        let Some(principal) = principal.filter(|p| p.authenticated) else {
            return Ok(None);
        };

        let content_types = self
            .content_type_options(options.selected_type(), principal, language)
            .await?;

        Ok(Some(FilterViewModel {
            options: options.clone(),
            content_sorts: self.content_sort_options(options.order_by, language),
            sort_directions: self.sort_direction_options(options.sort_direction, language),
            content_statuses: self.content_status_options(options.contents_status, language),
            content_types,
        }))
    }

    /// Status options: latest, owned by me, published, unpublished, all versions.
    pub fn content_status_options(
        &self,
        selected: ContentsStatus,
        language: &str,
    ) -> Vec<SelectOption> {
        self.fixed_options(
            ContentsStatus::ALL.map(|s| (status_label(s), s.as_str())),
            selected.as_str(),
            language,
        )
    }

    /// Sort field options: created, modified, published.
    pub fn content_sort_options(&self, selected: ContentsOrder, language: &str) -> Vec<SelectOption> {
        self.fixed_options(
            ContentsOrder::ALL.map(|o| (order_label(o), o.as_str())),
            selected.as_str(),
            language,
        )
    }

    /// Sort direction options, descending first.
    pub fn sort_direction_options(
        &self,
        selected: SortDirection,
        language: &str,
    ) -> Vec<SelectOption> {
        self.fixed_options(
            SortDirection::ALL.map(|d| (direction_label(d), d.as_str())),
            selected.as_str(),
            language,
        )
    }

    /// Content type options the principal may edit, sorted by machine name
    /// and preceded by an "All content types" entry.
    pub async fn content_type_options(
        &self,
        selected_type: Option<&str>,
        principal: &UserContext,
        language: &str,
    ) -> Result<Vec<SelectOption>> {
        let selected_type = selected_type.filter(|t| !t.is_empty());

        let mut listable = self.listable_types(principal).await?;
        // Byte order on the machine name: uppercase sorts before lowercase.
        listable.sort_by(|a, b| a.name.cmp(&b.name));

        let mut all = SelectOption::new(self.t("All content types", language), "");
        all.selected = selected_type.is_none();

        let mut options = Vec::with_capacity(listable.len() + 1);
        options.push(all);
        options.extend(listable.into_iter().map(|def| SelectOption {
            selected: selected_type == Some(def.name.as_str()),
            text: def.display_name,
            value: def.name,
        }));

        Ok(options)
    }

    /// Listable types for which the principal holds the edit permission.
    async fn listable_types(&self, principal: &UserContext) -> Result<Vec<ContentTypeDefinition>> {
        let definitions = self
            .types
            .list_type_definitions()
            .await
            .context("failed to list content type definitions")?;

        let mut seen = HashSet::new();
        let candidates: Vec<_> = definitions
            .into_iter()
            .filter(|def| {
                let first = seen.insert(def.name.clone());
                if !first {
                    debug!(type_name = %def.name, "skipping duplicate content type definition");
                }
                first
            })
            .filter(|def| def.settings.listable)
            .collect();

        let retained = retain_authorized(candidates, |def| {
            let type_name = def.name.clone();
            async move {
                let item = self
                    .items
                    .new_item(&type_name)
                    .await
                    .with_context(|| format!("failed to instantiate {type_name}"))?;
                self.authorizer
                    .authorize(principal, EDIT_CONTENT, &item)
                    .await
                    .with_context(|| format!("failed to authorize {EDIT_CONTENT} on {type_name}"))
            }
        })
        .await?;

        debug!(
            user = %principal.name,
            count = retained.len(),
            "resolved editable content types"
        );
        Ok(retained)
    }

    fn fixed_options<const N: usize>(
        &self,
        entries: [(&str, &str); N],
        selected: &str,
        language: &str,
    ) -> Vec<SelectOption> {
        let mut options: Vec<_> = entries
            .into_iter()
            .map(|(label, value)| SelectOption::new(self.t(label, language), value))
            .collect();
        select_by_value(&mut options, selected);
        options
    }

    /// Translate a filter box label.
    pub fn t(&self, source: &str, language: &str) -> String {
        self.locale.translate(source, LOCALE_CONTEXT, language)
    }
}

impl std::fmt::Debug for FilterBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FilterBox").finish_non_exhaustive()
    }
}
