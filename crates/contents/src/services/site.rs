//! Site definition file.
//!
//! A YAML document declaring the content types, users and interface
//! translations the admin serves:
//!
//! ```yaml
//! languages: [en, fr]
//! content_types:
//!   - name: article
//!     display_name: Article
//!     settings: { listable: true }
//! users:
//!   - name: editor
//!     permissions: ["edit article content"]
//! translations:
//!   fr:
//!     latest: dernière
//! ```

use std::collections::BTreeMap;
use std::path::Path;

use anyhow::{Context, Result, bail};
use serde::Deserialize;

use super::locale::TranslationEntry;
use crate::models::{ContentTypeDefinition, User};

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SiteDefinition {
    /// Interface languages besides the default one.
    pub languages: Vec<String>,
    pub content_types: Vec<ContentTypeDefinition>,
    pub users: Vec<User>,
    /// language → source → translation.
    pub translations: BTreeMap<String, BTreeMap<String, TranslationEntry>>,
}

impl SiteDefinition {
    /// Parse a site definition from YAML text.
    pub fn from_yaml(content: &str) -> Result<Self> {
        let site: SiteDefinition = serde_yml::from_str(content).context("invalid site YAML")?;
        site.validate()?;
        Ok(site)
    }

    /// Read and parse a site definition file.
    pub async fn load(path: &Path) -> Result<Self> {
        let content = tokio::fs::read_to_string(path)
            .await
            .with_context(|| format!("failed to read site file {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("in site file {}", path.display()))
    }

    fn validate(&self) -> Result<()> {
        for def in &self.content_types {
            if def.name.trim().is_empty() {
                bail!("content type with empty name");
            }
        }
        for user in &self.users {
            if user.name.trim().is_empty() {
                bail!("user with empty name");
            }
        }
        Ok(())
    }
}
