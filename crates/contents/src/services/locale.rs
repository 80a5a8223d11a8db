//! Interface string translation.
//!
//! Translations are loaded from the site file at startup and kept in an
//! in-memory map keyed by language, context and source string.

use std::collections::BTreeMap;

use dashmap::DashMap;
use serde::Deserialize;
use tracing::info;

/// Resolves interface strings for a language.
pub trait Localizer: Send + Sync {
    /// Translate `source`, falling back to `source` itself.
    fn translate(&self, source: &str, context: &str, language: &str) -> String;
}

/// A translation as declared in the site file.
///
/// Either a bare string (no context) or a map of context → translation.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TranslationEntry {
    Plain(String),
    Contextual(BTreeMap<String, String>),
}

/// In-memory locale service.
#[derive(Clone, Default)]
pub struct LocaleService {
    /// Key = "language\0context\0source" → translation.
    cache: DashMap<String, String>,
}

impl LocaleService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add or replace a single translation.
    pub fn insert(&self, language: &str, context: &str, source: &str, translation: &str) {
        self.cache
            .insert(cache_key(language, context, source), translation.to_string());
    }

    /// Load a language's translations, returning how many strings were added.
    pub fn load_language(&self, language: &str, entries: &BTreeMap<String, TranslationEntry>) -> usize {
        let mut count = 0usize;
        for (source, entry) in entries {
            match entry {
                TranslationEntry::Plain(translation) => {
                    self.insert(language, "", source, translation);
                    count += 1;
                }
                TranslationEntry::Contextual(by_context) => {
                    for (context, translation) in by_context {
                        self.insert(language, context, source, translation);
                        count += 1;
                    }
                }
            }
        }

        info!(language = %language, count, "loaded locale translations");
        count
    }

    pub fn len(&self) -> usize {
        self.cache.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cache.is_empty()
    }
}

impl Localizer for LocaleService {
    fn translate(&self, source: &str, context: &str, language: &str) -> String {
        if let Some(translation) = self.cache.get(&cache_key(language, context, source)) {
            return translation.clone();
        }

        if !context.is_empty()
            && let Some(translation) = self.cache.get(&cache_key(language, "", source))
        {
            return translation.clone();
        }

        source.to_string()
    }
}

impl std::fmt::Debug for LocaleService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LocaleService")
            .field("cache_size", &self.cache.len())
            .finish()
    }
}

// NUL separators keep "12:00"-style sources from colliding with contexts.
// Language tags are case-insensitive: "pt-BR" and "pt-br" share entries.
fn cache_key(language: &str, context: &str, source: &str) -> String {
    let language = language.to_lowercase();
    format!("{language}\0{context}\0{source}")
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::expect_used)]
mod tests {
    use super::*;

    #[test]
    fn falls_back_to_source() {
        let locale = LocaleService::new();
        assert_eq!(locale.translate("latest", "contents", "fr"), "latest");
    }

    #[test]
    fn exact_context_wins() {
        let locale = LocaleService::new();
        locale.insert("fr", "", "published", "publié");
        locale.insert("fr", "contents", "published", "publiés");
        assert_eq!(locale.translate("published", "contents", "fr"), "publiés");
    }

    #[test]
    fn context_falls_back_to_empty_context() {
        let locale = LocaleService::new();
        locale.insert("fr", "", "Descending", "Décroissant");
        assert_eq!(locale.translate("Descending", "contents", "fr"), "Décroissant");
        assert_eq!(locale.translate("Descending", "contents", "de"), "Descending");
    }

    #[test]
    fn language_tags_ignore_case() {
        let locale = LocaleService::new();
        locale.insert("pt-BR", "", "latest", "mais recente");
        assert_eq!(locale.translate("latest", "contents", "pt-br"), "mais recente");
        assert_eq!(locale.translate("latest", "contents", "PT-BR"), "mais recente");
    }

    #[test]
    fn load_language_from_yaml() {
        let yaml = r#"
latest: dernière
published:
  contents: publiés
  "": publié
"#;
        let entries: BTreeMap<String, TranslationEntry> = serde_yml::from_str(yaml).unwrap();
        let locale = LocaleService::new();
        assert_eq!(locale.load_language("fr", &entries), 3);
        assert_eq!(locale.translate("latest", "contents", "fr"), "dernière");
        assert_eq!(locale.translate("published", "contents", "fr"), "publiés");
        assert_eq!(locale.translate("published", "", "fr"), "publié");
    }

    #[test]
    fn cache_key_no_collision_with_colons() {
        assert_ne!(cache_key("en", "", "12:00"), cache_key("en", "12", "00"));
    }
}
