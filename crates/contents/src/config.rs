//! Configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port (default: 3000).
    pub port: u16,

    /// Path to the YAML site definition (default: ./site.yml).
    pub site_file: PathBuf,

    /// Directory of template overrides. Built-in templates are used when unset.
    pub template_dir: Option<PathBuf>,

    /// Interface language used when negotiation finds nothing (default: en).
    pub default_language: String,
}

impl Config {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let port = env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .context("PORT must be a valid u16")?;

        let site_file = env::var("SITE_FILE")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./site.yml"));

        let template_dir = env::var("TEMPLATE_DIR")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        let default_language = env::var("DEFAULT_LANGUAGE")
            .map(|v| v.trim().to_lowercase())
            .ok()
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "en".to_string());

        Ok(Self {
            port,
            site_file,
            template_dir,
            default_language,
        })
    }
}
