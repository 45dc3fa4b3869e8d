//! Configuration file schema for hintcheck.
//!
//! The config is optional. Every field has a default, so an empty file and a
//! missing file behave the same.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::language::LanguageId;

/// Default config file names to search for.
pub const DEFAULT_CONFIG_NAMES: &[&str] = &["hintcheck.yaml", ".hintcheck.yaml"];

/// Output formats accepted in the config and on the command line.
pub const FORMATS: &[&str] = &["pretty", "json"];

/// Top-level config definition.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
pub struct Config {
    #[serde(default)]
    pub version: String,
    /// Language used when none is given and none can be inferred (default: python)
    #[serde(default)]
    pub default_language: Option<LanguageId>,
    /// "pretty" (default) or "json"
    #[serde(default)]
    pub format: Option<String>,
    /// Extra file extension to language mappings, e.g. `pyw: python`
    #[serde(default)]
    pub extensions: BTreeMap<String, LanguageId>,
    /// Glob patterns for paths to skip when scanning directories
    #[serde(default)]
    pub excluded_paths: Vec<String>,
}

impl Config {
    /// Parse a config from a YAML file.
    pub fn parse_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        Self::parse_str(&content)
    }

    /// Parse a config from YAML text. Blank text yields the defaults.
    ///
    /// Extension keys are lowercased, matching how paths are looked up.
    pub fn parse_str(content: &str) -> anyhow::Result<Self> {
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        let mut config: Config = serde_yaml::from_str(content)?;
        config.extensions = config
            .extensions
            .into_iter()
            .map(|(ext, lang)| (ext.to_lowercase(), lang))
            .collect();
        Ok(config)
    }

    /// Returns the fallback language (defaults to python).
    pub fn default_language(&self) -> LanguageId {
        self.default_language.unwrap_or(LanguageId::Python)
    }

    /// Returns the output format (defaults to "pretty").
    pub fn get_format(&self) -> &str {
        self.format.as_deref().unwrap_or("pretty")
    }

    /// Determine a file's language from its extension.
    ///
    /// Config mappings take precedence over the built-in table.
    pub fn language_for_path(&self, path: &Path) -> Option<LanguageId> {
        let ext = path.extension().and_then(|e| e.to_str())?.to_lowercase();
        self.extensions
            .get(&ext)
            .copied()
            .or_else(|| LanguageId::from_extension(&ext))
    }

    /// Check if a path should be excluded based on excluded_paths patterns.
    pub fn is_path_excluded(&self, path: &Path) -> bool {
        if self.excluded_paths.is_empty() {
            return false;
        }

        let path_str = path.to_string_lossy();

        for pattern in &self.excluded_paths {
            if let Ok(glob) = globset::Glob::new(pattern) {
                if glob.compile_matcher().is_match(&*path_str) {
                    return true;
                }
            }
        }
        false
    }
}

/// Find a config file in `dir`, if one exists.
pub fn discover(dir: &Path) -> Option<PathBuf> {
    DEFAULT_CONFIG_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.is_file())
}

/// Validate a parsed config.
pub fn validate(config: &Config) -> anyhow::Result<()> {
    if let Some(format) = &config.format {
        if !FORMATS.contains(&format.as_str()) {
            anyhow::bail!("invalid format {:?}, must be 'pretty' or 'json'", format);
        }
    }

    for ext in config.extensions.keys() {
        if ext.is_empty() || ext.starts_with('.') {
            anyhow::bail!("invalid extension {:?}, give it without the leading dot", ext);
        }
        if ext.chars().any(|c| c.is_uppercase()) {
            anyhow::bail!("invalid extension {:?}, extensions must be lowercase", ext);
        }
    }

    for pattern in &config.excluded_paths {
        globset::Glob::new(pattern)
            .map_err(|e| anyhow::anyhow!("invalid excluded_paths pattern {:?}: {}", pattern, e))?;
    }

    Ok(())
}
