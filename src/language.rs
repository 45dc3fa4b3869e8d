//! Supported languages and how they are selected.

use phf::phf_map;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors raised when a language name does not resolve to a rule set.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LookupError {
    #[error("unsupported language: {0:?} (expected one of: python, html, css, javascript)")]
    UnknownLanguage(String),
}

/// Identifier selecting which rule set to apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LanguageId {
    Python,
    Html,
    Css,
    Javascript,
}

/// Built-in extension mapping, used when no language is given explicitly.
static EXTENSIONS: phf::Map<&'static str, LanguageId> = phf_map! {
    "py" => LanguageId::Python,
    "pyi" => LanguageId::Python,
    "html" => LanguageId::Html,
    "htm" => LanguageId::Html,
    "css" => LanguageId::Css,
    "js" => LanguageId::Javascript,
    "mjs" => LanguageId::Javascript,
    "cjs" => LanguageId::Javascript,
    "jsx" => LanguageId::Javascript,
};

impl LanguageId {
    /// All supported languages, in the order they are listed to users.
    pub const ALL: [LanguageId; 4] = [
        LanguageId::Python,
        LanguageId::Html,
        LanguageId::Css,
        LanguageId::Javascript,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            LanguageId::Python => "python",
            LanguageId::Html => "html",
            LanguageId::Css => "css",
            LanguageId::Javascript => "javascript",
        }
    }

    /// Human-facing name, as shown in listings.
    pub fn display_name(&self) -> &'static str {
        match self {
            LanguageId::Python => "Python",
            LanguageId::Html => "HTML",
            LanguageId::Css => "CSS",
            LanguageId::Javascript => "JavaScript",
        }
    }

    /// Resolve a language name. Matching is case-insensitive.
    pub fn parse(name: &str) -> Result<Self, LookupError> {
        match name.trim().to_lowercase().as_str() {
            "python" => Ok(LanguageId::Python),
            "html" => Ok(LanguageId::Html),
            "css" => Ok(LanguageId::Css),
            "javascript" => Ok(LanguageId::Javascript),
            _ => Err(LookupError::UnknownLanguage(name.to_string())),
        }
    }

    /// Determine the language from a bare file extension (without the dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        EXTENSIONS.get(ext.to_lowercase().as_str()).copied()
    }
}

impl std::str::FromStr for LanguageId {
    type Err = LookupError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl std::fmt::Display for LanguageId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
