//! Core types for detection results.

use serde::{Deserialize, Serialize};

use crate::language::LanguageId;

/// A human-readable hint produced by a single rule match.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// The rule's message
    pub message: String,
    /// The literal substring the rule matched
    pub found: String,
}

impl Suggestion {
    pub fn new(message: impl Into<String>, found: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            found: found.into(),
        }
    }

    /// The rendered suggestion, `"<message> (Found: <matched>)"`.
    pub fn text(&self) -> String {
        self.to_string()
    }
}

impl std::fmt::Display for Suggestion {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} (Found: {})", self.message, self.found)
    }
}

/// Suggestions for one scanned input.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileReport {
    /// File path, or `<stdin>`
    pub path: String,
    pub language: LanguageId,
    pub suggestions: Vec<Suggestion>,
}

/// Results of running detection over one or more inputs.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DetectionResult {
    pub files: Vec<FileReport>,
    /// Number of inputs scanned
    pub scanned: usize,
}

impl DetectionResult {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the suggestions for one input.
    pub fn add_file(&mut self, report: FileReport) {
        self.files.push(report);
        self.scanned += 1;
    }

    /// Total number of suggestions across all inputs.
    pub fn suggestion_count(&self) -> usize {
        self.files.iter().map(|f| f.suggestions.len()).sum()
    }

    pub fn has_suggestions(&self) -> bool {
        self.files.iter().any(|f| !f.suggestions.is_empty())
    }
}
