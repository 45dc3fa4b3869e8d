//! Detection runner that applies the rule table to files and streams.

use anyhow::Context;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::config::Config;
use crate::language::LanguageId;

use super::{detect, DetectionResult, FileReport};

/// Label used for input read from stdin.
pub const STDIN_LABEL: &str = "<stdin>";

/// Runs detection over a set of inputs, resolving each input's language.
pub struct Runner {
    config: Config,
    language: Option<LanguageId>,
}

impl Runner {
    /// Create a new detection runner.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            language: None,
        }
    }

    /// Force a language for every input instead of inferring it.
    pub fn language(mut self, language: Option<LanguageId>) -> Self {
        self.language = language;
        self
    }

    /// Pick the language for a file: explicit override, then extension,
    /// then the configured default.
    pub fn resolve_language(&self, path: &Path) -> LanguageId {
        self.language
            .or_else(|| self.config.language_for_path(path))
            .unwrap_or_else(|| self.config.default_language())
    }

    /// Run detection on each file, in order.
    pub fn run(&self, files: &[PathBuf]) -> anyhow::Result<DetectionResult> {
        let mut result = DetectionResult::new();

        for file in files {
            let source = std::fs::read_to_string(file)
                .with_context(|| format!("reading {}", file.display()))?;
            let language = self.resolve_language(file);
            debug!(file = %file.display(), language = %language, "scanning file");
            result.add_file(self.scan(&file.to_string_lossy(), &source, language));
        }

        Ok(result)
    }

    /// Run detection on source text that did not come from a file.
    pub fn run_source(&self, source: &str) -> DetectionResult {
        let language = self.language.unwrap_or_else(|| self.config.default_language());
        let mut result = DetectionResult::new();
        result.add_file(self.scan(STDIN_LABEL, source, language));
        result
    }

    fn scan(&self, path: &str, source: &str, language: LanguageId) -> FileReport {
        FileReport {
            path: path.to_string(),
            language,
            suggestions: detect(source, language),
        }
    }
}
