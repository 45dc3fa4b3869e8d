//! Caller-owned state around the matcher.
//!
//! A `Session` holds what a front end keeps between user actions: the code
//! being checked, the selected language, the last suggestions, and the
//! feedback text with its submitted flag. The matcher itself stays stateless;
//! the session passes its fields into [`detect`] on every request.

use tracing::info;

use crate::detect::{detect, Suggestion};
use crate::language::{LanguageId, LookupError};

/// Receives feedback text when the user submits it.
pub trait FeedbackSink {
    fn submit(&mut self, feedback: &str);
}

/// Sink that records feedback in the log and nowhere else.
#[derive(Debug, Default)]
pub struct LogSink;

impl FeedbackSink for LogSink {
    fn submit(&mut self, feedback: &str) {
        info!(feedback, "feedback submitted");
    }
}

/// Collects submissions in memory.
impl FeedbackSink for Vec<String> {
    fn submit(&mut self, feedback: &str) {
        self.push(feedback.to_string());
    }
}

/// State for one detect-and-feedback interaction.
#[derive(Debug, Clone)]
pub struct Session {
    code: String,
    language: LanguageId,
    suggestions: Vec<Suggestion>,
    feedback: String,
    feedback_submitted: bool,
}

impl Default for Session {
    fn default() -> Self {
        Self {
            code: String::new(),
            language: LanguageId::Python,
            suggestions: Vec::new(),
            feedback: String::new(),
            feedback_submitted: false,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn code(&self) -> &str {
        &self.code
    }

    pub fn set_code(&mut self, code: impl Into<String>) {
        self.code = code.into();
    }

    pub fn language(&self) -> LanguageId {
        self.language
    }

    pub fn select_language(&mut self, language: LanguageId) {
        self.language = language;
    }

    /// Select a language by name. The current selection is kept on failure.
    pub fn select_language_named(&mut self, name: &str) -> Result<(), LookupError> {
        self.language = LanguageId::parse(name)?;
        Ok(())
    }

    /// Run detection on the current code and language, replacing the
    /// previous suggestions.
    pub fn detect_errors(&mut self) -> &[Suggestion] {
        self.suggestions = detect(&self.code, self.language);
        &self.suggestions
    }

    /// Suggestions from the most recent detection.
    pub fn suggestions(&self) -> &[Suggestion] {
        &self.suggestions
    }

    pub fn feedback(&self) -> &str {
        &self.feedback
    }

    pub fn set_feedback(&mut self, feedback: impl Into<String>) {
        self.feedback = feedback.into();
    }

    pub fn is_feedback_submitted(&self) -> bool {
        self.feedback_submitted
    }

    /// Hand the current feedback to `sink`.
    ///
    /// Returns false without touching the sink when the feedback is empty or
    /// was already submitted.
    pub fn submit_feedback<S: FeedbackSink>(&mut self, sink: &mut S) -> bool {
        if self.feedback.is_empty() || self.feedback_submitted {
            return false;
        }
        sink.submit(&self.feedback);
        self.feedback_submitted = true;
        true
    }
}
