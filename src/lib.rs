//! Hintcheck - pattern-based code error hints.
//!
//! Hintcheck flags suspicious snippets in Python, HTML, CSS and JavaScript
//! source using a small, fixed table of regular expressions. Each match is
//! turned into a human-readable suggestion of the form
//! `"<message> (Found: <matched text>)"`. It is a heuristic grep, not a
//! parser: there are no severities, positions or confidence scores.
//!
//! # Architecture
//!
//! - `language`: the supported languages and how they are selected
//! - `detect`: the rule table, the matcher, and the file runner
//! - `session`: caller-owned state (code, language, suggestions, feedback)
//! - `config`: YAML config schema
//! - `report`: output formatting (pretty, JSON)
//! - `cli`: command-line front end
//! - `logging`: log filter setup
//!
//! # Example
//!
//! ```
//! use hintcheck::{detect, LanguageId};
//!
//! let hints = detect("print(1)\nprint(2)", LanguageId::Python);
//! assert_eq!(hints.len(), 2);
//! assert_eq!(
//!     hints[0].to_string(),
//!     "Ensure parentheses are used correctly. (Found: print(1))"
//! );
//! ```

pub mod cli;
pub mod config;
pub mod detect;
pub mod language;
pub mod logging;
pub mod report;
pub mod session;

pub use config::Config;
pub use detect::{detect, detect_named, DetectionResult, Runner, Suggestion};
pub use language::{LanguageId, LookupError};
pub use session::{FeedbackSink, LogSink, Session};
