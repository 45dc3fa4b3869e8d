//! Detection of suspicious snippets using the per-language rule table.

mod patterns;
mod rules;
mod runner;
mod types;

pub use patterns::{detect, detect_named};
pub use rules::{rule_set, Rule};
pub use runner::{Runner, STDIN_LABEL};
pub use types::{DetectionResult, FileReport, Suggestion};
