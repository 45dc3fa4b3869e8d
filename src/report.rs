//! Output formatting for hintcheck results.
//!
//! Supports two output formats:
//! - Pretty: colored terminal output for human readability
//! - JSON: structured output for programmatic consumption

use colored::*;
use serde::{Deserialize, Serialize};

use crate::detect::{rule_set, DetectionResult, FileReport, Suggestion};
use crate::language::LanguageId;

// =============================================================================
// JSON Format
// =============================================================================

/// JSON report structure.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonReport {
    pub version: String,
    pub files_scanned: usize,
    pub suggestion_count: usize,
    pub files: Vec<JsonFile>,
}

/// Suggestions for one input.
#[derive(Debug, Serialize, Deserialize)]
pub struct JsonFile {
    pub path: String,
    pub language: String,
    pub suggestions: Vec<JsonSuggestion>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct JsonSuggestion {
    pub message: String,
    pub found: String,
    /// Rendered form, as shown to users
    pub text: String,
}

/// Build the JSON report for a detection result.
pub fn build_json(result: &DetectionResult) -> JsonReport {
    JsonReport {
        version: env!("CARGO_PKG_VERSION").to_string(),
        files_scanned: result.scanned,
        suggestion_count: result.suggestion_count(),
        files: result.files.iter().map(file_to_json).collect(),
    }
}

/// Render the JSON report as a pretty-printed string.
pub fn render_json(result: &DetectionResult) -> anyhow::Result<String> {
    Ok(serde_json::to_string_pretty(&build_json(result))?)
}

/// Write results in JSON format.
pub fn write_json(result: &DetectionResult) -> anyhow::Result<()> {
    println!("{}", render_json(result)?);
    Ok(())
}

fn file_to_json(f: &FileReport) -> JsonFile {
    JsonFile {
        path: f.path.clone(),
        language: f.language.as_str().to_string(),
        suggestions: f.suggestions.iter().map(suggestion_to_json).collect(),
    }
}

fn suggestion_to_json(s: &Suggestion) -> JsonSuggestion {
    JsonSuggestion {
        message: s.message.clone(),
        found: s.found.clone(),
        text: s.text(),
    }
}

// =============================================================================
// Pretty Format
// =============================================================================

/// Write results in pretty format with colors.
pub fn write_pretty(path: &str, result: &DetectionResult) {
    // Header
    println!();
    print!("  ");
    print!("{}", "hintcheck".cyan().bold());
    println!(" v{}", env!("CARGO_PKG_VERSION"));
    println!();

    print!("  {}", "Scanning: ".dimmed());
    println!("{}", path);
    println!();

    for file in &result.files {
        write_file(file);
    }

    write_summary(result);
    println!();
}

fn write_file(file: &FileReport) {
    print!("  {}", file.path.bold());
    println!(" {}", format!("({})", file.language.display_name()).dimmed());

    if file.suggestions.is_empty() {
        println!("    {}", "no suggestions".green());
    } else {
        for suggestion in &file.suggestions {
            print!("    {} ", "•".yellow());
            print!("{}", suggestion.message);
            println!(" {}", format!("(Found: {})", suggestion.found).dimmed());
        }
    }
    println!();
}

fn write_summary(result: &DetectionResult) {
    let count = result.suggestion_count();
    let noun = if count == 1 { "suggestion" } else { "suggestions" };
    let files = if result.scanned == 1 { "file" } else { "files" };

    if count == 0 {
        print!("  {}", "✓ CLEAN".green());
    } else {
        print!("  {}", "! HINTS".yellow());
    }
    println!(
        "  {} {} in {} {}",
        count.to_string().bold(),
        noun,
        result.scanned,
        files
    );
}

// =============================================================================
// Rule listing
// =============================================================================

/// Print the rule table for the given languages.
pub fn write_rules(languages: &[LanguageId]) {
    for language in languages {
        println!(
            "{} {}",
            language.display_name().cyan().bold(),
            format!("({})", language.as_str()).dimmed()
        );
        for (i, rule) in rule_set(*language).iter().enumerate() {
            println!("  {}. {}", i + 1, rule.message());
            println!("     {}", rule.pattern().dimmed());
        }
        println!();
    }
}
