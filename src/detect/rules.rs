//! The built-in per-language rule table.
//!
//! Every language carries exactly two rules. Rule order determines the order
//! of suggestions: all matches of the first rule are reported before any
//! match of the second.

use lazy_static::lazy_static;
use regex::Regex;

use crate::language::LanguageId;

/// How a rule's regex match becomes a reported span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum MatchKind {
    /// The regex match itself
    Plain,
    /// The regex matches an opening tag capturing its name in group 1; the
    /// span extends to the last `</name>` after it (a backreference the
    /// linear-time engine cannot express)
    TagPair,
}

/// A pattern paired with the message reported for each of its matches.
#[derive(Debug)]
pub struct Rule {
    regex: Regex,
    pattern: &'static str,
    message: &'static str,
    kind: MatchKind,
}

impl Rule {
    fn new(pattern: &'static str, message: &'static str) -> Self {
        Self {
            regex: Regex::new(pattern).unwrap(),
            pattern,
            message,
            kind: MatchKind::Plain,
        }
    }

    fn tag_pair(message: &'static str) -> Self {
        Self {
            regex: Regex::new(r"<([a-zA-Z]+)[^>]*>").unwrap(),
            pattern: r"<([a-zA-Z]+)[^>]*>[\s\S]*</\1>",
            message,
            kind: MatchKind::TagPair,
        }
    }

    /// Source text of the rule's pattern.
    pub fn pattern(&self) -> &'static str {
        self.pattern
    }

    pub fn message(&self) -> &'static str {
        self.message
    }

    pub(crate) fn regex(&self) -> &Regex {
        &self.regex
    }

    pub(crate) fn kind(&self) -> MatchKind {
        self.kind
    }
}

lazy_static! {
    static ref PYTHON_RULES: Vec<Rule> = vec![
        Rule::new(r"print\([^)]*\)", "Ensure parentheses are used correctly."),
        Rule::new(r"if\s+[^:]+:", "Ensure colon is used after condition."),
    ];

    static ref HTML_RULES: Vec<Rule> = vec![
        Rule::tag_pair("Ensure tags are properly closed."),
        Rule::new(r"<([a-zA-Z]+)[^>]*/>", "Ensure self-closing tags are properly formatted."),
    ];

    static ref CSS_RULES: Vec<Rule> = vec![
        Rule::new(r"([a-zA-Z-]+):\s*[^;]+;", "Ensure properties are properly formatted."),
        Rule::new(r"@media\s+[^{]+\s*\{[\s\S]*\}", "Ensure media queries are properly formatted."),
    ];

    static ref JAVASCRIPT_RULES: Vec<Rule> = vec![
        Rule::new(r"console\.log\([^)]*\)", "Ensure parentheses are used correctly."),
        Rule::new(r"if\s*\([^)]*\)\s*\{[\s\S]*\}", "Ensure conditionals are properly formatted."),
    ];
}

/// The ordered rule set for a language.
pub fn rule_set(language: LanguageId) -> &'static [Rule] {
    match language {
        LanguageId::Python => PYTHON_RULES.as_slice(),
        LanguageId::Html => HTML_RULES.as_slice(),
        LanguageId::Css => CSS_RULES.as_slice(),
        LanguageId::Javascript => JAVASCRIPT_RULES.as_slice(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_every_language_has_rules() {
        for lang in LanguageId::ALL {
            assert_eq!(rule_set(lang).len(), 2, "{} should have two rules", lang);
        }
    }

    #[test]
    fn test_rule_messages() {
        let python = rule_set(LanguageId::Python);
        assert_eq!(python[0].message(), "Ensure parentheses are used correctly.");
        assert_eq!(python[1].message(), "Ensure colon is used after condition.");

        let js = rule_set(LanguageId::Javascript);
        assert_eq!(js[1].message(), "Ensure conditionals are properly formatted.");
    }

    #[test]
    fn test_pattern_source_is_exposed() {
        let css = rule_set(LanguageId::Css);
        assert!(css[1].pattern().starts_with("@media"));

        // The tag-pair rule lists its full pattern, not just the opening tag
        let html = rule_set(LanguageId::Html);
        assert_eq!(html[0].pattern(), r"<([a-zA-Z]+)[^>]*>[\s\S]*</\1>");
        assert_eq!(html[0].kind(), MatchKind::TagPair);
        assert_eq!(html[1].kind(), MatchKind::Plain);
    }
}
