//! Matching of rule patterns against source text.

use std::collections::HashMap;
use tracing::debug;

use crate::language::{LanguageId, LookupError};

use super::rules::{rule_set, MatchKind, Rule};
use super::Suggestion;

/// Run every rule for `language` against `source`.
///
/// Each rule contributes one suggestion per non-overlapping match, in
/// left-to-right order; rules are applied in declaration order. Identical
/// matches are reported as many times as they occur.
pub fn detect(source: &str, language: LanguageId) -> Vec<Suggestion> {
    let mut suggestions = Vec::new();

    if source.is_empty() {
        return suggestions;
    }

    for rule in rule_set(language) {
        scan_rule(source, rule, &mut suggestions);
    }

    debug!(
        language = %language,
        count = suggestions.len(),
        "detection finished"
    );
    suggestions
}

/// Like [`detect`], but selects the rule set by language name.
pub fn detect_named(source: &str, language: &str) -> Result<Vec<Suggestion>, LookupError> {
    let language = LanguageId::parse(language)?;
    Ok(detect(source, language))
}

/// Append a suggestion for every match of `rule` in `source`.
fn scan_rule(source: &str, rule: &Rule, out: &mut Vec<Suggestion>) {
    match rule.kind() {
        MatchKind::Plain => {
            for m in rule.regex().find_iter(source) {
                out.push(Suggestion::new(rule.message(), m.as_str()));
            }
        }
        MatchKind::TagPair => scan_tag_pairs(source, rule, out),
    }
}

/// Match `<name ...>` up to the last `</name>` after it, leftmost first.
///
/// A tag without a closer is retried with shorter prefixes of its name (the
/// rest of the name then reads as attributes), and failing that the scan
/// resumes one byte past its `<`. Closer positions are looked up once per
/// name, so the scan stays linear in the number of opening tags.
fn scan_tag_pairs(source: &str, rule: &Rule, out: &mut Vec<Suggestion>) {
    let mut last_closer: HashMap<&str, Option<usize>> = HashMap::new();
    let mut pos = 0;

    while let Some(caps) = rule.regex().captures_at(source, pos) {
        let (Some(open), Some(name)) = (caps.get(0), caps.get(1)) else {
            break;
        };
        let name = name.as_str();

        let mut end = None;
        for len in (1..=name.len()).rev() {
            let tag = &name[..len];
            let closer = *last_closer
                .entry(tag)
                .or_insert_with(|| source.rfind(&format!("</{}>", tag)));
            if let Some(start) = closer.filter(|&start| start >= open.end()) {
                end = Some(start + tag.len() + 3);
                break;
            }
        }

        match end {
            Some(end) => {
                out.push(Suggestion::new(rule.message(), &source[open.start()..end]));
                pos = end;
            }
            None => pos = open.start() + 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn texts(suggestions: &[Suggestion]) -> Vec<String> {
        suggestions.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_empty_source() {
        for lang in LanguageId::ALL {
            assert!(detect("", lang).is_empty(), "{} should yield nothing", lang);
        }
    }

    #[test]
    fn test_python_rule_order() {
        let out = detect("print(1)\nif x:\n  pass", LanguageId::Python);
        assert_eq!(
            texts(&out),
            vec![
                "Ensure parentheses are used correctly. (Found: print(1))",
                "Ensure colon is used after condition. (Found: if x:)",
            ]
        );
    }

    #[test]
    fn test_rule_order_beats_source_order() {
        // The if appears first in the source, but the print rule is declared first
        let out = detect("if ready:\n    print('go')", LanguageId::Python);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].found, "print('go')");
        assert_eq!(out[1].found, "if ready:");
    }

    #[test]
    fn test_python_multi_match() {
        let out = detect("print(1)\nprint(2)", LanguageId::Python);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].found, "print(1)");
        assert_eq!(out[1].found, "print(2)");
    }

    #[test]
    fn test_no_dedup() {
        let out = detect("print(1)\nprint(1)", LanguageId::Python);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0], out[1]);
    }

    #[test]
    fn test_python_no_match() {
        assert!(detect("x = 5", LanguageId::Python).is_empty());
    }

    #[test]
    fn test_html_rules() {
        let out = detect("<p>hi</p>", LanguageId::Html);
        assert_eq!(
            texts(&out),
            vec!["Ensure tags are properly closed. (Found: <p>hi</p>)"]
        );

        let out = detect(r#"<img src="a.png" />"#, LanguageId::Html);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].message, "Ensure self-closing tags are properly formatted.");
        assert_eq!(out[0].found, r#"<img src="a.png" />"#);
    }

    #[test]
    fn test_html_tag_pair_requires_same_name() {
        assert!(detect("<p>hi</div>", LanguageId::Html).is_empty());
    }

    #[test]
    fn test_html_tag_pair_is_greedy() {
        let out = detect("<b>x</b> and <b>y</b>", LanguageId::Html);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].found, "<b>x</b> and <b>y</b>");
    }

    fn unclosed_inputs(count: usize) -> String {
        (0..count)
            .map(|i| format!("<input name=\"f{}\">\n", i))
            .collect()
    }

    #[test]
    fn test_html_tag_pair_after_many_unclosed_tags() {
        for count in [50, 200, 500, 2000] {
            let source = format!("{}<p>hello</p>\n", unclosed_inputs(count));
            let out = detect(&source, LanguageId::Html);
            assert_eq!(
                texts(&out),
                vec!["Ensure tags are properly closed. (Found: <p>hello</p>)"],
                "{} unclosed tags",
                count
            );
        }
    }

    #[test]
    fn test_html_rules_both_report_on_large_input() {
        let source = format!(
            "{}<p>hello</p>\n{}<br/>\n",
            unclosed_inputs(1000),
            unclosed_inputs(1000)
        );
        let out = detect(&source, LanguageId::Html);
        assert_eq!(out.len(), 2);
        assert_eq!(out[0].found, "<p>hello</p>");
        assert_eq!(out[1].message, "Ensure self-closing tags are properly formatted.");
        assert_eq!(out[1].found, "<br/>");
    }

    #[test]
    fn test_html_tag_pair_retries_shorter_name() {
        // `<pre>` has no closer, but `<p` + attributes `re` closes with `</p>`
        let out = detect("<pre>x</p>", LanguageId::Html);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].found, "<pre>x</p>");
    }

    #[test]
    fn test_html_tag_pair_resumes_inside_failed_tag() {
        let out = detect("<a <b>x</b>", LanguageId::Html);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].found, "<b>x</b>");
    }

    #[test]
    fn test_html_tag_pairs_do_not_overlap() {
        let out = detect("<i>a</i><b>b</b>", LanguageId::Html);
        let found: Vec<_> = out.iter().map(|s| s.found.as_str()).collect();
        assert_eq!(found, vec!["<i>a</i>", "<b>b</b>"]);
    }

    #[test]
    fn test_css_rules() {
        let out = detect("body { color: red; margin: 0; }", LanguageId::Css);
        let found: Vec<_> = out.iter().map(|s| s.found.as_str()).collect();
        assert_eq!(found, vec!["color: red;", "margin: 0;"]);

        let out = detect("@media screen { p { } }", LanguageId::Css);
        assert_eq!(out.len(), 1);
        assert_eq!(out[0].message, "Ensure media queries are properly formatted.");
        assert_eq!(out[0].found, "@media screen { p { } }");
    }

    #[test]
    fn test_javascript_rules() {
        let out = detect("console.log('hi');\nif (x) { y(); }", LanguageId::Javascript);
        assert_eq!(
            texts(&out),
            vec![
                "Ensure parentheses are used correctly. (Found: console.log('hi'))",
                "Ensure conditionals are properly formatted. (Found: if (x) { y(); })",
            ]
        );
    }

    #[test]
    fn test_cross_language_independence() {
        let source = "print(1)";
        assert_eq!(detect(source, LanguageId::Python).len(), 1);
        assert!(detect(source, LanguageId::Html).is_empty());
        assert!(detect(source, LanguageId::Css).is_empty());
    }

    #[test]
    fn test_idempotent() {
        let source = "if a:\n    print(a)\nprint(b)";
        assert_eq!(
            detect(source, LanguageId::Python),
            detect(source, LanguageId::Python)
        );
    }

    #[test]
    fn test_detect_named() {
        let out = detect_named("print(1)", "python").unwrap();
        assert_eq!(out.len(), 1);

        let err = detect_named("print(1)", "ruby").unwrap_err();
        assert_eq!(err, LookupError::UnknownLanguage("ruby".to_string()));

        // Unknown languages fail even on empty input
        assert!(detect_named("", "cobol").is_err());
    }
}
