//! Log filter setup for the CLI.

use tracing_subscriber::filter::{Directive, EnvFilter};

const DEFAULT_DIRECTIVE: &str = "hintcheck=info";
const VERBOSE_DIRECTIVE: &str = "hintcheck=debug";

/// Build the log filter from `--verbose` and the `RUST_LOG` value, if any.
///
/// `RUST_LOG` replaces the default directive. `--verbose` always raises
/// hintcheck's own logs to debug on top of whatever `RUST_LOG` selects.
pub fn log_filter(verbose: bool, env: Option<&str>) -> EnvFilter {
    let filter = env
        .filter(|s| !s.trim().is_empty())
        .and_then(|s| EnvFilter::try_new(s).ok())
        .unwrap_or_else(|| EnvFilter::new(DEFAULT_DIRECTIVE));

    if !verbose {
        return filter;
    }
    match VERBOSE_DIRECTIVE.parse::<Directive>() {
        Ok(directive) => filter.add_directive(directive),
        Err(_) => filter,
    }
}

/// Install the global subscriber, writing to stderr.
pub fn init(verbose: bool) {
    let env = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(log_filter(verbose, env.as_deref()))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(log_filter(false, None).to_string(), "hintcheck=info");
        assert_eq!(log_filter(false, Some("  ")).to_string(), "hintcheck=info");
    }

    #[test]
    fn test_rust_log_replaces_default() {
        let filter = log_filter(false, Some("warn")).to_string();
        assert!(filter.contains("warn"));
        assert!(!filter.contains("hintcheck"));
    }

    #[test]
    fn test_verbose_applies_with_rust_log() {
        let filter = log_filter(true, Some("warn")).to_string();
        assert!(filter.contains("warn"));
        assert!(filter.contains("hintcheck=debug"));

        let filter = log_filter(true, None).to_string();
        assert!(filter.contains("hintcheck=debug"));
    }

    #[test]
    fn test_invalid_rust_log_falls_back() {
        let filter = log_filter(false, Some("hintcheck=loud")).to_string();
        assert_eq!(filter, "hintcheck=info");
    }
}
