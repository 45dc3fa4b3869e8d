//! Command-line interface for hintcheck.

use clap::{Parser, Subcommand};
use std::io::Read;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::config::{self, Config, FORMATS};
use crate::detect::Runner;
use crate::language::LanguageId;
use crate::report;
use crate::session::{LogSink, Session};

/// Exit codes.
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FOUND: i32 = 1;
pub const EXIT_ERROR: i32 = 2;

/// Config template written by `hintcheck init`.
const CONFIG_TEMPLATE: &str = include_str!("templates/default.yaml");

/// Pattern-based code error hints.
///
/// Hintcheck runs a small per-language table of patterns over source code
/// (Python, HTML, CSS, JavaScript) and reports a suggestion for every match.
/// It is a heuristic, not a parser.
#[derive(Parser)]
#[command(name = "hintcheck")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scan code for suspicious snippets
    #[command(visible_alias = "check")]
    Detect(DetectArgs),
    /// List the built-in rules
    Rules(RulesArgs),
    /// Submit feedback about the suggestions
    Feedback(FeedbackArgs),
    /// Create a hintcheck config file
    Init(InitArgs),
}

/// Arguments for the detect command.
#[derive(Parser)]
pub struct DetectArgs {
    /// File or directory to scan, or `-` for stdin
    pub path: PathBuf,

    /// Language to apply: python, html, css, or javascript (default: inferred)
    #[arg(short, long)]
    pub language: Option<LanguageId>,

    /// Output format: pretty or json (default: from config, else pretty)
    #[arg(short, long)]
    pub format: Option<String>,

    /// Path to config YAML file (default: auto-discover)
    #[arg(short, long)]
    pub config: Option<PathBuf>,
}

/// Arguments for the rules command.
#[derive(Parser)]
pub struct RulesArgs {
    /// Only list rules for this language
    #[arg(short, long)]
    pub language: Option<LanguageId>,
}

/// Arguments for the feedback command.
#[derive(Parser)]
pub struct FeedbackArgs {
    /// Feedback text
    pub text: String,
}

/// Arguments for the init command.
#[derive(Parser)]
pub struct InitArgs {
    /// Output file path
    #[arg(short, long, default_value = "hintcheck.yaml")]
    pub output: PathBuf,
}

/// Load the config from an explicit path, or discover one in the current
/// directory. No config file means defaults.
fn load_config(path: Option<&Path>) -> anyhow::Result<(Config, Option<PathBuf>)> {
    let path = match path {
        Some(p) => Some(p.to_path_buf()),
        None => config::discover(Path::new(".")),
    };

    let config = match &path {
        Some(p) => Config::parse_file(p)
            .map_err(|e| anyhow::anyhow!("parsing config {}: {}", p.display(), e))?,
        None => Config::default(),
    };
    config::validate(&config).map_err(|e| anyhow::anyhow!("invalid config: {}", e))?;

    Ok((config, path))
}

/// Collect files with a recognised language under `root`.
pub fn collect_files(root: &Path, config: &Config) -> anyhow::Result<Vec<PathBuf>> {
    let mut files = Vec::new();

    for entry in WalkDir::new(root)
        .follow_links(true)
        .sort_by_file_name()
        .into_iter()
        .filter_entry(|e| {
            let name = e.file_name().to_string_lossy();
            // Skip hidden directories and dependency trees
            if e.depth() > 0
                && e.file_type().is_dir()
                && (name.starts_with('.') || name == "node_modules" || name == "vendor")
            {
                return false;
            }
            true
        })
    {
        let entry = entry?;
        if !entry.file_type().is_file() {
            continue;
        }
        let path = entry.path();
        if config.is_path_excluded(path) {
            continue;
        }
        if config.language_for_path(path).is_some() {
            files.push(path.to_path_buf());
        }
    }

    Ok(files)
}

/// Run the detect command.
pub fn run_detect(args: &DetectArgs) -> anyhow::Result<i32> {
    let (config, config_path) = match load_config(args.config.as_deref()) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e);
            return Ok(EXIT_ERROR);
        }
    };
    if let Some(p) = &config_path {
        tracing::debug!(config = %p.display(), "loaded config");
    }

    let format = args
        .format
        .clone()
        .unwrap_or_else(|| config.get_format().to_string());
    if !FORMATS.contains(&format.as_str()) {
        eprintln!(
            "Error: invalid format {:?}, must be 'pretty' or 'json'",
            format
        );
        return Ok(EXIT_ERROR);
    }

    let runner = Runner::new(config.clone()).language(args.language);
    let path_str = args.path.to_string_lossy().to_string();

    let result = if path_str == "-" {
        let mut source = String::new();
        std::io::stdin().read_to_string(&mut source)?;
        runner.run_source(&source)
    } else {
        let metadata = match std::fs::metadata(&args.path) {
            Ok(m) => m,
            Err(e) => {
                eprintln!("Error: cannot access path {:?}: {}", args.path, e);
                return Ok(EXIT_ERROR);
            }
        };

        let files = if metadata.is_dir() {
            collect_files(&args.path, &config)?
        } else {
            vec![args.path.clone()]
        };

        if files.is_empty() {
            eprintln!("Warning: no files to scan");
            return Ok(EXIT_SUCCESS);
        }

        runner.run(&files)?
    };

    match format.as_str() {
        "json" => report::write_json(&result)?,
        _ => report::write_pretty(&path_str, &result),
    }

    if result.has_suggestions() {
        Ok(EXIT_FOUND)
    } else {
        Ok(EXIT_SUCCESS)
    }
}

/// Run the rules command.
pub fn run_rules(args: &RulesArgs) -> anyhow::Result<i32> {
    match args.language {
        Some(language) => report::write_rules(&[language]),
        None => report::write_rules(&LanguageId::ALL),
    }
    Ok(EXIT_SUCCESS)
}

/// Run the feedback command.
pub fn run_feedback(args: &FeedbackArgs) -> anyhow::Result<i32> {
    let mut session = Session::new();
    session.set_feedback(args.text.trim());

    if session.submit_feedback(&mut LogSink) {
        println!("Feedback submitted. Thank you!");
    } else {
        println!("Nothing to submit");
    }
    Ok(EXIT_SUCCESS)
}

/// Run the init command.
pub fn run_init(args: &InitArgs) -> anyhow::Result<i32> {
    if args.output.exists() {
        eprintln!("Error: file already exists: {}", args.output.display());
        eprintln!("Remove it or use --output to specify a different path");
        return Ok(EXIT_ERROR);
    }

    if let Some(parent) = args.output.parent() {
        if !parent.as_os_str().is_empty() && parent != Path::new(".") {
            if let Err(e) = std::fs::create_dir_all(parent) {
                eprintln!("Error: failed to create directory: {}", e);
                return Ok(EXIT_ERROR);
            }
        }
    }

    if let Err(e) = std::fs::write(&args.output, CONFIG_TEMPLATE) {
        eprintln!("Error: failed to write config: {}", e);
        return Ok(EXIT_ERROR);
    }

    println!("Created {}", args.output.display());
    println!();
    println!("Next steps:");
    println!("  1. Edit {} to customize for your project", args.output.display());
    println!("  2. Run: hintcheck detect . --config {}", args.output.display());

    Ok(EXIT_SUCCESS)
}
