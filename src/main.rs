//! Hintcheck CLI entry point.

use clap::Parser;
use hintcheck::cli::{self, Cli, Commands, EXIT_ERROR};
use hintcheck::logging;

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let result = match &cli.command {
        Commands::Detect(args) => cli::run_detect(args),
        Commands::Rules(args) => cli::run_rules(args),
        Commands::Feedback(args) => cli::run_feedback(args),
        Commands::Init(args) => cli::run_init(args),
    };

    let exit_code = match result {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            EXIT_ERROR
        }
    };

    std::process::exit(exit_code);
}
