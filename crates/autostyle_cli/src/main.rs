//! CLI entry point for autostyle.

mod cli;
mod commands;
mod output;

use autostyle_observability::ObservabilityConfig;
use clap::Parser;

use crate::cli::Cli;

/// Load the nearest `.env` (cwd or a parent) so `AUTOSTYLE_*` paths can be
/// pinned per project. Variables already set in the environment win.
fn load_env_file() {
    let Ok(mut dir) = std::env::current_dir() else {
        return;
    };
    for _ in 0..32 {
        let env_file = dir.join(".env");
        if env_file.exists() {
            let _ = dotenvy::from_path(&env_file);
            return;
        }
        if !dir.pop() {
            return;
        }
    }
}

fn init_logging(verbose: bool) {
    let mut config = ObservabilityConfig::from_env();
    if verbose {
        config = config.with_log_level("debug");
    }
    if let Err(e) = autostyle_observability::init(config) {
        output::warning(&e.to_string());
    }
}

fn main() {
    load_env_file();
    let cli = Cli::parse();
    output::init(cli.output);
    init_logging(cli.verbose);

    if let Err(e) = commands::handle(cli) {
        output::error(&format!("{e:#}"));
        std::process::exit(1);
    }
}
