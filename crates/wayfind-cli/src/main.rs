//! `wayfind`: batch code formatter for JavaScript-ecosystem projects.
//!
//! Exit codes:
//!
//! | Code | Meaning                                           |
//! |------|---------------------------------------------------|
//! |  0   | Every file processed (and formatted, for check)   |
//! |  1   | Some file failed, or check found unformatted ones |
//! |  2   | Bad arguments or unknown config key               |
//! |  3   | Root directory not found                          |
//! |  4   | Configuration could not be loaded                 |

use std::process::ExitCode;

use clap::Parser;
use tracing::{debug, info, instrument};

use wayfind_core::domain::RunMode;

use crate::{
    cli::{Cli, Commands},
    config::AppConfig,
    error::{CliError, CliResult},
    logging::init_logging,
    output::OutputManager,
};

mod cli;
mod commands;
mod config;
mod error;
mod logging;
mod output;

fn main() -> ExitCode {
    let _ = dotenvy::dotenv();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if !e.use_stderr() => {
            // --help / --version
            let _ = e.print();
            return ExitCode::SUCCESS;
        }
        Err(e) => {
            eprintln!("{}", e.render().ansi());
            return ExitCode::from(2);
        }
    };

    if let Err(e) = init_logging(&cli.global) {
        eprintln!("Failed to initialise logging: {e}");
        return ExitCode::from(1);
    }
    debug!(args = ?cli.global, "CLI started");

    let verbose = cli.global.is_verbose();
    match run(cli) {
        Ok(()) => {
            info!("Done");
            ExitCode::SUCCESS
        }
        Err(e) => handle_error(e, verbose),
    }
}

/// Load configuration and dispatch to the command handler.
#[instrument(skip_all)]
fn run(cli: Cli) -> CliResult<()> {
    let config = AppConfig::load(cli.global.config.as_ref()).map_err(|e| CliError::ConfigError {
        message: format!("{e:#}"),
        source: Some(e.into()),
    })?;
    let output = OutputManager::new(&cli.global, &config);

    match cli.command {
        Commands::Format(args) => commands::format::execute(args, RunMode::Write, config, output),
        Commands::Check(args) => commands::format::execute(args, RunMode::Check, config, output),
        Commands::Completions(cmd) => commands::completions::execute(cmd),
        Commands::Config(cmd) => {
            commands::config::execute(cmd, cli.global.config.as_ref(), config, output)
        }
    }
}

/// Translate a `CliError` into a user message and an appropriate exit code.
fn handle_error(err: CliError, verbose: bool) -> ExitCode {
    err.log();

    // stderr, so the message survives a redirected stdout.
    let msg = if std::io::IsTerminal::is_terminal(&std::io::stderr()) {
        err.format_colored(verbose)
    } else {
        err.format_plain(verbose)
    };
    eprint!("{msg}");

    ExitCode::from(err.exit_code())
}

// ── tests ─────────────────────────────────────────────────────────────────────
