//! `wayfind format` and `wayfind check`: run the batch formatter.

use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, instrument};

use wayfind_adapters::{LocalFilesystem, PluginEngine};
use wayfind_core::prelude::*;

use crate::{
    cli::{FormatArgs, OutputFormat},
    config::AppConfig,
    error::{CliError, CliResult, IntoCli},
    output::OutputManager,
};

/// Run the formatter over the requested paths and report every file.
#[instrument(skip_all, fields(mode = %mode))]
pub fn execute(
    args: FormatArgs,
    mode: RunMode,
    config: AppConfig,
    output: OutputManager,
) -> CliResult<()> {
    let request = build_request(&args, mode, &config)?;
    let engine = build_engine(&config, &args)?;
    debug!(engine = ?engine, "Engine ready");

    let service = FormatService::new(Box::new(LocalFilesystem::new()), Box::new(engine));

    let report = if output.format() == OutputFormat::Json {
        let report = service
            .run(&request, &NoopObserver)
            .with_cli_context(|| "format run")?;
        print_json(&report, &output)?;
        report
    } else {
        let observer = ConsoleObserver {
            output: &output,
            mode,
        };
        let report = service
            .run(&request, &observer)
            .with_cli_context(|| "format run")?;
        output.header("Format complete.")?;
        output.print(&summary_line(&report.summary))?;
        report
    };

    if report.succeeded() {
        info!("All files processed");
        Ok(())
    } else {
        Err(CliError::RunFailed {
            mode,
            failed: report.summary.failed,
            unformatted: report.summary.formatted,
        })
    }
}

fn build_request(args: &FormatArgs, mode: RunMode, config: &AppConfig) -> CliResult<FormatRequest> {
    let cwd = std::env::current_dir().with_cli_context(|| "Failed to read working directory")?;
    let root = match &args.root {
        Some(root) => absolute(&cwd, root),
        None => cwd.clone(),
    };
    let targets = args.paths.iter().map(|p| absolute(&cwd, p)).collect();
    let ignore_path = match &args.ignore_path {
        Some(path) => absolute(&cwd, path),
        None => root.join(&config.format.ignore_path),
    };
    let patterns = CandidatePatterns::default()
        .with_ignored_dirs(config.format.extra_ignored_dirs.iter().cloned())
        .map_err(WayfindError::from)?;

    Ok(FormatRequest::new(root)
        .with_targets(targets)
        .with_mode(mode)
        .with_ignore_path(ignore_path)
        .with_patterns(patterns))
}

fn build_engine(config: &AppConfig, args: &FormatArgs) -> CliResult<PluginEngine> {
    let mut builder = PluginEngine::builder()
        .with_builtin_plugins()
        .editorconfig(config.format.editorconfig && !args.no_editorconfig);
    if config.plugins.php.is_enabled() {
        builder = builder.command(Parser::Php, config.plugins.php.command.clone())?;
    }
    Ok(builder.build())
}

/// Lexically absolute path; `..` components are kept.
fn absolute(cwd: &Path, path: &Path) -> PathBuf {
    if path.is_absolute() {
        path.to_path_buf()
    } else {
        cwd.join(path)
    }
}

/// Prints one line per file as the run progresses.
struct ConsoleObserver<'a> {
    output: &'a OutputManager,
    mode: RunMode,
}

impl FormatObserver for ConsoleObserver<'_> {
    fn file_processed(&self, outcome: &FileOutcome) {
        let path = outcome.path.display();
        let written = match &outcome.status {
            FileStatus::Formatted if self.mode.writes() => {
                self.output.success(&format!("formatted: {path}"))
            }
            FileStatus::Formatted => self.output.pending(&format!("would format: {path}")),
            FileStatus::Unchanged => self.output.muted('=', &format!("unchanged: {path}")),
            FileStatus::Skipped { reason } => {
                self.output.muted('-', &format!("skipped: {path} ({reason})"))
            }
            FileStatus::Failed { message } => self
                .output
                .error(&format!("error in: {path}\n    {message}")),
        };
        if let Err(e) = written {
            debug!(error = %e, "Failed to write progress line");
        }
    }
}

/// `Formatted: N (C changed, U unchanged), Skipped: S, Errors: E`
fn summary_line(summary: &RunSummary) -> String {
    format!(
        "Formatted: {} ({} changed, {} unchanged), Skipped: {}, Errors: {}",
        summary.processed(),
        summary.formatted,
        summary.unchanged,
        summary.skipped,
        summary.failed
    )
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
struct JsonReport<'a> {
    generated_at: DateTime<Utc>,
    succeeded: bool,
    #[serde(flatten)]
    report: &'a RunReport,
}

fn print_json(report: &RunReport, output: &OutputManager) -> CliResult<()> {
    let payload = JsonReport {
        generated_at: Utc::now(),
        succeeded: report.succeeded(),
        report,
    };
    let json = serde_json::to_string_pretty(&payload).map_err(|e| CliError::InvalidInput {
        message: format!("Failed to serialise report: {e}"),
        source: Some(Box::new(e)),
    })?;
    output.data(&json)?;
    Ok(())
}
