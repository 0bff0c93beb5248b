//! Tracing subscriber setup.
//!
//! Only the binary installs a subscriber; `wayfind-core` and
//! `wayfind-adapters` just emit events. Per-file progress goes to stdout
//! through [`crate::output::OutputManager`]; diagnostics go to stderr here.
//!
//! `-q` → error, nothing → warn, `-v` → info, `-vv` → debug, `-vvv` → trace.
//! A set `RUST_LOG` replaces the whole filter.

use std::io::IsTerminal as _;

use tracing::level_filters::LevelFilter;
use tracing_subscriber::EnvFilter;

use crate::cli::GlobalArgs;

/// Install the global subscriber. Fails if one is already installed.
pub fn init_logging(args: &GlobalArgs) -> anyhow::Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(from_env) => from_env,
        Err(_) => EnvFilter::try_new(default_filter(args.log_level()))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(!args.no_color && std::io::stderr().is_terminal())
        .with_target(false)
        .without_time()
        .try_init()
        .map_err(|e| anyhow::anyhow!("tracing subscriber already set: {e}"))
}

/// Our crates log at `level`; dependencies stay at warn unless we go quieter.
fn default_filter(level: LevelFilter) -> String {
    let deps = level.min(LevelFilter::WARN);
    ["wayfind", "wayfind_core", "wayfind_adapters"]
        .iter()
        .fold(deps.to_string(), |acc, krate| format!("{acc},{krate}={level}"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_names_every_workspace_crate() {
        let filter = default_filter(LevelFilter::DEBUG);
        assert_eq!(
            filter,
            "warn,wayfind=debug,wayfind_core=debug,wayfind_adapters=debug"
        );
        assert!(filter.parse::<EnvFilter>().is_ok());
    }

    #[test]
    fn quiet_filter_silences_dependencies_too() {
        assert!(default_filter(LevelFilter::ERROR).starts_with("error,"));
    }
}
