//! CLI argument definitions using the clap derive API.
//!
//! This module is the *only* place that knows about argument names, aliases,
//! help text, and value enums.  No business logic lives here.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

pub mod global;
pub use global::{GlobalArgs, OutputFormat};

// ── Top-level CLI ─────────────────────────────────────────────────────────────

/// Main CLI entry-point.
#[derive(Debug, Parser)]
#[command(
    name    = "wayfind",
    bin_name = "wayfind",
    version  = env!("CARGO_PKG_VERSION"),
    author   = env!("CARGO_PKG_AUTHORS"),
    about    = "\u{2728} Batch code formatter",
    long_about = "Wayfind walks a project, formats every JavaScript, JSON, CSS, \
                  SCSS, HTML, Markdown and YAML file it finds, and writes back \
                  the files whose formatting changed.",
    after_help = "EXAMPLES:\n\
        \x20 wayfind format\n\
        \x20 wayfind format src docs/README.md\n\
        \x20 wayfind check --root ../web\n\
        \x20 wayfind completions bash > /usr/share/bash-completion/completions/wayfind",
    arg_required_else_help = true,
    subcommand_required    = true,
)]
pub struct Cli {
    /// Flags available on every subcommand.
    #[command(flatten)]
    pub global: GlobalArgs,

    /// Subcommand to execute.
    #[command(subcommand)]
    pub command: Commands,
}

// ── Subcommands ───────────────────────────────────────────────────────────────

/// All available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Format files in place.
    #[command(
        visible_alias = "fmt",
        about = "Format files in place",
        after_help = "EXAMPLES:\n\
            \x20 wayfind format                 # whole working directory\n\
            \x20 wayfind format src             # one directory\n\
            \x20 wayfind format --root ../app   # another project"
    )]
    Format(FormatArgs),

    /// Report files whose formatting would change, without writing.
    #[command(
        visible_alias = "lint",
        about = "Check formatting without writing",
        after_help = "EXAMPLES:\n\
            \x20 wayfind check\n\
            \x20 wayfind check --output-format json > report.json"
    )]
    Check(FormatArgs),

    /// Generate shell completion scripts.
    #[command(
        about = "Generate shell completions",
        after_help = "EXAMPLES:\n\
            \x20 wayfind completions bash > ~/.local/share/bash-completion/completions/wayfind\n\
            \x20 wayfind completions zsh  > ~/.zfunc/_wayfind\n\
            \x20 wayfind completions fish > ~/.config/fish/completions/wayfind.fish"
    )]
    Completions(CompletionsArgs),

    /// Inspect the Wayfind configuration.
    #[command(
        about = "Configuration management",
        subcommand,
        after_help = "EXAMPLES:\n\
            \x20 wayfind config get format.ignore_path\n\
            \x20 wayfind config list\n\
            \x20 wayfind config path"
    )]
    Config(ConfigCommands),
}

// ── format / check ────────────────────────────────────────────────────────────

/// Arguments shared by `wayfind format` and `wayfind check`.
#[derive(Debug, Args)]
pub struct FormatArgs {
    /// Files or directories to format; defaults to the whole root.
    ///
    /// Named files are processed whatever their extension. Directories are
    /// scanned like the root.
    #[arg(value_name = "PATH", help = "Files or directories to format")]
    pub paths: Vec<PathBuf>,

    /// Project root. Paths must lie inside it.
    #[arg(
        short = 'r',
        long = "root",
        value_name = "DIR",
        help = "Project root (default: working directory)"
    )]
    pub root: Option<PathBuf>,

    /// Ignore file in gitignore syntax.
    #[arg(
        long = "ignore-path",
        value_name = "FILE",
        help = "Ignore file (default: <root>/.prettierignore)"
    )]
    pub ignore_path: Option<PathBuf>,

    /// Skip `.editorconfig` lookup.
    #[arg(long = "no-editorconfig", help = "Do not read .editorconfig files")]
    pub no_editorconfig: bool,
}

// ── completions ───────────────────────────────────────────────────────────────

/// Arguments for `wayfind completions`.
#[derive(Debug, Args)]
pub struct CompletionsArgs {
    /// Target shell.
    #[arg(value_enum, help = "Shell to generate completions for")]
    pub shell: Shell,
}

/// Shells supported by `clap_complete`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
#[value(rename_all = "lowercase")]
pub enum Shell {
    Bash,
    Zsh,
    Fish,
    PowerShell,
    Elvish,
}

// ── config ────────────────────────────────────────────────────────────────────

/// Subcommands of `wayfind config`.
#[derive(Debug, Subcommand)]
pub enum ConfigCommands {
    /// Print one configuration value.
    Get {
        /// Dotted key path, e.g. `format.ignore_path`.
        key: String,
    },
    /// Print all configuration values.
    List,
    /// Print the path of the configuration file in effect.
    Path,
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn verify_cli_structure() {
        Cli::command().debug_assert();
    }

    #[test]
    fn parse_format_with_paths() {
        let cli = Cli::parse_from(["wayfind", "format", "src", "README.md", "--root", "."]);
        match cli.command {
            Commands::Format(args) => {
                assert_eq!(args.paths.len(), 2);
                assert_eq!(args.root, Some(PathBuf::from(".")));
            }
            other => panic!("expected Format, got {other:?}"),
        }
    }

    #[test]
    fn lint_is_an_alias_for_check() {
        let cli = Cli::parse_from(["wayfind", "lint"]);
        assert!(matches!(cli.command, Commands::Check(_)));
    }

    #[test]
    fn fmt_is_an_alias_for_format() {
        let cli = Cli::parse_from(["wayfind", "fmt", "--no-editorconfig"]);
        match cli.command {
            Commands::Format(args) => assert!(args.no_editorconfig),
            other => panic!("expected Format, got {other:?}"),
        }
    }

    #[test]
    fn quiet_and_verbose_conflict() {
        let result = Cli::try_parse_from(["wayfind", "--quiet", "--verbose", "format"]);
        assert!(result.is_err());
    }

    #[test]
    fn config_get_requires_key() {
        assert!(Cli::try_parse_from(["wayfind", "config", "get"]).is_err());
    }
}
