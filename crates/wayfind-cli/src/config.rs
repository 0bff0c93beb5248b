//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. Environment variables, `WAYFIND__SECTION__KEY`
//! 3. Config file: `--config FILE`, else `wayfind.toml` in the working
//!    directory, else `config.toml` in the platform config directory
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};

/// Config file looked up in the working directory.
pub const LOCAL_CONFIG_FILE: &str = "wayfind.toml";

/// Application configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Output settings.
    pub output: OutputConfig,
    /// Discovery and option-resolution settings.
    pub format: FormatConfig,
    /// External formatter commands.
    pub plugins: PluginsConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FormatConfig {
    /// Ignore file, relative to the project root.
    pub ignore_path: PathBuf,
    /// Directory names skipped during scans, on top of `node_modules`,
    /// `dist` and `coverage`.
    pub extra_ignored_dirs: Vec<String>,
    /// Read `.editorconfig` files.
    pub editorconfig: bool,
}

impl Default for FormatConfig {
    fn default() -> Self {
        Self {
            ignore_path: PathBuf::from(".prettierignore"),
            extra_ignored_dirs: Vec::new(),
            editorconfig: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PluginsConfig {
    pub php: CommandConfig,
}

/// An external formatter; an empty `command` leaves it disabled.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CommandConfig {
    /// Program and arguments; `{file}` is replaced with the file path.
    pub command: Vec<String>,
}

impl CommandConfig {
    pub fn is_enabled(&self) -> bool {
        !self.command.is_empty()
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then environment.
    ///
    /// An explicit `config_file` must exist; the implicit locations are
    /// optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let defaults =
            Config::try_from(&Self::default()).context("Failed to serialise default config")?;

        let file = match config_file {
            Some(path) => File::from(path.as_path())
                .format(FileFormat::Toml)
                .required(true),
            None => File::from(Self::active_path(None))
                .format(FileFormat::Toml)
                .required(false),
        };

        let env = Environment::with_prefix("WAYFIND")
            .separator("__")
            .list_separator(" ")
            .with_list_parse_key("format.extra_ignored_dirs")
            .with_list_parse_key("plugins.php.command")
            .try_parsing(true);

        Config::builder()
            .add_source(defaults)
            .add_source(file)
            .add_source(env)
            .build()
            .context("Failed to read configuration")?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// The file `load` reads for the given `--config` value.
    pub fn active_path(config_file: Option<&PathBuf>) -> PathBuf {
        if let Some(path) = config_file {
            return path.clone();
        }
        let local = Path::new(LOCAL_CONFIG_FILE);
        if local.is_file() {
            return local.to_path_buf();
        }
        Self::config_path()
    }

    /// Path to the user-wide configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `wayfind.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "wayfind", "wayfind")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(LOCAL_CONFIG_FILE))
    }
}
