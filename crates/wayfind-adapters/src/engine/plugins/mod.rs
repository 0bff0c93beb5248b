//! Language plugins wrapping the individual formatting libraries.

mod command;
mod json;
mod markdown;
mod markup;
mod script;
mod stylesheet;
mod yaml;

use std::path::Path;

use thiserror::Error;
use wayfind_core::domain::{FormatOptions, Parser};

pub use command::CommandPlugin;
pub use json::JsonPlugin;
pub use markdown::MarkdownPlugin;
pub use markup::MarkupPlugin;
pub use script::ScriptPlugin;
pub use stylesheet::StylesheetPlugin;
pub use yaml::YamlPlugin;

/// Errors raised by a single plugin call.
#[derive(Debug, Error)]
pub enum PluginError {
    /// The library could not parse or print the input.
    #[error("{0}")]
    Syntax(String),

    /// An external command failed to run.
    #[error("{reason}")]
    Command { command: String, reason: String },

    /// The plugin was asked for a parser it does not handle.
    #[error("parser {0} is not handled by this plugin")]
    Unsupported(Parser),
}

impl PluginError {
    pub(crate) fn syntax(e: impl std::fmt::Display) -> Self {
        Self::Syntax(e.to_string())
    }
}

/// One formatting library behind a common interface.
///
/// Implementations return the formatted text, or the input unchanged when
/// the library reports nothing to do. Line endings are normalized by the
/// engine afterwards.
pub trait LanguagePlugin: Send + Sync {
    fn name(&self) -> &str;

    /// Parsers this plugin can format.
    fn parsers(&self) -> &[Parser];

    fn format(
        &self,
        path: &Path,
        source: &str,
        parser: Parser,
        options: &FormatOptions,
    ) -> Result<String, PluginError>;
}

/// Every in-process plugin.
pub fn builtin() -> Vec<Box<dyn LanguagePlugin>> {
    vec![
        Box::new(ScriptPlugin),
        Box::new(JsonPlugin),
        Box::new(StylesheetPlugin),
        Box::new(MarkupPlugin),
        Box::new(MarkdownPlugin),
        Box::new(YamlPlugin),
    ]
}
