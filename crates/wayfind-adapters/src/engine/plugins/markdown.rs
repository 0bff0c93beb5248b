//! Markdown via `dprint-plugin-markdown`.

use std::path::Path;

use dprint_plugin_markdown::configuration::ConfigurationBuilder;
use wayfind_core::domain::{FormatOptions, Parser};

use super::{LanguagePlugin, PluginError};

/// Fenced code blocks are left exactly as written.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkdownPlugin;

impl LanguagePlugin for MarkdownPlugin {
    fn name(&self) -> &str {
        "markdown"
    }

    fn parsers(&self) -> &[Parser] {
        &[Parser::Markdown]
    }

    fn format(
        &self,
        _path: &Path,
        source: &str,
        parser: Parser,
        options: &FormatOptions,
    ) -> Result<String, PluginError> {
        if parser != Parser::Markdown {
            return Err(PluginError::Unsupported(parser));
        }
        let config = ConfigurationBuilder::new()
            .line_width(options.print_width)
            .build();
        let formatted =
            dprint_plugin_markdown::format_text(source, &config, |_tag, _code, _width| Ok(None))
                .map_err(PluginError::syntax)?;
        Ok(formatted.unwrap_or_else(|| source.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalizes_list_markers() {
        let out = MarkdownPlugin
            .format(
                Path::new("README.md"),
                "# Title\n\n* one\n* two\n",
                Parser::Markdown,
                &FormatOptions::default(),
            )
            .unwrap();
        assert_eq!(out, "# Title\n\n- one\n- two\n");
    }
}
