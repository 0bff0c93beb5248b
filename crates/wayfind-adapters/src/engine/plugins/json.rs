//! JSON via `dprint-plugin-json`.

use std::path::Path;

use dprint_plugin_json::configuration::ConfigurationBuilder;
use wayfind_core::domain::{FormatOptions, Parser};

use super::{LanguagePlugin, PluginError};

#[derive(Debug, Clone, Copy, Default)]
pub struct JsonPlugin;

impl LanguagePlugin for JsonPlugin {
    fn name(&self) -> &str {
        "json"
    }

    fn parsers(&self) -> &[Parser] {
        &[Parser::Json]
    }

    fn format(
        &self,
        path: &Path,
        source: &str,
        parser: Parser,
        options: &FormatOptions,
    ) -> Result<String, PluginError> {
        if parser != Parser::Json {
            return Err(PluginError::Unsupported(parser));
        }
        let config = ConfigurationBuilder::new()
            .line_width(options.print_width)
            .indent_width(options.tab_width)
            .use_tabs(options.use_tabs)
            .build();
        let formatted =
            dprint_plugin_json::format_text(path, source, &config).map_err(PluginError::syntax)?;
        Ok(formatted.unwrap_or_else(|| source.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn indents_objects() {
        let out = JsonPlugin
            .format(
                Path::new("b.json"),
                "{\n\"a\":1}",
                Parser::Json,
                &FormatOptions::default(),
            )
            .unwrap();
        assert_eq!(out, "{\n  \"a\": 1\n}\n");
    }

    #[test]
    fn truncated_input_fails() {
        let result = JsonPlugin.format(
            Path::new("bad.json"),
            "{\"name\": ",
            Parser::Json,
            &FormatOptions::default(),
        );
        assert!(result.is_err());
    }
}
