//! YAML via `pretty_yaml`.

use std::path::Path;

use pretty_yaml::config::FormatOptions as YamlOptions;
use wayfind_core::domain::{FormatOptions, Parser};

use super::{LanguagePlugin, PluginError};

/// YAML never indents with tabs, so `use_tabs` is not forwarded.
#[derive(Debug, Clone, Copy, Default)]
pub struct YamlPlugin;

impl LanguagePlugin for YamlPlugin {
    fn name(&self) -> &str {
        "pretty_yaml"
    }

    fn parsers(&self) -> &[Parser] {
        &[Parser::Yaml]
    }

    fn format(
        &self,
        _path: &Path,
        source: &str,
        parser: Parser,
        options: &FormatOptions,
    ) -> Result<String, PluginError> {
        if parser != Parser::Yaml {
            return Err(PluginError::Unsupported(parser));
        }
        let mut config = YamlOptions::default();
        config.layout.print_width = options.print_width as usize;
        config.layout.indent_width = usize::from(options.tab_width);

        pretty_yaml::format_text(source, &config).map_err(PluginError::syntax)
    }
}
