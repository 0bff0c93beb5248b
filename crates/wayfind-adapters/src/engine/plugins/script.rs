//! JavaScript via `dprint-plugin-typescript`.

use std::path::Path;

use dprint_plugin_typescript::configuration::{
    Configuration, ConfigurationBuilder, QuoteStyle, SemiColons,
};
use wayfind_core::domain::{FormatOptions, Parser};

use super::{LanguagePlugin, PluginError};

#[derive(Debug, Clone, Copy, Default)]
pub struct ScriptPlugin;

fn configuration(options: &FormatOptions) -> Configuration {
    ConfigurationBuilder::new()
        .line_width(options.print_width)
        .indent_width(options.tab_width)
        .use_tabs(options.use_tabs)
        .quote_style(if options.single_quote {
            QuoteStyle::PreferSingle
        } else {
            QuoteStyle::PreferDouble
        })
        .semi_colons(if options.semi {
            SemiColons::Prefer
        } else {
            SemiColons::Asi
        })
        .build()
}

impl LanguagePlugin for ScriptPlugin {
    fn name(&self) -> &str {
        "typescript"
    }

    fn parsers(&self) -> &[Parser] {
        &[Parser::Babel]
    }

    fn format(
        &self,
        path: &Path,
        source: &str,
        parser: Parser,
        options: &FormatOptions,
    ) -> Result<String, PluginError> {
        if parser != Parser::Babel {
            return Err(PluginError::Unsupported(parser));
        }
        let config = configuration(options);
        let formatted = dprint_plugin_typescript::format_text(path, None, source.to_string(), &config)
            .map_err(PluginError::syntax)?;
        Ok(formatted.unwrap_or_else(|| source.to_string()))
    }
}
