//! HTML via `markup_fmt`.

use std::{borrow::Cow, convert::Infallible, path::Path};

use markup_fmt::{Language, config::FormatOptions as MarkupOptions};
use wayfind_core::domain::{FormatOptions, Parser};

use super::{LanguagePlugin, PluginError};

/// Embedded `<script>` and `<style>` bodies are kept verbatim.
#[derive(Debug, Clone, Copy, Default)]
pub struct MarkupPlugin;

impl LanguagePlugin for MarkupPlugin {
    fn name(&self) -> &str {
        "markup_fmt"
    }

    fn parsers(&self) -> &[Parser] {
        &[Parser::Html]
    }

    fn format(
        &self,
        _path: &Path,
        source: &str,
        parser: Parser,
        options: &FormatOptions,
    ) -> Result<String, PluginError> {
        if parser != Parser::Html {
            return Err(PluginError::Unsupported(parser));
        }
        let mut config = MarkupOptions::default();
        config.layout.print_width = options.print_width as usize;
        config.layout.indent_width = usize::from(options.tab_width);
        config.layout.use_tabs = options.use_tabs;

        markup_fmt::format_text(source, Language::Html, &config, |code, _hints| {
            Ok::<_, Infallible>(Cow::from(code))
        })
        .map_err(PluginError::syntax)
    }
}
