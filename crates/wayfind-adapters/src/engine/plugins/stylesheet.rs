//! CSS and SCSS via `malva`.

use std::path::Path;

use malva::{Syntax, config::FormatOptions as MalvaOptions};
use wayfind_core::domain::{FormatOptions, Parser};

use super::{LanguagePlugin, PluginError};

#[derive(Debug, Clone, Copy, Default)]
pub struct StylesheetPlugin;

impl LanguagePlugin for StylesheetPlugin {
    fn name(&self) -> &str {
        "malva"
    }

    fn parsers(&self) -> &[Parser] {
        &[Parser::Css, Parser::Scss]
    }

    fn format(
        &self,
        _path: &Path,
        source: &str,
        parser: Parser,
        options: &FormatOptions,
    ) -> Result<String, PluginError> {
        let syntax = match parser {
            Parser::Css => Syntax::Css,
            Parser::Scss => Syntax::Scss,
            other => return Err(PluginError::Unsupported(other)),
        };

        let mut config = MalvaOptions::default();
        config.layout.print_width = options.print_width as usize;
        config.layout.indent_width = usize::from(options.tab_width);
        config.layout.use_tabs = options.use_tabs;

        malva::format_text(source, syntax, &config).map_err(PluginError::syntax)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn expands_rules() {
        let out = StylesheetPlugin
            .format(
                Path::new("a.css"),
                "a{color:red}",
                Parser::Css,
                &FormatOptions::default(),
            )
            .unwrap();
        assert_eq!(out, "a {\n  color: red;\n}\n");
    }

    #[test]
    fn rejects_unbalanced_braces() {
        let result = StylesheetPlugin.format(
            Path::new("a.scss"),
            "a { color: red;",
            Parser::Scss,
            &FormatOptions::default(),
        );
        assert!(result.is_err());
    }
}
