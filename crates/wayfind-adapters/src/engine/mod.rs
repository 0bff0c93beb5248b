//! Format engine backed by in-process language plugins.

pub mod plugins;

use std::path::Path;

use tracing::{debug, instrument};

use wayfind_core::{
    application::{
        ApplicationError,
        ports::{FileInfo, FormatEngine},
    },
    domain::{FormatOptions, Parser},
    error::WayfindResult,
};

use crate::config_resolver::ConfigResolver;
use crate::ignore_file::IgnoreFile;
use plugins::{CommandPlugin, LanguagePlugin, PluginError};

/// [`FormatEngine`] that dispatches each parser to a registered plugin.
///
/// A parser without a plugin is reported as "no parser", so the file is
/// skipped rather than failed.
pub struct PluginEngine {
    plugins: Vec<Box<dyn LanguagePlugin>>,
    resolver: ConfigResolver,
}

impl PluginEngine {
    pub fn builder() -> PluginEngineBuilder {
        PluginEngineBuilder::default()
    }

    /// Engine with every in-process plugin and default config resolution.
    pub fn with_builtin_plugins() -> Self {
        Self::builder().with_builtin_plugins().build()
    }

    /// The plugin handling `parser`. Later registrations win.
    pub fn plugin_for(&self, parser: Parser) -> Option<&dyn LanguagePlugin> {
        self.plugins
            .iter()
            .rev()
            .find(|p| p.parsers().contains(&parser))
            .map(|p| p.as_ref())
    }

    /// Parsers with a registered plugin, in [`Parser::ALL`] order.
    pub fn supported_parsers(&self) -> Vec<Parser> {
        Parser::ALL
            .into_iter()
            .filter(|p| self.plugin_for(*p).is_some())
            .collect()
    }
}

impl std::fmt::Debug for PluginEngine {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let names: Vec<&str> = self.plugins.iter().map(|p| p.name()).collect();
        f.debug_struct("PluginEngine")
            .field("plugins", &names)
            .field("resolver", &self.resolver)
            .finish()
    }
}

impl FormatEngine for PluginEngine {
    fn resolve_options(&self, path: &Path) -> WayfindResult<FormatOptions> {
        self.resolver.resolve(path)
    }

    fn file_info(&self, path: &Path, ignore_path: &Path) -> WayfindResult<FileInfo> {
        let ignored = IgnoreFile::load(ignore_path)?.is_ignored(path);
        let parser = Parser::infer(path).filter(|p| self.plugin_for(*p).is_some());
        Ok(FileInfo { ignored, parser })
    }

    #[instrument(skip(self, path, source, options), fields(path = %path.display()))]
    fn format(
        &self,
        path: &Path,
        source: &str,
        parser: Parser,
        options: &FormatOptions,
    ) -> WayfindResult<String> {
        let plugin = self
            .plugin_for(parser)
            .ok_or_else(|| ApplicationError::FormattingFailed {
                parser: parser.to_string(),
                reason: "no plugin registered".into(),
            })?;
        debug!(plugin = plugin.name(), "Formatting");

        let formatted = plugin
            .format(path, source, parser, options)
            .map_err(|e| match e {
                PluginError::Command { command, reason } => {
                    ApplicationError::ExternalCommand { command, reason }
                }
                other => ApplicationError::FormattingFailed {
                    parser: parser.to_string(),
                    reason: other.to_string(),
                },
            })?;
        Ok(options.end_of_line.apply(&formatted))
    }
}

/// Builder for [`PluginEngine`].
#[derive(Default)]
pub struct PluginEngineBuilder {
    plugins: Vec<Box<dyn LanguagePlugin>>,
    resolver: ConfigResolver,
}

impl PluginEngineBuilder {
    pub fn with_builtin_plugins(mut self) -> Self {
        self.plugins.extend(plugins::builtin());
        self
    }

    pub fn plugin(mut self, plugin: impl LanguagePlugin + 'static) -> Self {
        self.plugins.push(Box::new(plugin));
        self
    }

    /// Register an external command for `parser`.
    pub fn command(self, parser: Parser, argv: Vec<String>) -> WayfindResult<Self> {
        let plugin = CommandPlugin::new(vec![parser], argv).map_err(|e| {
            wayfind_core::error::WayfindError::Configuration {
                message: format!("formatter command for {}: {}", parser, e),
            }
        })?;
        Ok(self.plugin(plugin))
    }

    pub fn editorconfig(mut self, enabled: bool) -> Self {
        self.resolver = self.resolver.with_editorconfig(enabled);
        self
    }

    pub fn build(self) -> PluginEngine {
        PluginEngine {
            plugins: self.plugins,
            resolver: self.resolver,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use wayfind_core::domain::EndOfLine;

    struct Upper;

    impl LanguagePlugin for Upper {
        fn name(&self) -> &str {
            "upper"
        }

        fn parsers(&self) -> &[Parser] {
            &[Parser::Babel]
        }

        fn format(
            &self,
            _path: &Path,
            source: &str,
            _parser: Parser,
            _options: &FormatOptions,
        ) -> Result<String, PluginError> {
            Ok(source.to_uppercase())
        }
    }

    #[test]
    fn php_has_no_parser_without_a_command() {
        let engine = PluginEngine::with_builtin_plugins();
        let dir = tempfile::tempdir().unwrap();
        let info = engine
            .file_info(&dir.path().join("a.php"), &dir.path().join(".prettierignore"))
            .unwrap();
        assert_eq!(info.parser, None);
        assert!(!engine.supported_parsers().contains(&Parser::Php));
    }

    #[test]
    fn later_plugins_override_builtins() {
        let engine = PluginEngine::builder()
            .with_builtin_plugins()
            .plugin(Upper)
            .build();
        let out = engine
            .format(
                Path::new("a.js"),
                "let a\n",
                Parser::Babel,
                &FormatOptions::default(),
            )
            .unwrap();
        assert_eq!(out, "LET A\n");
    }

    #[test]
    fn line_endings_are_normalized_after_plugins() {
        let engine = PluginEngine::builder().plugin(Upper).build();
        let options = FormatOptions {
            end_of_line: EndOfLine::Crlf,
            ..Default::default()
        };
        let out = engine
            .format(Path::new("a.js"), "a\nb\n", Parser::Babel, &options)
            .unwrap();
        assert_eq!(out, "A\r\nB\r\n");
    }

    #[test]
    fn ignore_file_marks_files_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let ignore = dir.path().join(".prettierignore");
        fs::write(&ignore, "vendor/\n").unwrap();

        let engine = PluginEngine::with_builtin_plugins();
        let info = engine
            .file_info(&dir.path().join("vendor/lib.js"), &ignore)
            .unwrap();
        assert!(info.ignored);
        assert_eq!(info.parser, Some(Parser::Babel));
    }

    #[test]
    fn empty_command_is_a_configuration_error() {
        assert!(PluginEngine::builder().command(Parser::Php, Vec::new()).is_err());
    }

    #[test]
    fn parse_failure_names_the_parser() {
        let engine = PluginEngine::with_builtin_plugins();
        let err = engine
            .format(
                Path::new("bad.json"),
                "{\"name\": ",
                Parser::Json,
                &FormatOptions::default(),
            )
            .unwrap_err();
        assert!(err.to_string().contains("json"));
    }
}
