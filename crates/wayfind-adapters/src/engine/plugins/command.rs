//! External formatter commands (stdin in, stdout out).

use std::{
    io::Write as _,
    path::Path,
    process::{Command, Stdio},
    thread,
};

use tracing::debug;
use wayfind_core::domain::{FormatOptions, Parser};

use super::{LanguagePlugin, PluginError};

/// Placeholder replaced with the file path in command arguments.
pub const FILE_PLACEHOLDER: &str = "{file}";

/// Runs a configured program for one or more parsers.
///
/// The source is written to the program's stdin; its stdout is the result.
/// A non-zero exit status is a formatting failure carrying stderr.
#[derive(Debug, Clone)]
pub struct CommandPlugin {
    parsers: Vec<Parser>,
    program: String,
    args: Vec<String>,
}

impl CommandPlugin {
    /// `argv[0]` is the program; the rest are arguments.
    pub fn new(parsers: Vec<Parser>, argv: Vec<String>) -> Result<Self, PluginError> {
        let mut argv = argv.into_iter();
        let program = argv
            .next()
            .filter(|p| !p.trim().is_empty())
            .ok_or_else(|| PluginError::Command {
                command: String::new(),
                reason: "command must not be empty".into(),
            })?;
        Ok(Self {
            parsers,
            program,
            args: argv.collect(),
        })
    }

    fn failure(&self, reason: impl Into<String>) -> PluginError {
        PluginError::Command {
            command: self.program.clone(),
            reason: reason.into(),
        }
    }
}

impl LanguagePlugin for CommandPlugin {
    fn name(&self) -> &str {
        &self.program
    }

    fn parsers(&self) -> &[Parser] {
        &self.parsers
    }

    fn format(
        &self,
        path: &Path,
        source: &str,
        parser: Parser,
        _options: &FormatOptions,
    ) -> Result<String, PluginError> {
        if !self.parsers.contains(&parser) {
            return Err(PluginError::Unsupported(parser));
        }

        let file = path.to_string_lossy();
        let args: Vec<String> = self
            .args
            .iter()
            .map(|a| a.replace(FILE_PLACEHOLDER, &file))
            .collect();
        debug!(program = %self.program, ?args, "Running external formatter");

        let mut child = Command::new(&self.program)
            .args(&args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .spawn()
            .map_err(|e| self.failure(format!("failed to start: {}", e)))?;

        let mut stdin = child
            .stdin
            .take()
            .ok_or_else(|| self.failure("stdin unavailable"))?;
        let input = source.to_string();
        // Write stdin concurrently with reading stdout; large outputs deadlock otherwise.
        let writer = thread::spawn(move || stdin.write_all(input.as_bytes()));

        let output = child
            .wait_with_output()
            .map_err(|e| self.failure(format!("failed to wait: {}", e)))?;
        // A child that exits without reading all of stdin is not an error by itself.
        let _ = writer.join();

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            return Err(self.failure(format!("{} ({})", stderr.trim(), output.status)));
        }
        String::from_utf8(output.stdout).map_err(|e| self.failure(format!("output is not UTF-8: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn empty_command_is_rejected() {
        assert!(CommandPlugin::new(vec![Parser::Php], Vec::new()).is_err());
        assert!(CommandPlugin::new(vec![Parser::Php], argv(&[" "])).is_err());
    }

    #[cfg(unix)]
    #[test]
    fn pipes_source_through_the_command() {
        let plugin = CommandPlugin::new(vec![Parser::Php], argv(&["cat"])).unwrap();
        let out = plugin
            .format(
                Path::new("index.php"),
                "<?php echo 1;\n",
                Parser::Php,
                &FormatOptions::default(),
            )
            .unwrap();
        assert_eq!(out, "<?php echo 1;\n");
    }

    #[cfg(unix)]
    #[test]
    fn substitutes_the_file_placeholder() {
        let plugin =
            CommandPlugin::new(vec![Parser::Php], argv(&["echo", "path={file}"])).unwrap();
        let out = plugin
            .format(
                Path::new("src/index.php"),
                "",
                Parser::Php,
                &FormatOptions::default(),
            )
            .unwrap();
        assert_eq!(out, "path=src/index.php\n");
    }

    #[cfg(unix)]
    #[test]
    fn non_zero_exit_is_a_failure() {
        let plugin = CommandPlugin::new(
            vec![Parser::Php],
            argv(&["sh", "-c", "echo broken >&2; exit 3"]),
        )
        .unwrap();
        let err = plugin
            .format(
                Path::new("a.php"),
                "<?php",
                Parser::Php,
                &FormatOptions::default(),
            )
            .unwrap_err();
        assert!(err.to_string().contains("broken"));
    }

    #[test]
    fn missing_program_fails_to_start() {
        let plugin =
            CommandPlugin::new(vec![Parser::Php], argv(&["wayfind-no-such-formatter"])).unwrap();
        let err = plugin
            .format(
                Path::new("a.php"),
                "<?php",
                Parser::Php,
                &FormatOptions::default(),
            )
            .unwrap_err();
        assert!(err.to_string().contains("failed to start"));
    }
}
