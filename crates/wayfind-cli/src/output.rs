//! Console output for run progress and command results.

use std::io::{self, IsTerminal};

use console::Term;
use owo_colors::OwoColorize;

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Colour and weight of a marked line.
#[derive(Debug, Clone, Copy)]
enum Tone {
    Good,
    Bad,
    Warn,
    Dim,
}

/// Writes to stdout according to `--quiet`, `--no-color` and the output
/// format.
pub struct OutputManager {
    format: OutputFormat,
    quiet: bool,
    color: bool,
    term: Term,
}

impl OutputManager {
    /// `--output-format auto` defers to `output.format` from the config,
    /// then to whether stdout is a terminal.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let format = match args.output_format {
            OutputFormat::Auto => match parse_format(&config.output.format) {
                OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
                OutputFormat::Auto => OutputFormat::Plain,
                from_config => from_config,
            },
            explicit => explicit,
        };

        Self {
            format,
            quiet: args.quiet,
            color: format == OutputFormat::Human && !args.no_color && !config.output.no_color,
            term: Term::stdout(),
        }
    }

    /// Unmarked line; dropped with `--quiet`.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Command result meant for pipes (`config get`, JSON reports). Always
    /// printed.
    pub fn data(&self, payload: &str) -> io::Result<()> {
        self.term.write_line(payload)
    }

    /// `✔ formatted: a.js`
    pub fn success(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{2714}', msg, Tone::Good)
    }

    /// `✖ error in: bad.json`; printed even with `--quiet`.
    pub fn error(&self, msg: &str) -> io::Result<()> {
        self.term.write_line(&self.paint('\u{2716}', msg, Tone::Bad))
    }

    /// `✎ would format: a.js`
    pub fn pending(&self, msg: &str) -> io::Result<()> {
        self.marked('\u{270e}', msg, Tone::Warn)
    }

    /// Low-importance line such as `= unchanged: a.js`.
    pub fn muted(&self, marker: char, msg: &str) -> io::Result<()> {
        self.marked(marker, msg, Tone::Dim)
    }

    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        if self.color {
            self.term.write_line(&text.cyan().bold().to_string())
        } else {
            self.term.write_line(text)
        }
    }

    pub fn supports_color(&self) -> bool {
        self.color
    }

    /// Never [`OutputFormat::Auto`].
    pub fn format(&self) -> OutputFormat {
        self.format
    }

    fn marked(&self, marker: char, msg: &str, tone: Tone) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(&self.paint(marker, msg, tone))
    }

    fn paint(&self, marker: char, msg: &str, tone: Tone) -> String {
        if !self.color {
            return format!("{marker} {msg}");
        }
        match tone {
            Tone::Good => format!("{} {}", marker.green().bold(), msg.green()),
            Tone::Bad => format!("{} {}", marker.red().bold(), msg.red()),
            Tone::Warn => format!("{} {}", marker.yellow().bold(), msg.yellow()),
            Tone::Dim => format!("{} {}", marker.dimmed(), msg.dimmed()),
        }
    }
}

fn parse_format(value: &str) -> OutputFormat {
    match value.to_ascii_lowercase().as_str() {
        "human" => OutputFormat::Human,
        "plain" => OutputFormat::Plain,
        "json" => OutputFormat::Json,
        _ => OutputFormat::Auto,
    }
}
