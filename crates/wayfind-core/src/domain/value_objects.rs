//! Domain value objects: Parser, EndOfLine, RunMode, SkipReason.
//!
//! # Design
//!
//! These are pure value types: `Copy`, equality-by-value, no identity.
//! Inference from a path only looks at the file name; whether a parser is
//! actually *available* is decided by the format engine, not here.
//!
//! # Adding New Parsers
//!
//! 1. Add the enum variant here
//! 2. Add the `as_str`, extension and `FromStr` arms here
//! 3. Register a plugin for it in the engine adapter

use crate::domain::error::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::Path;
use std::str::FromStr;

// ── Parser ────────────────────────────────────────────────────────────────────

/// The syntax a file is formatted as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Parser {
    Babel,
    Json,
    Css,
    Scss,
    Html,
    Markdown,
    Yaml,
    Php,
}

impl Parser {
    pub const ALL: [Parser; 8] = [
        Self::Babel,
        Self::Json,
        Self::Css,
        Self::Scss,
        Self::Html,
        Self::Markdown,
        Self::Yaml,
        Self::Php,
    ];

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Babel => "babel",
            Self::Json => "json",
            Self::Css => "css",
            Self::Scss => "scss",
            Self::Html => "html",
            Self::Markdown => "markdown",
            Self::Yaml => "yaml",
            Self::Php => "php",
        }
    }

    /// File extensions (without the dot) this parser claims.
    pub const fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::Babel => &["js", "cjs", "mjs"],
            Self::Json => &["json"],
            Self::Css => &["css"],
            Self::Scss => &["scss"],
            Self::Html => &["html"],
            Self::Markdown => &["md"],
            Self::Yaml => &["yml", "yaml"],
            Self::Php => &["php"],
        }
    }

    /// Infer the parser from a file name.
    ///
    /// A handful of extension-less config files are JSON; everything else is
    /// decided by the (case-insensitive) extension. Returns `None` when the
    /// file type is not recognised.
    pub fn infer(path: &Path) -> Option<Self> {
        let file_name = path.file_name()?.to_str()?;
        if matches!(file_name, ".prettierrc" | ".babelrc" | ".jshintrc") {
            return Some(Self::Json);
        }

        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|parser| parser.extensions().contains(&ext.as_str()))
    }
}

impl fmt::Display for Parser {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Parser {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "babel" | "js" | "javascript" => Ok(Self::Babel),
            "json" => Ok(Self::Json),
            "css" => Ok(Self::Css),
            "scss" => Ok(Self::Scss),
            "html" => Ok(Self::Html),
            "markdown" | "md" => Ok(Self::Markdown),
            "yaml" | "yml" => Ok(Self::Yaml),
            "php" => Ok(Self::Php),
            other => Err(DomainError::UnknownParser(other.to_string())),
        }
    }
}

// ── EndOfLine ────────────────────────────────────────────────────────────────

/// Line ending written into formatted output.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndOfLine {
    #[default]
    Lf,
    Crlf,
}

impl EndOfLine {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Lf => "lf",
            Self::Crlf => "crlf",
        }
    }

    /// Rewrite every line break in `text` to this ending.
    pub fn apply(self, text: &str) -> String {
        let normalized = text.replace("\r\n", "\n");
        match self {
            Self::Lf => normalized,
            Self::Crlf => normalized.replace('\n', "\r\n"),
        }
    }
}

impl fmt::Display for EndOfLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EndOfLine {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "lf" => Ok(Self::Lf),
            "crlf" => Ok(Self::Crlf),
            other => Err(DomainError::InvalidOption {
                option: "endOfLine",
                reason: format!("unsupported line ending '{other}'"),
            }),
        }
    }
}

// ── RunMode ──────────────────────────────────────────────────────────────────

/// Whether a run rewrites files or only reports what would change.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RunMode {
    #[default]
    Write,
    Check,
}

impl RunMode {
    pub const fn writes(self) -> bool {
        matches!(self, Self::Write)
    }
}

impl fmt::Display for RunMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Write => "write",
            Self::Check => "check",
        })
    }
}

// ── SkipReason ───────────────────────────────────────────────────────────────

/// Why a candidate was not formatted. Never an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// Matched by the ignore file.
    Ignored,
    /// No registered plugin handles the file type.
    NoParser,
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Ignored => "ignored",
            Self::NoParser => "no parser",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infer_script_extensions() {
        for name in ["a.js", "b.cjs", "c.mjs", "D.JS"] {
            assert_eq!(Parser::infer(Path::new(name)), Some(Parser::Babel), "{name}");
        }
    }

    #[test]
    fn infer_unknown_extension_is_none() {
        assert_eq!(Parser::infer(Path::new("c.bin")), None);
        assert_eq!(Parser::infer(Path::new("Makefile")), None);
    }

    #[test]
    fn infer_extensionless_rc_files_as_json() {
        assert_eq!(Parser::infer(Path::new("x/.prettierrc")), Some(Parser::Json));
    }

    #[test]
    fn parser_from_str_accepts_aliases() {
        assert_eq!("yml".parse::<Parser>().unwrap(), Parser::Yaml);
        assert_eq!("JavaScript".parse::<Parser>().unwrap(), Parser::Babel);
        assert!("cobol".parse::<Parser>().is_err());
    }

    #[test]
    fn end_of_line_apply_normalizes_mixed_input() {
        assert_eq!(EndOfLine::Lf.apply("a\r\nb\n"), "a\nb\n");
        assert_eq!(EndOfLine::Crlf.apply("a\r\nb\n"), "a\r\nb\r\n");
    }

    #[test]
    fn check_mode_does_not_write() {
        assert!(RunMode::Write.writes());
        assert!(!RunMode::Check.writes());
    }
}
