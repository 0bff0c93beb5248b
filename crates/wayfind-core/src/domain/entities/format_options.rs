//! Resolved formatting configuration and the partial layers it is built from.

use serde::{Deserialize, Serialize};

use crate::domain::{error::DomainError, value_objects::EndOfLine};

/// Fully resolved options for one file.
///
/// Produced by layering [`OptionsLayer`]s over [`FormatOptions::default`]:
/// editorconfig first, then the nearest formatter config file, then any of
/// its overrides that match the file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FormatOptions {
    pub print_width: u32,
    pub tab_width: u8,
    pub use_tabs: bool,
    pub semi: bool,
    pub single_quote: bool,
    pub end_of_line: EndOfLine,
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            print_width: 80,
            tab_width: 2,
            use_tabs: false,
            semi: true,
            single_quote: false,
            end_of_line: EndOfLine::Lf,
        }
    }
}

impl FormatOptions {
    /// Apply a layer on top of these options; set fields win.
    pub fn merge(mut self, layer: &OptionsLayer) -> Self {
        if let Some(v) = layer.print_width {
            self.print_width = v;
        }
        if let Some(v) = layer.tab_width {
            self.tab_width = v;
        }
        if let Some(v) = layer.use_tabs {
            self.use_tabs = v;
        }
        if let Some(v) = layer.semi {
            self.semi = v;
        }
        if let Some(v) = layer.single_quote {
            self.single_quote = v;
        }
        if let Some(v) = layer.end_of_line {
            self.end_of_line = v;
        }
        self
    }

    pub fn validate(&self) -> Result<(), DomainError> {
        if self.print_width == 0 {
            return Err(DomainError::InvalidOption {
                option: "printWidth",
                reason: "must be greater than zero".into(),
            });
        }
        if self.tab_width == 0 || self.tab_width > 16 {
            return Err(DomainError::InvalidOption {
                option: "tabWidth",
                reason: format!("must be between 1 and 16, got {}", self.tab_width),
            });
        }
        Ok(())
    }
}

/// A partial set of options, as read from one config source.
///
/// Field names follow the camelCase keys used in `.prettierrc` files so the
/// struct deserializes straight from JSON or TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OptionsLayer {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub print_width: Option<u32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub tab_width: Option<u8>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub use_tabs: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub semi: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub single_quote: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_of_line: Option<EndOfLine>,
}

impl OptionsLayer {
    /// Overlay `other` on `self`; fields set in `other` win.
    pub fn overlay(mut self, other: &OptionsLayer) -> Self {
        self.print_width = other.print_width.or(self.print_width);
        self.tab_width = other.tab_width.or(self.tab_width);
        self.use_tabs = other.use_tabs.or(self.use_tabs);
        self.semi = other.semi.or(self.semi);
        self.single_quote = other.single_quote.or(self.single_quote);
        self.end_of_line = other.end_of_line.or(self.end_of_line);
        self
    }
}
