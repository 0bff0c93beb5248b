//! Per-file option resolution.
//!
//! Sources, lowest priority first:
//! 1. built-in defaults ([`FormatOptions::default`])
//! 2. `.editorconfig` files
//! 3. the nearest formatter config file (`.prettierrc`, `package.json`, ...)
//! 4. that file's `overrides` entries matching the path

pub mod editorconfig;
pub mod rc_file;

use std::path::Path;

use tracing::trace;

use wayfind_core::{
    domain::{FormatOptions, OptionsLayer},
    error::WayfindResult,
};

pub use rc_file::{RC_FILE_NAMES, RcFile};

/// Resolves [`FormatOptions`] for a file from the files around it.
#[derive(Debug, Clone)]
pub struct ConfigResolver {
    editorconfig: bool,
}

impl ConfigResolver {
    pub fn new() -> Self {
        Self { editorconfig: true }
    }

    /// Toggle `.editorconfig` lookup.
    pub fn with_editorconfig(mut self, enabled: bool) -> Self {
        self.editorconfig = enabled;
        self
    }

    pub fn resolve(&self, file: &Path) -> WayfindResult<FormatOptions> {
        let mut layer = OptionsLayer::default();
        if self.editorconfig {
            layer = layer.overlay(&editorconfig::resolve(file)?);
        }

        let dir = file.parent().unwrap_or(Path::new(""));
        if let Some(rc) = RcFile::find_nearest(dir)? {
            layer = layer.overlay(&rc.layer_for(file)?);
        }

        let options = FormatOptions::default().merge(&layer);
        trace!(file = %file.display(), ?options, "Resolved options");
        Ok(options)
    }
}

impl Default for ConfigResolver {
    fn default() -> Self {
        Self::new()
    }
}
