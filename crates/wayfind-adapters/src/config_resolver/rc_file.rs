//! Formatter config files (`.prettierrc` and friends).

use std::path::{Path, PathBuf};

use globset::Glob;
use serde::Deserialize;
use tracing::debug;

use wayfind_core::{
    application::ApplicationError, domain::OptionsLayer, error::WayfindResult,
};

/// File names searched in each directory, in priority order.
pub const RC_FILE_NAMES: &[&str] = &[
    "package.json",
    ".prettierrc",
    ".prettierrc.json",
    ".prettierrc.yaml",
    ".prettierrc.yml",
    ".prettierrc.toml",
];

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(String),
    Many(Vec<String>),
}

impl OneOrMany {
    fn into_vec(self) -> Vec<String> {
        match self {
            Self::One(s) => vec![s],
            Self::Many(v) => v,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawOverride {
    files: OneOrMany,
    #[serde(default)]
    exclude_files: Option<OneOrMany>,
    #[serde(default)]
    options: OptionsLayer,
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RawRcFile {
    #[serde(flatten)]
    base: OptionsLayer,
    #[serde(default)]
    overrides: Vec<RawOverride>,
}

#[derive(Debug, Clone)]
struct Override {
    files: Vec<String>,
    exclude_files: Vec<String>,
    options: OptionsLayer,
}

/// A parsed formatter config file.
#[derive(Debug, Clone)]
pub struct RcFile {
    path: PathBuf,
    base: OptionsLayer,
    overrides: Vec<Override>,
}

impl RcFile {
    /// Find the nearest config file at or above `dir`.
    ///
    /// A `package.json` only counts when it has a `prettier` object.
    pub fn find_nearest(dir: &Path) -> WayfindResult<Option<Self>> {
        for ancestor in dir.ancestors() {
            for name in RC_FILE_NAMES {
                let candidate = ancestor.join(name);
                if !candidate.is_file() {
                    continue;
                }
                if let Some(rc) = Self::load(&candidate)? {
                    debug!(path = %candidate.display(), "Using formatter config");
                    return Ok(Some(rc));
                }
            }
        }
        Ok(None)
    }

    /// Parse one config file. `Ok(None)` for a `package.json` without
    /// formatter settings.
    pub fn load(path: &Path) -> WayfindResult<Option<Self>> {
        let text = std::fs::read_to_string(path).map_err(|e| config_error(path, e))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or_default();

        let raw: RawRcFile = match file_name {
            "package.json" => {
                let manifest: serde_json::Value =
                    serde_json::from_str(&text).map_err(|e| config_error(path, e))?;
                match manifest.get("prettier") {
                    Some(value @ serde_json::Value::Object(_)) => {
                        serde_json::from_value(value.clone()).map_err(|e| config_error(path, e))?
                    }
                    Some(serde_json::Value::String(shared)) => {
                        debug!(
                            path = %path.display(),
                            shared = %shared,
                            "Shared config references are not supported, ignoring"
                        );
                        return Ok(None);
                    }
                    _ => return Ok(None),
                }
            }
            ".prettierrc.json" => serde_json::from_str(&text).map_err(|e| config_error(path, e))?,
            ".prettierrc.toml" => toml::from_str(&text).map_err(|e| config_error(path, e))?,
            ".prettierrc.yaml" | ".prettierrc.yml" => {
                serde_yaml::from_str(&text).map_err(|e| config_error(path, e))?
            }
            // `.prettierrc` may hold JSON or YAML.
            _ if text.trim().is_empty() => RawRcFile::default(),
            _ if text.trim_start().starts_with('{') => {
                serde_json::from_str(&text).map_err(|e| config_error(path, e))?
            }
            _ => serde_yaml::from_str(&text).map_err(|e| config_error(path, e))?,
        };

        let overrides = raw
            .overrides
            .into_iter()
            .map(|o| Override {
                files: o.files.into_vec(),
                exclude_files: o.exclude_files.map(OneOrMany::into_vec).unwrap_or_default(),
                options: o.options,
            })
            .collect();

        Ok(Some(Self {
            path: path.to_path_buf(),
            base: raw.base,
            overrides,
        }))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Options for `file`: the base settings plus every matching override,
    /// later overrides winning.
    pub fn layer_for(&self, file: &Path) -> WayfindResult<OptionsLayer> {
        let dir = self.path.parent().unwrap_or(Path::new(""));
        let relative = file.strip_prefix(dir).unwrap_or(file);

        let mut layer = self.base.clone();
        for o in &self.overrides {
            if self.any_match(&o.files, relative)? && !self.any_match(&o.exclude_files, relative)?
            {
                layer = layer.overlay(&o.options);
            }
        }
        Ok(layer)
    }

    /// Globs without a slash match the file name in any directory.
    fn any_match(&self, globs: &[String], relative: &Path) -> WayfindResult<bool> {
        for pattern in globs {
            let matcher = Glob::new(pattern)
                .map_err(|e| config_error(&self.path, e))?
                .compile_matcher();
            let hit = if pattern.contains('/') {
                matcher.is_match(relative)
            } else {
                relative
                    .file_name()
                    .is_some_and(|name| matcher.is_match(Path::new(name)))
            };
            if hit {
                return Ok(true);
            }
        }
        Ok(false)
    }
}

fn config_error(path: &Path, e: impl std::fmt::Display) -> ApplicationError {
    ApplicationError::ConfigResolution {
        path: path.to_path_buf(),
        reason: e.to_string(),
    }
}
