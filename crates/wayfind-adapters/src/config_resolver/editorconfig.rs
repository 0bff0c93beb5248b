//! `.editorconfig` support.
//!
//! Only the properties with a formatter counterpart are read:
//! `indent_style`, `indent_size`, `tab_width`, `max_line_length` and
//! `end_of_line`.

use std::path::{Path, PathBuf};

use globset::{GlobBuilder, GlobMatcher};
use tracing::debug;

use wayfind_core::{
    application::ApplicationError,
    domain::{EndOfLine, OptionsLayer},
    error::WayfindResult,
};

pub const EDITORCONFIG_FILE: &str = ".editorconfig";

#[derive(Debug, Default)]
struct Section {
    matcher: Option<GlobMatcher>,
    properties: Vec<(String, String)>,
}

#[derive(Debug)]
struct EditorConfigFile {
    dir: PathBuf,
    is_root: bool,
    sections: Vec<Section>,
}

impl EditorConfigFile {
    fn parse(path: &Path, text: &str) -> Self {
        let dir = path.parent().unwrap_or(Path::new("")).to_path_buf();
        let mut is_root = false;
        let mut sections: Vec<Section> = Vec::new();

        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') || line.starts_with(';') {
                continue;
            }
            if let Some(glob) = line.strip_prefix('[').and_then(|l| l.strip_suffix(']')) {
                sections.push(Section {
                    matcher: compile_section_glob(glob),
                    properties: Vec::new(),
                });
                continue;
            }
            let Some((key, value)) = line.split_once('=') else {
                continue;
            };
            let key = key.trim().to_ascii_lowercase();
            let value = value.trim().to_ascii_lowercase();
            match sections.last_mut() {
                Some(section) => section.properties.push((key, value)),
                None if key == "root" => is_root = value == "true",
                None => {}
            }
        }

        Self {
            dir,
            is_root,
            sections,
        }
    }

    fn apply(&self, file: &Path, layer: &mut Properties) {
        let Ok(relative) = file.strip_prefix(&self.dir) else {
            return;
        };
        for section in &self.sections {
            let Some(matcher) = &section.matcher else {
                continue;
            };
            if matcher.is_match(relative) {
                for (key, value) in &section.properties {
                    layer.set(key, value);
                }
            }
        }
    }
}

/// Editorconfig globs: a pattern without `/` matches at any depth, one with
/// `/` is anchored to the file's directory. `*` never crosses `/`.
fn compile_section_glob(glob: &str) -> Option<GlobMatcher> {
    let Some(glob) = expand_numeric_ranges(glob) else {
        debug!(glob, "Numeric range too wide, ignoring section");
        return None;
    };
    let glob = glob.as_str();
    let pattern = if glob.contains('/') {
        glob.trim_start_matches('/').to_string()
    } else {
        format!("**/{}", glob)
    };
    match GlobBuilder::new(&pattern).literal_separator(true).build() {
        Ok(g) => Some(g.compile_matcher()),
        Err(e) => {
            debug!(glob, error = %e, "Unsupported editorconfig section, ignoring");
            None
        }
    }
}

/// Widest `{n..m}` range expanded into an alternation.
const MAX_RANGE_LEN: i64 = 1024;

/// Rewrite each `{n..m}` as `{n,n+1,..,m}` so globset can match it.
///
/// Braces that are not a numeric range are left alone. `None` when a range
/// spans more than [`MAX_RANGE_LEN`] integers.
fn expand_numeric_ranges(glob: &str) -> Option<String> {
    let mut out = String::with_capacity(glob.len());
    let mut rest = glob;
    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];
        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return Some(out);
        };
        let body = &after[..close];
        match parse_range(body) {
            Some((lo, hi)) if hi.checked_sub(lo).is_none_or(|d| d >= MAX_RANGE_LEN) => {
                return None;
            }
            Some((lo, hi)) => {
                let numbers: Vec<String> = (lo..=hi).map(|n| n.to_string()).collect();
                out.push('{');
                out.push_str(&numbers.join(","));
                out.push('}');
            }
            None => {
                out.push('{');
                out.push_str(body);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }
    out.push_str(rest);
    Some(out)
}

/// `"1..3"` → `(1, 3)`; bounds may come in either order.
fn parse_range(body: &str) -> Option<(i64, i64)> {
    let (a, b) = body.split_once("..")?;
    let a: i64 = a.parse().ok()?;
    let b: i64 = b.parse().ok()?;
    Some((a.min(b), a.max(b)))
}

/// Raw property values collected across files; later assignments win.
#[derive(Debug, Default)]
struct Properties {
    indent_style: Option<String>,
    indent_size: Option<String>,
    tab_width: Option<String>,
    max_line_length: Option<String>,
    end_of_line: Option<String>,
}

impl Properties {
    fn set(&mut self, key: &str, value: &str) {
        let slot = match key {
            "indent_style" => &mut self.indent_style,
            "indent_size" => &mut self.indent_size,
            "tab_width" => &mut self.tab_width,
            "max_line_length" => &mut self.max_line_length,
            "end_of_line" => &mut self.end_of_line,
            _ => return,
        };
        *slot = Some(value.to_string());
    }

    fn into_layer(self) -> OptionsLayer {
        let numeric = |v: &Option<String>| v.as_deref().and_then(|s| s.parse::<u32>().ok());

        let use_tabs = match self.indent_style.as_deref() {
            Some("tab") => Some(true),
            Some("space") => Some(false),
            _ => None,
        };
        let tab_width = numeric(&self.indent_size)
            .or_else(|| numeric(&self.tab_width))
            .and_then(|w| u8::try_from(w).ok());
        let end_of_line = match self.end_of_line.as_deref() {
            Some("lf") => Some(EndOfLine::Lf),
            Some("crlf") => Some(EndOfLine::Crlf),
            _ => None,
        };

        OptionsLayer {
            print_width: numeric(&self.max_line_length),
            tab_width,
            use_tabs,
            end_of_line,
            ..Default::default()
        }
    }
}

/// Collect the editorconfig settings that apply to `file`.
///
/// Files are read from the file's directory upwards until one declares
/// `root = true`; closer files and later sections win.
pub fn resolve(file: &Path) -> WayfindResult<OptionsLayer> {
    let start = file.parent().unwrap_or(Path::new(""));
    let mut chain = Vec::new();
    for dir in start.ancestors() {
        let path = dir.join(EDITORCONFIG_FILE);
        if !path.is_file() {
            continue;
        }
        let text = std::fs::read_to_string(&path).map_err(|e| ApplicationError::ConfigResolution {
            path: path.clone(),
            reason: e.to_string(),
        })?;
        let parsed = EditorConfigFile::parse(&path, &text);
        let is_root = parsed.is_root;
        chain.push(parsed);
        if is_root {
            break;
        }
    }

    let mut properties = Properties::default();
    for config in chain.iter().rev() {
        config.apply(file, &mut properties);
    }
    Ok(properties.into_layer())
}
