//! Ignore files (`.prettierignore`) in gitignore syntax.

use std::path::{Path, PathBuf};

use ignore::gitignore::{Gitignore, GitignoreBuilder};

use wayfind_core::{application::ApplicationError, error::WayfindResult};

/// A loaded ignore file. Patterns are relative to the file's directory.
#[derive(Debug, Clone)]
pub struct IgnoreFile {
    base: PathBuf,
    matcher: Option<Gitignore>,
}

impl IgnoreFile {
    /// Load `path`. A missing file ignores nothing.
    pub fn load(path: &Path) -> WayfindResult<Self> {
        let base = path.parent().unwrap_or(Path::new("")).to_path_buf();
        if !path.is_file() {
            return Ok(Self {
                base,
                matcher: None,
            });
        }

        let mut builder = GitignoreBuilder::new(&base);
        if let Some(e) = builder.add(path) {
            return Err(ApplicationError::ConfigResolution {
                path: path.to_path_buf(),
                reason: e.to_string(),
            }
            .into());
        }
        let matcher = builder
            .build()
            .map_err(|e| ApplicationError::ConfigResolution {
                path: path.to_path_buf(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            base,
            matcher: Some(matcher),
        })
    }

    /// `true` if `file` or one of its parent directories is ignored.
    /// Files outside the ignore file's directory are never ignored.
    pub fn is_ignored(&self, file: &Path) -> bool {
        let Some(matcher) = &self.matcher else {
            return false;
        };
        if !file.starts_with(&self.base) {
            return false;
        }
        matcher.matched_path_or_any_parents(file, false).is_ignore()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn matches_files_and_directories() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(".prettierignore");
        fs::write(&path, "# generated\nbuild/\n*.min.js\n!keep.min.js\n").unwrap();

        let ignore = IgnoreFile::load(&path).unwrap();
        assert!(ignore.is_ignored(&dir.path().join("build/out.js")));
        assert!(ignore.is_ignored(&dir.path().join("src/app.min.js")));
        assert!(!ignore.is_ignored(&dir.path().join("keep.min.js")));
        assert!(!ignore.is_ignored(&dir.path().join("src/app.js")));
    }

    #[test]
    fn missing_file_ignores_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let ignore = IgnoreFile::load(&dir.path().join(".prettierignore")).unwrap();
        assert!(!ignore.is_ignored(&dir.path().join("a.js")));
    }

    #[test]
    fn paths_outside_the_base_are_not_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let sub = dir.path().join("sub");
        fs::create_dir(&sub).unwrap();
        fs::write(sub.join(".prettierignore"), "*.js\n").unwrap();

        let ignore = IgnoreFile::load(&sub.join(".prettierignore")).unwrap();
        assert!(!ignore.is_ignored(&dir.path().join("a.js")));
        assert!(ignore.is_ignored(&sub.join("a.js")));
    }
}
