use std::path::Path;

use crate::domain::{entities::FormatOptions, error::DomainError};

/// Centralized domain validation.
///
/// All validation logic lives here, not scattered across entities.
pub struct DomainValidator;

impl DomainValidator {
    pub fn validate_options(options: &FormatOptions) -> Result<(), DomainError> {
        options.validate()
    }

    /// Explicit targets must live below the run root so relative paths and
    /// ignore-file matching stay well defined.
    pub fn validate_target(root: &Path, target: &Path) -> Result<(), DomainError> {
        if target.starts_with(root) {
            Ok(())
        } else {
            Err(DomainError::OutsideRoot {
                path: target.display().to_string(),
                root: root.display().to_string(),
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn target_below_root_is_accepted() {
        assert!(DomainValidator::validate_target(Path::new("/p"), Path::new("/p/src/a.js")).is_ok());
    }

    #[test]
    fn target_outside_root_is_rejected() {
        let err =
            DomainValidator::validate_target(Path::new("/p"), Path::new("/other/a.js")).unwrap_err();
        assert!(matches!(err, DomainError::OutsideRoot { .. }));
    }
}
