use std::path::PathBuf;

use crate::error::ValidationError;

/// NSE script selection: a comma-separated category list (e.g.
/// `vuln,discovery`) or a script file/directory on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScriptSpec {
    Categories(String),
    File(PathBuf),
}

impl ScriptSpec {
    /// Folds the two optional user fields into at most one spec.
    ///
    /// Supplying both is a conflict. A file spec must point at an existing
    /// path; readability beyond existence is left for nmap to report.
    pub fn resolve(
        categories: Option<String>,
        file: Option<PathBuf>,
    ) -> Result<Option<Self>, ValidationError> {
        match (categories, file) {
            (Some(_), Some(_)) => Err(ValidationError::ConflictingScriptSpec),
            (Some(categories), None) => Ok(Some(ScriptSpec::Categories(categories))),
            (None, Some(path)) => {
                if !path.exists() {
                    return Err(ValidationError::ScriptNotFound(path));
                }
                Ok(Some(ScriptSpec::File(path)))
            }
            (None, None) => Ok(None),
        }
    }

    /// The value handed to nmap's `--script` flag.
    pub fn argument(&self) -> String {
        match self {
            ScriptSpec::Categories(categories) => categories.clone(),
            ScriptSpec::File(path) => path.display().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_both_fields_conflict() {
        let result = ScriptSpec::resolve(
            Some("vuln".to_string()),
            Some(PathBuf::from("/tmp/custom.nse")),
        );
        assert_eq!(result, Err(ValidationError::ConflictingScriptSpec));
    }

    #[test]
    fn test_categories_pass_through() {
        let spec = ScriptSpec::resolve(Some("vuln,discovery".to_string()), None)
            .unwrap()
            .unwrap();
        assert_eq!(spec.argument(), "vuln,discovery");
    }

    #[test]
    fn test_missing_file_rejected() {
        let path = PathBuf::from("/definitely/not/a/real/script.nse");
        assert_eq!(
            ScriptSpec::resolve(None, Some(path.clone())),
            Err(ValidationError::ScriptNotFound(path))
        );
    }

    #[test]
    fn test_existing_file_accepted() {
        // The manifest of this crate is a file guaranteed to exist.
        let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml");
        let spec = ScriptSpec::resolve(None, Some(path.clone())).unwrap().unwrap();
        assert_eq!(spec, ScriptSpec::File(path));
    }

    #[test]
    fn test_neither_is_none() {
        assert_eq!(ScriptSpec::resolve(None, None), Ok(None));
    }
}
