use std::fs;
use std::path::PathBuf;

use crate::error::Result;

/// Directory, relative to the project root, that holds issue documents
pub const DOCUMENTATION_DIR: &str = "documentation";

/// Runtime settings for a single run.
///
/// There is no configuration file; everything derives from the project root
/// reported by git.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    pub project_root: PathBuf,
}

impl Config {
    pub fn from_project_root(project_root: impl Into<PathBuf>) -> Self {
        Config {
            project_root: project_root.into(),
        }
    }

    pub fn documentation_dir(&self) -> PathBuf {
        self.project_root.join(DOCUMENTATION_DIR)
    }

    /// Create the documentation directory if needed and return its path
    pub fn ensure_documentation_dir(&self) -> Result<PathBuf> {
        let dir = self.documentation_dir();
        fs::create_dir_all(&dir)?;
        Ok(dir)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documentation_dir_under_root() {
        let config = Config::from_project_root("/work/project");
        assert_eq!(
            config.documentation_dir(),
            PathBuf::from("/work/project/documentation")
        );
    }

    #[test]
    fn test_ensure_documentation_dir_is_idempotent() {
        let root = tempfile::tempdir().unwrap();
        let config = Config::from_project_root(root.path());

        let first = config.ensure_documentation_dir().unwrap();
        let second = config.ensure_documentation_dir().unwrap();

        assert!(first.is_dir());
        assert_eq!(first, second);
    }
}
