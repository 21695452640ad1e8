//! Project-local tool directory layout.
//!
//! Everything the janitor persists lives under `<project root>/i18n-janitor/`:
//! the config file and the results file. The project root is passed in
//! explicitly (`--path`) rather than read from the process working
//! directory, so every component can be pointed at a scratch directory in
//! tests.

use std::path::{Path, PathBuf};

use crate::config::CONFIG_FILE_NAME;
use crate::error::JanitorError;
use crate::results::RESULTS_FILE_NAME;

pub const TOOL_DIR_NAME: &str = "i18n-janitor";

/// Resolved locations of the tool's persisted artifacts for one project.
#[derive(Debug, Clone)]
pub struct ToolPaths {
    project_root: PathBuf,
}

impl ToolPaths {
    pub fn new(project_root: impl Into<PathBuf>) -> Self {
        Self {
            project_root: project_root.into(),
        }
    }

    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    pub fn tool_dir(&self) -> PathBuf {
        self.project_root.join(TOOL_DIR_NAME)
    }

    pub fn config_file(&self) -> PathBuf {
        self.tool_dir().join(CONFIG_FILE_NAME)
    }

    pub fn results_file(&self) -> PathBuf {
        self.tool_dir().join(RESULTS_FILE_NAME)
    }

    /// Fail with `MissingToolDirectory` unless the tool directory exists.
    pub fn require_tool_dir(&self) -> Result<(), JanitorError> {
        if self.tool_dir().is_dir() {
            Ok(())
        } else {
            Err(JanitorError::MissingToolDirectory(self.tool_dir()))
        }
    }

    /// Fail with `MissingConfigFile` unless the config file exists.
    pub fn require_config_file(&self) -> Result<(), JanitorError> {
        if self.config_file().is_file() {
            Ok(())
        } else {
            Err(JanitorError::MissingConfigFile(self.config_file()))
        }
    }

    /// Fail with `MissingResultsFile` unless a results file exists.
    pub fn require_results_file(&self) -> Result<(), JanitorError> {
        if self.results_file().is_file() {
            Ok(())
        } else {
            Err(JanitorError::MissingResultsFile(self.results_file()))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::fs;

    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_paths_are_rooted_in_tool_dir() {
        let paths = ToolPaths::new("/project");
        assert_eq!(paths.tool_dir(), PathBuf::from("/project/i18n-janitor"));
        assert_eq!(
            paths.config_file(),
            PathBuf::from("/project/i18n-janitor/config.json")
        );
        assert_eq!(
            paths.results_file(),
            PathBuf::from("/project/i18n-janitor/unused_tokens.json")
        );
    }

    #[test]
    fn test_require_tool_dir() {
        let dir = tempdir().unwrap();
        let paths = ToolPaths::new(dir.path());

        let err = paths.require_tool_dir().unwrap_err();
        assert!(matches!(err, JanitorError::MissingToolDirectory(_)));

        fs::create_dir(paths.tool_dir()).unwrap();
        assert!(paths.require_tool_dir().is_ok());
    }

    #[test]
    fn test_require_config_file() {
        let dir = tempdir().unwrap();
        let paths = ToolPaths::new(dir.path());
        fs::create_dir(paths.tool_dir()).unwrap();

        let err = paths.require_config_file().unwrap_err();
        assert!(matches!(err, JanitorError::MissingConfigFile(_)));

        fs::write(paths.config_file(), "{}").unwrap();
        assert!(paths.require_config_file().is_ok());
    }

    #[test]
    fn test_require_results_file() {
        let dir = tempdir().unwrap();
        let paths = ToolPaths::new(dir.path());
        fs::create_dir(paths.tool_dir()).unwrap();

        let err = paths.require_results_file().unwrap_err();
        assert!(matches!(err, JanitorError::MissingResultsFile(_)));

        fs::write(paths.results_file(), "{}").unwrap();
        assert!(paths.require_results_file().is_ok());
    }
}
