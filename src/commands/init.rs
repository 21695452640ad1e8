use std::fs;

use anyhow::Result;
use colored::Colorize;

use crate::config::default_config_json;
use crate::error::JanitorError;
use crate::reporter::SUCCESS_MARK;
use crate::tool_dir::ToolPaths;

/// What `init` ended up doing.
pub struct InitOutcome {
    pub created_dir: bool,
    pub created_config: bool,
}

/// Ensure the tool directory and a default config file exist, creating
/// whichever is missing.
///
/// When the config file is freshly written the caller should stop for
/// this run: the default config has to be edited before a scan can mean
/// anything.
pub fn init(paths: &ToolPaths, verbose: bool) -> Result<InitOutcome> {
    let tool_dir = paths.tool_dir();
    let created_dir = if tool_dir.is_dir() {
        if verbose {
            println!("'{}' found.", tool_dir.display());
        }
        false
    } else {
        println!("'{}' not found. Creating.", tool_dir.display());
        fs::create_dir_all(&tool_dir).map_err(|source| JanitorError::WriteError {
            path: tool_dir.clone(),
            source,
        })?;
        true
    };

    let config_path = paths.config_file();
    let created_config = if config_path.is_file() {
        if verbose {
            println!("Config file found at '{}'.", config_path.display());
        }
        false
    } else {
        println!("Config file not found. Writing default config file.");
        fs::write(&config_path, default_config_json()?).map_err(|source| {
            JanitorError::WriteError {
                path: config_path.clone(),
                source,
            }
        })?;

        println!(
            "{} Default config file created at '{}'.",
            SUCCESS_MARK.green(),
            config_path.display()
        );
        println!("Edit the paths and locations in it for this project.");
        println!("When done configuring, run {}.", "i18n-janitor find".cyan());
        true
    };

    Ok(InitOutcome {
        created_dir,
        created_config,
    })
}

#[cfg(test)]
mod tests {
    use tempfile::tempdir;

    use super::*;
    use crate::config::Config;

    #[test]
    fn test_init_creates_dir_and_config() {
        let dir = tempdir().unwrap();
        let paths = ToolPaths::new(dir.path());

        let outcome = init(&paths, false).unwrap();

        assert!(outcome.created_dir);
        assert!(outcome.created_config);
        assert!(paths.tool_dir().is_dir());
        assert!(paths.config_file().is_file());
    }

    #[test]
    fn test_init_written_config_is_loadable() {
        let dir = tempdir().unwrap();
        let paths = ToolPaths::new(dir.path());
        init(&paths, false).unwrap();

        let content = fs::read_to_string(paths.config_file()).unwrap();
        let config: Config = serde_json::from_str(&content).unwrap();
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_init_is_idempotent() {
        let dir = tempdir().unwrap();
        let paths = ToolPaths::new(dir.path());

        init(&paths, false).unwrap();
        fs::write(paths.config_file(), "customized").unwrap();

        let outcome = init(&paths, false).unwrap();

        assert!(!outcome.created_dir);
        assert!(!outcome.created_config);
        // An existing config is never overwritten.
        assert_eq!(fs::read_to_string(paths.config_file()).unwrap(), "customized");
    }
}
