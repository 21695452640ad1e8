//! Typed errors for the janitor CLI.
//!
//! Every fatal condition the tool can hit has its own variant and its own
//! exit code, so scripts wrapping the CLI can tell a missing config apart
//! from a corrupt results file. Messages carry a remediation hint naming
//! the command that fixes the problem.

use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum JanitorError {
    /// The project-local tool directory has not been created yet.
    #[error(
        "The tool directory {0:?} does not exist.\n\nTip: Generate it with `i18n-janitor init` and try again"
    )]
    MissingToolDirectory(PathBuf),

    /// The tool directory exists but holds no config file.
    #[error(
        "The config file {0:?} does not exist.\n\nTip: Generate a default one with `i18n-janitor init` and try again"
    )]
    MissingConfigFile(PathBuf),

    /// The default-locale token file is missing, unreadable, not valid
    /// JSON, or not a JSON object at the top level.
    #[error(
        "The default locale token file {path:?} is missing or invalid: {reason}\n\nTip: Check the 'defaultLocaleTokensFilepath' value in the config file and the token file's syntax"
    )]
    InvalidTokenFile { path: PathBuf, reason: String },

    /// A configured search directory does not exist under the project root.
    #[error(
        "The configured directory {0:?} does not exist.\n\nTip: Check the 'locationsToLookForTokens' and 'locales' entries in the config file"
    )]
    MissingDirectory(PathBuf),

    /// A results or config file could not be created or written.
    #[error(
        "Could not write {path:?}: {source}\n\nTip: Check directory permissions and free disk space"
    )]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// `purge` was invoked before a successful `find`.
    #[error(
        "Did not find a results file at {0:?}.\n\nPlease generate it with `i18n-janitor find`,\ndouble-check it for false positives (for example, keys that are\ndynamically assembled by the code), and run `i18n-janitor purge` again"
    )]
    MissingResultsFile(PathBuf),

    /// The results file exists but is not well-formed.
    #[error(
        "The results file {path:?} is invalid: {reason}\n\nTip: Re-generate it with `i18n-janitor find`"
    )]
    InvalidResultsFile { path: PathBuf, reason: String },

    /// A single locale file could not be read or parsed during purge.
    /// Non-fatal: the purge skips the file and continues.
    #[error("Could not load {path:?}: {reason}. Skipping and continuing.")]
    LocaleFileReadError { path: PathBuf, reason: String },
}

impl JanitorError {
    /// Process exit code for this error kind.
    ///
    /// Codes 3..=9 are stable per variant; generic failures elsewhere in
    /// the CLI exit with 1. `LocaleFileReadError` never terminates the
    /// process and maps to the generic code only for completeness.
    pub fn exit_code(&self) -> u8 {
        match self {
            JanitorError::MissingToolDirectory(_) => 3,
            JanitorError::MissingConfigFile(_) => 4,
            JanitorError::InvalidTokenFile { .. } => 5,
            JanitorError::MissingDirectory(_) => 6,
            JanitorError::WriteError { .. } => 7,
            JanitorError::MissingResultsFile(_) => 8,
            JanitorError::InvalidResultsFile { .. } => 9,
            JanitorError::LocaleFileReadError { .. } => 1,
        }
    }
}
