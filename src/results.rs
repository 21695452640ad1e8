use std::{
    fs,
    path::Path,
    time::{SystemTime, UNIX_EPOCH},
};

use serde::{Deserialize, Serialize};

use crate::error::JanitorError;

pub const RESULTS_FILE_NAME: &str = "unused_tokens.json";

/// Persisted output of a `find` run.
///
/// `timestamp` is milliseconds since the Unix epoch. On read it is
/// tolerated missing (0); only `unusedTokens` is validated, since purge
/// consumes nothing else.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanResults {
    pub unused_tokens: Vec<String>,
    #[serde(default)]
    pub timestamp: u64,
}

impl ScanResults {
    /// Stamp a fresh result set with the current instant.
    pub fn new(unused_tokens: Vec<String>) -> Self {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_millis() as u64)
            .unwrap_or(0);
        Self {
            unused_tokens,
            timestamp,
        }
    }
}

/// Write the results file, overwriting any prior contents.
pub fn save_results(path: &Path, results: &ScanResults) -> Result<(), JanitorError> {
    let json = serde_json::to_string_pretty(results).map_err(|e| JanitorError::WriteError {
        path: path.to_path_buf(),
        source: std::io::Error::other(e),
    })?;

    fs::write(path, format!("{}\n", json)).map_err(|source| JanitorError::WriteError {
        path: path.to_path_buf(),
        source,
    })
}

/// Read a previously saved results file back, verbatim.
///
/// A missing file is `MissingResultsFile` (purge must be preceded by a
/// successful find); a present but malformed file is `InvalidResultsFile`.
pub fn load_results(path: &Path) -> Result<ScanResults, JanitorError> {
    if !path.is_file() {
        return Err(JanitorError::MissingResultsFile(path.to_path_buf()));
    }

    let content = fs::read_to_string(path).map_err(|e| JanitorError::InvalidResultsFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;

    serde_json::from_str(&content).map_err(|e| JanitorError::InvalidResultsFile {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use super::*;

    #[test]
    fn test_save_and_load_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(RESULTS_FILE_NAME);

        let results = ScanResults {
            unused_tokens: vec!["a".to_string(), "b".to_string()],
            timestamp: 1_700_000_000_000,
        };
        save_results(&path, &results).unwrap();

        let loaded = load_results(&path).unwrap();
        assert_eq!(loaded, results);
    }

    #[test]
    fn test_save_overwrites_previous_results() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(RESULTS_FILE_NAME);

        save_results(&path, &ScanResults::new(vec!["old".to_string()])).unwrap();
        save_results(&path, &ScanResults::new(vec!["new".to_string()])).unwrap();

        let loaded = load_results(&path).unwrap();
        assert_eq!(loaded.unused_tokens, vec!["new"]);
    }

    #[test]
    fn test_results_are_camel_case_on_disk() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(RESULTS_FILE_NAME);

        save_results(&path, &ScanResults::new(vec!["a".to_string()])).unwrap();

        let content = fs::read_to_string(&path).unwrap();
        assert!(content.contains("\"unusedTokens\""));
        assert!(content.contains("\"timestamp\""));
        assert!(content.ends_with('\n'));
    }

    #[test]
    fn test_load_missing_results_file() {
        let dir = tempdir().unwrap();
        let err = load_results(&dir.path().join(RESULTS_FILE_NAME)).unwrap_err();
        assert!(matches!(err, JanitorError::MissingResultsFile(_)));
    }

    #[test]
    fn test_load_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(RESULTS_FILE_NAME);
        fs::write(&path, "not json at all").unwrap();

        let err = load_results(&path).unwrap_err();
        assert!(matches!(err, JanitorError::InvalidResultsFile { .. }));
    }

    #[test]
    fn test_load_rejects_non_sequence_unused_tokens() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(RESULTS_FILE_NAME);
        fs::write(&path, r#"{"unusedTokens": "oops", "timestamp": 1}"#).unwrap();

        let err = load_results(&path).unwrap_err();
        assert!(matches!(err, JanitorError::InvalidResultsFile { .. }));
    }

    #[test]
    fn test_load_tolerates_missing_timestamp() {
        let dir = tempdir().unwrap();
        let path = dir.path().join(RESULTS_FILE_NAME);
        fs::write(&path, r#"{"unusedTokens": ["a"]}"#).unwrap();

        let loaded = load_results(&path).unwrap();
        assert_eq!(loaded.unused_tokens, vec!["a"]);
        assert_eq!(loaded.timestamp, 0);
    }

    #[test]
    fn test_new_stamps_a_timestamp() {
        let results = ScanResults::new(Vec::new());
        assert!(results.timestamp > 0);
    }
}
