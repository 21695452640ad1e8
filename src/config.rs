use std::{fs, path::Path};

use anyhow::{Context, Result};
use glob::Pattern;
use serde::{Deserialize, Serialize};

use crate::error::JanitorError;

pub const CONFIG_FILE_NAME: &str = "config.json";

/// A directory tree to search for token usage, plus the file-name suffixes
/// to include.
///
/// Extension matching is a case-sensitive suffix match on the file name,
/// not a parsed extension: `.js` also matches `.mjs` and `.cjs`. That
/// over-inclusion is intentional and kept.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SearchLocation {
    pub dir: String,
    pub extensions: Vec<String>,
}

/// One Search Location or a sequence of them; the config accepts both
/// shapes.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum SearchLocations {
    One(SearchLocation),
    Many(Vec<SearchLocation>),
}

impl SearchLocations {
    pub fn as_slice(&self) -> &[SearchLocation] {
        match self {
            SearchLocations::One(location) => std::slice::from_ref(location),
            SearchLocations::Many(locations) => locations,
        }
    }
}

/// Where per-language token files live, for the purge path.
///
/// Purge discovers every file named `filename` anywhere under `root`,
/// recursively. `default_locale` names the default locale; purge itself
/// does not consult it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct LocaleDescriptor {
    pub root: String,
    pub filename: String,
    #[serde(default, rename = "default", skip_serializing_if = "Option::is_none")]
    pub default_locale: Option<String>,
}

#[derive(Debug, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Path to the default-locale message file, relative to the project
    /// root. Its top-level keys are the full set of known tokens.
    pub default_locale_tokens_filepath: String,

    /// Where and what to scan for token usage.
    pub locations_to_look_for_tokens: SearchLocations,

    /// Literal prefix that marks a translation lookup. A token counts as
    /// used when `<lookupPrefix><token>` appears in a scanned file. Change
    /// this if your codebase uses a different lookup function or calling
    /// convention; with the wrong prefix the scan reports every token
    /// unused.
    #[serde(default = "default_lookup_prefix")]
    pub lookup_prefix: String,

    /// Glob patterns pruned from the walk (e.g. `**/vendor/**`).
    #[serde(default)]
    pub ignores: Vec<String>,

    /// Locale file layout; required only by `purge`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locales: Option<LocaleDescriptor>,
}

fn default_lookup_prefix() -> String {
    "t('".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_locale_tokens_filepath: "_locales/en/messages.json".to_string(),
            locations_to_look_for_tokens: SearchLocations::Many(vec![
                SearchLocation {
                    dir: "app".to_string(),
                    extensions: vec![".jsx".to_string(), ".js".to_string()],
                },
                SearchLocation {
                    dir: "src".to_string(),
                    extensions: vec![".js".to_string()],
                },
            ]),
            lookup_prefix: default_lookup_prefix(),
            ignores: Vec::new(),
            locales: Some(LocaleDescriptor {
                root: "_locales".to_string(),
                filename: "messages.json".to_string(),
                default_locale: Some("en".to_string()),
            }),
        }
    }
}

impl Config {
    /// Validate configuration values.
    ///
    /// Returns an error if any glob patterns in `ignores` are invalid or
    /// a search location has an empty extension list.
    pub fn validate(&self) -> Result<()> {
        for pattern in &self.ignores {
            Pattern::new(pattern)
                .with_context(|| format!("Invalid glob pattern in 'ignores': \"{}\"", pattern))?;
        }

        for location in self.locations_to_look_for_tokens.as_slice() {
            if location.extensions.is_empty() {
                anyhow::bail!(
                    "Search location '{}' has an empty 'extensions' list; it would match nothing",
                    location.dir
                );
            }
        }

        Ok(())
    }
}

pub fn default_config_json() -> Result<String> {
    let config = Config::default();
    serde_json::to_string_pretty(&config).context("Failed to generate default config.")
}

pub fn load_config(config_path: &Path) -> Result<Config> {
    if !config_path.exists() {
        return Err(JanitorError::MissingConfigFile(config_path.to_path_buf()).into());
    }

    let content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file: {:?}", config_path))?;
    let config: Config = serde_json::from_str(&content)
        .with_context(|| format!("Failed to parse config file: {:?}", config_path))?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use tempfile::tempdir;

    use crate::config::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.lookup_prefix, "t('");
        assert_eq!(config.locations_to_look_for_tokens.as_slice().len(), 2);
        assert!(config.locales.is_some());
        assert!(config.ignores.is_empty());
    }

    #[test]
    fn test_default_config_json_round_trips() {
        let json = default_config_json().unwrap();
        let config: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(
            config.default_locale_tokens_filepath,
            "_locales/en/messages.json"
        );
    }

    #[test]
    fn test_parse_config_with_location_list() {
        let json = r#"{
            "defaultLocaleTokensFilepath": "_locales/en/messages.json",
            "locationsToLookForTokens": [
                { "dir": "app", "extensions": [".jsx", ".js"] }
            ]
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        let locations = config.locations_to_look_for_tokens.as_slice();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].dir, "app");
        assert_eq!(locations[0].extensions, vec![".jsx", ".js"]);
    }

    #[test]
    fn test_parse_config_with_single_location() {
        let json = r#"{
            "defaultLocaleTokensFilepath": "_locales/en/messages.json",
            "locationsToLookForTokens": { "dir": "src", "extensions": [".js"] }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        let locations = config.locations_to_look_for_tokens.as_slice();
        assert_eq!(locations.len(), 1);
        assert_eq!(locations[0].dir, "src");
    }

    #[test]
    fn test_parse_config_custom_lookup_prefix() {
        let json = r#"{
            "defaultLocaleTokensFilepath": "messages.json",
            "locationsToLookForTokens": { "dir": "src", "extensions": [".js"] },
            "lookupPrefix": "translate(\""
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert_eq!(config.lookup_prefix, "translate(\"");
    }

    #[test]
    fn test_parse_config_locales_descriptor() {
        let json = r#"{
            "defaultLocaleTokensFilepath": "messages.json",
            "locationsToLookForTokens": { "dir": "src", "extensions": [".js"] },
            "locales": { "root": "_locales", "filename": "messages.json", "default": "en" }
        }"#;
        let config: Config = serde_json::from_str(json).unwrap();
        let locales = config.locales.unwrap();
        assert_eq!(locales.root, "_locales");
        assert_eq!(locales.filename, "messages.json");
        assert_eq!(locales.default_locale.as_deref(), Some("en"));
    }

    #[test]
    fn test_validate_invalid_ignore_pattern() {
        let config = Config {
            ignores: vec!["[invalid".to_string()], // unclosed bracket
            ..Config::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("ignores"));
    }

    #[test]
    fn test_validate_empty_extension_list() {
        let config = Config {
            locations_to_look_for_tokens: SearchLocations::One(SearchLocation {
                dir: "src".to_string(),
                extensions: Vec::new(),
            }),
            ..Config::default()
        };
        let result = config.validate();
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("src"));
    }

    #[test]
    fn test_load_config_missing_file() {
        let dir = tempdir().unwrap();
        let result = load_config(&dir.path().join(CONFIG_FILE_NAME));

        let err = result.unwrap_err();
        let janitor_err = err.downcast_ref::<JanitorError>().unwrap();
        assert!(matches!(janitor_err, JanitorError::MissingConfigFile(_)));
    }

    #[test]
    fn test_load_config_from_file() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(
            &config_path,
            r#"{
                "defaultLocaleTokensFilepath": "messages/en.json",
                "locationsToLookForTokens": { "dir": "src", "extensions": [".ts"] }
            }"#,
        )
        .unwrap();

        let config = load_config(&config_path).unwrap();
        assert_eq!(config.default_locale_tokens_filepath, "messages/en.json");
        assert_eq!(config.lookup_prefix, "t('");
    }

    #[test]
    fn test_load_config_rejects_invalid_json() {
        let dir = tempdir().unwrap();
        let config_path = dir.path().join(CONFIG_FILE_NAME);
        fs::write(&config_path, "{ not json }").unwrap();

        assert!(load_config(&config_path).is_err());
    }
}
