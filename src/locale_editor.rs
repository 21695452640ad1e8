use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use serde_json::Value;

/// Editor for a single locale token file.
///
/// Uses serde_json for parsing and serialization; surviving keys keep
/// their original order. Output is always pretty-printed with 2-space
/// indentation and a trailing newline.
pub struct LocaleEditor {
    file_path: PathBuf,
    content: String,
}

impl LocaleEditor {
    /// Open a locale JSON file for editing.
    pub fn open(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read file: {}", path.display()))?;
        Ok(Self {
            file_path: path.to_path_buf(),
            content,
        })
    }

    /// Remove each of the given tokens from the file's top-level object.
    ///
    /// Tokens absent from this locale are skipped silently; a locale may
    /// lag behind the default locale. Returns how many keys were removed.
    pub fn remove_tokens(&mut self, tokens: &[String]) -> Result<usize> {
        let mut value: Value =
            serde_json::from_str(&self.content).with_context(|| "Failed to parse JSON")?;

        let Value::Object(map) = &mut value else {
            anyhow::bail!("Top level is not a JSON object");
        };

        let mut removed = 0;
        for token in tokens {
            // shift_remove keeps the remaining keys in file order
            if map.shift_remove(token.as_str()).is_some() {
                removed += 1;
            }
        }

        self.content =
            serde_json::to_string_pretty(&value).with_context(|| "Failed to serialize JSON")?;

        Ok(removed)
    }

    /// Save the modified content back to the file.
    pub fn save(&self) -> Result<()> {
        // Ensure trailing newline
        let content = if self.content.ends_with('\n') {
            self.content.clone()
        } else {
            format!("{}\n", self.content)
        };

        fs::write(&self.file_path, content)
            .with_context(|| format!("Failed to write file: {}", self.file_path.display()))?;

        Ok(())
    }

    /// Get the current content as a string (for testing).
    #[cfg(test)]
    pub fn content(&self) -> &str {
        &self.content
    }
}
