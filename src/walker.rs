use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use colored::Colorize;
use glob::Pattern;
use walkdir::WalkDir;

use crate::config::{LocaleDescriptor, SearchLocation};
use crate::error::JanitorError;

/// Result of walking the configured search locations.
///
/// `files` carries no ordering guarantee; callers must not depend on the
/// relative order of paths.
#[derive(Debug)]
pub struct WalkOutcome {
    pub files: HashSet<PathBuf>,
    pub skipped_count: usize,
}

/// Recursively collect every file under the configured search locations
/// whose name ends with one of the location's extensions.
///
/// The suffix match is case-sensitive and deliberately not a parsed
/// extension list: `.js` also matches `.mjs` and `.cjs`.
///
/// A configured directory that does not exist under `root` is a fatal
/// `MissingDirectory`; a misconfigured location would otherwise silently
/// mark every token unused. Entries the walk cannot access are skipped
/// and counted. Symlinked directories are not descended into, so symlink
/// cycles cannot loop the walk.
pub fn collect_source_files(
    root: &Path,
    locations: &[SearchLocation],
    ignores: &[Pattern],
    verbose: bool,
) -> Result<WalkOutcome, JanitorError> {
    let mut files: HashSet<PathBuf> = HashSet::new();
    let mut skipped_count = 0;

    for location in locations {
        let dir = root.join(&location.dir);
        if !dir.is_dir() {
            return Err(JanitorError::MissingDirectory(dir));
        }

        for entry in WalkDir::new(&dir) {
            let entry = match entry {
                Ok(e) => e,
                Err(e) => {
                    skipped_count += 1;
                    if verbose {
                        eprintln!("{} Cannot access path: {}", "warning:".bold().yellow(), e);
                    }
                    continue;
                }
            };

            let path = entry.path();
            if ignores
                .iter()
                .any(|pattern| pattern.matches(&path.to_string_lossy()))
            {
                continue;
            }

            if entry.file_type().is_file() && matches_extension(path, &location.extensions) {
                files.insert(path.to_path_buf());
            }
        }
    }

    Ok(WalkOutcome {
        files,
        skipped_count,
    })
}

fn matches_extension(path: &Path, extensions: &[String]) -> bool {
    let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
        return false;
    };
    extensions.iter().any(|ext| name.ends_with(ext.as_str()))
}

/// Collect every locale token file under the descriptor's root: files whose
/// name equals `filename` exactly, anywhere in the tree.
///
/// Paths are sorted so purge output is deterministic.
pub fn collect_locale_files(
    root: &Path,
    locales: &LocaleDescriptor,
) -> Result<Vec<PathBuf>, JanitorError> {
    let locale_root = root.join(&locales.root);
    if !locale_root.is_dir() {
        return Err(JanitorError::MissingDirectory(locale_root));
    }

    let mut files: Vec<PathBuf> = WalkDir::new(&locale_root)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry.file_name().to_str() == Some(locales.filename.as_str())
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    Ok(files)
}
