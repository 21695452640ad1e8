use anyhow::Result;
use colored::Colorize;

use crate::commands::init::init;
use crate::config::load_config;
use crate::error::JanitorError;
use crate::locale_editor::LocaleEditor;
use crate::reporter::{self, SUCCESS_MARK};
use crate::results::load_results;
use crate::tool_dir::ToolPaths;
use crate::walker::collect_locale_files;

/// Summary of a completed `purge` run.
#[derive(Debug)]
pub struct PurgeOutcome {
    pub files_purged: usize,
    pub files_skipped: usize,
    pub keys_removed: usize,
    /// True when init had to scaffold the config and purge stopped early.
    pub stopped_after_init: bool,
}

/// Remove every token recorded by the last `find` from each locale file
/// under the configured locale root.
///
/// Runs `init`'s ensure-steps first; if the config file had to be
/// scaffolded just now, there is nothing meaningful to purge and the run
/// stops so the developer can configure and `find` first. A locale file
/// that cannot be read or parsed is skipped with a warning; the rest are
/// still purged. Locale files are rewritten in place with no backup;
/// version control is the undo story.
pub fn purge(paths: &ToolPaths, dry_run: bool, verbose: bool) -> Result<PurgeOutcome> {
    let scaffolded = init(paths, verbose)?;
    if scaffolded.created_config {
        println!("Configure the new config file, run `i18n-janitor find`, then purge again.");
        return Ok(PurgeOutcome {
            files_purged: 0,
            files_skipped: 0,
            keys_removed: 0,
            stopped_after_init: true,
        });
    }

    let results = load_results(&paths.results_file())?;
    let config = load_config(&paths.config_file())?;

    let Some(locales) = &config.locales else {
        anyhow::bail!(
            "The config file has no 'locales' section.\n\n\
             Tip: Add one, e.g. \"locales\": {{ \"root\": \"_locales\", \"filename\": \"messages.json\" }}"
        );
    };

    if results.unused_tokens.is_empty() {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            "The results file lists no unused tokens; nothing to purge.".green()
        );
        return Ok(PurgeOutcome {
            files_purged: 0,
            files_skipped: 0,
            keys_removed: 0,
            stopped_after_init: false,
        });
    }

    let locale_files = collect_locale_files(paths.project_root(), locales)?;

    let mut files_purged = 0;
    let mut files_skipped = 0;
    let mut keys_removed = 0;

    for path in &locale_files {
        let mut editor = match LocaleEditor::open(path) {
            Ok(editor) => editor,
            Err(e) => {
                warn_skipped(path, &e.to_string());
                files_skipped += 1;
                continue;
            }
        };

        let removed = match editor.remove_tokens(&results.unused_tokens) {
            Ok(removed) => removed,
            Err(e) => {
                warn_skipped(path, &e.to_string());
                files_skipped += 1;
                continue;
            }
        };

        if dry_run {
            println!(
                "{} remove {} token(s) from '{}'",
                "Would".yellow().bold(),
                removed,
                path.display()
            );
        } else {
            editor.save()?;
            println!(
                "{} Removed {} token(s) from '{}'",
                SUCCESS_MARK.green(),
                removed,
                path.display()
            );
        }

        files_purged += 1;
        keys_removed += removed;
    }

    if dry_run {
        println!(
            "{} {} key removal(s) across {} file(s). Run without {} to apply.",
            "Would perform".yellow().bold(),
            keys_removed,
            files_purged,
            "--dry-run".cyan()
        );
    } else {
        println!(
            "Purge complete: {} key(s) removed across {} file(s), {} file(s) skipped.",
            keys_removed, files_purged, files_skipped
        );
        println!("Time to rebuild and see what broke!");
    }

    Ok(PurgeOutcome {
        files_purged,
        files_skipped,
        keys_removed,
        stopped_after_init: false,
    })
}

fn warn_skipped(path: &std::path::Path, reason: &str) {
    let err = JanitorError::LocaleFileReadError {
        path: path.to_path_buf(),
        reason: reason.to_string(),
    };
    reporter::warn(&err.to_string());
}
