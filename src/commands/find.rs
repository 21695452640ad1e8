use anyhow::{Context, Result};
use colored::Colorize;
use glob::Pattern;

use crate::config::load_config;
use crate::reporter::{self, SUCCESS_MARK};
use crate::results::{ScanResults, save_results};
use crate::scanner::find_unused_tokens;
use crate::tokens::load_tokens;
use crate::tool_dir::ToolPaths;
use crate::walker::collect_source_files;

/// Summary of a completed `find` run.
#[derive(Debug)]
pub struct FindOutcome {
    pub token_count: usize,
    pub unused_count: usize,
    pub files_scanned: usize,
}

/// Load config and tokens, walk the configured locations, scan for usage,
/// and persist the results file.
///
/// Requires `init` to have been run: a missing tool directory or config
/// file is fatal and the error names the artifact and the fixing command.
pub fn find(paths: &ToolPaths, verbose: bool) -> Result<FindOutcome> {
    paths.require_tool_dir()?;
    paths.require_config_file()?;

    if verbose {
        println!(
            "Loading configuration from '{}'",
            paths.config_file().display()
        );
    }
    let config = load_config(&paths.config_file())?;

    let token_file = paths
        .project_root()
        .join(&config.default_locale_tokens_filepath);
    let tokens = load_tokens(&token_file)?;
    if verbose {
        println!(
            "Loaded {} token(s) from '{}'",
            tokens.len(),
            token_file.display()
        );
    }

    // Patterns were validated at config load; compile errors cannot occur here.
    let ignores: Vec<Pattern> = config
        .ignores
        .iter()
        .map(|p| Pattern::new(p).with_context(|| format!("Invalid glob pattern: \"{}\"", p)))
        .collect::<Result<_>>()?;

    let walk = collect_source_files(
        paths.project_root(),
        config.locations_to_look_for_tokens.as_slice(),
        &ignores,
        verbose,
    )?;

    if walk.skipped_count > 0 {
        reporter::warn(&format!(
            "{} path(s) skipped due to access errors{}",
            walk.skipped_count,
            if verbose { "" } else { " (use -v for details)" }
        ));
    }

    let scan = find_unused_tokens(&tokens, &walk.files, &config.lookup_prefix)?;

    let results = ScanResults::new(scan.unused_tokens);
    save_results(&paths.results_file(), &results)?;

    let unused_count = results.unused_tokens.len();
    if unused_count == 0 {
        println!(
            "{} {}",
            SUCCESS_MARK.green(),
            format!(
                "Scanned {} file(s); every one of the {} token(s) appears to be used.",
                scan.files_scanned,
                tokens.len()
            )
            .green()
        );
    } else {
        println!(
            "{} possibly unused token(s) out of {} (scanned {} file(s)):",
            unused_count.to_string().bold(),
            tokens.len(),
            scan.files_scanned
        );
        for token in &results.unused_tokens {
            println!("  {} {}", "-".dimmed(), token);
        }
    }
    println!("Results written to '{}'", paths.results_file().display());
    reporter::print_false_positive_caveat();

    Ok(FindOutcome {
        token_count: tokens.len(),
        unused_count,
        files_scanned: scan.files_scanned,
    })
}
