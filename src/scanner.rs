//! The token-usage scan.
//!
//! A token counts as used when any scanned file's raw text contains the
//! literal substring `<lookup prefix><token>` (default `t('` + token).
//! This is a plain substring search, not a lexical or AST-aware match:
//! a token that is a prefix of a longer call argument still counts as
//! used, and tokens assembled dynamically (concatenation, computed keys)
//! never match and are always reported unused. Results therefore need
//! manual verification before anything destructive is done with them.

use std::collections::HashSet;
use std::{fs, path::PathBuf};

use anyhow::{Context, Result};

/// Outcome of scanning every file for every token.
pub struct ScanOutcome {
    /// Tokens no file matched, in the same relative order as the input.
    pub unused_tokens: Vec<String>,
    pub files_scanned: usize,
}

/// Return the subset of `tokens` that no file in `filepaths` appears to
/// use.
///
/// Each file is read once; a token already marked used is not checked
/// again, and the scan stops early once every token is marked. File
/// contents are decoded lossily so binary or mixed-encoding files never
/// abort the scan; an unreadable file does.
pub fn find_unused_tokens(
    tokens: &[String],
    filepaths: &HashSet<PathBuf>,
    lookup_prefix: &str,
) -> Result<ScanOutcome> {
    // (token, needle) pairs; retain() keeps the input order.
    let mut candidates: Vec<(String, String)> = tokens
        .iter()
        .map(|token| (token.clone(), format!("{}{}", lookup_prefix, token)))
        .collect();

    let mut files_scanned = 0;
    for path in filepaths {
        if candidates.is_empty() {
            break;
        }

        let bytes =
            fs::read(path).with_context(|| format!("Failed to read source file: {:?}", path))?;
        let content = String::from_utf8_lossy(&bytes);
        files_scanned += 1;

        candidates.retain(|(_, needle)| !content.contains(needle.as_str()));
    }

    Ok(ScanOutcome {
        unused_tokens: candidates.into_iter().map(|(token, _)| token).collect(),
        files_scanned,
    })
}
