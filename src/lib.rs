//! i18n-janitor - unused i18n token finder and purger
//!
//! A CLI tool and library for finding i18n tokens that appear unused in a
//! project's source code, and optionally purging them from its locale
//! files. Usage detection is a deliberate over-approximation: a token
//! counts as used when `t('` followed by the token's text appears
//! anywhere in a scanned file, so dynamically assembled keys are always
//! reported as unused and results need manual verification before a
//! purge.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (argument parsing and dispatch)
//! - `commands`: Orchestrators for `init`, `find`, and `purge`
//! - `config`: Declarative JSON configuration loading and scaffolding
//! - `error`: Typed error taxonomy with per-kind exit codes
//! - `locale_editor`: In-place locale JSON editing for purge
//! - `reporter`: Console output helpers
//! - `results`: Scan result persistence
//! - `scanner`: The token-usage substring scan
//! - `tokens`: Default-locale token loading
//! - `tool_dir`: Project-local tool directory layout
//! - `walker`: Recursive file discovery

pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod locale_editor;
pub mod reporter;
pub mod results;
pub mod scanner;
pub mod tokens;
pub mod tool_dir;
pub mod walker;
