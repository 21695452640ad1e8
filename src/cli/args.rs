//! CLI argument definitions using clap.
//!
//! ## Commands
//!
//! - `init`: Create the tool directory and a default config file
//! - `find`: Scan for possibly-unused tokens and save the results
//! - `purge`: Remove previously reported unused tokens from locale files

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Self> {
        if self.command.is_none() {
            Self::command().print_help().ok();
            None
        } else {
            Some(self)
        }
    }
}

/// Common arguments shared by all commands.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Project root directory to operate in
    #[arg(long, default_value = ".")]
    pub path: PathBuf,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct InitCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct FindCommand {
    #[command(flatten)]
    pub common: CommonArgs,
}

#[derive(Debug, Args)]
pub struct PurgeCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Report what would be removed without rewriting any locale file
    #[arg(long)]
    pub dry_run: bool,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Create the tool directory and a default config file
    Init(InitCommand),
    /// Find i18n tokens that appear unused and save the results
    Find(FindCommand),
    /// Remove the unused tokens reported by `find` from the locale files
    Purge(PurgeCommand),
}

impl Command {
    pub fn common(&self) -> &CommonArgs {
        match self {
            Command::Init(cmd) => &cmd.common,
            Command::Find(cmd) => &cmd.common,
            Command::Purge(cmd) => &cmd.common,
        }
    }
}
