use std::process::ExitCode;

use anyhow::Result;

pub use args::{Arguments, Command};
pub use exit_status::ExitStatus;

use crate::commands::{find::find, init::init, purge::purge};
use crate::tool_dir::ToolPaths;

mod args;
mod exit_status;

/// Dispatch the parsed arguments to the matching command and fold the
/// outcome into a process exit code.
///
/// All fatal-error reporting happens here, at the top of the stack: the
/// commands and core modules only ever return `Result`s.
pub fn run_cli(args: Arguments) -> ExitCode {
    let Some(args) = args.with_command_or_help() else {
        return ExitStatus::Success.into();
    };

    match run(args) {
        Ok(()) => ExitStatus::Success.into(),
        Err(err) => {
            eprintln!("Error: {:#}", err);
            exit_status::exit_code_for_error(&err)
        }
    }
}

fn run(Arguments { command }: Arguments) -> Result<()> {
    let Some(command) = command else {
        anyhow::bail!("No command provided. Use --help to see available commands.")
    };
    let common = command.common().clone();
    let paths = ToolPaths::new(&common.path);

    match command {
        Command::Init(_) => {
            init(&paths, common.verbose)?;
        }
        Command::Find(_) => {
            find(&paths, common.verbose)?;
        }
        Command::Purge(cmd) => {
            purge(&paths, cmd.dry_run, common.verbose)?;
        }
    }

    Ok(())
}
