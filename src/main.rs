use std::process::ExitCode;

use clap::Parser;
use i18n_janitor::cli::Arguments;

fn main() -> ExitCode {
    let args = Arguments::parse();
    i18n_janitor::cli::run_cli(args)
}
