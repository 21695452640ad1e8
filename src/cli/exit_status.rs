use std::process::ExitCode;

use crate::error::JanitorError;

/// Exit status for CLI commands.
///
/// - `Success` (0): command completed
/// - `Error` (1): command failed with a generic error
///
/// Fatal errors from the janitor taxonomy carry their own codes (3..=9,
/// see [`JanitorError::exit_code`]) so callers can distinguish, say, a
/// missing config from a corrupt results file. Code 2 is left to clap's
/// usage errors.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ExitStatus {
    Success,
    Error,
}

impl From<ExitStatus> for ExitCode {
    fn from(status: ExitStatus) -> Self {
        match status {
            ExitStatus::Success => ExitCode::from(0),
            ExitStatus::Error => ExitCode::from(1),
        }
    }
}

/// Map a failed run to its exit code, preferring the typed taxonomy.
pub fn exit_code_for_error(err: &anyhow::Error) -> ExitCode {
    match err.downcast_ref::<JanitorError>() {
        Some(janitor_err) => ExitCode::from(janitor_err.exit_code()),
        None => ExitStatus::Error.into(),
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;

    #[test]
    fn exit_code_values() {
        assert_eq!(ExitCode::from(ExitStatus::Success), ExitCode::from(0));
        assert_eq!(ExitCode::from(ExitStatus::Error), ExitCode::from(1));
    }

    #[test]
    fn taxonomy_errors_keep_their_code() {
        let err = anyhow::Error::new(JanitorError::MissingConfigFile(PathBuf::from("x")));
        assert_eq!(exit_code_for_error(&err), ExitCode::from(4));
    }

    #[test]
    fn generic_errors_exit_one() {
        let err = anyhow::anyhow!("something else went wrong");
        assert_eq!(exit_code_for_error(&err), ExitCode::from(1));
    }
}
