//! Process exit codes

use contract_runner_core::{Error, RunStatus};

/// Every executed case passed, or nothing needed to run
pub const SUCCESS: u8 = 0;
/// At least one executed case failed or timed out
pub const CASES_FAILED: u8 = 1;
/// Invalid flags or configuration; matches clap's usage-error code
pub const CONFIGURATION_ERROR: u8 = 2;
/// The verifier could not be built
pub const BUILD_FAILED: u8 = 3;
/// Anything else (I/O errors, a verifier that cannot be launched)
pub const INTERNAL_ERROR: u8 = 4;

pub fn exit_code_for_status(status: &RunStatus) -> u8 {
    if status.succeeded() { SUCCESS } else { CASES_FAILED }
}

pub fn exit_code_for_error(err: &anyhow::Error) -> u8 {
    match err.downcast_ref::<Error>() {
        Some(e) if e.is_configuration() => CONFIGURATION_ERROR,
        Some(Error::BuildError { .. }) => BUILD_FAILED,
        _ => INTERNAL_ERROR,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contract_runner_core::RunSummary;

    #[test]
    fn test_status_codes() {
        assert_eq!(exit_code_for_status(&RunStatus::Listed), SUCCESS);
        assert_eq!(exit_code_for_status(&RunStatus::EmptySelection), SUCCESS);

        let timed_out = RunSummary {
            passed: 3,
            timed_out: 1,
            ..RunSummary::default()
        };
        assert_eq!(
            exit_code_for_status(&RunStatus::Completed(timed_out)),
            CASES_FAILED
        );
    }

    #[test]
    fn test_error_codes_see_through_context() {
        let err = anyhow::Error::new(Error::ConflictingSelection).context("while selecting");
        assert_eq!(exit_code_for_error(&err), CONFIGURATION_ERROR);

        let err = anyhow::Error::new(Error::BuildError {
            command: "cargo build-dev".into(),
            reason: "exited with code 101".into(),
        });
        assert_eq!(exit_code_for_error(&err), BUILD_FAILED);
    }
}
