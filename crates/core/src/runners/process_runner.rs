use super::CaseRunner;
use crate::{
    command::{Invocation, run_with_timeout},
    error::Result,
    types::ExecutionResult,
};
use std::time::Duration;
use tracing::debug;

/// Runs invocations as real child processes
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessRunner;

impl CaseRunner for ProcessRunner {
    fn run(&mut self, invocation: &Invocation, timeout: Duration) -> Result<ExecutionResult> {
        debug!("Running: {}", invocation.to_shell_command());
        run_with_timeout(invocation, timeout)
    }
}
