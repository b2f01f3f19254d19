//! Core traits for the runner architecture

use crate::{command::Invocation, error::Result, types::ExecutionResult};
use std::time::Duration;

/// Runs one verifier invocation to completion or timeout
pub trait CaseRunner {
    /// Execute the invocation, blocking until it exits or `timeout` elapses.
    /// Nonzero exits and timeouts are outcomes, not errors; `Err` means the
    /// invocation could not be carried out at all.
    fn run(&mut self, invocation: &Invocation, timeout: Duration) -> Result<ExecutionResult>;
}

impl<R: CaseRunner + ?Sized> CaseRunner for &mut R {
    fn run(&mut self, invocation: &Invocation, timeout: Duration) -> Result<ExecutionResult> {
        (**self).run(invocation, timeout)
    }
}
