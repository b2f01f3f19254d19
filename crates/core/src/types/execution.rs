use std::time::Duration;

/// How a single verifier invocation ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// Nonzero exit. `code` is `None` when the process was killed by a signal.
    Failure { code: Option<i32> },
    /// The wall-clock limit passed and the process was terminated
    Timeout,
}

impl Outcome {
    /// Failures and timeouts both stop a fail-fast run
    pub fn is_failure(&self) -> bool {
        !matches!(self, Outcome::Success)
    }
}

/// Everything captured from one verifier invocation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionResult {
    pub outcome: Outcome,
    pub elapsed: Duration,
    pub stdout: Vec<u8>,
    pub stderr: Vec<u8>,
}

impl ExecutionResult {
    pub fn new(outcome: Outcome, elapsed: Duration) -> Self {
        Self {
            outcome,
            elapsed,
            stdout: Vec::new(),
            stderr: Vec::new(),
        }
    }

    pub fn with_output(mut self, stdout: Vec<u8>, stderr: Vec<u8>) -> Self {
        self.stdout = stdout;
        self.stderr = stderr;
        self
    }
}

/// Tally of a whole run
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RunSummary {
    pub passed: usize,
    pub failed: usize,
    pub timed_out: usize,
    pub skipped: usize,
    /// Set when fail-fast stopped the run before the last selected case
    pub aborted: bool,
}

impl RunSummary {
    pub fn record(&mut self, outcome: Outcome) {
        match outcome {
            Outcome::Success => self.passed += 1,
            Outcome::Failure { .. } => self.failed += 1,
            Outcome::Timeout => self.timed_out += 1,
        }
    }

    /// Number of cases that actually invoked the verifier
    pub fn executed(&self) -> usize {
        self.passed + self.failed + self.timed_out
    }

    pub fn all_passed(&self) -> bool {
        self.failed == 0 && self.timed_out == 0
    }
}
