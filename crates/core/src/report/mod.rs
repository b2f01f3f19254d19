//! Human-readable, line-oriented run output

pub mod table;
pub mod theme;

pub use table::render_table;
pub use theme::{Marker, Theme};

use crate::command::Invocation;
use crate::error::{Error, Result};
use crate::registry::{Registry, TestCase};
use crate::types::{ExecutionResult, Outcome, RunSummary};
use std::io::Write;
use std::time::Duration;

/// When captured verifier output is shown
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct OutputPolicy {
    /// Show output for every executed case, including successes
    pub verbose: bool,
    /// Show output for failures and timeouts
    pub fail_fast: bool,
}

impl OutputPolicy {
    fn shows(&self, outcome: Outcome) -> bool {
        self.verbose || (self.fail_fast && outcome.is_failure())
    }
}

/// Writes per-case status lines, captured output, the summary and the
/// `--list` table to `out`.
pub struct Reporter<W: Write> {
    out: W,
    theme: Theme,
    policy: OutputPolicy,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, theme: Theme, policy: OutputPolicy) -> Self {
        Self { out, theme, policy }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    /// Print the case header without a newline; the status follows on the same line.
    pub fn case_started(&mut self, position: usize, total: usize, case: &TestCase) -> Result<()> {
        write!(
            self.out,
            "[{position}/{total}] Checking function contract for {} on {} ... ",
            case.function, case.harness
        )?;
        self.out.flush()?;
        Ok(())
    }

    pub fn case_skipped(&mut self, reason: &str) -> Result<()> {
        writeln!(self.out, "{} ({reason})", self.theme.skipped.paint())?;
        Ok(())
    }

    pub fn case_finished(&mut self, result: &ExecutionResult, timeout: Duration) -> Result<()> {
        match result.outcome {
            Outcome::Success => writeln!(
                self.out,
                "{} ({:.1}s)",
                self.theme.success.paint(),
                result.elapsed.as_secs_f64()
            )?,
            Outcome::Failure { code: Some(code) } => {
                writeln!(self.out, "{} (exit code {code})", self.theme.failure.paint())?
            }
            Outcome::Failure { code: None } => writeln!(
                self.out,
                "{} (terminated by signal)",
                self.theme.failure.paint()
            )?,
            Outcome::Timeout => writeln!(
                self.out,
                "{} (after {}s)",
                self.theme.timeout.paint(),
                timeout.as_secs_f64()
            )?,
        }

        if self.policy.shows(result.outcome) {
            self.captured("stdout", &result.stdout)?;
            self.captured("stderr", &result.stderr)?;
        }
        self.out.flush()?;
        Ok(())
    }

    /// Terminate a started case line when the case could not be run at all
    pub fn case_errored(&mut self, error: &Error) -> Result<()> {
        writeln!(self.out, "{} ({error})", self.theme.failure.paint())?;
        self.out.flush()?;
        Ok(())
    }

    fn captured(&mut self, label: &str, bytes: &[u8]) -> Result<()> {
        writeln!(self.out, "------------ {label} ------------")?;
        self.out.write_all(bytes)?;
        if !bytes.is_empty() && !bytes.ends_with(b"\n") {
            writeln!(self.out)?;
        }
        Ok(())
    }

    /// Echo a command line before it runs
    pub fn command(&mut self, invocation: &Invocation) -> Result<()> {
        writeln!(self.out, "+ {}", invocation.to_shell_command())?;
        Ok(())
    }

    pub fn message(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{message}")?;
        Ok(())
    }

    pub fn warning(&mut self, message: &str) -> Result<()> {
        writeln!(self.out, "{}: {message}", self.theme.warning.paint())?;
        Ok(())
    }

    /// Dump the output of a failed build step
    pub fn build_output(&mut self, stdout: &[u8], stderr: &[u8]) -> Result<()> {
        self.captured("stdout", stdout)?;
        self.captured("stderr", stderr)?;
        self.out.flush()?;
        Ok(())
    }

    pub fn summary(&mut self, summary: &RunSummary) -> Result<()> {
        write!(
            self.out,
            "\n{} passed, {} failed, {} timed out, {} skipped",
            summary.passed, summary.failed, summary.timed_out, summary.skipped
        )?;
        if summary.aborted {
            write!(self.out, " (stopped early: --fail-fast)")?;
        }
        writeln!(self.out)?;
        Ok(())
    }

    pub fn list_available(&mut self, registry: &Registry) -> Result<()> {
        self.out.write_all(render_table(registry).as_bytes())?;
        self.out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn case() -> TestCase {
        TestCase::new("VecMap::<u8, u8>::clear", "contract_harnesses::clear")
    }

    fn render(policy: OutputPolicy, result: &ExecutionResult) -> String {
        let mut reporter = Reporter::new(Vec::new(), Theme::plain(), policy);
        reporter.case_started(2, 5, &case()).unwrap();
        reporter.case_finished(result, Duration::from_secs(30)).unwrap();
        String::from_utf8(reporter.into_inner()).unwrap()
    }

    #[test]
    fn test_success_line_rounds_elapsed() {
        let result = ExecutionResult::new(Outcome::Success, Duration::from_millis(1260))
            .with_output(b"noise".to_vec(), Vec::new());
        assert_eq!(
            render(OutputPolicy::default(), &result),
            "[2/5] Checking function contract for VecMap::<u8, u8>::clear on contract_harnesses::clear ... ok (1.3s)\n"
        );
    }

    #[test]
    fn test_failure_hides_output_by_default() {
        let result = ExecutionResult::new(Outcome::Failure { code: Some(1) }, Duration::from_secs(2))
            .with_output(b"VERIFICATION:- FAILED\n".to_vec(), Vec::new());
        let output = render(OutputPolicy::default(), &result);
        assert!(output.ends_with("... FAILED (exit code 1)\n"));
        assert!(!output.contains("VERIFICATION"));
    }

    #[test]
    fn test_failure_shows_output_with_fail_fast() {
        let result = ExecutionResult::new(Outcome::Failure { code: Some(1) }, Duration::from_secs(2))
            .with_output(b"VERIFICATION:- FAILED\n".to_vec(), b"warning: unwinding".to_vec());
        let policy = OutputPolicy {
            fail_fast: true,
            ..OutputPolicy::default()
        };
        let output = render(policy, &result);
        assert!(output.ends_with(
            "FAILED (exit code 1)\n\
             ------------ stdout ------------\n\
             VERIFICATION:- FAILED\n\
             ------------ stderr ------------\n\
             warning: unwinding\n"
        ));
    }

    #[test]
    fn test_verbose_shows_output_on_success() {
        let result = ExecutionResult::new(Outcome::Success, Duration::from_secs(1))
            .with_output(b"VERIFICATION:- SUCCESSFUL\n".to_vec(), Vec::new());
        let policy = OutputPolicy {
            verbose: true,
            ..OutputPolicy::default()
        };
        assert!(render(policy, &result).contains("VERIFICATION:- SUCCESSFUL"));
    }

    #[test]
    fn test_timeout_reports_configured_limit() {
        let result = ExecutionResult::new(Outcome::Timeout, Duration::from_secs(31));
        assert!(render(OutputPolicy::default(), &result).ends_with("TIMEOUT (after 30s)\n"));
    }

    #[test]
    fn test_signal_failure() {
        let result = ExecutionResult::new(Outcome::Failure { code: None }, Duration::from_secs(1));
        assert!(render(OutputPolicy::default(), &result).ends_with("FAILED (terminated by signal)\n"));
    }

    #[test]
    fn test_skip_line_has_reason_and_no_elapsed_time() {
        let mut reporter = Reporter::new(Vec::new(), Theme::plain(), OutputPolicy::default());
        reporter.case_started(1, 1, &case()).unwrap();
        reporter.case_skipped("needs a larger unwind bound").unwrap();
        let output = String::from_utf8(reporter.into_inner()).unwrap();
        assert!(output.ends_with("... skipped (needs a larger unwind bound)\n"));
    }

    #[test]
    fn test_summary_mentions_fail_fast_abort() {
        let mut reporter = Reporter::new(Vec::new(), Theme::plain(), OutputPolicy::default());
        let summary = RunSummary {
            passed: 1,
            failed: 1,
            aborted: true,
            ..RunSummary::default()
        };
        reporter.summary(&summary).unwrap();
        assert_eq!(
            String::from_utf8(reporter.into_inner()).unwrap(),
            "\n1 passed, 1 failed, 0 timed out, 0 skipped (stopped early: --fail-fast)\n"
        );
    }
}
