//! Sequential execution of a resolved run set

use super::CaseRunner;
use crate::{
    command::Invocation,
    config::RunnerConfig,
    error::Result,
    registry::TestCase,
    report::Reporter,
    selection::{Selection, SelectionMode},
    types::RunSummary,
};
use std::io::Write;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info};

/// Per-run knobs the executor needs
#[derive(Debug, Clone, PartialEq)]
pub struct ExecutionSettings {
    pub verifier: String,
    pub unwind: u32,
    pub timeout: Duration,
    pub test_file: PathBuf,
    pub fail_fast: bool,
    pub noskip: bool,
    pub echo_commands: bool,
}

impl ExecutionSettings {
    /// Settings for a validated config, with every flag off
    pub fn from_config(config: &RunnerConfig) -> Self {
        Self {
            verifier: config.verifier.clone(),
            unwind: config.unwind,
            timeout: config.timeout(),
            test_file: config.test_file.clone(),
            fail_fast: false,
            noskip: false,
            echo_commands: false,
        }
    }
}

/// A case with a skip reason is skipped unless it was picked by index or
/// `--noskip` is set.
pub fn should_skip(case: &TestCase, mode: &SelectionMode, noskip: bool) -> bool {
    case.skip.is_some() && !matches!(mode, SelectionMode::ByIndex(_)) && !noskip
}

/// Runs cases one at a time through a [`CaseRunner`], reporting as it goes
pub struct Executor<R: CaseRunner> {
    runner: R,
    settings: ExecutionSettings,
}

impl<R: CaseRunner> Executor<R> {
    pub fn new(runner: R, settings: ExecutionSettings) -> Self {
        Self { runner, settings }
    }

    pub fn settings(&self) -> &ExecutionSettings {
        &self.settings
    }

    /// Execute the selection in order. With fail-fast, the first failure or
    /// timeout ends the run before the next case starts.
    pub fn run<W: Write>(
        &mut self,
        selection: &Selection<'_>,
        reporter: &mut Reporter<W>,
    ) -> Result<RunSummary> {
        let mut summary = RunSummary::default();
        let total = selection.len();

        for (position, case) in selection.cases.iter().enumerate() {
            let skip_reason = case
                .skip
                .as_deref()
                .filter(|_| should_skip(case, &selection.mode, self.settings.noskip));

            if let Some(reason) = skip_reason {
                reporter.case_started(position + 1, total, case)?;
                reporter.case_skipped(reason)?;
                summary.skipped += 1;
                continue;
            }

            let invocation = Invocation::verifier(
                &self.settings.verifier,
                self.settings.unwind,
                case,
                &self.settings.test_file,
            );
            if self.settings.echo_commands {
                reporter.command(&invocation)?;
            }

            reporter.case_started(position + 1, total, case)?;
            let result = match self.runner.run(&invocation, self.settings.timeout) {
                Ok(result) => result,
                Err(e) => {
                    reporter.case_errored(&e)?;
                    return Err(e);
                }
            };
            reporter.case_finished(&result, self.settings.timeout)?;
            summary.record(result.outcome);

            if result.outcome.is_failure() && self.settings.fail_fast {
                summary.aborted = position + 1 < total;
                info!("Stopping after {} because --fail-fast is set", case.harness);
                break;
            }
        }

        debug!("Run finished: {:?}", summary);
        Ok(summary)
    }
}
