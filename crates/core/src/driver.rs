//! Top-level orchestration: list, build, prepare PATH, select, execute

use crate::{
    build_system::{BuildStep, ensure_on_search_path},
    config::RunnerConfig,
    error::Result,
    registry::Registry,
    report::Reporter,
    runners::{CaseRunner, ExecutionSettings, Executor, ProcessRunner},
    selection::{SelectionMode, select},
    types::RunSummary,
};
use std::io::Write;
use std::path::PathBuf;
use tracing::{debug, info, warn};

/// What the operator asked for on the command line
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DriverOptions {
    pub list: bool,
    pub fail_fast: bool,
    pub index: Option<usize>,
    pub filter: Option<String>,
    pub noskip: bool,
    pub echo_commands: bool,
}

/// How a driver run ended without an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunStatus {
    /// `--list` printed the registry; nothing was built or run
    Listed,
    /// The filter matched no case
    EmptySelection,
    Completed(RunSummary),
}

impl RunStatus {
    /// False only when an executed case failed or timed out
    pub fn succeeded(&self) -> bool {
        match self {
            RunStatus::Listed | RunStatus::EmptySelection => true,
            RunStatus::Completed(summary) => summary.all_passed(),
        }
    }
}

pub struct Driver<R: CaseRunner = ProcessRunner> {
    registry: Registry,
    config: RunnerConfig,
    project_root: PathBuf,
    runner: R,
}

impl Driver<ProcessRunner> {
    pub fn new(registry: Registry, config: RunnerConfig, project_root: impl Into<PathBuf>) -> Self {
        Self::with_runner(registry, config, project_root, ProcessRunner)
    }
}

impl<R: CaseRunner> Driver<R> {
    pub fn with_runner(
        registry: Registry,
        config: RunnerConfig,
        project_root: impl Into<PathBuf>,
        runner: R,
    ) -> Self {
        Self {
            registry,
            config,
            project_root: project_root.into(),
            runner,
        }
    }

    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    pub fn runner(&self) -> &R {
        &self.runner
    }

    pub fn run<W: Write>(
        &mut self,
        options: &DriverOptions,
        reporter: &mut Reporter<W>,
    ) -> Result<RunStatus> {
        if options.list {
            reporter.list_available(&self.registry)?;
            return Ok(RunStatus::Listed);
        }

        // Everything that can be rejected without side effects is checked
        // before the build starts.
        self.config.validate()?;
        let mode = SelectionMode::from_request(options.index, options.filter.clone())?;
        let selection = select(&self.registry, mode)?;
        debug!("Selected {} of {} cases", selection.len(), self.registry.len());

        reporter.message("Building verifier")?;
        let build = BuildStep::new(&self.config.build_command, &self.project_root)?;
        let output = build.run()?;
        if !output.status.success() {
            reporter.build_output(&output.stdout, &output.stderr)?;
            return Err(build.failure(&output));
        }

        let verifier_dir = self.config.verifier_dir_in(&self.project_root);
        if !verifier_dir.is_dir() {
            warn!("Verifier directory {} does not exist", verifier_dir.display());
        }
        ensure_on_search_path(&verifier_dir)?;

        if selection.is_empty() {
            let filter = options.filter.as_deref().unwrap_or_default();
            reporter.warning(&format!(
                "no test case function matches `{filter}`; available cases:"
            ))?;
            reporter.list_available(&self.registry)?;
            return Ok(RunStatus::EmptySelection);
        }

        let settings = ExecutionSettings {
            fail_fast: options.fail_fast,
            noskip: options.noskip,
            echo_commands: options.echo_commands,
            ..ExecutionSettings::from_config(&self.config)
        };
        let summary = Executor::new(&mut self.runner, settings).run(&selection, reporter)?;
        reporter.summary(&summary)?;
        info!(
            "{} passed, {} failed, {} timed out, {} skipped",
            summary.passed, summary.failed, summary.timed_out, summary.skipped
        );

        Ok(RunStatus::Completed(summary))
    }
}
