use anyhow::{Context, Result};
use clap::Parser;
use contract_runner_core::{DriverOptions, OutputPolicy, RunStatus, RunnerConfig};
use std::path::PathBuf;

use crate::commands::run_command;

/// Check VecMap function contracts with the Kani verifier
#[derive(Parser, Debug)]
#[command(name = "contract-runner")]
#[command(version, about, long_about = None)]
#[command(after_help = "ENVIRONMENT:\n    RUST_LOG=debug    Enable debug logging")]
pub struct Cli {
    /// Stop at the first failing or timed-out case and print its output
    #[arg(long)]
    pub fail_fast: bool,

    /// Run only the case at this registry index (see --list), even if it is normally skipped
    #[arg(long, conflicts_with = "filter")]
    pub index: Option<usize>,

    /// Per-case time limit in seconds [default: 30]
    #[arg(long, value_name = "SECONDS")]
    pub timeout: Option<f64>,

    /// Run only cases whose function name contains this substring
    #[arg(long)]
    pub filter: Option<String>,

    /// Print the available cases and exit
    #[arg(long)]
    pub list: bool,

    /// Also run cases that are skipped by default
    #[arg(long)]
    pub noskip: bool,

    /// Print each verifier command before running it
    #[arg(long)]
    pub echo_commands: bool,

    /// Source file with the contracts and harnesses [default: fixme_vec_map_example.rs]
    #[arg(long, value_name = "PATH")]
    pub test_file: Option<PathBuf>,

    /// Print verifier output for every case, including successes
    #[arg(short, long)]
    pub verbose: bool,

    /// Loop unwinding bound passed to the verifier [default: 8]
    #[arg(long, value_name = "N")]
    pub unwind: Option<u32>,

    /// Root of the verifier checkout; the build runs here
    #[arg(long, value_name = "DIR", default_value = ".")]
    pub project_root: PathBuf,

    /// Config file [default: <PROJECT_ROOT>/.contract-runner.json if present]
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,
}

impl Cli {
    /// Load the config file and apply command-line overrides on top
    pub fn load_config(&self) -> Result<RunnerConfig> {
        let mut config = match &self.config {
            Some(path) => RunnerConfig::load_from_file(path)
                .with_context(|| format!("Failed to load config {}", path.display()))?,
            None => RunnerConfig::discover(&self.project_root)?,
        };

        if let Some(timeout) = self.timeout {
            config.timeout_secs = timeout;
        }
        if let Some(unwind) = self.unwind {
            config.unwind = unwind;
        }
        if let Some(ref test_file) = self.test_file {
            config.test_file = test_file.clone();
        }
        Ok(config)
    }

    pub fn driver_options(&self) -> DriverOptions {
        DriverOptions {
            list: self.list,
            fail_fast: self.fail_fast,
            index: self.index,
            filter: self.filter.clone(),
            noskip: self.noskip,
            echo_commands: self.echo_commands,
        }
    }

    pub fn output_policy(&self) -> OutputPolicy {
        OutputPolicy {
            verbose: self.verbose,
            fail_fast: self.fail_fast,
        }
    }

    /// Execute the requested run
    pub fn execute(self) -> Result<RunStatus> {
        run_command(&self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_flags_override_config_defaults() {
        let temp = tempfile::TempDir::new().unwrap();
        let root = temp.path().to_str().unwrap();
        let cli = Cli::parse_from([
            "contract-runner",
            "--project-root",
            root,
            "--timeout",
            "2.5",
            "--unwind",
            "3",
            "--test-file",
            "other.rs",
        ]);

        let config = cli.load_config().unwrap();
        assert_eq!(config.timeout_secs, 2.5);
        assert_eq!(config.unwind, 3);
        assert_eq!(config.test_file, PathBuf::from("other.rs"));
        assert_eq!(config.verifier, "kani");
    }

    #[test]
    fn test_index_conflicts_with_filter() {
        let err = Cli::try_parse_from(["contract-runner", "--index", "0", "--filter", "new"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::ArgumentConflict);
    }

    #[test]
    fn test_driver_options() {
        let cli = Cli::parse_from(["contract-runner", "--fail-fast", "--filter", "clear", "--echo-commands"]);
        let options = cli.driver_options();
        assert!(options.fail_fast);
        assert!(options.echo_commands);
        assert_eq!(options.filter.as_deref(), Some("clear"));
        assert_eq!(options.index, None);
        assert!(cli.output_policy().fail_fast);
    }
}
