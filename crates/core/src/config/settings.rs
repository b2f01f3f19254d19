use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;
use tracing::debug;

/// Run configuration, read from `.contract-runner.json` and then overridden
/// by command-line flags. Every field is optional in the file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", default, deny_unknown_fields)]
pub struct RunnerConfig {
    /// Verifier executable, looked up on `PATH`
    pub verifier: String,
    /// Directory holding the verifier, relative to the project root
    pub verifier_dir: PathBuf,
    /// Command that builds the verifier, run from the project root
    pub build_command: Vec<String>,
    /// Value passed to `--default-unwind`
    pub unwind: u32,
    /// Wall-clock limit per case, in seconds
    pub timeout_secs: f64,
    /// Source file containing the contracts and harnesses
    pub test_file: PathBuf,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            verifier: "kani".to_string(),
            verifier_dir: PathBuf::from("scripts"),
            build_command: vec!["cargo".to_string(), "build-dev".to_string()],
            unwind: 8,
            timeout_secs: 30.0,
            test_file: PathBuf::from("fixme_vec_map_example.rs"),
        }
    }
}

impl RunnerConfig {
    pub const FILE_NAME: &'static str = ".contract-runner.json";

    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path).map_err(|e| {
            Error::ConfigError(format!("Failed to read {}: {e}", path.display()))
        })?;
        serde_json::from_str(&contents).map_err(|e| {
            Error::ConfigError(format!("Failed to parse {}: {e}", path.display()))
        })
    }

    /// Load `.contract-runner.json` from the project root, falling back to
    /// defaults when the file does not exist.
    pub fn discover(project_root: &Path) -> Result<Self> {
        let path = project_root.join(Self::FILE_NAME);
        if path.is_file() {
            debug!("Loading config from {}", path.display());
            Self::load_from_file(&path)
        } else {
            debug!("No {} in {}, using defaults", Self::FILE_NAME, project_root.display());
            Ok(Self::default())
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.verifier.trim().is_empty() {
            return Err(Error::ConfigError("verifier must not be empty".into()));
        }
        if self.build_command.is_empty() {
            return Err(Error::ConfigError("build_command must not be empty".into()));
        }
        if self.unwind == 0 {
            return Err(Error::ConfigError("unwind bound must be positive".into()));
        }
        if !self.timeout_secs.is_finite() || self.timeout_secs <= 0.0 {
            return Err(Error::ConfigError(format!(
                "timeout must be a positive number of seconds, got {}",
                self.timeout_secs
            )));
        }
        if Duration::try_from_secs_f64(self.timeout_secs).is_err() {
            return Err(Error::ConfigError(format!(
                "timeout of {} seconds is too large",
                self.timeout_secs
            )));
        }
        Ok(())
    }

    /// The per-case limit. Values `validate` rejects saturate instead of panicking.
    pub fn timeout(&self) -> Duration {
        Duration::try_from_secs_f64(self.timeout_secs.max(0.0)).unwrap_or(Duration::MAX)
    }

    pub fn verifier_dir_in(&self, project_root: &Path) -> PathBuf {
        project_root.join(&self.verifier_dir)
    }
}
