//! Building the verifier before any case runs

pub mod search_path;

pub use search_path::{ensure_on_search_path, prepend_to_search_path};

use crate::command::Invocation;
use crate::error::{Error, Result};
use std::path::Path;
use std::process::{Output, Stdio};
use tracing::{debug, info};

/// The configured build command, bound to the project root
#[derive(Debug, Clone)]
pub struct BuildStep {
    invocation: Invocation,
}

impl BuildStep {
    pub fn new(build_command: &[String], project_root: &Path) -> Result<Self> {
        let invocation = Invocation::from_argv(build_command)
            .ok_or_else(|| Error::ConfigError("build_command must not be empty".into()))?
            .with_working_dir(project_root);
        Ok(Self { invocation })
    }

    pub fn invocation(&self) -> &Invocation {
        &self.invocation
    }

    /// Run the build to completion with its output captured. A build that
    /// cannot be launched is a [`Error::BuildError`]; a nonzero exit is
    /// returned as-is so the caller can show the output first.
    pub fn run(&self) -> Result<Output> {
        let shell_cmd = self.invocation.to_shell_command();
        info!("Building verifier: {}", shell_cmd);
        if let Some(ref dir) = self.invocation.working_dir {
            debug!("Working directory: {}", dir.display());
        }

        self.invocation
            .to_command()
            .stdin(Stdio::null())
            .output()
            .map_err(|e| Error::BuildError {
                command: shell_cmd,
                reason: e.to_string(),
            })
    }

    /// The error reported for a build that ran but did not succeed
    pub fn failure(&self, output: &Output) -> Error {
        let reason = match output.status.code() {
            Some(code) => format!("exited with code {code}"),
            None => "terminated by signal".to_string(),
        };
        Error::BuildError {
            command: self.invocation.to_shell_command(),
            reason,
        }
    }
}
