//! Fixtures shared by the workspace integration tests
//!
//! A [`FakeProject`] is a temporary project root with a `scripts/` directory
//! holding a stand-in `kani` shell script, so the driver can be exercised
//! end to end without a real verifier.

use contract_runner_core::RunnerConfig;
use std::io;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

pub struct FakeProject {
    dir: TempDir,
}

impl FakeProject {
    pub fn new() -> io::Result<Self> {
        let dir = TempDir::new()?;
        std::fs::create_dir(dir.path().join("scripts"))?;
        Ok(Self { dir })
    }

    pub fn root(&self) -> &Path {
        self.dir.path()
    }

    pub fn scripts_dir(&self) -> PathBuf {
        self.root().join("scripts")
    }

    /// Write `scripts/kani` as a `/bin/sh` script with the given body. The
    /// script sees the verifier arguments unchanged: `$4` is the
    /// `<function>/<harness>` target and `$5` the test file.
    #[cfg(unix)]
    pub fn install_verifier(&self, body: &str) -> io::Result<PathBuf> {
        use std::os::unix::fs::PermissionsExt;

        let path = self.scripts_dir().join("kani");
        std::fs::write(&path, format!("#!/bin/sh\n{body}\n"))?;
        std::fs::set_permissions(&path, std::fs::Permissions::from_mode(0o755))?;
        Ok(path)
    }

    /// Write `.contract-runner.json` in the project root
    pub fn write_config(&self, config: &serde_json::Value) -> io::Result<()> {
        let contents = serde_json::to_string_pretty(config).map_err(io::Error::other)?;
        std::fs::write(self.root().join(RunnerConfig::FILE_NAME), contents)
    }

    /// A config whose build step always succeeds and whose verifier is the
    /// fake `scripts/kani`, addressed by absolute path. Tests in one binary
    /// share `PATH`, so they must not rely on lookup to find their own script.
    pub fn config(&self) -> RunnerConfig {
        RunnerConfig {
            verifier: self.scripts_dir().join("kani").display().to_string(),
            build_command: vec!["true".to_string()],
            ..RunnerConfig::default()
        }
    }
}
