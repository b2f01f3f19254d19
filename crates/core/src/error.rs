use std::io;

/// Errors that can occur while orchestrating contract checks
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Configuration error: {0}")]
    ConfigError(String),

    #[error("--index and --filter are mutually exclusive")]
    ConflictingSelection,

    #[error("Index {index} is out of range (registry has {len} test cases)")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("Building the verifier with `{command}` failed: {reason}")]
    BuildError { command: String, reason: String },

    #[error("Failed to launch `{program}`: {source}")]
    SpawnError {
        program: String,
        #[source]
        source: io::Error,
    },

    #[error("IO error: {0}")]
    IoError(#[from] io::Error),
}

impl Error {
    /// Whether this error was raised before anything was built or executed
    /// because the requested run itself is invalid.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::ConfigError(_)
                | Error::ConflictingSelection
                | Error::IndexOutOfRange { .. }
        )
    }
}

/// Result type alias for contract-runner operations
pub type Result<T> = std::result::Result<T, Error>;
