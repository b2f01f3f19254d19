//! Executing contract checks

pub mod executor;
pub mod process_runner;
pub mod traits;

// Re-export main types
pub use executor::{ExecutionSettings, Executor, should_skip};
pub use process_runner::ProcessRunner;
pub use traits::CaseRunner;
