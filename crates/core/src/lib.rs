//! contract-runner - orchestrates function-contract checks against an external verifier
//!
//! This crate provides functionality to:
//! - Describe the fixed registry of `VecMap` contract/harness pairs
//! - Select cases by index or function-name filter
//! - Run the verifier per case under a wall-clock timeout and classify the result
//! - Report per-case status, captured output and a registry table
pub mod build_system;
pub mod command;
pub mod config;
pub mod driver;
pub mod error;
pub mod registry;
pub mod report;
pub mod runners;
pub mod selection;
pub mod types;

// Re-export commonly used types and traits
pub use error::{Error, Result};
pub use types::*;

// Re-export main API components
pub use command::Invocation;
pub use config::RunnerConfig;
pub use driver::{Driver, DriverOptions, RunStatus};
pub use registry::{Registry, TestCase};
pub use report::{OutputPolicy, Reporter, Theme};
pub use runners::{CaseRunner, ExecutionSettings, Executor, ProcessRunner};
pub use selection::{Selection, SelectionMode, select};
