//! Configuration management for contract-runner

mod settings;

pub use settings::RunnerConfig;
