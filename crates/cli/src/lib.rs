pub mod cli;
pub mod commands;
pub mod exit;

// Re-export commonly used items
pub use cli::Cli;
pub use exit::{exit_code_for_error, exit_code_for_status};
