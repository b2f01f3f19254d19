//! External command construction and execution

pub mod invocation;
pub mod process;

// Re-export commonly used types
pub use invocation::Invocation;
pub use process::run_with_timeout;
