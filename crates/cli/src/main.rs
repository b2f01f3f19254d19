use clap::Parser;
use contract_runner::{Cli, exit_code_for_error, exit_code_for_status};
use std::process::ExitCode;
use tracing::debug;

fn main() -> ExitCode {
    // Initialize tracing based on RUST_LOG env var
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    debug!("Parsed arguments: {:?}", cli);

    match cli.execute() {
        Ok(status) => ExitCode::from(exit_code_for_status(&status)),
        Err(err) => {
            eprintln!("error: {err:#}");
            ExitCode::from(exit_code_for_error(&err))
        }
    }
}
