use anyhow::Result;
use contract_runner_core::{Driver, Registry, Reporter, RunStatus, Theme};
use std::io;
use tracing::debug;

use crate::cli::Cli;

pub fn run_command(cli: &Cli) -> Result<RunStatus> {
    let config = cli.load_config()?;
    debug!("Effective config: {:?}", config);

    let stdout = io::stdout();
    let mut reporter = Reporter::new(stdout.lock(), Theme::detect(), cli.output_policy());
    let mut driver = Driver::new(Registry::vec_map(), config, &cli.project_root);

    Ok(driver.run(&cli.driver_options(), &mut reporter)?)
}
