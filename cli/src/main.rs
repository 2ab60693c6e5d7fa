use std::io;

use anyhow::{Context, Result};
use tracing::info;

use pin_activator::{activate_once, menu, telemetry, ActivatorConfig};

fn main() -> Result<()> {
    let config = ActivatorConfig::from_env().context("failed to load configuration")?;
    telemetry::init(&config.log_level)?;

    info!("Starting pin-activator");
    info!("Configuration: {:?}", config);

    let stdin = io::stdin();
    let mut stdout = io::stdout();
    menu::run(stdin.lock(), &mut stdout, |request| {
        activate_once(&config, request);
    })?;

    Ok(())
}
