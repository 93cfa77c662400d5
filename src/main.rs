use std::sync::Arc;

use actuator_device::{logging, server, Actuator, ActuatorConfig};
use anyhow::{Context, Result};
use tokio::net::TcpListener;
use tracing::{error, info};

#[tokio::main]
async fn main() -> Result<()> {
    logging::init();

    let config = ActuatorConfig::from_env().context("invalid actuator configuration")?;

    info!("Actuator starting: {}", config.actuator_id);
    info!("  Profile: {}", config.profile);

    // Registries are complete before the first command is accepted
    let actuator = Arc::new(
        Actuator::new(config.actuator_id.clone(), config.profile)
            .context("failed to register action domains")?,
    );
    for (domain, keys) in &actuator.context().pairs {
        info!("  {}: {}", domain, keys.join(", "));
    }

    let listener = TcpListener::bind(config.bind_addr)
        .await
        .with_context(|| format!("failed to bind {}", config.bind_addr))?;
    info!("Listening on {}", config.bind_addr);

    tokio::select! {
        _ = server::serve(listener, actuator) => {}
        result = tokio::signal::ctrl_c() => {
            if let Err(e) = result {
                error!("Failed to listen for ctrl-c: {}", e);
            }
            info!("Shutting down");
        }
    }

    Ok(())
}
