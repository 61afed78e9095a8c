use std::sync::Arc;

use lambda_runtime::{Error, LambdaEvent, run, service_fn};
use portfolio::adapter::{EventAdapter, InboundEvent, handler};
use portfolio::core::config::{AppConfig, GatewayConfig};
use portfolio::site::PortfolioApp;
use tracing::{error, info, warn};

#[tokio::main]
async fn main() -> Result<(), Error> {
    portfolio::setup_logging();

    let config = AppConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;
    let gateway_config = GatewayConfig::from_env().map_err(|e| {
        error!("Config error: {}", e);
        Error::from(e)
    })?;

    if config.uses_default_secret() {
        warn!("SECRET_KEY is not set; using the built-in default");
    }
    info!(
        environment = %config.environment,
        server_name = %gateway_config.server_name,
        "Starting portfolio Lambda"
    );

    let adapter = Arc::new(EventAdapter::new(PortfolioApp::new(config), gateway_config));

    run(service_fn(move |event: LambdaEvent<InboundEvent>| {
        let adapter = Arc::clone(&adapter);
        async move { handler(&*adapter, event).await }
    }))
    .await
}
