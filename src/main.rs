use anyhow::Result;
use axum::Router;
use wind_power_predictor::{api, app::AppState, config::Config, telemetry};
use telemetry::init_tracing;
use tracing::{info, warn};

#[tokio::main]
async fn main() -> Result<()> {
    init_tracing();

    let cfg = Config::load()?;

    if cfg.weather.api_key.is_empty() || cfg.weather.api_key.starts_with("__SET_VIA_ENV") {
        warn!(
            "Weather API key not configured - set WPP__WEATHER__API_KEY; \
            the /windapi endpoint will fail until it is"
        );
    }

    let app_state = AppState::new(cfg.clone())?;

    let app: Router = api::router(app_state, &cfg);

    let addr = cfg.server.socket_addr()?;

    if cfg.server.host == "0.0.0.0" {
        warn!(
            "WARNING: Server binding to 0.0.0.0 - service will be accessible from network! \
            For production, bind to 127.0.0.1 unless behind a firewall/reverse proxy."
        );
    }

    info!(%addr, "starting wind power prediction service");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(telemetry::shutdown_signal())
        .await?;

    warn!("shutdown complete");
    Ok(())
}
