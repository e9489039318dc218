use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tripwise_server::config::ServerConfig;
use tripwise_server::fares::FareEstimator;
use tripwise_server::stations::StationCatalog;
use tripwise_server::web::{AppState, create_router};

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("{e}");
            std::process::exit(2);
        }
    };

    let catalog = match StationCatalog::mumbai() {
        Ok(catalog) => catalog,
        Err(e) => {
            error!("{e}");
            std::process::exit(1);
        }
    };
    let estimator = FareEstimator::default();
    info!(
        stations = catalog.len(),
        rate_cards = estimator.roster().len(),
        seeded = config.seed.is_some(),
        "loaded fare engine"
    );

    let state = AppState::new(catalog, estimator, config.seed);
    let app = create_router(state);

    let listener = match tokio::net::TcpListener::bind(config.addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.addr, "failed to bind: {e}");
            std::process::exit(1);
        }
    };

    info!("TripWise fare comparison listening on http://{}", config.addr);
    info!("API Endpoints:");
    info!("  GET  /health              - Health check");
    info!("  GET  /api/stations        - List stations (?line=)");
    info!("  GET  /api/lines           - List lines");
    info!("  GET  /api/distance        - Distance between stations (?from=&to=)");
    info!("  GET  /api/fares           - Compare fares (?pickup=&drop=&hour=)");
    info!("  GET  /api/fares/estimate  - Quotes for a distance (?distance_km=&hour=)");

    if let Err(e) = axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
    {
        error!("server error: {e}");
        std::process::exit(1);
    }
}

/// Resolves on Ctrl-C.
async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        error!("failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("shutting down");
}
