//! shift-tracker: department shift tracking service.
//!
//! Long-running host that:
//! - Loads the department config and seed roster
//! - Samples the display clock at the configured cadence
//! - Serves the shift API over HTTP

use std::sync::Arc;

use tokio::sync::broadcast::{self, error::RecvError};
use tracing::{debug, info, warn};

use shift_tracker::api::{AppState, create_router};
use shift_tracker::clock::{SystemTimeSource, TimeClock, TimeSource, spawn_ticker};
use shift_tracker::config::ConfigLoader;
use shift_tracker::store::StoreEvent;

type BoxError = Box<dyn std::error::Error + Send + Sync>;

const DEFAULT_CONFIG_DIR: &str = "./config/default";

#[tokio::main]
async fn main() -> Result<(), BoxError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shift_tracker=info".into()),
        )
        .init();

    let config_dir =
        std::env::var("SHIFT_TRACKER_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_DIR.to_string());
    let loader = ConfigLoader::load(&config_dir)?;
    let department = loader.department().clone();

    let source: Arc<dyn TimeSource> = Arc::new(SystemTimeSource);
    let store = loader.build_store(Arc::clone(&source))?;
    let events = store.subscribe();
    let clock = Arc::new(TimeClock::new(source));

    let ticker = spawn_ticker(Arc::clone(&clock), department.clock.tick_interval());
    let event_log = tokio::spawn(log_store_events(events));

    let bind_address = department.server.bind_address.clone();
    info!(
        department = %department.name,
        employees = store.len(),
        tick_interval_ms = department.clock.tick_interval_ms,
        "Starting shift-tracker"
    );

    let app = create_router(AppState::new(store, clock, department));
    let listener = tokio::net::TcpListener::bind(&bind_address).await?;
    info!("shift-tracker HTTP listening on {bind_address}");

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    ticker.abort();
    event_log.abort();
    info!("shift-tracker stopped");
    Ok(())
}

async fn log_store_events(mut events: broadcast::Receiver<StoreEvent>) {
    loop {
        match events.recv().await {
            Ok(event) => debug!(?event, "Store event"),
            Err(RecvError::Lagged(skipped)) => warn!(skipped, "Store event log lagged"),
            Err(RecvError::Closed) => break,
        }
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for shutdown signal: {e}");
        std::future::pending::<()>().await;
    }
    info!("Shutdown requested");
}
