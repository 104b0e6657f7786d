use std::sync::Arc;

use dotenvy::dotenv;
use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use mergington::config::Config;
use mergington::database::roster_store::RosterStore;
use mergington::database::seed;
use mergington::web;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = Config::from_env().inspect_err(|e| error!("Invalid configuration: {}", e))?;

    let catalog = match &config.seed_path {
        Some(path) => seed::load_catalog(path).inspect_err(|e| error!("Seeding failed: {}", e))?,
        None => seed::default_activities(),
    };
    let source = config
        .seed_path
        .as_deref()
        .map(|p| p.display().to_string())
        .unwrap_or_else(|| "built-in".to_string());
    info!(activities = catalog.len(), %source, "Roster seeded");

    let store = Arc::new(RosterStore::new(catalog));
    let app = web::router(store, &config.static_dir);

    let host = config.host.as_str();
    let listener = match tokio::net::TcpListener::bind((host, config.port)).await {
        Ok(l) => l,
        Err(e) => {
            let Some(fallback) = config.port.checked_add(1) else {
                return Err(e.into());
            };
            warn!(
                "Could not bind {}:{}: {}. Trying fallback {}:{}",
                host, config.port, e, host, fallback
            );
            tokio::net::TcpListener::bind((host, fallback)).await?
        }
    };

    let bound_addr = listener.local_addr()?;
    info!("Server listening on http://{}", bound_addr);
    info!("Open http://{}{} to get started", bound_addr, web::INDEX_PATH);

    axum::serve(listener, app).await?;
    Ok(())
}
