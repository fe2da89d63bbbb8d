use std::sync::Arc;

use salvo::conn::TcpListener;
use salvo::{Listener, Router};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt};

use labtrack_app::api::routes;
use labtrack_app::config::ConfigHandler;
use labtrack_app::data_handler::DataProviderHandler;
use labtrack_core::config::{Settings, load_config};
use labtrack_core::constants::API_ROUTE_PREFIX;
use labtrack_data::memory::MemoryProvider;
use labtrack_data::provider::DataProvider;
use labtrack_data::seed::Seed;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let (filter_layer, filter_handle) = reload::Layer::new(EnvFilter::new("debug"));

    tracing_subscriber::registry()
        .with(filter_layer)
        .with(
            fmt::layer()
                .with_target(true)
                .with_thread_ids(true)
                .with_file(true)
                .with_line_number(true),
        )
        .init();

    tracing::info!("Starting labtrack lab-management server");

    let config = load_config()?;

    tracing::info!(config = ?config, "Configuration loaded");

    if let Ok(filter) = EnvFilter::try_new(config.logging.level.as_str()) {
        if let Err(e) = filter_handle.modify(|current| *current = filter) {
            tracing::warn!(error = %e, "Failed to update log filter from config");
        }
    } else {
        tracing::warn!(level = %config.logging.level, "Invalid log level in config, keeping debug");
    }

    let provider = build_provider(&config)?;

    let bind_addr = config.server.bind_addr();
    let acceptor = TcpListener::new(bind_addr.clone()).bind().await;

    let router = Router::new()
        .hoop(DataProviderHandler { provider })
        .hoop(ConfigHandler {
            settings: config.clone(),
        })
        .push(routes());

    tracing::info!("Server listening on {bind_addr}, API under {API_ROUTE_PREFIX}");

    salvo::Server::new(acceptor).serve(router).await;

    Ok(())
}

fn build_provider(config: &Settings) -> anyhow::Result<Arc<dyn DataProvider>> {
    let provider = match &config.data.seed_path {
        Some(path) => {
            let seed = Seed::from_path(path)?;
            tracing::info!(
                path,
                users = seed.users.len(),
                labs = seed.labs.len(),
                slots = seed.slots.len(),
                bookings = seed.bookings.len(),
                "Seeding in-memory data provider"
            );
            MemoryProvider::from_seed(seed)
        }
        None => {
            tracing::info!("Starting with an empty in-memory data provider");
            MemoryProvider::new()
        }
    };
    Ok(Arc::new(provider))
}
