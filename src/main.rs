mod api_doc;
mod config;
mod error;
mod handlers;
mod models;
mod routes;
mod server;
mod state;
mod store;

use config::Config;
use state::AppState;
use store::MotdStore;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_init();

    tracing::info!("motd-api starting");

    let config = Config::from_env()?;
    config.log_startup();

    let state = AppState::new(MotdStore::new());
    server::serve(&config, state).await?;

    tracing::info!("goodbye");
    Ok(())
}

fn tracing_init() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer())
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "motd_api=info,tower_http=info".into()),
        )
        .init();
}
