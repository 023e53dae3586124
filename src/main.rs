use anyhow::Context;
use std::net::SocketAddr;
use std::sync::Arc;
use tradequest::{api, config::Config, Journal, SqliteStore, StateStore};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing_subscriber::filter::LevelFilter::INFO.into()),
        )
        .init();

    let config = Config::from_env().context("configuration error")?;

    let store: Arc<dyn StateStore> = Arc::new(
        SqliteStore::open(&config.database_path)
            .await
            .with_context(|| format!("failed to open store at {}", config.database_path))?,
    );

    let journal = Journal::load_or_initialize(
        store,
        config.state_key.clone(),
        config.rules,
        config.starting_balance,
    )
    .await
    .context("failed to load journal")?;

    let app = api::create_router(api::AppState::new(Arc::new(journal)));

    // Single-user service; only reachable from this machine.
    let addr = SocketAddr::from(([127, 0, 0, 1], config.port));
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind to {}", addr))?;

    tracing::info!("Journal listening on {}", addr);

    axum::serve(listener, app).await.context("server error")?;
    Ok(())
}
