use pathway_api::api::{create_router, AppState};
use pathway_api::catalog::load_catalog;
use pathway_api::config::Config;
use pathway_api::engine::{MatchPolicy, MatchingEngine};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;

    // Catalog loading happens before any request is served
    let catalog = load_catalog(&config.catalog_path)?;
    let engine = MatchingEngine::new(catalog, MatchPolicy::default())?;
    let state = AppState::new(engine, config.catalog_path.clone());

    let app = create_router(state);

    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!(%addr, "Server running");
    axum::serve(listener, app).await?;

    Ok(())
}
