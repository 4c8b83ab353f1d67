use std::{net::SocketAddr, sync::Arc};

use anyhow::Context;
use axum::Router;
use tower_http::{cors::CorsLayer, trace::TraceLayer};

use chirpy::{
    config::AppConfig, db::DocumentStore, logging::init_tracing, routes::router, state::AppState,
};

#[tokio::main]
async fn main() {
    if let Err(err) = run().await {
        tracing::error!("server failed: {err:?}");
        eprintln!("server failed: {err:?}");
        std::process::exit(1);
    }
}

async fn run() -> anyhow::Result<()> {
    let cfg = AppConfig::from_env()?;
    init_tracing(&cfg.logging)?;

    let store = DocumentStore::open(&cfg.store.path)
        .await
        .context("failed to initialize document store")?;

    let addr: SocketAddr = format!("{}:{}", cfg.general.host, cfg.general.port)
        .parse()
        .context("invalid host/port")?;

    let state = AppState::new(cfg, store).context("failed to build token service")?;

    let app = Router::new()
        .merge(router(Arc::clone(&state)))
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http());

    tracing::info!("listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
