mod api;
mod middleware;

use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use crate::api::{build_app, AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = perto_core::load_app_config()?;
    let env_filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_level.clone()))?;
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let sources_file = perto_core::load_sources(&config.sources_path)?;

    let client = perto_catalog::CatalogClient::new(
        config.fetch_timeout_secs,
        &config.user_agent,
        config.fetch_max_retries,
        config.fetch_retry_backoff_base_secs,
    )?;

    // An essential source failing here aborts startup: there is no usable
    // partial catalog, so nothing is served.
    let catalog =
        perto_catalog::load_catalog(&client, &config.data_base_url, &sources_file.sources).await?;
    tracing::info!(places = catalog.len(), "catalog loaded");

    let app = build_app(AppState {
        catalog: Arc::new(catalog),
        search_result_cap: config.search_result_cap,
    });

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    tracing::info!(addr = %config.bind_addr, "listening");
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("failed to listen for ctrl-c");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("received shutdown signal, starting graceful shutdown");
}
