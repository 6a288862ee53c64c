use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use solr_webtool::{api, config, state::AppState};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "solr_webtool=debug,tower_http=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration once; read-only from here on / 加载配置
    let app_config = config::load_config().map_err(anyhow::Error::msg)?;
    tracing::info!(
        "Page size {}, Solr timeout {}s",
        app_config.search.page_size,
        app_config.solr.timeout_secs
    );

    let bind_addr = app_config.get_bind_address();
    let state = Arc::new(AppState::from_config(app_config)?);
    let app = api::router(state);

    let listener = tokio::net::TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server running at http://{}", bind_addr);

    axum::serve(listener, app).await?;

    Ok(())
}
