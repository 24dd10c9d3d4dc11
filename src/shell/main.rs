use std::sync::Arc;

use tower_http::trace::TraceLayer;
use tracing_subscriber::EnvFilter;

use time_entries_batch::shell::config::Config;
use time_entries_batch::shell::http::router;
use time_entries_batch::shell::state::AppState;
use time_entries_batch::shared::infrastructure::remote_api::http::HttpRemoteApi;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env()?;
    let gateway = Arc::new(HttpRemoteApi::new(&config.remote_api_base_url));
    let state = AppState::with_gateway(gateway);
    let app = router(state).layer(TraceLayer::new_for_http());

    let listener = tokio::net::TcpListener::bind(&config.bind_address).await?;
    tracing::info!(address = %config.bind_address, "listening");
    axum::serve(listener, app).await?;
    Ok(())
}
