use std::net::SocketAddr;

use portfolio_projects::shell::config::AppConfig;
use portfolio_projects::shell::state::AppState;
use portfolio_projects::shell::{http, telemetry};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    telemetry::init();

    let config = AppConfig::from_env()?;
    let state = AppState::from_config(&config);
    let app = http::app(state, &config);

    let addr: SocketAddr = format!("{}:{}", config.host, config.port).parse()?;
    tracing::info!(%addr, environment = ?config.environment, "Projects API listening");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;
    Ok(())
}
