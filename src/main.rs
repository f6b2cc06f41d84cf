//! A greeting service with axum.

use axum_hello::{
    app,
    infra::{config, logging},
};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;
    dotenvy::dotenv().ok();
    let config = config::load_config()?;
    let _guard = logging::init_logging(&config.log);

    let listener = TcpListener::bind(format!(
        "{}:{}",
        config.server.http_address, config.server.http_port
    ))
    .await?;
    app::run_app(listener, config).await?;

    Ok(())
}
