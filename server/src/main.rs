use board_server::{ServerConfig, ServerError};
use tokio::net::TcpListener;

#[tokio::main]
async fn main() -> Result<(), ServerError> {
    tracing_subscriber::fmt::init();

    let port = std::env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let addr = format!("0.0.0.0:{port}");
    let config = ServerConfig::from_env();

    let listener = TcpListener::bind(&addr).await?;
    tracing::info!(%addr, origin = ?config.frontend_origin, "board-server listening");
    board_server::run(listener, config).await
}
