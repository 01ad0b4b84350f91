use clap::Parser;
use snake_server::{Args, ServerConfig};

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let config = ServerConfig::from(Args::parse());

    // Delegate to the server framework entry point.
    snake_server::run_with_config(config).await
}
