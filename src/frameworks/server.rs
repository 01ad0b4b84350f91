// Framework bootstrap for the snake server runtime.

use crate::frameworks::config::ServerConfig;
use crate::interface_adapters::routes;
use crate::interface_adapters::state::AppState;

use std::{io::Result, sync::Arc};

fn init_runtime() {
    // Load .env locally; safe to ignore when not present.
    let _ = dotenvy::dotenv();

    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    // A subscriber installed by an earlier call or by a test harness wins.
    let json = matches!(std::env::var("LOG_FORMAT").as_deref(), Ok("json"));
    let _ = if json {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .json()
            .with_current_span(true)
            .try_init()
    } else {
        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_target(false)
            .compact()
            .try_init()
    };

    std::panic::set_hook(Box::new(|info| {
        let backtrace = std::backtrace::Backtrace::capture();
        tracing::error!(%info, ?backtrace, "panic");
    }));
}

// Serve the engine endpoints on an already bound listener.
pub async fn run(listener: tokio::net::TcpListener) -> Result<()> {
    run_with_state(listener, AppState::default()).await
}

pub async fn run_with_state(listener: tokio::net::TcpListener, state: AppState) -> Result<()> {
    let address = listener.local_addr()?;
    let app = routes::app(Arc::new(state));

    tracing::info!(%address, "listening");

    // Serve app and report errors rather than panicking
    axum::serve(listener, app).await.inspect_err(|e| {
        tracing::error!(error = %e, "server error");
    })
}

pub async fn run_with_config(config: ServerConfig) -> Result<()> {
    init_runtime();

    let (host, port) = config.bind_target();

    // Bind TCP listener with error handling
    let listener = tokio::net::TcpListener::bind(config.bind_target())
        .await
        .inspect_err(|e| {
            tracing::error!(%host, port, error = %e, "failed to bind");
        })?;

    run(listener).await
}
