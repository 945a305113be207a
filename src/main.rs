use std::sync::Arc;

use anyhow::Context;
use axum::{routing::get, Router};
use tracing::info;
use tracing_subscriber::EnvFilter;

mod error;
mod mem;
mod routes;
mod snapshot;
mod state;
mod temp;
mod types;
mod uptime;

use state::{AppState, MetricSources};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 5000;

/// Accepts `--port N`, `-p N`, `--port=N`, `--host H`, `--host=H`.
/// Anything unrecognized is ignored; bad values fall back to the defaults.
fn parse_listen_args<I: IntoIterator<Item = String>>(args: I) -> (String, u16) {
    let mut it = args.into_iter();
    let _ = it.next(); // program name
    let mut host: Option<String> = None;
    let mut port: Option<String> = None;
    while let Some(a) = it.next() {
        match a.as_str() {
            "--port" | "-p" => port = it.next(),
            "--host" => host = it.next(),
            _ if a.starts_with("--port=") => {
                if let Some((_, v)) = a.split_once('=') {
                    port = Some(v.to_string());
                }
            }
            _ if a.starts_with("--host=") => {
                if let Some((_, v)) = a.split_once('=') {
                    host = Some(v.to_string());
                }
            }
            _ => {}
        }
    }
    (
        host.unwrap_or_else(|| DEFAULT_HOST.to_string()),
        port.and_then(|s| s.parse().ok()).unwrap_or(DEFAULT_PORT),
    )
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let (host, port) = parse_listen_args(std::env::args());

    let hostname = hostname::get()
        .map(|h| h.to_string_lossy().into_owned())
        .unwrap_or_else(|_| "unknown".into());

    let state = AppState {
        sources: Arc::new(MetricSources::default()),
        hostname: hostname.into(),
    };

    let app = Router::new()
        .route("/", get(routes::index))
        .route("/api/status", get(routes::api_status))
        .with_state(state);

    let listener = tokio::net::TcpListener::bind((host.as_str(), port))
        .await
        .with_context(|| format!("failed to bind {host}:{port}"))?;
    info!("hoststat serving at http://{}", listener.local_addr()?);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    Ok(())
}

async fn shutdown_signal() {
    let _ = tokio::signal::ctrl_c().await;
}
