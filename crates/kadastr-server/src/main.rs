use std::net::SocketAddr;
use std::sync::Arc;

use clap::Parser;
use kadastr_client::{CadastreService, GeoportalClient};
use kadastr_server::{AppState, app};

/// HTTP API for cadastre record lookups.
#[derive(Parser)]
#[command(name = "kadastr-server", version)]
struct Args {
    /// Address to listen on.
    #[arg(long, env = "KADASTR_BIND", default_value = "127.0.0.1:8000")]
    bind: SocketAddr,

    /// Geoportal base URL.
    #[arg(long, env = "KADASTR_UPSTREAM_URL", default_value = kadastr_client::DEFAULT_BASE_URL)]
    upstream_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let client = GeoportalClient::new(&args.upstream_url)?;
    let state = AppState {
        service: Arc::new(CadastreService::new(client)),
    };

    let listener = tokio::net::TcpListener::bind(args.bind).await?;
    tracing::info!(addr = %args.bind, upstream = %args.upstream_url, "kadastr-server listening");
    axum::serve(listener, app(state)).await?;
    Ok(())
}
