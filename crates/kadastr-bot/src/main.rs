use clap::Parser;
use kadastr_bot::{ApiClient, BotHandler};
use tokio::io::{self, AsyncBufReadExt, AsyncWriteExt, BufReader};

/// Console front end for the cadastre lookup API.
///
/// Reads one message per line and prints the reply — exactly the
/// strings a chat transport adapter would relay in each direction.
#[derive(Parser)]
#[command(name = "kadastr-bot", version)]
struct Args {
    /// Base URL of the kadastr HTTP API.
    #[arg(long, env = "KADASTR_API_URL", default_value = "http://localhost:8000")]
    api_url: String,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let handler = BotHandler::new(ApiClient::new(&args.api_url)?);
    tracing::info!(api = %args.api_url, "bot started");

    let mut lines = BufReader::new(io::stdin()).lines();
    let mut stdout = io::stdout();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        let reply = handler.handle_message(&line).await;
        stdout.write_all(reply.as_bytes()).await?;
        stdout.write_all(b"\n\n").await?;
        stdout.flush().await?;
    }
    Ok(())
}
