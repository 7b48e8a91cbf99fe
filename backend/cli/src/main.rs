mod scan_cmd;

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Result;
use clap::{Parser, Subcommand};
use harvest_core::DocKind;
use harvest_gateway::{start_server, AppState, GatewayConfig};

#[derive(Parser)]
#[command(name = "harvest")]
#[command(about = "Harvest — photographed recipe and invoice scanner")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the Harvest HTTP gateway
    Serve {
        /// Port to bind the HTTP server to
        #[arg(short, long)]
        port: Option<u16>,
    },
    /// Scan a local image file and print the structured result
    Scan {
        /// Path to the recipe or invoice photo
        image: PathBuf,
        /// Document kind to validate against
        #[arg(long, value_parser = parse_kind, default_value = "recipe")]
        kind: DocKind,
    },
    /// Check a running Harvest instance
    Status,
}

fn parse_kind(value: &str) -> Result<DocKind, String> {
    match value {
        "recipe" => Ok(DocKind::Recipe),
        "invoice" => Ok(DocKind::Invoice),
        other => Err(format!("unknown document kind {other:?} (expected recipe or invoice)")),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // .env is a development convenience; absence is not an error.
    let _ = dotenvy::dotenv();

    let config = GatewayConfig::from_env();
    logging::init_logger(config.log_dir.as_deref().map(std::path::Path::new), &config.log_level);

    let cli = Cli::parse();

    match cli.command {
        Commands::Serve { port } => {
            let config = GatewayConfig {
                port: port.unwrap_or(config.port),
                ..config
            };
            let addr: SocketAddr = format!("{}:{}", config.bind_address, config.port).parse()?;
            let state = Arc::new(AppState::from_config(&config)?);
            start_server(addr, state).await?;
        }
        Commands::Scan { image, kind } => {
            scan_cmd::run(&image, kind, &config).await?;
        }
        Commands::Status => {
            let client = reqwest::Client::new();
            match client
                .get(format!("http://localhost:{}/health", config.port))
                .send()
                .await
            {
                Ok(resp) => {
                    let body: serde_json::Value = resp.json().await?;
                    println!("{}", serde_json::to_string_pretty(&body)?);
                }
                Err(_) => {
                    println!("Harvest is not running on port {}", config.port);
                }
            }
        }
    }

    Ok(())
}
