//! CLI entry point for the travel-api HTTP server.

use std::sync::Arc;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use travel_api::config::AppConfig;
use travel_api::NetworkService;
use travel_graph::GraphClient;

#[derive(Parser)]
#[command(name = "travel-api")]
#[command(about = "HTTP service for the travel network graph")]
struct Cli {
    /// Config file prefix (default: travel).
    #[arg(short, long, default_value = "travel")]
    config: String,

    /// Override the listen address from config.
    #[arg(short, long)]
    bind: Option<String>,

    /// Skip creating the Neo4j constraints at startup.
    #[arg(long)]
    skip_schema: bool,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt().with_env_filter(filter).json().init();

    let cli = Cli::parse();
    let app_config = AppConfig::load(&cli.config)?;

    let graph = GraphClient::connect(&app_config.neo4j).await?;
    if cli.skip_schema {
        tracing::warn!("Skipping schema initialization; city names are not guaranteed unique");
    } else {
        graph.ensure_schema().await?;
    }

    let service = NetworkService::new(Arc::new(graph));
    let bind = cli.bind.unwrap_or(app_config.server.bind);
    travel_api::run_server(service, &bind).await
}
