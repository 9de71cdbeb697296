//! Binary entry point: load config, wire the agents, serve the form.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use flowcode::config::Config;
use flowcode::coordinator::Coordinator;
use flowcode::web::{self, AppState};

#[derive(Debug, Parser)]
#[command(name = "flowcode", about = "Flowchart-to-code assistant web form")]
struct Args {
    /// Path to the YAML config file (defaults apply if absent).
    #[arg(long, default_value = "flowcode.yaml")]
    config: PathBuf,

    /// Override the listen address from the config.
    #[arg(long)]
    listen: Option<String>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .init();

    let args = Args::parse();
    let mut config = Config::load_or_default(&args.config)
        .with_context(|| format!("loading config from {}", args.config.display()))?;
    if let Some(listen) = args.listen {
        config.listen_addr = listen;
    }

    let coordinator = Coordinator::from_config(&config).context("initializing agents")?;
    let app = web::router(AppState::new(coordinator));

    let listener = tokio::net::TcpListener::bind(&config.listen_addr)
        .await
        .with_context(|| format!("binding {}", config.listen_addr))?;
    info!(addr = %config.listen_addr, "flowcode listening");

    axum::serve(listener, app).await.context("server run")?;
    Ok(())
}
