mod actions;
mod cli;
mod config;
mod errors;
mod jdx_client;
mod models;
mod pipeline;
mod report;
mod runner;

use anyhow::Result;
use clap::Parser;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::cli::Cli;
use crate::config::Config;
use crate::jdx_client::JdxClient;

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!(
                "{}={}",
                env!("CARGO_PKG_NAME").replace('-', "_"),
                &config.rust_log
            ))
        }))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Starting JDX end-to-end client v{}", env!("CARGO_PKG_VERSION"));

    let base_url = config.base_url(cli.server.url());
    let client = JdxClient::new(base_url, config.request_timeout)?;
    info!(
        "JDX client initialized (server: {}, url: {})",
        cli.server,
        client.base_url()
    );

    let options = cli.run_options();

    tokio::select! {
        result = runner::run(
            &client,
            &cli.directory_or_file,
            &options,
            cli.loop_forever,
            config.loop_pause,
        ) => result?,
        _ = tokio::signal::ctrl_c() => info!("Interrupted, stopping"),
    }

    Ok(())
}
