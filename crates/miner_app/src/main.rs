mod command;
mod config;
mod logging;
mod render;
mod session;

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::Parser;
use miner_engine::ReqwestApiClient;
use miner_logging::miner_info;

use config::{AppConfig, DEFAULT_CONFIG_FILENAME};
use logging::LogDestination;
use session::Session;

#[derive(Parser, Debug)]
#[command(author, version, about = "Search videos and analyze their comments", long_about = None)]
struct Args {
    /// Preferences file (RON)
    #[arg(short, long, default_value = DEFAULT_CONFIG_FILENAME)]
    config: PathBuf,

    /// API base URL, overriding the preferences file
    #[arg(long)]
    base_url: Option<String>,

    /// Host name used to pick the backend when no base URL is configured
    #[arg(long, default_value = "localhost")]
    host: String,

    /// Initial query string, e.g. "?q=cats&view=list"
    #[arg(short, long, default_value = "")]
    location: String,

    /// Where log output goes
    #[arg(long, value_enum, default_value = "file")]
    log: LogDestination,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logging::initialize(args.log);

    let config = AppConfig::load(&args.config);
    let settings = config.client_settings(args.base_url.as_deref(), &args.host);
    miner_info!("using API at {}", settings.base_url);
    let client = ReqwestApiClient::new(settings).context("building the HTTP client")?;

    Session::new(Arc::new(client), config, args.config, &args.location)
        .run()
        .await
}
