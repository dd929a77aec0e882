mod api;
mod cache;
mod config;
mod ddns;
mod error;
mod ip;
mod logging;
mod resolver;

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;
use log::{error, info};

use api::CloudflareClient;
use cache::IpCache;
use ddns::{CloudflareDdns, PassOutcome};
use ip::HttpIpSource;

/// Points Cloudflare A records at this machine's public IPv4 address.
/// Meant to be run periodically by cron or a systemd timer.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Path to the YAML config file
    #[arg(short, long, env = "CFDYNIP_CONFIG", default_value = "config.yaml")]
    config: PathBuf,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = config::load_config(&cli.config)
        .with_context(|| format!("Failed to load config file: {}", cli.config.display()))?;

    logging::init(config.log_level, config.log_file.as_deref())
        .context("Failed to initialize logging")?;

    let timeout = Duration::from_secs(config.request_timeout_secs);
    let ip_source = HttpIpSource::new(config.current_ip_api.clone(), timeout)
        .context("Failed to build IP resolver client")?;
    let client = CloudflareClient::new(timeout).context("Failed to build Cloudflare client")?;

    let ddns = CloudflareDdns::new(
        config.zones,
        Box::new(ip_source),
        Box::new(client),
        IpCache::new(config.last_ip_file),
    );

    let outcome = ddns.run_once().await;
    match &outcome {
        Ok(PassOutcome::Unchanged) | Ok(PassOutcome::Updated) => info!("Done."),
        Ok(other) => info!("Finished with {:?}", other),
        Err(e) => error!("Could not determine the current IP: {}", e),
    }
    log::logger().flush();

    outcome
        .map(|_| ())
        .context("Reconciliation aborted before any zone was processed")
}
