//! drng-monitor
//!
//! ```text
//!   ┌──────────────── background task ────────────────┐
//!   │ every period:                                    │
//!   │   ip-api.com ──▶ Location (country, geohash)     │
//!   │   node /public/latest ──▶ Reachable/Unreachable │
//!   │   ──▶ drng_status{location, geo} = 1 | 0         │
//!   └──────────────────────────────────────────────────┘
//!   main context: GET /metrics (Prometheus scrape)
//! ```

use drng_monitor::cli::{Cli, VERSION};
use drng_monitor::observability::{logging, metrics, server};
use drng_monitor::poller::StatusPoller;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse_args();
    if cli.version {
        println!("{}", VERSION);
        return Ok(());
    }
    let config = cli.into_config()?;

    logging::init_logging(&config.observability.log_level);

    tracing::info!("drng-monitor v{} starting", VERSION);

    tracing::info!(
        host = %config.target.host(),
        drng_port = %config.target.drng_port,
        period = %config.poll.period,
        metrics_port = config.observability.metrics_port,
        "Configuration loaded"
    );

    let handle = metrics::install_recorder()?;

    let poller = StatusPoller::new(&config, reqwest::Client::new(), metrics::GaugeSink);
    tokio::spawn(async move {
        let err = poller.run().await;
        tracing::error!(error = %err, "Fatal error in status poller, exiting");
        std::process::exit(1);
    });

    server::serve_metrics(config.observability.metrics_port, handle).await?;
    Ok(())
}
