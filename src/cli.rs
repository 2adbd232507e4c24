//! Command line surface.
//!
//! Flags override values loaded from `--config`, which override defaults.
//! Long flags may also be written with a single dash (`-url host`,
//! `-drngPort=8081`), the form existing deployments use.

use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;

use crate::config::{load_config, validate_config, ConfigError, MalformedBodyPolicy, MonitorConfig};

/// Printed alone by `-v`.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Long flags accepted with a single leading dash.
const LONG_FLAGS: &[&str] = &[
    "url",
    "drngPort",
    "drng-port",
    "period",
    "port",
    "config",
    "locate-self",
    "lenient-body",
    "version",
    "help",
];

#[derive(Debug, Parser)]
#[command(name = "drng-monitor")]
#[command(about = "Publishes the liveness of a drand node as a Prometheus gauge", long_about = None)]
pub struct Cli {
    /// Host of the drand node to monitor. Without it, the monitor watches
    /// localhost and geolocates its own public IP.
    #[arg(long)]
    pub url: Option<String>,

    /// The drand public-listen port.
    #[arg(long = "drngPort", visible_alias = "drng-port")]
    pub drng_port: Option<String>,

    /// The metrics fetching period (e.g. 3s, 500ms, 1m).
    #[arg(long)]
    pub period: Option<String>,

    /// Prometheus metrics port.
    #[arg(long)]
    pub port: Option<u16>,

    /// Optional TOML configuration file.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Geolocate this machine's public IP instead of the monitored host.
    #[arg(long)]
    pub locate_self: bool,

    /// Report a node answering with a malformed body as offline instead of exiting.
    #[arg(long)]
    pub lenient_body: bool,

    /// Print the version and exit.
    #[arg(short = 'v', long = "version")]
    pub version: bool,
}

/// Rewrite single-dash long flags (`-url`, `-period=3s`) to their `--` form.
///
/// The first item is the program name and is left alone, as is everything
/// after a `--` terminator.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut terminated = false;
    args.into_iter()
        .enumerate()
        .map(|(i, arg)| {
            let arg: OsString = arg.into();
            if i == 0 || terminated {
                return arg;
            }
            let rewritten = arg.to_str().and_then(|text| {
                if text == "--" {
                    terminated = true;
                    return None;
                }
                let rest = text.strip_prefix('-').filter(|rest| !rest.starts_with('-'))?;
                let name = rest.split('=').next().unwrap_or(rest);
                LONG_FLAGS
                    .contains(&name)
                    .then(|| OsString::from(format!("-{}", text)))
            });
            rewritten.unwrap_or(arg)
        })
        .collect()
}

impl Cli {
    /// Parse the process arguments, accepting single-dash long flags.
    pub fn parse_args() -> Self {
        Self::parse_from(normalize_args(std::env::args_os()))
    }

    /// Build the effective configuration.
    pub fn into_config(self) -> Result<MonitorConfig, ConfigError> {
        let base = match &self.config {
            Some(path) => load_config(path)?,
            None => MonitorConfig::default(),
        };
        let config = self.apply(base);
        validate_config(&config).map_err(ConfigError::Validation)?;
        Ok(config)
    }

    /// Overlay the flags onto `config`.
    pub fn apply(self, mut config: MonitorConfig) -> MonitorConfig {
        if let Some(url) = self.url {
            config.target.host = Some(url);
        }
        if self.locate_self {
            config.target.locate_self = Some(true);
        }
        if let Some(drng_port) = self.drng_port {
            config.target.drng_port = drng_port;
        }
        if let Some(period) = self.period {
            config.poll.period = period;
        }
        if let Some(port) = self.port {
            config.observability.metrics_port = port;
        }
        if self.lenient_body {
            config.probe.malformed_body = MalformedBodyPolicy::Unreachable;
        }
        config
    }
}
