//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the monitor.
#[derive(Debug, Clone, Deserialize, Serialize, Default, PartialEq)]
#[serde(default)]
pub struct MonitorConfig {
    /// The monitored drand node.
    pub target: TargetConfig,

    /// Polling loop settings.
    pub poll: PollConfig,

    /// Geolocation lookup settings.
    pub geo: GeoConfig,

    /// Status probe settings.
    pub probe: ProbeConfig,

    /// Logging and metrics exposition.
    pub observability: ObservabilityConfig,
}

/// The monitored node.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct TargetConfig {
    /// Host name or IP of the node. Unset means the local node.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub host: Option<String>,

    /// Public-listen port of the node's HTTP API.
    pub drng_port: String,

    /// Geolocate the monitor's own public IP instead of the host.
    /// Unset means "only when no host is configured".
    #[serde(skip_serializing_if = "Option::is_none")]
    pub locate_self: Option<bool>,
}

/// Host probed when none is configured.
pub const LOCAL_HOST: &str = "localhost";

impl Default for TargetConfig {
    fn default() -> Self {
        Self {
            host: None,
            drng_port: "8081".to_string(),
            locate_self: None,
        }
    }
}

impl TargetConfig {
    /// Host of the node, [`LOCAL_HOST`] when none is configured.
    pub fn host(&self) -> &str {
        self.host.as_deref().unwrap_or(LOCAL_HOST)
    }

    /// Whether the lookup targets the monitor's own public IP.
    pub fn locates_self(&self) -> bool {
        self.locate_self.unwrap_or(self.host.is_none())
    }

    /// URL of the node's latest-randomness endpoint.
    pub fn status_url(&self) -> String {
        format!("http://{}:{}/public/latest", self.host(), self.drng_port)
    }

    /// Address handed to the geolocation service; empty means "caller's own IP".
    pub fn lookup_address(&self) -> &str {
        if self.locates_self() {
            ""
        } else {
            self.host()
        }
    }
}

/// Polling loop configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct PollConfig {
    /// Delay between ticks as a duration string (e.g. "3s", "500ms").
    pub period: String,
}

impl Default for PollConfig {
    fn default() -> Self {
        Self {
            period: "3s".to_string(),
        }
    }
}

/// Geolocation service configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct GeoConfig {
    /// Lookup endpoint; the address is appended verbatim.
    pub endpoint: String,
}

impl Default for GeoConfig {
    fn default() -> Self {
        Self {
            endpoint: "http://ip-api.com/json/".to_string(),
        }
    }
}

/// What to do when a node answers 2xx with a body we cannot decode.
#[derive(Debug, Clone, Copy, Deserialize, Serialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum MalformedBodyPolicy {
    /// Stop the monitor.
    #[default]
    Fatal,
    /// Publish the node as down and keep polling.
    Unreachable,
}

/// Status probe configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Default)]
#[serde(default)]
pub struct ProbeConfig {
    pub malformed_body: MalformedBodyPolicy,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Port of the Prometheus scrape endpoint.
    pub metrics_port: u16,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_port: 2112,
        }
    }
}
