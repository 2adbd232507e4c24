//! drand node liveness monitor.
//!
//! Polls a drand node's `/public/latest` endpoint and a geolocation service,
//! and republishes the result as the `drng_status{location, geo}` gauge.

pub mod cli;
pub mod config;
pub mod geo;
pub mod observability;
pub mod poller;

pub use config::MonitorConfig;
pub use geo::{GeoResolver, Location};
pub use poller::{Reachability, StatusPoller, StatusSink};
