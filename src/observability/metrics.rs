//! Metrics collection and exposition.
//!
//! # Metrics
//! - `drng_status` (gauge): 1 = node reachable, 0 = unreachable,
//!   labelled `location` (country code) and `geo` (geohash)

use metrics::{describe_gauge, gauge};
use metrics_exporter_prometheus::{BuildError, PrometheusBuilder, PrometheusHandle};

use crate::geo::Location;
use crate::poller::{Reachability, StatusSink};

pub const STATUS_GAUGE: &str = "drng_status";

/// Install the global Prometheus recorder and describe our metrics.
pub fn install_recorder() -> Result<PrometheusHandle, BuildError> {
    let handle = PrometheusBuilder::new().install_recorder()?;
    describe_metrics();
    Ok(handle)
}

pub fn describe_metrics() {
    describe_gauge!(STATUS_GAUGE, "status of the drng instance");
}

/// Record the status of the node at `location`.
pub fn record_status(location: &Location, status: Reachability) {
    gauge!(
        STATUS_GAUGE,
        "location" => location.country_code.clone(),
        "geo" => location.geohash.clone()
    )
    .set(status.gauge_value());
}

/// [`StatusSink`] backed by the global metrics recorder.
#[derive(Debug, Clone, Copy, Default)]
pub struct GaugeSink;

impl StatusSink for GaugeSink {
    fn publish(&self, location: &Location, status: Reachability) {
        record_status(location, status);
    }
}
