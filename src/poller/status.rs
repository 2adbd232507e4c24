//! The polling loop.

use std::time::Duration;

use crate::config::{resolve_period, MalformedBodyPolicy, MonitorConfig, TargetConfig};
use crate::geo::{GeoResolver, Location};
use crate::poller::probe::probe;
use crate::poller::types::{PollError, PollResult, Reachability, StatusSink};

/// Periodically resolves the node's location, probes it and publishes the result.
pub struct StatusPoller<S> {
    target: TargetConfig,
    period: Duration,
    policy: MalformedBodyPolicy,
    client: reqwest::Client,
    resolver: GeoResolver,
    sink: S,
    location: Location,
}

impl<S: StatusSink> StatusPoller<S> {
    pub fn new(config: &MonitorConfig, client: reqwest::Client, sink: S) -> Self {
        let resolver = GeoResolver::new(client.clone(), config.geo.endpoint.clone());
        Self {
            target: config.target.clone(),
            period: resolve_period(&config.poll.period),
            policy: config.probe.malformed_body,
            client,
            resolver,
            sink,
            location: Location::default(),
        }
    }

    /// Delay between two ticks.
    pub fn period(&self) -> Duration {
        self.period
    }

    /// Labels the next sample will carry unless a lookup succeeds first.
    pub fn location(&self) -> &Location {
        &self.location
    }

    /// Run one iteration: refresh the location, probe, publish one sample.
    pub async fn tick(&mut self) -> PollResult<Reachability> {
        match self.resolver.resolve(self.target.lookup_address()).await {
            Ok(location) => {
                tracing::info!(
                    country_code = %location.country_code,
                    geohash = %location.geohash,
                    "Fetched location"
                );
                self.location = location;
            }
            Err(_) => {
                tracing::debug!(
                    country_code = %self.location.country_code,
                    geohash = %self.location.geohash,
                    "Keeping previous location"
                );
            }
        }

        let status = probe(&self.client, &self.target.status_url(), self.policy).await?;
        self.sink.publish(&self.location, status);
        Ok(status)
    }

    /// Tick forever. Returns only when a fatal error stops the loop.
    pub async fn run(mut self) -> PollError {
        tracing::info!(
            host = %self.target.host(),
            drng_port = %self.target.drng_port,
            locate_self = self.target.locates_self(),
            period_ms = self.period.as_millis() as u64,
            "Status poller starting"
        );

        loop {
            if let Err(e) = self.tick().await {
                tracing::error!(error = %e, "Status poller stopped");
                return e;
            }
            tokio::time::sleep(self.period).await;
        }
    }
}
