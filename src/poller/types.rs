//! Probe classifications, the publishing seam and poller errors.

use serde::Deserialize;
use thiserror::Error;

use crate::geo::Location;

/// The only two published states of a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reachability {
    Reachable,
    Unreachable,
}

impl Reachability {
    /// Value written to the status gauge.
    pub fn gauge_value(self) -> f64 {
        match self {
            Reachability::Reachable => 1.0,
            Reachability::Unreachable => 0.0,
        }
    }
}

/// Body of `/public/latest`. Other fields of the beacon are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct Randomness {
    pub randomness: String,
}

/// Destination of the per-tick status sample.
pub trait StatusSink: Send + Sync {
    fn publish(&self, location: &Location, status: Reachability);
}

/// Errors that stop the polling loop.
#[derive(Debug, Error)]
pub enum PollError {
    /// The node answered 2xx but the body could not be read.
    #[error("failed to read body from {url}: {source}")]
    BodyRead {
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The node answered 2xx with a body that is not a randomness beacon.
    #[error("malformed body from {url}: {source}")]
    MalformedBody {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type PollResult<T> = Result<T, PollError>;
