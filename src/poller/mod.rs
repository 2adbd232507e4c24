//! Status polling and publishing.
//!
//! # Data Flow
//! ```text
//! every period (status.rs):
//!     geo::GeoResolver::resolve
//!         ok  → overwrite cached Location
//!         err → keep cached Location
//!     → probe.rs: GET http://{host}:{drng_port}/public/latest
//!         transport error / non-2xx → Unreachable
//!         2xx + {randomness}        → Reachable
//!         2xx + anything else       → fatal (or Unreachable, per policy)
//!     → StatusSink::publish(Location, Reachability)   (one sample per tick)
//!     → sleep(period)
//! ```
//!
//! # Design Decisions
//! - One task, strictly sequential calls; a slow lookup delays the probe
//! - No retries, no backoff, no cancellation
//! - The cached Location is owned by the poller and only leaves it through publish

pub mod probe;
pub mod status;
pub mod types;

pub use probe::probe;
pub use status::StatusPoller;
pub use types::{PollError, PollResult, Randomness, Reachability, StatusSink};
