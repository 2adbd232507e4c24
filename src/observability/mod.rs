//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! poller (background task):
//!     → metrics.rs (GaugeSink writes drng_status{location, geo})
//!     → logging.rs (structured log events)
//!
//! main execution context:
//!     → server.rs (GET /metrics renders the Prometheus registry)
//! ```
//!
//! # Design Decisions
//! - The `metrics` facade is the only state shared between tasks; the
//!   Prometheus recorder is safe for concurrent writes and renders
//! - Label combinations are never removed: a node whose location changes
//!   keeps exporting its old series at their last value

pub mod logging;
pub mod metrics;
pub mod server;
