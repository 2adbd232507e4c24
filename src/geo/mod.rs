//! Geolocation of the monitored node.
//!
//! # Data Flow
//! ```text
//! target address (or "" for the monitor's own IP)
//!     → resolver.rs (GET {endpoint}{address})
//!     → { countryCode, lat, lon }
//!     → geohash encoding
//!     → Location (label pair for the status gauge)
//! ```
//!
//! # Design Decisions
//! - Best effort: one request, no retries, transport default timeout
//! - Failures are returned, never cached; the caller keeps its last Location

pub mod resolver;
pub mod types;

pub use resolver::{encode_geohash, GeoResolver, GEOHASH_PRECISION};
pub use types::{GeoError, GeoResult, Location};
