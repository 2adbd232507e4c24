//! Configuration management subsystem.
//!
//! # Data Flow
//! ```text
//! config file (TOML, optional)
//!     → loader.rs (parse & deserialize)
//!     → CLI flags override individual fields
//!     → validation.rs (semantic checks)
//!     → MonitorConfig (validated, immutable)
//!     → handed to the poller and the metrics server
//! ```
//!
//! # Design Decisions
//! - Config is immutable once loaded
//! - All fields have defaults so the monitor runs with no file at all
//! - A bad poll period never fails startup; period.rs falls back to 3s

pub mod loader;
pub mod period;
pub mod schema;
pub mod validation;

pub use loader::{load_config, ConfigError};
pub use period::{resolve_period, DEFAULT_PERIOD};
pub use schema::{
    GeoConfig, MalformedBodyPolicy, MonitorConfig, ObservabilityConfig, PollConfig, ProbeConfig,
    TargetConfig, LOCAL_HOST,
};
pub use validation::{validate_config, ValidationError};
