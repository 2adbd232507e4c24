//! Configuration validation.
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Pure function: MonitorConfig → Result<(), Vec<ValidationError>>
//! - The poll period is deliberately not validated (see period.rs)

use thiserror::Error;

use crate::config::schema::MonitorConfig;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("target host must not be empty")]
    EmptyHost,

    #[error("drng port '{0}' is not a valid port number")]
    InvalidDrngPort(String),

    #[error("geolocation endpoint must not be empty")]
    EmptyGeoEndpoint,
}

pub fn validate_config(config: &MonitorConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.target.host().trim().is_empty() {
        errors.push(ValidationError::EmptyHost);
    }

    if config.target.drng_port.parse::<u16>().is_err() {
        errors.push(ValidationError::InvalidDrngPort(
            config.target.drng_port.clone(),
        ));
    }

    if config.geo.endpoint.trim().is_empty() {
        errors.push(ValidationError::EmptyGeoEndpoint);
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}
