//! Location labels and geolocation errors.

use serde::Deserialize;
use thiserror::Error;

/// Coarse location of the node, used as the gauge's label pair.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Location {
    pub country_code: String,
    pub geohash: String,
}

impl Location {
    pub fn new(country_code: impl Into<String>, geohash: impl Into<String>) -> Self {
        Self {
            country_code: country_code.into(),
            geohash: geohash.into(),
        }
    }
}

/// Body of a geolocation lookup.
///
/// ip-api omits everything but `status`/`message` when a lookup fails, so
/// every field is optional here and checked by the resolver.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct IpLocation {
    pub status: Option<String>,
    pub message: Option<String>,
    #[serde(rename = "countryCode")]
    pub country_code: Option<String>,
    pub lat: Option<f64>,
    pub lon: Option<f64>,
}

/// Errors that can occur during a geolocation lookup.
#[derive(Debug, Error)]
pub enum GeoError {
    /// The lookup request could not be sent or its body not read.
    #[error("geolocation request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// The body was not the expected JSON.
    #[error("malformed geolocation body: {0}")]
    Body(#[from] serde_json::Error),

    /// The service answered but refused the lookup.
    #[error("geolocation lookup failed: {0}")]
    Lookup(String),

    /// A successful answer without the named field.
    #[error("geolocation body has no '{0}'")]
    MissingField(&'static str),

    /// Latitude/longitude out of range.
    #[error("invalid coordinates lat={lat} lon={lon}")]
    Coordinates { lat: f64, lon: f64 },
}

pub type GeoResult<T> = Result<T, GeoError>;
