//! Geolocation lookup by IP.

use geohash::Coord;

use crate::geo::types::{GeoError, GeoResult, IpLocation, Location};

/// Characters in a published geohash.
pub const GEOHASH_PRECISION: usize = 12;

/// Encode a coordinate as a base-32 geohash of [`GEOHASH_PRECISION`] characters.
pub fn encode_geohash(lat: f64, lon: f64) -> GeoResult<String> {
    geohash::encode(Coord { x: lon, y: lat }, GEOHASH_PRECISION)
        .map_err(|_| GeoError::Coordinates { lat, lon })
}

/// Resolves addresses to a [`Location`] through an ip-api compatible service.
#[derive(Debug, Clone)]
pub struct GeoResolver {
    client: reqwest::Client,
    endpoint: String,
}

impl GeoResolver {
    pub fn new(client: reqwest::Client, endpoint: impl Into<String>) -> Self {
        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    /// URL of the lookup for `address`; an empty address asks about the caller.
    pub fn lookup_url(&self, address: &str) -> String {
        format!("{}{}", self.endpoint, address)
    }

    /// Look up `address`, or the caller's own public IP when it is empty.
    pub async fn resolve(&self, address: &str) -> GeoResult<Location> {
        let url = self.lookup_url(address);
        let result = self.fetch(&url).await;
        if let Err(e) = &result {
            tracing::error!(url = %url, error = %e, "Location lookup failed");
        }
        result
    }

    async fn fetch(&self, url: &str) -> GeoResult<Location> {
        let body = self.client.get(url).send().await?.bytes().await?;
        let location: IpLocation = serde_json::from_slice(&body)?;

        if let Some(status) = location.status.as_deref() {
            if status != "success" {
                return Err(GeoError::Lookup(
                    location.message.unwrap_or_else(|| status.to_string()),
                ));
            }
        }

        let country_code = location
            .country_code
            .ok_or(GeoError::MissingField("countryCode"))?;
        let lat = location.lat.ok_or(GeoError::MissingField("lat"))?;
        let lon = location.lon.ok_or(GeoError::MissingField("lon"))?;

        let geohash = encode_geohash(lat, lon)?;
        Ok(Location::new(country_code, geohash))
    }
}
