// crates/yatra-core/src/nearby.rs
//! # Nearby Hotels
//!
//! Hotel lookup around a coordinate. The lookup itself sits behind the
//! [`NearbyLookup`] trait; [`GeoapifyClient`] (feature `fetch`) talks to the
//! Geoapify Places API.

use crate::error::{Result, TourError};
use crate::text::fold_key;
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use serde_json::Value;

pub const DEFAULT_RADIUS_M: u32 = 3000;
pub const DEFAULT_LIMIT: u32 = 10;

/// A hotel returned by a nearby lookup.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hotel {
    pub name: Option<String>,
    /// Formatted street address.
    pub address: Option<String>,
    pub website: Option<String>,
}

impl NameMatch for Hotel {
    fn name_str(&self) -> &str {
        self.name.as_deref().unwrap_or_default()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct NearbyQuery {
    pub lat: f64,
    pub lon: f64,
    pub radius_m: u32,
    pub limit: u32,
}

impl NearbyQuery {
    pub fn new(lat: f64, lon: f64) -> Self {
        Self {
            lat,
            lon,
            ..Self::default()
        }
    }

    pub fn with_radius(mut self, radius_m: u32) -> Self {
        self.radius_m = radius_m;
        self
    }

    pub fn with_limit(mut self, limit: u32) -> Self {
        self.limit = limit;
        self
    }

    /// Geoapify circle filter, longitude first.
    pub fn circle_filter(&self) -> String {
        format!("circle:{},{},{}", self.lon, self.lat, self.radius_m)
    }
}

impl Default for NearbyQuery {
    fn default() -> Self {
        Self {
            lat: 0.0,
            lon: 0.0,
            radius_m: DEFAULT_RADIUS_M,
            limit: DEFAULT_LIMIT,
        }
    }
}

/// Anything that can list hotels around a point.
pub trait NearbyLookup {
    fn find_nearby(&self, query: &NearbyQuery) -> Result<Vec<Hotel>>;
}

fn prop_text(props: &Value, key: &str) -> Option<String> {
    props
        .get(key)
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
}

/// Hotels from a GeoJSON feature collection
/// (`features[].properties.{name, formatted, website}`).
///
/// A body without a `features` array is `InvalidData`; an empty array
/// yields no hotels.
pub fn parse_places_response(body: &Value) -> Result<Vec<Hotel>> {
    let features = body
        .get("features")
        .and_then(Value::as_array)
        .ok_or_else(|| TourError::InvalidData("places response has no features array".into()))?;

    Ok(features
        .iter()
        .filter_map(|f| f.get("properties"))
        .map(|p| Hotel {
            name: prop_text(p, "name"),
            address: prop_text(p, "formatted"),
            website: prop_text(p, "website"),
        })
        .collect())
}

/// Hotels whose name or address loosely contains `keyword`.
/// A blank keyword keeps every hotel.
pub fn filter_hotels(hotels: Vec<Hotel>, keyword: &str) -> Vec<Hotel> {
    let key = fold_key(keyword.trim());
    if key.is_empty() {
        return hotels;
    }
    hotels
        .into_iter()
        .filter(|h| {
            h.name_contains(&key)
                || h.address
                    .as_deref()
                    .is_some_and(|a| fold_key(a).contains(&key))
        })
        .collect()
}

// -----------------------------------------------------------------------------
// GEOAPIFY CLIENT
// -----------------------------------------------------------------------------

#[cfg(feature = "fetch")]
pub use client::{GeoapifyClient, DEFAULT_ENDPOINT};

#[cfg(feature = "fetch")]
mod client {
    use super::{parse_places_response, Hotel, NearbyLookup, NearbyQuery};
    use crate::error::{Result, TourError};
    use reqwest::blocking::Client;
    use std::time::Duration;

    pub const DEFAULT_ENDPOINT: &str = "https://api.geoapify.com/v2/places";
    const APP_USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

    /// Blocking Geoapify Places client. One request per lookup, no retries.
    #[derive(Debug, Clone)]
    pub struct GeoapifyClient {
        http: Client,
        endpoint: String,
        api_key: String,
    }

    impl GeoapifyClient {
        pub fn new(api_key: impl Into<String>, timeout: Duration) -> Result<Self> {
            Self::with_endpoint(DEFAULT_ENDPOINT, api_key, timeout)
        }

        pub fn with_endpoint(
            endpoint: impl Into<String>,
            api_key: impl Into<String>,
            timeout: Duration,
        ) -> Result<Self> {
            let http = Client::builder()
                .user_agent(APP_USER_AGENT)
                .timeout(timeout)
                .build()
                .map_err(|e| TourError::LookupFailed(e.to_string()))?;
            Ok(Self {
                http,
                endpoint: endpoint.into(),
                api_key: api_key.into(),
            })
        }
    }

    impl NearbyLookup for GeoapifyClient {
        fn find_nearby(&self, query: &NearbyQuery) -> Result<Vec<Hotel>> {
            tracing::info!(
                lat = query.lat,
                lon = query.lon,
                radius_m = query.radius_m,
                "looking up nearby hotels"
            );

            let limit = query.limit.to_string();
            let filter = query.circle_filter();
            let response = self
                .http
                .get(&self.endpoint)
                .query(&[
                    ("categories", "accommodation.hotel"),
                    ("filter", filter.as_str()),
                    ("limit", limit.as_str()),
                    ("apiKey", self.api_key.as_str()),
                ])
                .send()
                .map_err(|e| TourError::LookupFailed(e.to_string()))?;

            let status = response.status();
            if !status.is_success() {
                tracing::warn!(status = status.as_u16(), "nearby lookup rejected");
                return Err(TourError::LookupStatus(status.as_u16()));
            }

            let text = response
                .text()
                .map_err(|e| TourError::LookupFailed(e.to_string()))?;
            let body: serde_json::Value = serde_json::from_str(&text)?;
            let hotels = parse_places_response(&body)?;
            tracing::debug!(count = hotels.len(), "nearby hotels received");
            Ok(hotels)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn body() -> Value {
        json!({
            "type": "FeatureCollection",
            "features": [
                {"type": "Feature", "properties": {
                    "name": "Hotel Taj View",
                    "formatted": "Taj East Gate Road, Agra",
                    "website": "https://example.org"
                }},
                {"type": "Feature", "properties": {"formatted": "Fatehabad Road, Agra"}},
                {"type": "Feature", "properties": {"name": "Oberoi Amarvilas", "formatted": "Taj East Gate Road, Agra"}}
            ]
        })
    }

    struct Fixed(Vec<Hotel>);

    impl NearbyLookup for Fixed {
        fn find_nearby(&self, _query: &NearbyQuery) -> Result<Vec<Hotel>> {
            Ok(self.0.clone())
        }
    }

    #[test]
    fn query_defaults_and_filter_order() {
        let q = NearbyQuery::new(27.17, 78.04);
        assert_eq!(q.radius_m, 3000);
        assert_eq!(q.limit, 10);
        assert_eq!(q.circle_filter(), "circle:78.04,27.17,3000");
    }

    #[test]
    fn parses_feature_collection() {
        let hotels = parse_places_response(&body()).unwrap();
        assert_eq!(hotels.len(), 3);
        assert_eq!(hotels[0].website.as_deref(), Some("https://example.org"));
        assert_eq!(hotels[1].name, None);
        assert!(parse_places_response(&json!({"features": []})).unwrap().is_empty());
        assert!(matches!(parse_places_response(&json!({})), Err(TourError::InvalidData(_))));
    }

    #[test]
    fn keyword_filter_is_case_insensitive() {
        let lookup = Fixed(parse_places_response(&body()).unwrap());
        let hotels = lookup.find_nearby(&NearbyQuery::new(27.17, 78.04)).unwrap();

        let hits = filter_hotels(hotels.clone(), "OBEROI");
        assert_eq!(hits.len(), 1);
        assert_eq!(filter_hotels(hotels.clone(), "east gate").len(), 2);
        assert_eq!(filter_hotels(hotels.clone(), "fatehabad").len(), 1);
        assert_eq!(filter_hotels(hotels, "  ").len(), 3);
    }
}
