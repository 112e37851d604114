// crates/yatra-core/src/model/place.rs
use serde::{Deserialize, Serialize};

/// One row of the place catalog.
///
/// `zone`, `state`, `city` and `name` form the identity tuple used by the
/// [`crate::filter`] hierarchy. Every field is optional: `None` means the
/// source had no value, which is different from a real empty string.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct PlaceRecord {
    pub zone: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub name: Option<String>,

    pub place_type: Option<String>,
    /// Free text in the source ("1653", "Unknown", "-500").
    pub establishment_year: Option<String>,
    pub time_needed_hours: Option<f64>,
    pub google_rating: Option<f64>,
    pub entrance_fee_inr: Option<u32>,
    pub has_nearby_airport: Option<bool>,
    pub weekly_off: Option<String>,
    pub significance: Option<String>,
    pub dslr_allowed: Option<bool>,
    pub review_count_lakhs: Option<f64>,
    pub best_time_to_visit: Option<String>,
}

impl PlaceRecord {
    pub fn zone(&self) -> Option<&str> {
        self.zone.as_deref()
    }

    pub fn state(&self) -> Option<&str> {
        self.state.as_deref()
    }

    pub fn city(&self) -> Option<&str> {
        self.city.as_deref()
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    /// Number of rating stars: the Google rating rounded to the nearest integer.
    ///
    /// `None` when the rating is missing or negative.
    pub fn rating_stars(&self) -> Option<u8> {
        self.google_rating
            .filter(|r| r.is_finite() && *r >= 0.0)
            .map(|r| r.round().min(u8::MAX as f64) as u8)
    }
}

/// The in-memory place catalog. Table order is preserved.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct PlaceCatalog {
    pub places: Vec<PlaceRecord>,
}

impl PlaceCatalog {
    pub fn new(places: Vec<PlaceRecord>) -> Self {
        Self { places }
    }

    pub fn places(&self) -> &[PlaceRecord] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}
