// crates/yatra-core/src/raw.rs
//! Raw table rows as they come out of a [`crate::loader::TableSource`].
//!
//! NOTE: These types mirror the external tables' column layout. They are
//! converted into the typed model in `model::convert` and are not part of
//! the stable API.

use crate::text::parse_f64;
use serde::de::IgnoredAny;
use serde::Deserialize;

/// One loosely typed table cell.
///
/// Source tables mix JSON numbers, booleans and text for the same column,
/// so every column is read as a `Cell` and narrowed at conversion time.
/// Arrays and objects land in `Other` and read as missing.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Flag(bool),
    Number(f64),
    Text(String),
    Other(IgnoredAny),
}

impl Cell {
    /// Text view of the cell. Numbers render without a trailing `.0` when whole.
    pub fn text(&self) -> Option<String> {
        match self {
            Cell::Text(s) => Some(s.clone()),
            Cell::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => Some(format!("{}", *n as i64)),
            Cell::Number(n) => Some(n.to_string()),
            Cell::Flag(b) => Some(b.to_string()),
            Cell::Other(_) => None,
        }
    }

    pub fn number(&self) -> Option<f64> {
        match self {
            Cell::Number(n) if n.is_finite() => Some(*n),
            Cell::Number(_) => None,
            Cell::Text(s) => parse_f64(s),
            Cell::Flag(_) | Cell::Other(_) => None,
        }
    }

    /// Yes/No style flag. Unrecognised values yield `None`.
    pub fn flag(&self) -> Option<bool> {
        match self {
            Cell::Flag(b) => Some(*b),
            Cell::Number(n) if *n == 1.0 => Some(true),
            Cell::Number(n) if *n == 0.0 => Some(false),
            Cell::Number(_) => None,
            Cell::Text(s) => match s.trim().to_ascii_lowercase().as_str() {
                "yes" | "y" | "true" | "1" => Some(true),
                "no" | "n" | "false" | "0" => Some(false),
                _ => None,
            },
            Cell::Other(_) => None,
        }
    }
}

/// Identity columns treat blank text as missing.
pub fn key_text(cell: &Option<Cell>) -> Option<String> {
    cell.as_ref()
        .and_then(Cell::text)
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

/// Non-identity text keeps a real empty string; only a null cell is `None`.
pub fn opt_text(cell: &Option<Cell>) -> Option<String> {
    cell.as_ref().and_then(Cell::text)
}

pub fn opt_f64(cell: &Option<Cell>) -> Option<f64> {
    cell.as_ref().and_then(Cell::number)
}

pub fn opt_u32(cell: &Option<Cell>) -> Option<u32> {
    opt_f64(cell)
        .filter(|v| *v >= 0.0 && *v <= u32::MAX as f64)
        .map(|v| v.round() as u32)
}

pub fn opt_flag(cell: &Option<Cell>) -> Option<bool> {
    cell.as_ref().and_then(Cell::flag)
}

/// Raw place row (`top_places_to_visit`).
///
/// Accepts both snake_case column names and the headers of the source
/// dataset. Unknown columns, such as a leading index column, are ignored.
#[derive(Debug, Default, Deserialize)]
pub struct PlaceRaw {
    #[serde(default, alias = "Zone")]
    pub zone: Option<Cell>,
    #[serde(default, alias = "State")]
    pub state: Option<Cell>,
    #[serde(default, alias = "City")]
    pub city: Option<Cell>,
    #[serde(default, alias = "Name")]
    pub name: Option<Cell>,
    #[serde(default, rename = "type", alias = "Type", alias = "place_type")]
    pub place_type: Option<Cell>,
    #[serde(default, alias = "Establishment Year")]
    pub establishment_year: Option<Cell>,
    #[serde(
        default,
        alias = "time_needed_in_hrs",
        alias = "time needed to visit in hrs"
    )]
    pub time_needed_hours: Option<Cell>,
    #[serde(
        default,
        alias = "google_review_rating",
        alias = "Google review rating"
    )]
    pub google_rating: Option<Cell>,
    #[serde(default, alias = "entrance_fee_inr", alias = "Entrance Fee in INR")]
    pub entrance_fee_in_inr: Option<Cell>,
    #[serde(
        default,
        alias = "airport_within_50km_radius",
        alias = "Airport with 50km Radius"
    )]
    pub has_nearby_airport: Option<Cell>,
    #[serde(default, alias = "Weekly Off")]
    pub weekly_off: Option<Cell>,
    #[serde(default, alias = "Significance")]
    pub significance: Option<Cell>,
    #[serde(default, alias = "DSLR Allowed")]
    pub dslr_allowed: Option<Cell>,
    #[serde(
        default,
        alias = "number_of_google_reviews_in_lakhs",
        alias = "Number of google review in lakhs"
    )]
    pub review_count_lakhs: Option<Cell>,
    #[serde(default, alias = "Best Time to visit")]
    pub best_time_to_visit: Option<Cell>,
}

/// Raw question/answer row (`cleaned_train`, columns `c1`/`c2`).
#[derive(Debug, Default, Deserialize)]
pub struct QaRaw {
    #[serde(default, alias = "c1", alias = "C1")]
    pub question: Option<Cell>,
    #[serde(default, alias = "c2", alias = "C2")]
    pub answer: Option<Cell>,
}

/// Raw cultural hotspot row (`cleaned_cultural_hotspots`).
#[derive(Debug, Default, Deserialize)]
pub struct HotspotRaw {
    #[serde(default, alias = "NAME")]
    pub name: Option<Cell>,
    #[serde(default, rename = "type", alias = "TYPE", alias = "hotspot_type")]
    pub hotspot_type: Option<Cell>,
    #[serde(default, alias = "STATE")]
    pub state: Option<Cell>,
    #[serde(default, alias = "LATITUDE")]
    pub latitude: Option<Cell>,
    #[serde(default, alias = "LONGITUDE")]
    pub longitude: Option<Cell>,
}

/// Raw festival story row (`cleaned_train_storyguide`).
#[derive(Debug, Default, Deserialize)]
pub struct StoryRaw {
    #[serde(default, alias = "FESTIVAL_NAME", alias = "Festival Name")]
    pub festival_name: Option<Cell>,
    #[serde(default, alias = "DESCRIPTION", alias = "Description")]
    pub description: Option<Cell>,
    #[serde(default, alias = "REGION", alias = "Region")]
    pub region: Option<Cell>,
    #[serde(default, alias = "CATEGORY", alias = "Category")]
    pub category: Option<Cell>,
    #[serde(default, alias = "SUBCATEGORY", alias = "Subcategory")]
    pub subcategory: Option<Cell>,
    #[serde(default, alias = "SOURCE", alias = "Source")]
    pub source: Option<Cell>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn cells_deserialize_from_mixed_json() {
        let raw: PlaceRaw = serde_json::from_value(json!({
            "Unnamed: 0": 3,
            "Zone": "Northern",
            "State": "  ",
            "Google review rating": "4.6",
            "Entrance Fee in INR": 50,
            "DSLR Allowed": "Yes",
            "Weekly Off": "",
            "significance": null
        }))
        .unwrap();

        assert_eq!(key_text(&raw.zone).as_deref(), Some("Northern"));
        assert_eq!(key_text(&raw.state), None);
        assert_eq!(opt_f64(&raw.google_rating), Some(4.6));
        assert_eq!(opt_u32(&raw.entrance_fee_in_inr), Some(50));
        assert_eq!(opt_flag(&raw.dslr_allowed), Some(true));
        assert_eq!(opt_text(&raw.weekly_off).as_deref(), Some(""));
        assert_eq!(opt_text(&raw.significance), None);
    }

    #[test]
    fn whole_numbers_render_without_fraction() {
        assert_eq!(Cell::Number(1653.0).text().as_deref(), Some("1653"));
        assert_eq!(Cell::Number(1.5).text().as_deref(), Some("1.5"));
    }

    #[test]
    fn nested_values_read_as_missing() {
        let raw: PlaceRaw = serde_json::from_value(json!({
            "Name": ["Red Fort"],
            "Google review rating": [4.5],
            "DSLR Allowed": {"value": "Yes"},
            "Significance": {"text": "Historical"}
        }))
        .unwrap();

        assert_eq!(key_text(&raw.name), None);
        assert_eq!(opt_f64(&raw.google_rating), None);
        assert_eq!(opt_flag(&raw.dslr_allowed), None);
        assert_eq!(opt_text(&raw.significance), None);
    }

    #[test]
    fn unknown_flags_are_missing() {
        assert_eq!(Cell::Text("Maybe".into()).flag(), None);
        assert_eq!(Cell::Text("no".into()).flag(), Some(false));
        assert_eq!(Cell::Number(2.0).flag(), None);
    }
}
