// crates/yatra-core/src/model/hotspot.rs
use crate::error::{Result, TourError};
use crate::text::fold_key;
use crate::traits::NameMatch;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// A cultural hotspot. Only hotspots with both coordinates can be mapped.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Hotspot {
    pub name: String,
    pub hotspot_type: Option<String>,
    pub state: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

impl Hotspot {
    /// `(lat, lon)` when both are present.
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }

    pub fn is_mappable(&self) -> bool {
        self.coordinates().is_some()
    }
}

impl NameMatch for Hotspot {
    #[inline]
    fn name_str(&self) -> &str {
        &self.name
    }
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct HotspotTable {
    pub hotspots: Vec<Hotspot>,
}

impl HotspotTable {
    pub fn new(hotspots: Vec<Hotspot>) -> Self {
        Self { hotspots }
    }

    pub fn len(&self) -> usize {
        self.hotspots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hotspots.is_empty()
    }

    /// Hotspots with both coordinates, in table order.
    pub fn mappable(&self) -> impl Iterator<Item = &Hotspot> {
        self.hotspots.iter().filter(|h| h.is_mappable())
    }

    /// Distinct names of mappable hotspots, in first-occurrence order.
    pub fn names(&self) -> Vec<&str> {
        let mut seen = HashSet::new();
        self.mappable()
            .map(|h| h.name.as_str())
            .filter(|n| seen.insert(*n))
            .collect()
    }

    /// First mappable hotspot with exactly this name.
    pub fn find(&self, name: &str) -> Result<&Hotspot> {
        self.mappable()
            .find(|h| h.name == name)
            .ok_or_else(|| TourError::NotFound(format!("hotspot {name:?}")))
    }

    /// Mappable hotspots whose name loosely contains `substr`
    /// (case- and accent-insensitive).
    pub fn search(&self, substr: &str) -> Vec<&Hotspot> {
        if fold_key(substr).trim().is_empty() {
            return self.mappable().collect();
        }
        self.mappable().filter(|h| h.name_contains(substr)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(name: &str, coords: Option<(f64, f64)>) -> Hotspot {
        Hotspot {
            name: name.to_string(),
            hotspot_type: Some("Temple".into()),
            state: None,
            latitude: coords.map(|c| c.0),
            longitude: coords.map(|c| c.1),
        }
    }

    fn table() -> HotspotTable {
        HotspotTable::new(vec![
            spot("Konark Sun Temple", Some((19.88, 86.09))),
            spot("Hampi", None),
            spot("Khajuraho", Some((24.85, 79.93))),
            spot("Konark Sun Temple", Some((19.9, 86.1))),
        ])
    }

    #[test]
    fn names_skip_unmappable_and_duplicates() {
        assert_eq!(table().names(), vec!["Konark Sun Temple", "Khajuraho"]);
    }

    #[test]
    fn find_returns_first_mappable() {
        let t = table();
        assert_eq!(t.find("Konark Sun Temple").unwrap().latitude, Some(19.88));
        assert!(matches!(t.find("Hampi"), Err(TourError::NotFound(_))));
    }

    #[test]
    fn search_is_folded() {
        let t = table();
        let hits = t.search("KONÁRK");
        assert_eq!(hits.len(), 2);
        assert_eq!(t.search("  ").len(), 3);
    }
}
