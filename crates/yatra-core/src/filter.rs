// crates/yatra-core/src/filter.rs
//! # Hierarchical Filter
//!
//! Cascading zone → state → city → place narrowing over a [`PlaceCatalog`].
//!
//! Every call recomputes its candidate set from the catalog by a linear
//! scan. Selections are plain values: the caller keeps a [`FilterSelection`],
//! changes one level with [`FilterSelection::with`] (which clears the finer
//! levels) and asks the catalog again.
//!
//! ```rust
//! use yatra_core::filter::{FilterSelection, Level};
//! use yatra_core::model::{PlaceCatalog, PlaceRecord};
//!
//! let place = |zone: &str, state: &str| PlaceRecord {
//!     zone: Some(zone.into()),
//!     state: Some(state.into()),
//!     city: Some("X".into()),
//!     name: Some("Y".into()),
//!     ..Default::default()
//! };
//! let catalog = PlaceCatalog::new(vec![place("North", "B"), place("North", "A"), place("South", "C")]);
//!
//! let sel = FilterSelection::default().with(Level::Zone, "North");
//! assert_eq!(catalog.candidates_at_level(Level::State, &sel).unwrap(), vec!["A", "B"]);
//! ```

use crate::error::{Result, TourError};
use crate::model::{PlaceCatalog, PlaceRecord};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::fmt;

/// One level of the place hierarchy, coarsest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Level {
    Zone,
    State,
    City,
    Name,
}

static ORDER: [Level; 4] = Level::ALL;

impl Level {
    pub const ALL: [Level; 4] = [Level::Zone, Level::State, Level::City, Level::Name];

    /// Levels strictly coarser than `self`, coarsest first.
    pub fn coarser(self) -> &'static [Level] {
        &ORDER[..self as usize]
    }

    /// Levels strictly finer than `self`.
    pub fn finer(self) -> &'static [Level] {
        &ORDER[self as usize + 1..]
    }

    pub fn label(self) -> &'static str {
        match self {
            Level::Zone => "zone",
            Level::State => "state",
            Level::City => "city",
            Level::Name => "place",
        }
    }

    /// The record's value at this level, `None` when missing.
    #[inline]
    pub fn value_of(self, record: &PlaceRecord) -> Option<&str> {
        match self {
            Level::Zone => record.zone(),
            Level::State => record.state(),
            Level::City => record.city(),
            Level::Name => record.name(),
        }
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// The user's current choice at each level. Unset levels are `None`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterSelection {
    pub zone: Option<String>,
    pub state: Option<String>,
    pub city: Option<String>,
    pub name: Option<String>,
}

impl FilterSelection {
    /// A selection with all four levels set.
    pub fn full(
        zone: impl Into<String>,
        state: impl Into<String>,
        city: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            zone: Some(zone.into()),
            state: Some(state.into()),
            city: Some(city.into()),
            name: Some(name.into()),
        }
    }

    pub fn get(&self, level: Level) -> Option<&str> {
        self.slot(level).as_deref()
    }

    /// Sets `level` and clears every finer level.
    #[must_use]
    pub fn with(mut self, level: Level, value: impl Into<String>) -> Self {
        *self.slot_mut(level) = Some(value.into());
        for finer in level.finer() {
            *self.slot_mut(*finer) = None;
        }
        self
    }

    /// Clears `level` and every finer level.
    #[must_use]
    pub fn clear_from(mut self, level: Level) -> Self {
        *self.slot_mut(level) = None;
        for finer in level.finer() {
            *self.slot_mut(*finer) = None;
        }
        self
    }

    pub fn is_complete(&self) -> bool {
        Level::ALL.iter().all(|l| self.get(*l).is_some())
    }

    fn slot(&self, level: Level) -> &Option<String> {
        match level {
            Level::Zone => &self.zone,
            Level::State => &self.state,
            Level::City => &self.city,
            Level::Name => &self.name,
        }
    }

    fn slot_mut(&mut self, level: Level) -> &mut Option<String> {
        match level {
            Level::Zone => &mut self.zone,
            Level::State => &mut self.state,
            Level::City => &mut self.city,
            Level::Name => &mut self.name,
        }
    }

    /// Values for every level in `levels`, or `InvalidArgument` naming the
    /// first one that is unset.
    fn require<'s>(&'s self, levels: &[Level], wanted: &str) -> Result<Vec<(Level, &'s str)>> {
        levels
            .iter()
            .map(|l| {
                self.get(*l).map(|v| (*l, v)).ok_or_else(|| {
                    TourError::InvalidArgument(format!("{wanted} requires a {l} selection"))
                })
            })
            .collect()
    }
}

/// True if the record carries exactly the given value at every level.
/// A missing field never matches.
#[inline]
fn matches_all(record: &PlaceRecord, fixed: &[(Level, &str)]) -> bool {
    fixed
        .iter()
        .all(|(level, value)| level.value_of(record) == Some(*value))
}

impl PlaceCatalog {
    /// Distinct values at `level` among the records matching every coarser
    /// selection, sorted lexicographically (case-sensitive byte order).
    ///
    /// Every level coarser than `level` must be set in `selection`, otherwise
    /// `InvalidArgument` is returned. Finer levels in `selection` are ignored.
    /// No matching record is not an error: the result is simply empty.
    pub fn candidates_at_level(&self, level: Level, selection: &FilterSelection) -> Result<Vec<&str>> {
        let fixed = selection.require(level.coarser(), &format!("{level} candidates"))?;

        let values: BTreeSet<&str> = self
            .places
            .iter()
            .filter(|p| matches_all(p, &fixed))
            .filter_map(|p| level.value_of(p))
            .collect();

        Ok(values.into_iter().collect())
    }

    /// The record identified by a complete selection.
    ///
    /// Duplicated identity tuples are tolerated: the first record in table
    /// order wins.
    pub fn resolve(&self, selection: &FilterSelection) -> Result<&PlaceRecord> {
        let fixed = selection.require(&Level::ALL, "resolving a place")?;

        self.places
            .iter()
            .find(|p| matches_all(p, &fixed))
            .ok_or_else(|| {
                TourError::NotFound(format!(
                    "no place {:?} in {:?}, {:?}, {:?}",
                    fixed[3].1, fixed[2].1, fixed[1].1, fixed[0].1
                ))
            })
    }

    /// Re-derives a selection top-down the way the place browser does.
    ///
    /// A value that is still a candidate under its (already settled) coarser
    /// levels is kept; otherwise the level defaults to its first candidate.
    /// When a level has no candidates it and all finer levels end up unset.
    pub fn cascade(&self, selection: FilterSelection) -> FilterSelection {
        let mut settled = FilterSelection::default();

        for level in Level::ALL {
            // Coarser levels of `settled` are all set here, so this cannot fail.
            let candidates = match self.candidates_at_level(level, &settled) {
                Ok(c) => c,
                Err(_) => break,
            };
            let keep = selection
                .get(level)
                .filter(|v| candidates.contains(v))
                .or_else(|| candidates.first().copied());
            match keep {
                Some(v) => settled = settled.with(level, v),
                None => break,
            }
        }

        settled
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn place(zone: &str, state: &str, city: &str, name: &str) -> PlaceRecord {
        let opt = |s: &str| (!s.is_empty()).then(|| s.to_string());
        PlaceRecord {
            zone: opt(zone),
            state: opt(state),
            city: opt(city),
            name: opt(name),
            ..Default::default()
        }
    }

    fn catalog() -> PlaceCatalog {
        PlaceCatalog::new(vec![
            place("North", "B", "b1", "Fort"),
            place("North", "A", "a1", "Temple"),
            place("North", "A", "a2", "Lake"),
            place("South", "C", "c1", "Beach"),
            place("South", "", "x", "Hidden"),
        ])
    }

    #[test]
    fn levels_know_their_neighbours() {
        assert!(Level::Zone.coarser().is_empty());
        assert_eq!(Level::City.coarser(), &[Level::Zone, Level::State]);
        assert_eq!(Level::State.finer(), &[Level::City, Level::Name]);
        assert!(Level::Name.finer().is_empty());
    }

    #[test]
    fn with_clears_finer_levels() {
        let sel = FilterSelection::full("North", "A", "a1", "Temple").with(Level::State, "B");
        assert_eq!(sel.zone.as_deref(), Some("North"));
        assert_eq!(sel.state.as_deref(), Some("B"));
        assert_eq!(sel.city, None);
        assert_eq!(sel.name, None);
    }

    #[test]
    fn zone_candidates_need_no_selection() {
        let c = catalog();
        let zones = c.candidates_at_level(Level::Zone, &FilterSelection::default()).unwrap();
        assert_eq!(zones, vec!["North", "South"]);
    }

    #[test]
    fn missing_coarser_level_is_invalid() {
        let c = catalog();
        let sel = FilterSelection::default().with(Level::Zone, "North");
        let err = c.candidates_at_level(Level::City, &sel).unwrap_err();
        assert!(matches!(err, TourError::InvalidArgument(_)));
    }

    #[test]
    fn missing_values_are_never_candidates() {
        let c = catalog();
        let sel = FilterSelection::default().with(Level::Zone, "South");
        assert_eq!(c.candidates_at_level(Level::State, &sel).unwrap(), vec!["C"]);
    }

    #[test]
    fn unknown_coarser_value_gives_empty_candidates() {
        let c = catalog();
        let sel = FilterSelection::default().with(Level::Zone, "West");
        assert!(c.candidates_at_level(Level::State, &sel).unwrap().is_empty());
    }

    #[test]
    fn resolve_requires_all_levels() {
        let c = catalog();
        let sel = FilterSelection::default()
            .with(Level::Zone, "North")
            .with(Level::State, "A");
        assert!(matches!(c.resolve(&sel), Err(TourError::InvalidArgument(_))));
    }

    #[test]
    fn resolve_takes_first_duplicate() {
        let mut first = place("North", "A", "a1", "Temple");
        first.significance = Some("first".into());
        let mut second = first.clone();
        second.significance = Some("second".into());
        let c = PlaceCatalog::new(vec![first, second]);

        let got = c.resolve(&FilterSelection::full("North", "A", "a1", "Temple")).unwrap();
        assert_eq!(got.significance.as_deref(), Some("first"));
    }

    #[test]
    fn cascade_defaults_to_first_candidates() {
        let c = catalog();
        let sel = c.cascade(FilterSelection::default());
        assert_eq!(sel, FilterSelection::full("North", "A", "a1", "Temple"));
    }

    #[test]
    fn cascade_replaces_stale_finer_choices() {
        let c = catalog();
        // "a2" is not a city of state B: it falls back to B's first city.
        let stale = FilterSelection {
            zone: Some("North".into()),
            state: Some("B".into()),
            city: Some("a2".into()),
            name: Some("Lake".into()),
        };
        assert_eq!(c.cascade(stale), FilterSelection::full("North", "B", "b1", "Fort"));
    }

    #[test]
    fn cascade_stops_on_empty_catalog() {
        let c = PlaceCatalog::default();
        assert_eq!(c.cascade(FilterSelection::full("a", "b", "c", "d")), FilterSelection::default());
    }
}
