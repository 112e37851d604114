//! Property tests for the cascading place filter.

use proptest::prelude::*;
use yatra_core::{FilterSelection, Level, PlaceCatalog, PlaceRecord, TourError};

fn field(choices: &'static [&'static str]) -> impl Strategy<Value = Option<String>> {
    prop::option::weighted(0.85, prop::sample::select(choices).prop_map(str::to_string))
}

fn record() -> impl Strategy<Value = PlaceRecord> {
    (
        field(&["North", "South", "East"]),
        field(&["A", "B", "C"]),
        field(&["x", "y"]),
        field(&["p", "q", "r"]),
    )
        .prop_map(|(zone, state, city, name)| PlaceRecord {
            zone,
            state,
            city,
            name,
            ..Default::default()
        })
}

fn catalog() -> impl Strategy<Value = PlaceCatalog> {
    prop::collection::vec(record(), 0..40).prop_map(PlaceCatalog::new)
}

fn is_sorted_unique(values: &[&str]) -> bool {
    values.windows(2).all(|w| w[0] < w[1])
}

proptest! {
    #[test]
    fn candidates_are_sorted_and_unique(c in catalog()) {
        let zones = c.candidates_at_level(Level::Zone, &FilterSelection::default()).unwrap();
        prop_assert!(is_sorted_unique(&zones));
        for zone in &zones {
            let sel = FilterSelection::default().with(Level::Zone, *zone);
            let states = c.candidates_at_level(Level::State, &sel).unwrap();
            prop_assert!(is_sorted_unique(&states));
        }
    }

    #[test]
    fn cities_come_from_the_exact_zone_state_pair(c in catalog()) {
        let zones = c.candidates_at_level(Level::Zone, &FilterSelection::default()).unwrap();
        for zone in &zones {
            let by_zone = FilterSelection::default().with(Level::Zone, *zone);
            for state in c.candidates_at_level(Level::State, &by_zone).unwrap() {
                let sel = by_zone.clone().with(Level::State, state);
                let cities = c.candidates_at_level(Level::City, &sel).unwrap();

                let mut expected: Vec<&str> = c
                    .places()
                    .iter()
                    .filter(|p| p.zone() == Some(*zone) && p.state() == Some(state))
                    .filter_map(|p| p.city())
                    .collect();
                expected.sort_unstable();
                expected.dedup();
                prop_assert_eq!(cities, expected);
            }
        }
    }

    #[test]
    fn resolve_returns_first_record_with_identity(c in catalog()) {
        for p in c.places() {
            let (Some(z), Some(s), Some(ci), Some(n)) = (p.zone(), p.state(), p.city(), p.name()) else {
                continue;
            };
            let got = c.resolve(&FilterSelection::full(z, s, ci, n)).unwrap();
            let first = c
                .places()
                .iter()
                .find(|q| q.zone() == Some(z) && q.state() == Some(s) && q.city() == Some(ci) && q.name() == Some(n))
                .unwrap();
            prop_assert!(std::ptr::eq(got, first));
        }
    }

    #[test]
    fn cascade_is_stable(c in catalog()) {
        let sel = c.cascade(FilterSelection::default());
        if sel.is_complete() {
            prop_assert!(c.resolve(&sel).is_ok());
        }
        // cascading again changes nothing
        prop_assert_eq!(c.cascade(sel.clone()), sel);
    }
}

#[test]
fn north_south_scenario() {
    let place = |zone: &str, state: &str| PlaceRecord {
        zone: Some(zone.into()),
        state: Some(state.into()),
        city: Some("c".into()),
        name: Some("n".into()),
        ..Default::default()
    };
    let c = PlaceCatalog::new(vec![place("North", "B"), place("South", "C"), place("North", "A")]);

    let south = FilterSelection::default().with(Level::Zone, "South");
    assert_eq!(c.candidates_at_level(Level::State, &south).unwrap(), vec!["C"]);
    let north = FilterSelection::default().with(Level::Zone, "North");
    assert_eq!(c.candidates_at_level(Level::State, &north).unwrap(), vec!["A", "B"]);
}

#[test]
fn unknown_place_is_not_found() {
    let c = PlaceCatalog::new(vec![PlaceRecord {
        zone: Some("North".into()),
        state: Some("A".into()),
        city: Some("x".into()),
        name: Some("p".into()),
        ..Default::default()
    }]);
    let err = c.resolve(&FilterSelection::full("North", "A", "x", "zzz")).unwrap_err();
    assert!(matches!(err, TourError::NotFound(_)));
}
