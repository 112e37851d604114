// crates/yatra-core/src/lib.rs
//! # yatra-core
//!
//! Data core for an Indian cultural-tourism guide: a cascading
//! zone → state → city → place filter over a place catalog, fuzzy
//! question answering, visitor statistics, cultural hotspots, festival
//! stories, a sustainability quiz and a nearby-hotel lookup.
//!
//! ```rust,no_run
//! use yatra_core::{Dataset, FilterSelection, Level};
//!
//! let db = Dataset::load()?;
//! let sel = db.places.cascade(FilterSelection::default());
//! if let Ok(place) = db.places.resolve(&sel) {
//!     println!("{:?}: {:?}", place.name(), place.significance);
//! }
//! let states = db.places.candidates_at_level(Level::State, &sel)?;
//! println!("{} states in {:?}", states.len(), sel.zone);
//! # Ok::<(), yatra_core::TourError>(())
//! ```
#![cfg_attr(docsrs, feature(doc_cfg))]

pub mod error;
pub mod filter;
pub mod fuzzy;
pub mod loader;
pub mod model;
pub mod nearby;
pub mod sustainability;
pub mod text;
pub mod traits;
pub mod visitors;
// Raw table rows, shared by the converters
#[doc(hidden)]
pub mod raw;

// Re-exports
pub use crate::error::{Result, TourError};
pub use crate::filter::{FilterSelection, Level};
pub use crate::fuzzy::{Answer, MatchOutcome, QaResolver};
pub use crate::loader::{Dataset, DatasetStats, DirSource, MemorySource, Row, TableSource};
pub use crate::model::{Hotspot, HotspotTable, PlaceCatalog, PlaceRecord, QaPair, QaTable, Story, StoryBook};
pub use crate::nearby::{filter_hotels, Hotel, NearbyLookup, NearbyQuery};
#[cfg(feature = "fetch")]
pub use crate::nearby::GeoapifyClient;
pub use crate::sustainability::{Badge, TravelPlan};
pub use crate::traits::NameMatch;
pub use crate::visitors::{VisitorKind, VisitorStat, VisitorTable};
