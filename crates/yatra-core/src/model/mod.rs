// crates/yatra-core/src/model/mod.rs
pub mod convert;
mod hotspot;
mod place;
mod qa;
mod story;

pub use hotspot::{Hotspot, HotspotTable};
pub use place::{PlaceCatalog, PlaceRecord};
pub use qa::{QaPair, QaTable};
pub use story::{Story, StoryBook};

#[cfg(not(feature = "compact"))]
pub const CACHE_SUFFIX: &str = ".bin";
#[cfg(feature = "compact")]
pub const CACHE_SUFFIX: &str = ".comp.bin";
