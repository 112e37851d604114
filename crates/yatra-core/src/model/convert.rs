// crates/yatra-core/src/model/convert.rs
//! **Row Converter:** loosely typed table rows -> fixed typed records.
//!
//! Missing-value handling is decided here, once, at load time.

use super::{Hotspot, HotspotTable, PlaceCatalog, PlaceRecord, QaPair, QaTable, Story, StoryBook};
use crate::error::Result;
use crate::loader::Row;
use crate::raw::{key_text, opt_f64, opt_flag, opt_text, opt_u32};
use crate::raw::{HotspotRaw, PlaceRaw, QaRaw, StoryRaw};
use serde::de::DeserializeOwned;
use serde_json::Value;

fn parse_rows<T: DeserializeOwned>(rows: Vec<Row>) -> Result<Vec<T>> {
    rows.into_iter()
        .map(|row| Ok(serde_json::from_value(Value::Object(row))?))
        .collect()
}

pub fn places_from_rows(rows: Vec<Row>) -> Result<PlaceCatalog> {
    let raw: Vec<PlaceRaw> = parse_rows(rows)?;
    let places = raw
        .into_iter()
        .map(|p| PlaceRecord {
            zone: key_text(&p.zone),
            state: key_text(&p.state),
            city: key_text(&p.city),
            name: key_text(&p.name),
            place_type: opt_text(&p.place_type),
            establishment_year: opt_text(&p.establishment_year),
            time_needed_hours: opt_f64(&p.time_needed_hours),
            google_rating: opt_f64(&p.google_rating),
            entrance_fee_inr: opt_u32(&p.entrance_fee_in_inr),
            has_nearby_airport: opt_flag(&p.has_nearby_airport),
            weekly_off: opt_text(&p.weekly_off),
            significance: opt_text(&p.significance),
            dslr_allowed: opt_flag(&p.dslr_allowed),
            review_count_lakhs: opt_f64(&p.review_count_lakhs),
            best_time_to_visit: opt_text(&p.best_time_to_visit),
        })
        .collect();
    Ok(PlaceCatalog::new(places))
}

/// Pairs without a question or without an answer cannot be matched and are skipped.
pub fn qa_from_rows(rows: Vec<Row>) -> Result<QaTable> {
    let raw: Vec<QaRaw> = parse_rows(rows)?;
    let pairs = raw
        .into_iter()
        .filter_map(|r| {
            let question = key_text(&r.question)?;
            let answer = opt_text(&r.answer)?;
            Some(QaPair { question, answer })
        })
        .collect();
    Ok(QaTable::new(pairs))
}

/// Hotspots without a name are skipped.
pub fn hotspots_from_rows(rows: Vec<Row>) -> Result<HotspotTable> {
    let raw: Vec<HotspotRaw> = parse_rows(rows)?;
    let hotspots = raw
        .into_iter()
        .filter_map(|h| {
            Some(Hotspot {
                name: key_text(&h.name)?,
                hotspot_type: opt_text(&h.hotspot_type),
                state: key_text(&h.state),
                latitude: opt_f64(&h.latitude),
                longitude: opt_f64(&h.longitude),
            })
        })
        .collect();
    Ok(HotspotTable::new(hotspots))
}

pub fn stories_from_rows(rows: Vec<Row>) -> Result<StoryBook> {
    let raw: Vec<StoryRaw> = parse_rows(rows)?;
    let stories = raw
        .into_iter()
        .map(|s| Story {
            festival_name: key_text(&s.festival_name),
            description: opt_text(&s.description),
            region: opt_text(&s.region),
            category: opt_text(&s.category),
            subcategory: opt_text(&s.subcategory),
            source: opt_text(&s.source),
        })
        .collect();
    Ok(StoryBook::new(stories))
}
