// crates/yatra-core/src/visitors.rs
//! # Visitor Statistics
//!
//! The official tourism table is wide: one row per state, one column per
//! `(kind, year)` pair such as `Domestic -2019` or `Foreign- 2020`.
//! [`VisitorTable::from_rows`] reshapes it into one [`VisitorStat`] per
//! non-missing cell.

use crate::error::{Result, TourError};
use crate::loader::Row;
use crate::text::{equals_folded, parse_f64};
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};
use std::fmt;

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d{4}").expect("valid year pattern"));

const STATE_COLUMNS: [&str; 3] = ["states/uts_*", "state", "states/uts"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum VisitorKind {
    Domestic,
    Foreign,
}

impl fmt::Display for VisitorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(match self {
            VisitorKind::Domestic => "domestic",
            VisitorKind::Foreign => "foreign",
        })
    }
}

/// One state's visitor count for one kind and year.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitorStat {
    pub state: String,
    pub kind: VisitorKind,
    /// `None` when the source column carried no four-digit year.
    pub year: Option<u16>,
    pub visitors: u64,
}

/// Long-format visitor statistics.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct VisitorTable {
    pub stats: Vec<VisitorStat>,
}

/// Trimmed, lowercased, spaces replaced by `_`.
fn normalize_column(name: &str) -> String {
    name.trim().to_lowercase().replace(' ', "_")
}

/// Kind and year encoded in a normalized column name, `None` for columns
/// that hold no visitor counts.
fn value_column(normalized: &str) -> Option<(VisitorKind, Option<u16>)> {
    let kind = if normalized.contains("domestic") {
        VisitorKind::Domestic
    } else if normalized.contains("foreign") {
        VisitorKind::Foreign
    } else {
        return None;
    };
    let year = YEAR
        .find(normalized)
        .and_then(|m| m.as_str().parse::<u16>().ok());
    Some((kind, year))
}

fn count(cell: &Value) -> Option<u64> {
    let n = match cell {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => parse_f64(s),
        _ => None,
    }?;
    (n.is_finite() && n >= 0.0).then(|| n.round() as u64)
}

fn state_of(cell: &Value) -> Option<String> {
    let s = match cell {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    (!s.is_empty()).then_some(s)
}

impl VisitorTable {
    pub fn new(stats: Vec<VisitorStat>) -> Self {
        Self { stats }
    }

    /// Reshapes wide rows into long format.
    ///
    /// Output is grouped by value column (first-seen column order), then by
    /// row order. Rows without a state and cells without a usable count are
    /// dropped. A non-empty table without a state column is `InvalidData`.
    pub fn from_rows(rows: &[Row]) -> Result<Self> {
        if rows.is_empty() {
            return Ok(Self::default());
        }

        // original key -> normalized key, first-seen order across all rows
        let mut columns: Vec<(&str, String)> = Vec::new();
        let mut seen = HashSet::new();
        for row in rows {
            for key in row.keys() {
                if seen.insert(key.as_str()) {
                    columns.push((key.as_str(), normalize_column(key)));
                }
            }
        }

        let state_col = STATE_COLUMNS
            .iter()
            .find_map(|want| columns.iter().find(|(_, norm)| norm == want))
            .map(|(orig, _)| *orig)
            .ok_or_else(|| TourError::InvalidData("visitor table has no state column".into()))?;

        let mut stats = Vec::new();
        for (orig, norm) in &columns {
            let Some((kind, year)) = value_column(norm) else {
                continue;
            };
            for row in rows {
                let Some(state) = row.get(state_col).and_then(state_of) else {
                    continue;
                };
                let Some(visitors) = row.get(*orig).and_then(count) else {
                    continue;
                };
                stats.push(VisitorStat {
                    state,
                    kind,
                    year,
                    visitors,
                });
            }
        }

        tracing::debug!(rows = rows.len(), stats = stats.len(), "reshaped visitor table");
        Ok(Self::new(stats))
    }

    pub fn len(&self) -> usize {
        self.stats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    /// Visitors summed per `(year, kind)`.
    pub fn totals(&self) -> BTreeMap<(Option<u16>, VisitorKind), u64> {
        let mut out = BTreeMap::new();
        for s in &self.stats {
            *out.entry((s.year, s.kind)).or_insert(0) += s.visitors;
        }
        out
    }

    /// Rows for one state, compared accent- and case-insensitively.
    pub fn for_state(&self, name: &str) -> Vec<&VisitorStat> {
        self.stats
            .iter()
            .filter(|s| equals_folded(&s.state, name.trim()))
            .collect()
    }
}
