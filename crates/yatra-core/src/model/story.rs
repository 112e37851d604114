// crates/yatra-core/src/model/story.rs
use crate::error::{Result, TourError};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// A festival story from the story guide.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Story {
    pub festival_name: Option<String>,
    pub description: Option<String>,
    pub region: Option<String>,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub source: Option<String>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StoryBook {
    pub stories: Vec<Story>,
}

impl StoryBook {
    pub fn new(stories: Vec<Story>) -> Self {
        Self { stories }
    }

    pub fn len(&self) -> usize {
        self.stories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stories.is_empty()
    }

    /// Distinct festival names, sorted.
    pub fn festival_names(&self) -> Vec<&str> {
        self.stories
            .iter()
            .filter_map(|s| s.festival_name.as_deref())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    /// The first story told for `festival`.
    pub fn story(&self, festival: &str) -> Result<&Story> {
        self.stories
            .iter()
            .find(|s| s.festival_name.as_deref() == Some(festival))
            .ok_or_else(|| TourError::NotFound(format!("festival {festival:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn story(name: Option<&str>, region: &str) -> Story {
        Story {
            festival_name: name.map(str::to_string),
            region: Some(region.to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn names_are_sorted_and_distinct() {
        let book = StoryBook::new(vec![
            story(Some("Onam"), "Kerala"),
            story(None, "Unknown"),
            story(Some("Bihu"), "Assam"),
            story(Some("Onam"), "Kerala (north)"),
        ]);
        assert_eq!(book.festival_names(), vec!["Bihu", "Onam"]);
        assert_eq!(book.story("Onam").unwrap().region.as_deref(), Some("Kerala"));
        assert!(matches!(book.story("Holi"), Err(TourError::NotFound(_))));
    }
}
