//! Optional TOML settings.
//!
//! ```toml
//! data_dir = "/srv/yatra/data"
//! qa_threshold = 60
//!
//! [hotels]
//! api_key = "..."
//! radius_m = 3000
//! limit = 10
//! timeout_secs = 10
//! ```

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const API_KEY_ENV: &str = "GEOAPIFY_API_KEY";

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Settings {
    pub data_dir: Option<PathBuf>,
    pub qa_threshold: u8,
    pub hotels: HotelSettings,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HotelSettings {
    pub api_key: Option<String>,
    /// Overrides the Geoapify places endpoint.
    pub endpoint: Option<String>,
    pub radius_m: u32,
    pub limit: u32,
    pub timeout_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            data_dir: None,
            qa_threshold: yatra_core::fuzzy::DEFAULT_THRESHOLD,
            hotels: HotelSettings::default(),
        }
    }
}

impl Default for HotelSettings {
    fn default() -> Self {
        Self {
            api_key: None,
            endpoint: None,
            radius_m: yatra_core::nearby::DEFAULT_RADIUS_M,
            limit: yatra_core::nearby::DEFAULT_LIMIT,
            timeout_secs: 10,
        }
    }
}

impl Settings {
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).context("Failed to parse TOML settings")
    }

    /// Reads `path` when given, otherwise starts from defaults. The API key
    /// from the environment wins over the file.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = match path {
            Some(p) => {
                let text = fs::read_to_string(p)
                    .with_context(|| format!("Failed to read settings file {}", p.display()))?;
                Self::from_toml(&text)?
            }
            None => Self::default(),
        };
        settings.apply_env(std::env::var(API_KEY_ENV).ok());
        Ok(settings)
    }

    fn apply_env(&mut self, api_key: Option<String>) {
        if let Some(key) = api_key.filter(|k| !k.trim().is_empty()) {
            self.hotels.api_key = Some(key);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_gives_defaults() {
        let s = Settings::from_toml("").unwrap();
        assert_eq!(s.qa_threshold, 60);
        assert_eq!(s.hotels.radius_m, 3000);
        assert_eq!(s.hotels.limit, 10);
        assert!(s.data_dir.is_none());
    }

    #[test]
    fn partial_hotel_section_keeps_other_defaults() {
        let s = Settings::from_toml("qa_threshold = 70\n[hotels]\napi_key = \"abc\"\nlimit = 5\n").unwrap();
        assert_eq!(s.qa_threshold, 70);
        assert_eq!(s.hotels.api_key.as_deref(), Some("abc"));
        assert_eq!(s.hotels.limit, 5);
        assert_eq!(s.hotels.timeout_secs, 10);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        assert!(Settings::from_toml("colour = \"blue\"").is_err());
    }

    #[test]
    fn environment_key_overrides_file() {
        let mut s = Settings::from_toml("[hotels]\napi_key = \"from-file\"").unwrap();
        s.apply_env(Some("from-env".into()));
        assert_eq!(s.hotels.api_key.as_deref(), Some("from-env"));
        s.apply_env(Some("  ".into()));
        assert_eq!(s.hotels.api_key.as_deref(), Some("from-env"));
    }

    #[test]
    fn reads_file_from_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("yatra.toml");
        fs::write(&path, "data_dir = \"/tmp/tables\"").unwrap();
        let s = Settings::load(Some(&path)).unwrap();
        assert_eq!(s.data_dir, Some(PathBuf::from("/tmp/tables")));
    }
}
