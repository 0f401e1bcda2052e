//! File-backed city catalog.
//!
//! Two formats, chosen by extension:
//!
//! - `.toml`: a top-level `cities = ["Москва", ...]` array
//! - anything else: one city per line; blank lines and lines starting
//!   with `#` are skipped

use std::path::{Path, PathBuf};

use serde::Deserialize;
use tracing::{debug, instrument};

use booking_core::{
    application::{ApplicationError, ports::CityCatalog},
    error::BookingResult,
};

#[derive(Debug, Deserialize)]
struct CityFile {
    cities: Vec<String>,
}

/// Reads the city list from disk each time [`CityCatalog::cities`] is called.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileCatalog {
    path: PathBuf,
}

impl FileCatalog {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn is_toml(&self) -> bool {
        self.path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("toml"))
    }

    fn parse_toml(&self, content: &str) -> BookingResult<Vec<String>> {
        let file: CityFile = toml::from_str(content).map_err(|e| ApplicationError::CatalogParse {
            path: self.path.clone(),
            reason: e.to_string(),
        })?;
        Ok(file.cities)
    }

    fn parse_lines(content: &str) -> Vec<String> {
        content
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty() && !line.starts_with('#'))
            .map(str::to_owned)
            .collect()
    }
}

impl CityCatalog for FileCatalog {
    #[instrument(skip_all, fields(path = %self.path.display()))]
    fn cities(&self) -> BookingResult<Vec<String>> {
        let content =
            std::fs::read_to_string(&self.path).map_err(|e| ApplicationError::CatalogUnavailable {
                source_name: self.source_name(),
                reason: e.to_string(),
            })?;

        let cities = if self.is_toml() {
            self.parse_toml(&content)?
        } else {
            Self::parse_lines(&content)
        };

        debug!(count = cities.len(), "City catalog read");
        Ok(cities)
    }

    fn source_name(&self) -> String {
        self.path.display().to_string()
    }
}
