// Copyright 2025 Chris Custine
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Airport catalog and seed dataset.
//!
//! This module provides the airport data model and the catalog that owns it.
//! Airport identity is immutable: `id` is assigned at construction and never
//! changes. The only mutation the catalog supports is renaming an airport's
//! display name, keyed by `id`.
//!
//! The fixed demo dataset ships embedded in the crate as JSON and is loaded
//! with [`AirportCatalog::seed`]; no file or network I/O is involved.

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use log::info;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Embedded seed dataset: twelve US airports.
const SEED_AIRPORTS_JSON: &str = include_str!("seed_airports.json");

/// Errors raised when constructing a catalog from raw airport records.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Two airports share the same id.
    #[error("duplicate airport id: {0}")]
    DuplicateId(String),

    /// Latitude or longitude outside the valid WGS84 range.
    #[error("coordinates out of range for airport {id}: ({latitude}, {longitude})")]
    CoordinatesOutOfRange {
        id: String,
        latitude: f64,
        longitude: f64,
    },
}

/// Error returned when parsing an unknown airport type string.
#[derive(Debug, Error)]
#[error("unknown airport type: {0}")]
pub struct ParseAirportTypeError(String);

/// Airport classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AirportType {
    International,
    Domestic,
    Regional,
    Private,
}

impl AirportType {
    /// String form matching the wire/display representation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::International => "international",
            Self::Domestic => "domestic",
            Self::Regional => "regional",
            Self::Private => "private",
        }
    }

    /// Get marker radius based on airport type (for rendering priority).
    #[must_use]
    pub fn render_radius(self) -> f32 {
        match self {
            Self::International => 6.0,
            Self::Domestic => 4.0,
            Self::Regional => 3.0,
            Self::Private => 2.0,
        }
    }
}

impl fmt::Display for AirportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AirportType {
    type Err = ParseAirportTypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "international" => Ok(Self::International),
            "domestic" => Ok(Self::Domestic),
            "regional" => Ok(Self::Regional),
            "private" => Ok(Self::Private),
            other => Err(ParseAirportTypeError(other.to_string())),
        }
    }
}

/// WGS84 position in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    /// Latitude in degrees, valid range [-90, 90].
    pub latitude: f64,
    /// Longitude in degrees, valid range [-180, 180].
    pub longitude: f64,
}

impl Coordinates {
    /// Check that both components are inside the valid WGS84 range.
    #[must_use]
    pub fn is_in_range(self) -> bool {
        (-90.0..=90.0).contains(&self.latitude) && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// A single airport record.
///
/// Identity (`id`) is immutable; `name` is the only field that may change
/// after construction, via [`AirportCatalog::rename`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Airport {
    /// Unique stable identifier, assigned at dataset construction.
    pub id: String,

    /// Short IATA-style designator (e.g. "LAX", "SFO").
    pub code: String,

    /// Human-readable display name.
    pub name: String,

    /// City served by the airport.
    pub city: String,

    /// Country served by the airport.
    pub country: String,

    /// WGS84 position.
    pub coordinates: Coordinates,

    /// Elevation in feet above sea level.
    pub elevation: i32,

    /// Number of runways.
    pub runways: u32,

    /// Airport classification.
    #[serde(rename = "type")]
    pub airport_type: AirportType,

    /// Whether the terminal has a Starbucks (display-only annotation).
    pub has_starbucks: bool,
}

impl Airport {
    /// Latitude in degrees.
    #[must_use]
    pub fn latitude(&self) -> f64 {
        self.coordinates.latitude
    }

    /// Longitude in degrees.
    #[must_use]
    pub fn longitude(&self) -> f64 {
        self.coordinates.longitude
    }
}

/// Ordered collection of airports with unique ids.
///
/// Iteration order is the construction order and is preserved by every
/// read path, including spatial filtering.
#[derive(Debug, Clone)]
pub struct AirportCatalog {
    airports: Vec<Airport>,
}

impl AirportCatalog {
    /// Create a catalog, validating id uniqueness and coordinate ranges.
    pub fn new(airports: Vec<Airport>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for airport in &airports {
            if !seen.insert(airport.id.clone()) {
                return Err(CatalogError::DuplicateId(airport.id.clone()));
            }
            if !airport.coordinates.is_in_range() {
                return Err(CatalogError::CoordinatesOutOfRange {
                    id: airport.id.clone(),
                    latitude: airport.coordinates.latitude,
                    longitude: airport.coordinates.longitude,
                });
            }
        }
        Ok(Self { airports })
    }

    /// Load the embedded demo dataset.
    ///
    /// The seed ships inside the crate, so a failure here is a build defect
    /// and fails fast rather than propagating.
    #[must_use]
    pub fn seed() -> Self {
        let airports: Vec<Airport> = serde_json::from_str(SEED_AIRPORTS_JSON)
            .expect("embedded seed dataset is malformed - unrecoverable state");
        let catalog = Self::new(airports)
            .expect("embedded seed dataset violates catalog invariants - unrecoverable state");
        info!("Loaded {} seed airports", catalog.len());
        catalog
    }

    /// Get all airports in construction order.
    #[must_use]
    pub fn airports(&self) -> &[Airport] {
        &self.airports
    }

    /// Get a specific airport by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Airport> {
        self.airports.iter().find(|a| a.id == id)
    }

    /// Get the number of airports in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.airports.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.airports.is_empty()
    }

    /// Rename the airport with the given id.
    ///
    /// The new name is trimmed first. A whitespace-only name or an unknown id
    /// is a silent no-op; every field other than `name` is left untouched.
    /// Returns whether a rename was applied.
    pub fn rename(&mut self, id: &str, new_name: &str) -> bool {
        let trimmed = new_name.trim();
        if trimmed.is_empty() {
            return false;
        }
        let Some(airport) = self.airports.iter_mut().find(|a| a.id == id) else {
            return false;
        };
        info!(
            "Renamed airport {} ({}) from {:?} to {:?}",
            airport.id, airport.code, airport.name, trimmed
        );
        airport.name = trimmed.to_string();
        true
    }
}
