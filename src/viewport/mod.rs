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

//! Viewport bounds and spatial filtering.
//!
//! The map collaborator reports a [`ViewportBounds`] rectangle after each
//! pan/zoom settles, and [`filter_by_bounds`] reduces the airport list to the
//! entries inside it. A viewport that crosses the antimeridian (the 180°/-180°
//! line) is expressed with `west > east` and matches the union of
//! `[west, 180]` and `[-180, east]`.
//!
//! Boundary policy: all edges are inclusive, with no special-casing of
//! degenerate (`west == east`, `north == south`) or inverted (`north < south`)
//! rectangles. An inverted rectangle therefore matches nothing.

use serde::{Deserialize, Serialize};

use crate::catalog::Airport;

/// The lat/lon rectangle currently visible on the map, in degrees.
///
/// Invariant: `north >= south`. `west > east` is valid and signifies the
/// viewport spans the antimeridian rather than an inverted rectangle.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ViewportBounds {
    /// Northern edge latitude.
    pub north: f64,
    /// Southern edge latitude.
    pub south: f64,
    /// Eastern edge longitude.
    pub east: f64,
    /// Western edge longitude.
    pub west: f64,
}

impl ViewportBounds {
    /// Create bounds from edge coordinates.
    #[must_use]
    pub fn new(north: f64, south: f64, east: f64, west: f64) -> Self {
        Self {
            north,
            south,
            east,
            west,
        }
    }

    /// Check whether the viewport spans the 180°/-180° longitude line.
    #[must_use]
    pub fn crosses_antimeridian(&self) -> bool {
        self.west > self.east
    }

    /// Check whether a point lies inside the rectangle (edges inclusive).
    #[must_use]
    pub fn contains(&self, latitude: f64, longitude: f64) -> bool {
        let in_lat = latitude >= self.south && latitude <= self.north;
        let in_lon = if self.crosses_antimeridian() {
            longitude >= self.west || longitude <= self.east
        } else {
            longitude >= self.west && longitude <= self.east
        };
        in_lat && in_lon
    }
}

/// Filter airports to those inside the given viewport, preserving order.
///
/// `None` bounds is the initial/unbounded state before the map has reported a
/// viewport, and returns the input unchanged. The function is pure: it never
/// mutates its input and is safe to call on every viewport update.
#[must_use]
pub fn filter_by_bounds<'a>(
    airports: &'a [Airport],
    bounds: Option<&ViewportBounds>,
) -> Vec<&'a Airport> {
    match bounds {
        None => airports.iter().collect(),
        Some(bounds) => airports
            .iter()
            .filter(|a| bounds.contains(a.latitude(), a.longitude()))
            .collect(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::{AirportCatalog, AirportType, Coordinates};

    fn airport_at(id: &str, code: &str, lat: f64, lon: f64) -> Airport {
        Airport {
            id: id.to_string(),
            code: code.to_string(),
            name: code.to_string(),
            city: "X".to_string(),
            country: "Y".to_string(),
            coordinates: Coordinates {
                latitude: lat,
                longitude: lon,
            },
            elevation: 0,
            runways: 1,
            airport_type: AirportType::Regional,
            has_starbucks: false,
        }
    }

    fn codes(filtered: &[&Airport]) -> Vec<String> {
        filtered.iter().map(|a| a.code.clone()).collect()
    }

    #[test]
    fn test_no_bounds_returns_all_in_order() {
        let catalog = AirportCatalog::seed();
        let filtered = filter_by_bounds(catalog.airports(), None);

        assert_eq!(filtered.len(), catalog.len());
        for (original, kept) in catalog.airports().iter().zip(&filtered) {
            assert_eq!(original.id, kept.id);
        }
    }

    #[test]
    fn test_filters_by_simple_bounds() {
        let catalog = AirportCatalog::seed();
        // West-coast rectangle: includes LAX and SFO, excludes JFK.
        let bounds = ViewportBounds::new(42.0, 32.0, -110.0, -125.0);

        let filtered = filter_by_bounds(catalog.airports(), Some(&bounds));
        let codes = codes(&filtered);
        assert!(codes.contains(&"LAX".to_string()));
        assert!(codes.contains(&"SFO".to_string()));
        assert!(!codes.contains(&"JFK".to_string()));
    }

    #[test]
    fn test_antimeridian_wraparound() {
        let airports = vec![
            airport_at("a", "AAA", 10.0, 170.0),
            airport_at("b", "BBB", 10.0, -175.0),
            airport_at("c", "CCC", 10.0, -20.0),
        ];
        // west > east: viewport crosses the dateline.
        let bounds = ViewportBounds::new(20.0, 0.0, -170.0, 160.0);
        assert!(bounds.crosses_antimeridian());

        let filtered = filter_by_bounds(&airports, Some(&bounds));
        assert_eq!(codes(&filtered), vec!["AAA", "BBB"]);
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        let bounds = ViewportBounds::new(20.0, 0.0, 10.0, -10.0);
        assert!(filter_by_bounds(&[], Some(&bounds)).is_empty());
        assert!(filter_by_bounds(&[], None).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let catalog = AirportCatalog::seed();
        let bounds = ViewportBounds::new(42.0, 32.0, -110.0, -125.0);

        let once: Vec<Airport> = filter_by_bounds(catalog.airports(), Some(&bounds))
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_by_bounds(&once, Some(&bounds));

        assert_eq!(once.len(), twice.len());
        for (first, second) in once.iter().zip(&twice) {
            assert_eq!(first.id, second.id);
        }
    }

    #[test]
    fn test_edges_are_inclusive() {
        let airports = vec![
            airport_at("n", "NNN", 20.0, 0.0),
            airport_at("s", "SSS", 10.0, 0.0),
            airport_at("e", "EEE", 15.0, 5.0),
            airport_at("w", "WWW", 15.0, -5.0),
        ];
        let bounds = ViewportBounds::new(20.0, 10.0, 5.0, -5.0);

        let filtered = filter_by_bounds(&airports, Some(&bounds));
        assert_eq!(filtered.len(), 4);
    }

    #[test]
    fn test_degenerate_rectangles_match_exact_coordinates_only() {
        let airports = vec![
            airport_at("hit", "HIT", 15.0, 30.0),
            airport_at("near", "NEA", 15.0, 30.0001),
            airport_at("off", "OFF", 15.0001, 30.0),
        ];

        // Single-longitude slice: west == east.
        let slice = ViewportBounds::new(20.0, 10.0, 30.0, 30.0);
        assert_eq!(codes(&filter_by_bounds(&airports, Some(&slice))), vec!["HIT", "OFF"]);

        // Single-latitude slice: north == south.
        let line = ViewportBounds::new(15.0, 15.0, 40.0, 20.0);
        assert_eq!(codes(&filter_by_bounds(&airports, Some(&line))), vec!["HIT", "NEA"]);
    }

    #[test]
    fn test_inverted_rectangle_matches_nothing() {
        let catalog = AirportCatalog::seed();
        // north < south is not special-cased; the latitude predicate is
        // simply unsatisfiable.
        let bounds = ViewportBounds::new(32.0, 42.0, -110.0, -125.0);
        assert!(filter_by_bounds(catalog.airports(), Some(&bounds)).is_empty());
    }
}
