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

//! Core state and sync logic for an airport map/table dashboard.
//!
//! This library keeps a map view and a tabular airport list synchronized:
//! panning/zooming the map filters the visible table rows, and selecting an
//! airport in either view highlights it in the other. Rendering is out of
//! scope; the library is the state layer the two views share. It is built
//! from layers that can be used independently or composed together:
//!
//! - **Catalog layer**: the fixed in-memory airport dataset with a single
//!   rename mutation
//! - **Viewport layer**: pure bounds filtering, including antimeridian
//!   wraparound when a viewport crosses the 180°/-180° line
//! - **Selection layer**: the single shared "selected airport id" with its
//!   toggle rule
//! - **Dashboard layer**: the coordinator that wires the above together and
//!   broadcasts change events
//!
//! # Quick Start
//!
//! Use the [`Dashboard`] handle for full-stack operation; each view
//! collaborator holds a clone of it:
//!
//! ```
//! use airdash::{AirportCatalog, Dashboard, DashboardConfig, ViewportBounds};
//!
//! let dashboard = Dashboard::new(AirportCatalog::seed(), DashboardConfig::default());
//!
//! // The map reports a west-coast viewport after a pan/zoom settles.
//! dashboard.set_viewport(ViewportBounds::new(42.0, 32.0, -110.0, -125.0));
//!
//! // The table renders only the airports inside the viewport...
//! for airport in dashboard.visible_airports() {
//!     println!("{}: {}", airport.code, airport.name);
//! }
//! // ...while the map always renders the full catalog.
//! assert_eq!(dashboard.airports().len(), 12);
//!
//! // A click in either view toggles the shared selection.
//! dashboard.select("1");
//! assert_eq!(dashboard.selected().as_deref(), Some("1"));
//! dashboard.select("1");
//! assert_eq!(dashboard.selected(), None);
//! ```
//!
//! # Using Individual Layers
//!
//! ## Viewport Layer Only
//!
//! ```
//! use airdash::{filter_by_bounds, AirportCatalog, ViewportBounds};
//!
//! let catalog = AirportCatalog::seed();
//! // west > east: this viewport crosses the antimeridian.
//! let bounds = ViewportBounds::new(20.0, 0.0, -170.0, 160.0);
//! let visible = filter_by_bounds(catalog.airports(), Some(&bounds));
//! assert!(visible.is_empty());
//! ```
//!
//! ## Selection Layer Only
//!
//! ```
//! use airdash::SelectionState;
//!
//! let mut selection = SelectionState::new();
//! selection.select("7");
//! assert!(selection.is_selected("7"));
//! selection.select("7");
//! assert_eq!(selection.selected(), None);
//! ```
//!
//! # View Teardown
//!
//! Views observe changes through [`Dashboard::subscribe`]. Dropping the
//! returned receiver releases the subscription, so a view that is torn down
//! stops observing events without any explicit unregistration step.

pub mod catalog;
pub mod dashboard;
pub mod selection;
pub mod viewport;

use std::sync::{Arc, RwLock};

use tokio::sync::broadcast;

pub use catalog::{Airport, AirportCatalog, AirportType, CatalogError, Coordinates};
pub use dashboard::{Coordinator, DashboardConfig, DashboardEvent};
pub use selection::SelectionState;
pub use viewport::{filter_by_bounds, ViewportBounds};

/// Shared handle to the dashboard state.
///
/// Wraps the [`Coordinator`] so the map and table collaborators can each hold
/// a cheap clone. Reads return snapshots; writes are limited to the narrow
/// mutator set (`set_viewport`, `select`, `clear_selection`, `set_hovered`,
/// `rename`), keeping the coordinator the single source of truth.
#[derive(Clone)]
pub struct Dashboard {
    coordinator: Arc<RwLock<Coordinator>>,
}

impl std::fmt::Debug for Dashboard {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Dashboard")
            .field("coordinator", &self.read(|c| format!("{c:?}")))
            .finish()
    }
}

impl Dashboard {
    /// Create a dashboard over the given catalog.
    #[must_use]
    pub fn new(catalog: AirportCatalog, config: DashboardConfig) -> Self {
        Self {
            coordinator: Arc::new(RwLock::new(Coordinator::new(catalog, config))),
        }
    }

    fn read<R>(&self, f: impl FnOnce(&Coordinator) -> R) -> R {
        let coordinator = self
            .coordinator
            .read()
            .expect("dashboard state lock poisoned - unrecoverable state");
        f(&coordinator)
    }

    fn write<R>(&self, f: impl FnOnce(&mut Coordinator) -> R) -> R {
        let mut coordinator = self
            .coordinator
            .write()
            .expect("dashboard state lock poisoned - unrecoverable state");
        f(&mut coordinator)
    }

    /// Record the viewport reported by the map after a pan/zoom settles.
    pub fn set_viewport(&self, bounds: ViewportBounds) {
        self.write(|c| c.set_viewport(bounds));
    }

    /// Get the latest reported viewport, or `None` before the first report.
    #[must_use]
    pub fn bounds(&self) -> Option<ViewportBounds> {
        self.read(Coordinator::bounds)
    }

    /// Apply a marker or row click, toggling the shared selection.
    pub fn select(&self, id: &str) {
        self.write(|c| c.select(id));
    }

    /// External reset of the selection.
    pub fn clear_selection(&self) {
        self.write(Coordinator::clear_selection);
    }

    /// Get the currently selected airport id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<String> {
        self.read(|c| c.selected().map(ToOwned::to_owned))
    }

    /// Look up the selected airport; a stale id resolves to `None`.
    #[must_use]
    pub fn selected_airport(&self) -> Option<Airport> {
        self.read(|c| c.selected_airport().cloned())
    }

    /// Record the airport under the cursor (display-only).
    pub fn set_hovered(&self, id: Option<&str>) {
        self.write(|c| c.set_hovered(id));
    }

    /// Get the hovered airport id, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<String> {
        self.read(|c| c.hovered().map(ToOwned::to_owned))
    }

    /// Full catalog snapshot for the map collaborator.
    #[must_use]
    pub fn airports(&self) -> Vec<Airport> {
        self.read(|c| c.airports().to_vec())
    }

    /// Snapshot of the airports inside the current viewport, for the table.
    #[must_use]
    pub fn visible_airports(&self) -> Vec<Airport> {
        self.read(|c| c.visible_airports().into_iter().cloned().collect())
    }

    /// Get a specific airport by id.
    #[must_use]
    pub fn airport(&self, id: &str) -> Option<Airport> {
        self.read(|c| c.catalog().get(id).cloned())
    }

    /// Get the number of airports in the catalog.
    #[must_use]
    pub fn airport_count(&self) -> usize {
        self.read(|c| c.catalog().len())
    }

    /// Commit a name edit from the table.
    pub fn rename(&self, id: &str, new_name: &str) {
        self.write(|c| c.rename(id, new_name));
    }

    /// Subscribe to change events; drop the receiver at view teardown.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.read(Coordinator::subscribe)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cloned_handles_share_state() {
        let dashboard = Dashboard::new(AirportCatalog::seed(), DashboardConfig::default());
        let map_view = dashboard.clone();
        let table_view = dashboard.clone();

        // A marker click on the map is visible through the table's handle.
        map_view.select("2");
        assert_eq!(table_view.selected().as_deref(), Some("2"));

        // A row click on the same airport from the table deselects it.
        table_view.select("2");
        assert_eq!(map_view.selected(), None);
    }

    #[test]
    fn test_viewport_filters_table_snapshot() {
        let dashboard = Dashboard::new(AirportCatalog::seed(), DashboardConfig::default());
        let mut events = dashboard.subscribe();

        dashboard.set_viewport(ViewportBounds::new(42.0, 32.0, -110.0, -125.0));

        let visible = dashboard.visible_airports();
        assert!(visible.len() < dashboard.airport_count());
        assert!(visible.iter().any(|a| a.code == "LAX"));
        assert!(matches!(
            events.try_recv().unwrap(),
            DashboardEvent::ViewportChanged(_)
        ));
    }

    #[test]
    fn test_rename_through_handle() {
        let dashboard = Dashboard::new(AirportCatalog::seed(), DashboardConfig::default());

        dashboard.rename("1", "Renamed Field");
        assert_eq!(dashboard.airport("1").unwrap().name, "Renamed Field");
        assert_eq!(dashboard.airport("1").unwrap().code, "LAX");
    }
}
