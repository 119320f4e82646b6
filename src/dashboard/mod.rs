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

//! Sync coordinator for the map and table views.
//!
//! The [`Coordinator`] owns the catalog, the latest reported viewport, and
//! the shared selection, and emits change events so both views can re-render
//! from the same state:
//!
//! - The map collaborator gets the *full* catalog (it always shows every
//!   airport) plus the selected id for highlight rendering.
//! - The table collaborator gets [`Coordinator::visible_airports`], the
//!   catalog filtered to the current viewport, plus the same selected id.
//!
//! The visible list is a pure recomputation on every read rather than a
//! cached derivation, so a rename or viewport change is reflected immediately
//! with no stale-cache path.

use log::debug;
use tokio::sync::broadcast;

use crate::catalog::{Airport, AirportCatalog};
use crate::selection::SelectionState;
use crate::viewport::{filter_by_bounds, ViewportBounds};

/// Events emitted when dashboard state changes.
///
/// Views subscribe via [`Coordinator::subscribe`]; dropping the receiver
/// releases the subscription, which is the required teardown step for a view.
#[derive(Debug, Clone)]
pub enum DashboardEvent {
    /// The map reported a new viewport; the visible list has changed shape.
    ViewportChanged(ViewportBounds),
    /// The selection changed; carries the new selected id (`None` = cleared).
    SelectionChanged(Option<String>),
    /// An airport's display name was renamed.
    AirportRenamed(String),
    /// The hovered airport changed (display-only, independent of selection).
    HoverChanged(Option<String>),
}

/// Configuration for the coordinator.
#[derive(Debug, Clone)]
pub struct DashboardConfig {
    /// Viewport to start from, or `None` for the unbounded initial state.
    pub initial_bounds: Option<ViewportBounds>,
    /// Broadcast channel capacity for change events.
    pub event_channel_capacity: usize,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            initial_bounds: None,
            event_channel_capacity: 64,
        }
    }
}

/// Owns catalog, viewport, and selection state, and keeps the derived
/// visible-airport view consistent for both collaborators.
pub struct Coordinator {
    catalog: AirportCatalog,
    bounds: Option<ViewportBounds>,
    selection: SelectionState,
    hovered: Option<String>,
    event_tx: broadcast::Sender<DashboardEvent>,
}

impl std::fmt::Debug for Coordinator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Coordinator")
            .field("airport_count", &self.catalog.len())
            .field("bounds", &self.bounds)
            .field("selected", &self.selection.selected())
            .finish_non_exhaustive()
    }
}

impl Coordinator {
    /// Create a coordinator over the given catalog.
    #[must_use]
    pub fn new(catalog: AirportCatalog, config: DashboardConfig) -> Self {
        let (event_tx, _) = broadcast::channel(config.event_channel_capacity);
        Self {
            catalog,
            bounds: config.initial_bounds,
            selection: SelectionState::new(),
            hovered: None,
            event_tx,
        }
    }

    /// Subscribe to change events.
    #[must_use]
    pub fn subscribe(&self) -> broadcast::Receiver<DashboardEvent> {
        self.event_tx.subscribe()
    }

    /// Record the viewport reported by the map after a pan/zoom settles.
    ///
    /// Last write wins: whichever report lands last is the one the visible
    /// list is derived from.
    pub fn set_viewport(&mut self, bounds: ViewportBounds) {
        debug!(
            "Viewport updated: n={} s={} e={} w={}",
            bounds.north, bounds.south, bounds.east, bounds.west
        );
        self.bounds = Some(bounds);
        let _ = self.event_tx.send(DashboardEvent::ViewportChanged(bounds));
    }

    /// Get the latest reported viewport, or `None` before the first report.
    #[must_use]
    pub fn bounds(&self) -> Option<ViewportBounds> {
        self.bounds
    }

    /// Apply a click on an airport, from either the map or the table.
    ///
    /// Both click paths share the selection toggle rule, so clicking the
    /// selected airport from either view deselects it.
    pub fn select(&mut self, id: &str) {
        let selected = self.selection.select(id).map(ToOwned::to_owned);
        let _ = self.event_tx.send(DashboardEvent::SelectionChanged(selected));
    }

    /// External reset of the selection.
    pub fn clear_selection(&mut self) {
        if self.selection.selected().is_some() {
            self.selection.clear();
            let _ = self.event_tx.send(DashboardEvent::SelectionChanged(None));
        }
    }

    /// Get the currently selected airport id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selection.selected()
    }

    /// Look up the selected airport in the catalog.
    ///
    /// A selected id with no catalog entry resolves to `None`, the same as no
    /// selection.
    #[must_use]
    pub fn selected_airport(&self) -> Option<&Airport> {
        self.selection.selected().and_then(|id| self.catalog.get(id))
    }

    /// Record the airport under the cursor (display-only, from the map).
    pub fn set_hovered(&mut self, id: Option<&str>) {
        let hovered = id.map(ToOwned::to_owned);
        if hovered != self.hovered {
            self.hovered.clone_from(&hovered);
            let _ = self.event_tx.send(DashboardEvent::HoverChanged(hovered));
        }
    }

    /// Get the hovered airport id, if any.
    #[must_use]
    pub fn hovered(&self) -> Option<&str> {
        self.hovered.as_deref()
    }

    /// Full catalog in construction order, for the map collaborator.
    #[must_use]
    pub fn airports(&self) -> &[Airport] {
        self.catalog.airports()
    }

    /// Airports inside the current viewport, for the table collaborator.
    ///
    /// Recomputed from the catalog and latest bounds on every call.
    #[must_use]
    pub fn visible_airports(&self) -> Vec<&Airport> {
        filter_by_bounds(self.catalog.airports(), self.bounds.as_ref())
    }

    /// Commit a name edit from the table.
    ///
    /// Trims the name first; a whitespace-only name or unknown id is a silent
    /// no-op. Selection is untouched either way.
    pub fn rename(&mut self, id: &str, new_name: &str) {
        if self.catalog.rename(id, new_name) {
            let _ = self.event_tx.send(DashboardEvent::AirportRenamed(id.to_string()));
        }
    }

    /// Access the underlying catalog.
    #[must_use]
    pub fn catalog(&self) -> &AirportCatalog {
        &self.catalog
    }
}
