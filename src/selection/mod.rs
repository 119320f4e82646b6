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

//! Selection state shared by the map and table views.
//!
//! Holds the single nullable "currently selected airport id". Both view
//! collaborators mutate it through the same [`SelectionState::select`] toggle
//! rule, so clicking the selected airport from either view deselects it.
//!
//! Ids are not validated against the catalog at write time: a selected id
//! with no matching catalog entry is "nothing selected" to consumers doing a
//! lookup, never an error.

/// Single source of truth for the currently selected airport id.
#[derive(Debug, Clone, Default)]
pub struct SelectionState {
    selected: Option<String>,
}

impl SelectionState {
    /// Create an empty selection.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the currently selected id, if any.
    #[must_use]
    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Check whether the given id is the current selection.
    #[must_use]
    pub fn is_selected(&self, id: &str) -> bool {
        self.selected.as_deref() == Some(id)
    }

    /// Apply a click on `id` and return the new selection.
    ///
    /// Selecting the already-selected id clears the selection (toggle-off);
    /// any other id becomes the new selection. Map marker clicks and table
    /// row clicks both go through this one rule.
    pub fn select(&mut self, id: &str) -> Option<&str> {
        if self.is_selected(id) {
            self.selected = None;
        } else {
            self.selected = Some(id.to_string());
        }
        self.selected.as_deref()
    }

    /// External reset: clear the selection unconditionally.
    pub fn clear(&mut self) {
        self.selected = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_empty() {
        let selection = SelectionState::new();
        assert_eq!(selection.selected(), None);
        assert!(!selection.is_selected("x"));
    }

    #[test]
    fn test_select_toggles_on_and_off() {
        let mut selection = SelectionState::new();

        assert_eq!(selection.select("x"), Some("x"));
        assert!(selection.is_selected("x"));

        // Clicking the same airport again deselects it.
        assert_eq!(selection.select("x"), None);
        assert_eq!(selection.selected(), None);
    }

    #[test]
    fn test_select_switches_between_ids() {
        let mut selection = SelectionState::new();

        selection.select("x");
        assert_eq!(selection.select("y"), Some("y"));
        assert!(!selection.is_selected("x"));
    }

    #[test]
    fn test_clear_resets_selection() {
        let mut selection = SelectionState::new();
        selection.select("x");

        selection.clear();
        assert_eq!(selection.selected(), None);

        // Clearing an empty selection stays empty.
        selection.clear();
        assert_eq!(selection.selected(), None);
    }
}
