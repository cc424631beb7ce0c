//! Toggle state store and preference selection.
//!
//! Selecting a preference is one-way: its mapped toggles are forced on, and
//! deselecting it later leaves them on. Once a toggle is set it belongs to the
//! user, who can flip it back manually.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use super::catalog;

/// Mapping from toggle id to enabled flag. Missing keys read as `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ToggleState(BTreeMap<String, bool>);

impl ToggleState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a toggle is on.
    pub fn is_enabled(&self, id: &str) -> bool {
        self.0.get(id).copied().unwrap_or(false)
    }

    /// Set a toggle explicitly.
    pub fn set(&mut self, id: impl Into<String>, enabled: bool) {
        self.0.insert(id.into(), enabled);
    }

    /// Flip a toggle and return its new value.
    pub fn flip(&mut self, id: &str) -> bool {
        let enabled = !self.is_enabled(id);
        self.0.insert(id.to_string(), enabled);
        enabled
    }

    /// Force every given toggle on. Never turns anything off.
    pub fn enable_all<'a>(&mut self, ids: impl IntoIterator<Item = &'a str>) {
        for id in ids {
            self.0.insert(id.to_string(), true);
        }
    }

    /// Ids of the toggles currently on.
    pub fn enabled_ids(&self) -> impl Iterator<Item = &str> {
        self.0
            .iter()
            .filter(|(_, enabled)| **enabled)
            .map(|(id, _)| id.as_str())
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<K: Into<String>> FromIterator<(K, bool)> for ToggleState {
    fn from_iter<I: IntoIterator<Item = (K, bool)>>(iter: I) -> Self {
        Self(iter.into_iter().map(|(k, v)| (k.into(), v)).collect())
    }
}

/// Preferences chosen by the user, in selection order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SelectedPreferences(Vec<String>);

impl SelectedPreferences {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, id: &str) -> bool {
        self.0.iter().any(|p| p == id)
    }

    /// Add a preference. Returns `false` if it was already selected.
    pub fn insert(&mut self, id: &str) -> bool {
        if self.contains(id) {
            return false;
        }
        self.0.push(id.to_string());
        true
    }

    /// Remove a preference. Returns `false` if it was not selected.
    pub fn remove(&mut self, id: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|p| p != id);
        self.0.len() != before
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for SelectedPreferences {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut selected = Self::new();
        for id in iter {
            selected.insert(&id.into());
        }
        selected
    }
}

/// Session-scoped setup state: selected preferences plus the toggle store.
#[derive(Debug, Clone, Default)]
pub struct SetupState {
    pub preferences: SelectedPreferences,
    pub toggles: ToggleState,
}

impl SetupState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select or deselect a preference card.
    ///
    /// Selecting unions the preference's mapped toggles into the store as
    /// `true`. Deselecting only removes the preference id.
    pub fn toggle_preference(&mut self, pref_id: &str) {
        if self.preferences.remove(pref_id) {
            tracing::info!("Preference deselected: {}", pref_id);
            return;
        }

        self.preferences.insert(pref_id);
        let mapped = catalog::apply_preference(pref_id);
        self.toggles.enable_all(mapped.iter().copied());
        tracing::info!(
            "Preference selected: {} (auto-enabled {} toggles)",
            pref_id,
            mapped.len()
        );
    }

    /// Flip a single toggle from its switch.
    pub fn toggle_switch(&mut self, toggle_id: &str) {
        let enabled = self.toggles.flip(toggle_id);
        tracing::debug!("Toggle {} -> {}", toggle_id, enabled);
    }

    pub fn is_preference_selected(&self, pref_id: &str) -> bool {
        self.preferences.contains(pref_id)
    }
}
