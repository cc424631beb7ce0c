//! Payload passed from the setup screen into the exam.

use serde::{Deserialize, Serialize};

use crate::accessibility::{resolve_modes, ResolvedModes};
use crate::preferences::{SelectedPreferences, SetupState, ToggleState};

/// Toggle states and chosen preferences at the moment the exam starts.
///
/// Both fields default to empty when absent from serialized input.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExamHandoff {
    #[serde(default)]
    pub toggles: ToggleState,
    #[serde(default)]
    pub preferences: SelectedPreferences,
}

impl ExamHandoff {
    /// Snapshot the setup state.
    pub fn from_setup(setup: &SetupState) -> Self {
        Self {
            toggles: setup.toggles.clone(),
            preferences: setup.preferences.clone(),
        }
    }

    /// Parse a JSON payload.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Active modes for this payload.
    pub fn modes(&self) -> ResolvedModes {
        resolve_modes(&self.toggles, &self.preferences)
    }
}
