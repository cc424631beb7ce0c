//! Preference catalog and toggle state.
//!
//! Backs the setup screen: which preference cards exist, which toggles they
//! auto-enable, and the per-session toggle store handed to the exam.

pub mod catalog;
pub mod state;

pub use catalog::{
    apply_preference, find_preference, find_toggle, preference_ids, toggle_ids, Preference,
    Toggle, ToggleCategory, PREFERENCES, TOGGLES,
};
pub use state::{SelectedPreferences, SetupState, ToggleState};
