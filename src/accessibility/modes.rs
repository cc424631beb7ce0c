//! Rendering modes derived from toggles and preferences.
//!
//! `ResolvedModes` is recomputed on every frame from the session state and is
//! never stored, so a toggle change is always reflected on the next render.

use crate::preferences::{preference_ids as p, toggle_ids as t, SelectedPreferences, ToggleState};

/// Active accessibility modes for the exam screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ResolvedModes {
    /// Split layout with the sign-language panel
    pub sign: bool,
    pub high_contrast: bool,
    pub large_text: bool,
    /// Floating microphone bound to speech recognition
    pub voice: bool,
    /// Automatic narration of each question
    pub listening: bool,
    /// Reading controls panel (font size, spacing, theme, dyslexia font)
    pub reading: bool,
    /// "Simplify" action on the question text
    pub simplified: bool,
    pub bold_text: bool,
    /// Caption strip for narration and transcripts
    pub captions: bool,
    /// Spoken "next"/"previous" commands
    pub voice_navigation: bool,
}

/// Derive the active modes. Pure and total: unknown or missing keys are off.
pub fn resolve_modes(toggles: &ToggleState, preferences: &SelectedPreferences) -> ResolvedModes {
    ResolvedModes {
        sign: toggles.is_enabled(t::SIGN_VIDEO) || toggles.is_enabled(t::DUAL_LANGUAGE),
        high_contrast: toggles.is_enabled(t::HIGH_CONTRAST),
        large_text: toggles.is_enabled(t::EXTRA_LARGE_TEXT),
        voice: toggles.is_enabled(t::VOICE_ANSWERS),
        listening: preferences.contains(p::LISTENING),
        reading: preferences.contains(p::READING),
        simplified: toggles.is_enabled(t::SIMPLIFY_LANGUAGE)
            || preferences.contains(p::SIMPLIFIED),
        bold_text: toggles.is_enabled(t::BOLD_TEXT),
        captions: toggles.is_enabled(t::CAPTIONS) || toggles.is_enabled(t::REALTIME_CAPTIONS),
        voice_navigation: toggles.is_enabled(t::VOICE_NAV),
    }
}
