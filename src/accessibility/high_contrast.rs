//! High contrast page theme.
//!
//! White-on-black palette used when the `high-contrast` toggle is on. Colors
//! are chosen to clear the WCAG AAA 7:1 ratio against the page background.

use egui::{Color32, Visuals};

/// High contrast colors and contrast-ratio helpers.
pub struct HighContrastTheme;

impl HighContrastTheme {
    pub const BACKGROUND: Color32 = Color32::BLACK;
    pub const PANEL_BG: Color32 = Color32::from_rgb(10, 10, 10);
    pub const CARD_BG: Color32 = Color32::from_rgb(20, 20, 20);

    pub const TEXT_PRIMARY: Color32 = Color32::WHITE;
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(220, 220, 220);

    /// Fill behind the selected answer
    pub const SELECTED: Color32 = Color32::from_rgb(255, 220, 0);
    /// Text on top of [`Self::SELECTED`]
    pub const SELECTED_TEXT: Color32 = Color32::BLACK;
    pub const ACCENT: Color32 = Color32::from_rgb(0, 200, 255);
    pub const ERROR: Color32 = Color32::from_rgb(255, 80, 80);

    pub const BORDER: Color32 = Color32::WHITE;

    /// egui visuals for the whole page.
    pub fn visuals() -> Visuals {
        let mut visuals = Visuals::dark();

        visuals.window_fill = Self::PANEL_BG;
        visuals.panel_fill = Self::BACKGROUND;
        visuals.faint_bg_color = Self::CARD_BG;
        visuals.extreme_bg_color = Self::BACKGROUND;

        visuals.widgets.noninteractive.bg_fill = Self::CARD_BG;
        visuals.widgets.inactive.bg_fill = Self::CARD_BG;
        visuals.widgets.inactive.weak_bg_fill = Self::CARD_BG;
        visuals.widgets.hovered.bg_fill = Color32::from_rgb(40, 40, 40);
        visuals.widgets.active.bg_fill = Self::ACCENT;

        visuals.selection.bg_fill = Self::SELECTED;
        visuals.selection.stroke.color = Self::SELECTED_TEXT;

        visuals.widgets.noninteractive.fg_stroke.color = Self::TEXT_PRIMARY;
        visuals.widgets.inactive.fg_stroke.color = Self::TEXT_PRIMARY;
        visuals.widgets.hovered.fg_stroke.color = Self::TEXT_PRIMARY;
        visuals.widgets.active.fg_stroke.color = Self::BACKGROUND;

        // Every control gets a visible outline
        visuals.widgets.noninteractive.bg_stroke.color = Self::BORDER;
        visuals.widgets.inactive.bg_stroke.color = Self::BORDER;
        visuals.widgets.noninteractive.bg_stroke.width = 1.5;
        visuals.widgets.inactive.bg_stroke.width = 1.5;

        visuals.error_fg_color = Self::ERROR;

        visuals
    }

    /// Contrast ratio between two colors, from 1 to 21.
    pub fn contrast_ratio(fg: Color32, bg: Color32) -> f32 {
        let fg_lum = relative_luminance(fg);
        let bg_lum = relative_luminance(bg);
        let (lighter, darker) = if fg_lum > bg_lum {
            (fg_lum, bg_lum)
        } else {
            (bg_lum, fg_lum)
        };

        (lighter + 0.05) / (darker + 0.05)
    }

    /// WCAG AA for body text (4.5:1).
    pub fn meets_aa(fg: Color32, bg: Color32) -> bool {
        Self::contrast_ratio(fg, bg) >= 4.5
    }

    /// WCAG AAA for body text (7:1).
    pub fn meets_aaa(fg: Color32, bg: Color32) -> bool {
        Self::contrast_ratio(fg, bg) >= 7.0
    }
}

/// https://www.w3.org/TR/WCAG21/#dfn-relative-luminance
fn relative_luminance(color: Color32) -> f32 {
    let channel = |c: u8| {
        let v = c as f32 / 255.0;
        if v <= 0.03928 {
            v / 12.92
        } else {
            ((v + 0.055) / 1.055).powf(2.4)
        }
    };

    0.2126 * channel(color.r()) + 0.7152 * channel(color.g()) + 0.0722 * channel(color.b())
}
