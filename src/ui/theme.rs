//! UI theme definitions.

use egui::{Color32, Visuals};

use crate::accessibility::HighContrastTheme;

/// Page theme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
    /// Forced by the `high-contrast` toggle during the exam
    HighContrast,
}

impl Theme {
    /// Get the egui Visuals for this theme.
    pub fn visuals(&self) -> Visuals {
        match self {
            Theme::Dark => dark_visuals(),
            Theme::Light => light_visuals(),
            Theme::HighContrast => HighContrastTheme::visuals(),
        }
    }

    /// Fill behind the selected answer.
    pub fn selected_fill(&self) -> Color32 {
        match self {
            Theme::Dark => DarkTheme::ACCENT,
            Theme::Light => LightTheme::ACCENT,
            Theme::HighContrast => HighContrastTheme::SELECTED,
        }
    }

    /// Text on top of [`Theme::selected_fill`].
    pub fn selected_text(&self) -> Color32 {
        match self {
            Theme::Dark | Theme::Light => Color32::WHITE,
            Theme::HighContrast => HighContrastTheme::SELECTED_TEXT,
        }
    }

    /// Fill behind unselected answers.
    pub fn card_fill(&self) -> Color32 {
        match self {
            Theme::Dark => DarkTheme::CARD_BG,
            Theme::Light => LightTheme::CARD_BG,
            Theme::HighContrast => HighContrastTheme::CARD_BG,
        }
    }

    pub fn text(&self) -> Color32 {
        match self {
            Theme::Dark => DarkTheme::TEXT_PRIMARY,
            Theme::Light => LightTheme::TEXT_PRIMARY,
            Theme::HighContrast => HighContrastTheme::TEXT_PRIMARY,
        }
    }

    pub fn error(&self) -> Color32 {
        match self {
            Theme::Dark => DarkTheme::ERROR,
            Theme::Light => LightTheme::ERROR,
            Theme::HighContrast => HighContrastTheme::ERROR,
        }
    }

    /// Dark/light switch from the top bar.
    pub fn toggled(self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light | Theme::HighContrast => Theme::Dark,
        }
    }
}

/// Dark theme colors.
pub struct DarkTheme;

impl DarkTheme {
    pub const BACKGROUND: Color32 = Color32::from_rgb(18, 18, 24);
    pub const PANEL_BG: Color32 = Color32::from_rgb(28, 28, 36);
    pub const CARD_BG: Color32 = Color32::from_rgb(38, 38, 48);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(240, 240, 245);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(160, 160, 170);
    /// Accent color (violet)
    pub const ACCENT: Color32 = Color32::from_rgb(109, 76, 230);
    pub const ERROR: Color32 = Color32::from_rgb(234, 67, 53);
    pub const BORDER: Color32 = Color32::from_rgb(60, 60, 70);
}

/// Light theme colors.
pub struct LightTheme;

impl LightTheme {
    pub const BACKGROUND: Color32 = Color32::from_rgb(250, 250, 252);
    pub const PANEL_BG: Color32 = Color32::from_rgb(255, 255, 255);
    pub const CARD_BG: Color32 = Color32::from_rgb(240, 240, 246);
    pub const TEXT_PRIMARY: Color32 = Color32::from_rgb(32, 32, 40);
    pub const TEXT_SECONDARY: Color32 = Color32::from_rgb(96, 96, 104);
    pub const ACCENT: Color32 = Color32::from_rgb(98, 62, 220);
    pub const ERROR: Color32 = Color32::from_rgb(200, 50, 40);
    pub const BORDER: Color32 = Color32::from_rgb(218, 218, 224);
}

fn dark_visuals() -> Visuals {
    let mut visuals = Visuals::dark();

    visuals.window_fill = DarkTheme::PANEL_BG;
    visuals.panel_fill = DarkTheme::BACKGROUND;
    visuals.faint_bg_color = DarkTheme::CARD_BG;
    visuals.extreme_bg_color = DarkTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = DarkTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(50, 50, 62);
    visuals.widgets.active.bg_fill = DarkTheme::ACCENT;

    visuals.selection.bg_fill = DarkTheme::ACCENT.linear_multiply(0.4);
    visuals.selection.stroke.color = DarkTheme::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = DarkTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = DarkTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = DarkTheme::TEXT_PRIMARY;

    visuals.widgets.noninteractive.bg_stroke.color = DarkTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = DarkTheme::BORDER;

    visuals
}

fn light_visuals() -> Visuals {
    let mut visuals = Visuals::light();

    visuals.window_fill = LightTheme::PANEL_BG;
    visuals.panel_fill = LightTheme::BACKGROUND;
    visuals.faint_bg_color = LightTheme::CARD_BG;
    visuals.extreme_bg_color = LightTheme::BACKGROUND;

    visuals.widgets.noninteractive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.inactive.bg_fill = LightTheme::CARD_BG;
    visuals.widgets.hovered.bg_fill = Color32::from_rgb(230, 230, 235);
    visuals.widgets.active.bg_fill = LightTheme::ACCENT;

    visuals.selection.bg_fill = LightTheme::ACCENT.linear_multiply(0.2);
    visuals.selection.stroke.color = LightTheme::ACCENT;

    visuals.widgets.noninteractive.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.inactive.fg_stroke.color = LightTheme::TEXT_SECONDARY;
    visuals.widgets.hovered.fg_stroke.color = LightTheme::TEXT_PRIMARY;
    visuals.widgets.active.fg_stroke.color = Color32::WHITE;

    visuals.widgets.noninteractive.bg_stroke.color = LightTheme::BORDER;
    visuals.widgets.inactive.bg_stroke.color = LightTheme::BORDER;

    visuals
}
