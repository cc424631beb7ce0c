//! Reading-mode style controls.
//!
//! Font size, line spacing, light/dark page and a dyslexia-friendly font
//! setting, applied to question and option text when reading mode is active.

use egui::{Color32, FontFamily, FontId, TextFormat};

pub const MIN_FONT_SIZE: f32 = 14.0;
pub const MAX_FONT_SIZE: f32 = 34.0;
pub const DEFAULT_FONT_SIZE: f32 = 20.0;

/// Extra letter spacing used in place of a dedicated dyslexia typeface.
const DYSLEXIA_LETTER_SPACING: f32 = 1.5;

/// Discrete line-spacing presets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineSpacing {
    #[default]
    Compact,
    Relaxed,
    Wide,
}

impl LineSpacing {
    pub fn all() -> &'static [LineSpacing] {
        &[LineSpacing::Compact, LineSpacing::Relaxed, LineSpacing::Wide]
    }

    /// Line height as a multiple of the font size.
    pub fn factor(&self) -> f32 {
        match self {
            LineSpacing::Compact => 1.4,
            LineSpacing::Relaxed => 1.8,
            LineSpacing::Wide => 2.2,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            LineSpacing::Compact => "1.4",
            LineSpacing::Relaxed => "1.8",
            LineSpacing::Wide => "2.2",
        }
    }
}

/// Page tone inside the reading panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ReadingTone {
    #[default]
    Light,
    Dark,
}

impl ReadingTone {
    pub fn toggled(self) -> Self {
        match self {
            ReadingTone::Light => ReadingTone::Dark,
            ReadingTone::Dark => ReadingTone::Light,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReadingTone::Light => "Light",
            ReadingTone::Dark => "Dark",
        }
    }

    pub fn background(&self) -> Color32 {
        match self {
            ReadingTone::Light => Color32::from_rgb(250, 248, 240),
            ReadingTone::Dark => Color32::from_rgb(24, 24, 30),
        }
    }

    pub fn text(&self) -> Color32 {
        match self {
            ReadingTone::Light => Color32::from_rgb(28, 28, 32),
            ReadingTone::Dark => Color32::from_rgb(235, 235, 240),
        }
    }

    /// Emphasised text, used when bold text is on.
    pub fn strong_text(&self) -> Color32 {
        match self {
            ReadingTone::Light => Color32::BLACK,
            ReadingTone::Dark => Color32::WHITE,
        }
    }
}

/// Reading panel settings.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReadingStyle {
    font_size: f32,
    pub line_spacing: LineSpacing,
    pub tone: ReadingTone,
    pub dyslexia_font: bool,
}

impl Default for ReadingStyle {
    fn default() -> Self {
        Self {
            font_size: DEFAULT_FONT_SIZE,
            line_spacing: LineSpacing::default(),
            tone: ReadingTone::default(),
            dyslexia_font: false,
        }
    }
}

impl ReadingStyle {
    pub fn font_size(&self) -> f32 {
        self.font_size
    }

    /// Set the font size, clamped to 14–34px.
    pub fn set_font_size(&mut self, size: f32) {
        self.font_size = size.clamp(MIN_FONT_SIZE, MAX_FONT_SIZE);
    }

    /// Text format for `size` under this style. `strong` renders the text
    /// in the emphasised tone color.
    pub fn text_format(&self, size: f32, strong: bool) -> TextFormat {
        let family = if self.dyslexia_font {
            FontFamily::Monospace
        } else {
            FontFamily::Proportional
        };

        TextFormat {
            font_id: FontId::new(size, family),
            color: if strong {
                self.tone.strong_text()
            } else {
                self.tone.text()
            },
            line_height: Some(size * self.line_spacing.factor()),
            extra_letter_spacing: if self.dyslexia_font {
                DYSLEXIA_LETTER_SPACING
            } else {
                0.0
            },
            ..Default::default()
        }
    }
}
