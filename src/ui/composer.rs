//! Exam view composition.
//!
//! Turns the resolved modes into a [`ViewPlan`]: which layout to use, which
//! optional panels and controls to show, and how large the text is. The
//! plan is rebuilt every frame.

use egui::TextFormat;

use crate::accessibility::{ReadingStyle, ResolvedModes};
use crate::storage::config::AssetSettings;

use super::theme::Theme;

/// Exam page layout.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamLayout {
    /// Single column: question, options, navigation
    Standard,
    /// Two columns: the standard stack plus the sign-language panel
    Split,
}

/// Base text sizes for question and options.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextScale {
    pub question: f32,
    pub option: f32,
    /// Vertical padding inside answer buttons
    pub option_padding: f32,
    /// Multiplier on the reading-panel font size
    pub reading_factor: f32,
}

impl TextScale {
    pub const STANDARD: TextScale = TextScale {
        question: 20.0,
        option: 16.0,
        option_padding: 12.0,
        reading_factor: 1.0,
    };

    pub const LARGE: TextScale = TextScale {
        question: 30.0,
        option: 20.0,
        option_padding: 20.0,
        reading_factor: 1.5,
    };
}

/// Everything the exam screen needs to know to draw one frame.
#[derive(Debug, Clone, PartialEq)]
pub struct ViewPlan {
    pub layout: ExamLayout,
    /// Sign-language clip for the current question (split layout only)
    pub sign_video: Option<String>,
    /// Forced page theme, if any
    pub theme_override: Option<Theme>,
    pub text: TextScale,
    pub reading_panel: bool,
    pub simplify_action: bool,
    pub microphone: bool,
    pub bold_question: bool,
    pub captions: bool,
}

impl ViewPlan {
    /// Text size for question and options while the reading panel is shown.
    pub fn reading_text_size(&self, style: &ReadingStyle) -> f32 {
        style.font_size() * self.text.reading_factor
    }

    /// Question text format under the reading panel.
    pub fn reading_question_format(&self, style: &ReadingStyle) -> TextFormat {
        style.text_format(self.reading_text_size(style), self.bold_question)
    }
}

/// Build the view plan for `question_id` under `modes`.
pub fn compose(modes: &ResolvedModes, question_id: u32, assets: &AssetSettings) -> ViewPlan {
    let layout = if modes.sign {
        ExamLayout::Split
    } else {
        ExamLayout::Standard
    };

    ViewPlan {
        layout,
        sign_video: modes.sign.then(|| assets.sign_video_path(question_id)),
        theme_override: modes.high_contrast.then_some(Theme::HighContrast),
        text: if modes.large_text {
            TextScale::LARGE
        } else {
            TextScale::STANDARD
        },
        reading_panel: modes.reading,
        simplify_action: modes.simplified,
        microphone: modes.voice,
        bold_question: modes.bold_text,
        captions: modes.captions,
    }
}
