//! Accessibility modes and transforms for the exam screen.
//!
//! - Mode resolution from toggles and preferences
//! - High contrast page theme
//! - Reading controls (font size, line spacing, tone, dyslexia font)
//! - Plain-language question rewrite
//! - Spoken-answer matching and voice navigation

pub mod high_contrast;
pub mod modes;
pub mod reading;
pub mod simplify;
pub mod voice_answers;

pub use high_contrast::HighContrastTheme;
pub use modes::{resolve_modes, ResolvedModes};
pub use reading::{LineSpacing, ReadingStyle, ReadingTone};
pub use simplify::simplify_text;
pub use voice_answers::{interpret, match_transcript, option_letter, VoiceIntent, VoiceNavCommand};
