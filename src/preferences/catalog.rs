//! Static catalog of preference cards and accessibility toggles.
//!
//! Preferences are coarse intents ("I prefer listening") that bulk-enable a
//! fixed set of toggles. Toggles are the individual switches shown in the
//! support sections of the setup screen.

/// Toggle identifiers referenced by the mode resolver and the auto-map.
pub mod toggle_ids {
    pub const HIGH_CONTRAST: &str = "high-contrast";
    pub const EXTRA_LARGE_TEXT: &str = "extra-large-text";
    pub const INCREASE_FONT: &str = "increase-font";
    pub const LINE_SPACING: &str = "line-spacing";
    pub const BOLD_TEXT: &str = "bold-text";
    pub const HIGHLIGHT_KEYWORDS: &str = "highlight-keywords";
    pub const CAPTIONS: &str = "captions";
    pub const REALTIME_CAPTIONS: &str = "realtime-captions";
    pub const SPEECH_SPEED: &str = "speech-speed";
    pub const VOICE_ANSWERS: &str = "voice-answers";
    pub const VOICE_NAV: &str = "voice-nav";
    pub const SIMPLIFY_LANGUAGE: &str = "simplify-language";
    pub const BULLET_QUESTIONS: &str = "bullet-questions";
    pub const REMOVE_DISTRACTIONS: &str = "remove-distractions";
    pub const SIGN_VIDEO: &str = "sign-video";
    pub const DUAL_LANGUAGE: &str = "dual-language";
}

/// Preference identifiers.
pub mod preference_ids {
    pub const READING: &str = "reading";
    pub const LISTENING: &str = "listening";
    pub const SPEAKING: &str = "speaking";
    pub const SIMPLIFIED: &str = "simplified";
    pub const SIGN: &str = "sign";
}

use preference_ids as p;
use toggle_ids as t;

/// A selectable top-level preference card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Preference {
    pub id: &'static str,
    pub emoji: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    /// Toggles force-enabled when this preference is selected
    pub auto_toggles: &'static [&'static str],
}

/// Support section a toggle is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ToggleCategory {
    Visual,
    Hearing,
    SpeechMotor,
    Cognitive,
    SignLanguage,
}

impl ToggleCategory {
    /// All sections in display order.
    pub fn all() -> &'static [ToggleCategory] {
        &[
            ToggleCategory::Visual,
            ToggleCategory::Hearing,
            ToggleCategory::SpeechMotor,
            ToggleCategory::Cognitive,
            ToggleCategory::SignLanguage,
        ]
    }

    /// Section heading.
    pub fn title(&self) -> &'static str {
        match self {
            ToggleCategory::Visual => "Visual Support",
            ToggleCategory::Hearing => "Hearing Support",
            ToggleCategory::SpeechMotor => "Speech & Motor Support",
            ToggleCategory::Cognitive => "Cognitive Support",
            ToggleCategory::SignLanguage => "Sign Language Support",
        }
    }

    /// Toggles listed in this section.
    pub fn toggles(&self) -> impl Iterator<Item = &'static Toggle> {
        let category = *self;
        TOGGLES.iter().filter(move |toggle| toggle.category == category)
    }
}

/// Static catalog entry for an accessibility switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Toggle {
    pub id: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub category: ToggleCategory,
}

pub static PREFERENCES: &[Preference] = &[
    Preference {
        id: p::READING,
        emoji: "📖",
        title: "I Prefer Reading",
        description: "Text-based content with adjustable fonts and contrast",
        auto_toggles: &[
            t::INCREASE_FONT,
            t::LINE_SPACING,
            t::BOLD_TEXT,
            t::HIGHLIGHT_KEYWORDS,
        ],
    },
    Preference {
        id: p::LISTENING,
        emoji: "🔊",
        title: "I Prefer Listening",
        description: "Audio narration with speed controls",
        auto_toggles: &[t::CAPTIONS, t::REALTIME_CAPTIONS, t::SPEECH_SPEED],
    },
    Preference {
        id: p::SPEAKING,
        emoji: "🎤",
        title: "I Prefer Speaking",
        description: "Voice-based answers and navigation",
        auto_toggles: &[t::VOICE_ANSWERS, t::VOICE_NAV],
    },
    Preference {
        id: p::SIMPLIFIED,
        emoji: "🧠",
        title: "I Prefer Simplified Content",
        description: "Clear language with aids",
        auto_toggles: &[
            t::SIMPLIFY_LANGUAGE,
            t::BULLET_QUESTIONS,
            t::REMOVE_DISTRACTIONS,
        ],
    },
    Preference {
        id: p::SIGN,
        emoji: "🤟",
        title: "I Prefer Sign Language",
        description: "Sign language video interpretation",
        auto_toggles: &[t::SIGN_VIDEO, t::DUAL_LANGUAGE],
    },
];

pub static TOGGLES: &[Toggle] = &[
    Toggle {
        id: t::HIGH_CONTRAST,
        label: "High Contrast",
        description: "White text on a black page",
        category: ToggleCategory::Visual,
    },
    Toggle {
        id: t::EXTRA_LARGE_TEXT,
        label: "Extra Large Text",
        description: "Bigger question and answer text",
        category: ToggleCategory::Visual,
    },
    Toggle {
        id: t::INCREASE_FONT,
        label: "Increase Font Size",
        description: "Adjustable font size while reading",
        category: ToggleCategory::Visual,
    },
    Toggle {
        id: t::LINE_SPACING,
        label: "Line Spacing",
        description: "More room between lines",
        category: ToggleCategory::Visual,
    },
    Toggle {
        id: t::BOLD_TEXT,
        label: "Bold Text",
        description: "Heavier question text",
        category: ToggleCategory::Visual,
    },
    Toggle {
        id: t::HIGHLIGHT_KEYWORDS,
        label: "Highlight Keywords",
        description: "Emphasise important terms",
        category: ToggleCategory::Visual,
    },
    Toggle {
        id: t::CAPTIONS,
        label: "Captions",
        description: "Show text for anything spoken aloud",
        category: ToggleCategory::Hearing,
    },
    Toggle {
        id: t::REALTIME_CAPTIONS,
        label: "Real-time Captions",
        description: "Live transcript of your spoken answers",
        category: ToggleCategory::Hearing,
    },
    Toggle {
        id: t::SPEECH_SPEED,
        label: "Speech Speed Control",
        description: "Adjust narration speed",
        category: ToggleCategory::Hearing,
    },
    Toggle {
        id: t::VOICE_ANSWERS,
        label: "Voice Answers",
        description: "Answer questions by speaking",
        category: ToggleCategory::SpeechMotor,
    },
    Toggle {
        id: t::VOICE_NAV,
        label: "Voice Navigation",
        description: "Say \"next\" or \"previous\" to move",
        category: ToggleCategory::SpeechMotor,
    },
    Toggle {
        id: t::SIMPLIFY_LANGUAGE,
        label: "Simplify Language",
        description: "Plain-language version of each question",
        category: ToggleCategory::Cognitive,
    },
    Toggle {
        id: t::BULLET_QUESTIONS,
        label: "Bullet-point Questions",
        description: "Break long questions into points",
        category: ToggleCategory::Cognitive,
    },
    Toggle {
        id: t::REMOVE_DISTRACTIONS,
        label: "Remove Distractions",
        description: "Hide anything not needed to answer",
        category: ToggleCategory::Cognitive,
    },
    Toggle {
        id: t::SIGN_VIDEO,
        label: "Sign Language Video",
        description: "Signed version of every question",
        category: ToggleCategory::SignLanguage,
    },
    Toggle {
        id: t::DUAL_LANGUAGE,
        label: "Dual Language View",
        description: "Text and sign language side by side",
        category: ToggleCategory::SignLanguage,
    },
];

/// Look up a preference card by id.
pub fn find_preference(id: &str) -> Option<&'static Preference> {
    PREFERENCES.iter().find(|pref| pref.id == id)
}

/// Look up a toggle by id.
pub fn find_toggle(id: &str) -> Option<&'static Toggle> {
    TOGGLES.iter().find(|toggle| toggle.id == id)
}

/// Toggles force-enabled by selecting `pref_id`. Unknown ids map to nothing.
pub fn apply_preference(pref_id: &str) -> &'static [&'static str] {
    find_preference(pref_id)
        .map(|pref| pref.auto_toggles)
        .unwrap_or(&[])
}
