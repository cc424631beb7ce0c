//! Spoken-answer matching.
//!
//! Turns a recognised transcript into an answer for the current question, or
//! into a navigation command when voice navigation is on.

/// Letter spoken for the option at `index` ("a", "b", ...).
pub fn option_letter(index: usize) -> Option<char> {
    u8::try_from(index)
        .ok()
        .filter(|i| *i < 26)
        .map(|i| (b'a' + i) as char)
}

/// Match a transcript against an option list.
///
/// Options are scanned in list order and the first one for which any rule
/// fires wins. All comparisons are case-insensitive:
/// 1. the transcript contains the option text;
/// 2. the transcript contains "option <letter>";
/// 3. the trimmed transcript is exactly the letter.
pub fn match_transcript<S: AsRef<str>>(transcript: &str, options: &[S]) -> Option<usize> {
    let heard = transcript.trim().to_lowercase();
    if heard.is_empty() {
        return None;
    }

    options.iter().enumerate().position(|(index, option)| {
        let text = option.as_ref().to_lowercase();
        if !text.is_empty() && heard.contains(&text) {
            return true;
        }

        match option_letter(index) {
            Some(letter) => {
                heard.contains(&format!("option {}", letter)) || heard == letter.to_string()
            }
            None => false,
        }
    })
}

/// Navigation phrases understood when voice navigation is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceNavCommand {
    Next,
    Previous,
    /// Read the current question again
    Repeat,
}

impl VoiceNavCommand {
    /// Parse a transcript into a navigation command.
    pub fn from_phrase(phrase: &str) -> Option<Self> {
        let phrase = phrase.trim().to_lowercase();

        match phrase.as_str() {
            "next" | "next question" | "skip" => Some(VoiceNavCommand::Next),
            "previous" | "previous question" | "back" | "go back" => {
                Some(VoiceNavCommand::Previous)
            }
            "repeat" | "read again" | "say again" => Some(VoiceNavCommand::Repeat),
            _ => None,
        }
    }

    /// Short confirmation shown after the command runs.
    pub fn confirmation(&self) -> &'static str {
        match self {
            VoiceNavCommand::Next => "Next question",
            VoiceNavCommand::Previous => "Previous question",
            VoiceNavCommand::Repeat => "Reading question again",
        }
    }
}

/// What a transcript means for the current question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoiceIntent {
    /// Select the option at this index
    Answer(usize),
    Navigate(VoiceNavCommand),
    /// Nothing matched; dropped silently
    NoMatch,
}

/// Interpret a transcript. Option matches take precedence over navigation.
pub fn interpret<S: AsRef<str>>(
    transcript: &str,
    options: &[S],
    voice_navigation: bool,
) -> VoiceIntent {
    if let Some(index) = match_transcript(transcript, options) {
        return VoiceIntent::Answer(index);
    }

    if voice_navigation {
        if let Some(command) = VoiceNavCommand::from_phrase(transcript) {
            return VoiceIntent::Navigate(command);
        }
    }

    VoiceIntent::NoMatch
}
