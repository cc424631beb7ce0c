//! Text-to-speech narration.
//!
//! At most one utterance plays at a time: every `speak` cancels whatever is
//! in flight first.

use super::AssistiveError;
use crate::storage::config::SpeechSettings;

/// A speech synthesis engine.
pub trait SpeechSynthesizer {
    /// Start speaking `text`. Returns once the utterance is queued.
    fn speak(&mut self, text: &str, settings: &SpeechSettings) -> Result<(), AssistiveError>;

    /// Stop all queued and playing speech.
    fn cancel_all(&mut self);

    /// Whether an utterance is currently playing.
    fn is_speaking(&self) -> bool;
}

/// Native speech synthesis through the `tts` crate.
pub struct TtsSynthesizer {
    tts: tts::Tts,
}

impl TtsSynthesizer {
    /// Open the platform speech engine.
    pub fn new() -> Result<Self, AssistiveError> {
        tracing::info!("Initializing TTS engine");
        let tts = tts::Tts::default()
            .map_err(|e| AssistiveError::CapabilityUnavailable(format!("Speech synthesis ({})", e)))?;
        Ok(Self { tts })
    }

    /// Map a 1.0-is-normal multiplier onto the engine's range.
    fn scaled(normal: f32, min: f32, max: f32, multiplier: f32) -> f32 {
        (normal * multiplier).clamp(min, max)
    }
}

impl SpeechSynthesizer for TtsSynthesizer {
    fn speak(&mut self, text: &str, settings: &SpeechSettings) -> Result<(), AssistiveError> {
        if text.is_empty() {
            return Ok(());
        }

        let features = self.tts.supported_features();
        if features.rate {
            let rate = Self::scaled(
                self.tts.normal_rate(),
                self.tts.min_rate(),
                self.tts.max_rate(),
                settings.rate,
            );
            self.tts
                .set_rate(rate)
                .map_err(|e| AssistiveError::Backend(e.to_string()))?;
        }
        if features.pitch {
            let pitch = Self::scaled(
                self.tts.normal_pitch(),
                self.tts.min_pitch(),
                self.tts.max_pitch(),
                settings.pitch,
            );
            self.tts
                .set_pitch(pitch)
                .map_err(|e| AssistiveError::Backend(e.to_string()))?;
        }

        tracing::debug!("TTS speaking ({}): {}", settings.lang, text);
        self.tts
            .speak(text, true)
            .map_err(|e| AssistiveError::Backend(e.to_string()))?;
        Ok(())
    }

    fn cancel_all(&mut self) {
        if !self.tts.supported_features().stop {
            return;
        }
        if let Err(e) = self.tts.stop() {
            tracing::warn!("Failed to stop speech: {}", e);
        }
    }

    fn is_speaking(&self) -> bool {
        self.tts.supported_features().is_speaking && self.tts.is_speaking().unwrap_or(false)
    }
}

/// Question narrator wrapping an optional synthesizer.
pub struct Narrator {
    synthesizer: Option<Box<dyn SpeechSynthesizer>>,
    settings: SpeechSettings,
    /// Question index last handled by [`Narrator::on_question_shown`]
    shown_index: Option<usize>,
    last_spoken: Option<String>,
}

impl Narrator {
    pub fn new(synthesizer: Option<Box<dyn SpeechSynthesizer>>, settings: SpeechSettings) -> Self {
        Self {
            synthesizer,
            settings,
            shown_index: None,
            last_spoken: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.synthesizer.is_some()
    }

    /// Text of the most recent utterance, for captions.
    pub fn last_spoken(&self) -> Option<&str> {
        self.last_spoken.as_deref()
    }

    /// Cancel anything in flight, then speak `text`.
    pub fn speak(&mut self, text: &str) -> Result<(), AssistiveError> {
        let synthesizer = self
            .synthesizer
            .as_mut()
            .ok_or_else(|| AssistiveError::CapabilityUnavailable("Speech synthesis".to_string()))?;

        synthesizer.cancel_all();
        synthesizer.speak(text, &self.settings)?;
        self.last_spoken = Some(text.to_string());
        Ok(())
    }

    /// Stop speaking.
    pub fn cancel(&mut self) {
        if let Some(synthesizer) = self.synthesizer.as_mut() {
            synthesizer.cancel_all();
        }
    }

    /// Called every frame with the visible question.
    ///
    /// When the index differs from the last call, in-flight speech is
    /// cancelled and, if `listening` is on, `text` is spoken. Repeated calls
    /// for the same index do nothing, so each question is read once per visit.
    pub fn on_question_shown(
        &mut self,
        index: usize,
        text: &str,
        listening: bool,
    ) -> Result<(), AssistiveError> {
        if self.shown_index == Some(index) {
            return Ok(());
        }
        self.shown_index = Some(index);
        self.cancel();

        if !listening {
            return Ok(());
        }
        tracing::info!("Narrating question {}", index + 1);
        self.speak(text)
    }

    /// Stop speaking and forget the last narrated question.
    pub fn reset(&mut self) {
        self.cancel();
        self.shown_index = None;
        self.last_spoken = None;
    }
}

impl Drop for Narrator {
    fn drop(&mut self) {
        self.cancel();
    }
}
