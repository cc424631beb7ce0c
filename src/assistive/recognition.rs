//! Spoken answers via speech recognition.
//!
//! Sessions are single-shot: one start yields at most one transcript and then
//! ends. Results arrive asynchronously and are polled once per frame.

use super::AssistiveError;
use crate::storage::config::RecognitionSettings;

/// Events emitted by a recognition session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecognitionEvent {
    /// Microphone opened
    Started,
    /// Final transcript for the utterance
    Transcript(String),
    /// Session closed
    Ended,
    /// Session failed (permission, device, engine)
    Failed(AssistiveError),
}

/// A speech recognition engine.
pub trait SpeechRecognizer {
    /// Begin a session with the given settings.
    fn start(&mut self, settings: &RecognitionSettings) -> Result<(), AssistiveError>;

    /// Abandon the current session without a result.
    fn abort(&mut self);

    /// Next pending event, if any.
    fn poll_event(&mut self) -> Option<RecognitionEvent>;
}

/// Listener state as shown on the microphone control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListenerState {
    #[default]
    Idle,
    /// Start requested, waiting for the engine
    Starting,
    Listening,
    /// No recognizer on this host
    Unavailable,
}

impl std::fmt::Display for ListenerState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListenerState::Idle => write!(f, "Tap to answer by voice"),
            ListenerState::Starting => write!(f, "Starting..."),
            ListenerState::Listening => write!(f, "Listening..."),
            ListenerState::Unavailable => write!(f, "Voice answers unavailable"),
        }
    }
}

/// Guards a recognizer so only one session runs at a time.
pub struct VoiceAnswerListener {
    recognizer: Option<Box<dyn SpeechRecognizer>>,
    settings: RecognitionSettings,
    state: ListenerState,
    last_transcript: Option<String>,
}

impl VoiceAnswerListener {
    pub fn new(recognizer: Option<Box<dyn SpeechRecognizer>>, settings: RecognitionSettings) -> Self {
        let state = if recognizer.is_some() {
            ListenerState::Idle
        } else {
            ListenerState::Unavailable
        };
        Self {
            recognizer,
            settings,
            state,
            last_transcript: None,
        }
    }

    pub fn state(&self) -> ListenerState {
        self.state
    }

    pub fn is_active(&self) -> bool {
        matches!(self.state, ListenerState::Starting | ListenerState::Listening)
    }

    /// Most recent transcript, for captions.
    pub fn last_transcript(&self) -> Option<&str> {
        self.last_transcript.as_deref()
    }

    /// Start a single-shot session.
    ///
    /// Fails immediately if no recognizer exists or a session is running.
    pub fn start_listening(&mut self) -> Result<(), AssistiveError> {
        let recognizer = self.recognizer.as_mut().ok_or_else(|| {
            AssistiveError::CapabilityUnavailable("Speech recognition".to_string())
        })?;

        if matches!(self.state, ListenerState::Starting | ListenerState::Listening) {
            return Err(AssistiveError::SessionActive);
        }

        // Anything still queued belongs to an aborted session
        while let Some(event) = recognizer.poll_event() {
            tracing::debug!("Discarding stale recognition event {:?}", event);
        }

        recognizer.start(&self.settings)?;
        self.state = ListenerState::Starting;
        tracing::info!("Listening for a spoken answer ({})", self.settings.lang);
        Ok(())
    }

    /// Abort the running session, if any.
    pub fn stop(&mut self) {
        if !self.is_active() {
            return;
        }
        if let Some(recognizer) = self.recognizer.as_mut() {
            recognizer.abort();
        }
        self.state = ListenerState::Idle;
        tracing::debug!("Recognition session aborted");
    }

    /// Drain pending events, updating listener state.
    ///
    /// Events that arrive while no session is running are dropped, so a
    /// session aborted by navigation cannot answer the next question.
    pub fn poll(&mut self) -> Vec<RecognitionEvent> {
        let mut events = Vec::new();
        let Some(recognizer) = self.recognizer.as_mut() else {
            return events;
        };

        while let Some(event) = recognizer.poll_event() {
            if !matches!(self.state, ListenerState::Starting | ListenerState::Listening) {
                tracing::debug!("Dropping recognition event after stop: {:?}", event);
                continue;
            }
            match &event {
                RecognitionEvent::Started => self.state = ListenerState::Listening,
                RecognitionEvent::Transcript(text) => {
                    tracing::debug!("Heard: {:?}", text);
                    self.last_transcript = Some(text.clone());
                }
                RecognitionEvent::Ended | RecognitionEvent::Failed(_) => {
                    self.state = ListenerState::Idle;
                }
            }
            events.push(event);
        }
        events
    }
}

impl Drop for VoiceAnswerListener {
    fn drop(&mut self) {
        self.stop();
    }
}
