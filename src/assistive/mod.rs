//! Assistive I/O adapters.
//!
//! Speech synthesis, speech recognition and camera capture, each behind a
//! small provider trait. A provider may be absent; every failure is turned
//! into a user-visible [`Notice`] instead of stopping the exam.
//!
//! - `speech`: text-to-speech with cancel-before-speak
//! - `recognition`: single-shot spoken answers
//! - `camera`: webcam stream for signed answers, released on drop

pub mod camera;
pub mod notice;
pub mod recognition;
pub mod speech;

use thiserror::Error;

pub use camera::{CameraFrame, CameraPanel, CameraProvider, CameraStream};
pub use notice::{Notice, NoticeBoard, NoticeLevel};
pub use recognition::{
    ListenerState, RecognitionEvent, SpeechRecognizer, VoiceAnswerListener,
};
pub use speech::{Narrator, SpeechSynthesizer, TtsSynthesizer};

/// Errors raised by assistive capabilities.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AssistiveError {
    #[error("{0} is not available on this system")]
    CapabilityUnavailable(String),

    #[error("Permission denied: {0}")]
    PermissionDenied(String),

    #[error("{0}")]
    Backend(String),

    #[error("Already listening for an answer")]
    SessionActive,
}

/// Providers detected on the host at start-up.
pub struct HostCapabilities {
    pub synthesizer: Option<Box<dyn SpeechSynthesizer>>,
    pub recognizer: Option<Box<dyn SpeechRecognizer>>,
    pub camera: Option<Box<dyn CameraProvider>>,
}

impl HostCapabilities {
    /// Detect what the host offers. Anything that fails to initialise is left out.
    pub fn detect() -> Self {
        let synthesizer: Option<Box<dyn SpeechSynthesizer>> = match TtsSynthesizer::new() {
            Ok(tts) => Some(Box::new(tts)),
            Err(e) => {
                tracing::warn!("Speech synthesis unavailable: {}", e);
                None
            }
        };

        // No native recognizer or camera backend ships with the app
        tracing::info!("Speech recognition and camera capture: no host provider");

        Self {
            synthesizer,
            recognizer: None,
            camera: None,
        }
    }

    /// No capabilities at all.
    pub fn none() -> Self {
        Self {
            synthesizer: None,
            recognizer: None,
            camera: None,
        }
    }
}
