//! Scripted capability providers for exam tests.

use std::cell::RefCell;
use std::collections::VecDeque;
use std::rc::Rc;

use examaccess::assistive::{
    AssistiveError, CameraFrame, CameraProvider, CameraStream, HostCapabilities,
    RecognitionEvent, SpeechRecognizer, SpeechSynthesizer,
};
use examaccess::storage::config::{RecognitionSettings, SpeechSettings};

#[derive(Debug, Default)]
pub struct SpeechLog {
    pub spoken: Vec<String>,
    pub cancels: usize,
}

pub struct FakeSynthesizer {
    pub log: Rc<RefCell<SpeechLog>>,
}

impl SpeechSynthesizer for FakeSynthesizer {
    fn speak(&mut self, text: &str, _settings: &SpeechSettings) -> Result<(), AssistiveError> {
        self.log.borrow_mut().spoken.push(text.to_string());
        Ok(())
    }

    fn cancel_all(&mut self) {
        self.log.borrow_mut().cancels += 1;
    }

    fn is_speaking(&self) -> bool {
        false
    }
}

#[derive(Debug, Default)]
pub struct RecognizerLog {
    pub starts: usize,
    pub aborts: usize,
    pub pending: VecDeque<RecognitionEvent>,
    /// Returned by the next `start` instead of succeeding
    pub fail_start: Option<AssistiveError>,
}

pub struct FakeRecognizer {
    pub log: Rc<RefCell<RecognizerLog>>,
}

impl SpeechRecognizer for FakeRecognizer {
    fn start(&mut self, _settings: &RecognitionSettings) -> Result<(), AssistiveError> {
        let mut log = self.log.borrow_mut();
        if let Some(err) = log.fail_start.take() {
            return Err(err);
        }
        log.starts += 1;
        Ok(())
    }

    fn abort(&mut self) {
        self.log.borrow_mut().aborts += 1;
    }

    fn poll_event(&mut self) -> Option<RecognitionEvent> {
        self.log.borrow_mut().pending.pop_front()
    }
}

#[derive(Debug, Default)]
pub struct CameraLog {
    pub requests: usize,
    pub released: Vec<u64>,
    /// Outcomes for successive stream requests; empty means denied
    pub outcomes: VecDeque<Result<CameraStream, AssistiveError>>,
    pub frame: Option<CameraFrame>,
}

pub struct FakeCamera {
    pub log: Rc<RefCell<CameraLog>>,
}

impl CameraProvider for FakeCamera {
    fn request_video_stream(&mut self) -> Result<CameraStream, AssistiveError> {
        let mut log = self.log.borrow_mut();
        log.requests += 1;
        log.outcomes
            .pop_front()
            .unwrap_or_else(|| Err(AssistiveError::PermissionDenied("camera".to_string())))
    }

    fn poll_frame(&mut self, _stream: &CameraStream) -> Option<CameraFrame> {
        self.log.borrow_mut().frame.take()
    }

    fn release(&mut self, stream: &CameraStream) {
        self.log.borrow_mut().released.push(stream.id);
    }
}

/// Shared logs for one fake host.
#[derive(Default)]
pub struct FakeHost {
    pub speech: Rc<RefCell<SpeechLog>>,
    pub recognizer: Rc<RefCell<RecognizerLog>>,
    pub camera: Rc<RefCell<CameraLog>>,
}

impl FakeHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Capabilities backed by this host's logs.
    pub fn capabilities(&self) -> HostCapabilities {
        HostCapabilities {
            synthesizer: Some(Box::new(FakeSynthesizer {
                log: Rc::clone(&self.speech),
            })),
            recognizer: Some(Box::new(FakeRecognizer {
                log: Rc::clone(&self.recognizer),
            })),
            camera: Some(Box::new(FakeCamera {
                log: Rc::clone(&self.camera),
            })),
        }
    }

    pub fn spoken(&self) -> Vec<String> {
        self.speech.borrow().spoken.clone()
    }

    pub fn push_events(&self, events: impl IntoIterator<Item = RecognitionEvent>) {
        self.recognizer.borrow_mut().pending.extend(events);
    }
}

pub fn stream(id: u64) -> CameraStream {
    CameraStream {
        id,
        width: 640,
        height: 480,
    }
}
