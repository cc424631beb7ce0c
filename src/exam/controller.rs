//! Exam screen controller.
//!
//! Owns the session and the assistive adapters for one exam sitting and
//! applies the per-frame rules: narrate on question change, turn transcripts
//! into answers, and surface adapter failures as notices.

use crate::accessibility::{interpret, simplify_text, ResolvedModes, VoiceIntent, VoiceNavCommand};
use crate::assistive::{
    CameraFrame, CameraPanel, HostCapabilities, Narrator, NoticeBoard,
    RecognitionEvent, VoiceAnswerListener,
};
use crate::storage::config::AppConfig;

use super::handoff::ExamHandoff;
use super::session::ExamSession;

/// State and adapters behind the exam screen.
pub struct ExamController {
    handoff: ExamHandoff,
    session: ExamSession,
    narrator: Narrator,
    listener: VoiceAnswerListener,
    camera: CameraPanel,
    notices: NoticeBoard,
}

impl ExamController {
    pub fn new(handoff: ExamHandoff, capabilities: HostCapabilities, config: &AppConfig) -> Self {
        let HostCapabilities {
            synthesizer,
            recognizer,
            camera,
        } = capabilities;

        tracing::info!(
            "Exam started with {} toggles on, preferences [{}]",
            handoff.toggles.enabled_ids().count(),
            handoff.preferences.iter().collect::<Vec<_>>().join(", ")
        );

        Self {
            handoff,
            session: ExamSession::new(),
            narrator: Narrator::new(synthesizer, config.speech.clone()),
            listener: VoiceAnswerListener::new(recognizer, config.recognition.clone()),
            camera: CameraPanel::new(camera),
            notices: NoticeBoard::new(),
        }
    }

    /// Modes for the current frame. Always derived, never cached.
    pub fn modes(&self) -> ResolvedModes {
        self.handoff.modes()
    }

    pub fn handoff(&self) -> &ExamHandoff {
        &self.handoff
    }

    pub fn session(&self) -> &ExamSession {
        &self.session
    }

    pub fn notices(&self) -> &NoticeBoard {
        &self.notices
    }

    pub fn notices_mut(&mut self) -> &mut NoticeBoard {
        &mut self.notices
    }

    pub fn listener(&self) -> &VoiceAnswerListener {
        &self.listener
    }

    pub fn narrator(&self) -> &Narrator {
        &self.narrator
    }

    pub fn camera(&self) -> &CameraPanel {
        &self.camera
    }

    /// Run once per frame before rendering.
    pub fn tick(&mut self) {
        let modes = self.modes();

        for event in self.listener.poll() {
            self.handle_recognition_event(event, &modes);
        }

        let question = self.session.current_question();
        if let Err(e) =
            self.narrator
                .on_question_shown(self.session.current_index(), question.text, modes.listening)
        {
            self.notices.error(&e);
        }
    }

    pub fn next(&mut self) {
        if self.session.next() {
            self.on_question_changed();
        }
    }

    pub fn prev(&mut self) {
        if self.session.prev() {
            self.on_question_changed();
        }
    }

    fn on_question_changed(&mut self) {
        self.narrator.cancel();
        self.listener.stop();
    }

    /// Click on an answer.
    pub fn select_option(&mut self, option: &str) {
        // Rejections are logged by the session and otherwise ignored
        let _ = self.session.select_option(option);
    }

    /// Replace the question text with its plain-language rewrite.
    pub fn simplify(&mut self) {
        let simplified = simplify_text(self.session.current_question().text);
        self.session.set_simplified_text(simplified);
    }

    /// Read the current question and its options aloud.
    pub fn replay(&mut self) {
        let narration = self.session.current_question().narration();
        if let Err(e) = self.narrator.speak(&narration) {
            self.notices.error(&e);
        }
    }

    /// Microphone button.
    pub fn start_listening(&mut self) {
        if let Err(e) = self.listener.start_listening() {
            self.notices.error(&e);
        }
    }

    /// "Start Webcam Answer" button.
    pub fn start_camera(&mut self) {
        if let Err(e) = self.camera.start_camera() {
            self.notices.error(&e);
        }
    }

    pub fn poll_camera_frame(&mut self) -> Option<CameraFrame> {
        self.camera.poll_frame()
    }

    /// Release every adapter. Called when leaving the exam.
    pub fn shutdown(&mut self) {
        self.narrator.reset();
        self.listener.stop();
        self.camera.stop();
        tracing::info!("Exam adapters released");
    }

    fn handle_recognition_event(&mut self, event: RecognitionEvent, modes: &ResolvedModes) {
        match event {
            RecognitionEvent::Transcript(transcript) => {
                let question = self.session.current_question();
                match interpret(&transcript, question.options, modes.voice_navigation) {
                    VoiceIntent::Answer(index) => {
                        let _ = self.session.select_index(index);
                    }
                    VoiceIntent::Navigate(command) => {
                        match command {
                            VoiceNavCommand::Next => self.next(),
                            VoiceNavCommand::Previous => self.prev(),
                            VoiceNavCommand::Repeat => self.replay(),
                        }
                        self.notices.info(command.confirmation());
                    }
                    VoiceIntent::NoMatch => {
                        tracing::debug!("No option matched {:?}", transcript);
                    }
                }
            }
            RecognitionEvent::Failed(e) => self.notices.error(&e),
            RecognitionEvent::Started | RecognitionEvent::Ended => {}
        }
    }
}

impl Drop for ExamController {
    fn drop(&mut self) {
        self.shutdown();
    }
}
