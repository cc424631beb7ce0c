//! End-to-end exam scenarios driven through the controller with fake
//! capability providers.

use examaccess::assistive::{AssistiveError, ListenerState, NoticeLevel, RecognitionEvent};
use examaccess::exam::{ExamController, ExamHandoff, QUESTIONS};
use examaccess::storage::config::AppConfig;
use examaccess::ui::{compose, ExamLayout, TextScale};

use crate::fakes::{stream, FakeHost};

fn controller(json: &str, host: &FakeHost) -> ExamController {
    let handoff = ExamHandoff::from_json(json).unwrap();
    ExamController::new(handoff, host.capabilities(), &AppConfig::default())
}

fn error_messages(controller: &ExamController) -> Vec<String> {
    controller
        .notices()
        .iter()
        .filter(|n| n.level == NoticeLevel::Error)
        .map(|n| n.message.clone())
        .collect()
}

#[test]
fn test_sign_and_listening_scenario() {
    let host = FakeHost::new();
    let mut exam = controller(
        r#"{"toggles":{"sign-video":true},"preferences":["listening"]}"#,
        &host,
    );

    let plan = compose(&exam.modes(), exam.session().current_question().id, &AppConfig::default().assets);
    assert_eq!(plan.layout, ExamLayout::Split);
    assert_eq!(plan.sign_video.as_deref(), Some("/sign-videos/q1.mp4"));

    // Several frames on the same question narrate it once
    exam.tick();
    exam.tick();
    exam.tick();
    assert_eq!(host.spoken(), vec![QUESTIONS[0].text.to_string()]);
}

#[test]
fn test_navigation_narrates_each_question_once() {
    let host = FakeHost::new();
    let mut exam = controller(r#"{"preferences":["listening"]}"#, &host);

    exam.tick();
    exam.next();
    exam.tick();
    exam.tick();

    assert_eq!(
        host.spoken(),
        vec![QUESTIONS[0].text.to_string(), QUESTIONS[1].text.to_string()]
    );
    // Navigation cancels in-flight speech before the next utterance
    assert!(host.speech.borrow().cancels >= 2);
}

#[test]
fn test_no_narration_without_listening() {
    let host = FakeHost::new();
    let mut exam = controller(r#"{"toggles":{"captions":true}}"#, &host);

    exam.tick();
    exam.next();
    exam.tick();

    assert!(host.spoken().is_empty());
}

#[test]
fn test_replay_reads_options() {
    let host = FakeHost::new();
    let mut exam = controller("{}", &host);

    exam.replay();

    let spoken = host.spoken();
    assert_eq!(spoken.len(), 1);
    assert!(spoken[0].starts_with(QUESTIONS[0].text));
    assert!(spoken[0].contains("Option B: Queue."));
}

#[test]
fn test_simplify_reverts_on_navigation() {
    let host = FakeHost::new();
    let mut exam = controller(r#"{"preferences":["simplified"]}"#, &host);

    assert!(exam.modes().simplified);
    exam.simplify();
    assert_eq!(
        exam.session().display_text(),
        "Which one uses first in, first out?"
    );

    exam.next();
    exam.prev();
    assert_eq!(exam.session().display_text(), QUESTIONS[0].text);
}

#[test]
fn test_large_text_without_reading_panel() {
    let host = FakeHost::new();
    let exam = controller(r#"{"toggles":{"extra-large-text":true}}"#, &host);

    let plan = compose(&exam.modes(), 1, &AppConfig::default().assets);
    assert_eq!(plan.text, TextScale::LARGE);
    assert!(!plan.reading_panel);
    assert_eq!(plan.layout, ExamLayout::Standard);
}

#[test]
fn test_spoken_answer_selects_option() {
    let host = FakeHost::new();
    let mut exam = controller(r#"{"toggles":{"voice-answers":true}}"#, &host);
    assert!(exam.modes().voice);

    exam.start_listening();
    assert_eq!(host.recognizer.borrow().starts, 1);
    assert_eq!(exam.listener().state(), ListenerState::Starting);

    host.push_events([
        RecognitionEvent::Started,
        RecognitionEvent::Transcript("queue".to_string()),
        RecognitionEvent::Ended,
    ]);
    exam.tick();

    assert_eq!(exam.session().selected_option(), Some("Queue"));
    assert_eq!(exam.listener().state(), ListenerState::Idle);
    assert_eq!(exam.listener().last_transcript(), Some("queue"));
}

#[test]
fn test_unmatched_transcript_keeps_selection() {
    let host = FakeHost::new();
    let mut exam = controller(r#"{"toggles":{"voice-answers":true}}"#, &host);

    exam.select_option("Stack");
    exam.start_listening();
    host.push_events([
        RecognitionEvent::Transcript("banana".to_string()),
        RecognitionEvent::Ended,
    ]);
    exam.tick();

    assert_eq!(exam.session().selected_option(), Some("Stack"));
    assert!(error_messages(&exam).is_empty());
}

#[test]
fn test_double_start_is_rejected() {
    let host = FakeHost::new();
    let mut exam = controller(r#"{"toggles":{"voice-answers":true}}"#, &host);

    exam.start_listening();
    exam.start_listening();

    assert_eq!(host.recognizer.borrow().starts, 1);
    assert_eq!(
        error_messages(&exam),
        vec![AssistiveError::SessionActive.to_string()]
    );
}

#[test]
fn test_navigation_aborts_recognition() {
    let host = FakeHost::new();
    let mut exam = controller(r#"{"toggles":{"voice-answers":true}}"#, &host);

    exam.start_listening();
    exam.next();

    assert_eq!(host.recognizer.borrow().aborts, 1);
    assert_eq!(exam.listener().state(), ListenerState::Idle);

    // Listening can start again on the new question
    exam.start_listening();
    assert_eq!(host.recognizer.borrow().starts, 2);
}

#[test]
fn test_recognition_failure_becomes_notice() {
    let host = FakeHost::new();
    let mut exam = controller(r#"{"toggles":{"voice-answers":true}}"#, &host);

    host.recognizer.borrow_mut().fail_start =
        Some(AssistiveError::PermissionDenied("microphone".to_string()));
    exam.start_listening();

    assert_eq!(exam.listener().state(), ListenerState::Idle);
    assert_eq!(
        error_messages(&exam),
        vec!["Permission denied: microphone".to_string()]
    );
}

#[test]
fn test_voice_navigation_commands() {
    let host = FakeHost::new();
    let mut exam = controller(
        r#"{"toggles":{"voice-answers":true,"voice-nav":true}}"#,
        &host,
    );

    exam.start_listening();
    host.push_events([
        RecognitionEvent::Transcript("next question".to_string()),
        RecognitionEvent::Ended,
    ]);
    exam.tick();

    assert_eq!(exam.session().current_index(), 1);
    assert!(exam
        .notices()
        .iter()
        .any(|n| n.level == NoticeLevel::Info && n.message == "Next question"));
}

#[test]
fn test_navigation_phrase_ignored_without_voice_nav() {
    let host = FakeHost::new();
    let mut exam = controller(r#"{"toggles":{"voice-answers":true}}"#, &host);

    exam.start_listening();
    host.push_events([RecognitionEvent::Transcript("next".to_string())]);
    exam.tick();

    assert_eq!(exam.session().current_index(), 0);
}

#[test]
fn test_camera_failure_keeps_previous_state() {
    let host = FakeHost::new();
    let mut exam = controller(r#"{"toggles":{"dual-language":true}}"#, &host);

    // Denied: nothing acquired, user is told
    exam.start_camera();
    assert!(exam.camera().active_stream().is_none());
    assert_eq!(
        error_messages(&exam),
        vec!["Permission denied: camera".to_string()]
    );

    // Granted, then a repeat press keeps the live stream
    host.camera.borrow_mut().outcomes.push_back(Ok(stream(7)));
    exam.start_camera();
    exam.start_camera();
    assert_eq!(exam.camera().active_stream().map(|s| s.id), Some(7));
    assert_eq!(host.camera.borrow().requests, 2);
}

#[test]
fn test_camera_released_when_exam_ends() {
    let host = FakeHost::new();
    let mut exam = controller(r#"{"toggles":{"sign-video":true}}"#, &host);

    host.camera.borrow_mut().outcomes.push_back(Ok(stream(3)));
    exam.start_camera();
    assert!(host.camera.borrow().released.is_empty());

    drop(exam);
    assert_eq!(host.camera.borrow().released, vec![3]);
}

#[test]
fn test_missing_capabilities_surface_notices() {
    let handoff = ExamHandoff::from_json(
        r#"{"toggles":{"voice-answers":true,"sign-video":true},"preferences":["listening"]}"#,
    )
    .unwrap();
    let mut exam = ExamController::new(
        handoff,
        examaccess::assistive::HostCapabilities::none(),
        &AppConfig::default(),
    );

    exam.tick();
    exam.start_listening();
    exam.start_camera();

    assert_eq!(exam.listener().state(), ListenerState::Unavailable);
    assert_eq!(
        error_messages(&exam),
        vec![
            "Speech synthesis is not available on this system".to_string(),
            "Speech recognition is not available on this system".to_string(),
            "Camera is not available on this system".to_string(),
        ]
    );
}

#[test]
fn test_aborted_session_cannot_answer_next_question() {
    let host = FakeHost::new();
    let mut exam = controller(r#"{"toggles":{"voice-answers":true}}"#, &host);

    exam.start_listening();
    host.push_events([
        RecognitionEvent::Started,
        RecognitionEvent::Transcript("option b".to_string()),
    ]);
    exam.next();
    exam.tick();

    assert_eq!(exam.session().current_index(), 1);
    assert_eq!(exam.session().selected_option(), None);
    assert_eq!(exam.listener().state(), ListenerState::Idle);

    // The microphone is free again on the new question
    exam.start_listening();
    assert_eq!(host.recognizer.borrow().starts, 2);
    assert!(error_messages(&exam).is_empty());
}
