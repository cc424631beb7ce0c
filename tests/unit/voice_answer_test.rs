//! Spoken answer interpretation and the single-session listener.

use examaccess::accessibility::{interpret, match_transcript, VoiceIntent, VoiceNavCommand};
use examaccess::assistive::{
    AssistiveError, ListenerState, RecognitionEvent, VoiceAnswerListener,
};
use examaccess::exam::QUESTIONS;
use examaccess::storage::config::RecognitionSettings;

use crate::fakes::{FakeHost, FakeRecognizer};

fn listener(host: &FakeHost) -> VoiceAnswerListener {
    VoiceAnswerListener::new(
        Some(Box::new(FakeRecognizer {
            log: std::rc::Rc::clone(&host.recognizer),
        })),
        RecognitionSettings::default(),
    )
}

#[test]
fn test_question_one_transcripts() {
    let options = QUESTIONS[0].options;
    assert_eq!(match_transcript("queue", options), Some(1));
    assert_eq!(match_transcript("option b", options), Some(1));
    assert_eq!(match_transcript("banana", options), None);
}

#[test]
fn test_answer_beats_navigation() {
    // "back" is a navigation phrase, but "option a" matches first
    let options = ["Stack", "Queue"];
    assert_eq!(interpret("option a", &options, true), VoiceIntent::Answer(0));
    assert_eq!(
        interpret("back", &options, true),
        VoiceIntent::Navigate(VoiceNavCommand::Previous)
    );
    assert_eq!(interpret("back", &options, false), VoiceIntent::NoMatch);
}

#[test]
fn test_listener_single_session() {
    let host = FakeHost::new();
    let mut listener = listener(&host);
    assert_eq!(listener.state(), ListenerState::Idle);

    listener.start_listening().unwrap();
    assert_eq!(listener.start_listening(), Err(AssistiveError::SessionActive));
    assert_eq!(host.recognizer.borrow().starts, 1);

    host.push_events([RecognitionEvent::Started]);
    listener.poll();
    assert_eq!(listener.state(), ListenerState::Listening);
    assert!(listener.is_active());

    host.push_events([
        RecognitionEvent::Transcript("graph".to_string()),
        RecognitionEvent::Ended,
    ]);
    let events = listener.poll();
    assert_eq!(events.len(), 2);
    assert_eq!(listener.state(), ListenerState::Idle);
    assert_eq!(listener.last_transcript(), Some("graph"));

    // Session over: a new one may start
    listener.start_listening().unwrap();
    assert_eq!(host.recognizer.borrow().starts, 2);
}

#[test]
fn test_failure_ends_session() {
    let host = FakeHost::new();
    let mut listener = listener(&host);

    listener.start_listening().unwrap();
    host.push_events([RecognitionEvent::Failed(AssistiveError::Backend(
        "no-speech".to_string(),
    ))]);
    listener.poll();

    assert_eq!(listener.state(), ListenerState::Idle);
    assert!(listener.start_listening().is_ok());
}

#[test]
fn test_stop_aborts_only_active_session() {
    let host = FakeHost::new();
    let mut listener = listener(&host);

    listener.stop();
    assert_eq!(host.recognizer.borrow().aborts, 0);

    listener.start_listening().unwrap();
    listener.stop();
    assert_eq!(host.recognizer.borrow().aborts, 1);
    assert_eq!(listener.state(), ListenerState::Idle);
}

#[test]
fn test_listener_aborts_on_drop() {
    let host = FakeHost::new();
    let mut listener = listener(&host);
    listener.start_listening().unwrap();

    drop(listener);
    assert_eq!(host.recognizer.borrow().aborts, 1);
}

#[test]
fn test_events_after_stop_are_dropped() {
    let host = FakeHost::new();
    let mut listener = listener(&host);

    listener.start_listening().unwrap();
    listener.stop();
    host.push_events([
        RecognitionEvent::Started,
        RecognitionEvent::Transcript("queue".to_string()),
    ]);

    assert!(listener.poll().is_empty());
    assert_eq!(listener.state(), ListenerState::Idle);
    assert_eq!(listener.last_transcript(), None);
}

#[test]
fn test_restart_discards_leftovers() {
    let host = FakeHost::new();
    let mut listener = listener(&host);

    listener.start_listening().unwrap();
    listener.stop();
    host.push_events([RecognitionEvent::Transcript("stack".to_string())]);

    listener.start_listening().unwrap();
    host.push_events([RecognitionEvent::Started]);
    let events = listener.poll();

    assert_eq!(events, vec![RecognitionEvent::Started]);
    assert_eq!(listener.last_transcript(), None);
}
