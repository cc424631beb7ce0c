//! Exam session navigation and answer selection.

use examaccess::exam::{ExamSession, SelectionError, QUESTIONS};

#[test]
fn test_walk_forward_and_back() {
    let mut session = ExamSession::new();
    assert!(session.is_first());
    assert_eq!(session.progress_label(), "Question 1 of 5");

    while session.next() {}
    assert!(session.is_last());
    assert_eq!(session.current_index(), QUESTIONS.len() - 1);
    assert_eq!(session.progress_label(), "Question 5 of 5");

    // Past the end is a no-op
    assert!(!session.next());
    assert_eq!(session.current_index(), QUESTIONS.len() - 1);

    while session.prev() {}
    assert_eq!(session.current_index(), 0);
    assert!(!session.prev());
}

#[test]
fn test_navigation_clears_selection() {
    let mut session = ExamSession::new();
    session.select_option("Queue").unwrap();
    assert_eq!(session.selected_option(), Some("Queue"));

    session.next();
    assert_eq!(session.selected_option(), None);

    session.prev();
    assert_eq!(session.selected_option(), None);
}

#[test]
fn test_blocked_navigation_keeps_selection() {
    let mut session = ExamSession::new();
    session.select_option("Stack").unwrap();

    assert!(!session.prev());
    assert_eq!(session.selected_option(), Some("Stack"));
}

#[test]
fn test_invalid_option_rejected() {
    let mut session = ExamSession::new();
    session.select_option("Graph").unwrap();

    let err = session.select_option("Linked List").unwrap_err();
    assert_eq!(
        err,
        SelectionError::InvalidOption {
            option: "Linked List".to_string(),
            question_id: 1,
        }
    );
    assert_eq!(session.selected_option(), Some("Graph"));
}

#[test]
fn test_select_by_index() {
    let mut session = ExamSession::new();
    session.select_index(2).unwrap();
    assert_eq!(session.selected_option(), Some("Binary Tree"));
    assert!(session.select_index(9).is_err());
    assert_eq!(session.selected_option(), Some("Binary Tree"));
}

#[test]
fn test_simplified_text_until_navigation() {
    let mut session = ExamSession::new();
    session.set_simplified_text("Plain".to_string());
    assert_eq!(session.display_text(), "Plain");

    session.next();
    assert_eq!(session.simplified_text(), None);
    assert_eq!(session.display_text(), QUESTIONS[1].text);
}

#[test]
fn test_question_ids_are_sequential() {
    for (index, question) in QUESTIONS.iter().enumerate() {
        assert_eq!(question.id as usize, index + 1);
        assert!(!question.options.is_empty());
    }
}
