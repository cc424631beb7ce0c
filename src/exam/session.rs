//! Exam flow state machine.
//!
//! Walks a fixed question list. Moving between questions clears the selected
//! answer and any simplified text. Stepping past either end is a no-op.

use super::questions::{Question, QUESTIONS};

/// Rejected answer selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SelectionError {
    #[error("\"{option}\" is not an option for question {question_id}")]
    InvalidOption { option: String, question_id: u32 },
}

/// Per-question state for one exam sitting.
#[derive(Debug, Clone)]
pub struct ExamSession {
    questions: &'static [Question],
    current_index: usize,
    selected_option: Option<String>,
    /// Simplified question text, shown until the next navigation
    simplified_text: Option<String>,
}

impl Default for ExamSession {
    fn default() -> Self {
        Self::new()
    }
}

impl ExamSession {
    /// Start at the first question of the built-in bank.
    pub fn new() -> Self {
        Self::with_questions(QUESTIONS)
    }

    /// Start at the first question of `questions`. The list must not be empty.
    pub fn with_questions(questions: &'static [Question]) -> Self {
        assert!(!questions.is_empty(), "exam needs at least one question");
        Self {
            questions,
            current_index: 0,
            selected_option: None,
            simplified_text: None,
        }
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn current_question(&self) -> &'static Question {
        &self.questions[self.current_index]
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn is_first(&self) -> bool {
        self.current_index == 0
    }

    pub fn is_last(&self) -> bool {
        self.current_index + 1 == self.questions.len()
    }

    pub fn selected_option(&self) -> Option<&str> {
        self.selected_option.as_deref()
    }

    /// "Question 2 of 5"
    pub fn progress_label(&self) -> String {
        format!(
            "Question {} of {}",
            self.current_index + 1,
            self.questions.len()
        )
    }

    /// Move to the next question. Returns `true` if the index changed.
    pub fn next(&mut self) -> bool {
        if self.is_last() {
            return false;
        }
        self.current_index += 1;
        self.clear_question_state();
        tracing::info!("Moved to question {}", self.current_question().id);
        true
    }

    /// Move to the previous question. Returns `true` if the index changed.
    pub fn prev(&mut self) -> bool {
        if self.is_first() {
            return false;
        }
        self.current_index -= 1;
        self.clear_question_state();
        tracing::info!("Moved back to question {}", self.current_question().id);
        true
    }

    /// Select an answer for the current question.
    ///
    /// Values outside the current option set are rejected and leave the
    /// existing selection untouched.
    pub fn select_option(&mut self, option: &str) -> Result<(), SelectionError> {
        let question = self.current_question();
        if !question.has_option(option) {
            tracing::warn!(
                "Ignoring option {:?} for question {}: not in option set",
                option,
                question.id
            );
            return Err(SelectionError::InvalidOption {
                option: option.to_string(),
                question_id: question.id,
            });
        }

        tracing::debug!("Selected {:?} for question {}", option, question.id);
        self.selected_option = Some(option.to_string());
        Ok(())
    }

    /// Select the option at `index` of the current question.
    pub fn select_index(&mut self, index: usize) -> Result<(), SelectionError> {
        match self.current_question().options.get(index) {
            Some(option) => self.select_option(option),
            None => Err(SelectionError::InvalidOption {
                option: format!("#{}", index),
                question_id: self.current_question().id,
            }),
        }
    }

    /// Replace the displayed question text until the next navigation.
    pub fn set_simplified_text(&mut self, text: String) {
        self.simplified_text = Some(text);
    }

    pub fn simplified_text(&self) -> Option<&str> {
        self.simplified_text.as_deref()
    }

    /// Text to show for the current question.
    pub fn display_text(&self) -> &str {
        self.simplified_text
            .as_deref()
            .unwrap_or(self.current_question().text)
    }

    fn clear_question_state(&mut self) {
        self.selected_option = None;
        self.simplified_text = None;
    }
}
