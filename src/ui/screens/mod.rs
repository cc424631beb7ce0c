//! UI screens for the application.

pub mod exam;
pub mod setup;

pub use exam::{ExamAction, ExamScreen};
pub use setup::SetupScreen;

/// Screen navigation state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// Preference and toggle selection
    #[default]
    Setup,
    /// Question flow
    Exam,
}
