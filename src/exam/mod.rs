//! Exam flow: question bank, session state machine, setup hand-off and the
//! controller that drives the assistive adapters.

pub mod controller;
pub mod handoff;
pub mod questions;
pub mod session;

pub use controller::ExamController;
pub use handoff::ExamHandoff;
pub use questions::{Question, QUESTIONS};
pub use session::{ExamSession, SelectionError};
