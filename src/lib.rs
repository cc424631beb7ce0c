//! ExamAccess - accessibility-configurable exam application
//!
//! Test takers pick accessibility preferences and fine-tune support toggles
//! on a setup screen; the exam screen then adapts its layout, text styling
//! and input modality (speech synthesis, spoken answers, webcam capture for
//! signed answers) to the resolved modes.

pub mod accessibility;
pub mod assistive;
pub mod exam;
pub mod preferences;
pub mod storage;
pub mod ui;

// Re-export commonly used types
pub use accessibility::modes::{resolve_modes, ResolvedModes};
pub use exam::{ExamController, ExamHandoff, ExamSession};
pub use preferences::{SetupState, ToggleState};
pub use storage::config::AppConfig;
