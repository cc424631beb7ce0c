//! Reusable exam UI widgets.

pub mod answer_button;
pub mod camera_preview;
pub mod mic_button;
pub mod reading_controls;
pub mod toggle_switch;

pub use answer_button::{AnswerButton, MIN_TOUCH_TARGET};
pub use camera_preview::CameraTextureManager;
pub use mic_button::{MicButton, MIC_BUTTON_SIZE};
pub use reading_controls::reading_controls;
pub use toggle_switch::ToggleSwitch;
