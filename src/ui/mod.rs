//! User interface: screens, widgets, theme and exam view composition.

pub mod composer;
pub mod screens;
pub mod theme;
pub mod widgets;

pub use composer::{compose, ExamLayout, TextScale, ViewPlan};
pub use theme::Theme;
