//! Setup screen: pick preferences and fine-tune support toggles.

use egui::{RichText, ScrollArea, Ui, Vec2};

use crate::exam::ExamHandoff;
use crate::preferences::{SetupState, ToggleCategory, PREFERENCES};
use crate::ui::widgets::ToggleSwitch;

const CARD_SIZE: Vec2 = Vec2::new(200.0, 72.0);

/// Setup screen UI. Keeps its state across visits to the exam.
#[derive(Debug, Default)]
pub struct SetupScreen {
    state: SetupState,
}

impl SetupScreen {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &SetupState {
        &self.state
    }

    /// Render the screen. Returns the hand-off when "Start Exam" is pressed.
    pub fn show(&mut self, ui: &mut Ui) -> Option<ExamHandoff> {
        let mut start = false;

        ScrollArea::vertical().show(ui, |ui| {
            ui.vertical_centered(|ui| {
                ui.add_space(24.0);
                ui.label(RichText::new("Exam Accessibility Setup").size(32.0).strong());
                ui.add_space(4.0);
                ui.label(
                    RichText::new("Choose how you want to take your exam")
                        .size(16.0)
                        .weak(),
                );
            });

            ui.add_space(24.0);
            self.preference_cards(ui);

            ui.add_space(24.0);
            ui.separator();
            ui.label(RichText::new("Fine-tune your support").size(20.0).strong());
            ui.add_space(8.0);
            self.toggle_sections(ui);

            ui.add_space(24.0);
            ui.vertical_centered(|ui| {
                if ui
                    .add_sized(
                        Vec2::new(280.0, 56.0),
                        egui::Button::new(RichText::new("Start Exam").size(20.0)),
                    )
                    .clicked()
                {
                    start = true;
                }
            });
            ui.add_space(24.0);
        });

        start.then(|| {
            let handoff = ExamHandoff::from_setup(&self.state);
            tracing::info!(
                "Starting exam with preferences [{}]",
                handoff.preferences.iter().collect::<Vec<_>>().join(", ")
            );
            handoff
        })
    }

    fn preference_cards(&mut self, ui: &mut Ui) {
        let mut clicked = None;

        ui.horizontal_wrapped(|ui| {
            ui.spacing_mut().item_spacing = Vec2::new(12.0, 12.0);
            for pref in PREFERENCES {
                let selected = self.state.is_preference_selected(pref.id);
                let text = RichText::new(format!("{}  {}", pref.emoji, pref.title)).size(18.0);
                let response = ui
                    .add(
                        egui::Button::new(text)
                            .selected(selected)
                            .min_size(CARD_SIZE),
                    )
                    .on_hover_text(pref.description);
                if response.clicked() {
                    clicked = Some(pref.id);
                }
            }
        });

        if let Some(id) = clicked {
            self.state.toggle_preference(id);
        }
    }

    fn toggle_sections(&mut self, ui: &mut Ui) {
        let mut flipped = None;

        for category in ToggleCategory::all() {
            egui::CollapsingHeader::new(RichText::new(category.title()).size(17.0))
                .default_open(true)
                .show(ui, |ui| {
                    for toggle in category.toggles() {
                        let enabled = self.state.toggles.is_enabled(toggle.id);
                        if ui
                            .add(ToggleSwitch::new(toggle.label, toggle.description, enabled))
                            .clicked()
                        {
                            flipped = Some(toggle.id);
                        }
                        ui.add_space(6.0);
                    }
                });
        }

        if let Some(id) = flipped {
            self.state.toggle_switch(id);
        }
    }
}
