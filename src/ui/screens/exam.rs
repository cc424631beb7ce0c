//! Exam screen.
//!
//! Each frame: run the controller, build the view plan from the current
//! modes, then draw either the standard column or the split layout with the
//! sign-language panel on the right.

use egui::{Align, Align2, Color32, Frame, Layout, RichText, ScrollArea, Ui, Vec2};

use crate::accessibility::{option_letter, ReadingStyle};
use crate::assistive::notice::NOTICE_TTL;
use crate::assistive::{HostCapabilities, NoticeLevel};
use crate::exam::{ExamController, ExamHandoff};
use crate::storage::config::{AppConfig, AssetSettings};
use crate::ui::composer::{compose, ExamLayout, ViewPlan};
use crate::ui::theme::Theme;
use crate::ui::widgets::{
    reading_controls, AnswerButton, CameraTextureManager, MicButton, MIN_TOUCH_TARGET,
};

const CAMERA_PREVIEW_SIZE: Vec2 = Vec2::new(320.0, 240.0);

/// Navigation requested by the exam screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExamAction {
    BackToSetup,
}

/// Exam screen UI.
pub struct ExamScreen {
    controller: ExamController,
    reading: ReadingStyle,
    camera_texture: CameraTextureManager,
    assets: AssetSettings,
}

impl ExamScreen {
    pub fn new(handoff: ExamHandoff, capabilities: HostCapabilities, config: &AppConfig) -> Self {
        Self {
            controller: ExamController::new(handoff, capabilities, config),
            reading: ReadingStyle::default(),
            camera_texture: CameraTextureManager::new(),
            assets: config.assets.clone(),
        }
    }

    pub fn controller(&self) -> &ExamController {
        &self.controller
    }

    /// View plan for the current question.
    pub fn plan(&self) -> ViewPlan {
        let question = self.controller.session().current_question();
        compose(&self.controller.modes(), question.id, &self.assets)
    }

    /// Render the screen.
    pub fn show(&mut self, ui: &mut Ui, base_theme: Theme) -> Option<ExamAction> {
        self.controller.tick();
        self.controller.notices_mut().expire(NOTICE_TTL);
        if let Some(frame) = self.controller.poll_camera_frame() {
            self.camera_texture.update_frame(ui.ctx(), &frame);
        }

        let plan = self.plan();
        let theme = plan.theme_override.unwrap_or(base_theme);
        let mut action = None;

        ui.horizontal(|ui| {
            if ui.button("⬅ Back to setup").clicked() {
                action = Some(ExamAction::BackToSetup);
            }
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                ui.label(RichText::new(self.controller.session().progress_label()).weak());
            });
        });
        ui.separator();

        self.notices(ui, theme);

        match plan.layout {
            ExamLayout::Standard => {
                ScrollArea::vertical().show(ui, |ui| {
                    self.question_column(ui, &plan, theme);
                });
            }
            ExamLayout::Split => {
                ui.columns(2, |columns| {
                    ScrollArea::vertical()
                        .id_salt("question_column")
                        .show(&mut columns[0], |ui| {
                            self.question_column(ui, &plan, theme);
                        });
                    self.sign_panel(&mut columns[1], &plan);
                });
            }
        }

        if plan.microphone {
            self.microphone(ui);
        }

        action
    }

    fn notices(&self, ui: &mut Ui, theme: Theme) {
        for notice in self.controller.notices().iter() {
            let color = match notice.level {
                NoticeLevel::Info => theme.text(),
                NoticeLevel::Error => theme.error(),
            };
            ui.label(RichText::new(&notice.message).color(color));
        }
    }

    fn question_column(&mut self, ui: &mut Ui, plan: &ViewPlan, theme: Theme) {
        let question = self.controller.session().current_question();
        let text = self.controller.session().display_text().to_owned();
        let selected = self
            .controller
            .session()
            .selected_option()
            .map(str::to_owned);

        if plan.reading_panel {
            Frame::group(ui.style()).show(ui, |ui| {
                reading_controls(ui, &mut self.reading);
            });
            ui.add_space(12.0);
        }

        // Question
        if plan.reading_panel {
            let mut job = egui::text::LayoutJob::default();
            job.append(&text, 0.0, plan.reading_question_format(&self.reading));
            job.wrap.max_width = ui.available_width();
            Frame::new()
                .fill(self.reading.tone.background())
                .inner_margin(16.0)
                .corner_radius(12.0)
                .show(ui, |ui| {
                    ui.label(job);
                });
        } else {
            let mut rich = RichText::new(&text).size(plan.text.question);
            if plan.bold_question {
                rich = rich.strong();
            }
            ui.label(rich);
        }

        ui.add_space(8.0);
        ui.horizontal(|ui| {
            if plan.simplify_action
                && ui
                    .button("Simplify")
                    .on_hover_text("Rewrite the question in plain language")
                    .clicked()
            {
                self.controller.simplify();
            }
            if self.controller.narrator().is_available()
                && ui.button("🔊 Read aloud").clicked()
            {
                self.controller.replay();
            }
        });

        ui.add_space(16.0);

        // Options
        let reading = plan.reading_panel.then_some(&self.reading);
        let option_size = match reading {
            Some(style) => plan.reading_text_size(style),
            None => plan.text.option,
        };
        let mut clicked = None;
        for (i, option) in question.options.iter().enumerate() {
            let label = match option_letter(i) {
                Some(letter) => format!("{}. {}", letter.to_ascii_uppercase(), option),
                None => option.to_string(),
            };
            let response = ui.add(
                AnswerButton::new(&label, theme)
                    .accessible_label(option)
                    .selected(selected.as_deref() == Some(*option))
                    .font_size(option_size)
                    .padding(plan.text.option_padding)
                    .reading(reading),
            );
            if response.clicked() {
                clicked = Some(*option);
            }
            ui.add_space(8.0);
        }
        if let Some(option) = clicked {
            self.controller.select_option(option);
        }

        if plan.captions {
            self.caption_strip(ui);
        }

        ui.add_space(16.0);
        self.navigation(ui);
    }

    fn caption_strip(&self, ui: &mut Ui) {
        let narrated = self.controller.narrator().last_spoken();
        let heard = self.controller.listener().last_transcript();
        if narrated.is_none() && heard.is_none() {
            return;
        }

        ui.add_space(8.0);
        Frame::new()
            .fill(Color32::from_black_alpha(200))
            .inner_margin(10.0)
            .corner_radius(8.0)
            .show(ui, |ui| {
                if let Some(text) = narrated {
                    ui.label(RichText::new(format!("CC: {}", text)).color(Color32::WHITE));
                }
                if let Some(text) = heard {
                    ui.label(
                        RichText::new(format!("Heard: \"{}\"", text))
                            .color(Color32::from_gray(200)),
                    );
                }
            });
    }

    fn navigation(&mut self, ui: &mut Ui) {
        let is_first = self.controller.session().is_first();
        let is_last = self.controller.session().is_last();
        let button_size = Vec2::new(140.0, MIN_TOUCH_TARGET);

        ui.horizontal(|ui| {
            if ui
                .add_enabled(!is_first, egui::Button::new("◀ Previous").min_size(button_size))
                .clicked()
            {
                self.controller.prev();
            }
            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                if ui
                    .add_enabled(!is_last, egui::Button::new("Next ▶").min_size(button_size))
                    .clicked()
                {
                    self.controller.next();
                }
            });
        });
    }

    fn sign_panel(&mut self, ui: &mut Ui, plan: &ViewPlan) {
        ui.label(RichText::new("Sign Language").size(20.0).strong());
        ui.add_space(8.0);

        if let Some(path) = &plan.sign_video {
            Frame::group(ui.style()).show(ui, |ui| {
                ui.set_min_height(180.0);
                ui.vertical_centered(|ui| {
                    ui.add_space(60.0);
                    ui.label(RichText::new("▶ Sign video").size(18.0));
                    ui.label(RichText::new(path).monospace().weak());
                });
            });
        }

        ui.add_space(16.0);
        ui.label(RichText::new("Answer in sign language").strong());
        self.camera_texture.show(ui, CAMERA_PREVIEW_SIZE);

        ui.add_space(8.0);
        let live = self.controller.camera().active_stream().is_some();
        if !live && ui.button("📷 Start Webcam Answer").clicked() {
            self.controller.start_camera();
        }
        if live {
            ui.label(RichText::new("● Recording").color(Color32::from_rgb(220, 60, 60)));
        }
    }

    fn microphone(&mut self, ui: &mut Ui) {
        let state = self.controller.listener().state();
        let clicked = egui::Area::new(egui::Id::new("exam_microphone"))
            .anchor(Align2::RIGHT_BOTTOM, Vec2::new(-24.0, -24.0))
            .show(ui.ctx(), |ui| MicButton::new(state).show(ui).clicked())
            .inner;

        if clicked {
            self.controller.start_listening();
        }
    }

    /// Release adapters when leaving the exam.
    pub fn close(&mut self) {
        self.controller.shutdown();
        self.camera_texture.clear();
    }
}
