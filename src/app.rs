//! Main application state and egui integration.

use eframe::egui;

use examaccess::assistive::HostCapabilities;
use examaccess::exam::ExamHandoff;
use examaccess::storage::config::AppConfig;
use examaccess::ui::screens::{ExamAction, ExamScreen, Screen, SetupScreen};
use examaccess::ui::theme::Theme;

/// Main application state.
pub struct ExamAccessApp {
    /// Current screen
    current_screen: Screen,
    /// Theme picked in the top bar
    theme: Theme,
    /// Theme currently installed on the context (may be forced by the exam)
    applied_theme: Theme,
    /// Application configuration
    config: AppConfig,
    /// Setup screen state, kept while an exam runs
    setup_screen: SetupScreen,
    /// Live exam, if one was started
    exam_screen: Option<ExamScreen>,
}

impl ExamAccessApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        let config = match examaccess::storage::config::load_config() {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!("Failed to load config, using defaults: {}", e);
                AppConfig::default()
            }
        };

        let theme = Theme::Dark;
        cc.egui_ctx.set_visuals(theme.visuals());
        cc.egui_ctx.set_zoom_factor(config.ui.font_scale);

        Self {
            current_screen: Screen::Setup,
            theme,
            applied_theme: theme,
            config,
            setup_screen: SetupScreen::new(),
            exam_screen: None,
        }
    }

    /// Navigate to a different screen.
    fn navigate(&mut self, screen: Screen) {
        tracing::debug!("Navigating from {:?} to {:?}", self.current_screen, screen);
        self.current_screen = screen;
    }

    fn start_exam(&mut self, handoff: ExamHandoff) {
        let capabilities = HostCapabilities::detect();
        self.exam_screen = Some(ExamScreen::new(handoff, capabilities, &self.config));
        self.navigate(Screen::Exam);
    }

    /// Leave the exam and release its adapters.
    fn end_exam(&mut self) {
        if let Some(mut exam) = self.exam_screen.take() {
            exam.close();
        }
        self.navigate(Screen::Setup);
    }

    /// Theme for this frame: the exam may force high contrast.
    fn effective_theme(&self) -> Theme {
        match (&self.current_screen, &self.exam_screen) {
            (Screen::Exam, Some(exam)) => exam.plan().theme_override.unwrap_or(self.theme),
            _ => self.theme,
        }
    }

    fn apply_theme(&mut self, ctx: &egui::Context) {
        let theme = self.effective_theme();
        if theme != self.applied_theme {
            tracing::debug!("Theme {:?} -> {:?}", self.applied_theme, theme);
            ctx.set_visuals(theme.visuals());
            self.applied_theme = theme;
        }
    }
}

impl eframe::App for ExamAccessApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.apply_theme(ctx);

        // Adapter events arrive between frames
        if self.current_screen == Screen::Exam {
            ctx.request_repaint_after(std::time::Duration::from_millis(100));
        }

        if ctx.input(|i| i.key_pressed(egui::Key::Escape)) && self.current_screen == Screen::Exam
        {
            self.end_exam();
        }

        // Top panel
        egui::TopBottomPanel::top("top_panel").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("ExamAccess");

                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let forced = self.applied_theme == Theme::HighContrast;
                    let theme_icon = match self.theme {
                        Theme::Dark | Theme::HighContrast => "🌙",
                        Theme::Light => "☀",
                    };
                    let response = ui.add_enabled(!forced, egui::Button::new(theme_icon));
                    if response.clicked() {
                        self.theme = self.theme.toggled();
                    }
                    if forced {
                        ui.label(egui::RichText::new("High contrast").weak());
                    }
                });
            });
        });

        // Status bar at bottom
        egui::TopBottomPanel::bottom("status_bar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.label(format!("v{}", env!("CARGO_PKG_VERSION")));
                ui.separator();
                match &self.exam_screen {
                    Some(exam) if self.current_screen == Screen::Exam => {
                        let controller = exam.controller();
                        ui.label(controller.session().progress_label());
                        ui.separator();
                        ui.label(controller.listener().state().to_string());
                    }
                    _ => {
                        let enabled = self.setup_screen.state().toggles.enabled_ids().count();
                        ui.label(format!("{} supports enabled", enabled));
                    }
                }
            });
        });

        // Main content area
        egui::CentralPanel::default().show(ctx, |ui| match self.current_screen {
            Screen::Setup => {
                if let Some(handoff) = self.setup_screen.show(ui) {
                    self.start_exam(handoff);
                }
            }
            Screen::Exam => {
                let base = self.theme;
                let action = match self.exam_screen.as_mut() {
                    Some(exam) => exam.show(ui, base),
                    None => Some(ExamAction::BackToSetup),
                };
                if action == Some(ExamAction::BackToSetup) {
                    self.end_exam();
                }
            }
        });
    }
}
