//! On/off switch row for an accessibility toggle.

use egui::{Align, Color32, Layout, Pos2, Response, RichText, Sense, Ui, Vec2, Widget};

const TRACK_SIZE: Vec2 = Vec2::new(48.0, 24.0);

/// Label, description and a switch. Clicking the switch reports `clicked()`.
pub struct ToggleSwitch<'a> {
    label: &'a str,
    description: &'a str,
    enabled: bool,
}

impl<'a> ToggleSwitch<'a> {
    pub fn new(label: &'a str, description: &'a str, enabled: bool) -> Self {
        Self {
            label,
            description,
            enabled,
        }
    }
}

impl Widget for ToggleSwitch<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            label,
            description,
            enabled,
        } = self;

        ui.horizontal(|ui| {
            ui.vertical(|ui| {
                ui.label(RichText::new(label).strong());
                ui.label(RichText::new(description).small().weak());
            });

            ui.with_layout(Layout::right_to_left(Align::Center), |ui| {
                let (rect, response) = ui.allocate_exact_size(TRACK_SIZE, Sense::click());

                if ui.is_rect_visible(rect) {
                    let t = ui.ctx().animate_bool(response.id, enabled);
                    let track = if enabled {
                        ui.visuals().selection.stroke.color
                    } else {
                        ui.visuals().widgets.inactive.bg_fill
                    };
                    let painter = ui.painter();
                    painter.rect_filled(rect, rect.height() / 2.0, track);

                    let radius = rect.height() / 2.0 - 2.0;
                    let x = egui::lerp(
                        (rect.left() + radius + 2.0)..=(rect.right() - radius - 2.0),
                        t,
                    );
                    painter.circle_filled(Pos2::new(x, rect.center().y), radius, Color32::WHITE);
                }

                let state = if enabled { "on" } else { "off" };
                response.on_hover_text(format!("{}: {}", label, state))
            })
            .inner
        })
        .inner
    }
}
