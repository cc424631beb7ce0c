//! Floating microphone button for spoken answers.

use egui::{Color32, Painter, Pos2, Rect, Response, Sense, Stroke, Ui, Vec2};

use crate::assistive::ListenerState;

/// Diameter of the floating button.
pub const MIC_BUTTON_SIZE: f32 = 64.0;

/// Round microphone button reflecting the listener state.
pub struct MicButton {
    state: ListenerState,
}

impl MicButton {
    pub fn new(state: ListenerState) -> Self {
        Self { state }
    }

    /// Draw the button. It stays clickable while unavailable so the press
    /// can be answered with a notice.
    pub fn show(&self, ui: &mut Ui) -> Response {
        let (rect, response) =
            ui.allocate_exact_size(Vec2::splat(MIC_BUTTON_SIZE), Sense::click());

        if ui.is_rect_visible(rect) {
            self.draw(ui, rect, response.hovered());
        }

        response.on_hover_text(self.state.to_string())
    }

    fn draw(&self, ui: &Ui, rect: Rect, hovered: bool) {
        let painter = ui.painter();
        let center = rect.center();
        let radius = rect.width() / 2.0 - 4.0;

        let (bg_color, icon_color) = self.colors();
        painter.circle_filled(center, radius, bg_color);
        if hovered && self.state == ListenerState::Idle {
            painter.circle_stroke(center, radius, Stroke::new(2.0, Color32::WHITE));
        }
        draw_microphone_icon(painter, center, radius * 0.6, icon_color);

        match self.state {
            ListenerState::Listening => {
                let time = ui.ctx().input(|i| i.time);
                let pulse = ((time * 3.0).sin() * 0.5 + 0.5) as f32;
                let pulse_color =
                    Color32::from_rgba_unmultiplied(100, 200, 100, (pulse * 120.0) as u8);
                painter.circle_stroke(center, radius + 2.0 + pulse * 3.0, Stroke::new(2.0, pulse_color));
                ui.ctx().request_repaint();
            }
            ListenerState::Starting => {
                let time = ui.ctx().input(|i| i.time);
                let angle = (time * 2.0) as f32;
                let r = radius + 3.0;
                let arc_start = Pos2::new(center.x + r * angle.cos(), center.y + r * angle.sin());
                let arc_end = Pos2::new(
                    center.x + r * (angle + 1.0).cos(),
                    center.y + r * (angle + 1.0).sin(),
                );
                painter.line_segment([arc_start, arc_end], Stroke::new(2.0, Color32::YELLOW));
                ui.ctx().request_repaint();
            }
            ListenerState::Unavailable => {
                let offset = radius * 0.45;
                let stroke = Stroke::new(2.5, Color32::from_rgb(200, 50, 50));
                painter.line_segment(
                    [
                        Pos2::new(center.x - offset, center.y - offset),
                        Pos2::new(center.x + offset, center.y + offset),
                    ],
                    stroke,
                );
                painter.line_segment(
                    [
                        Pos2::new(center.x + offset, center.y - offset),
                        Pos2::new(center.x - offset, center.y + offset),
                    ],
                    stroke,
                );
            }
            ListenerState::Idle => {}
        }
    }

    fn colors(&self) -> (Color32, Color32) {
        match self.state {
            ListenerState::Idle => (Color32::from_rgb(109, 76, 230), Color32::WHITE),
            ListenerState::Starting => (
                Color32::from_rgb(80, 80, 40),
                Color32::from_rgb(200, 200, 100),
            ),
            ListenerState::Listening => (
                Color32::from_rgb(40, 110, 40),
                Color32::from_rgb(120, 255, 120),
            ),
            ListenerState::Unavailable => (
                Color32::from_rgb(80, 40, 40),
                Color32::from_rgb(150, 100, 100),
            ),
        }
    }
}

fn draw_microphone_icon(painter: &Painter, center: Pos2, size: f32, color: Color32) {
    let mic_width = size * 0.45;
    let mic_height = size * 0.8;

    let mic_rect = Rect::from_center_size(
        Pos2::new(center.x, center.y - size * 0.2),
        Vec2::new(mic_width, mic_height),
    );
    painter.rect_filled(mic_rect, mic_width / 2.0, color);

    // Stand
    let stand_top = mic_rect.bottom() + size * 0.1;
    let stand_bottom = center.y + size * 0.55;
    painter.line_segment(
        [Pos2::new(center.x, stand_top), Pos2::new(center.x, stand_bottom)],
        Stroke::new(2.0, color),
    );

    // Base
    painter.line_segment(
        [
            Pos2::new(center.x - size * 0.3, stand_bottom),
            Pos2::new(center.x + size * 0.3, stand_bottom),
        ],
        Stroke::new(2.0, color),
    );
}
