//! Answer button with a 44px minimum touch target.

use egui::{text::LayoutJob, FontId, Response, Sense, Stroke, StrokeKind, Ui, Vec2, Widget};

use crate::accessibility::ReadingStyle;
use crate::ui::theme::Theme;

/// Minimum touch target size per WCAG 2.1 guidelines (44x44 CSS pixels).
pub const MIN_TOUCH_TARGET: f32 = 44.0;

const H_PADDING: f32 = 24.0;
const ROUNDING: f32 = 12.0;

/// A full-width answer option.
pub struct AnswerButton<'a> {
    text: &'a str,
    /// Accessible label for screen readers (if different from text)
    accessible_label: Option<&'a str>,
    selected: bool,
    font_size: f32,
    padding: f32,
    theme: Theme,
    /// Reading-mode style; overrides the font family, spacing and colors
    reading: Option<&'a ReadingStyle>,
}

impl<'a> AnswerButton<'a> {
    pub fn new(text: &'a str, theme: Theme) -> Self {
        Self {
            text,
            accessible_label: None,
            selected: false,
            font_size: 16.0,
            padding: 12.0,
            theme,
            reading: None,
        }
    }

    pub fn accessible_label(mut self, label: &'a str) -> Self {
        self.accessible_label = Some(label);
        self
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    pub fn font_size(mut self, size: f32) -> Self {
        self.font_size = size;
        self
    }

    /// Vertical padding around the text.
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    pub fn reading(mut self, style: Option<&'a ReadingStyle>) -> Self {
        self.reading = style;
        self
    }
}

impl Widget for AnswerButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let Self {
            text,
            accessible_label,
            selected,
            font_size,
            padding,
            theme,
            reading,
        } = self;

        let width = ui.available_width();
        let wrap_width = (width - H_PADDING * 2.0).max(1.0);

        let text_color = if selected {
            theme.selected_text()
        } else {
            reading.map(|r| r.tone.text()).unwrap_or(theme.text())
        };

        let galley = match reading {
            Some(style) => {
                let mut format = style.text_format(font_size, false);
                format.color = text_color;
                let mut job = LayoutJob::default();
                job.append(text, 0.0, format);
                job.wrap.max_width = wrap_width;
                ui.painter().layout_job(job)
            }
            None => ui.painter().layout(
                text.to_string(),
                FontId::proportional(font_size),
                text_color,
                wrap_width,
            ),
        };

        let height = (galley.size().y + padding * 2.0).max(MIN_TOUCH_TARGET);
        let (rect, response) = ui.allocate_exact_size(Vec2::new(width, height), Sense::click());

        if ui.is_rect_visible(rect) {
            let fill = if selected {
                theme.selected_fill()
            } else if response.hovered() {
                ui.visuals().widgets.hovered.bg_fill
            } else if let Some(style) = reading {
                style.tone.background()
            } else {
                theme.card_fill()
            };

            ui.painter().rect_filled(rect, ROUNDING, fill);

            // Focus ring for keyboard users
            if response.has_focus() {
                ui.painter().rect_stroke(
                    rect,
                    ROUNDING,
                    Stroke::new(2.0, theme.text()),
                    StrokeKind::Outside,
                );
            }

            let text_pos = rect.left_top() + Vec2::new(H_PADDING, (height - galley.size().y) / 2.0);
            ui.painter().galley(text_pos, galley, text_color);
        }

        let label = accessible_label.unwrap_or(text);
        response.on_hover_text(label)
    }
}
