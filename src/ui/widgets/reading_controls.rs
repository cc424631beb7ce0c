//! Reading-mode adjustment panel.

use egui::{RichText, Ui};

use crate::accessibility::reading::{LineSpacing, MAX_FONT_SIZE, MIN_FONT_SIZE};
use crate::accessibility::ReadingStyle;

/// Font size, line spacing, tone and dyslexia-font controls.
pub fn reading_controls(ui: &mut Ui, style: &mut ReadingStyle) {
    ui.label(RichText::new("Reading Options").strong());

    let mut size = style.font_size();
    let slider = egui::Slider::new(&mut size, MIN_FONT_SIZE..=MAX_FONT_SIZE)
        .text("Font size")
        .suffix(" px");
    if ui.add(slider).changed() {
        style.set_font_size(size);
    }

    ui.horizontal(|ui| {
        ui.label("Line spacing:");
        for spacing in LineSpacing::all() {
            ui.selectable_value(&mut style.line_spacing, *spacing, spacing.label());
        }
    });

    ui.horizontal(|ui| {
        let label = format!("Background: {}", style.tone.label());
        if ui.button(label).clicked() {
            style.tone = style.tone.toggled();
        }
        ui.checkbox(&mut style.dyslexia_font, "Dyslexia-friendly font");
    });
}
