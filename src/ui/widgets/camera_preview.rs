//! Webcam preview texture.

use egui::{load::SizedTexture, Color32, Sense, TextureHandle, TextureOptions, Ui, Vec2};

use crate::assistive::CameraFrame;

/// Keeps the latest camera frame uploaded as an egui texture.
pub struct CameraTextureManager {
    texture_handle: Option<TextureHandle>,
    last_frame_number: u64,
}

impl CameraTextureManager {
    pub fn new() -> Self {
        Self {
            texture_handle: None,
            last_frame_number: 0,
        }
    }

    /// Upload `frame` unless it is the one already shown.
    /// Returns true if the texture changed.
    pub fn update_frame(&mut self, ctx: &egui::Context, frame: &CameraFrame) -> bool {
        if self.last_frame_number == frame.frame_number && self.texture_handle.is_some() {
            return false;
        }

        if frame.data.len() != frame.expected_size() {
            tracing::warn!(
                "Dropping camera frame {}: {} bytes, expected {}",
                frame.frame_number,
                frame.data.len(),
                frame.expected_size()
            );
            return false;
        }

        let image = frame.to_color_image();
        if let Some(ref mut handle) = self.texture_handle {
            handle.set(image, TextureOptions::LINEAR);
        } else {
            self.texture_handle = Some(ctx.load_texture("camera_frame", image, TextureOptions::LINEAR));
        }

        self.last_frame_number = frame.frame_number;
        true
    }

    pub fn clear(&mut self) {
        self.texture_handle = None;
        self.last_frame_number = 0;
    }

    pub fn is_loaded(&self) -> bool {
        self.texture_handle.is_some()
    }

    /// Draw the preview, or a placeholder when no frame has arrived.
    pub fn show(&self, ui: &mut Ui, size: Vec2) {
        match &self.texture_handle {
            Some(handle) => {
                ui.add(egui::Image::new(SizedTexture::new(handle.id(), size)));
            }
            None => {
                let (rect, _) = ui.allocate_exact_size(size, Sense::hover());
                ui.painter().rect_filled(rect, 8.0, Color32::from_gray(20));
                ui.painter().text(
                    rect.center(),
                    egui::Align2::CENTER_CENTER,
                    "Camera off",
                    egui::FontId::proportional(14.0),
                    Color32::from_gray(160),
                );
            }
        }
    }
}

impl Default for CameraTextureManager {
    fn default() -> Self {
        Self::new()
    }
}
