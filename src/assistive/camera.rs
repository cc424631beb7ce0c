//! Webcam capture for signed answers.
//!
//! The stream belongs to a [`CameraPanel`] and is released when the panel is
//! stopped or dropped, so leaving the exam always frees the device.

use super::AssistiveError;

/// An acquired video stream.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CameraStream {
    /// Provider-assigned handle
    pub id: u64,
    pub width: u32,
    pub height: u32,
}

/// A captured RGBA frame.
#[derive(Debug, Clone)]
pub struct CameraFrame {
    pub width: u32,
    pub height: u32,
    /// RGBA pixel data
    pub data: Vec<u8>,
    pub frame_number: u64,
}

impl CameraFrame {
    /// Expected data size for this frame
    pub fn expected_size(&self) -> usize {
        (self.width * self.height * 4) as usize
    }

    /// Convert to an egui image for texture upload.
    pub fn to_color_image(&self) -> egui::ColorImage {
        egui::ColorImage::from_rgba_unmultiplied(
            [self.width as usize, self.height as usize],
            &self.data,
        )
    }
}

/// A camera device.
pub trait CameraProvider {
    /// Ask for a video stream. May prompt the user for permission.
    fn request_video_stream(&mut self) -> Result<CameraStream, AssistiveError>;

    /// Latest frame for `stream`, if a new one is ready.
    fn poll_frame(&mut self, stream: &CameraStream) -> Option<CameraFrame>;

    /// Release the device behind `stream`.
    fn release(&mut self, stream: &CameraStream);
}

/// Camera capture bound to the sign-language panel.
pub struct CameraPanel {
    provider: Option<Box<dyn CameraProvider>>,
    active: Option<CameraStream>,
}

impl CameraPanel {
    pub fn new(provider: Option<Box<dyn CameraProvider>>) -> Self {
        Self {
            provider,
            active: None,
        }
    }

    pub fn is_available(&self) -> bool {
        self.provider.is_some()
    }

    pub fn active_stream(&self) -> Option<&CameraStream> {
        self.active.as_ref()
    }

    /// Acquire a stream for the preview surface.
    ///
    /// On failure the previous stream, if any, stays as it was. A repeat
    /// start while a stream is live keeps the live stream.
    pub fn start_camera(&mut self) -> Result<&CameraStream, AssistiveError> {
        let provider = self
            .provider
            .as_mut()
            .ok_or_else(|| AssistiveError::CapabilityUnavailable("Camera".to_string()))?;

        if self.active.is_none() {
            let stream = provider.request_video_stream()?;
            tracing::info!(
                "Camera stream {} started ({}x{})",
                stream.id,
                stream.width,
                stream.height
            );
            self.active = Some(stream);
        }

        self.active
            .as_ref()
            .ok_or_else(|| AssistiveError::Backend("Camera stream lost".to_string()))
    }

    /// Latest preview frame, if the camera is running.
    pub fn poll_frame(&mut self) -> Option<CameraFrame> {
        let stream = self.active.as_ref()?;
        self.provider.as_mut()?.poll_frame(stream)
    }

    /// Release the stream.
    pub fn stop(&mut self) {
        if let (Some(stream), Some(provider)) = (self.active.take(), self.provider.as_mut()) {
            provider.release(&stream);
            tracing::info!("Camera stream {} released", stream.id);
        }
    }
}

impl Drop for CameraPanel {
    fn drop(&mut self) {
        self.stop();
    }
}
