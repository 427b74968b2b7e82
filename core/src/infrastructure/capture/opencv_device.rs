use opencv::{
    prelude::*,
    videoio::{self, VideoCapture},
};

use crate::domain::capture::{
    entities::{CaptureError, RawFrame},
    ports::{MediaDevicePort, VideoDeviceHandle},
    value_objects::CaptureConstraints,
};

/// Local-camera adapter over OpenCV's videoio backend.
///
/// OpenCV reports every open failure the same way, so refusals a browser
/// would classify as permission errors surface here as `DeviceUnavailable`.
/// The facing-mode constraint has no meaning for an indexed local device and
/// is ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct OpenCvMediaDevice {
    device_index: i32,
}

impl OpenCvMediaDevice {
    pub fn new(device_index: i32) -> Self {
        Self { device_index }
    }
}

pub struct OpenCvDeviceHandle {
    capture: VideoCapture,
}

impl MediaDevicePort for OpenCvMediaDevice {
    type Handle = OpenCvDeviceHandle;

    fn is_supported(&self) -> bool {
        videoio::get_camera_backends()
            .map(|backends| !backends.is_empty())
            .unwrap_or(false)
    }

    async fn acquire(
        &self,
        constraints: CaptureConstraints,
    ) -> Result<OpenCvDeviceHandle, CaptureError> {
        let mut capture = VideoCapture::new(self.device_index, videoio::CAP_ANY)
            .map_err(|e| CaptureError::DeviceUnavailable(e.to_string()))?;

        if !capture
            .is_opened()
            .map_err(|e| CaptureError::DeviceUnavailable(e.to_string()))?
        {
            return Err(CaptureError::DeviceUnavailable(format!(
                "failed to open camera {}",
                self.device_index
            )));
        }

        // Resolution constraints are best-effort: the driver may pick the
        // nearest supported mode.
        if let Some(width) = constraints.width {
            let _ = capture.set(videoio::CAP_PROP_FRAME_WIDTH, f64::from(width));
        }
        if let Some(height) = constraints.height {
            let _ = capture.set(videoio::CAP_PROP_FRAME_HEIGHT, f64::from(height));
        }

        Ok(OpenCvDeviceHandle { capture })
    }
}

impl VideoDeviceHandle for OpenCvDeviceHandle {
    async fn sample_frame(&mut self) -> Result<RawFrame, CaptureError> {
        let mut frame = Mat::default();
        self.capture
            .read(&mut frame)
            .map_err(|e| CaptureError::DeviceUnavailable(e.to_string()))?;

        if frame.empty() {
            return Err(CaptureError::DeviceUnavailable("empty frame".to_string()));
        }

        let bgr = frame
            .data_bytes()
            .map_err(|e| CaptureError::DeviceUnavailable(e.to_string()))?;

        // OpenCV delivers BGR; swap to the RGB layout the domain expects.
        let mut rgb = bgr.to_vec();
        for pixel in rgb.chunks_exact_mut(3) {
            pixel.swap(0, 2);
        }

        Ok(RawFrame {
            width: frame.cols() as u32,
            height: frame.rows() as u32,
            data: rgb,
        })
    }

    fn release(mut self) {
        let _ = self.capture.release();
    }
}
