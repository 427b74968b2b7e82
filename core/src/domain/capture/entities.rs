use thiserror::Error;

/// Lifecycle of one device-acquisition attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Idle,
    Starting,
    Active,
    Failed,
}

/// Closed classification of capture failures, performed once at the device
/// boundary and never re-inspected by string matching downstream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CaptureError {
    #[error("Camera access was denied")]
    PermissionDenied,

    #[error("No usable camera device: {0}")]
    DeviceUnavailable(String),

    #[error("Media capture is not supported on this platform")]
    Unsupported,
}

/// Raw frame as sampled from the device, tightly packed RGB8.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawFrame {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

/// Still image produced by a capture, ready to attach to an analysis request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CapturedImage {
    pub data: Vec<u8>,
    pub mime_type: String,
    pub width: u32,
    pub height: u32,
}
