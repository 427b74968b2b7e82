use std::future::Future;

use crate::domain::capture::{
    entities::{CaptureError, RawFrame},
    value_objects::CaptureConstraints,
};

/// Live device handle. Exclusively owned by the capture session that
/// acquired it; releasing consumes the handle.
pub trait VideoDeviceHandle: Send {
    /// Samples the current preview frame, suspending until one is ready.
    fn sample_frame(&mut self) -> impl Future<Output = Result<RawFrame, CaptureError>> + Send;

    /// Releases the underlying device.
    fn release(self);
}

/// Constraint-based device acquisition boundary.
pub trait MediaDevicePort: Send + Sync {
    type Handle: VideoDeviceHandle;

    /// Whether the capture API exists at all in this runtime.
    fn is_supported(&self) -> bool;

    /// Acquires a device matching `constraints` and waits for its preview to
    /// become ready. Failures arrive already classified as [`CaptureError`].
    fn acquire(
        &self,
        constraints: CaptureConstraints,
    ) -> impl Future<Output = Result<Self::Handle, CaptureError>> + Send;
}
