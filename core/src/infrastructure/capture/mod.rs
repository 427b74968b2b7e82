#[cfg(feature = "opencv-capture")]
pub mod opencv_device;

#[cfg(feature = "opencv-capture")]
pub use opencv_device::OpenCvMediaDevice;
