use std::sync::{Arc, Mutex, MutexGuard};

use image::codecs::jpeg::JpegEncoder;

use crate::domain::{
    capture::{
        entities::{CaptureError, CapturedImage, SessionStatus},
        ports::{MediaDevicePort, VideoDeviceHandle},
        value_objects::CaptureConstraints,
    },
    common::CaptureConfig,
};

struct SessionState<H> {
    status: SessionStatus,
    handle: Option<H>,
    last_error: Option<CaptureError>,
    // Bumped by every stop(); lets an in-flight start or capture detect that
    // the session moved on while it was suspended.
    generation: u64,
}

/// Owns the single video device handle for the scanner view.
///
/// At most one device handle exists per session: a `start` that arrives while
/// another is in flight, or while the session is already live, is a silent
/// no-op. All methods are cooperative async; internal critical sections are
/// synchronous and never held across an await, so a `stop` issued while a
/// `start` is suspended in acquisition still gets the device released once
/// acquisition completes.
pub struct CaptureManager<P>
where
    P: MediaDevicePort,
{
    port: Arc<P>,
    config: CaptureConfig,
    state: Arc<Mutex<SessionState<P::Handle>>>,
}

impl<P> Clone for CaptureManager<P>
where
    P: MediaDevicePort,
{
    fn clone(&self) -> Self {
        Self {
            port: Arc::clone(&self.port),
            config: self.config.clone(),
            state: Arc::clone(&self.state),
        }
    }
}

impl<P> CaptureManager<P>
where
    P: MediaDevicePort,
{
    pub fn new(port: P, config: CaptureConfig) -> Self {
        Self {
            port: Arc::new(port),
            config,
            state: Arc::new(Mutex::new(SessionState {
                status: SessionStatus::Idle,
                handle: None,
                last_error: None,
                generation: 0,
            })),
        }
    }

    pub fn status(&self) -> SessionStatus {
        self.lock().status
    }

    pub fn last_error(&self) -> Option<CaptureError> {
        self.lock().last_error.clone()
    }

    /// Requests device access and transitions the session to `Active`.
    ///
    /// A high-resolution acquisition failure is retried once with a minimal
    /// constraint set before the session is declared `Failed`. Permission
    /// refusals and an absent capture API fail immediately.
    pub async fn start(&self) -> Result<(), CaptureError> {
        let generation = {
            let mut state = self.lock();
            // Idempotent guard: never a second handle.
            if matches!(state.status, SessionStatus::Starting | SessionStatus::Active) {
                return Ok(());
            }
            if !self.port.is_supported() {
                state.status = SessionStatus::Failed;
                state.last_error = Some(CaptureError::Unsupported);
                return Err(CaptureError::Unsupported);
            }
            state.status = SessionStatus::Starting;
            state.last_error = None;
            state.generation
        };

        let handle = match self.acquire_with_fallback().await {
            Ok(handle) => handle,
            Err(err) => {
                let mut state = self.lock();
                if state.generation == generation {
                    state.status = SessionStatus::Failed;
                    state.last_error = Some(err.clone());
                }
                return Err(err);
            }
        };

        let stale = {
            let mut state = self.lock();
            if state.generation == generation {
                state.handle = Some(handle);
                state.status = SessionStatus::Active;
                None
            } else {
                Some(handle)
            }
        };

        // A stop() arrived while acquisition was suspended: the session has
        // moved on, so release the freshly acquired device rather than
        // orphaning it.
        if let Some(handle) = stale {
            handle.release();
        }
        Ok(())
    }

    /// Samples the live preview into a JPEG still at the configured quality.
    ///
    /// Valid only while the session is `Active`; callers guard via
    /// [`CaptureManager::status`].
    pub async fn capture_frame(&self) -> Result<CapturedImage, CaptureError> {
        let (mut handle, generation) = {
            let mut state = self.lock();
            if state.status != SessionStatus::Active {
                return Err(CaptureError::DeviceUnavailable(
                    "no active capture session".to_string(),
                ));
            }
            let Some(handle) = state.handle.take() else {
                return Err(CaptureError::DeviceUnavailable(
                    "no active capture session".to_string(),
                ));
            };
            (handle, state.generation)
        };

        let sampled = handle.sample_frame().await;

        // Put the handle back unless the session was stopped meanwhile.
        let stale = {
            let mut state = self.lock();
            if state.generation == generation {
                state.handle = Some(handle);
                None
            } else {
                Some(handle)
            }
        };
        if let Some(handle) = stale {
            handle.release();
        }

        let frame = sampled?;

        let mut jpeg = Vec::new();
        let mut encoder = JpegEncoder::new_with_quality(&mut jpeg, self.config.jpeg_quality);
        encoder
            .encode(
                &frame.data,
                frame.width,
                frame.height,
                image::ExtendedColorType::Rgb8,
            )
            .map_err(|e| {
                tracing::error!("Failed to encode captured frame: {}", e);
                CaptureError::DeviceUnavailable(e.to_string())
            })?;

        Ok(CapturedImage {
            data: jpeg,
            mime_type: "image/jpeg".to_string(),
            width: frame.width,
            height: frame.height,
        })
    }

    /// Releases the device handle and resets the session to `Idle`.
    ///
    /// Safe to call from any state, any number of times; invoked on every
    /// exit path so no handle ever leaks.
    pub fn stop(&self) {
        let handle = {
            let mut state = self.lock();
            state.generation += 1;
            state.status = SessionStatus::Idle;
            state.last_error = None;
            state.handle.take()
        };
        if let Some(handle) = handle {
            handle.release();
        }
    }

    /// Manual retry: tear down first so `start` runs with a clean handle.
    pub async fn retry(&self) -> Result<(), CaptureError> {
        self.stop();
        self.start().await
    }

    async fn acquire_with_fallback(&self) -> Result<P::Handle, CaptureError> {
        let preferred = CaptureConstraints::preferred(
            self.config.preferred_width,
            self.config.preferred_height,
        );
        match self.port.acquire(preferred).await {
            Ok(handle) => Ok(handle),
            Err(CaptureError::DeviceUnavailable(_)) => {
                self.port.acquire(CaptureConstraints::fallback()).await
            }
            Err(err) => Err(err),
        }
    }

    fn lock(&self) -> MutexGuard<'_, SessionState<P::Handle>> {
        self.state.lock().expect("capture session state poisoned")
    }
}

#[cfg(test)]
mod tests {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use tokio::sync::Notify;

    use super::*;
    use crate::domain::capture::entities::RawFrame;

    fn test_frame() -> RawFrame {
        RawFrame {
            width: 2,
            height: 2,
            data: vec![0u8; 12],
        }
    }

    struct FakeHandle {
        released: Arc<AtomicUsize>,
    }

    impl VideoDeviceHandle for FakeHandle {
        async fn sample_frame(&mut self) -> Result<RawFrame, CaptureError> {
            Ok(test_frame())
        }

        fn release(self) {
            self.released.fetch_add(1, Ordering::SeqCst);
        }
    }

    struct FakePort {
        supported: bool,
        // Scripted outcome per acquisition attempt, consumed front to back.
        // An exhausted script succeeds.
        script: Mutex<VecDeque<Result<(), CaptureError>>>,
        seen: Mutex<Vec<CaptureConstraints>>,
        released: Arc<AtomicUsize>,
        gate: Option<Arc<Notify>>,
    }

    impl FakePort {
        fn ok() -> Self {
            Self::scripted(vec![])
        }

        fn scripted(script: Vec<Result<(), CaptureError>>) -> Self {
            Self {
                supported: true,
                script: Mutex::new(script.into()),
                seen: Mutex::new(Vec::new()),
                released: Arc::new(AtomicUsize::new(0)),
                gate: None,
            }
        }

        fn unsupported() -> Self {
            Self {
                supported: false,
                ..Self::ok()
            }
        }

        fn gated(gate: Arc<Notify>) -> Self {
            Self {
                gate: Some(gate),
                ..Self::ok()
            }
        }

        fn seen(&self) -> Vec<CaptureConstraints> {
            self.seen.lock().unwrap().clone()
        }

        fn released(&self) -> usize {
            self.released.load(Ordering::SeqCst)
        }
    }

    impl MediaDevicePort for FakePort {
        type Handle = FakeHandle;

        fn is_supported(&self) -> bool {
            self.supported
        }

        async fn acquire(
            &self,
            constraints: CaptureConstraints,
        ) -> Result<FakeHandle, CaptureError> {
            self.seen.lock().unwrap().push(constraints);
            if let Some(gate) = &self.gate {
                gate.notified().await;
            }
            let next = self.script.lock().unwrap().pop_front().unwrap_or(Ok(()));
            next.map(|_| FakeHandle {
                released: Arc::clone(&self.released),
            })
        }
    }

    fn manager(port: FakePort) -> CaptureManager<FakePort> {
        CaptureManager::new(port, CaptureConfig::default())
    }

    #[tokio::test]
    async fn start_transitions_to_active() {
        let manager = manager(FakePort::ok());

        manager.start().await.unwrap();

        assert_eq!(manager.status(), SessionStatus::Active);
        assert_eq!(manager.last_error(), None);
        assert_eq!(manager.port.seen().len(), 1);
    }

    #[tokio::test]
    async fn start_while_active_is_a_no_op() {
        let manager = manager(FakePort::ok());

        manager.start().await.unwrap();
        manager.start().await.unwrap();

        assert_eq!(manager.port.seen().len(), 1);
        assert_eq!(manager.port.released(), 0);
    }

    #[tokio::test]
    async fn start_while_a_start_is_in_flight_is_dropped() {
        let gate = Arc::new(Notify::new());
        let manager = manager(FakePort::gated(Arc::clone(&gate)));

        let pending = tokio::spawn({
            let manager = manager.clone();
            async move { manager.start().await }
        });
        tokio::task::yield_now().await;
        assert_eq!(manager.status(), SessionStatus::Starting);

        // Second start must not reach the device.
        manager.start().await.unwrap();

        gate.notify_one();
        pending.await.unwrap().unwrap();

        assert_eq!(manager.status(), SessionStatus::Active);
        assert_eq!(manager.port.seen().len(), 1);
    }

    #[tokio::test]
    async fn stop_during_suspended_start_releases_the_handle() {
        let gate = Arc::new(Notify::new());
        let manager = manager(FakePort::gated(Arc::clone(&gate)));

        let pending = tokio::spawn({
            let manager = manager.clone();
            async move { manager.start().await }
        });
        tokio::task::yield_now().await;

        manager.stop();
        gate.notify_one();
        pending.await.unwrap().unwrap();

        assert_eq!(manager.status(), SessionStatus::Idle);
        assert_eq!(manager.port.released(), 1);
        assert!(manager.lock().handle.is_none());
    }

    #[tokio::test]
    async fn permission_refusal_fails_without_a_fallback_attempt() {
        let manager = manager(FakePort::scripted(vec![Err(
            CaptureError::PermissionDenied,
        )]));

        let err = manager.start().await.unwrap_err();

        assert_eq!(err, CaptureError::PermissionDenied);
        assert_eq!(manager.status(), SessionStatus::Failed);
        assert_eq!(manager.last_error(), Some(CaptureError::PermissionDenied));
        assert_eq!(manager.port.seen().len(), 1);
    }

    #[tokio::test]
    async fn quality_failure_falls_back_to_minimal_constraints() {
        let manager = manager(FakePort::scripted(vec![Err(
            CaptureError::DeviceUnavailable("resolution not supported".into()),
        )]));

        manager.start().await.unwrap();

        let seen = manager.port.seen();
        assert_eq!(seen.len(), 2);
        assert!(seen[0].width.is_some() && seen[0].height.is_some());
        assert!(seen[1].width.is_none() && seen[1].height.is_none());
        assert_eq!(manager.status(), SessionStatus::Active);
    }

    #[tokio::test]
    async fn both_acquisition_tiers_failing_marks_the_session_failed() {
        let manager = manager(FakePort::scripted(vec![
            Err(CaptureError::DeviceUnavailable("busy".into())),
            Err(CaptureError::DeviceUnavailable("busy".into())),
        ]));

        let err = manager.start().await.unwrap_err();

        assert!(matches!(err, CaptureError::DeviceUnavailable(_)));
        assert_eq!(manager.status(), SessionStatus::Failed);
    }

    #[tokio::test]
    async fn unsupported_runtime_fails_without_touching_the_device() {
        let manager = manager(FakePort::unsupported());

        let err = manager.start().await.unwrap_err();

        assert_eq!(err, CaptureError::Unsupported);
        assert_eq!(manager.status(), SessionStatus::Failed);
        assert!(manager.port.seen().is_empty());
    }

    #[tokio::test]
    async fn stop_is_idempotent() {
        let manager = manager(FakePort::ok());

        manager.start().await.unwrap();
        manager.stop();
        manager.stop();
        manager.stop();

        assert_eq!(manager.status(), SessionStatus::Idle);
        assert_eq!(manager.port.released(), 1);
    }

    #[tokio::test]
    async fn stop_without_a_session_is_a_no_op() {
        let manager = manager(FakePort::ok());

        manager.stop();

        assert_eq!(manager.status(), SessionStatus::Idle);
        assert_eq!(manager.port.released(), 0);
    }

    #[tokio::test]
    async fn capture_frame_outside_active_is_an_error() {
        let manager = manager(FakePort::ok());

        let err = manager.capture_frame().await.unwrap_err();

        assert!(matches!(err, CaptureError::DeviceUnavailable(_)));
    }

    #[tokio::test]
    async fn capture_frame_encodes_a_jpeg_still() {
        let manager = manager(FakePort::ok());
        manager.start().await.unwrap();

        let image = manager.capture_frame().await.unwrap();

        assert_eq!(image.mime_type, "image/jpeg");
        assert_eq!((image.width, image.height), (2, 2));
        assert_eq!(&image.data[..2], &[0xFF, 0xD8]);
        // Session stays live for further captures until the caller stops it.
        assert_eq!(manager.status(), SessionStatus::Active);

        manager.stop();
        assert_eq!(manager.port.released(), 1);
    }

    #[tokio::test]
    async fn retry_after_permission_failure_re_requests_access() {
        let manager = manager(FakePort::scripted(vec![Err(
            CaptureError::PermissionDenied,
        )]));

        assert!(manager.start().await.is_err());
        assert_eq!(manager.status(), SessionStatus::Failed);

        manager.retry().await.unwrap();

        assert_eq!(manager.status(), SessionStatus::Active);
        assert_eq!(manager.last_error(), None);
        assert_eq!(manager.port.seen().len(), 2);
    }
}
