//! The detection loop: frame polling, landmark detection, classification and
//! overlay publication on a fixed cooperative cadence.

use crate::classification::{classify, Direction};
use crate::constants::DETECTION_INTERVAL_MS;
use crate::detection::{DetectorConfig, LandmarkDetector};
use crate::landmarks::FaceLandmarks;
use crate::overlay::{DrawSurface, OverlayPublisher};
use crate::video::{FrameDimensions, VideoSource};
use crate::Result;
use log::{debug, info, trace, warn};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::watch;
use tokio::time;

/// Loop lifecycle states
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoopState {
    /// Created, detector capability not yet requested
    Idle,
    /// Detector initialization in flight
    Loading,
    /// Ticking on the detection cadence
    Running,
    /// Cancelled; no further ticks fire
    Stopped,
}

/// Cancellation token for a running loop.
///
/// Cancelling suppresses the next scheduling only; an in-flight detector
/// call is never interrupted.
#[derive(Debug, Clone)]
pub struct LoopHandle {
    cancelled: Arc<AtomicBool>,
}

impl LoopHandle {
    fn new() -> Self {
        Self {
            cancelled: Arc::new(AtomicBool::new(false)),
        }
    }

    /// Request loop teardown
    pub fn cancel(&self) {
        self.cancelled.store(true, Ordering::SeqCst);
    }

    /// Whether teardown has been requested
    #[must_use]
    pub fn is_cancelled(&self) -> bool {
        self.cancelled.load(Ordering::SeqCst)
    }
}

/// Loop construction parameters
#[derive(Debug, Clone)]
pub struct LoopConfig {
    /// Detector initialization parameters
    pub detector: DetectorConfig,
    /// Delay between cycles, measured from cycle completion
    pub tick_interval: Duration,
}

impl Default for LoopConfig {
    fn default() -> Self {
        Self {
            detector: DetectorConfig::default(),
            tick_interval: Duration::from_millis(DETECTION_INTERVAL_MS),
        }
    }
}

/// The detection loop over a detector, a video source and an overlay.
///
/// Each cycle performs at most one detector invocation, at most one
/// direction publish and at most one repaint. All work runs on the calling
/// task; the suspension points are detector initialization, per-frame
/// estimation and the inter-cycle delay.
pub struct DetectionLoop<D, V, S> {
    config: LoopConfig,
    detector: Option<D>,
    video: V,
    overlay: OverlayPublisher<S>,
    state: LoopState,
    handle: LoopHandle,
}

impl<D, V, S> DetectionLoop<D, V, S>
where
    D: LandmarkDetector,
    V: VideoSource,
    S: DrawSurface,
{
    /// Create an idle loop; the detector is initialized by [`Self::start`]
    pub fn new(config: LoopConfig, video: V, overlay: OverlayPublisher<S>) -> Self {
        Self {
            config,
            detector: None,
            video,
            overlay,
            state: LoopState::Idle,
            handle: LoopHandle::new(),
        }
    }

    /// Create a running loop around an already initialized detector
    pub fn with_detector(
        config: LoopConfig,
        detector: D,
        video: V,
        overlay: OverlayPublisher<S>,
    ) -> Self {
        Self {
            config,
            detector: Some(detector),
            video,
            overlay,
            state: LoopState::Running,
            handle: LoopHandle::new(),
        }
    }

    /// Current lifecycle state
    #[must_use]
    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Cancellation handle for this loop
    #[must_use]
    pub fn handle(&self) -> LoopHandle {
        self.handle.clone()
    }

    /// Subscribe to direction updates
    #[must_use]
    pub fn direction(&self) -> watch::Receiver<Direction> {
        self.overlay.subscribe()
    }

    /// Initialize the detector capability and transition to `Running`.
    ///
    /// # Errors
    ///
    /// Returns the initialization error and reverts to `Idle`; the caller
    /// may invoke `start` again. No automatic retry is attempted.
    pub async fn start(&mut self) -> Result<()> {
        if self.state != LoopState::Idle {
            return Err(crate::Error::InvalidState(format!(
                "start requires Idle, loop is {:?}",
                self.state
            )));
        }

        self.state = LoopState::Loading;
        match D::initialize(&self.config.detector).await {
            Ok(detector) => {
                self.detector = Some(detector);
                self.state = LoopState::Running;
                info!("Detector ready, loop running");
                Ok(())
            }
            Err(err) => {
                self.state = LoopState::Idle;
                Err(err)
            }
        }
    }

    /// Run one detection cycle.
    ///
    /// Returns the direction published this cycle, or `None` when the cycle
    /// was skipped (source not ready, no face, incomplete landmarks,
    /// cancellation observed).
    ///
    /// # Errors
    ///
    /// Returns an error if the loop is not running or a capability fails;
    /// [`Self::run`] degrades such failures to a warning.
    pub async fn tick(&mut self) -> Result<Option<Direction>> {
        if self.state != LoopState::Running {
            return Err(crate::Error::InvalidState(format!(
                "tick requires Running, loop is {:?}",
                self.state
            )));
        }
        let detector = self
            .detector
            .as_mut()
            .ok_or_else(|| crate::Error::InvalidState("detector missing".to_string()))?;

        let Some(frame) = self.video.poll_frame()? else {
            trace!("Video source not ready, skipping cycle");
            return Ok(None);
        };

        let dims = FrameDimensions::of(&frame);
        self.overlay.resize_surface(dims)?;

        if self.handle.is_cancelled() {
            return Ok(None);
        }
        let faces = detector.estimate(&frame).await?;

        let mut published = None;
        if let Some(face) = faces.first() {
            if let Some(marks) = FaceLandmarks::from_face(face) {
                let direction = classify(&marks);
                self.overlay.publish_direction(direction);
                debug!("Head direction: {direction}");
                published = Some(direction);
            } else {
                debug!(
                    "Face with {} keypoints lacks required landmarks, classification skipped",
                    face.keypoints.len()
                );
            }
        }

        // Repaint regardless of the face branch
        self.overlay.draw(&frame, &faces)?;

        Ok(published)
    }

    /// Run cycles on the configured cadence until cancelled.
    ///
    /// Per-cycle failures are logged and the loop continues; the next cycle
    /// is scheduled relative to the completion of the current one.
    ///
    /// # Errors
    ///
    /// Returns an error if detector initialization fails or the loop was
    /// already stopped.
    pub async fn run(&mut self) -> Result<()> {
        if self.state == LoopState::Idle {
            self.start().await?;
        }
        if self.state != LoopState::Running {
            return Err(crate::Error::InvalidState(format!(
                "run requires Running, loop is {:?}",
                self.state
            )));
        }

        while !self.handle.is_cancelled() {
            if let Err(err) = self.tick().await {
                warn!("Detection cycle failed: {err}");
            }
            if self.handle.is_cancelled() {
                break;
            }
            time::sleep(self.config.tick_interval).await;
        }

        self.state = LoopState::Stopped;
        info!("Detection loop stopped");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_cancel_is_sticky() {
        let handle = LoopHandle::new();
        assert!(!handle.is_cancelled());

        handle.cancel();
        assert!(handle.is_cancelled());

        // A clone observes the same token
        let clone = handle.clone();
        assert!(clone.is_cancelled());
    }

    #[test]
    fn test_default_cadence() {
        let config = LoopConfig::default();
        assert_eq!(config.tick_interval, Duration::from_millis(100));
    }
}
