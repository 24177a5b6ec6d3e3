//! Video source capability and the OpenCV camera implementation.

use crate::Result;
use opencv::core::Mat;
use opencv::prelude::*;
use opencv::videoio::{self, VideoCapture, CAP_PROP_BUFFERSIZE};
use std::path::Path;

/// Frame dimensions in pixels, snapshotted once per detection cycle
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameDimensions {
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

impl FrameDimensions {
    /// Read the dimensions of a frame
    #[must_use]
    pub fn of(frame: &Mat) -> Self {
        Self {
            width: frame.cols(),
            height: frame.rows(),
        }
    }
}

/// A source of video frames the loop can poll.
///
/// `Ok(None)` means the source is not ready yet; the cycle is skipped
/// silently and the next scheduled tick retries.
pub trait VideoSource {
    /// Return the current frame, or `None` when no frame is ready
    fn poll_frame(&mut self) -> Result<Option<Mat>>;
}

/// Webcam or video file source over `OpenCV` capture
pub struct Camera {
    capture: VideoCapture,
}

impl Camera {
    /// Open a camera by device index
    ///
    /// # Errors
    ///
    /// Returns an error if the device cannot be opened.
    pub fn open(index: i32) -> Result<Self> {
        log::info!("Opening camera {index}");
        let mut capture = VideoCapture::new(index, videoio::CAP_ANY)?;
        if !capture.is_opened()? {
            return Err(crate::Error::VideoSource(format!(
                "Failed to open camera {index}"
            )));
        }

        // Buffer size 1 keeps polled frames close to live
        capture.set(CAP_PROP_BUFFERSIZE, 1.0)?;

        Ok(Self { capture })
    }

    /// Open a video file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Opening video file: {}", path.display());
        let capture = VideoCapture::from_file(&path.to_string_lossy(), videoio::CAP_ANY)?;
        if !capture.is_opened()? {
            return Err(crate::Error::VideoSource(format!(
                "Failed to open video file: {}",
                path.display()
            )));
        }

        Ok(Self { capture })
    }
}

impl VideoSource for Camera {
    fn poll_frame(&mut self) -> Result<Option<Mat>> {
        let mut frame = Mat::default();
        if !self.capture.read(&mut frame)? || frame.empty() {
            return Ok(None);
        }
        Ok(Some(frame))
    }
}
