//! Overlay publication: landmark drawing and the direction slot.

use crate::classification::Direction;
use crate::landmarks::Face;
use crate::video::FrameDimensions;
use crate::Result;
use opencv::core::{Mat, Point, Scalar};
use opencv::highgui::{self, WINDOW_NORMAL};
use opencv::imgproc::{self, LINE_8};
use tokio::sync::watch;

/// A surface landmark markers are painted onto.
pub trait DrawSurface {
    /// Resize the surface to the current frame dimensions
    fn resize(&mut self, dims: FrameDimensions) -> Result<()>;

    /// Paint markers for all detected keypoints over the frame. Called once
    /// per completed cycle, with an empty face list when nothing was
    /// detected.
    fn draw(&mut self, frame: &Mat, faces: &[Face]) -> Result<()>;
}

/// Fan-out for cycle results: one call site for the loop to report a repaint
/// and a direction update.
///
/// The direction lives in a watch slot holding the latest value; consumers
/// subscribe instead of polling shared state.
pub struct OverlayPublisher<S> {
    surface: S,
    direction: watch::Sender<Direction>,
}

impl<S: DrawSurface> OverlayPublisher<S> {
    /// Wrap a draw surface. The direction slot starts at
    /// [`Direction::Neutral`].
    pub fn new(surface: S) -> Self {
        let (direction, _) = watch::channel(Direction::Neutral);
        Self { surface, direction }
    }

    /// Subscribe to direction updates
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Direction> {
        self.direction.subscribe()
    }

    /// Publish the direction classified this cycle
    pub fn publish_direction(&self, direction: Direction) {
        self.direction.send_replace(direction);
    }

    /// Propagate the cycle's frame dimensions to the surface
    ///
    /// # Errors
    ///
    /// Returns an error if the surface rejects the resize.
    pub fn resize_surface(&mut self, dims: FrameDimensions) -> Result<()> {
        self.surface.resize(dims)
    }

    /// Forward detected keypoints to the surface
    ///
    /// # Errors
    ///
    /// Returns an error if drawing fails.
    pub fn draw(&mut self, frame: &Mat, faces: &[Face]) -> Result<()> {
        self.surface.draw(frame, faces)
    }
}

/// Landmark overlay in an `OpenCV` window
pub struct WindowOverlay {
    window_name: String,
    marker_radius: i32,
}

impl WindowOverlay {
    /// Create the overlay window
    ///
    /// # Errors
    ///
    /// Returns an error if the window cannot be created.
    pub fn new(window_name: &str, marker_radius: i32) -> Result<Self> {
        highgui::named_window(window_name, WINDOW_NORMAL)?;
        Ok(Self {
            window_name: window_name.to_string(),
            marker_radius,
        })
    }
}

impl DrawSurface for WindowOverlay {
    fn resize(&mut self, dims: FrameDimensions) -> Result<()> {
        if dims.width > 0 && dims.height > 0 {
            highgui::resize_window(&self.window_name, dims.width, dims.height)?;
        }
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)] // keypoints are frame pixel coordinates
    fn draw(&mut self, frame: &Mat, faces: &[Face]) -> Result<()> {
        let mut display_frame = frame.clone();

        for face in faces {
            for keypoint in &face.keypoints {
                imgproc::circle(
                    &mut display_frame,
                    Point::new(keypoint.x as i32, keypoint.y as i32),
                    self.marker_radius,
                    Scalar::new(0.0, 255.0, 0.0, 0.0),
                    -1,
                    LINE_8,
                    0,
                )?;
            }
        }

        highgui::imshow(&self.window_name, &display_frame)?;
        // Pump the GUI event queue; key presses are not consumed here
        highgui::wait_key(1)?;
        Ok(())
    }
}

/// No-op surface for headless runs
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSurface;

impl DrawSurface for NullSurface {
    fn resize(&mut self, _dims: FrameDimensions) -> Result<()> {
        Ok(())
    }

    fn draw(&mut self, _frame: &Mat, _faces: &[Face]) -> Result<()> {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direction_slot_starts_neutral() {
        let publisher = OverlayPublisher::new(NullSurface);
        let rx = publisher.subscribe();
        assert_eq!(*rx.borrow(), Direction::Neutral);
    }

    #[test]
    fn test_publish_updates_all_subscribers() {
        let publisher = OverlayPublisher::new(NullSurface);
        let rx_a = publisher.subscribe();
        let rx_b = publisher.subscribe();

        publisher.publish_direction(Direction::Left);
        assert_eq!(*rx_a.borrow(), Direction::Left);
        assert_eq!(*rx_b.borrow(), Direction::Left);
    }

    #[test]
    fn test_slot_holds_latest_value_only() {
        let publisher = OverlayPublisher::new(NullSurface);
        let rx = publisher.subscribe();

        publisher.publish_direction(Direction::Up);
        publisher.publish_direction(Direction::Down);
        assert_eq!(*rx.borrow(), Direction::Down);
    }

    #[test]
    fn test_null_surface_accepts_everything() {
        let mut surface = NullSurface;
        let frame = Mat::default();
        assert!(surface
            .resize(FrameDimensions {
                width: 640,
                height: 480
            })
            .is_ok());
        assert!(surface.draw(&frame, &[]).is_ok());
    }
}
