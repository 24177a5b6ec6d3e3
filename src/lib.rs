//! Head direction estimation library for real-time orientation tracking.
//!
//! This library classifies a user's head orientation (Up, Down, Left, Right
//! or Neutral) from facial landmarks using:
//! - ONNX Runtime for face mesh landmark inference
//! - `OpenCV` for video capture and overlay drawing
//! - A cooperative single-task loop re-scheduled on a fixed cadence
//!
//! The pipeline for each detection cycle:
//! 1. Poll the video source for a ready frame
//! 2. Run landmark detection on the frame
//! 3. Resolve the five classification landmarks by name
//! 4. Classify orientation from span foreshortening and eye-line tilt
//! 5. Publish the direction to a watch slot and repaint the overlay
//!
//! # Examples
//!
//! ```no_run
//! use head_direction::{
//!     config::Config,
//!     detection_loop::DetectionLoop,
//!     mesh_detection::FaceMeshDetector,
//!     overlay::{NullSurface, OverlayPublisher},
//!     video::Camera,
//! };
//!
//! # async fn run() -> head_direction::Result<()> {
//! let config = Config::default();
//! let camera = Camera::open(0)?;
//! let overlay = OverlayPublisher::new(NullSurface);
//!
//! let mut detection_loop =
//!     DetectionLoop::<FaceMeshDetector, _, _>::new(config.loop_config(), camera, overlay);
//!
//! // Observe direction changes from any task
//! let directions = detection_loop.direction();
//!
//! // Cancel from a signal handler or another task
//! let handle = detection_loop.handle();
//!
//! detection_loop.run().await?;
//! # Ok(())
//! # }
//! ```
//!
//! Classification alone is a pure function over five points:
//!
//! ```
//! use head_direction::classification::{classify, Direction};
//! use head_direction::geometry::Point2D;
//! use head_direction::landmarks::FaceLandmarks;
//!
//! let marks = FaceLandmarks {
//!     left_eye_outer: Point2D::new(100.0, 100.0),
//!     right_eye_outer: Point2D::new(200.0, 100.0),
//!     nose_tip: Point2D::new(150.0, 130.0),
//!     forehead: Point2D::new(150.0, 80.0),
//!     chin: Point2D::new(150.0, 200.0),
//! };
//! assert_eq!(classify(&marks), Direction::Up);
//! ```

/// Planar geometry over landmark coordinates
pub mod geometry;

/// Face landmark types and the named five-point lookup
pub mod landmarks;

/// Direction classification rules
pub mod classification;

/// The landmark detector capability
pub mod detection;

/// ONNX face mesh detector implementation
pub mod mesh_detection;

/// Video source capability and camera implementation
pub mod video;

/// Overlay drawing and direction publication
pub mod overlay;

/// The cooperative detection loop
pub mod detection_loop;

/// Error types and result handling
pub mod error;

/// Configuration management
pub mod config;

/// Constants used throughout the application
pub mod constants;

pub use classification::Direction;
pub use error::{Error, Result};
