//! The landmark detector capability consumed by the detection loop.

use crate::constants::{
    DEFAULT_FACE_SCORE_THRESHOLD, DEFAULT_INPUT_HEIGHT, DEFAULT_INPUT_SCALE, DEFAULT_INPUT_WIDTH,
};
use crate::landmarks::Face;
use crate::Result;
use opencv::core::Mat;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Pixel resolution fed to the detector
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Resolution {
    /// Width in pixels
    pub width: i32,
    /// Height in pixels
    pub height: i32,
}

/// Detector initialization parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DetectorConfig {
    /// Path to the face mesh ONNX model
    pub model_path: PathBuf,

    /// Base input resolution before scaling
    pub input_resolution: Resolution,

    /// Scale applied to the input resolution (0, 1]
    pub scale: f32,

    /// Minimum face presence score for a detection to count
    pub min_face_score: f32,
}

impl Default for DetectorConfig {
    fn default() -> Self {
        Self {
            model_path: PathBuf::from("assets/face_mesh.onnx"),
            input_resolution: Resolution {
                width: DEFAULT_INPUT_WIDTH,
                height: DEFAULT_INPUT_HEIGHT,
            },
            scale: DEFAULT_INPUT_SCALE,
            min_face_score: DEFAULT_FACE_SCORE_THRESHOLD,
        }
    }
}

/// A face landmark detector the loop can drive.
///
/// Initialization and per-frame estimation are the only suspension points in
/// the pipeline; an implementation that computes synchronously simply returns
/// a ready future.
pub trait LandmarkDetector: Sized {
    /// Initialize the detector capability. May fail; the loop surfaces the
    /// error and never starts running.
    fn initialize(config: &DetectorConfig) -> impl std::future::Future<Output = Result<Self>>;

    /// Detect faces in a frame, returning zero or more keypoint sets in
    /// frame pixel coordinates.
    fn estimate(&mut self, frame: &Mat) -> impl std::future::Future<Output = Result<Vec<Face>>>;
}
