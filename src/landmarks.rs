//! Face landmark types and the named lookup of classification points.

use crate::constants::{
    CHIN_INDEX, FOREHEAD_INDEX, LEFT_EYE_OUTER_INDEX, NOSE_TIP_INDEX, RIGHT_EYE_OUTER_INDEX,
};
use crate::geometry::Point2D;

/// A detected face: an ordered keypoint sequence.
///
/// Indices into `keypoints` are stable identifiers fixed by the mesh
/// topology, not positions that shift between detections.
#[derive(Debug, Clone, Default)]
pub struct Face {
    /// Landmark coordinates, in frame pixel space
    pub keypoints: Vec<Point2D>,
}

impl Face {
    /// Create a face from a keypoint sequence
    #[must_use]
    pub fn new(keypoints: Vec<Point2D>) -> Self {
        Self { keypoints }
    }
}

/// The five landmarks the classifier reads, resolved by name.
///
/// Built once per detection result; construction fails if any of the five
/// mesh indices is missing, so downstream code never indexes a raw sequence.
#[derive(Debug, Clone, Copy)]
pub struct FaceLandmarks {
    /// Outer corner of the left eye (mesh index 33)
    pub left_eye_outer: Point2D,
    /// Outer corner of the right eye (mesh index 263)
    pub right_eye_outer: Point2D,
    /// Nose tip (mesh index 1)
    pub nose_tip: Point2D,
    /// Forehead point (mesh index 10)
    pub forehead: Point2D,
    /// Chin point (mesh index 152)
    pub chin: Point2D,
}

impl FaceLandmarks {
    /// Resolve the five classification landmarks from a detected face.
    ///
    /// Returns `None` when the face carries fewer keypoints than the mesh
    /// indices require; classification is skipped for that detection.
    #[must_use]
    pub fn from_face(face: &Face) -> Option<Self> {
        let kp = &face.keypoints;
        Some(Self {
            left_eye_outer: *kp.get(LEFT_EYE_OUTER_INDEX)?,
            right_eye_outer: *kp.get(RIGHT_EYE_OUTER_INDEX)?,
            nose_tip: *kp.get(NOSE_TIP_INDEX)?,
            forehead: *kp.get(FOREHEAD_INDEX)?,
            chin: *kp.get(CHIN_INDEX)?,
        })
    }
}
