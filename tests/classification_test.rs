//! End-to-end classification tests over raw mesh keypoint sequences

use head_direction::classification::{classify, Direction};
use head_direction::constants::{
    CHIN_INDEX, FOREHEAD_INDEX, LEFT_EYE_OUTER_INDEX, MESH_LANDMARK_COUNT, NOSE_TIP_INDEX,
    RIGHT_EYE_OUTER_INDEX,
};
use head_direction::geometry::Point2D;
use head_direction::landmarks::{Face, FaceLandmarks};

/// Full mesh with the five classification points set and every other point
/// at the origin
fn mesh_face(
    left_eye: (f32, f32),
    right_eye: (f32, f32),
    nose_tip: (f32, f32),
    forehead: (f32, f32),
    chin: (f32, f32),
) -> Face {
    let mut keypoints = vec![Point2D::default(); MESH_LANDMARK_COUNT];
    keypoints[LEFT_EYE_OUTER_INDEX] = left_eye.into();
    keypoints[RIGHT_EYE_OUTER_INDEX] = right_eye.into();
    keypoints[NOSE_TIP_INDEX] = nose_tip.into();
    keypoints[FOREHEAD_INDEX] = forehead.into();
    keypoints[CHIN_INDEX] = chin.into();
    Face::new(keypoints)
}

fn classify_face(face: &Face) -> Direction {
    let marks = FaceLandmarks::from_face(face).expect("full mesh resolves");
    classify(&marks)
}

#[test]
fn test_level_gaze_with_long_chin_span_reads_up() {
    // forehead-to-nose 50, nose-to-chin 70, level eyes
    let face = mesh_face(
        (100.0, 100.0),
        (200.0, 100.0),
        (150.0, 130.0),
        (150.0, 80.0),
        (150.0, 200.0),
    );
    assert_eq!(classify_face(&face), Direction::Up);
}

#[test]
fn test_raised_eye_line_reads_left_regardless_of_vertical_geometry() {
    // Same vertical spans as the Up case, right eye 50 pixels lower
    let face = mesh_face(
        (100.0, 100.0),
        (200.0, 150.0),
        (150.0, 130.0),
        (150.0, 80.0),
        (150.0, 200.0),
    );
    assert_eq!(classify_face(&face), Direction::Left);
}

#[test]
fn test_balanced_spans_read_neutral() {
    let face = mesh_face(
        (100.0, 100.0),
        (200.0, 100.0),
        (150.0, 140.0),
        (150.0, 80.0),
        (150.0, 200.0),
    );
    assert_eq!(classify_face(&face), Direction::Neutral);
}

#[test]
fn test_long_forehead_span_reads_down() {
    // forehead-to-nose 120, nose-to-chin 50
    let face = mesh_face(
        (100.0, 100.0),
        (200.0, 100.0),
        (150.0, 200.0),
        (150.0, 80.0),
        (150.0, 250.0),
    );
    assert_eq!(classify_face(&face), Direction::Down);
}

#[test]
fn test_classification_is_stable_across_repeated_calls() {
    let face = mesh_face(
        (100.0, 100.0),
        (200.0, 100.0),
        (150.0, 130.0),
        (150.0, 80.0),
        (150.0, 200.0),
    );
    let first = classify_face(&face);
    for _ in 0..100 {
        assert_eq!(classify_face(&face), first);
    }
}

#[test]
fn test_truncated_mesh_never_reaches_the_classifier() {
    let face = Face::new(vec![Point2D::default(); 64]);
    assert!(FaceLandmarks::from_face(&face).is_none());
}
