//! Head direction classification from the five named landmarks.

use crate::constants::{DOWN_FORESHORTEN_MARGIN, TILT_OVERRIDE_DEGREES, UP_FORESHORTEN_MARGIN};
use crate::geometry::{distance, tilt_angle_degrees};
use crate::landmarks::FaceLandmarks;
use std::fmt;

/// Discrete head orientation. `Neutral` is an explicit value, not the
/// absence of one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Direction {
    /// Facing the camera straight on
    #[default]
    Neutral,
    /// Head tilted back
    Up,
    /// Head tilted forward
    Down,
    /// Head rolled toward the left shoulder
    Left,
    /// Head rolled toward the right shoulder
    Right,
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Direction::Neutral => "Neutral",
            Direction::Up => "Up",
            Direction::Down => "Down",
            Direction::Left => "Left",
            Direction::Right => "Right",
        };
        f.write_str(label)
    }
}

/// Classify head orientation from the five named landmarks.
///
/// The vertical reading compares the forehead-to-nose and nose-to-chin
/// spans: forward tilt foreshortens the lower face more than backward tilt
/// foreshortens the upper face, so the Down margin is the larger of the two.
/// The eye-line tilt then overrides the vertical reading past
/// [`TILT_OVERRIDE_DEGREES`]. All comparisons are strict; a `NaN` tilt
/// (vertical eye line) fails both roll comparisons and the vertical
/// candidate stands.
#[must_use]
pub fn classify(marks: &FaceLandmarks) -> Direction {
    let forehead_to_nose = distance(marks.forehead, marks.nose_tip);
    let nose_to_chin = distance(marks.nose_tip, marks.chin);

    let candidate = if forehead_to_nose > nose_to_chin + DOWN_FORESHORTEN_MARGIN {
        Direction::Down
    } else if nose_to_chin > forehead_to_nose + UP_FORESHORTEN_MARGIN {
        Direction::Up
    } else {
        Direction::Neutral
    };

    let tilt = tilt_angle_degrees(marks.left_eye_outer, marks.right_eye_outer);
    if tilt > TILT_OVERRIDE_DEGREES {
        Direction::Left
    } else if tilt < -TILT_OVERRIDE_DEGREES {
        Direction::Right
    } else {
        candidate
    }
}
