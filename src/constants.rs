//! Constants used throughout the application

/// Number of landmarks in the face mesh topology
pub const MESH_LANDMARK_COUNT: usize = 468;

/// Mesh index of the nose tip
pub const NOSE_TIP_INDEX: usize = 1;

/// Mesh index of the forehead point
pub const FOREHEAD_INDEX: usize = 10;

/// Mesh index of the left eye outer corner
pub const LEFT_EYE_OUTER_INDEX: usize = 33;

/// Mesh index of the chin point
pub const CHIN_INDEX: usize = 152;

/// Mesh index of the right eye outer corner
pub const RIGHT_EYE_OUTER_INDEX: usize = 263;

/// Forehead-to-nose excess (pixels) beyond which the head reads as Down
pub const DOWN_FORESHORTEN_MARGIN: f32 = 40.0;

/// Nose-to-chin excess (pixels) beyond which the head reads as Up
pub const UP_FORESHORTEN_MARGIN: f32 = 10.0;

/// Eye-line tilt (degrees) beyond which roll overrides the vertical reading
pub const TILT_OVERRIDE_DEGREES: f32 = 10.0;

/// Delay between detection cycles, measured from cycle completion
pub const DETECTION_INTERVAL_MS: u64 = 100;

/// Default detector input resolution
pub const DEFAULT_INPUT_WIDTH: i32 = 640;
pub const DEFAULT_INPUT_HEIGHT: i32 = 480;

/// Default detector input scale factor
pub const DEFAULT_INPUT_SCALE: f32 = 0.8;

/// Default face presence score threshold
pub const DEFAULT_FACE_SCORE_THRESHOLD: f32 = 0.5;

/// Default landmark marker radius in the overlay window
pub const DEFAULT_MARKER_RADIUS: i32 = 2;
