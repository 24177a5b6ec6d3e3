//! Configuration management for the head direction application

use crate::constants::{DEFAULT_MARKER_RADIUS, DETECTION_INTERVAL_MS};
use crate::detection::DetectorConfig;
use crate::detection_loop::LoopConfig;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Detector configuration
    pub detector: DetectorConfig,

    /// Video source configuration
    pub video: VideoConfig,

    /// Detection cadence configuration
    pub tracking: TrackingConfig,

    /// Overlay display configuration
    pub display: DisplayConfig,
}

/// Video source selection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VideoConfig {
    /// Camera device index
    pub camera_index: i32,

    /// Video file to read instead of a camera
    pub video_file: Option<PathBuf>,
}

/// Detection cadence parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Delay between detection cycles in milliseconds
    pub tick_interval_ms: u64,
}

/// Overlay display parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DisplayConfig {
    /// Overlay window title
    pub window_name: String,

    /// Landmark marker radius in pixels
    pub marker_radius: i32,

    /// Run without any GUI window
    pub headless: bool,
}

impl Default for VideoConfig {
    fn default() -> Self {
        Self {
            camera_index: 0,
            video_file: None,
        }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            tick_interval_ms: DETECTION_INTERVAL_MS,
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            window_name: "Head Direction".to_string(),
            marker_radius: DEFAULT_MARKER_RADIUS,
            headless: false,
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::ConfigError(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or the write fails.
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content = serde_yaml::to_string(self)
            .map_err(|e| Error::ConfigError(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Loop parameters derived from this configuration
    #[must_use]
    pub fn loop_config(&self) -> LoopConfig {
        LoopConfig {
            detector: self.detector.clone(),
            tick_interval: Duration::from_millis(self.tracking.tick_interval_ms),
        }
    }

    /// Validate configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` describing the first invalid field.
    pub fn validate(&self) -> Result<()> {
        if self.detector.input_resolution.width <= 0 || self.detector.input_resolution.height <= 0 {
            return Err(Error::ConfigError(
                "Detector input resolution must be positive".to_string(),
            ));
        }
        if !(self.detector.scale > 0.0 && self.detector.scale <= 1.0) {
            return Err(Error::ConfigError(
                "Detector scale must be in (0.0, 1.0]".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.detector.min_face_score) {
            return Err(Error::ConfigError(
                "Face score threshold must be between 0.0 and 1.0".to_string(),
            ));
        }
        if self.tracking.tick_interval_ms == 0 {
            return Err(Error::ConfigError(
                "Tick interval must be greater than 0".to_string(),
            ));
        }
        if self.display.marker_radius <= 0 {
            return Err(Error::ConfigError(
                "Marker radius must be greater than 0".to_string(),
            ));
        }
        if !self.detector.model_path.exists() {
            return Err(Error::ConfigError(format!(
                "Face mesh model not found: {}",
                self.detector.model_path.display()
            )));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Head Direction Configuration

# Detector parameters
detector:
  model_path: "assets/face_mesh.onnx"
  input_resolution:
    width: 640
    height: 480
  scale: 0.8
  min_face_score: 0.5

# Video source
video:
  camera_index: 0
  video_file: null

# Detection cadence
tracking:
  tick_interval_ms: 100

# Overlay display
display:
  window_name: "Head Direction"
  marker_radius: 2
  headless: false
"#;
