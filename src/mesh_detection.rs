//! Face mesh landmark detection using `ONNX` Runtime.

use crate::detection::{DetectorConfig, LandmarkDetector, Resolution};
use crate::geometry::Point2D;
use crate::landmarks::Face;
use crate::Result;
use ndarray::{Array4, CowArray};
use opencv::core::{Mat, Size, CV_32F};
use opencv::imgproc::{self, InterpolationFlags};
use opencv::prelude::*;
use ort::{Environment, Session, Value};
use std::sync::Arc;

/// Coordinates per mesh landmark in the model output (x, y, depth)
const COORDS_PER_LANDMARK: usize = 3;

/// Face mesh landmark detector backed by an `ONNX` model.
///
/// The model consumes a scaled RGB frame and emits a flat landmark tensor;
/// models that also emit a face presence score have that score thresholded
/// to decide whether any face is reported at all.
pub struct FaceMeshDetector {
    session: Session,
    input_size: Size,
    min_face_score: f32,
    has_score_output: bool,
}

impl FaceMeshDetector {
    fn scaled_input_size(resolution: Resolution, scale: f32) -> Size {
        #[allow(clippy::cast_possible_truncation)] // resolution bounds are config-validated
        Size::new(
            (resolution.width as f32 * scale) as i32,
            (resolution.height as f32 * scale) as i32,
        )
    }

    /// Preprocess a frame into the NHWC float tensor the model expects
    #[allow(clippy::cast_sign_loss)] // OpenCV dimensions are positive
    fn preprocess(&self, frame: &Mat) -> Result<Array4<f32>> {
        let width = self.input_size.width as usize;
        let height = self.input_size.height as usize;
        let channels = 3;

        // Resize to the scaled input resolution
        let mut resized = Mat::default();
        imgproc::resize(
            frame,
            &mut resized,
            self.input_size,
            0.0,
            0.0,
            InterpolationFlags::INTER_LINEAR as i32,
        )?;

        // Convert BGR to RGB
        let mut rgb_image = Mat::default();
        imgproc::cvt_color(&resized, &mut rgb_image, imgproc::COLOR_BGR2RGB, 0)?;

        // Convert to f32 and normalize to [0, 1]
        let mut float_image = Mat::default();
        rgb_image.convert_to(&mut float_image, CV_32F, 1.0 / 255.0, 0.0)?;

        let mut data = vec![0.0f32; width * height * channels];
        for row in 0..height {
            for col in 0..width {
                let pixel = float_image.at_2d::<opencv::core::Vec3f>(
                    i32::try_from(row).map_err(|e| {
                        crate::Error::ModelInputError(format!("Row index out of range: {e}"))
                    })?,
                    i32::try_from(col).map_err(|e| {
                        crate::Error::ModelInputError(format!("Column index out of range: {e}"))
                    })?,
                )?;
                for ch in 0..channels {
                    data[(row * width + col) * channels + ch] = pixel[ch];
                }
            }
        }

        Array4::from_shape_vec((1, height, width, channels), data)
            .map_err(|e| crate::Error::ModelDataFormatError(format!("Failed to create array: {e}")))
    }

    /// Run the forward pass, returning the landmark tensor and the optional
    /// face presence score
    fn forward(&self, inputs: Array4<f32>) -> Result<(Vec<f32>, Option<f32>)> {
        let cow_array = CowArray::from(inputs.into_dyn());
        let input_tensor = Value::from_array(self.session.allocator(), &cow_array)?;

        let outputs = self.session.run(vec![input_tensor])?;
        let mut outputs = outputs.into_iter();

        let landmarks_output = outputs
            .next()
            .ok_or_else(|| crate::Error::ModelOutputError("No output from model".to_string()))?;
        let landmarks_tensor = landmarks_output.try_extract::<f32>()?;
        let landmarks_view = landmarks_tensor.view();
        let landmarks = landmarks_view
            .as_slice()
            .ok_or_else(|| crate::Error::ModelOutputError("Failed to get output data".to_string()))?
            .to_vec();

        let score = if self.has_score_output {
            let score_output = outputs.next().ok_or_else(|| {
                crate::Error::ModelOutputError("Missing face score output".to_string())
            })?;
            let score_tensor = score_output.try_extract::<f32>()?;
            let score_view = score_tensor.view();
            score_view.iter().next().copied()
        } else {
            None
        };

        Ok((landmarks, score))
    }

    /// Scale the flat landmark tensor back to frame pixel coordinates,
    /// dropping the depth component
    #[allow(clippy::cast_precision_loss)] // Precision loss acceptable for pixel coordinates
    fn postprocess(&self, landmarks: &[f32], frame: &Mat) -> Face {
        let scale_x = frame.cols() as f32 / self.input_size.width as f32;
        let scale_y = frame.rows() as f32 / self.input_size.height as f32;

        let keypoints = landmarks
            .chunks_exact(COORDS_PER_LANDMARK)
            .map(|coords| Point2D::new(coords[0] * scale_x, coords[1] * scale_y))
            .collect();

        Face::new(keypoints)
    }
}

impl LandmarkDetector for FaceMeshDetector {
    async fn initialize(config: &DetectorConfig) -> Result<Self> {
        log::info!(
            "Initializing FaceMeshDetector with model: {}",
            config.model_path.display()
        );
        let environment = Arc::new(
            Environment::builder()
                .with_name("face_mesh")
                .with_log_level(ort::LoggingLevel::Warning)
                .build()?,
        );

        let session = ort::SessionBuilder::new(&environment)?
            .with_optimization_level(ort::GraphOptimizationLevel::Level3)?
            .with_model_from_file(&config.model_path)?;

        if session.inputs.is_empty() {
            return Err(crate::Error::ModelInputError("Model has no inputs".to_string()));
        }
        if session.outputs.is_empty() {
            return Err(crate::Error::ModelOutputError("Model has no outputs".to_string()));
        }
        let has_score_output = session.outputs.len() > 1;

        Ok(Self {
            session,
            input_size: Self::scaled_input_size(config.input_resolution, config.scale),
            min_face_score: config.min_face_score,
            has_score_output,
        })
    }

    async fn estimate(&mut self, frame: &Mat) -> Result<Vec<Face>> {
        let inputs = self.preprocess(frame)?;
        let (landmarks, score) = self.forward(inputs)?;

        if let Some(score) = score {
            if score < self.min_face_score {
                log::trace!("Face score {score:.3} below threshold, reporting no faces");
                return Ok(Vec::new());
            }
        }

        if landmarks.len() < COORDS_PER_LANDMARK {
            return Err(crate::Error::ModelOutputError(format!(
                "Landmark tensor too small: {} values",
                landmarks.len()
            )));
        }

        Ok(vec![self.postprocess(&landmarks, frame)])
    }
}
