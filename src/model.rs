// DermaScan 🩺 AGPL-3.0 License - https://github.com/dermascan/inference

//! Lesion model loading and inference.
//!
//! This module provides the main `LesionModel` struct for loading the ONNX
//! classifier artifact and running one prediction over an image plus a
//! tabular feature vector.

use std::path::{Path, PathBuf};

use image::DynamicImage;
use ndarray::{Array2, Array4};
use ort::session::Session;
use ort::value::TensorRef;

use crate::error::{InferenceError, Result};
use crate::inference::InferenceConfig;
use crate::preprocessing::preprocess_image;
use crate::tabular::TabularFeatures;

/// File name of the model artifact expected next to the executable.
pub const MODEL_FILE_NAME: &str = "best_model.onnx";

/// Resolve the default model path: `best_model.onnx` in the same directory
/// as the running executable.
///
/// Computed once at startup instead of baking a "current file directory"
/// assumption into every load site.
///
/// # Errors
///
/// Returns an error if the executable path can't be determined.
pub fn default_model_path() -> Result<PathBuf> {
    let exe = std::env::current_exe()?;
    let dir = exe.parent().ok_or_else(|| {
        InferenceError::ModelLoadError("executable has no parent directory".to_string())
    })?;
    Ok(dir.join(MODEL_FILE_NAME))
}

/// Skin-lesion classifier for inference.
///
/// Wraps an ONNX Runtime session over a two-input network (image tensor and
/// tabular feature vector) producing a single malignancy probability.
///
/// # Example
///
/// ```no_run
/// use dermascan_inference::{BodyArea, LesionModel, TabularFeatures};
///
/// let mut model = LesionModel::load("best_model.onnx").unwrap();
/// let features = TabularFeatures {
///     age: 45.0,
///     gender: 1,
///     max_diameter: 1.2,
///     min_diameter: 0.3,
///     area: BodyArea::HeadNeck,
/// };
/// let prob = model.predict("lesion.jpg", &features).unwrap();
/// println!("{}", prob * 100.0);
/// ```
pub struct LesionModel {
    /// ONNX Runtime session.
    session: Session,
    /// Image input tensor name.
    image_input: String,
    /// Tabular input tensor name.
    tabular_input: String,
    /// Output tensor name.
    output_name: String,
    /// Inference configuration.
    config: InferenceConfig,
}

impl LesionModel {
    /// Load the lesion model from an ONNX file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the ONNX model file.
    ///
    /// # Errors
    ///
    /// Returns an error if the model file doesn't exist or can't be loaded.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::load_with_config(path, InferenceConfig::default())
    }

    /// Load the lesion model with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the ONNX model file.
    /// * `config` - Custom inference configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the model file doesn't exist, can't be loaded, or
    /// doesn't expose the expected two inputs.
    pub fn load_with_config<P: AsRef<Path>>(path: P, config: InferenceConfig) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Err(InferenceError::ModelLoadError(format!(
                "Model file not found: {}",
                path.display()
            )));
        }

        let session = Session::builder()
            .map_err(|e| {
                InferenceError::ModelLoadError(format!("Failed to create session builder: {e}"))
            })?
            // Level3 enables all graph optimizations including extended ones
            .with_optimization_level(ort::session::builder::GraphOptimizationLevel::Level3)
            .map_err(|e| {
                InferenceError::ModelLoadError(format!("Failed to set optimization level: {e}"))
            })?
            .with_intra_threads(config.num_threads)
            .map_err(|e| {
                InferenceError::ModelLoadError(format!("Failed to set intra-thread count: {e}"))
            })?
            .commit_from_file(path)
            .map_err(|e| InferenceError::ModelLoadError(format!("Failed to load model: {e}")))?;

        // The classifier is a two-input network: image first, tabular second
        if session.inputs().len() < 2 {
            return Err(InferenceError::ModelLoadError(format!(
                "Expected a two-input model (image, tabular), found {} input(s)",
                session.inputs().len()
            )));
        }

        let image_input = session.inputs()[0].name().to_string();
        let tabular_input = session.inputs()[1].name().to_string();
        let output_name = session
            .outputs()
            .first()
            .map(|o| o.name().to_string())
            .ok_or_else(|| {
                InferenceError::ModelLoadError("Model has no output tensors".to_string())
            })?;

        Ok(Self {
            session,
            image_input,
            tabular_input,
            output_name,
            config,
        })
    }

    /// Run inference on an image file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the image file.
    /// * `features` - Patient tabular features.
    ///
    /// # Returns
    ///
    /// The raw model probability in `[0, 1]`.
    ///
    /// # Errors
    ///
    /// Returns an error if the image can't be loaded or inference fails.
    pub fn predict<P: AsRef<Path>>(&mut self, path: P, features: &TabularFeatures) -> Result<f32> {
        let path = path.as_ref();

        let img = image::open(path).map_err(|e| {
            InferenceError::ImageError(format!("Failed to load image {}: {e}", path.display()))
        })?;

        self.predict_image(&img, features)
    }

    /// Run inference on an already decoded image.
    ///
    /// # Errors
    ///
    /// Returns an error if inference fails.
    pub fn predict_image(
        &mut self,
        image: &DynamicImage,
        features: &TabularFeatures,
    ) -> Result<f32> {
        let image_tensor = preprocess_image(image, self.config.imgsz);
        let tabular = features.to_array();
        self.run_inference(&image_tensor, &tabular)
    }

    /// Run the ONNX session over both input tensors and extract the scalar.
    fn run_inference(&mut self, image: &Array4<f32>, tabular: &Array2<f32>) -> Result<f32> {
        // Ensure inputs are contiguous in memory (CowArray)
        let image_contiguous = image.as_standard_layout();
        let tabular_contiguous = tabular.as_standard_layout();

        let image_tensor = TensorRef::from_array_view(&image_contiguous).map_err(|e| {
            InferenceError::InferenceError(format!("Failed to create image tensor: {e}"))
        })?;
        let tabular_tensor = TensorRef::from_array_view(&tabular_contiguous).map_err(|e| {
            InferenceError::InferenceError(format!("Failed to create tabular tensor: {e}"))
        })?;

        let inputs = ort::inputs![
            &self.image_input => image_tensor,
            &self.tabular_input => tabular_tensor
        ];

        let outputs = self
            .session
            .run(inputs)
            .map_err(|e| InferenceError::InferenceError(format!("Inference failed: {e}")))?;

        let output = outputs.get(self.output_name.as_str()).ok_or_else(|| {
            InferenceError::InferenceError(format!("Output '{}' not found", self.output_name))
        })?;

        let (_, data) = output.try_extract_tensor::<f32>().map_err(|e| {
            InferenceError::InferenceError(format!("Failed to extract output: {e}"))
        })?;

        data.first().copied().ok_or_else(|| {
            InferenceError::InferenceError("Model produced an empty output tensor".to_string())
        })
    }

    /// Get the configured input size (height, width).
    #[must_use]
    pub const fn imgsz(&self) -> (u32, u32) {
        self.config.imgsz
    }

    /// Image input tensor name, as read from the model.
    #[must_use]
    pub fn image_input(&self) -> &str {
        &self.image_input
    }

    /// Tabular input tensor name, as read from the model.
    #[must_use]
    pub fn tabular_input(&self) -> &str {
        &self.tabular_input
    }
}

impl std::fmt::Debug for LesionModel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LesionModel")
            .field("image_input", &self.image_input)
            .field("tabular_input", &self.tabular_input)
            .field("output_name", &self.output_name)
            .field("imgsz", &self.config.imgsz)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_model_not_found() {
        let result = LesionModel::load("nonexistent.onnx");
        assert!(result.is_err());
        assert!(matches!(
            result.unwrap_err(),
            InferenceError::ModelLoadError(_)
        ));
    }

    #[test]
    fn test_default_model_path() {
        let path = default_model_path().unwrap();
        assert_eq!(path.file_name().unwrap(), MODEL_FILE_NAME);
    }
}
