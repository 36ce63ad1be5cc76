// DermaScan 🩺 AGPL-3.0 License - https://github.com/dermascan/inference

//! Inference configuration.
//!
//! This module defines the [`InferenceConfig`] struct, which controls the
//! input image size and ONNX Runtime threading for lesion model inference.

/// Input size the lesion classifier was trained with (height, width).
pub const DEFAULT_IMAGE_SIZE: (u32, u32) = (224, 224);

/// Configuration for lesion inference.
///
/// Uses a builder pattern for convenient construction.
///
/// # Example
///
/// ```rust
/// use dermascan_inference::InferenceConfig;
///
/// let config = InferenceConfig::new()
///     .with_imgsz(224, 224)
///     .with_threads(4);
/// ```
#[derive(Debug, Clone)]
pub struct InferenceConfig {
    /// Input image size (height, width). The network has a fixed input
    /// shape, so overriding this only makes sense for retrained artifacts.
    pub imgsz: (u32, u32),
    /// Number of intra-op threads for ONNX Runtime.
    /// Setting this to `0` allows ONNX Runtime to choose the optimal number.
    pub num_threads: usize,
}

impl Default for InferenceConfig {
    fn default() -> Self {
        Self {
            imgsz: DEFAULT_IMAGE_SIZE,
            num_threads: 0, // 0 = let ONNX Runtime decide
        }
    }
}

impl InferenceConfig {
    /// Create a new configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the input image size (height, width).
    #[must_use]
    pub const fn with_imgsz(mut self, height: u32, width: u32) -> Self {
        self.imgsz = (height, width);
        self
    }

    /// Set the number of intra-op threads. Set to `0` for auto-configuration.
    #[must_use]
    pub const fn with_threads(mut self, threads: usize) -> Self {
        self.num_threads = threads;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = InferenceConfig::default();
        assert_eq!(config.imgsz, (224, 224));
        assert_eq!(config.num_threads, 0);
    }

    #[test]
    fn test_config_builder() {
        let config = InferenceConfig::new().with_imgsz(256, 256).with_threads(8);
        assert_eq!(config.imgsz, (256, 256));
        assert_eq!(config.num_threads, 8);
    }
}
