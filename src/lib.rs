// DermaScan 🩺 AGPL-3.0 License - https://github.com/dermascan/inference

#![allow(clippy::multiple_crate_versions)]

//! # DermaScan Inference Library
//!
//! One-shot skin-lesion inference over a pretrained two-input classifier,
//! backed by ONNX Runtime. Given a lesion photo and a fixed set of patient
//! metadata, the library preprocesses both inputs, runs a single forward
//! pass, and returns the malignancy probability.
//!
//! ## Quick Start (Library)
//!
//! ```no_run
//! use dermascan_inference::{BodyArea, LesionModel, TabularFeatures};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let mut model = LesionModel::load("best_model.onnx")?;
//!
//!     let features = TabularFeatures {
//!         age: 45.0,
//!         gender: 1,
//!         max_diameter: 1.2,
//!         min_diameter: 0.3,
//!         area: BodyArea::HeadNeck,
//!     };
//!
//!     let probability = model.predict("lesion.jpg", &features)?;
//!     println!("{}", probability * 100.0);
//!     Ok(())
//! }
//! ```
//!
//! ## CLI Usage
//!
//! The `dermascan-inference` binary takes six positional arguments and
//! prints exactly one line on stdout: the probability as a percentage.
//!
//! ```bash
//! dermascan-inference <min> <max> <age> <gender> <area> <image_path>
//!
//! # Example
//! dermascan-inference 0.3 1.2 45 1 head_neck lesion.jpg
//! ```
//!
//! Exit status is 0 on success and 1 on any failure (bad arguments, missing
//! image, model load failure, inference failure), with one diagnostic line
//! on stderr. This makes the tool safe to spawn from a backend service and
//! parse stdout directly.
//!
//! ## Module Overview
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`model`] | Core [`LesionModel`] for loading the artifact and predicting |
//! | [`preprocessing`] | Image decode, resize, and normalization |
//! | [`tabular`] | Patient metadata encoding ([`TabularFeatures`], [`BodyArea`]) |
//! | [`inference`] | [`InferenceConfig`] inference settings |
//! | [`error`] | Error types ([`InferenceError`], [`Result`]) |
//! | [`cli`] | Argument parsing and the prediction entry point |

// Modules
pub mod cli;
pub mod error;
pub mod inference;
pub mod model;
pub mod preprocessing;
pub mod tabular;

// Re-export main types for convenience
pub use error::{InferenceError, Result};
pub use inference::{InferenceConfig, DEFAULT_IMAGE_SIZE};
pub use model::{default_model_path, LesionModel, MODEL_FILE_NAME};
pub use preprocessing::preprocess_image;
pub use tabular::{BodyArea, TabularFeatures, TABULAR_LEN};

/// Library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Library name.
pub const NAME: &str = env!("CARGO_PKG_NAME");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version() {
        assert!(VERSION.contains('.'));
    }

    #[test]
    fn test_name() {
        assert_eq!(NAME, "dermascan-inference");
    }
}
