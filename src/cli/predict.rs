// DermaScan 🩺 AGPL-3.0 License - https://github.com/dermascan/inference

//! The one-shot prediction sequence behind the CLI.

use std::io::{self, Write};

use crate::cli::args::Cli;
use crate::error::{InferenceError, Result};
use crate::model::{default_model_path, LesionModel};
use crate::tabular::{BodyArea, TabularFeatures};
use crate::{verbose, InferenceConfig};

/// Run one lesion prediction: validate the image path, load the model,
/// preprocess both inputs, predict, and print the probability percentage.
///
/// Prints exactly one line to stdout on success. Every failure is returned
/// to the caller; nothing here retries or recovers.
///
/// # Errors
///
/// Returns an error if the image doesn't exist, the model can't be loaded,
/// or inference fails.
pub fn run_prediction(args: &Cli) -> Result<()> {
    // Cheap filesystem check before any model loading
    let image_path = &args.image_path;
    if !image_path.exists() {
        return Err(InferenceError::NotFound(format!(
            "image not found at path: {}",
            image_path.display()
        )));
    }

    let model_path = match &args.model {
        Some(path) => path.clone(),
        None => default_model_path()?,
    };
    verbose!("Model: {}", model_path.display());

    let config = InferenceConfig::new();
    let mut model = LesionModel::load_with_config(&model_path, config)?;
    verbose!(
        "Inputs: image='{}' imgsz=({}, {}), tabular='{}'",
        model.image_input(),
        model.imgsz().0,
        model.imgsz().1,
        model.tabular_input()
    );

    let features = TabularFeatures {
        age: args.age,
        gender: args.gender,
        max_diameter: args.maximum,
        min_diameter: args.minimum,
        area: BodyArea::from(args.area.as_str()),
    };
    verbose!(
        "Features: age={} gender={} max={} min={} area={}",
        features.age,
        features.gender,
        features.max_diameter,
        features.min_diameter,
        features.area.as_str()
    );

    let probability = model.predict(image_path, &features)? * 100.0;

    // Output ONLY the number, flushed before exit
    println!("{probability}");
    io::stdout().flush()?;

    Ok(())
}
