// DermaScan 🩺 AGPL-3.0 License - https://github.com/dermascan/inference

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use crate::error::InferenceError;

/// CLI arguments parser.
///
/// The tool takes exactly six positional arguments, in the same order the
/// backend passes them when spawning a prediction.
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
#[command(after_help = r#"Arguments are positional and all required:
    <MINIMUM>     Minimum lesion diameter (standardized)
    <MAXIMUM>     Maximum lesion diameter (standardized)
    <AGE>         Patient age in years
    <GENDER>      1 for male, 0 for female
    <AREA>        Body area: anterior_torso, head_neck, lower_extremity,
                  posterior_torso (anything else is encoded as "other")
    <IMAGE_PATH>  Path to the lesion photo

On success, stdout carries exactly one line: the predicted probability as a
percentage. All diagnostics go to stderr.

Examples:
    dermascan-inference -- -1.7 -1.4 45 1 head_neck lesion.jpg
    dermascan-inference 0.5 0.9 60 0 posterior_torso scans/mole.png
    dermascan-inference --model ./best_model.onnx 0.5 0.9 60 0 forearm img.jpg"#)]
pub struct Cli {
    /// Minimum lesion diameter (standardized)
    #[arg(allow_hyphen_values = true)]
    pub minimum: f32,

    /// Maximum lesion diameter (standardized)
    #[arg(allow_hyphen_values = true)]
    pub maximum: f32,

    /// Patient age in years
    pub age: f32,

    /// Gender flag: 1 for male, 0 for female
    #[arg(value_parser = clap::value_parser!(u8).range(0..=1))]
    pub gender: u8,

    /// Body area of the lesion
    pub area: String,

    /// Path to the lesion photo
    pub image_path: PathBuf,

    /// Path to the ONNX model artifact (defaults to best_model.onnx next to
    /// the executable)
    #[arg(short, long)]
    pub model: Option<PathBuf>,

    /// Print a model and input summary to stderr
    #[arg(long, default_value_t = false)]
    pub verbose: bool,
}

/// Fold a clap boundary error into the flat error taxonomy.
///
/// The failure contract is one diagnostic line, so clap's multi-line
/// rendering (message, usage block, help hint) is collapsed to its message
/// content and clap's own `error:` prefix is dropped.
#[must_use]
pub fn map_clap_error(err: &clap::Error) -> InferenceError {
    let rendered = err.render().to_string();
    let message = rendered
        .lines()
        .take_while(|line| {
            !line.starts_with("Usage:") && !line.starts_with("For more information")
        })
        .filter_map(|line| {
            let line = line.trim();
            (!line.is_empty()).then_some(line)
        })
        .collect::<Vec<_>>()
        .join(" ");
    let message = message
        .strip_prefix("error: ")
        .unwrap_or(&message)
        .to_string();

    match err.kind() {
        ErrorKind::ValueValidation | ErrorKind::InvalidValue => {
            InferenceError::ParseError(message)
        }
        _ => InferenceError::UsageError(message),
    }
}
