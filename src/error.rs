// DermaScan 🩺 AGPL-3.0 License - https://github.com/dermascan/inference

//! Error types for the inference library.

use std::fmt;

/// Result type alias for inference operations.
pub type Result<T> = std::result::Result<T, InferenceError>;

/// Main error type for the inference library.
///
/// Every variant maps to the same process-level outcome: one diagnostic
/// line and exit status 1. The tags exist so callers can tell a bad
/// invocation from a runtime failure, not to drive differentiated recovery.
#[derive(Debug)]
pub enum InferenceError {
    /// Wrong number or arrangement of command-line arguments.
    UsageError(String),
    /// A value failed to parse (non-numeric where numeric expected).
    ParseError(String),
    /// Input file does not exist on the filesystem.
    NotFound(String),
    /// Error loading the ONNX model.
    ModelLoadError(String),
    /// Error decoding or processing the input image.
    ImageError(String),
    /// Error during model inference.
    InferenceError(String),
    /// Wrapped `std::io::Error`
    Io(std::io::Error),
}

impl fmt::Display for InferenceError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UsageError(msg) => write!(f, "Usage error: {msg}"),
            Self::ParseError(msg) => write!(f, "Parse error: {msg}"),
            Self::NotFound(msg) => write!(f, "Not found: {msg}"),
            Self::ModelLoadError(msg) => write!(f, "Model load error: {msg}"),
            Self::ImageError(msg) => write!(f, "Image error: {msg}"),
            Self::InferenceError(msg) => write!(f, "Inference error: {msg}"),
            Self::Io(err) => write!(f, "IO error: {err}"),
        }
    }
}

impl std::error::Error for InferenceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            _ => None,
        }
    }
}

impl From<std::io::Error> for InferenceError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<image::ImageError> for InferenceError {
    fn from(err: image::ImageError) -> Self {
        Self::ImageError(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = InferenceError::ModelLoadError("test".to_string());
        assert_eq!(err.to_string(), "Model load error: test");

        let err = InferenceError::NotFound("image.jpg".to_string());
        assert_eq!(err.to_string(), "Not found: image.jpg");

        let err = InferenceError::UsageError("6 arguments required".to_string());
        assert_eq!(err.to_string(), "Usage error: 6 arguments required");
    }

    #[test]
    fn test_io_error_source() {
        let io = std::io::Error::other("broken");
        let err = InferenceError::from(io);
        assert!(std::error::Error::source(&err).is_some());
    }
}
