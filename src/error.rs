//! Error types for the seg-eval library.

use thiserror::Error;

/// Result type for seg-eval operations.
pub type Result<T> = std::result::Result<T, SegEvalError>;

/// Error types that can occur while loading inputs or comparing masks.
#[derive(Error, Debug)]
pub enum SegEvalError {
    /// Error during JSON parsing or serialization.
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// Error while parsing the YAML run configuration.
    #[error("YAML error: {0}")]
    YamlError(#[from] serde_yaml::Error),

    /// Error during I/O operations.
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// Invalid annotation data.
    #[error("Invalid annotation: {0}")]
    InvalidAnnotation(String),

    /// Invalid or incomplete run configuration.
    #[error("Invalid config: {0}")]
    InvalidConfig(String),

    /// Two masks that must be compared pixel by pixel have different shapes.
    #[error("Mask shape mismatch: ground truth is {gt_height}x{gt_width}, prediction is {pred_height}x{pred_width}")]
    ShapeMismatch {
        gt_height: usize,
        gt_width: usize,
        pred_height: usize,
        pred_width: usize,
    },
}
