//! YAML run configuration.
//!
//! ```yaml
//! input:
//!   ground_truth_coco_output: gt.json
//!   prediction_coco_output: pred.json
//! image:
//!   height: 480
//!   width: 640
//! ```

use crate::error::{Result, SegEvalError};
use crate::types::ImageShape;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Locations of the two annotation files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputConfig {
    pub ground_truth_coco_output: PathBuf,
    pub prediction_coco_output: PathBuf,
}

/// Raster size both annotation sets are drawn onto.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ImageConfig {
    pub height: usize,
    pub width: usize,
}

/// Complete run configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvalConfig {
    pub input: InputConfig,
    pub image: ImageConfig,
}

impl EvalConfig {
    /// The `(height, width)` both masks are rasterized at.
    pub fn image_shape(&self) -> ImageShape {
        ImageShape::new(self.image.height, self.image.width)
    }

    /// Check that the image shape is usable.
    pub fn validate(&self) -> Result<()> {
        if !self.image_shape().is_valid() {
            return Err(SegEvalError::InvalidConfig(format!(
                "image dimensions must be positive, got {}x{}",
                self.image.height, self.image.width
            )));
        }
        if self.image_shape().checked_pixel_count().is_none() {
            return Err(SegEvalError::InvalidConfig(format!(
                "image of {}x{} pixels is too large",
                self.image.height, self.image.width
            )));
        }
        Ok(())
    }

    /// Resolve relative input paths against `base`.
    pub fn resolve_paths(&mut self, base: &Path) {
        for path in [
            &mut self.input.ground_truth_coco_output,
            &mut self.input.prediction_coco_output,
        ] {
            if path.is_relative() {
                *path = base.join(&*path);
            }
        }
    }
}

/// Parse and validate a configuration from a YAML string.
///
/// # Example
///
/// ```
/// use seg_eval::config::load_config_from_str;
///
/// let yaml = "
/// input:
///   ground_truth_coco_output: gt.json
///   prediction_coco_output: pred.json
/// image:
///   height: 20
///   width: 30
/// ";
/// let config = load_config_from_str(yaml).unwrap();
/// assert_eq!(config.image_shape().width, 30);
/// ```
pub fn load_config_from_str(yaml: &str) -> Result<EvalConfig> {
    let config: EvalConfig = serde_yaml::from_str(yaml)?;
    config.validate()?;
    Ok(config)
}

/// Load a configuration file. Relative input paths are taken relative to the
/// directory containing the file.
pub fn load_config_from_file<P: AsRef<Path>>(path: P) -> Result<EvalConfig> {
    let path = path.as_ref();
    let mut config = load_config_from_str(&fs::read_to_string(path)?)?;
    if let Some(dir) = path.parent() {
        config.resolve_paths(dir);
    }
    Ok(config)
}
