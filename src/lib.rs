//! # seg-eval
//!
//! Pixel-level segmentation metrics for COCO polygon annotations.
//!
//! Ground-truth and predicted polygons are each rasterized onto one binary
//! mask, and the two masks are compared:
//! - **IoU** (Intersection over Union)
//! - **Precision** and **Recall**
//! - **F1 Score**
//! - **Pixel Accuracy**
//! - **Dice coefficient**
//!
//! All annotations of a set are merged into one mask, so the metrics measure
//! region overlap, not per-object detection quality.
//!
//! ## Quick Start
//!
//! ```rust
//! use seg_eval::evaluator::evaluate_metrics;
//! use seg_eval::types::{Annotation, ImageShape};
//!
//! let ground_truth = vec![Annotation::from_polygon(&[(0, 0), (0, 10), (10, 10), (10, 0)])];
//! let predictions = vec![Annotation::from_polygon(&[(5, 0), (5, 10), (15, 10), (15, 0)])];
//!
//! let (iou, precision, recall, f1, pixel_accuracy, dice) =
//!     evaluate_metrics(&ground_truth, &predictions, ImageShape::new(20, 20));
//! assert!(iou > 0.0 && iou < 1.0);
//! # let _ = (precision, recall, f1, pixel_accuracy, dice);
//! ```
//!
//! ## COCO Format
//!
//! Annotation files are COCO JSON documents; only the first ring of each
//! `segmentation` is read:
//!
//! ```json
//! {
//!   "annotations": [
//!     {
//!       "id": 1,
//!       "image_id": 1,
//!       "category_id": 1,
//!       "segmentation": [[x1, y1, x2, y2, x3, y3, ...]]
//!     }
//!   ]
//! }
//! ```

pub mod error;
pub mod types;
pub mod config;
pub mod loader;
pub mod mask;
pub mod raster;
pub mod metrics;
pub mod evaluator;

// Re-export commonly used types and functions
pub use error::{SegEvalError, Result};
pub use types::{Annotation, CocoDataset, ImageShape, Point, SegmentationMetrics};
pub use mask::{combine_masks, Mask};
pub use raster::{points_to_mask, rasterize_annotations};
pub use evaluator::{evaluate_from_config, evaluate_masks, evaluate_metrics};
pub use loader::{load_annotations, load_from_file, load_from_string};
pub use config::{load_config_from_file, EvalConfig};
