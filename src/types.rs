//! Core data types for COCO polygon annotations and segmentation metrics.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A vertex in image pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// Create a new point.
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Snap to the integer pixel grid, truncating toward zero.
    ///
    /// Values beyond the `i32` range saturate and NaN maps to 0, so pixel
    /// arithmetic on the result cannot overflow `i64`.
    pub fn to_pixel(&self) -> (i64, i64) {
        (i64::from(self.x as i32), i64::from(self.y as i32))
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self::new(x as f64, y as f64)
    }
}

/// Reshape a flat `[x1, y1, x2, y2, ...]` ring into points.
///
/// A trailing unpaired coordinate is ignored.
pub fn points_from_flat(coords: &[f64]) -> Vec<Point> {
    coords
        .chunks_exact(2)
        .map(|pair| Point::new(pair[0], pair[1]))
        .collect()
}

/// Output raster dimensions, `(height, width)` in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImageShape {
    pub height: usize,
    pub width: usize,
}

impl ImageShape {
    /// Create a new image shape.
    pub fn new(height: usize, width: usize) -> Self {
        Self { height, width }
    }

    /// Total number of pixels.
    pub fn pixel_count(&self) -> usize {
        self.height * self.width
    }

    /// Total number of pixels, or `None` if it does not fit in `usize`.
    pub fn checked_pixel_count(&self) -> Option<usize> {
        self.height.checked_mul(self.width)
    }

    /// Both dimensions are non-zero.
    pub fn is_valid(&self) -> bool {
        self.height > 0 && self.width > 0
    }
}

impl From<(usize, usize)> for ImageShape {
    fn from((height, width): (usize, usize)) -> Self {
        Self::new(height, width)
    }
}

/// Represents a category in the COCO dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: u64,
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub supercategory: Option<String>,
}

/// Represents an image in the COCO dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Image {
    pub id: u64,
    pub file_name: String,
    pub height: u32,
    pub width: u32,
}

/// Represents a polygon annotation in COCO format.
///
/// Only `segmentation` takes part in evaluation; the remaining fields are
/// carried through so real COCO files deserialize without loss.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Annotation {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_id: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<u64>,
    /// Polygon rings, each a flat `[x1, y1, x2, y2, ...]` list
    #[serde(default)]
    pub segmentation: Vec<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bbox: Option<Vec<f64>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub area: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iscrowd: Option<u8>,
    /// Confidence score (for predictions)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl Annotation {
    /// Build an annotation holding a single polygon ring.
    pub fn from_polygon<P: Into<Point> + Copy>(points: &[P]) -> Self {
        let ring = points
            .iter()
            .flat_map(|&p| {
                let p: Point = p.into();
                [p.x, p.y]
            })
            .collect();
        Self {
            segmentation: vec![ring],
            ..Self::default()
        }
    }

    /// The outer ring (ring 0) as points, or `None` when there is no ring.
    pub fn polygon(&self) -> Option<Vec<Point>> {
        self.segmentation.first().map(|ring| points_from_flat(ring))
    }
}

/// Represents a COCO document. Every top-level list may be absent.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CocoDataset {
    #[serde(default)]
    pub images: Vec<Image>,
    #[serde(default)]
    pub annotations: Vec<Annotation>,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Pixel-level comparison between a ground-truth and a predicted mask.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct SegmentationMetrics {
    pub iou: f64,
    pub precision: f64,
    pub recall: f64,
    pub f1: f64,
    pub pixel_accuracy: f64,
    pub dice: f64,
}

impl SegmentationMetrics {
    /// Metrics in fixed order: (IoU, Precision, Recall, F1, Pixel Accuracy, Dice).
    pub fn as_tuple(&self) -> (f64, f64, f64, f64, f64, f64) {
        (
            self.iou,
            self.precision,
            self.recall,
            self.f1,
            self.pixel_accuracy,
            self.dice,
        )
    }
}

impl From<(f64, f64, f64, f64, f64, f64)> for SegmentationMetrics {
    fn from(t: (f64, f64, f64, f64, f64, f64)) -> Self {
        Self {
            iou: t.0,
            precision: t.1,
            recall: t.2,
            f1: t.3,
            pixel_accuracy: t.4,
            dice: t.5,
        }
    }
}

impl fmt::Display for SegmentationMetrics {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "IoU: {:.4}", self.iou)?;
        writeln!(f, "Precision: {:.4}", self.precision)?;
        writeln!(f, "Recall: {:.4}", self.recall)?;
        writeln!(f, "F1 Score: {:.4}", self.f1)?;
        writeln!(f, "Pixel Accuracy: {:.4}", self.pixel_accuracy)?;
        write!(f, "Dice Coefficient: {:.4}", self.dice)
    }
}
