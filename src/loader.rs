//! JSON loading utilities for COCO format annotation files.

use crate::error::Result;
use crate::types::{Annotation, CocoDataset};
use log::{debug, warn};
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

/// Load a COCO dataset from a JSON file.
///
/// # Arguments
///
/// * `path` - Path to the COCO JSON file
///
/// # Errors
///
/// Returns an error if the file cannot be read or parsed. Out-of-range
/// numbers such as `1e400` are rejected by the JSON parser.
///
/// # Example
///
/// ```no_run
/// use seg_eval::loader::load_from_file;
///
/// let dataset = load_from_file("annotations.json").unwrap();
/// println!("Loaded {} annotations", dataset.annotations.len());
/// ```
pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<CocoDataset> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let reader = BufReader::new(file);
    let dataset: CocoDataset = serde_json::from_reader(reader)?;

    validate_dataset(&dataset)?;
    debug!(
        "loaded {} annotations from {}",
        dataset.annotations.len(),
        path.display()
    );

    Ok(dataset)
}

/// Load a COCO dataset from a JSON string.
///
/// A document without an `annotations` key yields an empty annotation list.
///
/// # Example
///
/// ```
/// use seg_eval::loader::load_from_string;
///
/// let dataset = load_from_string(r#"{"images": []}"#).unwrap();
/// assert!(dataset.annotations.is_empty());
/// ```
pub fn load_from_string(json_str: &str) -> Result<CocoDataset> {
    let dataset: CocoDataset = serde_json::from_str(json_str)?;
    validate_dataset(&dataset)?;
    Ok(dataset)
}

/// Load only the annotation list of a COCO JSON file.
pub fn load_annotations<P: AsRef<Path>>(path: P) -> Result<Vec<Annotation>> {
    Ok(load_from_file(path)?.annotations)
}

/// Flag rings that will be read only partially.
fn validate_dataset(dataset: &CocoDataset) -> Result<()> {
    for (index, annotation) in dataset.annotations.iter().enumerate() {
        let Some(ring) = annotation.segmentation.first() else {
            continue;
        };

        if ring.len() % 2 != 0 {
            warn!(
                "annotation #{index} has an odd number of coordinates ({}), dropping the last one",
                ring.len()
            );
        }
        if annotation.segmentation.len() > 1 {
            debug!(
                "annotation #{index} has {} rings, only the first is used",
                annotation.segmentation.len()
            );
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SegEvalError;

    #[test]
    fn test_load_from_string() {
        let json = r#"{
            "annotations": [
                {
                    "id": 1,
                    "image_id": 1,
                    "category_id": 1,
                    "segmentation": [[0, 0, 0, 10, 10, 10, 10, 0]]
                }
            ],
            "categories": [
                {
                    "id": 1,
                    "name": "person"
                }
            ]
        }"#;

        let dataset = load_from_string(json).unwrap();
        assert_eq!(dataset.annotations.len(), 1);
        assert_eq!(dataset.categories.len(), 1);
        assert_eq!(dataset.annotations[0].polygon().unwrap().len(), 4);
    }

    #[test]
    fn test_missing_annotations_key() {
        let dataset = load_from_string("{}").unwrap();
        assert!(dataset.annotations.is_empty());
    }

    #[test]
    fn test_odd_coordinate_count_is_accepted() {
        let json = r#"{"annotations": [{"segmentation": [[0, 0, 5, 5, 0]]}]}"#;
        let dataset = load_from_string(json).unwrap();
        assert_eq!(dataset.annotations[0].polygon().unwrap().len(), 2);
    }

    #[test]
    fn test_invalid_json() {
        let result = load_from_string("{ not json");
        assert!(matches!(result, Err(SegEvalError::JsonError(_))));
    }

    #[test]
    fn test_out_of_range_number_is_a_parse_error() {
        let json = r#"{"annotations": [{"segmentation": [[0, 0, 1e400, 0, 0, 5]]}]}"#;
        let result = load_from_string(json);
        assert!(matches!(result, Err(SegEvalError::JsonError(_))));
    }
}
