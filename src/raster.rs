//! Polygon rasterization.
//!
//! Polygons are filled with an even-odd scanline rule and their edges are
//! traced afterwards, so boundary pixels are always part of the fill. With
//! integer vertices an axis-aligned square from `(0, 0)` to `(10, 10)`
//! therefore covers 11x11 pixels.

use crate::mask::Mask;
use crate::types::{Annotation, ImageShape, Point};
use log::{debug, warn};

/// Rasterize a single polygon into a fresh mask of `shape`.
///
/// Vertices are truncated to integer pixel coordinates, saturating at the
/// `i32` range. Polygons with fewer than three vertices, or whose vertices
/// are all collinear, produce an all-background mask.
///
/// # Example
///
/// ```
/// use seg_eval::raster::points_to_mask;
/// use seg_eval::types::{ImageShape, Point};
///
/// let square: Vec<Point> = [(10, 10), (10, 20), (20, 20), (20, 10)]
///     .into_iter()
///     .map(Point::from)
///     .collect();
/// let mask = points_to_mask(&square, ImageShape::new(30, 30));
/// assert_eq!(mask.count_foreground(), 121);
/// ```
pub fn points_to_mask(points: &[Point], shape: ImageShape) -> Mask {
    let mut mask = Mask::zeros(shape);
    fill_polygon(&mut mask, points);
    mask
}

/// OR a filled polygon into an existing mask.
///
/// Returns `false` without touching the mask when the polygon is degenerate.
pub fn fill_polygon(mask: &mut Mask, points: &[Point]) -> bool {
    if points.len() < 3 {
        return false;
    }

    let vertices: Vec<(i64, i64)> = points.iter().map(Point::to_pixel).collect();
    if is_collinear(&vertices) {
        return false;
    }
    if mask.height() == 0 || mask.width() == 0 {
        return true;
    }

    fill_interior(mask, &vertices);
    for (i, &start) in vertices.iter().enumerate() {
        let end = vertices[(i + 1) % vertices.len()];
        draw_line(mask, start, end);
    }
    true
}

/// Rasterize ring 0 of every annotation and merge them into one mask.
///
/// Annotations without a ring, or whose ring is degenerate, contribute
/// nothing. The result does not depend on annotation order.
pub fn rasterize_annotations(annotations: &[Annotation], shape: ImageShape) -> Mask {
    let mut combined = Mask::zeros(shape);
    let mut filled = 0usize;

    for (index, annotation) in annotations.iter().enumerate() {
        let Some(points) = annotation.polygon() else {
            warn!("annotation #{index} has no segmentation ring, skipping");
            continue;
        };
        if fill_polygon(&mut combined, &points) {
            filled += 1;
        } else {
            warn!(
                "annotation #{index} has a degenerate polygon ({} vertices), skipping",
                points.len()
            );
        }
    }

    debug!(
        "rasterized {filled}/{} annotations into {}x{} mask ({} foreground pixels)",
        annotations.len(),
        shape.height,
        shape.width,
        combined.count_foreground()
    );
    combined
}

/// True when every vertex lies on one line, i.e. the polygon encloses nothing.
fn is_collinear(vertices: &[(i64, i64)]) -> bool {
    let origin = vertices[0];
    let Some(&dir) = vertices.iter().find(|&&v| v != origin) else {
        return true;
    };
    let dx = (dir.0 - origin.0) as i128;
    let dy = (dir.1 - origin.1) as i128;
    vertices.iter().all(|&(x, y)| {
        dx * (y - origin.1) as i128 - dy * (x - origin.0) as i128 == 0
    })
}

/// Even-odd scanline fill of the region strictly bounded by the edges.
fn fill_interior(mask: &mut Mask, vertices: &[(i64, i64)]) {
    let max_row = mask.height() as i64 - 1;
    let max_col = mask.width() as i64 - 1;

    let y_min = vertices.iter().map(|v| v.1).min().unwrap_or(0).max(0);
    let y_max = vertices.iter().map(|v| v.1).max().unwrap_or(-1).min(max_row);

    let n = vertices.len();
    let mut crossings: Vec<f64> = Vec::with_capacity(n);

    for y in y_min..=y_max {
        crossings.clear();
        for i in 0..n {
            let (a, b) = (vertices[i], vertices[(i + 1) % n]);
            if a.1 == b.1 {
                continue;
            }
            let (lo, hi) = if a.1 < b.1 { (a, b) } else { (b, a) };
            // Half-open in y so a shared vertex is counted once.
            if lo.1 <= y && y < hi.1 {
                let t = (y - lo.1) as f64 / (hi.1 - lo.1) as f64;
                crossings.push(lo.0 as f64 + t * (hi.0 - lo.0) as f64);
            }
        }
        crossings.sort_by(|a, b| a.total_cmp(b));

        for pair in crossings.chunks_exact(2) {
            let x0 = (pair[0].ceil() as i64).max(0);
            let x1 = (pair[1].floor() as i64).min(max_col);
            if x0 <= x1 {
                mask.fill_span(y as usize, x0 as usize, x1 as usize);
            }
        }
    }
}

/// Trace the edge between two integer vertices, clipped to the mask.
///
/// Steps along the major axis one pixel at a time, rounding the minor
/// coordinate to the nearest pixel. Only the part of the major axis that
/// overlaps the canvas is visited, so far-away vertices cost nothing extra.
fn draw_line(mask: &mut Mask, (x0, y0): (i64, i64), (x1, y1): (i64, i64)) {
    let max_col = mask.width() as i64 - 1;
    let max_row = mask.height() as i64 - 1;
    if x0.max(x1) < 0 || y0.max(y1) < 0 || x0.min(x1) > max_col || y0.min(y1) > max_row {
        return;
    }

    let (dx, dy) = (x1 - x0, y1 - y0);
    if dx == 0 && dy == 0 {
        mask.set(x0 as usize, y0 as usize);
        return;
    }

    if dx.abs() >= dy.abs() {
        for x in x0.min(x1).max(0)..=x0.max(x1).min(max_col) {
            let y = y0 + div_round(i128::from(x - x0) * i128::from(dy), i128::from(dx));
            if (0..=max_row).contains(&y) {
                mask.set(x as usize, y as usize);
            }
        }
    } else {
        for y in y0.min(y1).max(0)..=y0.max(y1).min(max_row) {
            let x = x0 + div_round(i128::from(y - y0) * i128::from(dx), i128::from(dy));
            if (0..=max_col).contains(&x) {
                mask.set(x as usize, y as usize);
            }
        }
    }
}

/// `n / d` rounded half away from zero. `d` must be non-zero.
fn div_round(n: i128, d: i128) -> i64 {
    let (n, d) = if d < 0 { (-n, -d) } else { (n, d) };
    let q = if n >= 0 {
        (2 * n + d) / (2 * d)
    } else {
        -((-2 * n + d) / (2 * d))
    };
    q as i64
}
