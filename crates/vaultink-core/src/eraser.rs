//! Eraser hit detection and stroke splitting.
//!
//! The eraser works in normalized space and is deliberately pure: the store
//! hands in its committed strokes and swaps in the returned sequence
//! atomically, so there is no iterate-and-remove surgery anywhere.

use crate::geometry::NormalizedPoint;
use crate::stroke::Stroke;

/// Eraser reach, as a multiple of the target stroke's width ratio.
pub const ERASE_RADIUS_FACTOR: f64 = 2.5;

/// Apply one eraser sample to a committed stroke list.
///
/// Scans in draw order and splits the first stroke with a point inside the
/// erase radius. Touched points are dropped outright; each surviving run of
/// two or more points becomes its own stroke with the original color and
/// width ratio, appended after the remaining strokes. At most one stroke is
/// affected per call; a drag accumulates removals across many calls.
///
/// Returns `None` when no stroke is in reach.
pub fn erase_at(strokes: &[Stroke], point: NormalizedPoint) -> Option<Vec<Stroke>> {
    for (index, stroke) in strokes.iter().enumerate() {
        let radius = stroke.width_ratio() * ERASE_RADIUS_FACTOR;
        let runs = split_points(stroke.points(), point, radius);

        // A single run covering every original point means the sample never
        // actually landed on this stroke.
        if runs.len() == 1 && runs[0].len() == stroke.len() {
            continue;
        }

        let mut result = strokes.to_vec();
        result.remove(index);
        for run in runs {
            if run.len() > 1 {
                result.push(Stroke::new(run, stroke.color(), stroke.width_ratio()));
            }
        }
        return Some(result);
    }
    None
}

/// Partition `points` into maximal contiguous runs strictly outside `radius`
/// of `center`. Points within the radius are cut points and belong to no
/// run.
fn split_points(
    points: &[NormalizedPoint],
    center: NormalizedPoint,
    radius: f64,
) -> Vec<Vec<NormalizedPoint>> {
    let mut runs = Vec::new();
    let mut current = Vec::new();

    for &point in points {
        if point.distance(center) <= radius {
            if !current.is_empty() {
                runs.push(std::mem::take(&mut current));
            }
        } else {
            current.push(point);
        }
    }

    if !current.is_empty() {
        runs.push(current);
    }
    runs
}
