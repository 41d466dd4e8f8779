//! Detection-to-track matching rules.
//!
//! The default rule is a greedy single-pass scan: a detection is absorbed by
//! the *first* existing track it overlaps above the gate, with no best-match
//! selection and no exclusivity. [`linear_assignment`] provides the globally
//! minimal-cost alternative on a `1 - IoU` cost matrix.

use crate::tracker::rect::Rect;
use ndarray::Array2;

/// Index of the first track box whose IoU with `det_box` strictly exceeds
/// `min_iou`, scanning in set order.
///
/// No best-match selection: an earlier track with barely-qualifying overlap
/// wins over a later track with near-perfect overlap. Order-dependent by
/// design.
pub fn first_overlap(track_boxes: &[Rect], det_box: &Rect, min_iou: f32) -> Option<usize> {
    track_boxes.iter().position(|t| det_box.iou(t) > min_iou)
}

/// Compute IoU distance (`1 - IoU`) matrix between tracks and detections.
pub fn iou_distance(track_boxes: &[Rect], det_boxes: &[Rect]) -> Array2<f32> {
    let mut dists = Array2::zeros((track_boxes.len(), det_boxes.len()));
    for (i, t) in track_boxes.iter().enumerate() {
        for (j, d) in det_boxes.iter().enumerate() {
            dists[[i, j]] = 1.0 - t.iou(d);
        }
    }
    dists
}

/// Outcome of a linear assignment between tracks (rows) and detections
/// (columns).
#[derive(Debug, Clone)]
pub struct AssignmentResult {
    pub matches: Vec<(usize, usize)>,
    pub unmatched_tracks: Vec<usize>,
    pub unmatched_detections: Vec<usize>,
}

/// Globally minimal-cost assignment (Jonker-Volgenant) on a cost matrix,
/// keeping only pairs with cost at most `thresh`.
pub fn linear_assignment(cost_matrix: &Array2<f32>, thresh: f32) -> AssignmentResult {
    let (num_rows, num_cols) = cost_matrix.dim();

    if num_rows == 0 {
        return AssignmentResult {
            matches: vec![],
            unmatched_tracks: vec![],
            unmatched_detections: (0..num_cols).collect(),
        };
    }

    if num_cols == 0 {
        return AssignmentResult {
            matches: vec![],
            unmatched_tracks: (0..num_rows).collect(),
            unmatched_detections: vec![],
        };
    }

    // lapjv needs a square matrix; pad with a prohibitive cost.
    let size = num_rows.max(num_cols);
    let mut padded = Array2::<f64>::from_elem((size, size), 1e6);

    for i in 0..num_rows {
        for j in 0..num_cols {
            padded[[i, j]] = cost_matrix[[i, j]] as f64;
        }
    }

    let result = lapjv::lapjv(&padded);
    let mut matches = vec![];
    let mut unmatched_tracks = vec![];
    let mut unmatched_detections_mask: Vec<bool> = vec![true; num_cols];

    match result {
        Ok((row_to_col, _)) => {
            for (row_idx, &col_idx) in row_to_col.iter().enumerate() {
                if row_idx >= num_rows {
                    continue;
                }
                if col_idx >= num_cols {
                    unmatched_tracks.push(row_idx);
                } else if cost_matrix[[row_idx, col_idx]] <= thresh {
                    matches.push((row_idx, col_idx));
                    unmatched_detections_mask[col_idx] = false;
                } else {
                    unmatched_tracks.push(row_idx);
                }
            }
        }
        Err(_) => {
            unmatched_tracks = (0..num_rows).collect();
        }
    }

    let unmatched_detections: Vec<usize> = unmatched_detections_mask
        .iter()
        .enumerate()
        .filter_map(|(i, &u)| if u { Some(i) } else { None })
        .collect();

    AssignmentResult {
        matches,
        unmatched_tracks,
        unmatched_detections,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_overlap_takes_first_not_best() {
        let tracks = vec![
            Rect::new(0.0, 0.0, 20.0, 20.0),
            Rect::new(2.0, 2.0, 20.0, 20.0),
        ];
        // Overlaps track 1 almost perfectly, but track 0 qualifies first.
        let det = Rect::new(2.0, 2.0, 20.0, 20.0);
        assert_eq!(first_overlap(&tracks, &det, 0.1), Some(0));
    }

    #[test]
    fn test_first_overlap_threshold_is_strict() {
        let tracks = vec![Rect::new(0.0, 0.0, 10.0, 10.0)];
        let det = Rect::new(0.0, 0.0, 10.0, 10.0);
        // IoU is exactly 1.0; a gate of 1.0 must reject it.
        assert_eq!(first_overlap(&tracks, &det, 1.0), None);
        assert_eq!(first_overlap(&tracks, &det, 0.99), Some(0));
    }

    #[test]
    fn test_first_overlap_no_candidates() {
        assert_eq!(first_overlap(&[], &Rect::new(0.0, 0.0, 5.0, 5.0), 0.1), None);
    }

    #[test]
    fn test_linear_assignment_empty() {
        let empty = Array2::<f32>::zeros((0, 3));
        let result = linear_assignment(&empty, 0.9);
        assert!(result.matches.is_empty());
        assert_eq!(result.unmatched_detections, vec![0, 1, 2]);

        let empty = Array2::<f32>::zeros((2, 0));
        let result = linear_assignment(&empty, 0.9);
        assert!(result.matches.is_empty());
        assert_eq!(result.unmatched_tracks, vec![0, 1]);
    }

    #[test]
    fn test_linear_assignment_prefers_global_minimum() {
        let tracks = vec![
            Rect::new(0.0, 0.0, 20.0, 20.0),
            Rect::new(2.0, 2.0, 20.0, 20.0),
        ];
        let dets = vec![
            Rect::new(2.0, 2.0, 20.0, 20.0),
            Rect::new(0.0, 0.0, 20.0, 20.0),
        ];
        let dists = iou_distance(&tracks, &dets);
        let result = linear_assignment(&dists, 0.9);
        let mut matches = result.matches.clone();
        matches.sort();
        // Each track pairs with its exact detection, unlike the greedy rule.
        assert_eq!(matches, vec![(0, 1), (1, 0)]);
    }
}
