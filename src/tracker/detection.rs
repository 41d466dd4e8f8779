//! Detection input for the tracker.

use crate::tracker::rect::Rect;

/// A single frame's raw observation from the external detector.
///
/// Detections are immutable and scoped to one frame's processing; they are
/// not retained after the frame that produced them.
#[derive(Debug, Clone)]
pub struct Detection {
    /// Class ID assigned by the detector
    pub class_id: u32,
    /// Detection confidence score
    pub score: f32,
    /// Bounding box in TLWH format
    pub bbox: Rect,
}

impl Detection {
    pub fn new(class_id: u32, score: f32, bbox: Rect) -> Self {
        Self {
            class_id,
            score,
            bbox,
        }
    }

    /// Convenience constructor from TLBR corner coordinates.
    pub fn from_tlbr(class_id: u32, score: f32, x1: f32, y1: f32, x2: f32, y2: f32) -> Self {
        Self {
            class_id,
            score,
            bbox: Rect::from_tlbr(x1, y1, x2, y2),
        }
    }
}
