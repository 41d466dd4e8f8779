//! Single tracked object.

use crate::tracker::rect::Rect;

/// A persistent hypothesis that some physical object is present, backed by a
/// visual tracker handle and a missed-frame counter.
///
/// Fields are private so the invariants hold by construction: `tracker` is
/// created once and never reassigned, `bbox` always reflects the most recent
/// successful tracker update (or the initial detection box before any
/// update), and `missed_count` is only touched by the aging step.
#[derive(Debug)]
pub struct Track<T> {
    bbox: Rect,
    missed_count: u32,
    tracker: T,
}

impl<T> Track<T> {
    /// Create a track from its initial detection box and a freshly
    /// initialized visual tracker.
    pub(crate) fn new(bbox: Rect, tracker: T) -> Self {
        Self {
            bbox,
            missed_count: 0,
            tracker,
        }
    }

    /// Current bounding box in TLWH format.
    pub fn bbox(&self) -> Rect {
        self.bbox
    }

    /// Consecutive frames since this track was last confirmed by an
    /// overlapping detection.
    pub fn missed_count(&self) -> u32 {
        self.missed_count
    }

    pub(crate) fn set_bbox(&mut self, bbox: Rect) {
        self.bbox = bbox;
    }

    pub(crate) fn set_missed_count(&mut self, missed_count: u32) {
        self.missed_count = missed_count;
    }

    pub(crate) fn tracker_mut(&mut self) -> &mut T {
        &mut self.tracker
    }
}
