//! Capability traits for per-track single-object visual trackers.

use crate::tracker::rect::Rect;

/// A single-object visual tracker bound to one tracked object.
///
/// Implementations wrap an external tracking algorithm (correlation-filter,
/// appearance-model, ...). The engine depends only on this interface, so
/// strategies can be substituted or mocked in tests.
///
/// The type parameter `F` is the frame type consumed by the algorithm; the
/// engine treats frames as opaque.
pub trait VisualTracker<F> {
    /// Re-locate the tracked object in `frame`.
    ///
    /// Returns the updated bounding box, or `None` when the tracker has lost
    /// its target. Losing the target is a normal, expected outcome (object
    /// left the scene), not an exceptional condition.
    fn update(&mut self, frame: &F) -> Option<Rect>;
}

/// Factory that initializes a fresh visual tracker on a detection box.
///
/// Called once per new track, synchronously, with the frame and box that
/// triggered the track's creation.
pub trait TrackerFactory<F> {
    /// The tracker handle produced by this factory.
    type Tracker: VisualTracker<F>;
    /// Error type for initialization failures.
    type Error: std::fmt::Display;

    /// Initialize a tracker locked onto `bbox` in `frame`.
    fn init(&mut self, frame: &F, bbox: Rect) -> Result<Self::Tracker, Self::Error>;
}
