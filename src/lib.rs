//! Greedy IoU-gated multi-object tracking.
//!
//! This crate associates per-frame object detections with a persistent set of
//! tracks, using spatial overlap (IoU) as the sole matching signal. Each track
//! owns a single-object visual tracker that re-locates the object on every
//! frame; detections only gate track creation and confirm track visibility.
//!
//! The per-frame pipeline is fixed:
//!
//! 1. [`GreedyTracker::associate`] — spawn tracks for detections that overlap
//!    no existing track.
//! 2. [`GreedyTracker::refresh`] — re-locate every track via its visual
//!    tracker; drop tracks whose tracker lost its target.
//! 3. [`GreedyTracker::age`] — bump or reset each track's missed-frame
//!    counter against the current detections.
//!
//! [`TrackerPipeline`] bundles a detection backend with the tracker and runs
//! the three steps in order for each frame.

pub mod integration;
pub mod tracker;

pub use integration::{DetectionBuilder, DetectionSource, DrawCommand, DrawList, TrackerPipeline};
pub use tracker::{
    AssociationMode, Detection, GreedyTracker, Rect, Track, TrackError, TrackerConfig,
    TrackerFactory, VisualTracker,
};
