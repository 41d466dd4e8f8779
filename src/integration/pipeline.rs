//! TrackerPipeline for combining detection with tracking.

use crate::tracker::{GreedyTracker, Rect, TrackerConfig, TrackerFactory, VisualTracker};

use super::DetectionSource;

/// One box to draw for a visible track.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawCommand {
    /// Bounding box of the visible track
    pub bbox: Rect,
    /// Display label (1-based display index). Text styling is the caller's
    /// concern.
    pub label: String,
}

/// Per-frame render output: one command per visible track, in set order,
/// plus the session's total-created annotation.
#[derive(Debug, Clone, PartialEq)]
pub struct DrawList {
    pub commands: Vec<DrawCommand>,
    /// Total tracks ever created this session (monotonic).
    pub total_created: u64,
}

/// A combined tracker that bundles detection inference, a visual-tracker
/// factory, and the association/lifecycle engine.
///
/// `process_frame` runs the fixed per-frame order — associate, refresh, age —
/// and returns the draw list for the frame. One frame is in flight at a time;
/// every visual-tracker call completes before the next step reads the track
/// set.
pub struct TrackerPipeline<D, Fac, T> {
    detector: D,
    factory: Fac,
    tracker: GreedyTracker<T>,
}

impl<D, Fac, T> TrackerPipeline<D, Fac, T> {
    /// Create a new tracking pipeline with the given collaborators and config.
    pub fn new(detector: D, factory: Fac, config: TrackerConfig) -> Self {
        Self {
            detector,
            factory,
            tracker: GreedyTracker::new(config),
        }
    }

    /// Create a new tracking pipeline with default tracker configuration.
    pub fn with_default_config(detector: D, factory: Fac) -> Self {
        Self::new(detector, factory, TrackerConfig::default())
    }

    /// Process a single frame and return the draw list.
    ///
    /// Runs detection, then the three tracking steps in their required
    /// order. Only detector errors propagate; tracker init and update
    /// failures are normal lifecycle events handled inside the engine.
    pub fn process_frame<F>(&mut self, frame: &F) -> Result<DrawList, D::Error>
    where
        D: DetectionSource<F>,
        Fac: TrackerFactory<F, Tracker = T>,
        T: VisualTracker<F>,
    {
        let detections = self.detector.detect(frame)?;
        self.tracker.associate(frame, &detections, &mut self.factory);
        self.tracker.refresh(frame);
        self.tracker.age(&detections);
        Ok(self.draw_list())
    }

    /// Render query: draw commands for currently visible tracks.
    pub fn draw_list(&self) -> DrawList {
        let commands = self
            .tracker
            .visible()
            .enumerate()
            .map(|(i, track)| DrawCommand {
                bbox: track.bbox(),
                label: (i + 1).to_string(),
            })
            .collect();
        DrawList {
            commands,
            total_created: self.tracker.total_created(),
        }
    }

    /// Get a reference to the underlying detector.
    pub fn detector(&self) -> &D {
        &self.detector
    }

    /// Get a mutable reference to the underlying detector.
    pub fn detector_mut(&mut self) -> &mut D {
        &mut self.detector
    }

    /// Get a reference to the underlying tracker engine.
    pub fn tracker(&self) -> &GreedyTracker<T> {
        &self.tracker
    }

    /// Get a mutable reference to the underlying tracker engine.
    pub fn tracker_mut(&mut self) -> &mut GreedyTracker<T> {
        &mut self.tracker
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::{Detection, TrackError};

    struct MockDetector {
        detections: Vec<Detection>,
    }

    impl DetectionSource<()> for MockDetector {
        type Error = std::convert::Infallible;

        fn detect(&mut self, _frame: &()) -> Result<Vec<Detection>, Self::Error> {
            Ok(self.detections.clone())
        }
    }

    struct StaticTracker {
        bbox: Rect,
    }

    impl VisualTracker<()> for StaticTracker {
        fn update(&mut self, _frame: &()) -> Option<Rect> {
            Some(self.bbox)
        }
    }

    struct StaticFactory;

    impl TrackerFactory<()> for StaticFactory {
        type Tracker = StaticTracker;
        type Error = TrackError;

        fn init(&mut self, _frame: &(), bbox: Rect) -> Result<StaticTracker, TrackError> {
            Ok(StaticTracker { bbox })
        }
    }

    #[test]
    fn test_pipeline_single_frame() {
        let detector = MockDetector {
            detections: vec![Detection::new(2, 0.9, Rect::new(10.0, 10.0, 50.0, 50.0))],
        };

        let mut pipeline = TrackerPipeline::with_default_config(detector, StaticFactory);
        let draw = pipeline.process_frame(&()).unwrap();

        assert_eq!(draw.total_created, 1);
        assert_eq!(draw.commands.len(), 1);
        assert_eq!(draw.commands[0].bbox, Rect::new(10.0, 10.0, 50.0, 50.0));
        assert_eq!(draw.commands[0].label, "1");
    }

    #[test]
    fn test_pipeline_runs_steps_in_order() {
        // The detection confirms the track it spawned on the same frame, so
        // aging resets the counter and the track stays visible.
        let detector = MockDetector {
            detections: vec![Detection::new(0, 0.9, Rect::new(0.0, 0.0, 20.0, 20.0))],
        };
        let mut pipeline = TrackerPipeline::with_default_config(detector, StaticFactory);

        for _ in 0..3 {
            let draw = pipeline.process_frame(&()).unwrap();
            assert_eq!(draw.commands.len(), 1);
            assert_eq!(draw.total_created, 1);
        }
        assert_eq!(pipeline.tracker().tracks()[0].missed_count(), 0);
    }
}
