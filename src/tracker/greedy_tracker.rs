//! Main greedy tracking engine.

use tracing::{debug, warn};

use crate::tracker::detection::Detection;
use crate::tracker::matching;
use crate::tracker::rect::Rect;
use crate::tracker::track::Track;
use crate::tracker::visual::{TrackerFactory, VisualTracker};

/// How new detections are matched against existing tracks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum AssociationMode {
    /// Single-pass scan in detection order; the first existing track whose
    /// IoU exceeds the gate absorbs the detection. Order-dependent, and a
    /// single track may absorb several detections. This is the reference
    /// behavior.
    #[default]
    Greedy,
    /// Globally minimal-cost assignment (Jonker-Volgenant) on the `1 - IoU`
    /// cost matrix. Alternative strategy; detections left unmatched create
    /// tracks exactly as under `Greedy`.
    Optimal,
}

/// Configuration for the tracker.
#[derive(Debug, Clone)]
pub struct TrackerConfig {
    /// IoU gate above which a detection counts as already tracked.
    /// Intentionally low: any visible overlap suppresses duplicate tracks,
    /// at the cost of possibly missing a genuinely new nearby object.
    pub min_iou: f32,
    /// IoU threshold above which a detection confirms a track during aging.
    /// Coarser than `min_iou`.
    pub match_thresh: f32,
    /// Tracks whose missed count reaches this value are hidden from the
    /// render query (they stay in the set).
    pub max_missed_frames: u32,
    /// Matching rule used by the association step.
    pub association: AssociationMode,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            min_iou: 0.1,
            match_thresh: 0.5,
            max_missed_frames: 5,
            association: AssociationMode::Greedy,
        }
    }
}

/// Detection-to-track association and track lifecycle engine.
///
/// Owns the track set for the lifetime of a tracking session. The per-frame
/// contract is strict and sequential: [`associate`](Self::associate), then
/// [`refresh`](Self::refresh), then [`age`](Self::age), then any number of
/// [`visible`](Self::visible) queries, before the next frame's `associate`.
///
/// `T` is the per-track visual tracker handle produced by the
/// [`TrackerFactory`] passed to `associate`.
pub struct GreedyTracker<T> {
    tracks: Vec<Track<T>>,
    total_created: u64,
    config: TrackerConfig,
}

impl<T> GreedyTracker<T> {
    pub fn new(config: TrackerConfig) -> Self {
        Self {
            tracks: Vec::new(),
            total_created: 0,
            config,
        }
    }

    pub fn config(&self) -> &TrackerConfig {
        &self.config
    }

    /// All tracks in the set, including those hidden from rendering.
    pub fn tracks(&self) -> &[Track<T>] {
        &self.tracks
    }

    /// Total tracks ever created this session. Monotonic, never decremented.
    pub fn total_created(&self) -> u64 {
        self.total_created
    }

    /// Drop all tracks and start a new session (resets the created counter).
    pub fn reset(&mut self) {
        self.tracks.clear();
        self.total_created = 0;
    }

    /// Tracks currently eligible for rendering, in set order.
    pub fn visible(&self) -> impl Iterator<Item = &Track<T>> {
        self.tracks
            .iter()
            .filter(|t| t.missed_count() < self.config.max_missed_frames)
    }

    /// Create tracks for detections that match no existing track.
    ///
    /// Matching runs against the track set as it existed when the call
    /// started; tracks appended earlier in the same call are not candidates,
    /// so two mutually overlapping detections in one frame can both spawn
    /// tracks. A detection whose tracker fails to initialize is dropped for
    /// this frame; if the object is still detected next frame it gets another
    /// chance. Never removes tracks.
    pub fn associate<F, Fac>(&mut self, frame: &F, detections: &[Detection], factory: &mut Fac)
    where
        Fac: TrackerFactory<F, Tracker = T>,
    {
        let snapshot: Vec<Rect> = self.tracks.iter().map(|t| t.bbox()).collect();

        match self.config.association {
            AssociationMode::Greedy => {
                for det in detections {
                    if matching::first_overlap(&snapshot, &det.bbox, self.config.min_iou).is_some()
                    {
                        continue;
                    }
                    self.spawn(frame, det, factory);
                }
            }
            AssociationMode::Optimal => {
                let det_boxes: Vec<Rect> = detections.iter().map(|d| d.bbox).collect();
                let dists = matching::iou_distance(&snapshot, &det_boxes);
                let result = matching::linear_assignment(&dists, 1.0 - self.config.min_iou);
                for idx in result.unmatched_detections {
                    self.spawn(frame, &detections[idx], factory);
                }
            }
        }
    }

    fn spawn<F, Fac>(&mut self, frame: &F, det: &Detection, factory: &mut Fac)
    where
        Fac: TrackerFactory<F, Tracker = T>,
    {
        match factory.init(frame, det.bbox) {
            Ok(tracker) => {
                self.total_created += 1;
                debug!(
                    class_id = det.class_id,
                    total_created = self.total_created,
                    "new track"
                );
                self.tracks.push(Track::new(det.bbox, tracker));
            }
            Err(err) => {
                warn!(%err, "visual tracker init failed, dropping detection for this frame");
            }
        }
    }

    /// Re-locate every track in the current frame via its visual tracker.
    ///
    /// Rebuilds the track set: a track whose tracker returns an updated box
    /// is retained with that box and a provisionally reset missed count (the
    /// aging step that follows is authoritative for the counter); a track
    /// whose tracker lost its target is dropped. This is the only path by
    /// which a track leaves the set. Surviving order is preserved.
    pub fn refresh<F>(&mut self, frame: &F)
    where
        T: VisualTracker<F>,
    {
        let prior = std::mem::take(&mut self.tracks);
        for mut track in prior {
            match track.tracker_mut().update(frame) {
                Some(bbox) => {
                    track.set_bbox(bbox);
                    track.set_missed_count(0);
                    self.tracks.push(track);
                }
                None => {
                    debug!("visual tracker lost target, removing track");
                }
            }
        }
    }

    /// Update every track's missed-frame counter against the current
    /// detections.
    ///
    /// A track confirmed by any detection with IoU above `match_thresh` gets
    /// its counter reset to 0; otherwise the counter increments by one. Never
    /// removes tracks: an arbitrarily stale track stays in the set, merely
    /// hidden from [`visible`](Self::visible).
    pub fn age(&mut self, detections: &[Detection]) {
        let match_thresh = self.config.match_thresh;
        for track in &mut self.tracks {
            let bbox = track.bbox();
            let confirmed = detections.iter().any(|d| d.bbox.iou(&bbox) > match_thresh);
            if confirmed {
                track.set_missed_count(0);
            } else {
                track.set_missed_count(track.missed_count() + 1);
            }
        }
    }
}
