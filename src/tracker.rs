mod detection;
mod error;
mod greedy_tracker;
mod matching;
mod rect;
mod track;
mod visual;

pub use detection::Detection;
pub use error::TrackError;
pub use greedy_tracker::{AssociationMode, GreedyTracker, TrackerConfig};
pub use matching::{AssignmentResult, iou_distance, linear_assignment};
pub use rect::{Rect, iou_batch};
pub use track::Track;
pub use visual::{TrackerFactory, VisualTracker};
