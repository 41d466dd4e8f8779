//! Integration module for connecting object-detection backends and
//! visual-tracker implementations with the tracking engine.

mod builder;
mod detector;
mod pipeline;

pub use builder::DetectionBuilder;
pub use detector::{DetectionSource, IntoDetections};
pub use pipeline::{DrawCommand, DrawList, TrackerPipeline};
