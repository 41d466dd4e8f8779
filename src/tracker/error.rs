use thiserror::Error;

/// Errors reported by visual-tracker integrations.
///
/// Initialization failure is consumed inside the association step (the
/// detection is dropped for the frame); update failure is signalled by
/// [`VisualTracker::update`](crate::tracker::VisualTracker::update) returning
/// `None` rather than by this type. `TrackError` exists so simple factory
/// implementations have a ready-made error type.
#[derive(Debug, Clone, Error)]
pub enum TrackError {
    #[error("visual tracker failed to initialize: {0}")]
    Init(String),
}
