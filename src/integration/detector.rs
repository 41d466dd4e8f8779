//! Trait for object detection inference backends.

use crate::tracker::Detection;

/// Trait for object detection inference backends.
///
/// Implement this trait to connect any detection model to the tracker. The
/// backend owns confidence filtering and non-max suppression; the tracker
/// consumes the finished detection list. List order matters only as the
/// tie-breaking order for greedy association.
///
/// `F` is the frame type the backend consumes; the tracker never inspects it.
///
/// # Example
///
/// ```ignore
/// use greedytrack_rs::{DetectionSource, Detection};
///
/// struct MyDetector {
///     // Your model here
/// }
///
/// impl DetectionSource<Frame> for MyDetector {
///     type Error = std::io::Error;
///
///     fn detect(&mut self, frame: &Frame) -> Result<Vec<Detection>, Self::Error> {
///         // Run inference and return detections
///         Ok(vec![])
///     }
/// }
/// ```
pub trait DetectionSource<F> {
    /// Error type for detection failures.
    type Error;

    /// Run inference on a frame and return detections.
    fn detect(&mut self, frame: &F) -> Result<Vec<Detection>, Self::Error>;
}

/// Helper trait for converting model-specific outputs to `Detection`.
///
/// Implement this for your model's output format to enable easy conversion.
pub trait IntoDetections {
    /// Convert the output into a vector of detections.
    fn into_detections(self) -> Vec<Detection>;
}

impl IntoDetections for Vec<Detection> {
    fn into_detections(self) -> Vec<Detection> {
        self
    }
}
