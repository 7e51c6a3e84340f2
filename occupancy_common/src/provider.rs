use std::future::Future;

use image::RgbaImage;
use thiserror::Error;

use crate::record::DetectionRecord;

/// Tuning knobs forwarded to detection backends.
#[derive(Debug, Clone, Copy)]
pub struct DetectOptions {
    /// Minimum confidence for a detection to be reported.
    pub confidence: f32,
    /// Non-maximum-suppression IoU threshold.
    pub iou: f32,
}

impl Default for DetectOptions {
    fn default() -> Self {
        Self {
            confidence: 0.5,
            iou: 0.5,
        }
    }
}

/// Failure of a detection call.
///
/// Recoverable: callers report it and leave their store untouched, keeping
/// the records of the previous run.
#[derive(Debug, Error)]
pub enum DetectError {
    #[error("detection service unreachable: {0}")]
    Unreachable(String),
    #[error("detection service rejected the request: {0}")]
    Rejected(String),
    #[error("detection service returned a malformed payload: {0}")]
    MalformedPayload(String),
    #[error("could not encode image for transport: {0}")]
    Encode(String),
}

/// Asynchronous boundary that turns an image into detection records.
///
/// Implementations may suspend for as long as they need, but must resolve
/// with records ordered the way the backend reported them, or fail with
/// [`DetectError`]. An empty list is a valid result (no tables found).
/// Nothing here cancels in-flight calls; results that arrive late are
/// fenced off by [`crate::store::SceneStore::apply_detections`] instead.
pub trait DetectionProvider {
    /// Backend identifier used in logs and CLI output.
    fn name(&self) -> &'static str;

    /// Run detection on `image`.
    fn detect(
        &self,
        image: &RgbaImage,
        opts: &DetectOptions,
    ) -> impl Future<Output = Result<Vec<DetectionRecord>, DetectError>> + Send;
}
