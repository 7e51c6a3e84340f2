//! Canned detection backend for demos and tests.

use std::time::Duration;

use image::RgbaImage;

use crate::provider::{DetectError, DetectOptions, DetectionProvider};
use crate::record::DetectionRecord;

/// Simulated inference latency of the canned backend.
pub const STUB_LATENCY: Duration = Duration::from_millis(1500);

/// Fixed table layout reported by the stub: top-left corner, occupancy and
/// confidence per table, all boxes 120x100. Matches the arrangement drawn
/// by the synthetic demo scene so the two line up pixel for pixel.
const CANNED_LAYOUT: [(f32, f32, bool, f32); 6] = [
    (100.0, 80.0, true, 0.95),
    (280.0, 80.0, false, 0.92),
    (460.0, 80.0, true, 0.88),
    (100.0, 240.0, false, 0.91),
    (280.0, 240.0, true, 0.94),
    (460.0, 240.0, false, 0.89),
];

/// Detection backend that stands in for a model server.
///
/// Sleeps a fixed latency, then reports the same six tables regardless of
/// the input image. Useful for exercising the whole pipeline without a
/// serving endpoint.
#[derive(Debug, Clone)]
pub struct StubProvider {
    latency: Duration,
}

impl StubProvider {
    pub fn new() -> Self {
        Self {
            latency: STUB_LATENCY,
        }
    }

    /// Override the canned latency. Tests use zero.
    pub fn with_latency(latency: Duration) -> Self {
        Self { latency }
    }

    fn canned_records() -> Vec<DetectionRecord> {
        CANNED_LAYOUT
            .iter()
            .enumerate()
            .map(|(i, &(x, y, occupied, confidence))| DetectionRecord {
                id: i as u32 + 1,
                x,
                y,
                width: 120.0,
                height: 100.0,
                occupied,
                confidence,
                table_number: format!("T{}", i + 1),
            })
            .collect()
    }
}

impl Default for StubProvider {
    fn default() -> Self {
        Self::new()
    }
}

impl DetectionProvider for StubProvider {
    fn name(&self) -> &'static str {
        "stub"
    }

    async fn detect(
        &self,
        _image: &RgbaImage,
        opts: &DetectOptions,
    ) -> Result<Vec<DetectionRecord>, DetectError> {
        tokio::time::sleep(self.latency).await;
        Ok(Self::canned_records()
            .into_iter()
            .filter(|r| r.confidence >= opts.confidence)
            .collect())
    }
}
