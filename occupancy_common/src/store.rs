//! Per-image detection state. One base image at a time, the records
//! computed for it, and the derived occupancy summary.

use image::RgbaImage;

use crate::record::DetectionRecord;
use crate::stats::{summarize, OccupancySummary};

/// Identifies the image a detection call was issued for.
///
/// Tokens come out of [`SceneStore::set_image`] and go stale the moment a
/// newer image is installed or the store is reset. A slow detection call
/// that resolves after the image changed presents a stale token and its
/// results are dropped instead of being attributed to the wrong image.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImageToken(u64);

/// Owns the current base image and everything derived from it.
///
/// All mutation happens through the methods below in a single logical
/// control flow. Installing an image clears prior records. A failed
/// detection call never touches the store; the previous records still
/// describe the current image.
#[derive(Debug, Default)]
pub struct SceneStore {
    image: Option<RgbaImage>,
    records: Vec<DetectionRecord>,
    summary: OccupancySummary,
    generation: u64,
    version: u64,
}

impl SceneStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Install a new base image, dropping any records computed for the
    /// previous one. Returns the token a detection call must present when
    /// applying its results.
    pub fn set_image(&mut self, image: RgbaImage) -> ImageToken {
        self.generation += 1;
        self.version += 1;
        self.image = Some(image);
        self.records.clear();
        self.summary = OccupancySummary::default();
        ImageToken(self.generation)
    }

    /// Apply the results of a completed detection run.
    ///
    /// Records are accepted only while `token` still identifies the current
    /// image; otherwise they are discarded and `false` is returned. An
    /// empty record list is a valid result (no tables found), not an error.
    pub fn apply_detections(
        &mut self,
        token: ImageToken,
        records: Vec<DetectionRecord>,
    ) -> bool {
        if token.0 != self.generation {
            log::debug!(
                "dropping {} detection record(s) computed for a stale image",
                records.len()
            );
            return false;
        }
        self.version += 1;
        self.summary = summarize(&records);
        self.records = records;
        true
    }

    /// Clear image, records and summary. Outstanding tokens go stale.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.version += 1;
        self.image = None;
        self.records.clear();
        self.summary = OccupancySummary::default();
    }

    pub fn image(&self) -> Option<&RgbaImage> {
        self.image.as_ref()
    }

    pub fn records(&self) -> &[DetectionRecord] {
        &self.records
    }

    pub fn summary(&self) -> OccupancySummary {
        self.summary
    }

    /// Monotonic state version. Advances on every accepted mutation and
    /// never on a rejected stale application; renderers key their caches
    /// on it to skip recompositing unchanged state.
    pub fn version(&self) -> u64 {
        self.version
    }
}
