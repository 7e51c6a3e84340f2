//! Occupancy classification for raw model detections. Turns the
//! table/person classes an object detector reports into per-table
//! occupancy records.

use serde::Deserialize;

use crate::record::DetectionRecord;

/// A table counts as occupied when some person's center lies closer to the
/// table's center than 1.5x the table's larger dimension.
const OCCUPIED_RADIUS_FACTOR: f32 = 1.5;

/// One raw detection as reported by a model backend, before occupancy
/// classification.
#[derive(Debug, Clone, Deserialize)]
pub struct RawDetection {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    pub confidence: f32,
    /// Model class name, e.g. "dining table" or "person".
    #[serde(rename = "class")]
    pub class_name: String,
}

impl RawDetection {
    fn center(&self) -> (f32, f32) {
        (self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    fn is_table(&self) -> bool {
        matches!(self.class_name.as_str(), "table" | "dining table")
    }

    fn is_person(&self) -> bool {
        self.class_name == "person"
    }
}

/// Classify raw detections into table occupancy records.
///
/// Tables are numbered `T1..` in input order and keep the confidence of
/// the table detection itself. Classes other than tables and persons are
/// ignored.
pub fn classify_occupancy(detections: &[RawDetection]) -> Vec<DetectionRecord> {
    let persons: Vec<(f32, f32)> = detections
        .iter()
        .filter(|d| d.is_person())
        .map(RawDetection::center)
        .collect();

    detections
        .iter()
        .filter(|d| d.is_table())
        .enumerate()
        .map(|(i, table)| {
            let (cx, cy) = table.center();
            let radius = table.width.max(table.height) * OCCUPIED_RADIUS_FACTOR;
            let occupied = persons
                .iter()
                .any(|&(px, py)| (cx - px).hypot(cy - py) < radius);
            DetectionRecord {
                id: i as u32 + 1,
                x: table.x,
                y: table.y,
                width: table.width,
                height: table.height,
                occupied,
                confidence: table.confidence,
                table_number: format!("T{}", i + 1),
            }
        })
        .collect()
}
