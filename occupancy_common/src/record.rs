use serde::{Deserialize, Serialize};

/// One classified table detection, in the pixel space of the image it was
/// computed for.
///
/// The serialized shape (camelCase keys, `tableNumber`) doubles as the wire
/// format spoken by detection services and written to records files.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DetectionRecord {
    /// Unique within one detection run.
    pub id: u32,
    /// Top-left corner of the bounding box.
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
    /// Binary occupancy state. There is no "unknown".
    pub occupied: bool,
    /// Detector confidence in `[0, 1]`.
    pub confidence: f32,
    /// Short display identifier, e.g. "T1".
    pub table_number: String,
}

impl DetectionRecord {
    /// Whether the box can be drawn at all. Records failing this are
    /// skipped by the renderer rather than failing the whole overlay.
    pub fn is_renderable(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }

    /// Confidence as an integer percentage, rounding halves away from zero
    /// so that `0.125 -> 13`. This is the figure shown in overlay labels.
    pub fn confidence_percent(&self) -> u32 {
        (self.confidence * 100.0).round() as u32
    }

    /// Status word used in labels and summaries.
    pub fn status_text(&self) -> &'static str {
        if self.occupied {
            "Occupied"
        } else {
            "Vacant"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> DetectionRecord {
        DetectionRecord {
            id: 1,
            x: 100.0,
            y: 80.0,
            width: 120.0,
            height: 100.0,
            occupied: true,
            confidence: 0.95,
            table_number: "T1".to_string(),
        }
    }

    #[test]
    fn wire_shape_uses_camel_case() {
        let json = serde_json::to_string(&record()).unwrap();
        assert!(json.contains("\"tableNumber\":\"T1\""));
        assert!(!json.contains("table_number"));

        let parsed: DetectionRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, record());
    }

    #[test]
    fn confidence_percent_rounds_half_away_from_zero() {
        let mut r = record();
        assert_eq!(r.confidence_percent(), 95);
        r.confidence = 0.125;
        assert_eq!(r.confidence_percent(), 13);
        r.confidence = 1.0;
        assert_eq!(r.confidence_percent(), 100);
        r.confidence = 0.0;
        assert_eq!(r.confidence_percent(), 0);
    }

    #[test]
    fn non_positive_boxes_are_not_renderable() {
        let mut r = record();
        assert!(r.is_renderable());
        r.width = 0.0;
        assert!(!r.is_renderable());
        r.width = 120.0;
        r.height = -5.0;
        assert!(!r.is_renderable());
    }

    #[test]
    fn status_text_matches_occupancy() {
        let mut r = record();
        assert_eq!(r.status_text(), "Occupied");
        r.occupied = false;
        assert_eq!(r.status_text(), "Vacant");
    }
}
