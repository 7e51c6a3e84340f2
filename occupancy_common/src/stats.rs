use std::fmt;

use serde::Serialize;

use crate::record::DetectionRecord;

/// Aggregate occupancy counts for one detection run.
///
/// Always recomputed wholesale via [`summarize`], never adjusted
/// incrementally.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OccupancySummary {
    pub occupied: usize,
    pub vacant: usize,
    pub total: usize,
}

impl OccupancySummary {
    /// Share of occupied tables as an integer percentage. Zero tables means
    /// a rate of zero.
    pub fn occupancy_rate_percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.occupied as f64 / self.total as f64 * 100.0).round() as u32
    }
}

impl fmt::Display for OccupancySummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} occupied / {} vacant / {} total ({}% occupancy)",
            self.occupied,
            self.vacant,
            self.total,
            self.occupancy_rate_percent()
        )
    }
}

/// Count occupied and vacant tables in `records`.
pub fn summarize(records: &[DetectionRecord]) -> OccupancySummary {
    let occupied = records.iter().filter(|r| r.occupied).count();
    OccupancySummary {
        occupied,
        vacant: records.len() - occupied,
        total: records.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: u32, occupied: bool) -> DetectionRecord {
        DetectionRecord {
            id,
            x: 0.0,
            y: 0.0,
            width: 120.0,
            height: 100.0,
            occupied,
            confidence: 0.9,
            table_number: format!("T{id}"),
        }
    }

    #[test]
    fn summarize_counts_both_states() {
        let records = vec![record(1, true), record(2, false), record(3, true)];
        let summary = summarize(&records);
        assert_eq!(summary.occupied, 2);
        assert_eq!(summary.vacant, 1);
        assert_eq!(summary.total, 3);
    }

    #[test]
    fn empty_input_gives_zero_rate() {
        let summary = summarize(&[]);
        assert_eq!(summary, OccupancySummary::default());
        assert_eq!(summary.occupancy_rate_percent(), 0);
    }

    #[test]
    fn rate_is_rounded_to_whole_percent() {
        let records = vec![record(1, true), record(2, true), record(3, false)];
        assert_eq!(summarize(&records).occupancy_rate_percent(), 67);
    }

    #[test]
    fn display_is_human_readable() {
        let records = vec![record(1, true), record(2, false)];
        let summary = summarize(&records);
        assert_eq!(
            summary.to_string(),
            "1 occupied / 1 vacant / 2 total (50% occupancy)"
        );
    }
}
