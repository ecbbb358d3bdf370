//! The persisted streak record.

use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};

/// One tracker instance's persisted state.
///
/// Serialized as a flat JSON object under a single storage key. Every field
/// carries `#[serde(default)]` so records written by older versions (or
/// hand-edited files) deserialize by merging over the defaults.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StreakRecord {
    /// The locked-in identity statement or protocol script. Empty until the
    /// first save or check-in.
    #[serde(default)]
    pub commitment_text: String,

    /// Allow-listed creators/sites (social-media variant only). Side data;
    /// never part of the matching contract.
    #[serde(default)]
    pub allow_list: Vec<String>,

    /// Consecutive successful check-ins since the last reset.
    #[serde(default)]
    pub current_streak: u32,

    /// Display base added to the streak (NoFap variant only).
    #[serde(default)]
    pub starting_day: u32,

    /// One-shot lock on the starting day. Only ever set when the variant's
    /// profile enables the capability; cleared by every reset.
    #[serde(default)]
    pub starting_day_locked: bool,

    /// Most recent day a check-in was recorded.
    #[serde(default)]
    pub last_checkin_date: Option<NaiveDate>,

    /// Wall-clock time of the most recent check-in. Display-only.
    #[serde(default)]
    pub last_checkin_time: Option<NaiveTime>,
}

impl StreakRecord {
    /// Whether a commitment has been locked in.
    pub fn has_commitment(&self) -> bool {
        !self.commitment_text.trim().is_empty()
    }

    /// Day count shown to the user: starting day plus streak.
    pub fn displayed_day(&self) -> u32 {
        self.starting_day.saturating_add(self.current_streak)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_record_is_uncommitted() {
        let record = StreakRecord::default();
        assert!(!record.has_commitment());
        assert_eq!(record.current_streak, 0);
        assert_eq!(record.displayed_day(), 0);
        assert!(record.last_checkin_date.is_none());
    }

    #[test]
    fn whitespace_commitment_counts_as_empty() {
        let record = StreakRecord {
            commitment_text: "   \n".to_string(),
            ..Default::default()
        };
        assert!(!record.has_commitment());
    }

    #[test]
    fn partial_json_merges_over_defaults() {
        let record: StreakRecord =
            serde_json::from_str(r#"{"commitment_text":"I am focused.","current_streak":4}"#)
                .unwrap();
        assert_eq!(record.commitment_text, "I am focused.");
        assert_eq!(record.current_streak, 4);
        assert_eq!(record.starting_day, 0);
        assert!(record.last_checkin_date.is_none());
    }

    #[test]
    fn dates_roundtrip_as_plain_strings() {
        let record = StreakRecord {
            last_checkin_date: Some(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()),
            last_checkin_time: Some(NaiveTime::from_hms_opt(14, 7, 9).unwrap()),
            ..Default::default()
        };
        let json = serde_json::to_string(&record).unwrap();
        assert!(json.contains("\"2024-01-05\""));
        assert!(json.contains("\"14:07:09\""));
        let back: StreakRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }
}
