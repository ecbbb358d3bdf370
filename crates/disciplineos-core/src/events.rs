//! Tracker events.
//!
//! Every successful state change produces an [`Event`]. The CLI prints
//! them as confirmation messages; tests assert on them. In particular,
//! [`Event::ParseFallback`] makes the lenient recovery from a malformed
//! stored record observable instead of silently swallowed.

use chrono::{DateTime, NaiveDate, NaiveTime, Utc};
use serde::{Deserialize, Serialize};

use crate::tracker::TrackerKind;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Event {
    /// Commitment text saved or updated without touching the streak.
    CommitmentSaved {
        tracker: TrackerKind,
        /// True when no commitment existed before this save.
        first_save: bool,
        at: DateTime<Utc>,
    },
    /// A check-in was accepted (first, same-day repeat, or advance).
    CheckInRecorded {
        tracker: TrackerKind,
        /// Displayed day after the check-in (starting day + streak).
        displayed_day: u32,
        date: NaiveDate,
        time: NaiveTime,
        at: DateTime<Utc>,
    },
    /// Streak reset back to day zero; commitment kept.
    StreakReset {
        tracker: TrackerKind,
        at: DateTime<Utc>,
    },
    /// A slip was recorded (social-media variant's reset).
    SlipRecorded {
        tracker: TrackerKind,
        at: DateTime<Utc>,
    },
    /// Starting day rebased so the displayed total matches a target.
    StartingDaySet {
        tracker: TrackerKind,
        base: u32,
        displayed_day: u32,
        at: DateTime<Utc>,
    },
    /// All persisted state for the tracker was removed.
    LocalDataCleared {
        tracker: TrackerKind,
        at: DateTime<Utc>,
    },
    /// A stored value failed to parse and was replaced by the default
    /// record. Deliberate leniency, but logged and assertable.
    ParseFallback {
        key: String,
        at: DateTime<Utc>,
    },
    /// Last-log pad saved.
    LogSaved {
        /// True when the saved text was blank.
        empty: bool,
        at: DateTime<Utc>,
    },
    /// Last-log pad cleared.
    LogCleared { at: DateTime<Utc> },
}
