//! Tracker state machine: record, per-variant profiles, and the engine.

mod engine;
mod profile;
mod record;

pub use engine::{CheckInOutcome, CommitmentTracker, SaveOutcome, StartingDayChange};
pub use profile::{TrackerKind, TrackerProfile, MAX_STARTING_DAY};
pub use record::StreakRecord;
