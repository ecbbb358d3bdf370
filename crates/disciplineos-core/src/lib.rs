//! # DisciplineOS Core Library
//!
//! Core business logic for the DisciplineOS self-improvement trackers
//! (NoFap, Monk Mode, Healthy Social Media, Last Log). All operations are
//! available through this library; the CLI binary is a thin layer over it.
//!
//! ## Architecture
//!
//! - **Tracker Engine**: a synchronous, clock-injected state machine over a
//!   single persisted record, one profile per tracker variant
//! - **Storage**: key-value persistence with one serialized record per key,
//!   lenient on malformed stored values
//! - **Session**: the binding layer that runs each user action as
//!   guard -> load -> transition -> persist
//! - **Last Log**: a free-text pad with a saved-at timestamp
//!
//! ## Key Components
//!
//! - [`CommitmentTracker`]: the check-in streak state machine
//! - [`TrackerSession`]: guarded action entry point per tracker
//! - [`StateStore`]: persistence seam (file-backed or in-memory)
//! - [`Config`]: application configuration

pub mod config;
pub mod display;
pub mod error;
pub mod events;
pub mod guard;
pub mod lastlog;
pub mod session;
pub mod store;
pub mod text;
pub mod tracker;

pub use config::Config;
pub use error::{ConfigError, CoreError, StoreError, Throttle, TrackerError};
pub use events::Event;
pub use guard::ActionGuard;
pub use lastlog::LogPad;
pub use session::{CheckInReply, Clock, LocalClock, ResetReply, SaveReply, SetDayReply, TrackerSession};
pub use store::{FileStore, MemoryStore, StateStore};
pub use tracker::{
    CheckInOutcome, CommitmentTracker, SaveOutcome, StartingDayChange, StreakRecord, TrackerKind,
    TrackerProfile, MAX_STARTING_DAY,
};
