//! Tracker session: the binding layer between a UI and the engine.
//!
//! A session owns the store, the action guard, and an injected clock, and
//! runs every user action as guard check -> load -> engine transition ->
//! persist. Throttle state (in-flight flag, rate-limit timestamp) lives in
//! the owned guard, never in module globals.

use std::time::{Duration, Instant};

use chrono::{Local, NaiveDate, NaiveTime, Timelike, Utc};

use crate::config::Config;
use crate::error::{CoreError, Result};
use crate::events::Event;
use crate::guard::ActionGuard;
use crate::store::{load_record, save_record, FileStore, StateStore};
use crate::tracker::{
    CheckInOutcome, CommitmentTracker, SaveOutcome, StartingDayChange, StreakRecord, TrackerKind,
    TrackerProfile,
};

/// Source of "today" and the wall-clock time, injected for testability.
pub trait Clock {
    fn today(&self) -> NaiveDate;
    fn time_of_day(&self) -> NaiveTime;
}

/// Production clock: the machine's local date and time.
pub struct LocalClock;

impl Clock for LocalClock {
    fn today(&self) -> NaiveDate {
        Local::now().date_naive()
    }

    fn time_of_day(&self) -> NaiveTime {
        // Stored times carry whole seconds only.
        Local::now().time().with_nanosecond(0).unwrap_or_default()
    }
}

/// Result of a check-in action.
#[derive(Debug)]
pub struct CheckInReply {
    pub outcome: CheckInOutcome,
    pub record: StreakRecord,
    pub events: Vec<Event>,
}

/// Result of a save action.
#[derive(Debug)]
pub struct SaveReply {
    pub outcome: SaveOutcome,
    pub record: StreakRecord,
    pub events: Vec<Event>,
}

/// Result of a reset, slip, or clear action.
#[derive(Debug)]
pub struct ResetReply {
    pub record: StreakRecord,
    pub events: Vec<Event>,
}

/// Result of a starting-day action.
#[derive(Debug)]
pub struct SetDayReply {
    pub change: StartingDayChange,
    pub record: StreakRecord,
    pub events: Vec<Event>,
}

/// One tracker's action entry point.
pub struct TrackerSession {
    profile: TrackerProfile,
    store: Box<dyn StateStore>,
    guard: ActionGuard,
    clock: Box<dyn Clock>,
}

impl TrackerSession {
    /// Open a session over the default file store and local clock.
    pub fn open(kind: TrackerKind, config: &Config) -> Result<Self> {
        Ok(Self::new(
            kind.profile(),
            Box::new(FileStore::open()?),
            Box::new(LocalClock),
            Duration::from_millis(config.limits.rate_limit_ms),
        ))
    }

    pub fn new(
        profile: TrackerProfile,
        store: Box<dyn StateStore>,
        clock: Box<dyn Clock>,
        min_interval: Duration,
    ) -> Self {
        Self {
            profile,
            store,
            guard: ActionGuard::new(min_interval),
            clock,
        }
    }

    pub fn profile(&self) -> &TrackerProfile {
        &self.profile
    }

    /// Load the current record for display. Not guarded; read-only.
    pub fn status(&self) -> (StreakRecord, Vec<Event>) {
        let (record, fallback) = load_record(self.store.as_ref(), self.profile.storage_key);
        (record, fallback.into_iter().collect())
    }

    /// Save or update the commitment text; optionally replace the
    /// allow-list alongside it (social-media variant).
    pub fn save_commitment(&mut self, text: &str, allow_list: Option<&str>) -> Result<SaveReply> {
        self.guarded(|session| {
            let (record, mut events) = session.load();
            let mut tracker = CommitmentTracker::new(session.profile.clone(), record);

            let outcome = tracker.save_commitment(text)?;
            if let Some(allow) = allow_list {
                tracker.set_allow_list(allow)?;
            }

            let record = session.persist(tracker)?;
            events.push(Event::CommitmentSaved {
                tracker: session.profile.kind,
                first_save: outcome == SaveOutcome::FirstSave,
                at: Utc::now(),
            });
            Ok(SaveReply {
                outcome,
                record,
                events,
            })
        })
    }

    /// Record a daily check-in. On a first check-in the allow-list, when
    /// given, is captured together with the commitment.
    pub fn check_in(&mut self, text: &str, allow_list: Option<&str>) -> Result<CheckInReply> {
        self.guarded(|session| {
            let (record, mut events) = session.load();
            let mut tracker = CommitmentTracker::new(session.profile.clone(), record);

            let today = session.clock.today();
            let now = session.clock.time_of_day();
            let outcome = tracker.check_in(text, today, now)?;

            if outcome == CheckInOutcome::FirstCheckIn {
                if let Some(allow) = allow_list {
                    if session.profile.has_allow_list {
                        tracker.set_allow_list(allow)?;
                    }
                }
            }

            let record = session.persist(tracker)?;
            events.push(Event::CheckInRecorded {
                tracker: session.profile.kind,
                displayed_day: record.displayed_day(),
                date: today,
                time: now,
                at: Utc::now(),
            });
            Ok(CheckInReply {
                outcome,
                record,
                events,
            })
        })
    }

    /// Reset the streak to day zero, keeping the commitment. The
    /// social-media variant records this as a slip.
    pub fn reset_streak(&mut self) -> Result<ResetReply> {
        self.guarded(|session| {
            let (record, mut events) = session.load();
            let mut tracker = CommitmentTracker::new(session.profile.clone(), record);
            tracker.reset_streak(true);

            let record = session.persist(tracker)?;
            let at = Utc::now();
            events.push(match session.profile.kind {
                TrackerKind::NoSocial => Event::SlipRecorded {
                    tracker: session.profile.kind,
                    at,
                },
                _ => Event::StreakReset {
                    tracker: session.profile.kind,
                    at,
                },
            });
            Ok(ResetReply { record, events })
        })
    }

    /// Remove all persisted state for this tracker.
    pub fn clear(&mut self) -> Result<ResetReply> {
        self.guarded(|session| {
            session.store.remove(session.profile.storage_key)?;
            Ok(ResetReply {
                record: StreakRecord::default(),
                events: vec![Event::LocalDataCleared {
                    tracker: session.profile.kind,
                    at: Utc::now(),
                }],
            })
        })
    }

    /// Rebase the starting day so the displayed total matches
    /// `desired_total`. Callers should confirm with the user first when the
    /// returned change lowers the displayed day.
    pub fn set_starting_day(&mut self, desired_total: u32) -> Result<SetDayReply> {
        self.guarded(|session| {
            let (record, mut events) = session.load();
            let mut tracker = CommitmentTracker::new(session.profile.clone(), record);
            let change = tracker.set_starting_day(desired_total)?;

            let record = session.persist(tracker)?;
            events.push(Event::StartingDaySet {
                tracker: session.profile.kind,
                base: change.new_base,
                displayed_day: record.displayed_day(),
                at: Utc::now(),
            });
            Ok(SetDayReply {
                change,
                record,
                events,
            })
        })
    }

    // ── Internal ─────────────────────────────────────────────────────

    fn guarded<T>(&mut self, f: impl FnOnce(&mut Self) -> Result<T>) -> Result<T> {
        self.guard.try_begin(Instant::now())?;
        let result = f(self);
        self.guard.finish();
        result
    }

    fn load(&self) -> (StreakRecord, Vec<Event>) {
        let (record, fallback) = load_record(self.store.as_ref(), self.profile.storage_key);
        (record, fallback.into_iter().collect())
    }

    fn persist(&mut self, tracker: CommitmentTracker) -> Result<StreakRecord, CoreError> {
        let record = tracker.into_record();
        save_record(self.store.as_mut(), self.profile.storage_key, &record)?;
        Ok(record)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{StoreError, Throttle, TrackerError};
    use crate::store::MemoryStore;
    use std::cell::Cell;
    use std::rc::Rc;

    /// Test clock with a movable day.
    struct FixedClock {
        day: Rc<Cell<NaiveDate>>,
    }

    impl Clock for FixedClock {
        fn today(&self) -> NaiveDate {
            self.day.get()
        }

        fn time_of_day(&self) -> NaiveTime {
            NaiveTime::from_hms_opt(9, 30, 0).unwrap()
        }
    }

    fn session_with(
        kind: TrackerKind,
        store: MemoryStore,
    ) -> (TrackerSession, Rc<Cell<NaiveDate>>) {
        let day = Rc::new(Cell::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        let clock = FixedClock { day: Rc::clone(&day) };
        let session = TrackerSession::new(
            kind.profile(),
            Box::new(store),
            Box::new(clock),
            Duration::ZERO,
        );
        (session, day)
    }

    #[test]
    fn check_in_across_days_builds_a_streak() {
        let (mut session, day) = session_with(TrackerKind::MonkMode, MemoryStore::new());

        let reply = session.check_in("Wake at 5.", None).unwrap();
        assert_eq!(reply.outcome, CheckInOutcome::FirstCheckIn);

        day.set(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        let reply = session.check_in("Wake at 5.", None).unwrap();
        assert_eq!(reply.outcome, CheckInOutcome::Advanced(2));
        assert_eq!(reply.record.current_streak, 2);
    }

    #[test]
    fn mismatch_does_not_persist_anything() {
        let (mut session, day) = session_with(TrackerKind::MonkMode, MemoryStore::new());
        session.check_in("A", None).unwrap();

        day.set(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        let err = session.check_in("B", None).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Tracker(TrackerError::CommitmentMismatch)
        ));

        let (record, _) = session.status();
        assert_eq!(record.current_streak, 1);
        assert_eq!(record.commitment_text, "A");
    }

    #[test]
    fn first_check_in_captures_allow_list() {
        let (mut session, _) = session_with(TrackerKind::NoSocial, MemoryStore::new());
        let reply = session
            .check_in("Only intentional viewing.", Some("maker one\nmaker two"))
            .unwrap();
        assert_eq!(reply.record.allow_list, vec!["maker one", "maker two"]);
    }

    #[test]
    fn slip_event_for_nosocial_reset() {
        let (mut session, _) = session_with(TrackerKind::NoSocial, MemoryStore::new());
        session.check_in("A", None).unwrap();
        let reply = session.reset_streak().unwrap();
        assert!(matches!(reply.events[0], Event::SlipRecorded { .. }));
        assert_eq!(reply.record.current_streak, 0);
        assert_eq!(reply.record.commitment_text, "A");
    }

    #[test]
    fn malformed_store_surfaces_parse_fallback_event() {
        let mut store = MemoryStore::new();
        store.seed(
            TrackerKind::MonkMode.profile().storage_key,
            "not even json",
        );
        let (mut session, _) = session_with(TrackerKind::MonkMode, store);

        let reply = session.check_in("Fresh start.", None).unwrap();
        assert_eq!(reply.outcome, CheckInOutcome::FirstCheckIn);
        assert!(matches!(reply.events[0], Event::ParseFallback { .. }));
    }

    #[test]
    fn blocked_storage_surfaces_without_state_change() {
        let (mut session, _) = session_with(TrackerKind::MonkMode, MemoryStore::failing());
        let err = session.check_in("A", None).unwrap_err();
        assert!(matches!(
            err,
            CoreError::Store(StoreError::WriteBlocked { .. })
        ));

        let (record, _) = session.status();
        assert_eq!(record, StreakRecord::default());
    }

    #[test]
    fn rate_limit_rejects_burst_actions() {
        let day = Rc::new(Cell::new(NaiveDate::from_ymd_opt(2024, 1, 1).unwrap()));
        let mut session = TrackerSession::new(
            TrackerKind::MonkMode.profile(),
            Box::new(MemoryStore::new()),
            Box::new(FixedClock { day }),
            Duration::from_secs(3600),
        );

        session.check_in("A", None).unwrap();
        let err = session.check_in("A", None).unwrap_err();
        assert!(matches!(err, CoreError::Throttled(Throttle::TooSoon)));
    }

    #[test]
    fn clear_removes_the_stored_record() {
        let (mut session, _) = session_with(TrackerKind::NoFap, MemoryStore::new());
        session.check_in("A", None).unwrap();

        let reply = session.clear().unwrap();
        assert!(matches!(reply.events[0], Event::LocalDataCleared { .. }));

        let (record, events) = session.status();
        assert_eq!(record, StreakRecord::default());
        assert!(events.is_empty());
    }

    #[test]
    fn set_starting_day_round_trips_through_the_store() {
        let (mut session, day) = session_with(TrackerKind::NoFap, MemoryStore::new());
        session.check_in("A", None).unwrap();
        day.set(NaiveDate::from_ymd_opt(2024, 1, 2).unwrap());
        session.check_in("A", None).unwrap();

        let reply = session.set_starting_day(30).unwrap();
        assert_eq!(reply.change.new_base, 28);
        assert_eq!(reply.record.displayed_day(), 30);

        let (record, _) = session.status();
        assert_eq!(record.starting_day, 28);
    }
}
