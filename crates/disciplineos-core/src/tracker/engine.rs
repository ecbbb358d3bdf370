//! Check-in streak engine.
//!
//! A synchronous state machine over one [`StreakRecord`]. The engine never
//! reads the clock itself: `check_in` takes the calendar day and wall-clock
//! time as arguments so tests can supply fixed dates.
//!
//! ## Check-in transitions, in order
//!
//! ```text
//! Uncommitted          -> lock commitment, streak = 1   (FirstCheckIn)
//! Same calendar day    -> update time only              (AlreadyDone)
//! Normalized mismatch  -> error, record untouched       (CommitmentMismatch)
//! Otherwise            -> streak += 1                   (Advanced)
//! ```
//!
//! The guard is date-based, not time-based: at most one streak advance per
//! calendar day, and repeated calls that day are idempotent no-ops.

use chrono::{NaiveDate, NaiveTime};

use super::profile::{TrackerProfile, MAX_STARTING_DAY};
use super::record::StreakRecord;
use crate::error::TrackerError;
use crate::text::{normalize, parse_allow_list, sanitize_for_storage};

/// Terminal outcome of a successful check-in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CheckInOutcome {
    /// First ever check-in: the commitment is now locked and the streak is 1.
    FirstCheckIn,
    /// Already checked in today; only the time was refreshed.
    AlreadyDone,
    /// Streak advanced to the contained value.
    Advanced(u32),
}

/// Outcome of saving the commitment text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    /// No commitment existed before; the next matching check-in starts day 1.
    FirstSave,
    /// An existing commitment was replaced. The streak is unchanged.
    Updated,
}

/// Summary of a starting-day rebase, for caller-side confirmation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StartingDayChange {
    pub old_base: u32,
    pub new_base: u32,
    pub old_displayed: u32,
    pub new_displayed: u32,
}

impl StartingDayChange {
    /// True when the rebase lowers the displayed day count. The caller is
    /// expected to confirm with the user before persisting such a change.
    pub fn lowers_displayed_day(&self) -> bool {
        self.new_displayed < self.old_displayed
    }
}

/// The generic commitment tracker: one engine, instantiated per variant.
///
/// Owns the record while a transition runs; the caller persists the result.
#[derive(Debug, Clone)]
pub struct CommitmentTracker {
    profile: TrackerProfile,
    record: StreakRecord,
}

impl CommitmentTracker {
    pub fn new(profile: TrackerProfile, record: StreakRecord) -> Self {
        Self { profile, record }
    }

    // ── Queries ──────────────────────────────────────────────────────

    pub fn profile(&self) -> &TrackerProfile {
        &self.profile
    }

    pub fn record(&self) -> &StreakRecord {
        &self.record
    }

    pub fn into_record(self) -> StreakRecord {
        self.record
    }

    /// Day count shown to the user.
    pub fn displayed_day(&self) -> u32 {
        self.record.displayed_day()
    }

    // ── Commands ─────────────────────────────────────────────────────

    /// Save or update the commitment text without touching the streak.
    pub fn save_commitment(&mut self, text: &str) -> Result<SaveOutcome, TrackerError> {
        let input = sanitize_for_storage(text, self.profile.max_text_len);
        if input.trim().is_empty() {
            return Err(TrackerError::EmptyInput);
        }

        let outcome = if self.record.has_commitment() {
            SaveOutcome::Updated
        } else {
            SaveOutcome::FirstSave
        };
        self.record.commitment_text = input;
        Ok(outcome)
    }

    /// Replace the allow-list (social-media variant only).
    pub fn set_allow_list(&mut self, text: &str) -> Result<(), TrackerError> {
        if !self.profile.has_allow_list {
            return Err(TrackerError::UnsupportedAction("allow-list"));
        }
        self.record.allow_list = parse_allow_list(text, self.profile.max_allow_list);
        Ok(())
    }

    /// Record a daily check-in.
    ///
    /// The candidate text must reproduce the locked commitment exactly
    /// (after normalization) to count as adherence. Transition order is
    /// documented at the module level; on error the record is unchanged.
    pub fn check_in(
        &mut self,
        text: &str,
        today: NaiveDate,
        now: NaiveTime,
    ) -> Result<CheckInOutcome, TrackerError> {
        let input = sanitize_for_storage(text, self.profile.max_text_len);
        if input.trim().is_empty() {
            return Err(TrackerError::EmptyInput);
        }

        if !self.record.has_commitment() {
            self.record.commitment_text = input;
            self.record.current_streak = 1;
            self.record.last_checkin_date = Some(today);
            self.record.last_checkin_time = Some(now);
            if self.profile.lockable_starting_day {
                self.record.starting_day_locked = true;
            }
            return Ok(CheckInOutcome::FirstCheckIn);
        }

        if self.record.last_checkin_date == Some(today) {
            self.record.last_checkin_time = Some(now);
            return Ok(CheckInOutcome::AlreadyDone);
        }

        if normalize(&input) != normalize(&self.record.commitment_text) {
            return Err(TrackerError::CommitmentMismatch);
        }

        let next_streak = self.record.current_streak.saturating_add(1);
        self.record.current_streak = next_streak;
        self.record.last_checkin_date = Some(today);
        self.record.last_checkin_time = Some(now);
        if self.profile.lockable_starting_day {
            self.record.starting_day_locked = true;
        }
        Ok(CheckInOutcome::Advanced(next_streak))
    }

    /// Reset the streak back to day zero.
    ///
    /// Always succeeds. With `keep_commitment` the locked text (and
    /// allow-list) survive; without it the record returns to the
    /// never-checked-in lifecycle state.
    pub fn reset_streak(&mut self, keep_commitment: bool) {
        self.record.current_streak = 0;
        self.record.starting_day = 0;
        self.record.starting_day_locked = false;
        self.record.last_checkin_date = None;
        self.record.last_checkin_time = None;
        if !keep_commitment {
            self.record.commitment_text.clear();
            self.record.allow_list.clear();
        }
    }

    /// Rebase the starting day so the displayed total becomes
    /// `desired_total` (when the streak allows it).
    ///
    /// The new base is clamped at zero, so a target below the current
    /// streak yields a displayed total that still exceeds the request.
    /// That mismatch is a documented product decision; the returned
    /// [`StartingDayChange`] lets the caller confirm lowering moves.
    pub fn set_starting_day(
        &mut self,
        desired_total: u32,
    ) -> Result<StartingDayChange, TrackerError> {
        if !self.profile.has_starting_day {
            return Err(TrackerError::UnsupportedAction("set-day"));
        }
        if desired_total > MAX_STARTING_DAY {
            return Err(TrackerError::OutOfRange {
                value: desired_total,
                max: MAX_STARTING_DAY,
            });
        }
        if self.record.starting_day_locked {
            return Err(TrackerError::StartingDayLocked);
        }

        let old_base = self.record.starting_day;
        let old_displayed = self.record.displayed_day();
        let new_base = desired_total.saturating_sub(self.record.current_streak);
        self.record.starting_day = new_base;

        Ok(StartingDayChange {
            old_base,
            new_base,
            old_displayed,
            new_displayed: self.record.displayed_day(),
        })
    }

    /// Latch the starting day without a check-in (lockable variants only).
    pub fn lock_starting_day(&mut self) -> Result<(), TrackerError> {
        if !self.profile.lockable_starting_day {
            return Err(TrackerError::UnsupportedAction("lock-day"));
        }
        self.record.starting_day_locked = true;
        Ok(())
    }
}
