//! Read-only projection of records into display text.
//!
//! Everything here formats; nothing validates. Absent values render as an
//! em-dash placeholder.

use chrono::{DateTime, Datelike, Local, NaiveDate, NaiveTime, Timelike, Utc};

use crate::lastlog::LogPad;
use crate::tracker::StreakRecord;

const PLACEHOLDER: &str = "—";

/// "Day {starting day + streak}".
pub fn day_label(record: &StreakRecord) -> String {
    format!("Day {}", record.displayed_day())
}

/// Long-form date: "January 5, 2024".
pub fn pretty_date(date: NaiveDate) -> String {
    format!("{} {}, {}", date.format("%B"), date.day(), date.year())
}

/// Twelve-hour clock with AM/PM: "2:07:09 PM".
pub fn format_time_am_pm(time: NaiveTime) -> String {
    let hour = time.hour();
    let meridiem = if hour >= 12 { "PM" } else { "AM" };
    let hour12 = (hour + 11) % 12 + 1;
    format!(
        "{}:{:02}:{:02} {}",
        hour12,
        time.minute(),
        time.second(),
        meridiem
    )
}

/// Twenty-four-hour clock: "14:07:09".
pub fn format_time_24h(time: NaiveTime) -> String {
    time.format("%H:%M:%S").to_string()
}

/// "Last Check-In: January 5, 2024 · 2:07:09 PM", or the placeholder line
/// when no check-in has ever happened.
pub fn last_check_in_label(record: &StreakRecord, use_24h_time: bool) -> String {
    match record.last_checkin_date {
        Some(date) => {
            let time = match record.last_checkin_time {
                Some(t) if use_24h_time => format_time_24h(t),
                Some(t) => format_time_am_pm(t),
                None => "--:--".to_string(),
            };
            format!("Last Check-In: {} · {}", pretty_date(date), time)
        }
        None => format!("Last Check-In: {PLACEHOLDER}"),
    }
}

/// "Last Saved: Mar 10, 2024, 06:45 PM" in local time, or the placeholder.
pub fn last_saved_label(pad: &LogPad) -> String {
    match pad.saved_at {
        Some(at) => format!("Last Saved: {}", short_local_datetime(at)),
        None => format!("Last Saved: {PLACEHOLDER}"),
    }
}

fn short_local_datetime(at: DateTime<Utc>) -> String {
    at.with_timezone(&Local)
        .format("%b %d, %Y, %I:%M %p")
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record_checked_in(h: u32, m: u32, s: u32) -> StreakRecord {
        StreakRecord {
            current_streak: 4,
            last_checkin_date: NaiveDate::from_ymd_opt(2024, 1, 5),
            last_checkin_time: NaiveTime::from_hms_opt(h, m, s),
            ..Default::default()
        }
    }

    #[test]
    fn day_label_includes_starting_day() {
        let record = StreakRecord {
            current_streak: 4,
            starting_day: 10,
            ..Default::default()
        };
        assert_eq!(day_label(&record), "Day 14");
    }

    #[test]
    fn pretty_date_is_long_form() {
        assert_eq!(
            pretty_date(NaiveDate::from_ymd_opt(2024, 1, 5).unwrap()),
            "January 5, 2024"
        );
    }

    #[test]
    fn am_pm_formatting() {
        assert_eq!(
            format_time_am_pm(NaiveTime::from_hms_opt(14, 7, 9).unwrap()),
            "2:07:09 PM"
        );
        assert_eq!(
            format_time_am_pm(NaiveTime::from_hms_opt(0, 5, 0).unwrap()),
            "12:05:00 AM"
        );
        assert_eq!(
            format_time_am_pm(NaiveTime::from_hms_opt(12, 0, 0).unwrap()),
            "12:00:00 PM"
        );
    }

    #[test]
    fn last_check_in_label_variants() {
        assert_eq!(
            last_check_in_label(&StreakRecord::default(), false),
            "Last Check-In: —"
        );
        assert_eq!(
            last_check_in_label(&record_checked_in(14, 7, 9), false),
            "Last Check-In: January 5, 2024 · 2:07:09 PM"
        );
        assert_eq!(
            last_check_in_label(&record_checked_in(14, 7, 9), true),
            "Last Check-In: January 5, 2024 · 14:07:09"
        );
    }

    #[test]
    fn last_saved_label_placeholder() {
        assert_eq!(last_saved_label(&LogPad::default()), "Last Saved: —");
    }
}
