//! Last Log pad: a free-text relapse log with a saved-at timestamp.
//!
//! Unlike the streak trackers there is no commitment, no matching, and no
//! streak; the pad stores raw text under one key and an ISO-8601 timestamp
//! under another. Blank saves are allowed and reported as such.

use chrono::{DateTime, Utc};

use crate::error::StoreError;
use crate::events::Event;
use crate::store::StateStore;

pub const LOG_TEXT_KEY: &str = "disciplineos_lastlog_text";
pub const LOG_SAVED_AT_KEY: &str = "disciplineos_lastlog_savedAt";

/// Checklist template offered by the pad.
pub const LOG_TEMPLATE: &str = "last fap — \n\
last corn/porn — \n\
last movie/tv — \n\
last junk drink — \n\
last junk snack — \n\
last doomscroll — \n\
last slept-in/snooze — \n\
notes (optional) — ";

/// The pad's loaded state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogPad {
    pub text: String,
    pub saved_at: Option<DateTime<Utc>>,
}

impl LogPad {
    /// Load the pad. Missing keys and unparseable timestamps load as
    /// empty/absent.
    pub fn load(store: &dyn StateStore) -> Self {
        let text = store.get(LOG_TEXT_KEY).unwrap_or_default();
        let saved_at = store
            .get(LOG_SAVED_AT_KEY)
            .and_then(|raw| DateTime::parse_from_rfc3339(&raw).ok())
            .map(|dt| dt.with_timezone(&Utc));
        Self { text, saved_at }
    }

    /// Persist `text` and stamp the save time.
    pub fn save(
        store: &mut dyn StateStore,
        text: &str,
        now: DateTime<Utc>,
    ) -> Result<Event, StoreError> {
        store.set(LOG_TEXT_KEY, text)?;
        store.set(LOG_SAVED_AT_KEY, &now.to_rfc3339())?;
        Ok(Event::LogSaved {
            empty: text.trim().is_empty(),
            at: now,
        })
    }

    /// Remove both keys.
    pub fn clear(store: &mut dyn StateStore) -> Result<Event, StoreError> {
        store.remove(LOG_TEXT_KEY)?;
        store.remove(LOG_SAVED_AT_KEY)?;
        Ok(Event::LogCleared { at: Utc::now() })
    }

    pub fn is_empty(&self) -> bool {
        self.text.trim().is_empty()
    }
}

/// Insert the checklist template: replaces an empty pad, or appends after a
/// divider when content already exists.
pub fn with_template(current: &str) -> String {
    let trimmed = current.trim();
    if trimmed.is_empty() {
        LOG_TEMPLATE.to_string()
    } else {
        format!("{trimmed}\n\n---\n{LOG_TEMPLATE}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;
    use chrono::TimeZone;

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 3, 10, 18, 45, 0).unwrap()
    }

    #[test]
    fn save_and_load_roundtrip() {
        let mut store = MemoryStore::new();
        let event = LogPad::save(&mut store, "last fap — friday", t0()).unwrap();
        assert_eq!(event, Event::LogSaved { empty: false, at: t0() });

        let pad = LogPad::load(&store);
        assert_eq!(pad.text, "last fap — friday");
        assert_eq!(pad.saved_at, Some(t0()));
    }

    #[test]
    fn blank_save_is_allowed_and_flagged() {
        let mut store = MemoryStore::new();
        let event = LogPad::save(&mut store, "   ", t0()).unwrap();
        assert_eq!(event, Event::LogSaved { empty: true, at: t0() });
    }

    #[test]
    fn unparseable_timestamp_loads_as_absent() {
        let mut store = MemoryStore::new();
        store.seed(LOG_TEXT_KEY, "notes");
        store.seed(LOG_SAVED_AT_KEY, "yesterday-ish");
        let pad = LogPad::load(&store);
        assert_eq!(pad.text, "notes");
        assert!(pad.saved_at.is_none());
    }

    #[test]
    fn clear_removes_both_keys() {
        let mut store = MemoryStore::new();
        LogPad::save(&mut store, "notes", t0()).unwrap();
        LogPad::clear(&mut store).unwrap();
        assert_eq!(LogPad::load(&store), LogPad::default());
    }

    #[test]
    fn template_replaces_empty_pad() {
        assert_eq!(with_template("  \n"), LOG_TEMPLATE);
    }

    #[test]
    fn template_appends_after_divider() {
        let combined = with_template("existing notes");
        assert!(combined.starts_with("existing notes\n\n---\n"));
        assert!(combined.ends_with(LOG_TEMPLATE));
    }
}
