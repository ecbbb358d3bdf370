//! Per-variant tracker profiles.
//!
//! One engine serves every tracker; a profile enumerates the per-variant
//! quirks: text limits, starting-day support, allow-list support, and
//! whether the starting day latches after a check-in.

use serde::{Deserialize, Serialize};

/// Upper bound for a user-supplied starting day.
pub const MAX_STARTING_DAY: u32 = 5000;

/// The shipped tracker variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrackerKind {
    NoFap,
    MonkMode,
    NoSocial,
}

impl TrackerKind {
    /// The built-in profile for this variant.
    pub fn profile(self) -> TrackerProfile {
        match self {
            TrackerKind::NoFap => TrackerProfile {
                kind: self,
                storage_key: "disciplineos_nofap_nocorn_v1",
                max_text_len: 2000,
                has_starting_day: true,
                lockable_starting_day: false,
                has_allow_list: false,
                max_allow_list: 0,
            },
            TrackerKind::MonkMode => TrackerProfile {
                kind: self,
                storage_key: "disciplineos_monk_mode_v1",
                max_text_len: 5000,
                has_starting_day: false,
                lockable_starting_day: false,
                has_allow_list: false,
                max_allow_list: 0,
            },
            TrackerKind::NoSocial => TrackerProfile {
                kind: self,
                storage_key: "disciplineos_no_social_v1",
                max_text_len: 2000,
                has_starting_day: false,
                lockable_starting_day: false,
                has_allow_list: true,
                max_allow_list: 50,
            },
        }
    }

    /// Short human label, used in CLI output.
    pub fn label(self) -> &'static str {
        match self {
            TrackerKind::NoFap => "NoFap",
            TrackerKind::MonkMode => "Monk Mode",
            TrackerKind::NoSocial => "Healthy Social Media",
        }
    }
}

/// Configuration for one tracker instance.
///
/// Fields are public so embedders and tests can build custom profiles; the
/// shipped variants come from [`TrackerKind::profile`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerProfile {
    pub kind: TrackerKind,
    /// Key the record is persisted under. Unique per tracker instance.
    pub storage_key: &'static str,
    /// Commitment text is clamped to this many characters.
    pub max_text_len: usize,
    /// Whether the variant carries a display base ("starting day").
    pub has_starting_day: bool,
    /// Whether a check-in latches the starting day until a reset.
    pub lockable_starting_day: bool,
    /// Whether the variant carries an allow-list.
    pub has_allow_list: bool,
    /// Allow-list entries are capped at this count.
    pub max_allow_list: usize,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_keys_are_unique() {
        let keys = [
            TrackerKind::NoFap.profile().storage_key,
            TrackerKind::MonkMode.profile().storage_key,
            TrackerKind::NoSocial.profile().storage_key,
        ];
        assert_eq!(
            keys.len(),
            keys.iter().collect::<std::collections::HashSet<_>>().len()
        );
    }

    #[test]
    fn only_nofap_has_starting_day() {
        assert!(TrackerKind::NoFap.profile().has_starting_day);
        assert!(!TrackerKind::MonkMode.profile().has_starting_day);
        assert!(!TrackerKind::NoSocial.profile().has_starting_day);
    }

    #[test]
    fn only_nosocial_has_allow_list() {
        assert!(TrackerKind::NoSocial.profile().has_allow_list);
        assert_eq!(TrackerKind::NoSocial.profile().max_allow_list, 50);
        assert!(!TrackerKind::NoFap.profile().has_allow_list);
    }

    #[test]
    fn monk_mode_allows_longer_scripts() {
        assert_eq!(TrackerKind::MonkMode.profile().max_text_len, 5000);
        assert_eq!(TrackerKind::NoFap.profile().max_text_len, 2000);
    }
}
