//! Transient feedback notices and their timing
use serde::{Deserialize, Serialize};

/// Delay before the fade-in class is applied, so the element mounts at
/// opacity 0 first and the CSS transition actually runs.
pub const ENTER_DELAY_MS: u32 = 10;

/// How long the fade-out transition takes before the element can be
/// removed.
pub const FADE_OUT_MS: u32 = 300;

/// Notice severity. Warnings linger longer than confirmations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Success,
    Warning,
}

impl Severity {
    /// Time the notice stays fully visible, from publish.
    #[must_use]
    pub const fn display_ms(self) -> u32 {
        match self {
            Self::Success => 3000,
            Self::Warning => 4000,
        }
    }

    /// Suffix for the `cart-message-*` modifier class.
    #[must_use]
    pub const fn css_suffix(self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Warning => "warning",
        }
    }
}

/// One published notice. At most one exists at a time; publishing a
/// new one supersedes the current one immediately. Ids increase
/// monotonically so a callback fired for a superseded notice can be
/// recognized as stale and dropped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub message: String,
    pub severity: Severity,
}

impl Notice {
    #[must_use]
    pub fn new(id: u64, message: impl Into<String>, severity: Severity) -> Self {
        Self {
            id,
            message: message.into(),
            severity,
        }
    }
}

/// Presentation phase of a mounted notice. Mounting and visibility are
/// deliberately distinct: the element exists before the fade-in begins
/// and survives until the fade-out completes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NoticePhase {
    /// Mounted, fade-in not yet triggered
    #[default]
    Entering,
    /// Fully shown
    Visible,
    /// Fading out, still mounted
    Leaving,
}

impl NoticePhase {
    /// Whether the `show` class belongs on the element in this phase.
    #[must_use]
    pub const fn is_shown(self) -> bool {
        matches!(self, Self::Visible)
    }
}

/// Timer offsets, in milliseconds from publish, driving a notice
/// through its phases.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NoticeSchedule {
    /// Entering -> Visible
    pub enter_ms: u32,
    /// Visible -> Leaving
    pub fade_ms: u32,
    /// Leaving -> removed
    pub remove_ms: u32,
}

impl NoticeSchedule {
    #[must_use]
    pub const fn for_severity(severity: Severity) -> Self {
        Self {
            enter_ms: ENTER_DELAY_MS,
            fade_ms: severity.display_ms(),
            remove_ms: severity.display_ms() + FADE_OUT_MS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn success_schedule_matches_the_page_timings() {
        let schedule = NoticeSchedule::for_severity(Severity::Success);
        assert_eq!(schedule.enter_ms, 10);
        assert_eq!(schedule.fade_ms, 3000);
        assert_eq!(schedule.remove_ms, 3300);
    }

    #[test]
    fn warnings_linger_longer_than_confirmations() {
        let success = NoticeSchedule::for_severity(Severity::Success);
        let warning = NoticeSchedule::for_severity(Severity::Warning);
        assert!(warning.fade_ms > success.fade_ms);
        assert_eq!(warning.fade_ms, 4000);
        assert_eq!(warning.remove_ms, 4300);
    }

    #[test]
    fn phase_ordering_is_enter_then_fade_then_remove() {
        for severity in [Severity::Success, Severity::Warning] {
            let schedule = NoticeSchedule::for_severity(severity);
            assert!(schedule.enter_ms < schedule.fade_ms);
            assert!(schedule.fade_ms < schedule.remove_ms);
        }
    }

    #[test]
    fn only_the_visible_phase_carries_the_show_class() {
        assert!(!NoticePhase::Entering.is_shown());
        assert!(NoticePhase::Visible.is_shown());
        assert!(!NoticePhase::Leaving.is_shown());
    }

    #[test]
    fn severity_css_suffixes() {
        assert_eq!(Severity::Success.css_suffix(), "success");
        assert_eq!(Severity::Warning.css_suffix(), "warning");
    }

    #[test]
    fn notices_compare_by_id_message_and_severity() {
        let a = Notice::new(1, "Item added to cart successfully!", Severity::Success);
        let b = Notice::new(2, "Item added to cart successfully!", Severity::Success);
        assert_ne!(a, b, "a superseding notice is a different notice");
        assert_eq!(a, a.clone());
    }
}
