// Inti App - core/status.rs
//
// In-memory status message log: the reporting sink behind every
// user-facing "addStatusMessage"-style call in the application.
//
// Reporting is infallible and non-blocking. The log is bounded; once the
// cap is reached the oldest message is evicted. Each report is mirrored to
// the tracing subscriber at the level matching its severity so the same
// event is visible in structured logs.

use crate::core::model::{Severity, StatusMessage};
use crate::util::constants::MAX_STATUS_MESSAGES;
use chrono::{DateTime, Duration, Utc};
use std::collections::VecDeque;

/// Bounded FIFO of status messages, oldest first.
#[derive(Debug)]
pub struct StatusLog {
    messages: VecDeque<StatusMessage>,
    cap: usize,
}

impl Default for StatusLog {
    fn default() -> Self {
        Self::with_capacity(MAX_STATUS_MESSAGES)
    }
}

impl StatusLog {
    /// Create a log bounded to `cap` messages. `cap` must be non-zero.
    pub fn with_capacity(cap: usize) -> Self {
        Self {
            messages: VecDeque::with_capacity(cap.min(MAX_STATUS_MESSAGES)),
            cap: cap.max(1),
        }
    }

    /// Report a message. Appends a timestamped entry, evicting the oldest
    /// entry when the cap is reached.
    pub fn report(&mut self, text: impl Into<String>, severity: Severity) {
        let message = StatusMessage {
            text: text.into(),
            severity,
            created_at: Utc::now(),
        };

        match severity {
            Severity::Error => tracing::error!(status = %message.text, "Status reported"),
            Severity::Warning => tracing::warn!(status = %message.text, "Status reported"),
            Severity::Success | Severity::Info => {
                tracing::info!(status = %message.text, severity = %severity, "Status reported");
            }
        }

        if self.messages.len() == self.cap {
            self.messages.pop_front();
        }
        self.messages.push_back(message);
    }

    /// Most recent message, if any (status-bar surface).
    pub fn latest(&self) -> Option<&StatusMessage> {
        self.messages.back()
    }

    /// Messages reported within the last `window_secs` seconds relative to
    /// `now`, oldest first (toast overlay surface).
    pub fn active(&self, now: DateTime<Utc>, window_secs: u64) -> Vec<&StatusMessage> {
        let window = Duration::seconds(window_secs as i64);
        self.messages
            .iter()
            .filter(|m| now.signed_duration_since(m.created_at) < window)
            .collect()
    }

    /// All retained messages, oldest first.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &StatusMessage> {
        self.messages.iter()
    }

    /// Number of retained messages.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// True when no message has been reported (or all were evicted).
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_report_appends_in_order() {
        let mut log = StatusLog::default();
        log.report("first", Severity::Info);
        log.report("second", Severity::Success);

        assert_eq!(log.len(), 2);
        let texts: Vec<_> = log.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["first", "second"]);
        assert_eq!(log.latest().unwrap().text, "second");
        assert_eq!(log.latest().unwrap().severity, Severity::Success);
    }

    /// Once the cap is reached the oldest message must be evicted first.
    #[test]
    fn test_cap_evicts_oldest() {
        let mut log = StatusLog::with_capacity(3);
        for i in 0..5 {
            log.report(format!("msg {i}"), Severity::Info);
        }

        assert_eq!(log.len(), 3);
        let texts: Vec<_> = log.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["msg 2", "msg 3", "msg 4"]);
    }

    #[test]
    fn test_zero_capacity_is_clamped() {
        let mut log = StatusLog::with_capacity(0);
        log.report("still retained", Severity::Warning);
        assert_eq!(log.len(), 1);
    }

    /// `active` must include fresh messages and exclude expired ones.
    #[test]
    fn test_active_window_filters_by_age() {
        let mut log = StatusLog::default();
        log.report("fresh", Severity::Info);

        let now = Utc::now();
        assert_eq!(log.active(now, 5).len(), 1);

        // Viewed from far in the future, the message has expired.
        let later = now + Duration::seconds(60);
        assert!(log.active(later, 5).is_empty());
    }

    #[test]
    fn test_empty_log() {
        let log = StatusLog::default();
        assert!(log.is_empty());
        assert!(log.latest().is_none());
        assert!(log.active(Utc::now(), 5).is_empty());
    }
}
