// Inti App - core/model.rs
//
// Core data model types. Pure data definitions with no I/O, no UI,
// no platform dependencies.
//
// These types are the shared vocabulary across all layers.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// =============================================================================
// Severity
// =============================================================================

/// Severity of a user-facing status message.
///
/// This is a closed four-value set; every message reported anywhere in the
/// application carries exactly one of these tags. The serialised form uses
/// the uppercase wire names (`"INFO"`, `"WARNING"`, `"SUCCESS"`, `"ERROR"`).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum Severity {
    #[default]
    Info,
    Warning,
    Success,
    Error,
}

impl Severity {
    /// Returns all variants in display order.
    pub fn all() -> &'static [Severity] {
        &[
            Severity::Info,
            Severity::Warning,
            Severity::Success,
            Severity::Error,
        ]
    }

    /// Human-readable label for display.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Info => "Info",
            Severity::Warning => "Warning",
            Severity::Success => "Success",
            Severity::Error => "Error",
        }
    }

    /// Short label for compact display (toast badges, status bar).
    pub fn short_label(&self) -> &'static str {
        match self {
            Severity::Info => "INFO",
            Severity::Warning => "WARN",
            Severity::Success => "OK",
            Severity::Error => "ERR",
        }
    }
}

impl std::fmt::Display for Severity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

// =============================================================================
// Status message
// =============================================================================

/// A single user-facing status message.
///
/// Constructed at the moment an event is reported; ownership moves into the
/// status log and the reporting caller retains no copy.
#[derive(Debug, Clone, Serialize)]
pub struct StatusMessage {
    /// Human-readable message text.
    pub text: String,

    /// Severity tag.
    pub severity: Severity,

    /// Moment the message was reported, in UTC.
    pub created_at: DateTime<Utc>,
}

// =============================================================================
// Application metadata
// =============================================================================

/// Document-level metadata declared by the layout shell: the fixed
/// title/description pair shown in the header and the window title.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppMetadata {
    pub title: String,
    pub description: String,
}

impl Default for AppMetadata {
    fn default() -> Self {
        Self {
            title: crate::util::constants::APP_NAME.to_string(),
            description: crate::util::constants::APP_DESCRIPTION.to_string(),
        }
    }
}

impl AppMetadata {
    /// Title string for the native window.
    pub fn window_title(&self) -> String {
        format!("{} \u{2014} {}", self.title, self.description)
    }
}
