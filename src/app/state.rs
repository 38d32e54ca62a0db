// Inti App - app/state.rs
//
// Application state management. Holds the status log, the mounted
// welcome dialog (if any), metadata, settings, and effective config.
// Owned by the eframe::App implementation.

use crate::app::settings::{self, Settings};
use crate::app::welcome::WelcomeDialog;
use crate::core::model::{AppMetadata, Severity};
use crate::core::status::StatusLog;
use crate::platform::config::{PlatformPaths, ValidatedConfig};

/// Top-level application state.
#[derive(Debug)]
pub struct AppState {
    /// Fixed document metadata (title/description pair).
    pub metadata: AppMetadata,

    /// The status message log shared by every reporting call site.
    pub status_log: StatusLog,

    /// Currently mounted welcome dialog. `None` when no dialog is mounted
    /// (the user has already been through onboarding this launch).
    pub welcome: Option<WelcomeDialog>,

    /// Persisted user settings.
    pub settings: Settings,

    /// Validated configuration from config.toml.
    pub config: ValidatedConfig,

    /// Resolved platform paths (settings persistence target).
    pub paths: PlatformPaths,

    /// Whether debug mode is enabled.
    pub debug_mode: bool,
}

impl AppState {
    /// Create initial state. The welcome dialog is mounted only on a
    /// first run (or after `--reset-welcome`).
    pub fn new(
        settings: Settings,
        config: ValidatedConfig,
        paths: PlatformPaths,
        debug_mode: bool,
    ) -> Self {
        let welcome = if settings.welcome_shown {
            None
        } else {
            Some(WelcomeDialog::new())
        };

        Self {
            metadata: AppMetadata::default(),
            status_log: StatusLog::default(),
            welcome,
            settings,
            config,
            paths,
            debug_mode,
        }
    }

    /// The status-reporting sink handed to UI code:
    /// `report(message, severity)`, infallible, no return value.
    pub fn report_status(&mut self, message: impl Into<String>, severity: Severity) {
        self.status_log.report(message, severity);
    }

    /// Mount a fresh welcome dialog (a new component lifetime with its
    /// own one-shot open guard). Used by the "show introduction" control.
    pub fn mount_welcome(&mut self) {
        self.welcome = Some(WelcomeDialog::new());
    }

    /// Persist current settings; failures are logged and ignored so they
    /// never interrupt the user.
    pub fn save_settings(&self) {
        let path = self.paths.settings_file();
        if let Err(e) = settings::save(&self.settings, &path) {
            tracing::warn!(error = %e, "Failed to save settings");
        }
    }
}
