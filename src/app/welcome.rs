// Inti App - app/welcome.rs
//
// Getting-started dialog state machine.
//
// Lifecycle: Closed → Open on mount (exactly once per dialog lifetime,
// no matter how many frames are rendered), Open → Closed on either the
// acknowledgment control or a native dismissal gesture (close button,
// Escape). A closed dialog never re-opens itself; showing the
// introduction again means constructing a fresh `WelcomeDialog`.

use crate::core::model::Severity;
use crate::core::status::StatusLog;
use crate::util::constants;

/// Visibility phase of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Phase {
    Closed,
    Open,
}

/// One mounted instance of the getting-started dialog.
#[derive(Debug)]
pub struct WelcomeDialog {
    phase: Phase,
    /// One-shot guard: set by the first `on_frame` call and never cleared.
    mounted: bool,
    /// True once the acknowledgment control has been activated.
    acknowledged: bool,
}

impl Default for WelcomeDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl WelcomeDialog {
    /// A freshly mounted, not-yet-shown dialog.
    pub fn new() -> Self {
        Self {
            phase: Phase::Closed,
            mounted: false,
            acknowledged: false,
        }
    }

    /// Per-frame hook. The first call opens the dialog; all later calls
    /// are no-ops, so re-rendering never re-triggers the open action.
    pub fn on_frame(&mut self) {
        if !self.mounted {
            self.mounted = true;
            self.phase = Phase::Open;
            tracing::debug!("Welcome dialog opened");
        }
    }

    /// Whether the dialog is currently visible.
    pub fn is_open(&self) -> bool {
        self.phase == Phase::Open
    }

    /// Whether the user acknowledged (rather than dismissed) the dialog.
    pub fn acknowledged(&self) -> bool {
        self.acknowledged
    }

    /// The acknowledgment control ("Comenzar!").
    ///
    /// Reports the fixed welcome message with SUCCESS severity and closes
    /// the dialog. Only reachable while open, so the report fires at most
    /// once per dialog lifetime.
    pub fn acknowledge(&mut self, status: &mut StatusLog) {
        if self.phase != Phase::Open {
            return;
        }
        status.report(constants::WELCOME_STATUS_MESSAGE, Severity::Success);
        self.acknowledged = true;
        self.phase = Phase::Closed;
        tracing::info!("Welcome dialog acknowledged");
    }

    /// The external-website control ("Intisoluciones").
    ///
    /// Returns the URL for the caller to open in a new browsing context.
    /// Fire-and-forget: no status message, dialog stays open.
    pub fn website_url(&self) -> &'static str {
        constants::WEBSITE_URL
    }

    /// Native dismissal (close button, Escape). Closes without reporting.
    pub fn dismiss(&mut self) {
        if self.phase == Phase::Open {
            self.phase = Phase::Closed;
            tracing::debug!("Welcome dialog dismissed");
        }
    }
}
