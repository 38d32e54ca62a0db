// Inti App - util/constants.rs
//
// Single source of truth for all named constants, limits, and defaults.

// =============================================================================
// Application metadata
// =============================================================================

/// Application display name.
pub const APP_NAME: &str = "IntiApp";

/// Application identifier used for config/data directories.
pub const APP_ID: &str = "IntiApp";

/// One-line application description, shown in the header and window title.
pub const APP_DESCRIPTION: &str = "RAG App";

/// Current application version (updated by release script).
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Company website opened by the welcome dialog's secondary action.
pub const WEBSITE_URL: &str = "https://www.intisoluciones.com";

// =============================================================================
// Welcome dialog copy
// =============================================================================

/// Main heading of the getting-started dialog.
pub const WELCOME_TITLE: &str = "Bienvenido a Inti App";

/// Subtitle shown directly under the heading.
pub const WELCOME_SUBTITLE: &str = "Una solución para charlar con tus datos";

/// Body paragraph of the getting-started dialog.
pub const WELCOME_BODY: &str = "Esta aplicación es un demo hecho para mostrar \
una oferta de aplicación end-to-end optimizada y amigable para el usuario de \
Retrieval-Augmented Generation (RAG).";

/// Label of the acknowledgment button.
pub const WELCOME_ACK_LABEL: &str = "Comenzar!";

/// Label of the external-website button.
pub const WEBSITE_LABEL: &str = "Intisoluciones";

/// Status message reported when the user acknowledges the welcome dialog.
pub const WELCOME_STATUS_MESSAGE: &str = "Welcome to Inti App!";

// =============================================================================
// Status message limits
// =============================================================================

/// Maximum number of status messages retained in the in-memory log.
/// Oldest messages are evicted first once the cap is reached.
pub const MAX_STATUS_MESSAGES: usize = 200;

/// Default lifetime of a status message in the toast overlay, in seconds.
pub const DEFAULT_TOAST_DURATION_SECS: u64 = 5;

/// Minimum user-configurable toast duration.
pub const MIN_TOAST_DURATION_SECS: u64 = 1;

/// Maximum user-configurable toast duration.
pub const MAX_TOAST_DURATION_SECS: u64 = 60;

// =============================================================================
// Persistence
// =============================================================================

/// File name of the persisted settings inside the platform data directory.
pub const SETTINGS_FILE_NAME: &str = "settings.json";

/// File name of the optional user configuration inside the config directory.
pub const CONFIG_FILE_NAME: &str = "config.toml";

// =============================================================================
// Logging
// =============================================================================

/// Default log level when neither RUST_LOG, --debug, nor config specify one.
pub const DEFAULT_LOG_LEVEL: &str = "info";

// =============================================================================
// Window geometry
// =============================================================================

/// Initial window size.
pub const WINDOW_WIDTH: f32 = 1000.0;
pub const WINDOW_HEIGHT: f32 = 700.0;

/// Minimum window size.
pub const MIN_WINDOW_WIDTH: f32 = 640.0;
pub const MIN_WINDOW_HEIGHT: f32 = 480.0;
