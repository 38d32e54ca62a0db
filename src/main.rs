// Inti App - main.rs
//
// Application entry point. Handles:
// 1. CLI argument parsing
// 2. Configuration loading and logging initialisation
// 3. Settings restore (first-run detection)
// 4. eframe GUI launch

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod gui;

// Re-export modules from the library crate so that `gui.rs` and other
// binary-side code can still use `crate::app::...`, `crate::core::...` etc.
pub use inti_app::app;

pub use inti_app::core;
pub use inti_app::platform;
pub use inti_app::ui;
pub use inti_app::util;

use clap::Parser;
use std::path::PathBuf;

/// Compile-time-embedded window icon PNG bytes (RGBA).
///
/// Using `include_bytes!` ensures the asset is baked into the binary so the
/// icon is always available regardless of the working directory at runtime.
static ICON_PNG: &[u8] = include_bytes!("../assets/icon.png");

/// Decode the embedded PNG and return an `eframe`-compatible `IconData`.
///
/// Falls back to a transparent 1x1 placeholder if decoding fails so the
/// application always launches rather than panicking on a missing asset.
fn load_icon() -> egui::IconData {
    match image::load_from_memory_with_format(ICON_PNG, image::ImageFormat::Png) {
        Ok(img) => {
            let rgba = img.into_rgba8();
            let (w, h) = (rgba.width(), rgba.height());
            egui::IconData {
                rgba: rgba.into_raw(),
                width: w,
                height: h,
            }
        }
        Err(e) => {
            tracing::warn!(error = %e, "Failed to decode icon PNG; using placeholder");
            placeholder_icon()
        }
    }
}

/// 1x1 transparent RGBA icon used when the real icon cannot be loaded.
fn placeholder_icon() -> egui::IconData {
    egui::IconData {
        rgba: vec![0u8; 4],
        width: 1,
        height: 1,
    }
}

/// IntiApp - desktop onboarding shell for the Inti App RAG demo.
///
/// Launches the application window, shows the getting-started dialog on a
/// first run, and routes user-visible status messages to the status bar
/// and toast overlay.
#[derive(Parser, Debug)]
#[command(name = "IntiApp", version, about)]
struct Cli {
    /// Override the configuration/data directory.
    #[arg(short = 'c', long = "config-dir")]
    config_dir: Option<PathBuf>,

    /// Show the getting-started dialog again on this launch.
    #[arg(long = "reset-welcome")]
    reset_welcome: bool,

    /// Enable debug logging (equivalent to RUST_LOG=debug).
    #[arg(short = 'd', long = "debug")]
    debug: bool,
}

fn main() {
    let cli = Cli::parse();

    // Resolve platform paths first: the config file location depends on them.
    let platform_paths =
        platform::config::PlatformPaths::resolve_with_override(cli.config_dir.as_deref());

    // Load config before initialising logging so [logging].level can apply.
    // A broken config file must not prevent launch; the error is surfaced
    // once the subscriber is up.
    let (config, config_error) = match platform::config::load_config(&platform_paths.config_file())
    {
        Ok(raw) => (raw.validate(), None),
        Err(e) => (platform::config::ValidatedConfig::default(), Some(e)),
    };

    util::logging::init(cli.debug, config.log_level.as_deref());

    if let Some(e) = config_error {
        tracing::warn!(error = %e, "Config file ignored, using defaults");
    }

    tracing::info!(
        version = util::constants::APP_VERSION,
        debug = cli.debug,
        "IntiApp starting"
    );

    // Restore settings; any load problem means "first run".
    let mut settings =
        app::settings::load(&platform_paths.settings_file()).unwrap_or_default();
    if cli.reset_welcome {
        settings.welcome_shown = false;
    }

    // Create application state. The welcome dialog is mounted when the
    // first-run flag is still clear.
    let state = app::state::AppState::new(settings, config, platform_paths, cli.debug);

    // Launch the GUI
    //
    // The icon is applied at two levels:
    //   1. OS-level (Windows EXE resource) — embedded by build.rs via winres.
    //      This covers the taskbar, Alt+Tab, title bar, and Explorer.
    //   2. Runtime (eframe viewport) — loaded here from the PNG asset.
    //      This covers the eframe-managed window icon on all platforms and
    //      acts as the canonical source on Linux/macOS.
    let icon_data = load_icon();

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(state.metadata.window_title())
            .with_inner_size([
                util::constants::WINDOW_WIDTH,
                util::constants::WINDOW_HEIGHT,
            ])
            .with_min_inner_size([
                util::constants::MIN_WINDOW_WIDTH,
                util::constants::MIN_WINDOW_HEIGHT,
            ])
            .with_icon(icon_data),
        ..Default::default()
    };

    let result = eframe::run_native(
        util::constants::APP_NAME,
        native_options,
        Box::new(move |cc| {
            ui::theme::apply(&cc.egui_ctx, &state.config.theme);
            Ok(Box::new(gui::IntiApp::new(state)))
        }),
    );

    if let Err(e) = result {
        tracing::error!(error = %e, "Failed to launch GUI");
        eprintln!("Error: Failed to launch IntiApp GUI: {e}");
        std::process::exit(1);
    }
}
