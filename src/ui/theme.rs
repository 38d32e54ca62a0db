// Inti App - ui/theme.rs
//
// Colour scheme, severity colour mapping, and layout constants.
// No dependencies on app state or business logic.

use crate::core::model::Severity;
use egui::Color32;

/// Brand accent colour (the "primary" token used by selected buttons).
pub const BRAND_PRIMARY: Color32 = Color32::from_rgb(249, 115, 22); // Orange 500

/// Colour for a given status severity.
pub fn severity_colour(severity: &Severity) -> Color32 {
    match severity {
        Severity::Error => Color32::from_rgb(220, 38, 38),    // Red 600
        Severity::Warning => Color32::from_rgb(217, 119, 6),  // Amber 600
        Severity::Success => Color32::from_rgb(34, 197, 94),  // Green 500
        Severity::Info => Color32::from_rgb(209, 213, 219),   // Gray 300
    }
}

/// Background highlight colour for a severity (subtle, for toast frames).
pub fn severity_bg_colour(severity: &Severity) -> Color32 {
    match severity {
        Severity::Error => Color32::from_rgba_premultiplied(220, 38, 38, 25),
        Severity::Warning => Color32::from_rgba_premultiplied(217, 119, 6, 20),
        Severity::Success => Color32::from_rgba_premultiplied(34, 197, 94, 20),
        Severity::Info => Color32::from_rgba_premultiplied(107, 114, 128, 20),
    }
}

/// Apply the configured visual theme to the egui context.
/// `theme` has already been validated to "dark" or "light".
pub fn apply(ctx: &egui::Context, theme: &str) {
    match theme {
        "light" => ctx.set_visuals(egui::Visuals::light()),
        _ => ctx.set_visuals(egui::Visuals::dark()),
    }
}

/// Layout constants.
pub const HEADER_HEIGHT: f32 = 36.0;
pub const STATUS_BAR_HEIGHT: f32 = 28.0;
pub const WELCOME_MIN_WIDTH: f32 = 560.0;
pub const LOGO_MAX_WIDTH: f32 = 240.0;
pub const TOAST_WIDTH: f32 = 300.0;
