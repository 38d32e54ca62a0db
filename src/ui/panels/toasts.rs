// Inti App - ui/panels/toasts.rs
//
// Transient toast overlay: recently reported status messages stacked in
// the top-right corner, each disappearing after the configured lifetime.

use crate::core::status::StatusLog;
use crate::ui::theme;
use chrono::Utc;

/// Render the toast overlay.
///
/// Returns true while any toast is visible so the caller can schedule a
/// repaint for the expiry animation frame.
pub fn render(ctx: &egui::Context, status_log: &StatusLog, toast_duration_secs: u64) -> bool {
    let active = status_log.active(Utc::now(), toast_duration_secs);
    if active.is_empty() {
        return false;
    }

    egui::Area::new(egui::Id::new("status_toasts"))
        .anchor(egui::Align2::RIGHT_TOP, [-12.0, 48.0])
        .interactable(false)
        .show(ctx, |ui| {
            ui.set_max_width(theme::TOAST_WIDTH);
            for msg in &active {
                egui::Frame::window(ui.style())
                    .fill(theme::severity_bg_colour(&msg.severity))
                    .show(ui, |ui| {
                        ui.horizontal(|ui| {
                            ui.label(
                                egui::RichText::new("\u{25cf}")
                                    .color(theme::severity_colour(&msg.severity)),
                            );
                            ui.label(egui::RichText::new(&msg.text).size(12.5));
                        });
                    });
                ui.add_space(4.0);
            }
        });

    true
}
