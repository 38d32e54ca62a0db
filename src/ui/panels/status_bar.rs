// Inti App - ui/panels/status_bar.rs
//
// Bottom status bar: latest status message (severity-coloured badge)
// and the retained message count.

use crate::core::status::StatusLog;
use crate::ui::theme;

/// Render the status bar contents.
pub fn render(ui: &mut egui::Ui, status_log: &StatusLog) {
    ui.horizontal_centered(|ui| {
        match status_log.latest() {
            Some(msg) => {
                ui.label(
                    egui::RichText::new(format!(" {} ", msg.severity.short_label()))
                        .strong()
                        .color(theme::severity_colour(&msg.severity))
                        .background_color(theme::severity_bg_colour(&msg.severity)),
                );
                ui.label(&msg.text);
            }
            None => {
                ui.label(egui::RichText::new("Ready.").weak());
            }
        }

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            let total = status_log.len();
            if total > 0 {
                ui.label(
                    egui::RichText::new(format!("{total} message(s)"))
                        .small()
                        .weak(),
                );
            }
        });
    });
}
