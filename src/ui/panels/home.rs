// Inti App - ui/panels/home.rs
//
// Home page content: a short product blurb and the recent-activity list
// fed by the status log.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::util::constants;

/// Render the home page.
pub fn render(ui: &mut egui::Ui, state: &mut AppState) {
    ui.add_space(12.0);

    ui.vertical_centered(|ui| {
        ui.label(
            egui::RichText::new("Demo de Retrieval-Augmented Generation")
                .size(20.0)
                .strong(),
        );
        ui.add_space(6.0);
        ui.label(
            egui::RichText::new(
                "Cargá tus documentos y charlá con ellos desde una interfaz amigable.",
            )
            .weak(),
        );
        ui.add_space(4.0);
        ui.hyperlink_to(constants::WEBSITE_LABEL, constants::WEBSITE_URL);
    });

    ui.add_space(16.0);
    ui.separator();
    ui.add_space(8.0);

    ui.strong("Actividad reciente");
    ui.add_space(4.0);

    if state.status_log.is_empty() {
        ui.label(egui::RichText::new("Sin actividad todavía.").weak());
        return;
    }

    egui::ScrollArea::vertical()
        .id_salt("home_activity")
        .auto_shrink([false, true])
        .show(ui, |ui| {
            // Newest first.
            for msg in state.status_log.iter().rev() {
                ui.horizontal(|ui| {
                    ui.label(
                        egui::RichText::new(msg.created_at.format("%H:%M:%S").to_string())
                            .monospace()
                            .size(11.5)
                            .weak(),
                    );
                    ui.colored_label(
                        theme::severity_colour(&msg.severity),
                        msg.severity.short_label(),
                    );
                    ui.label(egui::RichText::new(&msg.text).size(12.5));
                });
            }
        });
}
