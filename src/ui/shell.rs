// Inti App - ui/shell.rs
//
// Root layout shell: header bar with the fixed title/description pair,
// bottom status bar, and the page content placed unmodified in the
// central panel. No computation, no conditional logic, no error paths.

use crate::app::state::AppState;
use crate::ui::panels;
use crate::ui::theme;

/// Render the layout shell around `content`.
///
/// `content` is an opaque page renderer; it is invoked exactly once,
/// nested inside the central panel.
pub fn render(
    ctx: &egui::Context,
    state: &mut AppState,
    content: impl FnOnce(&mut egui::Ui, &mut AppState),
) {
    egui::TopBottomPanel::top("header")
        .exact_height(theme::HEADER_HEIGHT)
        .show(ctx, |ui| {
            header(ui, state);
        });

    egui::TopBottomPanel::bottom("status_bar")
        .exact_height(theme::STATUS_BAR_HEIGHT)
        .show(ctx, |ui| {
            panels::status_bar::render(ui, &state.status_log);
        });

    egui::CentralPanel::default().show(ctx, |ui| {
        content(ui, state);
    });
}

/// Header bar: brand metadata on the left, introduction shortcut on the right.
fn header(ui: &mut egui::Ui, state: &mut AppState) {
    ui.horizontal_centered(|ui| {
        ui.label(
            egui::RichText::new(&state.metadata.title)
                .size(18.0)
                .strong()
                .color(theme::BRAND_PRIMARY),
        );
        ui.label(
            egui::RichText::new(&state.metadata.description)
                .size(13.0)
                .weak(),
        );

        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
            // Remounting constructs a fresh dialog with its own one-shot
            // open guard; the dialog itself never re-opens.
            let already_mounted = state.welcome.as_ref().is_some_and(|w| w.is_open());
            ui.add_enabled_ui(!already_mounted, |ui| {
                if ui
                    .button("\u{2139} Introducción")
                    .on_hover_text("Volver a ver la introducción")
                    .clicked()
                {
                    state.mount_welcome();
                }
            });
        });
    });
}
