// Inti App - ui/panels/welcome.rs
//
// Getting-started dialog: shown once after mount on a first run, or when
// the user asks for the introduction again.
// Rendered as a centred, non-resizable, non-collapsible modal window.

use crate::app::state::AppState;
use crate::ui::theme;
use crate::ui::widgets::BrandButton;
use crate::util::constants;

/// Render the getting-started dialog (if one is mounted and open).
///
/// `logo` is the pre-loaded brand texture; `None` falls back to text
/// branding so a missing or corrupt asset never blocks onboarding.
pub fn render(ctx: &egui::Context, state: &mut AppState, logo: Option<&egui::TextureHandle>) {
    // Split borrows: the dialog and the status log are disjoint fields.
    let AppState {
        welcome,
        status_log,
        ..
    } = state;

    let Some(dialog) = welcome.as_mut() else {
        return;
    };
    if !dialog.is_open() {
        return;
    }

    // Native dismissal gesture: Escape closes without reporting.
    if ctx.input(|i| i.key_pressed(egui::Key::Escape)) {
        dialog.dismiss();
        return;
    }

    let mut open = true;
    egui::Window::new("Introducción")
        .open(&mut open)
        .collapsible(false)
        .resizable(false)
        .min_width(theme::WELCOME_MIN_WIDTH)
        .anchor(egui::Align2::CENTER_CENTER, [0.0, 0.0])
        .show(ctx, |ui| {
            ui.add_space(8.0);

            ui.horizontal(|ui| {
                // Left column: the fixed copy and the external-site action.
                ui.vertical(|ui| {
                    ui.set_max_width(theme::WELCOME_MIN_WIDTH - theme::LOGO_MAX_WIDTH);

                    ui.label(
                        egui::RichText::new(constants::WELCOME_TITLE)
                            .size(26.0)
                            .strong(),
                    );
                    ui.add_space(4.0);
                    ui.label(egui::RichText::new(constants::WELCOME_SUBTITLE).size(16.0));

                    ui.add_space(12.0);
                    ui.label(constants::WELCOME_BODY);
                    ui.add_space(12.0);

                    if BrandButton::new(constants::WEBSITE_LABEL, "\u{1f310}")
                        .show(ui)
                        .clicked()
                    {
                        // Fire-and-forget: opens in a new browsing context,
                        // no status message.
                        ctx.open_url(egui::OpenUrl::new_tab(dialog.website_url()));
                    }
                });

                // Right column: brand logo (or nothing if decoding failed).
                if let Some(texture) = logo {
                    ui.add(egui::Image::new(texture).max_width(theme::LOGO_MAX_WIDTH));
                }
            });

            ui.add_space(16.0);
            ui.separator();
            ui.add_space(6.0);

            // Acknowledgment action, right-aligned like a modal footer.
            ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                if BrandButton::new(constants::WELCOME_ACK_LABEL, "\u{2764}")
                    .selected(theme::BRAND_PRIMARY)
                    .show(ui)
                    .clicked()
                {
                    dialog.acknowledge(status_log);
                }
            });

            ui.add_space(4.0);
        });

    // Title-bar close button: native dismissal, no report.
    if !open {
        dialog.dismiss();
    }
}
