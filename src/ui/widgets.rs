// Inti App - ui/widgets.rs
//
// Reusable branded widgets.

use egui::{Color32, Response, RichText, Ui, Widget};

/// Branded button: a label, a leading icon glyph, and an optional
/// "selected" emphasis with a fill colour token.
///
/// The activation handler is the caller's: check `.clicked()` on the
/// returned response.
pub struct BrandButton<'a> {
    label: &'a str,
    icon: &'a str,
    selected: bool,
    selected_fill: Color32,
}

impl<'a> BrandButton<'a> {
    pub fn new(label: &'a str, icon: &'a str) -> Self {
        Self {
            label,
            icon,
            selected: false,
            selected_fill: crate::ui::theme::BRAND_PRIMARY,
        }
    }

    /// Emphasise the button with the given fill colour.
    pub fn selected(mut self, fill: Color32) -> Self {
        self.selected = true;
        self.selected_fill = fill;
        self
    }

    /// Render the button and return its response.
    pub fn show(self, ui: &mut Ui) -> Response {
        ui.add(self)
    }
}

impl Widget for BrandButton<'_> {
    fn ui(self, ui: &mut Ui) -> Response {
        let text = RichText::new(format!("{}  {}", self.icon, self.label)).size(14.0);
        let mut button = egui::Button::new(if self.selected {
            text.strong().color(Color32::WHITE)
        } else {
            text
        })
        .min_size(egui::vec2(120.0, 30.0));

        if self.selected {
            button = button.fill(self.selected_fill);
        }

        ui.add(button)
    }
}
