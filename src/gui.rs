// Inti App - gui.rs
//
// Top-level eframe::App implementation.
// Wires together the layout shell, the getting-started dialog, and the
// status toast overlay.

use crate::app::state::AppState;
use crate::ui;
use crate::util::error::AssetError;

/// Compile-time-embedded brand logo PNG bytes.
///
/// Using `include_bytes!` ensures the asset is baked into the binary so the
/// logo is always available regardless of the working directory at runtime.
static LOGO_PNG: &[u8] = include_bytes!("../assets/logo.png");

/// Decode embedded PNG bytes into an RGBA image.
fn decode_png(bytes: &'static [u8], asset: &'static str) -> Result<image::RgbaImage, AssetError> {
    image::load_from_memory_with_format(bytes, image::ImageFormat::Png)
        .map(image::DynamicImage::into_rgba8)
        .map_err(|source| AssetError::PngDecode { asset, source })
}

/// Decode the embedded logo and upload it as an egui texture.
fn load_logo(ctx: &egui::Context) -> Result<egui::TextureHandle, AssetError> {
    let rgba = decode_png(LOGO_PNG, "logo.png")?;
    let size = [rgba.width() as usize, rgba.height() as usize];
    let color_image = egui::ColorImage::from_rgba_unmultiplied(size, rgba.as_raw());
    Ok(ctx.load_texture("inti_logo", color_image, egui::TextureOptions::LINEAR))
}

/// The Inti App desktop application.
pub struct IntiApp {
    pub state: AppState,
    /// Brand logo texture, uploaded on the first frame.
    logo_texture: Option<egui::TextureHandle>,
    /// Set when logo decoding failed so the load is not retried every frame.
    logo_failed: bool,
}

impl IntiApp {
    /// Create a new application instance with the given state.
    pub fn new(state: AppState) -> Self {
        Self {
            state,
            logo_texture: None,
            logo_failed: false,
        }
    }
}

impl eframe::App for IntiApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Upload the logo texture on the first frame. A decode failure is
        // logged once and the dialog falls back to text branding.
        if self.logo_texture.is_none() && !self.logo_failed {
            match load_logo(ctx) {
                Ok(texture) => self.logo_texture = Some(texture),
                Err(e) => {
                    tracing::warn!(error = %e, "Failed to load brand logo; using text branding");
                    self.logo_failed = true;
                }
            }
        }

        // Mount-only effect: the dialog's one-shot guard makes this call
        // idempotent across re-renders.
        if let Some(dialog) = self.state.welcome.as_mut() {
            dialog.on_frame();
        }

        // Layout shell wrapping the home page content.
        ui::shell::render(ctx, &mut self.state, |ui, state| {
            ui::panels::home::render(ui, state);
        });

        // Getting-started dialog on top of the shell.
        ui::panels::welcome::render(ctx, &mut self.state, self.logo_texture.as_ref());

        // The first acknowledgment persists the first-run flag so the
        // dialog is not mounted again on the next launch.
        if !self.state.settings.welcome_shown
            && self.state.welcome.as_ref().is_some_and(|w| w.acknowledged())
        {
            self.state.settings.welcome_shown = true;
            self.state.save_settings();
        }

        // Toast overlay. Keep repainting while toasts are visible so they
        // expire promptly even when the user is idle.
        let toasts_visible = ui::panels::toasts::render(
            ctx,
            &self.state.status_log,
            self.state.config.toast_duration_secs,
        );
        if toasts_visible {
            ctx.request_repaint_after(std::time::Duration::from_millis(250));
        }
    }

    /// Called by eframe when the application window is about to close.
    ///
    /// Saves the settings so the next launch sees the final first-run state.
    fn on_exit(&mut self, _gl: Option<&eframe::glow::Context>) {
        self.state.save_settings();
    }
}
