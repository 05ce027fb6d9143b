//! Main application struct and eframe::App implementation.

use eframe::egui;

use odlens_gui::settings::load_settings;
use odlens_gui::state::AppState;
use odlens_gui::views::CalculatorView;

/// Main application struct.
pub struct OdLensApp {
    state: AppState,
}

impl OdLensApp {
    /// Create a new application instance.
    pub fn new(cc: &eframe::CreationContext<'_>) -> Self {
        // Initialize Phosphor icons font
        let mut fonts = egui::FontDefinitions::default();
        egui_phosphor::add_to_fonts(&mut fonts, egui_phosphor::Variant::Regular);
        cc.egui_ctx.set_fonts(fonts);

        let settings = load_settings();
        tracing::info!(dark_mode = settings.general.dark_mode, "loaded settings");

        Self {
            state: AppState::new(settings),
        }
    }
}

impl eframe::App for OdLensApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let dark_mode = self.state.settings.general.dark_mode;
        ctx.set_visuals(if dark_mode {
            egui::Visuals::dark()
        } else {
            egui::Visuals::light()
        });

        egui::TopBottomPanel::top("toolbar").show(ctx, |ui| {
            ui.horizontal(|ui| {
                ui.heading("OD-Lens");
                ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| {
                    let icon = if dark_mode {
                        egui_phosphor::regular::SUN
                    } else {
                        egui_phosphor::regular::MOON
                    };
                    if ui.button(icon).clicked() {
                        self.state.toggle_dark_mode();
                    }
                });
            });
        });

        egui::CentralPanel::default().show(ctx, |ui| {
            CalculatorView::show(ui, &mut self.state);
        });
    }
}
