//! Runtime state for the calculator window.

use odlens_core::Calculator;
use odlens_model::{ApertureMode, FieldId, Projection, SolveMode};

use crate::settings::{Settings, save_settings};

/// Top-level application state.
pub struct AppState {
    /// Calculator core: raw fields, modes, last valid readout, summary.
    pub calc: Calculator,
    /// User preferences.
    pub settings: Settings,
}

impl AppState {
    pub fn new(settings: Settings) -> Self {
        Self {
            calc: Calculator::new(),
            settings,
        }
    }

    /// Apply a field edit. A parse failure keeps the last valid readout on
    /// screen, so the error is dropped here.
    pub fn edit_field(&mut self, field: FieldId, text: &str) {
        let _ = self.calc.edit(field, text);
    }

    pub fn set_projection(&mut self, projection: Projection) {
        let _ = self.calc.set_projection(projection);
    }

    pub fn set_solve_mode(&mut self, mode: SolveMode) {
        let _ = self.calc.set_solve_mode(mode);
    }

    pub fn set_aperture_mode(&mut self, mode: ApertureMode) {
        let _ = self.calc.set_aperture_mode(mode);
    }

    /// Flip dark mode and persist the preference immediately.
    pub fn toggle_dark_mode(&mut self) {
        self.settings.general.dark_mode = !self.settings.general.dark_mode;
        if let Err(error) = save_settings(&self.settings) {
            tracing::error!("failed to save settings: {error}");
        }
    }
}
