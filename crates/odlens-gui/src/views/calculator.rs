//! Calculator screen: the five input rows, selectors, derived readouts and
//! the summary export area.

use egui::{ComboBox, RichText, TextEdit, Ui};

use odlens_model::{ApertureMode, FieldId, Projection, SolveMode};

use crate::state::AppState;
use crate::theme::{colors, spacing};

const FIELD_WIDTH: f32 = 120.0;

/// The single screen of the application.
pub struct CalculatorView;

impl CalculatorView {
    pub fn show(ui: &mut Ui, state: &mut AppState) {
        Self::projection_row(ui, state);
        ui.add_space(spacing::SM);
        Self::optical_rows(ui, state);
        ui.add_space(spacing::XS);
        Self::optical_readouts(ui, state);

        ui.add_space(spacing::SM);
        ui.separator();
        ui.add_space(spacing::XS);

        ui.label(RichText::new("Aperture parameter").underline());
        ui.add_space(spacing::XS);
        Self::aperture_rows(ui, state);
        ui.add_space(spacing::XS);
        Self::aperture_readouts(ui, state);

        ui.add_space(spacing::MD);
        Self::summary_section(ui, state);
    }

    fn projection_row(ui: &mut Ui, state: &mut AppState) {
        ui.horizontal(|ui| {
            ui.label("Projection function:");
            let current = state.calc.projection();
            let mut selected = current;
            ComboBox::from_id_salt("projection")
                .selected_text(selected.display_name())
                .show_ui(ui, |ui| {
                    for projection in Projection::all() {
                        ui.selectable_value(&mut selected, *projection, projection.display_name());
                    }
                });
            if selected != current {
                state.set_projection(selected);
            }
        });
    }

    fn optical_rows(ui: &mut Ui, state: &mut AppState) {
        let rows = [
            (SolveMode::Focal, FieldId::Focal, "Focal length:", "mm"),
            (SolveMode::FieldOfView, FieldId::Fov, "Field of view:", "°"),
            (SolveMode::ImageSize, FieldId::Image, "Image size:", "mm"),
        ];
        for (mode, field, label, unit) in rows {
            ui.horizontal(|ui| {
                let mut selected = state.calc.solve_mode();
                if ui
                    .radio_value(&mut selected, mode, RichText::new(label).strong())
                    .changed()
                {
                    state.set_solve_mode(selected);
                }
                let derived = state.calc.solve_mode() == mode;
                Self::field_edit(ui, state, field, derived);
                ui.label(unit);
            });
        }
    }

    fn optical_readouts(ui: &mut Ui, state: &AppState) {
        let readout = state.calc.readout();
        ui.horizontal(|ui| {
            ui.label("Half field angle:");
            ui.label(readout.half_angle_text());
        });
        ui.horizontal(|ui| {
            ui.label("Half image size:");
            ui.label(readout.half_image_text());
        });
    }

    fn aperture_rows(ui: &mut Ui, state: &mut AppState) {
        let rows = [
            (ApertureMode::Pupil, FieldId::Pupil, "Entrance pupil:", "mm"),
            (ApertureMode::FNumber, FieldId::FNumber, "F-number (f/#):", ""),
        ];
        for (mode, field, label, unit) in rows {
            ui.horizontal(|ui| {
                let mut selected = state.calc.aperture_mode();
                if ui
                    .radio_value(&mut selected, mode, RichText::new(label).strong())
                    .changed()
                {
                    state.set_aperture_mode(selected);
                }
                let derived = state.calc.aperture_mode() == mode;
                Self::field_edit(ui, state, field, derived);
                if !unit.is_empty() {
                    ui.label(unit);
                }
            });
        }
    }

    fn aperture_readouts(ui: &mut Ui, state: &AppState) {
        let readout = state.calc.readout();
        ui.horizontal(|ui| {
            ui.label("Relative aperture:");
            ui.label(readout.relative_aperture_text());
        });
        ui.horizontal(|ui| {
            ui.label("Pupil area:");
            ui.label(readout.pupil_area_text());
        });
    }

    fn field_edit(ui: &mut Ui, state: &mut AppState, field: FieldId, derived: bool) {
        let mut text = state.calc.field_text(field).to_string();
        let mut edit = TextEdit::singleline(&mut text).desired_width(FIELD_WIDTH);
        if derived {
            let fill = if state.settings.general.dark_mode {
                colors::DERIVED_DARK
            } else {
                colors::DERIVED_LIGHT
            };
            edit = edit.background_color(fill).interactive(false);
        }
        let response = ui.add(edit);
        if !derived && response.changed() {
            state.edit_field(field, &text);
        }
    }

    fn summary_section(ui: &mut Ui, state: &mut AppState) {
        if ui
            .button(format!(
                "{} Save calculations",
                egui_phosphor::regular::FLOPPY_DISK
            ))
            .clicked()
        {
            state.calc.save();
        }
        ui.add_space(spacing::XS);
        let mut summary = state.calc.summary().unwrap_or_default().to_string();
        ui.add(
            TextEdit::multiline(&mut summary)
                .desired_rows(5)
                .desired_width(f32::INFINITY)
                .interactive(false),
        );
    }
}
