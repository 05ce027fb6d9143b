//! Tests for the stateful calculator wrapper.

use odlens_core::{Calculator, format_sig};
use odlens_model::{ApertureMode, FieldId, Projection, SolveMode};

#[test]
fn test_edits_recompute_the_derived_field() {
    let mut calc = Calculator::new();
    calc.edit(FieldId::Fov, "46.8").expect("valid edit");
    // One input alone is not enough.
    assert_eq!(calc.field_text(FieldId::Focal), "");

    calc.edit(FieldId::Image, "36").expect("valid edit");
    let expected = 18.0 / 23.4_f64.to_radians().tan();
    assert_eq!(calc.field_text(FieldId::Focal), format_sig(expected, 7));
}

#[test]
fn test_malformed_edit_retains_the_previous_readout() {
    let mut calc = Calculator::new();
    calc.edit(FieldId::Fov, "46.8").expect("valid edit");
    calc.edit(FieldId::Image, "36").expect("valid edit");
    let before = calc.readout().clone();
    let focal_before = calc.field_text(FieldId::Focal).to_string();

    let error = calc.edit(FieldId::Image, "abc").expect_err("malformed edit");
    assert_eq!(error.field(), FieldId::Image);
    // The bad text stays visible, everything derived stays put.
    assert_eq!(calc.field_text(FieldId::Image), "abc");
    assert_eq!(calc.field_text(FieldId::Focal), focal_before);
    assert_eq!(calc.readout(), &before);

    // Fixing the field brings the pass back to life.
    calc.edit(FieldId::Image, "36").expect("valid edit");
    assert_eq!(calc.field_text(FieldId::Focal), focal_before);
}

#[test]
fn test_mode_switch_round_trips_within_display_precision() {
    let mut calc = Calculator::new();
    calc.edit(FieldId::Fov, "46.8").expect("valid edit");
    calc.edit(FieldId::Image, "36").expect("valid edit");

    // The rendered focal length becomes a source input; the recovered field
    // of view must match the original within 7 significant digits.
    calc.set_solve_mode(SolveMode::FieldOfView)
        .expect("modes switch cleanly");
    let recovered: f64 = calc
        .field_text(FieldId::Fov)
        .parse()
        .expect("rendered field of view parses");
    assert!((recovered - 46.8).abs() < 1e-4, "got {recovered}");
}

#[test]
fn test_projection_switch_recomputes() {
    let mut calc = Calculator::with_modes(
        Projection::Rectilinear,
        SolveMode::ImageSize,
        ApertureMode::Pupil,
    );
    calc.edit(FieldId::Focal, "10").expect("valid edit");
    calc.edit(FieldId::Fov, "80").expect("valid edit");
    let rectilinear = calc.field_text(FieldId::Image).to_string();

    calc.set_projection(Projection::Equidistant)
        .expect("modes switch cleanly");
    let expected = 20.0 * 40.0_f64.to_radians();
    assert_eq!(calc.field_text(FieldId::Image), format_sig(expected, 7));
    assert_ne!(calc.field_text(FieldId::Image), rectilinear);
}

#[test]
fn test_aperture_follows_the_solved_focal_length() {
    let mut calc = Calculator::new();
    calc.edit(FieldId::Fov, "46.8").expect("valid edit");
    calc.edit(FieldId::Image, "36").expect("valid edit");
    calc.edit(FieldId::FNumber, "2.8").expect("valid edit");

    let f = 18.0 / 23.4_f64.to_radians().tan();
    assert_eq!(calc.field_text(FieldId::Pupil), format_sig(f / 2.8, 7));
}

#[test]
fn test_save_writes_the_buffer_once_inputs_exist() {
    let mut calc = Calculator::new();
    assert!(!calc.save());
    assert!(calc.summary().is_none());

    calc.edit(FieldId::Fov, "46.8").expect("valid edit");
    calc.edit(FieldId::Image, "36").expect("valid edit");
    assert!(calc.save());
    let summary = calc.summary().expect("summary rendered").to_string();
    assert!(summary.contains("FOV = 46.8°"));
    assert!(summary.contains("Image = 36 mm"));
    // The derived focal length is part of the field contents, so it exports.
    assert!(summary.starts_with("F = "));
}

#[test]
fn test_save_on_blank_fields_keeps_the_previous_buffer() {
    let mut calc = Calculator::new();
    calc.edit(FieldId::Fov, "46.8").expect("valid edit");
    calc.edit(FieldId::Image, "36").expect("valid edit");
    assert!(calc.save());
    let kept = calc.summary().expect("summary rendered").to_string();

    calc.edit(FieldId::Fov, "").expect("valid edit");
    calc.edit(FieldId::Image, "").expect("valid edit");
    assert!(calc.raw().is_all_blank());
    assert!(!calc.save());
    assert_eq!(calc.summary(), Some(kept.as_str()));
}
