//! Tests for the field-of-view solver.

use odlens_core::solve_fov_triplet;
use odlens_model::{OpticalState, Projection, SolveMode};

fn state(
    projection: Projection,
    f: Option<f64>,
    fov: Option<f64>,
    image: Option<f64>,
) -> OpticalState {
    OpticalState {
        f,
        fov,
        image,
        projection,
    }
}

fn assert_close(actual: f64, expected: f64) {
    let tolerance = expected.abs() * 1e-12 + 1e-12;
    assert!(
        (actual - expected).abs() <= tolerance,
        "expected {expected}, got {actual}"
    );
}

#[test]
fn test_rectilinear_focal_from_fov_and_image() {
    // 46.8° over a 36 mm sensor, the classic full-frame "normal" setup.
    let solution = solve_fov_triplet(
        SolveMode::Focal,
        &state(Projection::Rectilinear, None, Some(46.8), Some(36.0)),
    );
    let expected = 18.0 / 23.4_f64.to_radians().tan();
    assert_close(solution.f.expect("focal length"), expected);
    assert_close(solution.half_angle_deg.expect("half angle"), 23.4);
    assert_close(solution.half_image.expect("half image"), 18.0);
}

#[test]
fn test_equidistant_focal_from_fov_and_image() {
    let solution = solve_fov_triplet(
        SolveMode::Focal,
        &state(Projection::Equidistant, None, Some(80.0), Some(14.0)),
    );
    let expected = 7.0 / 40.0_f64.to_radians();
    assert_close(solution.f.expect("focal length"), expected);
}

#[test]
fn test_equidistant_fov_from_focal_and_image() {
    // h = 7/10 = 0.7 rad, so the full angle is 2·deg(0.7) ≈ 80.21°.
    let solution = solve_fov_triplet(
        SolveMode::FieldOfView,
        &state(Projection::Equidistant, Some(10.0), None, Some(14.0)),
    );
    let expected = 2.0 * 0.7_f64.to_degrees();
    assert_close(solution.fov.expect("field of view"), expected);
}

#[test]
fn test_rectilinear_fov_from_focal_and_image() {
    let solution = solve_fov_triplet(
        SolveMode::FieldOfView,
        &state(Projection::Rectilinear, Some(50.0), None, Some(36.0)),
    );
    let expected = 2.0 * (18.0 / 50.0_f64).atan().to_degrees();
    assert_close(solution.fov.expect("field of view"), expected);
}

#[test]
fn test_rectilinear_image_from_focal_and_fov() {
    let solution = solve_fov_triplet(
        SolveMode::ImageSize,
        &state(Projection::Rectilinear, Some(50.0), Some(46.8), None),
    );
    let expected = 100.0 * 23.4_f64.to_radians().tan();
    assert_close(solution.image.expect("image size"), expected);
}

#[test]
fn test_zero_focal_length_leaves_fov_unset() {
    for projection in [Projection::Rectilinear, Projection::Equidistant] {
        let solution = solve_fov_triplet(
            SolveMode::FieldOfView,
            &state(projection, Some(0.0), None, Some(36.0)),
        );
        assert!(solution.fov.is_none());
        assert!(solution.half_angle_deg.is_none());
    }
}

#[test]
fn test_missing_inputs_leave_derived_field_unset() {
    let solution = solve_fov_triplet(
        SolveMode::Focal,
        &state(Projection::Rectilinear, None, Some(46.8), None),
    );
    assert!(solution.f.is_none());
    // The auxiliary display still reflects the known input.
    assert_close(solution.half_angle_deg.expect("half angle"), 23.4);
    assert!(solution.half_image.is_none());

    let solution = solve_fov_triplet(
        SolveMode::ImageSize,
        &state(Projection::Rectilinear, Some(50.0), None, None),
    );
    assert!(solution.image.is_none());
    assert!(solution.half_image.is_none());
}

#[test]
fn test_negative_fov_passes_through_unvalidated() {
    let solution = solve_fov_triplet(
        SolveMode::ImageSize,
        &state(Projection::Rectilinear, Some(50.0), Some(-46.8), None),
    );
    let expected = -100.0 * 23.4_f64.to_radians().tan();
    assert_close(solution.image.expect("image size"), expected);
    assert_close(solution.half_angle_deg.expect("half angle"), -23.4);
}

#[test]
fn test_zero_fov_in_focal_mode_propagates_infinity() {
    // tan(0) divides to infinity; the solver performs no domain validation.
    let solution = solve_fov_triplet(
        SolveMode::Focal,
        &state(Projection::Rectilinear, None, Some(0.0), Some(36.0)),
    );
    assert!(solution.f.is_some_and(f64::is_infinite));
}
