//! Round-trip properties of the two solvers.

use odlens_core::{solve_aperture, solve_fov_triplet};
use odlens_model::{ApertureMode, ApertureState, OpticalState, Projection, SolveMode};
use proptest::{prop_assert, proptest};

fn optical(projection: Projection, f: Option<f64>, fov: Option<f64>, image: Option<f64>) -> OpticalState {
    OpticalState {
        f,
        fov,
        image,
        projection,
    }
}

proptest! {
    #[test]
    fn rectilinear_fov_round_trips(f in 1.0_f64..500.0, fov in 1.0_f64..178.0) {
        let image = solve_fov_triplet(
            SolveMode::ImageSize,
            &optical(Projection::Rectilinear, Some(f), Some(fov), None),
        )
        .image
        .unwrap();
        let recovered = solve_fov_triplet(
            SolveMode::FieldOfView,
            &optical(Projection::Rectilinear, Some(f), None, Some(image)),
        )
        .fov
        .unwrap();
        prop_assert!((recovered - fov).abs() <= fov.abs() * 1e-9);
    }

    #[test]
    fn equidistant_fov_round_trips(f in 1.0_f64..500.0, fov in -720.0_f64..720.0) {
        let image = solve_fov_triplet(
            SolveMode::ImageSize,
            &optical(Projection::Equidistant, Some(f), Some(fov), None),
        )
        .image
        .unwrap();
        let recovered = solve_fov_triplet(
            SolveMode::FieldOfView,
            &optical(Projection::Equidistant, Some(f), None, Some(image)),
        )
        .fov
        .unwrap();
        prop_assert!((recovered - fov).abs() <= fov.abs() * 1e-9 + 1e-12);
    }

    #[test]
    fn equidistant_focal_round_trips(f in 0.5_f64..500.0, fov in 1.0_f64..178.0) {
        let image = solve_fov_triplet(
            SolveMode::ImageSize,
            &optical(Projection::Equidistant, Some(f), Some(fov), None),
        )
        .image
        .unwrap();
        let recovered = solve_fov_triplet(
            SolveMode::Focal,
            &optical(Projection::Equidistant, None, Some(fov), Some(image)),
        )
        .f
        .unwrap();
        prop_assert!((recovered - f).abs() <= f * 1e-9);
    }

    #[test]
    fn aperture_round_trips(f in 0.1_f64..1000.0, n in 0.1_f64..128.0) {
        let pupil = solve_aperture(
            ApertureMode::Pupil,
            Some(f),
            &ApertureState { pupil: None, f_number: Some(n) },
        )
        .pupil
        .unwrap();
        let recovered = solve_aperture(
            ApertureMode::FNumber,
            Some(f),
            &ApertureState { pupil: Some(pupil), f_number: None },
        )
        .f_number
        .unwrap();
        prop_assert!((recovered - n).abs() <= n * 1e-12);
    }
}
