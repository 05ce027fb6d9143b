//! Aperture solver.
//!
//! Derives the entrance pupil diameter from the f-number or the reverse,
//! given a focal length, and reports the relative aperture `pupil / f` and
//! the pupil area `π·(pupil/2)²`.

use std::f64::consts::PI;

use odlens_model::{ApertureMode, ApertureState};

/// Solved aperture pair plus the mode-independent derived displays.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ApertureSolution {
    /// Entrance pupil diameter in mm.
    pub pupil: Option<f64>,
    /// F-number, `f / pupil`.
    pub f_number: Option<f64>,
    /// `pupil / f`, whenever focal length and pupil are known and the pupil
    /// is nonzero.
    pub relative_aperture: Option<f64>,
    /// Entrance pupil area in mm², under the same conditions.
    pub pupil_area: Option<f64>,
}

/// Derive the aperture field named by `mode` from the other one and `f`.
///
/// Without a focal length neither quantity can be derived. Zero divisors
/// (`f_number = 0` for the pupil, `pupil = 0` for the f-number) leave the
/// derived field `None`.
pub fn solve_aperture(mode: ApertureMode, f: Option<f64>, state: &ApertureState) -> ApertureSolution {
    let ApertureState { pupil, f_number } = *state;
    let (pupil, f_number) = match (mode, f) {
        (ApertureMode::Pupil, Some(f)) => {
            (f_number.filter(|n| *n != 0.0).map(|n| f / n), f_number)
        }
        (ApertureMode::FNumber, Some(f)) => {
            (pupil, pupil.filter(|d| *d != 0.0).map(|d| f / d))
        }
        (ApertureMode::Pupil, None) => (None, f_number),
        (ApertureMode::FNumber, None) => (pupil, None),
    };
    let (relative_aperture, pupil_area) = match (f, pupil) {
        (Some(f), Some(d)) if d != 0.0 => (Some(d / f), Some(PI * (d / 2.0).powi(2))),
        _ => (None, None),
    };
    ApertureSolution {
        pupil,
        f_number,
        relative_aperture,
        pupil_area,
    }
}
