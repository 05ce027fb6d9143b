//! Field-of-view solver.
//!
//! Relates the optical triplet through the half-angle identities
//! `y = f * tan(h)` (rectilinear) and `y = f * h` (equidistant), where `h`
//! is half the field of view in radians and `y` half the image size in mm.
//! Exactly one field is derived per call; the other two are inputs. Inputs
//! are not validated beyond the division guards: negative or out-of-range
//! values flow through the identities as-is.

use odlens_model::{OpticalState, Projection, SolveMode};

/// Solved optical triplet plus the mode-independent derived displays.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct OpticalSolution {
    /// Focal length in mm.
    pub f: Option<f64>,
    /// Full field of view in degrees.
    pub fov: Option<f64>,
    /// Full image size in mm.
    pub image: Option<f64>,
    /// Half field angle in degrees, whenever the field of view is known.
    pub half_angle_deg: Option<f64>,
    /// Half image size in mm, whenever the image size is known.
    pub half_image: Option<f64>,
}

/// Derive the field named by `mode` from the other two.
///
/// A missing input leaves the derived field `None` (unknown, never zero).
/// The `FieldOfView` path refuses `f = 0` rather than divide.
pub fn solve_fov_triplet(mode: SolveMode, state: &OpticalState) -> OpticalSolution {
    let OpticalState {
        f,
        fov,
        image,
        projection,
    } = *state;
    let (f, fov, image) = match mode {
        SolveMode::Focal => (solve_focal(projection, fov, image), fov, image),
        SolveMode::FieldOfView => (f, solve_field_of_view(projection, f, image), image),
        SolveMode::ImageSize => (f, fov, solve_image_size(projection, f, fov)),
    };
    OpticalSolution {
        f,
        fov,
        image,
        half_angle_deg: fov.map(|v| v / 2.0),
        half_image: image.map(|v| v / 2.0),
    }
}

fn solve_focal(projection: Projection, fov: Option<f64>, image: Option<f64>) -> Option<f64> {
    let h = (fov? / 2.0).to_radians();
    let y = image? / 2.0;
    Some(match projection {
        Projection::Rectilinear => y / h.tan(),
        Projection::Equidistant => y / h,
    })
}

fn solve_field_of_view(projection: Projection, f: Option<f64>, image: Option<f64>) -> Option<f64> {
    let f = f.filter(|v| *v != 0.0)?;
    let y = image? / 2.0;
    let h = match projection {
        Projection::Rectilinear => (y / f).atan(),
        Projection::Equidistant => y / f,
    };
    Some(2.0 * h.to_degrees())
}

fn solve_image_size(projection: Projection, f: Option<f64>, fov: Option<f64>) -> Option<f64> {
    let f = f?;
    let h = (fov? / 2.0).to_radians();
    Some(match projection {
        Projection::Rectilinear => 2.0 * f * h.tan(),
        Projection::Equidistant => 2.0 * f * h,
    })
}
