//! The single pure entry point the presentation layers call.
//!
//! One pass parses the raw fields, runs the field-of-view solver, feeds the
//! resulting focal length into the aperture solver, and renders the display
//! texts. The pass is O(1) and side-effect free; hosting layers invoke it
//! after every mutation and keep the previous [`Readout`] when it fails.

use odlens_model::{ApertureMode, ParseError, Projection, RawInputs, SolveMode};

use crate::aperture::{ApertureSolution, solve_aperture};
use crate::format::format_sig;
use crate::fov::{OpticalSolution, solve_fov_triplet};
use crate::parse::parse_inputs;

/// Display precision for linear and angular quantities.
pub const DISPLAY_DIGITS: usize = 7;
/// Display precision for the relative-aperture ratio.
pub const RATIO_DIGITS: usize = 5;
/// Placeholder for a quantity that cannot be derived yet.
pub const UNKNOWN: &str = "-";

/// Everything one recompute pass produces.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Readout {
    pub optical: OpticalSolution,
    pub aperture: ApertureSolution,
    /// The five field texts after the pass: source fields echo the raw
    /// input, derived fields carry the freshly rendered value (empty while
    /// underived).
    pub fields: RawInputs,
}

impl Readout {
    /// Half field angle display, e.g. `23.4°`.
    pub fn half_angle_text(&self) -> String {
        match self.optical.half_angle_deg {
            Some(v) => format!("{}°", format_sig(v, DISPLAY_DIGITS)),
            None => UNKNOWN.to_string(),
        }
    }

    /// Half image size display, e.g. `18 mm`.
    pub fn half_image_text(&self) -> String {
        match self.optical.half_image {
            Some(v) => format!("{} mm", format_sig(v, DISPLAY_DIGITS)),
            None => UNKNOWN.to_string(),
        }
    }

    /// Relative aperture display, e.g. `1:2.8 = 0.35714`.
    pub fn relative_aperture_text(&self) -> String {
        match (self.optical.f, self.aperture.pupil) {
            (Some(f), Some(d)) if d != 0.0 => format!(
                "1:{} = {}",
                format_sig(f / d, DISPLAY_DIGITS),
                format_sig(d / f, RATIO_DIGITS)
            ),
            _ => UNKNOWN.to_string(),
        }
    }

    /// Pupil area display, e.g. `250.4466 mm²`.
    pub fn pupil_area_text(&self) -> String {
        match self.aperture.pupil_area {
            Some(v) => format!("{} mm²", format_sig(v, DISPLAY_DIGITS)),
            None => UNKNOWN.to_string(),
        }
    }
}

/// Run one full recompute pass over the raw fields.
///
/// # Errors
///
/// Returns the [`ParseError`] of the first malformed source field; no
/// partial results are produced in that case.
pub fn recompute(
    raw: &RawInputs,
    projection: Projection,
    solve_mode: SolveMode,
    aperture_mode: ApertureMode,
) -> Result<Readout, ParseError> {
    let parsed = parse_inputs(raw, projection, solve_mode, aperture_mode)?;
    let optical = solve_fov_triplet(solve_mode, &parsed.optical);
    let aperture = solve_aperture(aperture_mode, optical.f, &parsed.aperture);

    let mut fields = raw.clone();
    let solved = match solve_mode {
        SolveMode::Focal => optical.f,
        SolveMode::FieldOfView => optical.fov,
        SolveMode::ImageSize => optical.image,
    };
    *fields.get_mut(solve_mode.derived_field()) = render_derived(solved);
    let solved = match aperture_mode {
        ApertureMode::Pupil => aperture.pupil,
        ApertureMode::FNumber => aperture.f_number,
    };
    *fields.get_mut(aperture_mode.derived_field()) = render_derived(solved);

    tracing::trace!(?solve_mode, ?aperture_mode, "recomputed optical state");
    Ok(Readout {
        optical,
        aperture,
        fields,
    })
}

fn render_derived(value: Option<f64>) -> String {
    value.map(|v| format_sig(v, DISPLAY_DIGITS)).unwrap_or_default()
}
