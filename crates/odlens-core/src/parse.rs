//! Lenient parsing of the raw text fields.
//!
//! Blank text is "not yet known", never an error. A field currently in the
//! derived role is masked out regardless of its text, since that text is
//! owned by the recompute pass. Any other non-numeric text aborts the whole
//! pass with a [`ParseError`]; the caller decides to retain the previously
//! displayed state.

use odlens_model::{
    ApertureMode, ApertureState, FieldId, OpticalState, ParseError, Projection, RawInputs,
    SolveMode,
};

/// Numeric view of the raw fields with derived-role fields masked out.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ParsedInputs {
    pub optical: OpticalState,
    pub aperture: ApertureState,
}

pub fn parse_inputs(
    raw: &RawInputs,
    projection: Projection,
    solve_mode: SolveMode,
    aperture_mode: ApertureMode,
) -> Result<ParsedInputs, ParseError> {
    let derived = solve_mode.derived_field();
    let aperture_derived = aperture_mode.derived_field();
    Ok(ParsedInputs {
        optical: OpticalState {
            f: parse_field(FieldId::Focal, &raw.f, derived == FieldId::Focal)?,
            fov: parse_field(FieldId::Fov, &raw.fov, derived == FieldId::Fov)?,
            image: parse_field(FieldId::Image, &raw.image, derived == FieldId::Image)?,
            projection,
        },
        aperture: ApertureState {
            pupil: parse_field(FieldId::Pupil, &raw.pupil, aperture_derived == FieldId::Pupil)?,
            f_number: parse_field(
                FieldId::FNumber,
                &raw.f_number,
                aperture_derived == FieldId::FNumber,
            )?,
        },
    })
}

fn parse_field(field: FieldId, text: &str, derived: bool) -> Result<Option<f64>, ParseError> {
    if derived {
        return Ok(None);
    }
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    trimmed
        .parse::<f64>()
        .map(Some)
        .map_err(|_| ParseError::InvalidNumber {
            field,
            value: trimmed.to_string(),
        })
}
