//! Value records the solvers operate on.
//!
//! All quantities are optional: `None` means "not yet known" or "not
//! applicable in the current mode". Angles are degrees, lengths millimeters;
//! nothing here is persisted across runs.

use serde::{Deserialize, Serialize};

use crate::modes::{FieldId, Projection};

/// The optical triplet as known at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct OpticalState {
    /// Focal length in mm.
    pub f: Option<f64>,
    /// Full field of view in degrees.
    pub fov: Option<f64>,
    /// Full image (sensor) size in mm.
    pub image: Option<f64>,
    pub projection: Projection,
}

/// Entrance pupil diameter and f-number as known at one instant.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ApertureState {
    /// Entrance pupil diameter in mm.
    pub pupil: Option<f64>,
    /// F-number, `f / pupil`.
    pub f_number: Option<f64>,
}

/// The five raw text fields exactly as typed.
///
/// While a field is in the derived role its text is owned by the recompute
/// pass; parsing ignores it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawInputs {
    pub f: String,
    pub fov: String,
    pub image: String,
    pub pupil: String,
    pub f_number: String,
}

impl RawInputs {
    pub fn get(&self, field: FieldId) -> &str {
        match field {
            FieldId::Focal => &self.f,
            FieldId::Fov => &self.fov,
            FieldId::Image => &self.image,
            FieldId::Pupil => &self.pupil,
            FieldId::FNumber => &self.f_number,
        }
    }

    pub fn get_mut(&mut self, field: FieldId) -> &mut String {
        match field {
            FieldId::Focal => &mut self.f,
            FieldId::Fov => &mut self.fov,
            FieldId::Image => &mut self.image,
            FieldId::Pupil => &mut self.pupil,
            FieldId::FNumber => &mut self.f_number,
        }
    }

    /// True when every field is blank after trimming.
    pub fn is_all_blank(&self) -> bool {
        FieldId::all().iter().all(|id| self.get(*id).trim().is_empty())
    }
}
