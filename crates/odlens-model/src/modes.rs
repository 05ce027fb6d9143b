//! Mode and projection selectors.
//!
//! Each selector group has exactly one *derived* field at a time; the other
//! fields of the group are free-form numeric inputs. Representing the choice
//! as an enum rules out invalid combinations at compile time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Lens projection model relating image height to the half field angle.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Projection {
    /// Perspective model: `y = f * tan(h)`.
    #[default]
    Rectilinear,
    /// Equi-angular model: `y = f * h`.
    Equidistant,
}

impl Projection {
    /// All projections in selector order.
    pub const fn all() -> &'static [Projection] {
        &[Self::Rectilinear, Self::Equidistant]
    }

    /// Display name for selectors.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Rectilinear => "rectilinear",
            Self::Equidistant => "equidistant",
        }
    }
}

/// Which field of the optical triplet is currently derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum SolveMode {
    #[default]
    Focal,
    FieldOfView,
    ImageSize,
}

impl SolveMode {
    /// All modes in selector order.
    pub const fn all() -> &'static [SolveMode] {
        &[Self::Focal, Self::FieldOfView, Self::ImageSize]
    }

    /// The input field this mode takes ownership of.
    pub const fn derived_field(&self) -> FieldId {
        match self {
            Self::Focal => FieldId::Focal,
            Self::FieldOfView => FieldId::Fov,
            Self::ImageSize => FieldId::Image,
        }
    }
}

/// Which aperture field is currently derived.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum ApertureMode {
    #[default]
    Pupil,
    FNumber,
}

impl ApertureMode {
    /// All modes in selector order.
    pub const fn all() -> &'static [ApertureMode] {
        &[Self::Pupil, Self::FNumber]
    }

    /// The input field this mode takes ownership of.
    pub const fn derived_field(&self) -> FieldId {
        match self {
            Self::Pupil => FieldId::Pupil,
            Self::FNumber => FieldId::FNumber,
        }
    }
}

/// Identifier for one of the five raw input fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FieldId {
    Focal,
    Fov,
    Image,
    Pupil,
    FNumber,
}

impl FieldId {
    /// All fields in the fixed summary-export order.
    pub const fn all() -> &'static [FieldId] {
        &[
            Self::Focal,
            Self::Fov,
            Self::Image,
            Self::Pupil,
            Self::FNumber,
        ]
    }

    /// Display name for selectors, tables and error messages.
    pub const fn display_name(&self) -> &'static str {
        match self {
            Self::Focal => "focal length",
            Self::Fov => "field of view",
            Self::Image => "image size",
            Self::Pupil => "pupil diameter",
            Self::FNumber => "f-number",
        }
    }

    /// Unit suffix for display; empty for the dimensionless f-number.
    pub const fn unit(&self) -> &'static str {
        match self {
            Self::Focal | Self::Image | Self::Pupil => "mm",
            Self::Fov => "°",
            Self::FNumber => "",
        }
    }
}

impl fmt::Display for FieldId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}
