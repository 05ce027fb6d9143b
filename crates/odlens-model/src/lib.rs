pub mod error;
pub mod modes;
pub mod state;

pub use error::{ParseError, Result};
pub use modes::{ApertureMode, FieldId, Projection, SolveMode};
pub use state::{ApertureState, OpticalState, RawInputs};
