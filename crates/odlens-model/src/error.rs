use thiserror::Error;

use crate::modes::FieldId;

/// The single recoverable error of the calculator: malformed numeric input.
///
/// Raised at the parsing boundary; callers retain the previously displayed
/// state when they receive it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("{field} is not a number: {value:?}")]
    InvalidNumber { field: FieldId, value: String },
}

impl ParseError {
    /// The input field the error refers to.
    pub fn field(&self) -> FieldId {
        match self {
            Self::InvalidNumber { field, .. } => *field,
        }
    }
}

pub type Result<T> = std::result::Result<T, ParseError>;
