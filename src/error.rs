use crate::CitizenType;
use thiserror::Error;

impl From<CitizenIdError> for i64 {
    fn from(value: CitizenIdError) -> i64 {
        match value {
            CitizenIdError::InvalidFormat(_) => -1,
            CitizenIdError::NullIdentifier => -2,
            CitizenIdError::WrongSubjectKind { .. } => -3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CitizenIdError {
    /// The candidate string is absent, empty, of the wrong length or contains non-digits.
    #[error("Invalid citizen id format: {0}")]
    InvalidFormat(FormatViolation),

    /// A validator or decoder was built without a citizen id.
    #[error("Citizen id can not be empty")]
    NullIdentifier,

    /// The citizen id belongs to the other kind of subject.
    #[error("Citizen id must belong to {expected} subject, got {actual}")]
    WrongSubjectKind {
        expected: CitizenType,
        actual: CitizenType,
    },
}

/// The format rule a rejected candidate string broke.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormatViolation {
    #[error("value can not be empty")]
    Empty,

    #[error("value must have length 12 symbols, got {0}")]
    WrongLength(usize),

    #[error("value must have 12 digital symbols")]
    NonDigit,
}

impl FormatViolation {
    pub(crate) fn reason(&self) -> &'static str {
        match self {
            FormatViolation::Empty => "empty",
            FormatViolation::WrongLength(_) => "length",
            FormatViolation::NonDigit => "non_digit",
        }
    }
}

impl From<FormatViolation> for CitizenIdError {
    fn from(err: FormatViolation) -> Self {
        CitizenIdError::InvalidFormat(err)
    }
}
