use crate::error::{CitizenIdError, FormatViolation};
use crate::stats;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const CITIZEN_ID_LENGTH: usize = 12;

// The 5th digit separates individuals (0-3) from organizations (4-9).
const TYPE_DIGIT_INDEX: usize = 4;

#[derive(
    Serialize,
    Deserialize,
    Clone,
    Copy,
    Debug,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    strum::Display,
    strum::AsRefStr,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum CitizenType {
    /// An individual person (IIN)
    Physical,
    /// An organization or entrepreneur (BIN)
    Juridical,
}

/// A 12 digit number used in Kazakhstan to identify both individuals and organizations.
///
/// Construction validates the shape of the number and classifies it once; the value is
/// never mutated afterwards. Two ids are equal when their digits are equal.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[serde(try_from = "String", into = "String")]
pub struct CitizenId {
    value: String,
    citizen_type: CitizenType,
}

impl CitizenId {
    /// Parses a candidate string. Leading and trailing whitespace is ignored, the remainder
    /// must be exactly 12 ASCII digits.
    pub fn new(value: &str) -> Result<Self, CitizenIdError> {
        match check_format(value) {
            Ok(trimmed) => {
                let citizen_type = classify(trimmed);
                stats::record_parsed(citizen_type);
                Ok(Self {
                    value: trimmed.to_owned(),
                    citizen_type,
                })
            }
            Err(violation) => {
                stats::record_rejected(&violation);
                Err(violation.into())
            }
        }
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn citizen_type(&self) -> CitizenType {
        self.citizen_type
    }

    pub fn is_physical(&self) -> bool {
        self.citizen_type == CitizenType::Physical
    }

    pub fn is_juridical(&self) -> bool {
        self.citizen_type == CitizenType::Juridical
    }

    /// Numeric value of every digit, in order.
    pub fn digits(&self) -> impl Iterator<Item = u32> + '_ {
        self.value.bytes().map(|b| u32::from(b - b'0'))
    }

    pub(crate) fn char_at(&self, index: usize) -> char {
        char::from(self.value.as_bytes()[index])
    }

    pub(crate) fn slice(&self, start: usize, end: usize) -> &str {
        &self.value[start..end]
    }
}

fn check_format(value: &str) -> Result<&str, FormatViolation> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FormatViolation::Empty);
    }
    // Length is counted in characters so that multi-byte input reports its visible length
    let length = trimmed.chars().count();
    if length != CITIZEN_ID_LENGTH {
        return Err(FormatViolation::WrongLength(length));
    }
    if !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(FormatViolation::NonDigit);
    }
    Ok(trimmed)
}

fn classify(digits: &str) -> CitizenType {
    if digits.as_bytes()[TYPE_DIGIT_INDEX] <= b'3' {
        CitizenType::Physical
    } else {
        CitizenType::Juridical
    }
}

impl FromStr for CitizenId {
    type Err = CitizenIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<&str> for CitizenId {
    type Error = CitizenIdError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

impl TryFrom<String> for CitizenId {
    type Error = CitizenIdError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl TryFrom<Option<&str>> for CitizenId {
    type Error = CitizenIdError;

    fn try_from(value: Option<&str>) -> Result<Self, Self::Error> {
        match value {
            Some(value) => Self::new(value),
            None => {
                let violation = FormatViolation::Empty;
                stats::record_rejected(&violation);
                Err(violation.into())
            }
        }
    }
}

impl From<CitizenId> for String {
    fn from(value: CitizenId) -> Self {
        value.value
    }
}

impl AsRef<str> for CitizenId {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl fmt::Display for CitizenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.value)
    }
}
