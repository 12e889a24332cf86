//! Check digit validation of citizen ids.
//!
//! Both kinds of subject use the official weighted modulo 11 scheme
//! (http://adilet.zan.kz/rus/docs/P1300000853): the first 11 digits are weighted with
//! 1..11, and if that leaves a remainder of 10 they are weighted again with 3..11,1,2.
//! The remainder must equal the 12th digit.

use crate::error::CitizenIdError;
use crate::stats;
use crate::{CitizenId, CitizenType};

const FIRST_ORDER_WEIGHTS: [u32; 11] = [1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11];
const SECOND_ORDER_WEIGHTS: [u32; 11] = [3, 4, 5, 6, 7, 8, 9, 10, 11, 1, 2];

pub trait IdValidation {
    /// Returns true if the computed check digit equals the last digit of the citizen id
    fn is_valid(&self) -> bool;

    fn citizen_id(&self) -> &CitizenId;
}

fn weighted_remainder(digits: &[u32], weights: &[u32; 11]) -> u32 {
    let sum: u32 = digits
        .iter()
        .zip(weights.iter())
        .map(|(d, w)| d * w)
        .sum();
    sum % 11
}

/// Computes the check digit of a citizen id. `None` means both passes left a remainder
/// of 10, which can not be written as a single digit.
pub fn check_digit(citizen_id: &CitizenId) -> Option<u32> {
    let digits: Vec<u32> = citizen_id.digits().collect();

    let mut remainder = weighted_remainder(&digits, &FIRST_ORDER_WEIGHTS);
    if remainder == 10 {
        remainder = weighted_remainder(&digits, &SECOND_ORDER_WEIGHTS);
    }
    if remainder == 10 {
        None
    } else {
        Some(remainder)
    }
}

fn has_valid_check_digit(citizen_id: &CitizenId) -> bool {
    let actual = citizen_id.digits().last();
    let valid = check_digit(citizen_id).is_some_and(|expected| Some(expected) == actual);
    stats::record_checksum(citizen_id.citizen_type(), valid);
    valid
}

/// Validates a citizen id of either kind with the matching validator.
pub fn validate(citizen_id: &CitizenId) -> bool {
    match citizen_id.citizen_type() {
        CitizenType::Physical => PhysicalIdValidation { citizen_id }.is_valid(),
        CitizenType::Juridical => JuridicalIdValidation { citizen_id }.is_valid(),
    }
}

fn require_type(citizen_id: &CitizenId, expected: CitizenType) -> Result<(), CitizenIdError> {
    let actual = citizen_id.citizen_type();
    if actual != expected {
        return Err(CitizenIdError::WrongSubjectKind { expected, actual });
    }
    Ok(())
}

/// Checks validity of the citizen id of a physical subject (IIN).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct PhysicalIdValidation<'a> {
    citizen_id: &'a CitizenId,
}

impl<'a> PhysicalIdValidation<'a> {
    pub fn new(citizen_id: &'a CitizenId) -> Result<Self, CitizenIdError> {
        require_type(citizen_id, CitizenType::Physical)?;
        Ok(Self { citizen_id })
    }
}

impl<'a> TryFrom<Option<&'a CitizenId>> for PhysicalIdValidation<'a> {
    type Error = CitizenIdError;

    fn try_from(citizen_id: Option<&'a CitizenId>) -> Result<Self, Self::Error> {
        Self::new(citizen_id.ok_or(CitizenIdError::NullIdentifier)?)
    }
}

impl IdValidation for PhysicalIdValidation<'_> {
    fn is_valid(&self) -> bool {
        has_valid_check_digit(self.citizen_id)
    }

    fn citizen_id(&self) -> &CitizenId {
        self.citizen_id
    }
}

/// Checks validity of the citizen id of a juridical subject (BIN).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct JuridicalIdValidation<'a> {
    citizen_id: &'a CitizenId,
}

impl<'a> JuridicalIdValidation<'a> {
    pub fn new(citizen_id: &'a CitizenId) -> Result<Self, CitizenIdError> {
        require_type(citizen_id, CitizenType::Juridical)?;
        Ok(Self { citizen_id })
    }
}

impl<'a> TryFrom<Option<&'a CitizenId>> for JuridicalIdValidation<'a> {
    type Error = CitizenIdError;

    fn try_from(citizen_id: Option<&'a CitizenId>) -> Result<Self, Self::Error> {
        Self::new(citizen_id.ok_or(CitizenIdError::NullIdentifier)?)
    }
}

impl IdValidation for JuridicalIdValidation<'_> {
    fn is_valid(&self) -> bool {
        has_valid_check_digit(self.citizen_id)
    }

    fn citizen_id(&self) -> &CitizenId {
        self.citizen_id
    }
}
