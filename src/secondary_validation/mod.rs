mod kazakhstan_bin_checksum;
mod kazakhstan_iin_checksum;

pub use crate::secondary_validation::kazakhstan_bin_checksum::KazakhstanBinChecksum;
pub use crate::secondary_validation::kazakhstan_iin_checksum::KazakhstanIinChecksum;
use crate::{checksum, CitizenId, CitizenType};
use serde::{Deserialize, Serialize};

/// Validation of raw matched text, for callers that only hold a string.
pub trait Validator: Send + Sync {
    fn is_valid_match(&self, value: &str) -> bool;
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(tag = "type")]
pub enum SecondaryValidator {
    KazakhstanIinChecksum,
    KazakhstanBinChecksum,
}

/// Parses the match and checks both its subject kind and its check digit.
fn is_valid_citizen_id(value: &str, citizen_type: CitizenType) -> bool {
    match CitizenId::new(value) {
        Ok(citizen_id) => {
            citizen_id.citizen_type() == citizen_type && checksum::validate(&citizen_id)
        }
        Err(_) => false,
    }
}

impl Validator for SecondaryValidator {
    fn is_valid_match(&self, value: &str) -> bool {
        match self {
            SecondaryValidator::KazakhstanIinChecksum => {
                KazakhstanIinChecksum.is_valid_match(value)
            }
            SecondaryValidator::KazakhstanBinChecksum => {
                KazakhstanBinChecksum.is_valid_match(value)
            }
        }
    }
}
