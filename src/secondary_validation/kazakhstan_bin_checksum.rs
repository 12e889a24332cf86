use crate::secondary_validation::{is_valid_citizen_id, Validator};
use crate::CitizenType;

/// Business identification number (BIN) of a juridical subject.
pub struct KazakhstanBinChecksum;

impl Validator for KazakhstanBinChecksum {
    fn is_valid_match(&self, value: &str) -> bool {
        is_valid_citizen_id(value, CitizenType::Juridical)
    }
}
