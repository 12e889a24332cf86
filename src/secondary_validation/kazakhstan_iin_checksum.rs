use crate::secondary_validation::{is_valid_citizen_id, Validator};
use crate::CitizenType;

/// Individual identification number (IIN) of a physical subject.
pub struct KazakhstanIinChecksum;

impl Validator for KazakhstanIinChecksum {
    fn is_valid_match(&self, value: &str) -> bool {
        is_valid_citizen_id(value, CitizenType::Physical)
    }
}
