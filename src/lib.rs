// This blocks accidental use of `println`. If one is actually needed, you can
// override with `#[allow(clippy::print_stdout)]`.
#![deny(clippy::print_stdout)]

mod checksum;
mod citizen_id;
mod config;
mod error;
mod juridical;
mod observability;
mod secondary_validation;
mod stats;

// This is the public API of the citizen id library
pub use checksum::{
    check_digit, validate, IdValidation, JuridicalIdValidation, PhysicalIdValidation,
};
pub use citizen_id::{CitizenId, CitizenType, CITIZEN_ID_LENGTH};
pub use config::{YearPivot, YearPivotError, MAX_CENTURY_START};
pub use error::{CitizenIdError, FormatViolation};
pub use juridical::{DepartmentType, JuridicalDataInformation, OrganizationType};
pub use secondary_validation::{
    KazakhstanBinChecksum, KazakhstanIinChecksum, SecondaryValidator, Validator,
};
