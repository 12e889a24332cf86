use afl::fuzz;
use kz_citizen_id::{
    check_digit, validate, CitizenId, JuridicalDataInformation, KazakhstanBinChecksum,
    KazakhstanIinChecksum, Validator,
};

#[cfg(not(feature = "manual_test"))]
fn main() {
    fuzz!(|data: &[u8]| {
        run_raw_fuzz(data);
    });
}

#[cfg(feature = "manual_test")]
fn main() {
    use std::io::{stdin, Read};

    let mut input = vec![];
    stdin().read_to_end(&mut input).unwrap();
    run_raw_fuzz(&input);
}

fn run_raw_fuzz(bytes: &[u8]) -> Option<()> {
    let input = std::str::from_utf8(bytes).ok()?;
    run_fuzz(input);
    Some(())
}

fn run_fuzz(input: &str) {
    let iin_valid = KazakhstanIinChecksum.is_valid_match(input);
    let bin_valid = KazakhstanBinChecksum.is_valid_match(input);
    assert!(!(iin_valid && bin_valid));

    let citizen_id = match CitizenId::new(input) {
        Ok(citizen_id) => citizen_id,
        Err(_) => {
            assert!(!iin_valid && !bin_valid);
            return;
        }
    };

    assert_eq!(citizen_id.as_str(), input.trim());
    assert_eq!(CitizenId::new(citizen_id.as_str()).ok(), Some(citizen_id.clone()));

    let valid = validate(&citizen_id);
    assert_eq!(valid, iin_valid || bin_valid);
    if valid {
        assert_eq!(check_digit(&citizen_id), citizen_id.digits().last());
    }

    if let Ok(information) = JuridicalDataInformation::new(&citizen_id) {
        assert!(information.month() < 12);
        assert_eq!(information.order_number().len(), 5);
        let _ = information.year();
        let _ = information.registration_date();
        let _ = information.organization_type();
        let _ = information.department_type();
    } else {
        assert!(citizen_id.is_physical());
    }
}
