use crate::error::FormatViolation;
use crate::observability::labels::{Labels, NO_LABEL, REASON, VALID};
use crate::CitizenType;
use metrics::counter;

// Counters are looked up on every event so that whichever recorder is
// installed at the time (global or local) receives them.

pub fn record_parsed(citizen_type: CitizenType) {
    counter!("citizen_id.parsed", Labels::for_citizen_type(citizen_type)).increment(1);
}

pub fn record_rejected(violation: &FormatViolation) {
    counter!(
        "citizen_id.rejected",
        NO_LABEL.clone_with_label((REASON, violation.reason()))
    )
    .increment(1);
}

pub fn record_checksum(citizen_type: CitizenType, valid: bool) {
    counter!(
        "citizen_id.checksum",
        Labels::for_citizen_type(citizen_type).clone_with_label((VALID, valid.to_string()))
    )
    .increment(1);
}
