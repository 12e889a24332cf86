use chrono::{Datelike, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Latest accepted start of a fixed century window.
pub const MAX_CENTURY_START: i32 = 9900;

/// How a two digit registration year is expanded to a calendar year.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[serde(tag = "type", try_from = "YearPivotConfig")]
pub enum YearPivot {
    /// The 100 year window ending at the current year, so a registration year is never in
    /// the future.
    #[default]
    SlidingWindow,
    /// The 100 year window starting at `start`, e.g. `1950` maps "49" to 2049 and "50" to 1950.
    FixedCentury { start: i32 },
}

#[derive(Debug, PartialEq, Eq, Error)]
pub enum YearPivotError {
    #[error("Century start must be within 0..=9900, got {0}")]
    CenturyStartOutOfRange(i32),
}

// Unchecked shape of `YearPivot` as it appears in configuration
#[derive(Deserialize)]
#[serde(tag = "type")]
enum YearPivotConfig {
    SlidingWindow,
    FixedCentury { start: i32 },
}

impl TryFrom<YearPivotConfig> for YearPivot {
    type Error = YearPivotError;

    fn try_from(config: YearPivotConfig) -> Result<Self, Self::Error> {
        match config {
            YearPivotConfig::SlidingWindow => Ok(YearPivot::SlidingWindow),
            YearPivotConfig::FixedCentury { start } => {
                if !(0..=MAX_CENTURY_START).contains(&start) {
                    return Err(YearPivotError::CenturyStartOutOfRange(start));
                }
                Ok(YearPivot::FixedCentury { start })
            }
        }
    }
}

impl YearPivot {
    /// Expands a two digit year. Only the last two decimal digits of `two_digit_year` are
    /// used, so 150 expands like 50.
    pub fn expand(&self, two_digit_year: u8) -> i32 {
        let start = match self {
            YearPivot::SlidingWindow => Utc::now().year() - 99,
            YearPivot::FixedCentury { start } => *start,
        };
        expand_from(start, two_digit_year % 100)
    }
}

fn expand_from(start: i32, two_digit_year: u8) -> i32 {
    let offset = (i32::from(two_digit_year) - start.rem_euclid(100)).rem_euclid(100);
    // Windows built in code skip the range check
    start.saturating_add(offset)
}
