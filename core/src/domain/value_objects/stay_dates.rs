//! Requested stay as a half-open date range `[check_in, check_out)`.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::errors::ValidationError;

/// Wire format of stay dates
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// A validated stay of at least one night
///
/// The guest occupies the listing from `check_in` up to, but not including,
/// `check_out`, so a stay ending on day X never overlaps one starting on X.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StayDates {
    check_in: NaiveDate,
    check_out: NaiveDate,
}

impl StayDates {
    /// Build a stay from calendar dates, rejecting empty or inverted ranges
    pub fn new(check_in: NaiveDate, check_out: NaiveDate) -> Result<Self, ValidationError> {
        if check_in >= check_out {
            return Err(ValidationError::InvalidStayRange {
                check_in: check_in.format(DATE_FORMAT).to_string(),
                check_out: check_out.format(DATE_FORMAT).to_string(),
            });
        }
        Ok(Self {
            check_in,
            check_out,
        })
    }

    /// Parse both dates from strict `YYYY-MM-DD` strings
    pub fn parse(check_in: &str, check_out: &str) -> Result<Self, ValidationError> {
        let check_in = parse_date("checkIn", check_in)?;
        let check_out = parse_date("checkOut", check_out)?;
        Self::new(check_in, check_out)
    }

    /// Rebuild a stay already validated before it was stored
    pub(crate) fn from_stored(check_in: NaiveDate, check_out: NaiveDate) -> Self {
        Self {
            check_in,
            check_out,
        }
    }

    pub fn check_in(&self) -> NaiveDate {
        self.check_in
    }

    pub fn check_out(&self) -> NaiveDate {
        self.check_out
    }

    /// Number of nights, always at least one
    pub fn nights(&self) -> i64 {
        (self.check_out - self.check_in).num_days()
    }

    /// Half-open overlap: `[a, b)` and `[c, d)` overlap iff `a < d && c < b`
    pub fn overlaps(&self, other: &StayDates) -> bool {
        self.check_in < other.check_out && other.check_in < self.check_out
    }
}

impl std::fmt::Display for StayDates {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}, {})",
            self.check_in.format(DATE_FORMAT),
            self.check_out.format(DATE_FORMAT)
        )
    }
}

/// Parse a single `YYYY-MM-DD` date
///
/// chrono alone accepts unpadded fields such as `2024-6-1`; the shape check
/// rejects those so nothing is coerced.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate, ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::RequiredField {
            field: field.to_string(),
        });
    }

    let invalid = || ValidationError::InvalidDate {
        field: field.to_string(),
        value: value.to_string(),
    };

    let well_formed = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !well_formed {
        return Err(invalid());
    }

    NaiveDate::parse_from_str(value, DATE_FORMAT).map_err(|_| invalid())
}
