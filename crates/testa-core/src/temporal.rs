//! # Temporal Types
//!
//! UTC-only timestamp type plus calendar-exact age arithmetic. All
//! timestamps are stored in UTC with second-level precision and a `Z`
//! suffix in serialized form.
//!
//! ## Design Decision
//!
//! The stack operates across jurisdictions with different local time zones.
//! Generation metadata and audit trails are UTC; local time conversion is a
//! presentation concern. Age checks (minimum testator age, minor children)
//! take an explicit `as_of` date so that validation is reproducible in
//! tests and never depends on a hidden clock.

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// A UTC timestamp with second-level precision.
///
/// Serializes to ISO 8601 format with `Z` suffix (e.g., `2026-01-15T12:00:00Z`).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Timestamp(DateTime<Utc>);

impl Timestamp {
    /// Create a timestamp representing the current UTC time.
    pub fn now() -> Self {
        Self(Utc::now())
    }

    /// Create a timestamp from a `chrono::DateTime<Utc>`.
    pub fn from_datetime(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }

    /// Access the underlying `chrono::DateTime<Utc>`.
    pub fn as_datetime(&self) -> &DateTime<Utc> {
        &self.0
    }

    /// The UTC calendar date of this timestamp.
    pub fn date(&self) -> NaiveDate {
        self.0.date_naive()
    }

    /// Return the timestamp as an ISO 8601 string with Z suffix,
    /// truncated to seconds.
    pub fn to_canonical_string(&self) -> String {
        self.0.format("%Y-%m-%dT%H:%M:%SZ").to_string()
    }
}

impl std::fmt::Display for Timestamp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_canonical_string())
    }
}

impl From<DateTime<Utc>> for Timestamp {
    fn from(dt: DateTime<Utc>) -> Self {
        Self(dt)
    }
}

/// Calendar-exact age in whole years at `as_of`.
///
/// A birthday on `as_of` itself counts as completed. Returns 0 for a date
/// of birth in the future rather than wrapping.
pub fn age_in_years(date_of_birth: NaiveDate, as_of: NaiveDate) -> u32 {
    if date_of_birth > as_of {
        return 0;
    }
    let mut age = as_of.year() - date_of_birth.year();
    let birthday_passed = (as_of.month(), as_of.day()) >= (date_of_birth.month(), date_of_birth.day());
    if !birthday_passed {
        age -= 1;
    }
    age.max(0) as u32
}

#[cfg(test)]
mod tests {
    use super::*;

    fn d(y: i32, m: u32, day: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, day).unwrap()
    }

    #[test]
    fn age_before_birthday() {
        assert_eq!(age_in_years(d(1990, 6, 15), d(2026, 6, 14)), 35);
    }

    #[test]
    fn age_on_birthday() {
        assert_eq!(age_in_years(d(1990, 6, 15), d(2026, 6, 15)), 36);
    }

    #[test]
    fn age_after_birthday() {
        assert_eq!(age_in_years(d(1990, 6, 15), d(2026, 6, 16)), 36);
    }

    #[test]
    fn age_future_dob_is_zero() {
        assert_eq!(age_in_years(d(2030, 1, 1), d(2026, 1, 1)), 0);
    }

    #[test]
    fn age_leap_day_birth() {
        // Feb 29 birthday: completed on Mar 1 of non-leap years.
        assert_eq!(age_in_years(d(2008, 2, 29), d(2026, 2, 28)), 17);
        assert_eq!(age_in_years(d(2008, 2, 29), d(2026, 3, 1)), 18);
    }

    #[test]
    fn canonical_string_has_z_suffix() {
        let ts = Timestamp::from_datetime(
            DateTime::parse_from_rfc3339("2026-01-15T12:00:00.75+01:00")
                .unwrap()
                .with_timezone(&Utc),
        );
        assert_eq!(ts.to_canonical_string(), "2026-01-15T11:00:00Z");
    }

    #[test]
    fn timestamp_date_component() {
        let ts = Timestamp::from_datetime(
            DateTime::parse_from_rfc3339("2026-08-06T23:59:59Z")
                .unwrap()
                .with_timezone(&Utc),
        );
        assert_eq!(ts.date(), d(2026, 8, 6));
    }

    proptest::proptest! {
        #[test]
        fn age_is_monotone_in_as_of(
            dob_days in 0i64..20_000,
            offset_a in 0i64..40_000,
            extra in 0i64..10_000,
        ) {
            let epoch = d(1950, 1, 1);
            let dob = epoch + chrono::Duration::days(dob_days);
            let earlier = epoch + chrono::Duration::days(offset_a);
            let later = earlier + chrono::Duration::days(extra);
            proptest::prop_assert!(age_in_years(dob, earlier) <= age_in_years(dob, later));
        }

        #[test]
        fn age_never_exceeds_elapsed_years(dob_days in 0i64..20_000, lived_days in 0i64..60_000) {
            let epoch = d(1950, 1, 1);
            let dob = epoch + chrono::Duration::days(dob_days);
            let as_of = dob + chrono::Duration::days(lived_days);
            let age = age_in_years(dob, as_of);
            proptest::prop_assert!(u64::from(age) <= (lived_days as u64) / 365 + 1);
        }
    }
}
