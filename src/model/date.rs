//! Month-granular calendar points and age arithmetic.
//!
//! All temporal data in the crate is month-granular: a [`YearMonth`] is the
//! smallest addressable point in time. Ages are fractional years measured
//! from a birth `YearMonth`, so a visit in the subject's exact birth month
//! is age `0.0`.

use crate::error::TimelineError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;
use std::str::FromStr;

/// Full month names, indexed by `month - 1`.
///
/// Month names are the only localized strings the core owns.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// A calendar point with month granularity.
///
/// Ordering is lexicographic on `(year, month)`, which the derive provides
/// thanks to field order. Both the birth date and the injected "today"
/// anchor are `YearMonth` values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(from = "RawYearMonth")]
pub struct YearMonth {
    pub year: i32,
    /// 1-based month, always in `1..=12`.
    pub month: u32,
}

/// Wire shape for deserialization; routes through [`YearMonth::new`] so the
/// month clamp holds on the serde path too.
#[derive(Deserialize)]
struct RawYearMonth {
    year: i32,
    month: u32,
}

impl From<RawYearMonth> for YearMonth {
    fn from(raw: RawYearMonth) -> Self {
        Self::new(raw.year, raw.month)
    }
}

impl YearMonth {
    /// Create a new `YearMonth`, clamping the month into `1..=12`.
    ///
    /// Out-of-range months are normalized rather than rejected, matching the
    /// crate-wide policy of never surfacing input errors.
    #[must_use]
    pub fn new(year: i32, month: u32) -> Self {
        Self {
            year,
            month: month.clamp(1, 12),
        }
    }

    /// Read the wall clock (UTC) as a `YearMonth`.
    ///
    /// Only the binary should call this; library entry points take an
    /// explicit `today` parameter so computations stay deterministic.
    #[must_use]
    pub fn today_utc() -> Self {
        use chrono::Datelike;
        let now = chrono::Utc::now().date_naive();
        Self::new(now.year(), now.month())
    }

    /// Fractional age in years since `birth`.
    ///
    /// `(year - birth.year) + (month - birth.month) / 12`; negative when
    /// `self` precedes `birth`.
    #[must_use]
    pub fn age_since(&self, birth: YearMonth) -> f64 {
        f64::from(self.year - birth.year) + f64::from(self.month as i32 - birth.month as i32) / 12.0
    }

    /// Full English name of the month.
    #[must_use]
    pub fn month_name(&self) -> &'static str {
        MONTH_NAMES[(self.month - 1) as usize]
    }

    /// Legal months of `year` for a date bounded by `birth` and `today`.
    ///
    /// Years outside `birth.year..=today.year` still get a well-defined
    /// answer (the unbounded `1..=12`), callers clamp the year first.
    #[must_use]
    pub fn legal_months(year: i32, birth: YearMonth, today: YearMonth) -> RangeInclusive<u32> {
        match (year == birth.year, year == today.year) {
            (true, true) => birth.month..=today.month,
            (true, false) => birth.month..=12,
            (false, true) => 1..=today.month,
            (false, false) => 1..=12,
        }
    }

    /// Clamp into `[birth, today]` and onto a legal month for the resulting
    /// year.
    ///
    /// This is the future/pre-birth clamp policy: a future year snaps to the
    /// current year, a pre-birth year snaps to the birth year, and a month
    /// outside the legal range for its year resets to the first legal month.
    #[must_use]
    pub fn clamp_between(&self, birth: YearMonth, today: YearMonth) -> Self {
        let year = self.year.clamp(birth.year, today.year);
        let legal = Self::legal_months(year, birth, today);
        let month = if legal.contains(&self.month) {
            self.month
        } else {
            *legal.start()
        };
        Self { year, month }
    }

    /// Iterate every month from `start` to `end` inclusive, in order.
    pub fn range_inclusive(start: YearMonth, end: YearMonth) -> impl Iterator<Item = YearMonth> {
        let mut cursor = start;
        std::iter::from_fn(move || {
            if cursor > end {
                return None;
            }
            let current = cursor;
            cursor = if cursor.month == 12 {
                YearMonth::new(cursor.year + 1, 1)
            } else {
                YearMonth {
                    year: cursor.year,
                    month: cursor.month + 1,
                }
            };
            Some(current)
        })
    }
}

impl fmt::Display for YearMonth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:04}-{:02}", self.year, self.month)
    }
}

impl FromStr for YearMonth {
    type Err = TimelineError;

    /// Parse `YYYY-MM` (the CLI exchange format).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || TimelineError::InvalidRequest(format!("expected YYYY-MM, got {s:?}"));
        let (year, month) = s.split_once('-').ok_or_else(invalid)?;
        let year: i32 = year.parse().map_err(|_| invalid())?;
        let month: u32 = month.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(TimelineError::InvalidRequest(format!(
                "month out of range in {s:?}: {month}"
            )));
        }
        Ok(Self { year, month })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn age_at_birth_month_is_zero() {
        let birth = YearMonth::new(1990, 1);
        assert_eq!(birth.age_since(birth), 0.0);
    }

    #[test]
    fn age_includes_month_fraction() {
        let birth = YearMonth::new(1990, 1);
        let visit = YearMonth::new(2010, 6);
        let age = visit.age_since(birth);
        assert!((age - (20.0 + 5.0 / 12.0)).abs() < 1e-12);
    }

    #[test]
    fn ordering_is_lexicographic() {
        assert!(YearMonth::new(1999, 12) < YearMonth::new(2000, 1));
        assert!(YearMonth::new(2000, 2) > YearMonth::new(2000, 1));
    }

    #[test]
    fn clamp_snaps_future_year_to_today() {
        let birth = YearMonth::new(1990, 3);
        let today = YearMonth::new(2025, 6);
        let clamped = YearMonth::new(2030, 9).clamp_between(birth, today);
        // Month 9 is illegal for the current year (past June), so it resets
        // to the first legal month.
        assert_eq!(clamped, YearMonth::new(2025, 1));
    }

    #[test]
    fn clamp_respects_birth_lower_bound() {
        let birth = YearMonth::new(1990, 3);
        let today = YearMonth::new(2025, 6);
        let clamped = YearMonth::new(1980, 1).clamp_between(birth, today);
        assert_eq!(clamped, YearMonth::new(1990, 3));
    }

    #[test]
    fn legal_months_birth_and_current_year_coincide() {
        let birth = YearMonth::new(2025, 2);
        let today = YearMonth::new(2025, 6);
        assert_eq!(YearMonth::legal_months(2025, birth, today), 2..=6);
    }

    #[test]
    fn range_inclusive_crosses_year_boundary() {
        let months: Vec<_> =
            YearMonth::range_inclusive(YearMonth::new(1999, 11), YearMonth::new(2000, 2)).collect();
        assert_eq!(
            months,
            vec![
                YearMonth::new(1999, 11),
                YearMonth::new(1999, 12),
                YearMonth::new(2000, 1),
                YearMonth::new(2000, 2),
            ]
        );
    }

    #[test]
    fn deserialize_clamps_out_of_range_month() {
        let ym: YearMonth = serde_json::from_str(r#"{"year":2020,"month":13}"#)
            .expect("out-of-range month is clamped, not rejected");
        assert_eq!(ym, YearMonth::new(2020, 12));
        assert_eq!(ym.month_name(), "December");

        let ym: YearMonth = serde_json::from_str(r#"{"year":2020,"month":0}"#)
            .expect("month zero is clamped, not rejected");
        assert_eq!(ym.month, 1);
    }

    #[test]
    fn parse_roundtrip() {
        let ym: YearMonth = "1990-01".parse().unwrap();
        assert_eq!(ym, YearMonth::new(1990, 1));
        assert_eq!(ym.to_string(), "1990-01");
        assert!("1990-13".parse::<YearMonth>().is_err());
        assert!("nope".parse::<YearMonth>().is_err());
    }
}
