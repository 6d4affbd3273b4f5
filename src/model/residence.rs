//! Residence rows and validated residence periods.
//!
//! A [`ResidenceRow`] mirrors a partially filled form row: any field may be
//! unset, and an unset date field means "use default" downstream rather than
//! being an error. The resolver turns a row list into a prefix-valid,
//! non-overlapping sequence; [`ResidencePeriod`] is the fully-specified shape
//! the layout engine consumes.

use super::{AgeSpan, CountryCode, YearMonth};
use serde::{Deserialize, Serialize};

/// A raw residence row as entered, possibly incomplete.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidenceRow {
    pub country: Option<CountryCode>,
    pub from: Option<YearMonth>,
    pub until: Option<YearMonth>,
}

impl ResidenceRow {
    #[must_use]
    pub fn new(country: CountryCode, from: YearMonth, until: YearMonth) -> Self {
        Self {
            country: Some(country),
            from: Some(from),
            until: Some(until),
        }
    }

    /// Snap an inverted interval so `from <= until`.
    ///
    /// The violating endpoint is set equal to the other; rows with unset
    /// endpoints are left untouched. Runs independently per row, before any
    /// cross-row check.
    pub fn autocorrect(&mut self) {
        if let (Some(from), Some(until)) = (self.from, self.until) {
            if until < from {
                self.from = Some(until);
            } else if from > until {
                self.until = Some(from);
            }
        }
    }

    /// A row is complete when the country and both endpoints are set and the
    /// interval is not inverted.
    ///
    /// After [`autocorrect`](Self::autocorrect) the ordering clause only
    /// fails for rows that still have unset endpoints.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        match (&self.country, self.from, self.until) {
            (Some(_), Some(from), Some(until)) => from <= until,
            _ => false,
        }
    }

    /// The row's interval with unset endpoints defaulted to `[birth, today)`.
    #[must_use]
    pub fn effective_interval(&self, birth: YearMonth, today: YearMonth) -> (YearMonth, YearMonth) {
        (self.from.unwrap_or(birth), self.until.unwrap_or(today))
    }

    /// Promote to a [`ResidencePeriod`], defaulting unset endpoints.
    ///
    /// Returns `None` when no country is selected; such rows carry no
    /// drawable interval.
    #[must_use]
    pub fn to_period(&self, birth: YearMonth, today: YearMonth) -> Option<ResidencePeriod> {
        let (from, until) = self.effective_interval(birth, today);
        self.country.clone().map(|country| ResidencePeriod {
            country,
            from,
            until,
        })
    }
}

/// A validated, fully-specified residence interval.
///
/// Converted to age-space as the half-open span `[from_age, until_age)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResidencePeriod {
    pub country: CountryCode,
    pub from: YearMonth,
    pub until: YearMonth,
}

impl ResidencePeriod {
    #[must_use]
    pub fn new(country: CountryCode, from: YearMonth, until: YearMonth) -> Self {
        Self {
            country,
            from,
            until,
        }
    }

    /// The period as a half-open span in age-space.
    #[must_use]
    pub fn age_span(&self, birth: YearMonth) -> AgeSpan {
        AgeSpan::new(self.from.age_since(birth), self.until.age_since(birth))
    }

    /// Half-open overlap against another period, in calendar space.
    ///
    /// Overlap is forbidden regardless of country: one cannot reside in two
    /// countries at once. Touching boundaries do not overlap, and a
    /// zero-length period (the autocorrect result for an inverted row)
    /// overlaps nothing.
    #[must_use]
    pub fn overlaps(&self, other: &ResidencePeriod) -> bool {
        self.from < self.until
            && other.from < other.until
            && self.from < other.until
            && other.from < self.until
    }
}
