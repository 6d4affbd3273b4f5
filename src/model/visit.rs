//! First-visit records.

use super::{CountryCode, YearMonth};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// The first visit to a country.
///
/// One record per country; the [`VisitMap`] key enforces uniqueness while
/// preserving the caller's insertion order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VisitRecord {
    pub country: CountryCode,
    /// Display name supplied by the catalogue collaborator; opaque to the
    /// core.
    pub display_name: String,
    pub date: YearMonth,
}

/// Visits keyed by country code, insertion-ordered.
pub type VisitMap = IndexMap<CountryCode, VisitRecord>;

impl VisitRecord {
    #[must_use]
    pub fn new(country: CountryCode, display_name: impl Into<String>, date: YearMonth) -> Self {
        Self {
            country,
            display_name: display_name.into(),
            date,
        }
    }

    /// Apply the clamp policy: a visit may not precede birth or postdate
    /// `today`.
    ///
    /// Violations are corrected rather than rejected; see
    /// [`YearMonth::clamp_between`] for the exact snapping rules.
    #[must_use]
    pub fn sanitized(&self, birth: YearMonth, today: YearMonth) -> Self {
        Self {
            date: self.date.clamp_between(birth, today),
            ..self.clone()
        }
    }

    /// Fractional age at the time of this visit.
    #[must_use]
    pub fn age(&self, birth: YearMonth) -> f64 {
        self.date.age_since(birth)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn sanitize_clamps_future_visit() {
        let birth = YearMonth::new(1990, 1);
        let today = YearMonth::new(2025, 8);
        let visit = VisitRecord::new(CountryCode::new("JP"), "Japan", YearMonth::new(2031, 4));
        let clean = visit.sanitized(birth, today);
        assert_eq!(clean.date.year, 2025);
        assert!(clean.age(birth) <= today.age_since(birth));
    }

    #[test]
    fn sanitize_keeps_valid_visit() {
        let birth = YearMonth::new(1990, 1);
        let today = YearMonth::new(2025, 8);
        let visit = VisitRecord::new(CountryCode::new("FR"), "France", YearMonth::new(2010, 6));
        assert_eq!(visit.sanitized(birth, today), visit);
    }
}
