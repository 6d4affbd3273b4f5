//! Half-open intervals in age-space.

use serde::{Deserialize, Serialize};

/// A half-open interval `[start, end)` in age units (fractional years since
/// birth).
///
/// Half-open semantics let adjacent periods touch without counting as an
/// overlap, so `[2.0, 5.0)` and `[5.0, 8.0)` are compatible neighbors.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgeSpan {
    pub start: f64,
    pub end: f64,
}

impl AgeSpan {
    #[must_use]
    pub fn new(start: f64, end: f64) -> Self {
        Self { start, end }
    }

    /// Length in age units; zero or negative spans are empty.
    #[must_use]
    pub fn length(&self) -> f64 {
        self.end - self.start
    }

    /// True when the span covers a positive amount of time.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.end > self.start
    }

    /// Half-open overlap test: touching boundaries do not overlap, and an
    /// empty span overlaps nothing.
    #[must_use]
    pub fn overlaps(&self, other: &AgeSpan) -> bool {
        self.is_positive()
            && other.is_positive()
            && self.start < other.end
            && other.start < self.end
    }

    /// Intersection with `other`, if it has positive length.
    #[must_use]
    pub fn intersect(&self, other: &AgeSpan) -> Option<AgeSpan> {
        let start = self.start.max(other.start);
        let end = self.end.min(other.end);
        (end > start).then_some(AgeSpan { start, end })
    }
}
