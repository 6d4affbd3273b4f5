//! Interval Resolver: validates, truncates, and auto-corrects residence rows.
//!
//! The resolver is the "never block the user" half of the core: no input is
//! ever rejected. Inverted intervals are snapped, incomplete trailing rows
//! are truncated, and an empty list is replaced by a synthesized default
//! row. Overlap handling happens through option filtering
//! ([`legal_from_options`] / [`legal_until_options`]) rather than rejection:
//! the UI only ever offers dates that keep the list overlap-free.
//!
//! The resolver has no dependency on the layout engine; the engine consumes
//! the resolver's validated output.

mod options;

pub use options::{legal_from_options, legal_until_options};

use crate::model::{CountryCode, ResidencePeriod, ResidenceRow, YearMonth};
use serde::{Deserialize, Serialize};

/// A validated, prefix-valid residence row list.
///
/// Guarantees once constructed by [`resolve`]:
/// - at least one row exists;
/// - every row has `from <= until` whenever both endpoints are set;
/// - every row past index 0 is complete (country and both endpoints set).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResolvedResidences {
    rows: Vec<ResidenceRow>,
}

impl ResolvedResidences {
    /// The validated rows, in creation order.
    #[must_use]
    pub fn rows(&self) -> &[ResidenceRow] {
        &self.rows
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Fully-specified periods for the layout engine.
    ///
    /// Rows without a country carry no drawable interval and are skipped;
    /// unset endpoints default to `[birth, today)`.
    #[must_use]
    pub fn periods(&self, birth: YearMonth, today: YearMonth) -> Vec<ResidencePeriod> {
        self.rows
            .iter()
            .filter_map(|row| row.to_period(birth, today))
            .collect()
    }

    /// Append a new row the way the form's "add period" action does: it
    /// starts where the last row ends (or at birth), runs until today, and
    /// picks the first available country not already used (falling back to
    /// the first available).
    pub fn append_row(
        &mut self,
        available: &[CountryCode],
        birth: YearMonth,
        today: YearMonth,
    ) {
        let from = self
            .rows
            .last()
            .and_then(|row| row.until)
            .unwrap_or(birth);
        let used: Vec<&CountryCode> = self.rows.iter().filter_map(|r| r.country.as_ref()).collect();
        let country = available
            .iter()
            .find(|code| !used.contains(code))
            .or_else(|| available.first())
            .cloned();
        self.rows.push(ResidenceRow {
            country,
            from: Some(from),
            until: Some(today),
        });
    }

    /// Remove a row, re-synthesizing the default when the list would become
    /// empty. Out-of-range indices are ignored.
    pub fn remove_row(
        &mut self,
        idx: usize,
        available: &[CountryCode],
        birth: YearMonth,
        today: YearMonth,
    ) {
        if idx < self.rows.len() {
            self.rows.remove(idx);
        }
        if self.rows.is_empty() {
            self.rows.push(default_row(available, birth, today));
        }
    }
}

/// Normalize a raw residence row list into a [`ResolvedResidences`].
///
/// Steps, in order:
/// 1. synthesize a default row spanning `[birth, today)` when the input is
///    empty;
/// 2. auto-correct each row independently (inverted endpoints snap
///    together);
/// 3. truncate at the first incomplete row, scanning from index 1; the
///    first row is always retained as the anchor, and later rows are
///    discarded wholesale rather than individually skipped.
///
/// `available` is the ordered set of visited country codes; it constrains
/// the synthesized default row's country, nothing else.
#[must_use]
pub fn resolve(
    birth: YearMonth,
    today: YearMonth,
    raw: &[ResidenceRow],
    available: &[CountryCode],
) -> ResolvedResidences {
    let mut rows: Vec<ResidenceRow> = raw.to_vec();
    if rows.is_empty() {
        rows.push(default_row(available, birth, today));
    }

    for row in &mut rows {
        row.autocorrect();
    }

    // Overlap is prevented at the option-filtering stage, not here; if a
    // caller bypasses that and feeds overlapping rows, log it rather than
    // rejecting.
    // Zero-length intervals overlap nothing.
    let complete: Vec<(YearMonth, YearMonth)> = rows
        .iter()
        .filter_map(|row| Some((row.from?, row.until?)))
        .filter(|(from, until)| from < until)
        .collect();
    let overlapping = complete
        .iter()
        .enumerate()
        .any(|(i, &(from, until))| {
            complete[i + 1..]
                .iter()
                .any(|&(o_from, o_until)| from < o_until && o_from < until)
        });
    if overlapping {
        tracing::warn!("residence rows overlap in age-space; the option filter should prevent this");
    }

    let valid_prefix = 1 + rows[1..].iter().take_while(|row| row.is_complete()).count();
    if valid_prefix < rows.len() {
        tracing::debug!(
            kept = valid_prefix,
            dropped = rows.len() - valid_prefix,
            "truncating residence rows at first incomplete row"
        );
        rows.truncate(valid_prefix);
    }

    ResolvedResidences { rows }
}

fn default_row(available: &[CountryCode], birth: YearMonth, today: YearMonth) -> ResidenceRow {
    ResidenceRow {
        country: available.first().cloned(),
        from: Some(birth),
        until: Some(today),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month)
    }

    fn codes(list: &[&str]) -> Vec<CountryCode> {
        list.iter().map(CountryCode::new).collect()
    }

    #[test]
    fn empty_input_synthesizes_default_row() {
        let resolved = resolve(ym(1990, 1), ym(2025, 8), &[], &codes(&["FR", "DE"]));
        assert_eq!(resolved.len(), 1);
        let row = &resolved.rows()[0];
        assert_eq!(row.country, Some(CountryCode::new("FR")));
        assert_eq!(row.from, Some(ym(1990, 1)));
        assert_eq!(row.until, Some(ym(2025, 8)));
    }

    #[test]
    fn empty_input_without_available_countries_leaves_country_unset() {
        let resolved = resolve(ym(1990, 1), ym(2025, 8), &[], &[]);
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved.rows()[0].country, None);
    }

    #[test]
    fn first_row_is_kept_even_when_incomplete() {
        let raw = vec![ResidenceRow::default()];
        let resolved = resolve(ym(1990, 1), ym(2025, 8), &raw, &codes(&["FR"]));
        assert_eq!(resolved.len(), 1);
    }

    #[test]
    fn truncates_at_first_incomplete_row() {
        let raw = vec![
            ResidenceRow::new(CountryCode::new("FR"), ym(1995, 1), ym(2000, 1)),
            ResidenceRow::new(CountryCode::new("DE"), ym(2000, 1), ym(2005, 1)),
            ResidenceRow {
                country: None,
                from: Some(ym(2005, 1)),
                until: Some(ym(2010, 1)),
            },
            // Discarded wholesale even though individually valid.
            ResidenceRow::new(CountryCode::new("ES"), ym(2010, 1), ym(2015, 1)),
        ];
        let resolved = resolve(ym(1990, 1), ym(2025, 8), &raw, &codes(&["FR", "DE", "ES"]));
        assert_eq!(resolved.len(), 2);
    }

    #[test]
    fn inverted_rows_are_corrected_not_dropped() {
        let raw = vec![
            ResidenceRow::new(CountryCode::new("FR"), ym(1995, 1), ym(2000, 1)),
            ResidenceRow::new(CountryCode::new("DE"), ym(2010, 6), ym(2004, 2)),
        ];
        let resolved = resolve(ym(1990, 1), ym(2025, 8), &raw, &codes(&["FR", "DE"]));
        assert_eq!(resolved.len(), 2);
        let corrected = &resolved.rows()[1];
        assert_eq!(corrected.from, Some(ym(2004, 2)));
        assert_eq!(corrected.until, Some(ym(2004, 2)));
    }

    #[test]
    fn resolved_periods_default_unset_endpoints() {
        let raw = vec![ResidenceRow {
            country: Some(CountryCode::new("FR")),
            from: None,
            until: None,
        }];
        let resolved = resolve(ym(1990, 1), ym(2025, 8), &raw, &codes(&["FR"]));
        let periods = resolved.periods(ym(1990, 1), ym(2025, 8));
        assert_eq!(periods.len(), 1);
        assert_eq!(periods[0].from, ym(1990, 1));
        assert_eq!(periods[0].until, ym(2025, 8));
    }

    #[test]
    fn append_row_continues_from_last_until() {
        let raw = vec![ResidenceRow::new(
            CountryCode::new("FR"),
            ym(1995, 1),
            ym(2000, 6),
        )];
        let available = codes(&["FR", "DE"]);
        let mut resolved = resolve(ym(1990, 1), ym(2025, 8), &raw, &available);
        resolved.append_row(&available, ym(1990, 1), ym(2025, 8));
        let added = resolved.rows().last().unwrap();
        assert_eq!(added.country, Some(CountryCode::new("DE")));
        assert_eq!(added.from, Some(ym(2000, 6)));
        assert_eq!(added.until, Some(ym(2025, 8)));
    }

    #[test]
    fn append_row_repeats_countries_once_all_used() {
        let available = codes(&["FR"]);
        let raw = vec![ResidenceRow::new(
            CountryCode::new("FR"),
            ym(1995, 1),
            ym(2000, 6),
        )];
        let mut resolved = resolve(ym(1990, 1), ym(2025, 8), &raw, &available);
        resolved.append_row(&available, ym(1990, 1), ym(2025, 8));
        assert_eq!(
            resolved.rows().last().unwrap().country,
            Some(CountryCode::new("FR"))
        );
    }

    #[test]
    fn remove_last_row_restores_default() {
        let available = codes(&["FR"]);
        let raw = vec![ResidenceRow::new(
            CountryCode::new("FR"),
            ym(1995, 1),
            ym(2000, 6),
        )];
        let mut resolved = resolve(ym(1990, 1), ym(2025, 8), &raw, &available);
        resolved.remove_row(0, &available, ym(1990, 1), ym(2025, 8));
        assert_eq!(resolved.len(), 1);
        assert_eq!(resolved.rows()[0].from, Some(ym(1990, 1)));
    }
}
