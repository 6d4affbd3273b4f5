//! Overlap-aware date option filtering.
//!
//! The UI never rejects a residence date; instead it only offers choices
//! that keep the full row list overlap-free. These queries compute, for one
//! row being edited, the set of legal `(year, month)` values for its `from`
//! or `until` endpoint. Half-open semantics apply throughout, so an
//! endpoint may land exactly on another row's boundary.
//!
//! One deliberate wrinkle: the row's currently selected value is always
//! kept legal even when it would otherwise be excluded, so an edit in a
//! neighboring row never silently discards the user's choice.

use crate::model::{ResidenceRow, YearMonth};

/// Legal `until` choices for `rows[idx]`.
///
/// Bounded below by the row's `from` (defaulting to birth) and above by
/// `today`, then filtered against every other row's interval.
#[must_use]
pub fn legal_until_options(
    rows: &[ResidenceRow],
    idx: usize,
    birth: YearMonth,
    today: YearMonth,
) -> Vec<YearMonth> {
    let Some(row) = rows.get(idx) else {
        return Vec::new();
    };
    let from = row.from.unwrap_or(birth);
    let others = other_intervals(rows, idx);

    let mut legal: Vec<YearMonth> = YearMonth::range_inclusive(from, today)
        .filter(|&until| {
            row.until == Some(until)
                || !others
                    .iter()
                    .any(|&(o_from, o_until)| from < o_until && o_from < until)
        })
        .collect();
    if legal.is_empty() {
        // Degenerate fallback: the zero-length interval is always safe.
        legal.push(from);
    }
    legal
}

/// Legal `from` choices for `rows[idx]`.
///
/// Bounded below by birth and above by the row's paired `until` (defaulting
/// to `today`), then filtered against every other row's interval.
#[must_use]
pub fn legal_from_options(
    rows: &[ResidenceRow],
    idx: usize,
    birth: YearMonth,
    today: YearMonth,
) -> Vec<YearMonth> {
    let Some(row) = rows.get(idx) else {
        return Vec::new();
    };
    let until = row.until.unwrap_or(today);
    let others = other_intervals(rows, idx);

    let mut legal: Vec<YearMonth> = YearMonth::range_inclusive(birth, until)
        .filter(|&from| {
            row.from == Some(from)
                || !others
                    .iter()
                    .any(|&(o_from, o_until)| from < o_until && o_from < until)
        })
        .collect();
    if legal.is_empty() {
        legal.push(birth);
    }
    legal
}

/// Intervals of every row except `idx`, skipping rows with unset endpoints.
fn other_intervals(rows: &[ResidenceRow], idx: usize) -> Vec<(YearMonth, YearMonth)> {
    rows.iter()
        .enumerate()
        .filter(|&(i, _)| i != idx)
        .filter_map(|(_, row)| Some((row.from?, row.until?)))
        .collect()
}
