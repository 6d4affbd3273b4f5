//! Axis tick and grid line generation.

use super::model::{AxisTick, GridEmphasis, GridLine};

/// X-axis ticks for a given current age.
///
/// Step is 5 age units once the subject is over 10, otherwise 1. Ticks run
/// from 0 to the ceiling of the current age; if the last regular tick falls
/// short of the rounded current age, the rounded value is appended so the
/// axis always ends near "now". Ticks past the current age are dropped.
#[must_use]
pub fn x_axis_ticks(current_age: f64) -> Vec<AxisTick> {
    let step: usize = if current_age > 10.0 { 5 } else { 1 };
    let end = current_age.ceil().max(0.0) as i64;

    let mut values: Vec<i64> = (0..=end).step_by(step).collect();
    let rounded = current_age.round() as i64;
    if values.last().is_some_and(|last| *last < rounded) {
        values.push(rounded);
    }

    values
        .into_iter()
        .filter(|v| *v as f64 <= current_age)
        .map(|v| AxisTick {
            position: v as f64,
            label: v.to_string(),
        })
        .collect()
}

/// Y-axis ticks for `n` chart rows.
///
/// Row positions count from the top (row 0) down, so the bottom row sits at
/// `n - 1`; tick positions are offset by 0.5 to land between bars. Labels
/// count visited countries from the bottom up in steps of 5, and the
/// topmost position is always labeled with the exact count when `n` is not
/// a multiple of 5: the "0, 5, 10, ..., n" rule.
#[must_use]
pub fn y_axis_ticks(n: usize) -> Vec<AxisTick> {
    let mut ticks: Vec<AxisTick> = (0..=n / 5)
        .map(|i| AxisTick {
            position: n as f64 - 0.5 - (i * 5) as f64,
            label: (i * 5).to_string(),
        })
        .collect();
    if n % 5 != 0 {
        ticks.insert(
            0,
            AxisTick {
                position: -0.5,
                label: n.to_string(),
            },
        );
    }
    ticks
}

/// One vertical guide line per whole year of age, major every fifth year.
#[must_use]
pub fn year_grid_lines(current_age: f64) -> Vec<GridLine> {
    if current_age < 0.0 {
        return Vec::new();
    }
    (0..=current_age.trunc() as i64)
        .map(|age| GridLine {
            age: age as f64,
            emphasis: if age % 5 == 0 {
                GridEmphasis::Major
            } else {
                GridEmphasis::Minor
            },
        })
        .collect()
}
