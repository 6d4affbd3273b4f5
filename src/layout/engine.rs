//! The Timeline Layout Engine.
//!
//! A stateless pure transform: validated temporal data in, complete chart
//! geometry out. The only rejection it ever produces is
//! [`TimelineError::EmptySelection`]; every other edge case (single
//! country, birth month equal to the current month, zero-length bars) must
//! yield a valid layout.

use super::config::LayoutConfig;
use super::flags::FlagSource;
use super::model::{
    EntryLayout, FlagPlacement, HorizontalAnchor, LabelPlacement, Summary, TimelineLayout,
    TimelineOutput,
};
use super::ticks::{x_axis_ticks, y_axis_ticks, year_grid_lines};
use crate::error::{Result, TimelineError};
use crate::model::{AgeSpan, ResidencePeriod, VisitMap, VisitRecord, YearMonth};

/// Compute the full timeline layout.
///
/// `periods` is the resolver's validated output; `flags` must already be
/// resolved by the caller (no I/O happens here). `today` anchors the
/// current age and the future-date clamp; identical inputs and an
/// identical `today` produce identical geometry.
pub fn layout(
    birth: YearMonth,
    visits: &VisitMap,
    periods: &[ResidencePeriod],
    flags: &dyn FlagSource,
    today: YearMonth,
    config: &LayoutConfig,
) -> Result<TimelineOutput> {
    if visits.is_empty() {
        return Err(TimelineError::EmptySelection);
    }

    let current_age = today.age_since(birth);

    // Sanitize and order: ascending by visit age, then reversed so index 0
    // is the most recently visited country at the top of the chart. The
    // timeline grows from the bottom.
    let mut ordered: Vec<(VisitRecord, f64)> = visits
        .values()
        .map(|visit| {
            let clean = visit.sanitized(birth, today);
            let age = clean.age(birth);
            (clean, age)
        })
        .collect();
    ordered.sort_by(|a, b| a.1.total_cmp(&b.1));
    ordered.reverse();

    let n = ordered.len();
    let max_visit_age = ordered.iter().map(|(_, age)| *age).fold(0.0, f64::max);
    let x_axis_max = current_age.max(max_visit_age) + (current_age * 0.2).clamp(1.0, 2.0);

    // Vertical geometry. The chart grows with the entry count but never
    // shrinks below the minimum height; converting the fixed pixel margin
    // through pixels-per-row keeps the visual gap between bars constant in
    // pixels no matter how many rows there are.
    let chart_height_px = (n as f64 * config.slot_height_px()).max(config.min_chart_height_px);
    let pixels_per_row = chart_height_px / n as f64;
    let margin_rows = config.bar_margin_px / pixels_per_row;
    let bar_height = 1.0 - 2.0 * margin_rows;
    let flag_height = bar_height - 2.0 * margin_rows;

    tracing::debug!(
        entries = n,
        current_age,
        x_axis_max,
        chart_height_px,
        "computing timeline layout"
    );

    let entries: Vec<EntryLayout> = ordered
        .iter()
        .enumerate()
        .map(|(row, (visit, age))| {
            let bar = AgeSpan::new(*age, current_age);
            let band_parity = ((n - 1 - row) / config.band_size) % 2;

            // A residence period is drawn under a country's bar only when
            // the codes match, clipped to the bar and kept only with
            // positive length.
            let residence_spans: Vec<AgeSpan> = periods
                .iter()
                .filter(|period| period.country == visit.country)
                .filter_map(|period| period.age_span(birth).intersect(&bar))
                .collect();

            let flag = flags
                .flag(&visit.country)
                .map(|_| place_flag(*age, x_axis_max, flag_height, config));

            EntryLayout {
                country: visit.country.clone(),
                display_name: visit.display_name.clone(),
                row,
                visit_age: *age,
                bar,
                band_parity,
                bar_color: config.palette.bar_color(band_parity).to_string(),
                residence_color: config.palette.residence_color(band_parity).to_string(),
                residence_spans,
                flag,
                label: place_label(visit, *age, x_axis_max, config),
            }
        })
        .collect();

    let percent_of_age = if current_age > 0.0 {
        n as f64 / current_age * 100.0
    } else {
        0.0
    };
    let summary = Summary {
        countries_visited: n,
        percent_of_age,
        message: format!(
            "You have visited {n} countries, which is {percent_of_age:.1}% of your age."
        ),
    };

    Ok(TimelineOutput {
        summary,
        layout: TimelineLayout {
            chart_height_px,
            x_axis_max,
            current_age,
            bar_height,
            flag_height,
            entries,
            x_ticks: x_axis_ticks(current_age),
            y_ticks: y_axis_ticks(n),
            grid_lines: year_grid_lines(current_age),
        },
    })
}

/// Flag anchors left at the visit age; when that would overflow the right
/// edge it re-anchors centered, clamped inside the axis bounds.
fn place_flag(age: f64, x_axis_max: f64, flag_height: f64, config: &LayoutConfig) -> FlagPlacement {
    let width = config.flag_width_units;
    let (x, anchor) = if age + width > x_axis_max {
        let clamped = (x_axis_max - width / 2.0).min(age.max(width / 2.0));
        (clamped, HorizontalAnchor::Center)
    } else {
        (age, HorizontalAnchor::Left)
    };
    FlagPlacement {
        x,
        anchor,
        width,
        height: flag_height,
    }
}

/// Label defaults to the right of the flag; when that would overflow the
/// axis it flips to the left of the visit point, floored at 0. The flip is
/// independent of the flag's.
fn place_label(visit: &VisitRecord, age: f64, x_axis_max: f64, config: &LayoutConfig) -> LabelPlacement {
    let text = format!("{} ({:.1})", visit.display_name, age);
    let x = age + config.label_offset_units;
    if x + config.label_width_units > x_axis_max {
        LabelPlacement {
            x: (age - config.label_offset_units).max(0.0),
            anchor: HorizontalAnchor::Right,
            text,
        }
    } else {
        LabelPlacement {
            x,
            anchor: HorizontalAnchor::Left,
            text,
        }
    }
}
