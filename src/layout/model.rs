//! The layout model handed to the rendering collaborator.
//!
//! Every x-coordinate is in age units, every y-coordinate in row-index
//! units; the only pixel value is the overall chart height. The model is
//! rebuilt from scratch on every request and never mutated afterwards.

use crate::model::{AgeSpan, CountryCode};
use serde::{Deserialize, Serialize};

/// Everything a renderer needs: the headline summary plus the full chart
/// geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineOutput {
    pub summary: Summary,
    pub layout: TimelineLayout,
}

/// Headline statistic reported above the chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    pub countries_visited: usize,
    /// `n / current_age * 100`, 0 when the current age is 0.
    pub percent_of_age: f64,
    /// Pre-formatted user-facing sentence.
    pub message: String,
}

/// Complete chart geometry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimelineLayout {
    /// Total chart height in pixels.
    pub chart_height_px: f64,
    /// Right edge of the x-axis in age units (includes padding).
    pub x_axis_max: f64,
    /// The subject's age at `today`, in fractional years.
    pub current_age: f64,
    /// Bar height in row-index units (slightly under 1 so the pixel margin
    /// between bars stays constant).
    pub bar_height: f64,
    /// Flag glyph height in row-index units.
    pub flag_height: f64,
    /// Per-country rows; index 0 is the most recently visited country,
    /// rendered at the top.
    pub entries: Vec<EntryLayout>,
    pub x_ticks: Vec<AxisTick>,
    pub y_ticks: Vec<AxisTick>,
    /// Vertical guide lines, one per whole year of age.
    pub grid_lines: Vec<GridLine>,
}

/// Geometry for a single visited-country row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EntryLayout {
    pub country: CountryCode,
    pub display_name: String,
    /// Row index from the top of the chart.
    pub row: usize,
    /// Age at first visit, after clamping.
    pub visit_age: f64,
    /// The main bar, spanning visit age to current age.
    pub bar: AgeSpan,
    /// Zebra band parity (0 or 1) this row belongs to.
    pub band_parity: usize,
    /// Bar fill color for this band.
    pub bar_color: String,
    /// Residence accent color for this band.
    pub residence_color: String,
    /// Residence intervals clipped to the bar, positive-length only.
    pub residence_spans: Vec<AgeSpan>,
    /// Flag glyph placement; `None` when the flag source has no image.
    pub flag: Option<FlagPlacement>,
    pub label: LabelPlacement,
}

/// Horizontal anchoring of a placed element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAnchor {
    Left,
    Center,
    Right,
}

/// Flag glyph placement, in age / row-index units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FlagPlacement {
    pub x: f64,
    pub anchor: HorizontalAnchor,
    /// Glyph width in age units.
    pub width: f64,
    /// Glyph height in row-index units.
    pub height: f64,
}

/// Text annotation placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelPlacement {
    pub x: f64,
    pub anchor: HorizontalAnchor,
    /// "Name (age)" with the age at one decimal place.
    pub text: String,
}

/// One axis tick: a position (age units on x, row-index units on y) and its
/// label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub position: f64,
    pub label: String,
}

/// Emphasis level of a vertical year grid line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GridEmphasis {
    /// Every fifth year, including zero.
    Major,
    Minor,
}

/// A vertical guide line at a whole year of age.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridLine {
    pub age: f64,
    pub emphasis: GridEmphasis,
}
