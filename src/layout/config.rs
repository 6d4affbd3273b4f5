//! Configuration for the layout engine.

use serde::{Deserialize, Serialize};

/// Bounds for the per-entry flag glyph height, in pixels.
pub const FLAG_HEIGHT_MIN_PX: f64 = 42.0;
pub const FLAG_HEIGHT_MAX_PX: f64 = 82.0;

/// Tunable geometry constants for the timeline chart.
///
/// The defaults reproduce the reference chart exactly; callers normally only
/// touch [`for_flag_height`](Self::for_flag_height) when the flag source
/// reports a different intrinsic glyph size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Minimum chart height in pixels, regardless of entry count.
    pub min_chart_height_px: f64,
    /// Flag glyph height in pixels; `slot = flag + slot_margin` gives the
    /// per-entry vertical allotment.
    pub flag_height_px: f64,
    /// Extra pixels per slot beyond the flag glyph.
    pub slot_margin_px: f64,
    /// Pixel margin above and below each bar. Converted to data units per
    /// chart so it looks constant regardless of entry count.
    pub bar_margin_px: f64,
    /// Flag glyph width in age units.
    pub flag_width_units: f64,
    /// Horizontal offset of the text label from the visit age, in age units.
    pub label_offset_units: f64,
    /// Estimated label width in age units, used for overflow flipping.
    pub label_width_units: f64,
    /// Rows per zebra band.
    pub band_size: usize,
    /// Chart colors.
    pub palette: Palette,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            min_chart_height_px: 600.0,
            flag_height_px: 62.0,
            slot_margin_px: 2.0,
            bar_margin_px: 1.0,
            flag_width_units: 2.5,
            label_offset_units: 2.7,
            label_width_units: 2.5,
            band_size: 5,
            palette: Palette::default(),
        }
    }
}

impl LayoutConfig {
    /// Derive a config from a flag glyph's intrinsic pixel height, clamped
    /// into the supported range.
    #[must_use]
    pub fn for_flag_height(height_px: f64) -> Self {
        Self {
            flag_height_px: height_px.clamp(FLAG_HEIGHT_MIN_PX, FLAG_HEIGHT_MAX_PX),
            ..Self::default()
        }
    }

    /// Per-entry vertical allotment in pixels.
    #[must_use]
    pub fn slot_height_px(&self) -> f64 {
        self.flag_height_px + self.slot_margin_px
    }
}

/// Chart color palette.
///
/// Zebra bands alternate between the light and dark bar greens; residence
/// spans use the matching gold so a band's accent stays tied to its parity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Palette {
    pub bar_light: String,
    pub bar_dark: String,
    pub residence_light: String,
    pub residence_dark: String,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            bar_light: "#d0f5df".to_string(),
            bar_dark: "#b2eac7".to_string(),
            residence_light: "#ffe066".to_string(),
            residence_dark: "#ffd700".to_string(),
        }
    }
}

impl Palette {
    /// Bar color for a zebra band parity.
    #[must_use]
    pub fn bar_color(&self, parity: usize) -> &str {
        if parity % 2 == 0 {
            &self.bar_light
        } else {
            &self.bar_dark
        }
    }

    /// Residence accent color for a zebra band parity.
    #[must_use]
    pub fn residence_color(&self, parity: usize) -> &str {
        if parity % 2 == 0 {
            &self.residence_light
        } else {
            &self.residence_dark
        }
    }
}
