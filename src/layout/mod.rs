//! Timeline Layout Engine: validated temporal data in, chart geometry out.
//!
//! Depends on the resolver's output but not on the resolver itself. All
//! coordinates in the produced [`TimelineLayout`] are in age units (x) and
//! row-index units (y); the renderer owns every pixel-level decision except
//! the overall chart height, which is fixed here so per-row pixel margins
//! stay constant.

mod config;
mod engine;
mod flags;
mod model;
mod ticks;

pub use config::{LayoutConfig, Palette, FLAG_HEIGHT_MAX_PX, FLAG_HEIGHT_MIN_PX};
pub use engine::layout;
pub use flags::{FlagImage, FlagSource, NoFlags};
pub use model::{
    AxisTick, EntryLayout, FlagPlacement, GridEmphasis, GridLine, HorizontalAnchor,
    LabelPlacement, Summary, TimelineLayout, TimelineOutput,
};
pub use ticks::{x_axis_ticks, y_axis_ticks, year_grid_lines};
