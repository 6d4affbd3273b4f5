//! **Temporal data model and layout engine for a countries-visited-by-age timeline chart.**
//!
//! `country-timeline` turns raw user selections (a birth date, a set of
//! visited countries with first-visit dates, and zero or more residence
//! periods) into (a) a validated, non-overlapping set of residence
//! intervals and (b) a complete, deterministic layout model for a timeline
//! chart showing age-of-first-visit per country alongside residence bars.
//!
//! The crate owns no I/O: rendering, flag fetching, and the input surface
//! are external collaborators that exchange plain data with the core. Every
//! entry point takes an explicit `today` anchor, so identical inputs always
//! produce identical geometry.
//!
//! ## Core Concepts & Modules
//!
//! - **[`model`]**: the canonical data structures: [`YearMonth`] calendar
//!   points, [`VisitRecord`]s keyed by [`CountryCode`], raw
//!   [`ResidenceRow`]s and validated [`ResidencePeriod`]s, and half-open
//!   [`AgeSpan`]s in age-space.
//! - **[`resolver`]**: the Interval Resolver. Auto-corrects inverted
//!   intervals, truncates at the first incomplete row, synthesizes the
//!   default row, and computes overlap-aware date options. Nothing here
//!   ever rejects input.
//! - **[`layout`]**: the Timeline Layout Engine. Converts visits and
//!   resolved periods into bar spans, flag and label placements, zebra
//!   bands, and axis ticks, all in age units (x) and row-index units (y).
//! - **[`catalog`]**: the fixed UN-member country table (name, alpha-2
//!   code, continent) used to fill display names.
//! - **[`pipeline`]**: orchestration from the JSON request shape to a
//!   finished [`TimelineOutput`].
//!
//! ## Getting Started
//!
//! ```
//! use country_timeline::model::{CountryCode, VisitMap, VisitRecord, YearMonth};
//! use country_timeline::layout::{layout, LayoutConfig, NoFlags};
//!
//! fn main() -> Result<(), country_timeline::TimelineError> {
//!     let birth = YearMonth::new(1990, 1);
//!     let today = YearMonth::new(2025, 8);
//!
//!     let mut visits = VisitMap::new();
//!     let fr = CountryCode::new("FR");
//!     visits.insert(
//!         fr.clone(),
//!         VisitRecord::new(fr, "France", YearMonth::new(2010, 6)),
//!     );
//!
//!     let output = layout(birth, &visits, &[], &NoFlags, today, &LayoutConfig::default())?;
//!     assert_eq!(output.summary.countries_visited, 1);
//!     assert_eq!(output.layout.entries[0].label.text, "France (20.4)");
//!     Ok(())
//! }
//! ```
//!
//! ## Validating residence rows
//!
//! ```
//! use country_timeline::model::{CountryCode, ResidenceRow, YearMonth};
//! use country_timeline::resolver::resolve;
//!
//! let birth = YearMonth::new(1990, 1);
//! let today = YearMonth::new(2025, 8);
//! let available = vec![CountryCode::new("FR")];
//!
//! // An inverted interval is snapped, never rejected.
//! let raw = vec![ResidenceRow::new(
//!     CountryCode::new("FR"),
//!     YearMonth::new(2010, 5),
//!     YearMonth::new(2008, 2),
//! )];
//! let resolved = resolve(birth, today, &raw, &available);
//! let periods = resolved.periods(birth, today);
//! assert_eq!(periods[0].from, periods[0].until);
//! ```

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
// Pedantic lints: allow categories that are design choices for this codebase
#![allow(
    // Cast safety: usize/f64 casts are pervasive in layout math and all
    // values are bounded in practice
    clippy::cast_precision_loss,
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    clippy::cast_possible_wrap,
    clippy::missing_errors_doc,
    clippy::missing_panics_doc,
    // Variable names like `from`/`form` or `old`/`new` are clear in context
    clippy::similar_names
)]

pub mod catalog;
pub mod error;
pub mod layout;
pub mod model;
pub mod pipeline;
pub mod resolver;

// Re-export main types for convenience
pub use error::{Result, TimelineError};
pub use layout::{
    layout, AxisTick, EntryLayout, FlagImage, FlagSource, LayoutConfig, NoFlags, Summary,
    TimelineLayout, TimelineOutput,
};
pub use model::{
    AgeSpan, Continent, CountryCode, CountryInfo, ResidencePeriod, ResidenceRow, VisitMap,
    VisitRecord, YearMonth,
};
pub use pipeline::{ResidenceInput, TimelineRequest, VisitInput};
pub use resolver::{legal_from_options, legal_until_options, resolve, ResolvedResidences};
