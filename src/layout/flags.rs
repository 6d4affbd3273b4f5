//! Flag image source abstraction.
//!
//! Flag bitmaps are fetched and cached outside the core; the engine only
//! needs a presence signal plus intrinsic dimensions per country code. The
//! caller resolves every lookup *before* invoking the engine; nothing here
//! performs I/O.

use crate::model::CountryCode;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};

/// Intrinsic pixel dimensions of a flag image; an opaque handle as far as
/// the engine is concerned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlagImage {
    pub width_px: u32,
    pub height_px: u32,
}

/// Supplies flag images by country code.
pub trait FlagSource {
    /// `Some` when a flag is available for the code, `None` otherwise.
    /// Absence degrades gracefully: the entry is still laid out and
    /// labeled, only the flag placement is omitted.
    fn flag(&self, code: &CountryCode) -> Option<FlagImage>;
}

impl FlagSource for HashMap<CountryCode, FlagImage> {
    fn flag(&self, code: &CountryCode) -> Option<FlagImage> {
        self.get(code).copied()
    }
}

impl FlagSource for BTreeMap<CountryCode, FlagImage> {
    fn flag(&self, code: &CountryCode) -> Option<FlagImage> {
        self.get(code).copied()
    }
}

/// A source with no flags at all; every entry renders label-only.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoFlags;

impl FlagSource for NoFlags {
    fn flag(&self, _code: &CountryCode) -> Option<FlagImage> {
        None
    }
}
