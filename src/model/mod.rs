//! Canonical data structures for the timeline core.
//!
//! Raw user selections (birth date, visited countries with first-visit
//! dates, residence rows) are normalized into these structures before any
//! geometry is computed. Everything here is plain data: serde-serializable,
//! cheap to clone, and free of I/O.

mod country;
mod date;
mod residence;
mod span;
mod visit;

pub use country::*;
pub use date::*;
pub use residence::*;
pub use span::*;
pub use visit::*;
