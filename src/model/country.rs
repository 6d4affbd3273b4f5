//! Country identifiers and catalogue entries.
//!
//! The core treats country codes as opaque stable keys; everything it knows
//! about a country beyond its code (display name, continent) comes from the
//! catalogue collaborator.

use serde::{Deserialize, Serialize};
use std::fmt;

/// ISO 3166-1 alpha-2 country code, normalized to uppercase.
///
/// Used as the stable key correlating visits, residence periods, and flag
/// images. The core never interprets the code itself.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CountryCode(String);

impl CountryCode {
    /// Create a code, normalizing to uppercase.
    #[must_use]
    pub fn new(code: impl AsRef<str>) -> Self {
        Self(code.as_ref().trim().to_uppercase())
    }

    /// The normalized code string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CountryCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

/// Continent assignment for a catalogue entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Continent {
    Africa,
    Asia,
    Europe,
    NorthAmerica,
    Oceania,
    SouthAmerica,
    Antarctica,
}

impl Continent {
    /// Human-readable name.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Continent::Africa => "Africa",
            Continent::Asia => "Asia",
            Continent::Europe => "Europe",
            Continent::NorthAmerica => "North America",
            Continent::Oceania => "Oceania",
            Continent::SouthAmerica => "South America",
            Continent::Antarctica => "Antarctica",
        }
    }

    /// Case-insensitive lookup by display name.
    #[must_use]
    pub fn parse(name: &str) -> Option<Self> {
        let normalized = name.trim().to_lowercase();
        let all = [
            Continent::Africa,
            Continent::Asia,
            Continent::Europe,
            Continent::NorthAmerica,
            Continent::Oceania,
            Continent::SouthAmerica,
            Continent::Antarctica,
        ];
        all.into_iter()
            .find(|c| c.name().to_lowercase() == normalized)
    }
}

impl fmt::Display for Continent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A single catalogue entry: short display name, alpha-2 code, continent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryInfo {
    pub code: CountryCode,
    pub name: String,
    pub continent: Continent,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_is_normalized() {
        assert_eq!(CountryCode::new(" fr "), CountryCode::new("FR"));
        assert_eq!(CountryCode::new("de").as_str(), "DE");
    }

    #[test]
    fn continent_parse_roundtrip() {
        assert_eq!(
            Continent::parse("north america"),
            Some(Continent::NorthAmerica)
        );
        assert_eq!(Continent::parse("Atlantis"), None);
    }
}
