//! Territory definitions - static map reference data.
//!
//! A `Territory` holds the immutable properties of one claimable map unit:
//! a display name ("Alabama", "France") and a map-locator code the
//! choropleth layer feeds to its plotting library. Which team currently
//! holds a territory is game state, stored separately in `GameState`.

use serde::{Deserialize, Serialize};

/// Unique identifier for a territory within a catalog.
///
/// Ids are assigned by the catalog at registration time and encode
/// catalog order: lower ids were registered earlier.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TerritoryId(pub u16);

impl TerritoryId {
    /// Create a new territory ID.
    #[must_use]
    pub const fn new(id: u16) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u16 {
        self.0
    }
}

impl std::fmt::Display for TerritoryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Territory({})", self.0)
    }
}

/// Map-locator code for a territory.
///
/// The render layer passes this straight to its choropleth backend:
/// U.S. state abbreviations for `locationmode = "USA-states"` style maps,
/// ISO 3166-1 alpha-3 codes for world maps.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Locator {
    /// Two-letter U.S. state or district abbreviation ("TX", "DC").
    StateAbbr(String),
    /// ISO 3166-1 alpha-3 country code ("FRA", "JPN").
    IsoAlpha3(String),
}

impl Locator {
    /// U.S. state abbreviation locator.
    pub fn state(abbr: impl Into<String>) -> Self {
        Self::StateAbbr(abbr.into())
    }

    /// ISO alpha-3 country code locator.
    pub fn country(code: impl Into<String>) -> Self {
        Self::IsoAlpha3(code.into())
    }

    /// Get the raw locator code.
    #[must_use]
    pub fn code(&self) -> &str {
        match self {
            Self::StateAbbr(code) | Self::IsoAlpha3(code) => code,
        }
    }
}

impl std::fmt::Display for Locator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

/// A claimable map unit.
///
/// ## Example
///
/// ```
/// use territory_duel::catalog::{Locator, Territory};
///
/// let texas = Territory::new("Texas", Locator::state("TX"));
/// assert_eq!(texas.name, "Texas");
/// assert_eq!(texas.locator.code(), "TX");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Territory {
    /// Display name shown in pickers and rosters.
    pub name: String,

    /// Map-locator code for the choropleth layer.
    pub locator: Locator,
}

impl Territory {
    /// Create a new territory.
    pub fn new(name: impl Into<String>, locator: Locator) -> Self {
        Self {
            name: name.into(),
            locator,
        }
    }
}
