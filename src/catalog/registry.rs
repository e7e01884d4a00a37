//! Territory catalog: the ordered reference list of claimable map units.
//!
//! The `TerritoryCatalog` is loaded once at startup and stays read-only for
//! the process lifetime. Registration order is significant: pickers and the
//! map snapshot present territories in catalog order, so iteration always
//! yields entries in the order they were registered.

use rustc_hash::FxHashMap;

use super::territory::{Locator, Territory, TerritoryId};

/// The 50 U.S. states plus the District of Columbia, with postal
/// abbreviations, in the order the reference map expects them.
const US_STATES: &[(&str, &str)] = &[
    ("Alabama", "AL"),
    ("Alaska", "AK"),
    ("Arizona", "AZ"),
    ("Arkansas", "AR"),
    ("California", "CA"),
    ("Colorado", "CO"),
    ("Connecticut", "CT"),
    ("Delaware", "DE"),
    ("Florida", "FL"),
    ("Georgia", "GA"),
    ("Hawaii", "HI"),
    ("Idaho", "ID"),
    ("Illinois", "IL"),
    ("Indiana", "IN"),
    ("Iowa", "IA"),
    ("Kansas", "KS"),
    ("Kentucky", "KY"),
    ("Louisiana", "LA"),
    ("Maine", "ME"),
    ("Maryland", "MD"),
    ("Massachusetts", "MA"),
    ("Michigan", "MI"),
    ("Minnesota", "MN"),
    ("Mississippi", "MS"),
    ("Missouri", "MO"),
    ("Montana", "MT"),
    ("Nebraska", "NE"),
    ("Nevada", "NV"),
    ("New Hampshire", "NH"),
    ("New Jersey", "NJ"),
    ("New Mexico", "NM"),
    ("New York", "NY"),
    ("North Carolina", "NC"),
    ("North Dakota", "ND"),
    ("Ohio", "OH"),
    ("Oklahoma", "OK"),
    ("Oregon", "OR"),
    ("Pennsylvania", "PA"),
    ("Rhode Island", "RI"),
    ("South Carolina", "SC"),
    ("South Dakota", "SD"),
    ("Tennessee", "TN"),
    ("Texas", "TX"),
    ("Utah", "UT"),
    ("Vermont", "VT"),
    ("Virginia", "VA"),
    ("Washington", "WA"),
    ("West Virginia", "WV"),
    ("Wisconsin", "WI"),
    ("Wyoming", "WY"),
    ("District of Columbia", "DC"),
];

/// Ordered registry of territory definitions.
///
/// Stores every claimable territory for a game and provides lookup by id
/// and by display name.
///
/// ## Example
///
/// ```
/// use territory_duel::catalog::{Locator, Territory, TerritoryCatalog};
///
/// let mut catalog = TerritoryCatalog::new();
/// let id = catalog.register(Territory::new("France", Locator::country("FRA")));
///
/// let found = catalog.get(id).unwrap();
/// assert_eq!(found.name, "France");
/// assert_eq!(catalog.id_of("France"), Some(id));
/// ```
#[derive(Clone, Debug, Default)]
pub struct TerritoryCatalog {
    entries: Vec<Territory>,
    by_name: FxHashMap<String, TerritoryId>,
}

impl TerritoryCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the built-in U.S. catalog: 50 states plus the District of
    /// Columbia, keyed by postal abbreviation.
    #[must_use]
    pub fn us_states() -> Self {
        let mut catalog = Self::new();
        for &(name, abbr) in US_STATES {
            catalog.register(Territory::new(name, Locator::state(abbr)));
        }
        catalog
    }

    /// Register a territory, assigning the next id in catalog order.
    ///
    /// Panics if a territory with the same display name already exists.
    pub fn register(&mut self, territory: Territory) -> TerritoryId {
        if self.by_name.contains_key(&territory.name) {
            panic!("Territory named {:?} already registered", territory.name);
        }
        let id = TerritoryId::new(self.entries.len() as u16);
        self.by_name.insert(territory.name.clone(), id);
        self.entries.push(territory);
        id
    }

    /// Get a territory definition by id.
    #[must_use]
    pub fn get(&self, id: TerritoryId) -> Option<&Territory> {
        self.entries.get(id.raw() as usize)
    }

    /// Look up a territory id by display name.
    #[must_use]
    pub fn id_of(&self, name: &str) -> Option<TerritoryId> {
        self.by_name.get(name).copied()
    }

    /// Check if an id refers to a catalog entry.
    #[must_use]
    pub fn contains(&self, id: TerritoryId) -> bool {
        (id.raw() as usize) < self.entries.len()
    }

    /// Get the number of territories in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the catalog is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over all territories in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (TerritoryId, &Territory)> {
        self.entries
            .iter()
            .enumerate()
            .map(|(i, t)| (TerritoryId::new(i as u16), t))
    }
}
