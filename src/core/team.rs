//! Team identification and per-team data storage.
//!
//! ## Team
//!
//! Exactly two teams compete: `Red` and `Blue`. There is no N-team mode;
//! every API that needs "the other side" uses `rival()`.
//!
//! ## TeamMap
//!
//! Per-team data storage backed by a fixed two-slot array for O(1) access.
//! Supports iteration and indexing by `Team`.

use serde::{Deserialize, Serialize};
use std::ops::{Index, IndexMut};

/// One of the two competing teams.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Team {
    Red,
    Blue,
}

impl Team {
    /// Get the opposing team.
    ///
    /// ```
    /// use territory_duel::core::Team;
    ///
    /// assert_eq!(Team::Red.rival(), Team::Blue);
    /// assert_eq!(Team::Blue.rival(), Team::Red);
    /// ```
    #[must_use]
    pub const fn rival(self) -> Team {
        match self {
            Team::Red => Team::Blue,
            Team::Blue => Team::Red,
        }
    }

    /// Both teams, Red first.
    #[must_use]
    pub const fn both() -> [Team; 2] {
        [Team::Red, Team::Blue]
    }

    /// Get the team's slot index (Red = 0, Blue = 1).
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Team::Red => 0,
            Team::Blue => 1,
        }
    }
}

impl std::fmt::Display for Team {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Team::Red => f.write_str("Red"),
            Team::Blue => f.write_str("Blue"),
        }
    }
}

/// Per-team data storage with O(1) access.
///
/// Backed by a `[T; 2]` with one entry per team.
/// Use `TeamMap::new()` to create with a factory function,
/// or `TeamMap::with_value()` to initialize both entries to the same value.
///
/// ## Example
///
/// ```
/// use territory_duel::core::{Team, TeamMap};
///
/// // Create with factory
/// let mut captures: TeamMap<u32> = TeamMap::new(|_| 0);
///
/// // Access by team
/// assert_eq!(captures[Team::Red], 0);
///
/// // Modify
/// captures[Team::Blue] = 3;
/// assert_eq!(captures[Team::Blue], 3);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TeamMap<T> {
    data: [T; 2],
}

impl<T> TeamMap<T> {
    /// Create a new TeamMap with values from a factory function.
    ///
    /// The factory receives the `Team` for each slot.
    pub fn new(factory: impl Fn(Team) -> T) -> Self {
        Self {
            data: [factory(Team::Red), factory(Team::Blue)],
        }
    }

    /// Create a new TeamMap with both entries set to the same value.
    pub fn with_value(value: T) -> Self
    where
        T: Clone,
    {
        Self::new(|_| value.clone())
    }

    /// Create a new TeamMap with default values.
    pub fn with_default() -> Self
    where
        T: Default,
    {
        Self::new(|_| T::default())
    }

    /// Get a reference to a team's data.
    #[must_use]
    pub fn get(&self, team: Team) -> &T {
        &self.data[team.index()]
    }

    /// Get a mutable reference to a team's data.
    pub fn get_mut(&mut self, team: Team) -> &mut T {
        &mut self.data[team.index()]
    }

    /// Iterate over (Team, &T) pairs, Red first.
    pub fn iter(&self) -> impl Iterator<Item = (Team, &T)> {
        Team::both().into_iter().zip(self.data.iter())
    }
}

impl<T> Index<Team> for TeamMap<T> {
    type Output = T;

    fn index(&self, team: Team) -> &Self::Output {
        self.get(team)
    }
}

impl<T> IndexMut<Team> for TeamMap<T> {
    fn index_mut(&mut self, team: Team) -> &mut Self::Output {
        self.get_mut(team)
    }
}
