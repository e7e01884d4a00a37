//! Render-boundary snapshots.
//!
//! The UI rebuilds the whole page after every command: scores, the date
//! tie-break banner, and the choropleth. These types package that one
//! recompute-and-render pass as plain values, so the presentation layer
//! never reaches into `GameState` internals.
//!
//! Everything here is derived data. Nothing is cached against mutation;
//! capture a fresh snapshot after each applied command.

use serde::{Deserialize, Serialize};

use crate::catalog::Territory;
use crate::core::{GameState, Team};
use crate::game::Duel;

/// Who holds a map unit, for choropleth coloring.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Ownership {
    Red,
    Blue,
    Unclaimed,
}

impl Ownership {
    /// The fill color the map legend uses for this state.
    #[must_use]
    pub const fn color(self) -> &'static str {
        match self {
            Ownership::Red => "red",
            Ownership::Blue => "blue",
            Ownership::Unclaimed => "lightgray",
        }
    }
}

impl From<Option<Team>> for Ownership {
    fn from(owner: Option<Team>) -> Self {
        match owner {
            Some(Team::Red) => Ownership::Red,
            Some(Team::Blue) => Ownership::Blue,
            None => Ownership::Unclaimed,
        }
    }
}

/// Both scores plus the tie-break and leader, computed in one pass.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scoreboard {
    /// Red's claim count plus bonus.
    pub red: u32,
    /// Blue's claim count plus bonus.
    pub blue: u32,
    /// Team owning the +10 date bonus, if the dates differ.
    pub bonus_owner: Option<Team>,
    /// Team ahead on total score, if any.
    pub leader: Option<Team>,
}

impl Scoreboard {
    /// Compute the scoreboard for a session.
    #[must_use]
    pub fn compute(duel: &Duel, state: &GameState) -> Self {
        Self {
            red: duel.score(state, Team::Red),
            blue: duel.score(state, Team::Blue),
            bonus_owner: duel.tie_break_owner(state),
            leader: duel.leader(state),
        }
    }

    /// A team's total score.
    #[must_use]
    pub fn score(&self, team: Team) -> u32 {
        match team {
            Team::Red => self.red,
            Team::Blue => self.blue,
        }
    }
}

/// One choropleth row: a territory and its fill.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapEntry {
    pub territory: Territory,
    pub ownership: Ownership,
}

/// The full map in catalog order, ready for the choropleth layer.
///
/// ## Example
///
/// ```
/// use territory_duel::game::Duel;
/// use territory_duel::view::{MapSnapshot, Ownership};
///
/// let duel = Duel::us_states();
/// let state = duel.open_session();
///
/// let map = MapSnapshot::capture(&duel, &state);
/// assert_eq!(map.len(), 51);
/// assert!(map.iter().all(|e| e.ownership == Ownership::Unclaimed));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MapSnapshot {
    entries: Vec<MapEntry>,
}

impl MapSnapshot {
    /// Capture the current ownership of every catalog territory.
    #[must_use]
    pub fn capture(duel: &Duel, state: &GameState) -> Self {
        let entries = duel
            .catalog()
            .iter()
            .map(|(id, territory)| MapEntry {
                territory: territory.clone(),
                ownership: Ownership::from(state.owner(id)),
            })
            .collect();

        Self { entries }
    }

    /// Number of map rows (the catalog size).
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the snapshot is empty (empty catalog).
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over map rows in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &MapEntry> {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn opened() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 8, 30).unwrap()
    }

    #[test]
    fn test_ownership_colors() {
        assert_eq!(Ownership::Red.color(), "red");
        assert_eq!(Ownership::Blue.color(), "blue");
        assert_eq!(Ownership::Unclaimed.color(), "lightgray");
    }

    #[test]
    fn test_ownership_from_owner() {
        assert_eq!(Ownership::from(Some(Team::Red)), Ownership::Red);
        assert_eq!(Ownership::from(Some(Team::Blue)), Ownership::Blue);
        assert_eq!(Ownership::from(None), Ownership::Unclaimed);
    }

    #[test]
    fn test_scoreboard_compute() {
        let duel = Duel::us_states();
        let mut state = GameState::new(opened());

        let texas = duel.catalog().id_of("Texas").unwrap();
        duel.claim(&mut state, Team::Blue, texas).unwrap();
        duel.set_date(&mut state, Team::Red, NaiveDate::from_ymd_opt(1999, 9, 9).unwrap())
            .unwrap();

        let board = Scoreboard::compute(&duel, &state);
        assert_eq!(board.red, 10);
        assert_eq!(board.blue, 1);
        assert_eq!(board.bonus_owner, Some(Team::Red));
        assert_eq!(board.leader, Some(Team::Red));
        assert_eq!(board.score(Team::Blue), 1);
    }

    #[test]
    fn test_map_snapshot_tracks_claims_in_catalog_order() {
        let duel = Duel::us_states();
        let mut state = GameState::new(opened());

        let alaska = duel.catalog().id_of("Alaska").unwrap();
        duel.claim(&mut state, Team::Red, alaska).unwrap();

        let map = MapSnapshot::capture(&duel, &state);
        assert_eq!(map.len(), 51);

        let rows: Vec<_> = map.iter().collect();
        assert_eq!(rows[0].territory.name, "Alabama");
        assert_eq!(rows[0].ownership, Ownership::Unclaimed);
        assert_eq!(rows[1].territory.name, "Alaska");
        assert_eq!(rows[1].ownership, Ownership::Red);
    }

    #[test]
    fn test_map_snapshot_is_detached_from_state() {
        let duel = Duel::us_states();
        let mut state = GameState::new(opened());

        let map = MapSnapshot::capture(&duel, &state);

        let ohio = duel.catalog().id_of("Ohio").unwrap();
        duel.claim(&mut state, Team::Blue, ohio).unwrap();

        // Captured before the claim; still all unclaimed
        assert!(map.iter().all(|e| e.ownership == Ownership::Unclaimed));
    }
}
