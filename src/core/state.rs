//! Session game state.
//!
//! ## GameState
//!
//! Everything one session owns:
//! - The claims map (territory → owning team; absence means unclaimed)
//! - Per-team claim rosters, in the order claims were made
//! - One reference date per team
//! - The day the session opened (upper bound for `set_date`)
//!
//! Claims are terminal: a territory moves from unclaimed to claimed-by-one-
//! team exactly once per session and never moves again. The invariant that
//! no territory is held by both teams holds because the claims map is
//! private and all mutation goes through the rules in [`crate::game`].
//!
//! Uses an `im` persistent map for the claims so the render boundary can
//! snapshot state in O(1).

use chrono::NaiveDate;
use im::HashMap as ImHashMap;
use serde::{Deserialize, Serialize};

use crate::catalog::TerritoryId;

use super::team::{Team, TeamMap};

/// Full state of one game session.
///
/// Created fresh per user session, mutated only by the claim and set-date
/// commands, and dropped with the session. There is no persistence and no
/// sharing between sessions.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameState {
    /// Territory ownership. A territory appears at most once.
    claims: ImHashMap<TerritoryId, Team>,

    /// Claims per team, in claim order (drives the sidebar rosters).
    rosters: TeamMap<Vec<TerritoryId>>,

    /// Reference date per team, defaults to the session's opening day.
    dates: TeamMap<NaiveDate>,

    /// Calendar day the session was created. Captured once so date
    /// validation stays deterministic for the session's lifetime.
    opened: NaiveDate,
}

impl GameState {
    /// Create a fresh state for a session opened on the given day.
    ///
    /// Both reference dates start at `opened`.
    #[must_use]
    pub fn new(opened: NaiveDate) -> Self {
        Self {
            claims: ImHashMap::new(),
            rosters: TeamMap::with_default(),
            dates: TeamMap::with_value(opened),
            opened,
        }
    }

    /// The day this session was created.
    #[must_use]
    pub fn opened(&self) -> NaiveDate {
        self.opened
    }

    // === Claims ===

    /// The team holding a territory, or `None` if unclaimed.
    #[must_use]
    pub fn owner(&self, territory: TerritoryId) -> Option<Team> {
        self.claims.get(&territory).copied()
    }

    /// Number of territories a team holds.
    #[must_use]
    pub fn claim_count(&self, team: Team) -> usize {
        self.rosters[team].len()
    }

    /// Total claims made this session, both teams combined.
    #[must_use]
    pub fn total_claims(&self) -> usize {
        self.claims.len()
    }

    /// A team's claims in the order they were made.
    #[must_use]
    pub fn roster(&self, team: Team) -> &[TerritoryId] {
        &self.rosters[team]
    }

    /// Iterate over all claims as (territory, owner) pairs.
    ///
    /// Iteration order is unspecified; use [`GameState::roster`] or the
    /// catalog for ordered views.
    pub fn claims(&self) -> impl Iterator<Item = (TerritoryId, Team)> + '_ {
        self.claims.iter().map(|(&t, &team)| (t, team))
    }

    /// Record a claim. Caller must have verified the territory is unclaimed.
    pub(crate) fn record_claim(&mut self, team: Team, territory: TerritoryId) {
        debug_assert!(self.owner(territory).is_none());
        self.claims.insert(territory, team);
        self.rosters[team].push(territory);
    }

    // === Reference dates ===

    /// A team's reference date.
    #[must_use]
    pub fn date(&self, team: Team) -> NaiveDate {
        self.dates[team]
    }

    /// Overwrite a team's reference date. Caller must have range-checked it.
    pub(crate) fn record_date(&mut self, team: Team, date: NaiveDate) {
        self.dates[team] = date;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_new_state_is_empty() {
        let state = GameState::new(day(2026, 8, 30));

        assert_eq!(state.total_claims(), 0);
        assert_eq!(state.claim_count(Team::Red), 0);
        assert_eq!(state.claim_count(Team::Blue), 0);
        assert!(state.roster(Team::Red).is_empty());
        assert_eq!(state.owner(TerritoryId::new(0)), None);
    }

    #[test]
    fn test_dates_default_to_opening_day() {
        let opened = day(2026, 8, 30);
        let state = GameState::new(opened);

        assert_eq!(state.opened(), opened);
        assert_eq!(state.date(Team::Red), opened);
        assert_eq!(state.date(Team::Blue), opened);
    }

    #[test]
    fn test_record_claim_updates_both_views() {
        let mut state = GameState::new(day(2026, 1, 1));
        let t = TerritoryId::new(4);

        state.record_claim(Team::Red, t);

        assert_eq!(state.owner(t), Some(Team::Red));
        assert_eq!(state.claim_count(Team::Red), 1);
        assert_eq!(state.claim_count(Team::Blue), 0);
        assert_eq!(state.total_claims(), 1);
        assert_eq!(state.roster(Team::Red), &[t]);
    }

    #[test]
    fn test_roster_preserves_claim_order() {
        let mut state = GameState::new(day(2026, 1, 1));
        let first = TerritoryId::new(9);
        let second = TerritoryId::new(2);

        state.record_claim(Team::Blue, first);
        state.record_claim(Team::Blue, second);

        assert_eq!(state.roster(Team::Blue), &[first, second]);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut state = GameState::new(day(2026, 1, 1));
        state.record_claim(Team::Red, TerritoryId::new(0));

        let snapshot = state.clone();
        state.record_claim(Team::Blue, TerritoryId::new(1));

        assert_eq!(snapshot.total_claims(), 1);
        assert_eq!(state.total_claims(), 2);
        assert_eq!(snapshot.owner(TerritoryId::new(1)), None);
    }

    #[test]
    fn test_state_serialization() {
        let mut state = GameState::new(day(2026, 8, 30));
        state.record_claim(Team::Red, TerritoryId::new(3));
        state.record_date(Team::Blue, day(2020, 1, 1));

        let json = serde_json::to_string(&state).unwrap();
        let back: GameState = serde_json::from_str(&json).unwrap();
        assert_eq!(state, back);
    }
}
