//! Game rules: command handling and score/tie-break queries.
//!
//! `Duel` pairs a read-only [`TerritoryCatalog`] with the rules of the
//! claiming game. It owns no session state; every operation takes an
//! explicit [`GameState`] reference, so sessions stay independent and the
//! rules object can be shared for the process lifetime.
//!
//! ## Scoring
//!
//! A team's score is its claim count, plus a flat +10 bonus if its
//! reference date is *strictly earlier* than the rival's (earliest date
//! wins the tie-break; equal dates award no bonus to anyone).
//!
//! ## Supported date range
//!
//! `set_date` accepts January 1st of year 1 through the session's opening
//! day. Anything else is rejected with `OutOfRange`.

use chrono::NaiveDate;

use crate::catalog::{Territory, TerritoryCatalog, TerritoryId};
use crate::core::{Command, GameError, GameEvent, GameState, Team};

/// Earliest supported reference date: January 1st of year 1.
fn min_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(1, 1, 1).expect("year 1 is a valid chrono date")
}

/// The two-team claiming game over a fixed territory catalog.
///
/// ## Example
///
/// ```
/// use territory_duel::core::Team;
/// use territory_duel::game::Duel;
///
/// let duel = Duel::us_states();
/// let mut state = duel.open_session();
///
/// let alabama = duel.catalog().id_of("Alabama").unwrap();
/// duel.claim(&mut state, Team::Red, alabama).unwrap();
///
/// assert_eq!(state.owner(alabama), Some(Team::Red));
/// assert_eq!(duel.score(&state, Team::Red), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Duel {
    catalog: TerritoryCatalog,
}

impl Duel {
    /// Create a game over the given catalog.
    #[must_use]
    pub fn new(catalog: TerritoryCatalog) -> Self {
        Self { catalog }
    }

    /// Create a game over the built-in U.S. catalog (50 states + DC).
    #[must_use]
    pub fn us_states() -> Self {
        Self::new(TerritoryCatalog::us_states())
    }

    /// The territory catalog this game is played over.
    #[must_use]
    pub fn catalog(&self) -> &TerritoryCatalog {
        &self.catalog
    }

    /// Open a fresh session dated today.
    ///
    /// Both reference dates start at today, so neither team owns the
    /// tie-break until someone picks a date.
    #[must_use]
    pub fn open_session(&self) -> GameState {
        GameState::new(chrono::Local::now().date_naive())
    }

    // === Commands ===

    /// Apply a UI command to a session.
    pub fn apply(&self, state: &mut GameState, command: Command) -> Result<GameEvent, GameError> {
        match command {
            Command::Claim { team, selection } => {
                let territory = selection.ok_or(GameError::InvalidSelection)?;
                self.claim(state, team, territory)
            }
            Command::SetDate { team, date } => self.set_date(state, team, date),
        }
    }

    /// Claim a territory for a team.
    ///
    /// Fails with `InvalidSelection` if the territory is not a catalog
    /// entry, and with `AlreadyClaimed` if either team already holds it.
    /// The team's reference date is unaffected either way.
    pub fn claim(
        &self,
        state: &mut GameState,
        team: Team,
        territory: TerritoryId,
    ) -> Result<GameEvent, GameError> {
        if !self.catalog.contains(territory) {
            return Err(GameError::InvalidSelection);
        }
        if let Some(owner) = state.owner(territory) {
            return Err(GameError::AlreadyClaimed { territory, owner });
        }

        state.record_claim(team, territory);
        Ok(GameEvent::TerritoryClaimed { team, territory })
    }

    /// Overwrite a team's reference date.
    ///
    /// Fails with `OutOfRange` unless the date falls between year 1 and
    /// the session's opening day, inclusive.
    pub fn set_date(
        &self,
        state: &mut GameState,
        team: Team,
        date: NaiveDate,
    ) -> Result<GameEvent, GameError> {
        let min = min_date();
        let max = state.opened();
        if date < min || date > max {
            return Err(GameError::OutOfRange { date, min, max });
        }

        state.record_date(team, date);
        Ok(GameEvent::DateSet { team, date })
    }

    // === Queries ===

    /// A team's score: claim count plus the +10 tie-break bonus if its
    /// reference date is strictly earlier than the rival's.
    #[must_use]
    pub fn score(&self, state: &GameState, team: Team) -> u32 {
        let mut score = state.claim_count(team) as u32;
        if self.tie_break_owner(state) == Some(team) {
            score += 10;
        }
        score
    }

    /// The team holding the date tie-break (strictly earlier date), or
    /// `None` if the dates are equal.
    #[must_use]
    pub fn tie_break_owner(&self, state: &GameState) -> Option<Team> {
        use std::cmp::Ordering;

        match state.date(Team::Red).cmp(&state.date(Team::Blue)) {
            Ordering::Less => Some(Team::Red),
            Ordering::Greater => Some(Team::Blue),
            Ordering::Equal => None,
        }
    }

    /// The team currently ahead on score, or `None` on a tie.
    #[must_use]
    pub fn leader(&self, state: &GameState) -> Option<Team> {
        use std::cmp::Ordering;

        match self
            .score(state, Team::Red)
            .cmp(&self.score(state, Team::Blue))
        {
            Ordering::Greater => Some(Team::Red),
            Ordering::Less => Some(Team::Blue),
            Ordering::Equal => None,
        }
    }

    /// The team holding a territory, or `None` if unclaimed.
    #[must_use]
    pub fn owner(&self, state: &GameState, territory: TerritoryId) -> Option<Team> {
        state.owner(territory)
    }

    /// Territories still open to claim, in catalog order.
    ///
    /// Both teams see the identical list: a territory claimed by either
    /// side is gone from everyone's picker. Recomputed lazily per call.
    pub fn available_territories<'a>(
        &'a self,
        state: &'a GameState,
    ) -> impl Iterator<Item = &'a Territory> + 'a {
        self.catalog
            .iter()
            .filter(move |(id, _)| state.owner(*id).is_none())
            .map(|(_, territory)| territory)
    }

    /// A team's claimed territories, in the order they were claimed.
    pub fn claimed_territories<'a>(
        &'a self,
        state: &'a GameState,
        team: Team,
    ) -> impl Iterator<Item = &'a Territory> + 'a {
        state
            .roster(team)
            .iter()
            .filter_map(move |&id| self.catalog.get(id))
    }
}
