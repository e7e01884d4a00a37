//! Command and event values crossing the UI boundary.
//!
//! Widget callbacks never mutate state directly. The presentation layer
//! turns each UI event into a `Command` value and submits it to
//! [`crate::game::Duel::apply`], which either returns the `GameEvent` the
//! UI announces ("Red claimed Alabama!") or a [`super::GameError`] it
//! shows as a warning.
//!
//! A claim carries the raw picker selection: `None` models the "Select a
//! state" placeholder still being selected.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::catalog::TerritoryId;

use super::team::Team;

/// A state-mutating request from the UI.
///
/// ## Example
///
/// ```
/// use territory_duel::core::{Command, Team};
/// use territory_duel::catalog::TerritoryId;
///
/// // Claim button pressed with a territory picked
/// let claim = Command::Claim {
///     team: Team::Red,
///     selection: Some(TerritoryId::new(0)),
/// };
///
/// // Claim button pressed with the placeholder still selected
/// let empty = Command::Claim { team: Team::Blue, selection: None };
/// # let _ = (claim, empty);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Command {
    /// Claim the selected territory for a team.
    Claim {
        team: Team,
        /// Picker selection; `None` is the "none selected" sentinel.
        selection: Option<TerritoryId>,
    },

    /// Overwrite a team's reference date.
    SetDate { team: Team, date: NaiveDate },
}

/// A successfully applied command, for the UI's success banner.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameEvent {
    /// A territory changed from unclaimed to claimed.
    TerritoryClaimed { team: Team, territory: TerritoryId },

    /// A team's reference date changed.
    DateSet { team: Team, date: NaiveDate },
}
