//! Error kinds surfaced to the presentation layer.
//!
//! Every error here is recoverable: the command leaves the state untouched,
//! the UI shows a warning, and the session continues. No command can crash
//! the process.

use chrono::NaiveDate;
use thiserror::Error;

use crate::catalog::TerritoryId;

use super::team::Team;

/// A rejected command.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The territory is already held by a team (either one).
    #[error("{territory} has already been claimed by {owner}")]
    AlreadyClaimed {
        territory: TerritoryId,
        owner: Team,
    },

    /// No territory was selected, or the selection is not a catalog entry.
    #[error("no valid territory selected")]
    InvalidSelection,

    /// The date falls outside the supported calendar range.
    #[error("date {date} is outside the supported range {min} to {max}")]
    OutOfRange {
        date: NaiveDate,
        min: NaiveDate,
        max: NaiveDate,
    },
}
