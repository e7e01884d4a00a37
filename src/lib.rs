//! # territory-duel
//!
//! The logical core of a two-team map-claiming game: Red and Blue claim
//! U.S. states or world countries from a fixed catalog, each team holds a
//! reference date, and the side with more claims plus a flat +10
//! date-bonus leads.
//!
//! ## Design Principles
//!
//! 1. **No ambient state**: Every command and query takes an explicit
//!    `GameState` reference owned by the session. Nothing global, nothing
//!    implicit.
//!
//! 2. **One enforcement point per invariant**: The claims map is private;
//!    the no-double-claim rule lives in `Duel::claim` and nowhere else.
//!
//! 3. **Pure render boundary**: The crate computes values (scores, map
//!    snapshots, rosters) and never renders. The UI layer consumes the
//!    `view` types and redraws after every applied command.
//!
//! ## Modules
//!
//! - `core`: Teams, session state, commands, errors
//! - `catalog`: Territory reference data, loaded once and read-only
//! - `game`: Rules - claim/date commands and score/tie-break queries
//! - `view`: Scoreboard and choropleth snapshots for the render pass
//! - `session`: In-memory store of independent sessions
//!
//! ## Example
//!
//! ```
//! use territory_duel::core::{Command, Team};
//! use territory_duel::game::Duel;
//! use territory_duel::view::Scoreboard;
//!
//! let duel = Duel::us_states();
//! let mut state = duel.open_session();
//!
//! let georgia = duel.catalog().id_of("Georgia").unwrap();
//! duel.apply(&mut state, Command::Claim {
//!     team: Team::Blue,
//!     selection: Some(georgia),
//! }).unwrap();
//!
//! let board = Scoreboard::compute(&duel, &state);
//! assert_eq!(board.blue, 1);
//! ```

pub mod catalog;
pub mod core;
pub mod game;
pub mod session;
pub mod view;

// Re-export commonly used types
pub use crate::catalog::{Locator, Territory, TerritoryCatalog, TerritoryId};
pub use crate::core::{Command, GameError, GameEvent, GameState, Team, TeamMap};
pub use crate::game::Duel;
pub use crate::session::{SessionId, SessionStore};
pub use crate::view::{MapEntry, MapSnapshot, Ownership, Scoreboard};
