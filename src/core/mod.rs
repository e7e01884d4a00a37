//! Core types: teams, session state, commands, errors.
//!
//! This module holds the building blocks the rules in [`crate::game`]
//! operate on. Nothing here validates anything; validation lives with the
//! rules so every invariant has exactly one enforcement point.

pub mod command;
pub mod error;
pub mod state;
pub mod team;

pub use command::{Command, GameEvent};
pub use error::GameError;
pub use state::GameState;
pub use team::{Team, TeamMap};
