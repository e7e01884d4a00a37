//! Territory reference data: definitions and the ordered catalog.
//!
//! ## Key Types
//!
//! - `TerritoryId`: Identifier for territory definitions (catalog order)
//! - `Locator`: Map-locator code (state abbreviation or ISO alpha-3)
//! - `Territory`: Static territory data (name + locator)
//! - `TerritoryCatalog`: Ordered lookup, loaded once at startup
//!
//! The catalog is read-only for the process lifetime. Games pick the
//! built-in U.S. catalog or register their own entries (world countries).

pub mod registry;
pub mod territory;

pub use registry::TerritoryCatalog;
pub use territory::{Locator, Territory, TerritoryId};
