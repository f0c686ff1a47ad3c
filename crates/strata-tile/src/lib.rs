//! Tiles: registry entities with keyed, defaulted property schemas.
//!
//! A [`Tile`] is a placeable content definition whose schema is a list of
//! named properties, each with a legal value space and a default. A
//! [`TileState`] is a tile plus one value per property. States are what
//! documents and wire buffers actually carry, and [`TileStateCodec`]
//! writes them minimally: a state equal to the tile's default serializes
//! to a bare name string, and anything else serializes to an object
//! listing only the properties that differ. Generated files stay small
//! and diffs only show real changes.
//!
//! Tiles are registered as [`TileHandle`]s — identity-keyed shared
//! handles — so two tiles with identical schemas remain distinct registry
//! entries.
//!
//! # Modules
//!
//! - [`property`] — property value spaces, values, and canonical tokens
//! - [`tile`] — the tile definition and its schema
//! - [`state`] — tile states and per-property updates
//! - [`codec`] — the dual-encoding state codec

pub mod codec;
pub mod error;
pub mod property;
pub mod state;
pub mod tile;

pub use codec::TileStateCodec;
pub use error::StateError;
pub use property::{PropertySpace, PropertyValue, TileProperty};
pub use state::TileState;
pub use tile::{Tile, TileHandle};
