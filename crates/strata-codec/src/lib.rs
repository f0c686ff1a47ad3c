//! Dual-encoding codecs: one definition, two representations.
//!
//! A [`Loadable`] converts a domain value both ways between an authored
//! document tree and a compact binary wire buffer. Defining the two
//! encodings in one place is what keeps them permanently consistent as the
//! set of content types grows.
//!
//! # Key Types
//!
//! - [`Loadable`] — the four-operation codec contract
//! - [`ListCodec`] / [`CompactMode`] — sequences, with optional compact
//!   single-element authoring
//! - [`MappedCodec`] — derive a codec for a new type from an existing one
//! - [`primitives`] — bool, ranged int, ranged float, string, name, color
//!
//! # Invariants
//!
//! - `convert(serialize(x), path)` yields a value equal to `x`.
//! - `decode(encode(x))` yields a value equal to `x`, byte-exactly.
//! - `serialize` and `encode` are total for legitimately constructed
//!   values; only malformed *input* fails, never well-formed output.
//! - Document failures carry the field path of the offending node; wire
//!   failures are fatal for the stream that produced them.

pub mod collection;
pub mod loadable;
pub mod primitives;

pub use collection::{CompactMode, ListCodec};
pub use loadable::{Loadable, MappedCodec};
pub use primitives::{BoolCodec, ColorCodec, FloatCodec, IntCodec, NameCodec, StringCodec};
