//! Compact binary wire buffer for network replication.
//!
//! A [`WireWriter`] is an append-only write cursor and a [`WireReader`] a
//! sequential read cursor over the same byte layout. The format carries no
//! type tags: the reader must issue the exact sequence of reads the writer
//! issued, so both sides must agree on the schema out of band.
//!
//! # Wire format
//!
//! - Unsigned varint: 7 bits per byte, least-significant group first, high
//!   bit set on continuation bytes. At most 10 bytes; a continuation on the
//!   tenth byte is an overflow.
//! - Signed integers: zigzag-mapped onto unsigned varints.
//! - Booleans: one byte, `0` or `1`; anything else is an illegal
//!   discriminant.
//! - `u8`/`u32`/`f32`/`f64`: fixed-width little-endian.
//! - Strings: varint byte length followed by UTF-8 bytes.
//! - Byte runs: varint length followed by the raw bytes.
//! - Collections (framed by codecs, not the buffer): varint element count
//!   followed by the elements in order.
//!
//! Every decode failure is final for the buffer: a truncated or malformed
//! stream is never resynchronized, and the owning connection is expected to
//! drop.

pub mod error;
pub mod reader;
pub mod writer;

pub use error::{WireError, WireResult};
pub use reader::WireReader;
pub use writer::WireWriter;
