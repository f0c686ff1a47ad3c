//! The codec contract.

use std::marker::PhantomData;

use serde_json::Value;

use strata_document::{DocumentError, DocumentResult};
use strata_wire::{WireError, WireReader, WireResult, WireWriter};

use crate::collection::ListCodec;

/// A two-way, dual-encoding codec for one value type.
///
/// All implementations must satisfy these invariants:
/// - The document and wire encodings describe the same value space; a
///   value written through either side reads back equal through that side.
/// - `convert` validates untrusted authored input and reports failures
///   against the supplied field path.
/// - `serialize` is total: any value the codec can produce, it can write.
/// - `decode` treats the buffer as already framed; it never waits for more
///   bytes, and any failure is final for the stream.
/// - `encode` appends to the buffer and cannot fail.
/// - No operation blocks, suspends, or touches shared mutable state.
pub trait Loadable {
    /// The domain value this codec reads and writes.
    type Value;

    /// Interpret a document node found at `path`.
    fn convert(&self, element: &Value, path: &str) -> DocumentResult<Self::Value>;

    /// Render a value back into a document node.
    fn serialize(&self, value: &Self::Value) -> Value;

    /// Read a value from the wire.
    fn decode(&self, reader: &mut WireReader<'_>) -> WireResult<Self::Value>;

    /// Write a value to the wire.
    fn encode(&self, writer: &mut WireWriter, value: &Self::Value);

    /// A sequence of this codec's values with a minimum element count.
    fn list(self, min_size: usize) -> ListCodec<Self>
    where
        Self: Sized,
    {
        ListCodec::new(self, min_size)
    }

    /// A non-empty sequence that also parses a bare element as a
    /// one-element sequence.
    fn compact_list(self) -> ListCodec<Self>
    where
        Self: Sized,
    {
        ListCodec::compact(self)
    }

    /// A possibly-empty sequence that also parses a bare element as a
    /// one-element sequence.
    fn compact_list_or_empty(self) -> ListCodec<Self>
    where
        Self: Sized,
    {
        ListCodec::compact_or_empty(self)
    }

    /// Derive a codec for `T` from this codec's representation.
    ///
    /// `parse` may reject values outside `T`'s space with a reason string;
    /// the reason is reported against the field path on the document side
    /// and as an invalid-value failure on the wire side. `write` must be
    /// total.
    fn try_map<T, P, W>(self, parse: P, write: W) -> MappedCodec<Self, T, P, W>
    where
        Self: Sized,
        P: Fn(Self::Value) -> Result<T, String>,
        W: Fn(&T) -> Self::Value,
    {
        MappedCodec {
            base: self,
            parse,
            write,
            _value: PhantomData,
        }
    }
}

/// Adapts a base codec to a derived value type. Built by
/// [`Loadable::try_map`].
pub struct MappedCodec<L, T, P, W> {
    base: L,
    parse: P,
    write: W,
    _value: PhantomData<fn() -> T>,
}

impl<L, T, P, W> Loadable for MappedCodec<L, T, P, W>
where
    L: Loadable,
    P: Fn(L::Value) -> Result<T, String>,
    W: Fn(&T) -> L::Value,
{
    type Value = T;

    fn convert(&self, element: &Value, path: &str) -> DocumentResult<T> {
        let raw = self.base.convert(element, path)?;
        (self.parse)(raw).map_err(|reason| DocumentError::invalid(path, reason))
    }

    fn serialize(&self, value: &T) -> Value {
        self.base.serialize(&(self.write)(value))
    }

    fn decode(&self, reader: &mut WireReader<'_>) -> WireResult<T> {
        let raw = self.base.decode(reader)?;
        (self.parse)(raw).map_err(WireError::invalid_value)
    }

    fn encode(&self, writer: &mut WireWriter, value: &T) {
        self.base.encode(writer, &(self.write)(value));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::StringCodec;
    use serde_json::json;

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum Facing {
        North,
        South,
        East,
        West,
    }

    impl Facing {
        fn parse(token: String) -> Result<Facing, String> {
            match token.as_str() {
                "north" => Ok(Facing::North),
                "south" => Ok(Facing::South),
                "east" => Ok(Facing::East),
                "west" => Ok(Facing::West),
                other => Err(format!("unknown facing {other:?}")),
            }
        }

        fn token(&self) -> String {
            match self {
                Facing::North => "north",
                Facing::South => "south",
                Facing::East => "east",
                Facing::West => "west",
            }
            .to_string()
        }
    }

    fn facing_codec() -> impl Loadable<Value = Facing> {
        StringCodec::DEFAULT.try_map(Facing::parse, Facing::token)
    }

    #[test]
    fn mapped_document_roundtrip() {
        let codec = facing_codec();
        let doc = codec.serialize(&Facing::East);
        assert_eq!(doc, json!("east"));
        assert_eq!(codec.convert(&doc, "facing").unwrap(), Facing::East);
    }

    #[test]
    fn mapped_wire_roundtrip() {
        let codec = facing_codec();
        let mut w = WireWriter::new();
        codec.encode(&mut w, &Facing::West);
        let bytes = w.into_bytes();
        let mut r = WireReader::new(&bytes);
        assert_eq!(codec.decode(&mut r).unwrap(), Facing::West);
    }

    #[test]
    fn mapped_parse_failure_carries_the_path() {
        let codec = facing_codec();
        let err = codec.convert(&json!("up"), "door.facing").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for door.facing: unknown facing \"up\""
        );
    }

    #[test]
    fn mapped_parse_failure_is_fatal_on_the_wire() {
        let codec = facing_codec();
        let mut w = WireWriter::new();
        w.write_str("up");
        let bytes = w.into_bytes();
        let mut r = WireReader::new(&bytes);
        assert!(matches!(
            codec.decode(&mut r).unwrap_err(),
            WireError::InvalidValue { .. }
        ));
    }
}
