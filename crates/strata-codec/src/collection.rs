//! Sequences of codec values, with compact single-element authoring.
//!
//! Authored files very often hold exactly one element where the schema
//! allows several. In a compact mode the document side accepts a bare
//! element as a one-element sequence and writes one back out the same way,
//! so hand-written files stay flat. The wire side never does this: a
//! sequence is always a count followed by its elements.

use serde_json::Value;

use strata_document::path::index_path;
use strata_document::{convert, DocumentError, DocumentResult};
use strata_wire::{WireReader, WireResult, WireWriter};

use crate::loadable::Loadable;

/// How the document side treats a bare, non-array element.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompactMode {
    /// Only the array form parses.
    None,
    /// A bare element parses as a one-element sequence; the sequence must
    /// not be empty.
    NonEmpty,
    /// A bare element parses as a one-element sequence; an empty array is
    /// also legal.
    OrEmpty,
}

/// A sequence of `L::Value` with a minimum element count.
///
/// Built from [`Loadable::list`], [`Loadable::compact_list`], or
/// [`Loadable::compact_list_or_empty`].
#[derive(Debug, Clone, Copy)]
pub struct ListCodec<L> {
    base: L,
    min_size: usize,
    compact: CompactMode,
}

impl<L> ListCodec<L> {
    pub fn new(base: L, min_size: usize) -> Self {
        ListCodec {
            base,
            min_size,
            compact: CompactMode::None,
        }
    }

    pub fn compact(base: L) -> Self {
        ListCodec {
            base,
            min_size: 0,
            compact: CompactMode::NonEmpty,
        }
    }

    pub fn compact_or_empty(base: L) -> Self {
        ListCodec {
            base,
            min_size: 0,
            compact: CompactMode::OrEmpty,
        }
    }

    /// Smallest legal element count under this configuration.
    pub fn effective_min(&self) -> usize {
        match self.compact {
            CompactMode::NonEmpty => self.min_size.max(1),
            _ => self.min_size,
        }
    }
}

impl<L: Loadable> Loadable for ListCodec<L> {
    type Value = Vec<L::Value>;

    fn convert(&self, element: &Value, path: &str) -> DocumentResult<Vec<L::Value>> {
        // Compact form: a bare element stands for a one-element sequence
        // and keeps the parent's path in diagnostics.
        if self.compact != CompactMode::None && !element.is_array() {
            return Ok(vec![self.base.convert(element, path)?]);
        }

        let array = convert::as_array(element, path)?;
        let minimum = self.effective_min();
        if array.len() < minimum {
            return Err(DocumentError::TooFewElements {
                path: path.to_string(),
                minimum,
                actual: array.len(),
            });
        }
        array
            .iter()
            .enumerate()
            .map(|(i, e)| self.base.convert(e, &index_path(path, i)))
            .collect()
    }

    /// # Panics
    ///
    /// Panics when the sequence is shorter than the configured minimum.
    /// Such a value cannot have come back through `convert`, so reaching
    /// this is a producer bug rather than a data condition.
    fn serialize(&self, value: &Vec<L::Value>) -> Value {
        if self.compact != CompactMode::None && value.len() == 1 {
            let element = self.base.serialize(&value[0]);
            // An array element must stay wrapped or it would read back as
            // the sequence itself.
            if !element.is_array() {
                return element;
            }
        }
        let minimum = self.effective_min();
        assert!(
            value.len() >= minimum,
            "sequence serialized with {} elements, minimum is {minimum}",
            value.len()
        );
        Value::Array(value.iter().map(|v| self.base.serialize(v)).collect())
    }

    fn decode(&self, reader: &mut WireReader<'_>) -> WireResult<Vec<L::Value>> {
        let count = reader.read_count()?;
        // Capacity is clamped so a corrupt count cannot force a huge
        // allocation before element reads start failing.
        let mut values = Vec::with_capacity(count.min(reader.remaining()));
        for _ in 0..count {
            values.push(self.base.decode(reader)?);
        }
        Ok(values)
    }

    fn encode(&self, writer: &mut WireWriter, value: &Vec<L::Value>) {
        writer.write_count(value.len());
        for element in value {
            self.base.encode(writer, element);
        }
    }
}
