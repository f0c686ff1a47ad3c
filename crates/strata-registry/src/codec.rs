//! A codec over registry entries.

use std::hash::Hash;
use std::sync::Arc;

use serde_json::Value;

use strata_codec::Loadable;
use strata_document::{convert, DocumentError, DocumentResult};
use strata_types::ResourceName;
use strata_wire::{WireError, WireReader, WireResult, WireWriter};

use crate::registry::NamedComponentRegistry;

/// Reads and writes registry components by their registered name.
///
/// Both encodings carry the `namespace:path` string. On the document side
/// an unknown name is a recoverable, path-qualified error; on the wire it
/// is an illegal discriminant and fatal for the stream.
pub struct RegistryCodec<T> {
    registry: Arc<NamedComponentRegistry<T>>,
}

impl<T> RegistryCodec<T> {
    pub fn new(registry: Arc<NamedComponentRegistry<T>>) -> Self {
        RegistryCodec { registry }
    }

    pub fn registry(&self) -> &NamedComponentRegistry<T> {
        &self.registry
    }
}

impl<T> Clone for RegistryCodec<T> {
    fn clone(&self) -> Self {
        RegistryCodec {
            registry: Arc::clone(&self.registry),
        }
    }
}

impl<T: Clone + Eq + Hash> Loadable for RegistryCodec<T> {
    type Value = T;

    fn convert(&self, element: &Value, path: &str) -> DocumentResult<T> {
        let name = convert::as_name(element, path)?;
        self.registry
            .get_value(&name)
            .cloned()
            .ok_or_else(|| DocumentError::unknown_name(path, self.registry.what(), name))
    }

    fn serialize(&self, value: &T) -> Value {
        Value::String(self.registry.get_key(value).to_string())
    }

    fn decode(&self, reader: &mut WireReader<'_>) -> WireResult<T> {
        let text = reader.read_str()?;
        let name = ResourceName::parse(text).map_err(WireError::invalid_value)?;
        self.registry.get_value(&name).cloned().ok_or_else(|| {
            WireError::invalid_value(format!("unknown {} {name}", self.registry.what()))
        })
    }

    fn encode(&self, writer: &mut WireWriter, value: &T) {
        writer.write_str(&self.registry.get_key(value).to_string());
    }
}
