//! The dual-encoding tile-state codec.

use std::sync::Arc;

use serde_json::{Map, Value};

use strata_codec::Loadable;
use strata_document::path::child_path;
use strata_document::{convert, fields, DocumentError, DocumentResult};
use strata_registry::{NamedComponentRegistry, RegistryCodec};
use strata_wire::{WireError, WireReader, WireResult, WireWriter};

use crate::state::TileState;
use crate::tile::TileHandle;

/// Reads and writes [`TileState`]s against a tile registry.
///
/// Document form, minimal by construction:
/// - a state at the tile's defaults is a bare name string,
///   `"pack:shelf"`;
/// - anything else is `{"tile": ..., "properties": {...}}` where the
///   properties object holds exactly the values that differ from the
///   defaults.
///
/// Wire form: the tile name, then every property's canonical token in
/// schema order. The wire never diffs; both peers resolve the same
/// schema or the stream is already broken.
pub struct TileStateCodec {
    tiles: RegistryCodec<TileHandle>,
}

impl TileStateCodec {
    pub fn new(tiles: Arc<NamedComponentRegistry<TileHandle>>) -> Self {
        TileStateCodec {
            tiles: RegistryCodec::new(tiles),
        }
    }
}

impl Loadable for TileStateCodec {
    type Value = TileState;

    fn convert(&self, element: &Value, path: &str) -> DocumentResult<TileState> {
        // Bare reference form: the tile's default state.
        if element.is_string() {
            let tile = self.tiles.convert(element, path)?;
            return Ok(TileState::default_for(&tile));
        }

        let object = convert::as_object(element, path)?;
        let tile_path = child_path(path, "tile");
        let tile = self
            .tiles
            .convert(fields::field(object, path, "tile")?, &tile_path)?;
        let mut state = TileState::default_for(&tile);

        if let Some(overrides) = fields::opt_field(object, "properties") {
            let overrides_path = child_path(path, "properties");
            let overrides = convert::as_object(overrides, &overrides_path)?;
            for (property, value) in overrides {
                let value_path = child_path(&overrides_path, property);
                let token = convert::as_str(value, &value_path)?;
                state = state
                    .with(property, token)
                    .map_err(|e| DocumentError::invalid(&value_path, e))?;
            }
        }
        Ok(state)
    }

    fn serialize(&self, value: &TileState) -> Value {
        let reference = self.tiles.serialize(value.tile());
        if value.is_default() {
            return reference;
        }

        let mut overrides = Map::new();
        for (property, v) in value.entries() {
            if v != property.default_value() {
                overrides.insert(property.name().to_string(), Value::String(v.token()));
            }
        }
        let mut object = Map::new();
        object.insert("tile".to_string(), reference);
        object.insert("properties".to_string(), Value::Object(overrides));
        Value::Object(object)
    }

    fn decode(&self, reader: &mut WireReader<'_>) -> WireResult<TileState> {
        let tile = self.tiles.decode(reader)?;
        let count = reader.read_count()?;
        let schema = tile.properties();
        if count != schema.len() {
            return Err(WireError::invalid_value(format!(
                "tile state carries {count} values, schema has {}",
                schema.len()
            )));
        }
        let mut values = Vec::with_capacity(schema.len());
        for property in schema {
            let token = reader.read_str()?;
            let value = property.parse_token(token).ok_or_else(|| {
                WireError::invalid_value(format!(
                    "property {:?} does not allow value {token:?}",
                    property.name()
                ))
            })?;
            values.push(value);
        }
        Ok(TileState::from_parts(tile, values))
    }

    fn encode(&self, writer: &mut WireWriter, value: &TileState) {
        self.tiles.encode(writer, value.tile());
        writer.write_count(value.tile().properties().len());
        for (_, v) in value.entries() {
            writer.write_str(&v.token());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::TileProperty;
    use crate::tile::Tile;
    use serde_json::json;
    use strata_registry::ComponentHandle;
    use strata_types::ResourceName;

    fn name(s: &str) -> ResourceName {
        ResourceName::parse(s).unwrap()
    }

    fn tile_registry() -> Arc<NamedComponentRegistry<TileHandle>> {
        let builder = NamedComponentRegistry::builder("tile");
        builder.register(
            name("pack:shelf"),
            ComponentHandle::new(Tile::new(vec![
                TileProperty::tokens("facing", ["north", "south", "east", "west"], "north"),
                TileProperty::boolean("lit", false),
                TileProperty::range("books", 0, 7, 0),
            ])),
        );
        builder.register(name("pack:slab"), ComponentHandle::new(Tile::new(vec![])));
        Arc::new(builder.build())
    }

    fn codec_and_default() -> (TileStateCodec, TileState) {
        let registry = tile_registry();
        let shelf = registry.get_value(&name("pack:shelf")).unwrap().clone();
        (TileStateCodec::new(registry), TileState::default_for(&shelf))
    }

    #[test]
    fn default_state_serializes_to_a_bare_reference() {
        let (codec, default) = codec_and_default();
        assert_eq!(codec.serialize(&default), json!("pack:shelf"));
    }

    #[test]
    fn bare_reference_converts_to_the_default_state() {
        let (codec, default) = codec_and_default();
        let state = codec.convert(&json!("pack:shelf"), "tile").unwrap();
        assert_eq!(state, default);
        assert!(state.is_default());
    }

    #[test]
    fn one_override_serializes_exactly_one_property() {
        let (codec, default) = codec_and_default();
        let lit = default.with("lit", "true").unwrap();
        assert_eq!(
            codec.serialize(&lit),
            json!({"tile": "pack:shelf", "properties": {"lit": "true"}})
        );
    }

    #[test]
    fn overrides_apply_on_top_of_defaults() {
        let (codec, default) = codec_and_default();
        let doc = json!({"tile": "pack:shelf", "properties": {"books": "3"}});
        let state = codec.convert(&doc, "tile").unwrap();
        assert_eq!(state, default.with("books", "3").unwrap());
        assert_eq!(state.get("facing").unwrap().token(), "north");
    }

    #[test]
    fn document_roundtrip_with_multiple_overrides() {
        let (codec, default) = codec_and_default();
        let state = default
            .with("facing", "east")
            .unwrap()
            .with("books", "7")
            .unwrap();
        let doc = codec.serialize(&state);
        assert_eq!(
            doc,
            json!({"tile": "pack:shelf", "properties": {"facing": "east", "books": "7"}})
        );
        assert_eq!(codec.convert(&doc, "tile").unwrap(), state);
    }

    #[test]
    fn unknown_tile_is_a_recoverable_document_error() {
        let (codec, _) = codec_and_default();
        let err = codec.convert(&json!("pack:missing"), "tile").unwrap_err();
        assert_eq!(err.to_string(), "unknown tile pack:missing at tile");

        let err = codec
            .convert(&json!({"tile": "pack:missing"}), "tile")
            .unwrap_err();
        assert_eq!(err.to_string(), "unknown tile pack:missing at tile.tile");
    }

    #[test]
    fn unknown_property_is_an_error() {
        let (codec, _) = codec_and_default();
        let doc = json!({"tile": "pack:shelf", "properties": {"height": "3"}});
        let err = codec.convert(&doc, "tile").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for tile.properties.height: tile has no property \"height\""
        );
    }

    #[test]
    fn illegal_token_is_an_error() {
        let (codec, _) = codec_and_default();
        let doc = json!({"tile": "pack:shelf", "properties": {"books": "9"}});
        let err = codec.convert(&doc, "tile").unwrap_err();
        assert_eq!(
            err.to_string(),
            "invalid value for tile.properties.books: property \"books\" does not allow value \"9\""
        );
    }

    #[test]
    fn property_values_must_be_token_strings() {
        let (codec, _) = codec_and_default();
        let doc = json!({"tile": "pack:shelf", "properties": {"books": 3}});
        let err = codec.convert(&doc, "tile").unwrap_err();
        assert_eq!(
            err.to_string(),
            "expected tile.properties.books to be a string, was a number"
        );
    }

    #[test]
    fn missing_tile_field_is_reported() {
        let (codec, _) = codec_and_default();
        let err = codec.convert(&json!({}), "tile").unwrap_err();
        assert_eq!(err.to_string(), "missing required field tile.tile");
    }

    #[test]
    fn non_reference_shapes_are_wrong_types() {
        let (codec, _) = codec_and_default();
        let err = codec.convert(&json!(5), "tile").unwrap_err();
        assert_eq!(err.to_string(), "expected tile to be an object, was a number");
    }

    #[test]
    fn wire_roundtrip_default_and_modified() {
        let (codec, default) = codec_and_default();
        let modified = default.with("facing", "west").unwrap();
        for state in [default, modified] {
            let mut w = WireWriter::new();
            codec.encode(&mut w, &state);
            let bytes = w.into_bytes();
            let mut r = WireReader::new(&bytes);
            assert_eq!(codec.decode(&mut r).unwrap(), state);
            assert!(r.is_empty());
        }
    }

    #[test]
    fn wire_roundtrip_empty_schema() {
        let registry = tile_registry();
        let slab = registry.get_value(&name("pack:slab")).unwrap().clone();
        let codec = TileStateCodec::new(registry);
        let state = TileState::default_for(&slab);

        let mut w = WireWriter::new();
        codec.encode(&mut w, &state);
        let bytes = w.into_bytes();
        let mut r = WireReader::new(&bytes);
        assert_eq!(codec.decode(&mut r).unwrap(), state);
    }

    #[test]
    fn unknown_wire_tile_is_fatal() {
        let (codec, _) = codec_and_default();
        let mut w = WireWriter::new();
        w.write_str("pack:missing");
        w.write_count(0);
        let bytes = w.into_bytes();
        let mut r = WireReader::new(&bytes);
        assert!(matches!(
            codec.decode(&mut r).unwrap_err(),
            WireError::InvalidValue { .. }
        ));
    }

    #[test]
    fn wire_value_count_must_match_the_schema() {
        let (codec, _) = codec_and_default();
        let mut w = WireWriter::new();
        w.write_str("pack:shelf");
        w.write_count(1);
        w.write_str("north");
        let bytes = w.into_bytes();
        let mut r = WireReader::new(&bytes);
        let err = codec.decode(&mut r).unwrap_err();
        assert_eq!(
            err,
            WireError::invalid_value("tile state carries 1 values, schema has 3")
        );
    }

    #[test]
    fn illegal_wire_token_is_fatal() {
        let (codec, _) = codec_and_default();
        let mut w = WireWriter::new();
        w.write_str("pack:shelf");
        w.write_count(3);
        w.write_str("north");
        w.write_str("maybe");
        w.write_str("0");
        let bytes = w.into_bytes();
        let mut r = WireReader::new(&bytes);
        assert!(matches!(
            codec.decode(&mut r).unwrap_err(),
            WireError::InvalidValue { .. }
        ));
    }

    #[test]
    fn truncated_wire_state_fails() {
        let (codec, default) = codec_and_default();
        let mut w = WireWriter::new();
        codec.encode(&mut w, &default);
        let bytes = w.into_bytes();
        let mut r = WireReader::new(&bytes[..bytes.len() - 2]);
        assert!(matches!(
            codec.decode(&mut r).unwrap_err(),
            WireError::UnexpectedEnd { .. }
        ));
    }
}
