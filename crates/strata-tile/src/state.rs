//! Tile states: a tile plus one value per schema property.

use crate::error::StateError;
use crate::property::{PropertyValue, TileProperty};
use crate::tile::TileHandle;

/// An immutable assignment of values to a tile's properties.
///
/// Values sit in schema order. Updates go through [`TileState::with`],
/// which validates against the property's space and returns a new state.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileState {
    tile: TileHandle,
    values: Box<[PropertyValue]>,
}

impl TileState {
    /// The tile's canonical default: every property at its default value.
    pub fn default_for(tile: &TileHandle) -> TileState {
        let values = tile
            .properties()
            .iter()
            .map(|p| p.default_value().clone())
            .collect();
        TileState {
            tile: tile.clone(),
            values,
        }
    }

    pub(crate) fn from_parts(tile: TileHandle, values: Vec<PropertyValue>) -> TileState {
        debug_assert_eq!(tile.properties().len(), values.len());
        TileState {
            tile,
            values: values.into_boxed_slice(),
        }
    }

    pub fn tile(&self) -> &TileHandle {
        &self.tile
    }

    /// The value of a property, or `None` when the tile has no such
    /// property.
    pub fn get(&self, property: &str) -> Option<&PropertyValue> {
        self.tile
            .property(property)
            .map(|(index, _)| &self.values[index])
    }

    /// A copy of this state with one property set from its token form.
    pub fn with(&self, property: &str, token: &str) -> Result<TileState, StateError> {
        let (index, schema) =
            self.tile
                .property(property)
                .ok_or_else(|| StateError::UnknownProperty {
                    property: property.to_string(),
                })?;
        let value = schema
            .parse_token(token)
            .ok_or_else(|| StateError::InvalidToken {
                property: property.to_string(),
                token: token.to_string(),
            })?;
        let mut values = self.values.clone();
        values[index] = value;
        Ok(TileState {
            tile: self.tile.clone(),
            values,
        })
    }

    /// Whether every property sits at its default.
    pub fn is_default(&self) -> bool {
        self.entries().all(|(p, v)| p.default_value() == v)
    }

    /// Schema-ordered `(property, value)` pairs.
    pub fn entries(&self) -> impl Iterator<Item = (&TileProperty, &PropertyValue)> {
        self.tile.properties().iter().zip(self.values.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::property::TileProperty;
    use crate::tile::Tile;
    use strata_registry::ComponentHandle;

    fn shelf() -> TileHandle {
        ComponentHandle::new(Tile::new(vec![
            TileProperty::tokens("facing", ["north", "south", "east", "west"], "north"),
            TileProperty::boolean("lit", false),
            TileProperty::range("books", 0, 7, 0),
        ]))
    }

    #[test]
    fn default_state_uses_schema_defaults() {
        let state = TileState::default_for(&shelf());
        assert!(state.is_default());
        assert_eq!(state.get("facing").unwrap().token(), "north");
        assert_eq!(state.get("lit").unwrap().token(), "false");
        assert_eq!(state.get("books").unwrap().token(), "0");
        assert!(state.get("missing").is_none());
    }

    #[test]
    fn with_replaces_one_value() {
        let state = TileState::default_for(&shelf());
        let lit = state.with("lit", "true").unwrap();
        assert!(!lit.is_default());
        assert_eq!(lit.get("lit").unwrap().token(), "true");
        assert_eq!(lit.get("facing").unwrap().token(), "north");
        // The original state is untouched.
        assert!(state.is_default());
    }

    #[test]
    fn with_validates_the_property_space() {
        let state = TileState::default_for(&shelf());
        assert_eq!(
            state.with("books", "9").unwrap_err(),
            StateError::InvalidToken {
                property: "books".into(),
                token: "9".into()
            }
        );
        assert_eq!(
            state.with("height", "3").unwrap_err(),
            StateError::UnknownProperty {
                property: "height".into()
            }
        );
    }

    #[test]
    fn states_compare_by_tile_identity_and_values() {
        let tile = shelf();
        let a = TileState::default_for(&tile);
        let b = TileState::default_for(&tile);
        assert_eq!(a, b);
        assert_ne!(a, a.with("lit", "true").unwrap());
        // A structurally identical but distinct tile is a different state.
        let other = TileState::default_for(&shelf());
        assert_ne!(a, other);
    }

    #[test]
    fn entries_follow_schema_order() {
        let state = TileState::default_for(&shelf());
        let names: Vec<&str> = state.entries().map(|(p, _)| p.name()).collect();
        assert_eq!(names, ["facing", "lit", "books"]);
    }
}
