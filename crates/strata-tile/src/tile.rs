//! The tile definition.

use strata_registry::ComponentHandle;

use crate::property::TileProperty;

/// A placeable content definition: an ordered property schema.
///
/// Property order is part of the definition — states store their values
/// positionally and the wire encoding walks the schema in order.
#[derive(Debug)]
pub struct Tile {
    properties: Vec<TileProperty>,
}

/// The registry form of a tile. Identity-keyed, so structurally identical
/// tiles registered under different names stay distinct entries.
pub type TileHandle = ComponentHandle<Tile>;

impl Tile {
    /// # Panics
    ///
    /// Panics when two properties share a name.
    pub fn new(properties: Vec<TileProperty>) -> Self {
        for (i, property) in properties.iter().enumerate() {
            assert!(
                !properties[..i].iter().any(|p| p.name() == property.name()),
                "tile defines property {:?} twice",
                property.name()
            );
        }
        Tile { properties }
    }

    pub fn properties(&self) -> &[TileProperty] {
        &self.properties
    }

    /// Find a property by name, with its schema position.
    pub fn property(&self, name: &str) -> Option<(usize, &TileProperty)> {
        self.properties
            .iter()
            .enumerate()
            .find(|(_, p)| p.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn property_lookup_returns_schema_position() {
        let tile = Tile::new(vec![
            TileProperty::boolean("lit", false),
            TileProperty::range("books", 0, 7, 0),
        ]);
        let (index, property) = tile.property("books").unwrap();
        assert_eq!(index, 1);
        assert_eq!(property.name(), "books");
        assert!(tile.property("missing").is_none());
    }

    #[test]
    fn empty_schema_is_legal() {
        let tile = Tile::new(vec![]);
        assert!(tile.properties().is_empty());
    }

    #[test]
    #[should_panic(expected = "twice")]
    fn duplicate_property_names_panic() {
        Tile::new(vec![
            TileProperty::boolean("lit", false),
            TileProperty::boolean("lit", true),
        ]);
    }
}
