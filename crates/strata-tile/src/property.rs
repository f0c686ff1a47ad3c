//! Property schemas: value spaces, values, and canonical tokens.
//!
//! Every property value has exactly one canonical token rendering
//! (`"true"`, `"3"`, `"north"`), used verbatim in both the document and
//! wire encodings. Parsing a token outside the property's space yields
//! `None`; nothing is clamped or coerced.

/// The legal value space of one property.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertySpace {
    /// `true` or `false`.
    Bool,
    /// Integers in an inclusive range.
    Range { min: i32, max: i32 },
    /// A fixed set of named tokens.
    Tokens(Vec<String>),
}

/// One value drawn from a property's space.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum PropertyValue {
    Bool(bool),
    Int(i32),
    Token(String),
}

impl PropertyValue {
    /// The canonical token rendering of this value.
    pub fn token(&self) -> String {
        match self {
            PropertyValue::Bool(v) => v.to_string(),
            PropertyValue::Int(v) => v.to_string(),
            PropertyValue::Token(v) => v.clone(),
        }
    }
}

/// A named property with its value space and default.
///
/// Constructors validate the definition and panic on a malformed one:
/// property definitions are initialization-phase configuration, and a bad
/// default or duplicate token must surface at startup, not at parse time.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TileProperty {
    name: String,
    space: PropertySpace,
    default: PropertyValue,
}

impl TileProperty {
    pub fn boolean(name: impl Into<String>, default: bool) -> Self {
        TileProperty {
            name: name.into(),
            space: PropertySpace::Bool,
            default: PropertyValue::Bool(default),
        }
    }

    /// # Panics
    ///
    /// Panics when `min > max` or the default lies outside the range.
    pub fn range(name: impl Into<String>, min: i32, max: i32, default: i32) -> Self {
        let name = name.into();
        assert!(min <= max, "property {name:?}: range {min}..={max} is empty");
        assert!(
            default >= min && default <= max,
            "property {name:?}: default {default} outside {min}..={max}"
        );
        TileProperty {
            name,
            space: PropertySpace::Range { min, max },
            default: PropertyValue::Int(default),
        }
    }

    /// # Panics
    ///
    /// Panics when the token list is empty or holds duplicates, or when
    /// the default is not one of the tokens.
    pub fn tokens<I, S>(name: impl Into<String>, tokens: I, default: &str) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let name = name.into();
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        assert!(!tokens.is_empty(), "property {name:?}: no tokens");
        for (i, token) in tokens.iter().enumerate() {
            assert!(
                !tokens[..i].contains(token),
                "property {name:?}: duplicate token {token:?}"
            );
        }
        assert!(
            tokens.iter().any(|t| t == default),
            "property {name:?}: default {default:?} is not a listed token"
        );
        TileProperty {
            name,
            default: PropertyValue::Token(default.to_string()),
            space: PropertySpace::Tokens(tokens),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn space(&self) -> &PropertySpace {
        &self.space
    }

    pub fn default_value(&self) -> &PropertyValue {
        &self.default
    }

    /// Parse a token against this property's space. `None` when the token
    /// is not a legal value.
    pub fn parse_token(&self, token: &str) -> Option<PropertyValue> {
        match &self.space {
            PropertySpace::Bool => match token {
                "true" => Some(PropertyValue::Bool(true)),
                "false" => Some(PropertyValue::Bool(false)),
                _ => None,
            },
            PropertySpace::Range { min, max } => token
                .parse::<i32>()
                .ok()
                .filter(|v| v >= min && v <= max)
                .map(PropertyValue::Int),
            PropertySpace::Tokens(tokens) => tokens
                .iter()
                .find(|t| *t == token)
                .map(|t| PropertyValue::Token(t.clone())),
        }
    }

    /// Whether a value belongs to this property's space.
    pub fn contains(&self, value: &PropertyValue) -> bool {
        match (&self.space, value) {
            (PropertySpace::Bool, PropertyValue::Bool(_)) => true,
            (PropertySpace::Range { min, max }, PropertyValue::Int(v)) => v >= min && v <= max,
            (PropertySpace::Tokens(tokens), PropertyValue::Token(t)) => tokens.contains(t),
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boolean_tokens() {
        let prop = TileProperty::boolean("lit", false);
        assert_eq!(prop.parse_token("true"), Some(PropertyValue::Bool(true)));
        assert_eq!(prop.parse_token("false"), Some(PropertyValue::Bool(false)));
        assert_eq!(prop.parse_token("yes"), None);
        assert_eq!(prop.default_value().token(), "false");
    }

    #[test]
    fn range_rejects_out_of_bounds_tokens() {
        let prop = TileProperty::range("books", 0, 7, 0);
        assert_eq!(prop.parse_token("7"), Some(PropertyValue::Int(7)));
        assert_eq!(prop.parse_token("8"), None);
        assert_eq!(prop.parse_token("-1"), None);
        assert_eq!(prop.parse_token("two"), None);
    }

    #[test]
    fn token_set_matches_exactly() {
        let prop = TileProperty::tokens("facing", ["north", "south"], "north");
        assert_eq!(
            prop.parse_token("south"),
            Some(PropertyValue::Token("south".into()))
        );
        assert_eq!(prop.parse_token("up"), None);
        assert_eq!(prop.parse_token("North"), None);
    }

    #[test]
    fn contains_checks_the_space() {
        let prop = TileProperty::range("books", 0, 7, 0);
        assert!(prop.contains(&PropertyValue::Int(3)));
        assert!(!prop.contains(&PropertyValue::Int(9)));
        assert!(!prop.contains(&PropertyValue::Bool(true)));
    }

    #[test]
    fn canonical_tokens_roundtrip() {
        let flag = TileProperty::boolean("lit", true);
        let count = TileProperty::range("books", 0, 7, 5);
        for prop in [&flag, &count] {
            let default = prop.default_value();
            assert_eq!(
                prop.parse_token(&default.token()).as_ref(),
                Some(default)
            );
        }
    }

    #[test]
    #[should_panic(expected = "outside")]
    fn range_default_must_be_in_range() {
        TileProperty::range("books", 0, 7, 9);
    }

    #[test]
    #[should_panic(expected = "duplicate token")]
    fn duplicate_tokens_panic() {
        TileProperty::tokens("facing", ["north", "north"], "north");
    }

    #[test]
    #[should_panic(expected = "not a listed token")]
    fn token_default_must_be_listed() {
        TileProperty::tokens("facing", ["north", "south"], "east");
    }
}
