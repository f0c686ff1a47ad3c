//! Namespaced resource names.
//!
//! A resource name is a two-part identifier of the form `namespace:path`
//! naming a registered piece of content. Names are case-sensitive opaque
//! keys: equal names refer to the same entry, and no pattern matching is
//! ever applied to them.
//!
//! Valid names:
//! - Namespace characters: `a-z`, `0-9`, `_`, `-`, `.`
//! - Path characters: the same set plus `/`
//! - Both parts must be non-empty, joined by exactly one `:`

use std::fmt;
use std::str::FromStr;

use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::TypeError;

/// A namespaced identifier for registered content.
///
/// The namespace keys the contributing package and the path locates the
/// entry within it, mirroring the on-disk layout data providers write to
/// (`<namespace>/<category>/<path>.json`).
///
/// # Examples
///
/// ```
/// use strata_types::ResourceName;
///
/// let name = ResourceName::parse("library:shelf/oak").unwrap();
/// assert_eq!(name.namespace(), "library");
/// assert_eq!(name.path(), "shelf/oak");
/// assert_eq!(name.to_string(), "library:shelf/oak");
///
/// assert!(ResourceName::parse("no_separator").is_err());
/// assert!(ResourceName::parse("UPPER:case").is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ResourceName {
    namespace: String,
    path: String,
}

fn namespace_char(c: char) -> bool {
    matches!(c, 'a'..='z' | '0'..='9' | '_' | '-' | '.')
}

fn path_char(c: char) -> bool {
    namespace_char(c) || c == '/'
}

impl ResourceName {
    /// Create a name from its two parts, validating each.
    pub fn new(namespace: impl Into<String>, path: impl Into<String>) -> Result<Self, TypeError> {
        let namespace = namespace.into();
        let path = path.into();

        if namespace.is_empty() {
            return Err(invalid(&namespace, &path, "namespace must not be empty"));
        }
        if path.is_empty() {
            return Err(invalid(&namespace, &path, "path must not be empty"));
        }
        if let Some(c) = namespace.chars().find(|c| !namespace_char(*c)) {
            return Err(invalid(
                &namespace,
                &path,
                format!("namespace contains forbidden character {c:?}"),
            ));
        }
        if let Some(c) = path.chars().find(|c| !path_char(*c)) {
            return Err(invalid(
                &namespace,
                &path,
                format!("path contains forbidden character {c:?}"),
            ));
        }

        Ok(Self { namespace, path })
    }

    /// Parse the joined `namespace:path` form.
    ///
    /// There is no implicit default namespace: both parts are required.
    pub fn parse(s: &str) -> Result<Self, TypeError> {
        match s.split_once(':') {
            Some((namespace, path)) => Self::new(namespace, path),
            None => Err(TypeError::InvalidName {
                name: s.to_string(),
                reason: "expected the form namespace:path".into(),
            }),
        }
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}

fn invalid(namespace: &str, path: &str, reason: impl Into<String>) -> TypeError {
    TypeError::InvalidName {
        name: format!("{namespace}:{path}"),
        reason: reason.into(),
    }
}

impl fmt::Display for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.namespace, self.path)
    }
}

impl fmt::Debug for ResourceName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ResourceName({self})")
    }
}

impl FromStr for ResourceName {
    type Err = TypeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for ResourceName {
    type Error = TypeError;

    fn try_from(s: &str) -> Result<Self, Self::Error> {
        Self::parse(s)
    }
}

impl Serialize for ResourceName {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for ResourceName {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let s = String::deserialize(deserializer)?;
        Self::parse(&s).map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_splits_on_colon() {
        let name = ResourceName::parse("pack:items/ruby").unwrap();
        assert_eq!(name.namespace(), "pack");
        assert_eq!(name.path(), "items/ruby");
    }

    #[test]
    fn display_joins_parts() {
        let name = ResourceName::new("pack", "items/ruby").unwrap();
        assert_eq!(name.to_string(), "pack:items/ruby");
        assert_eq!(format!("{name:?}"), "ResourceName(pack:items/ruby)");
    }

    #[test]
    fn parse_display_roundtrip() {
        let name = ResourceName::parse("a-b.c:x_1/y.z").unwrap();
        assert_eq!(ResourceName::parse(&name.to_string()).unwrap(), name);
    }

    #[test]
    fn reject_missing_separator() {
        let err = ResourceName::parse("bare").unwrap_err();
        assert!(matches!(err, TypeError::InvalidName { .. }));
    }

    #[test]
    fn reject_empty_parts() {
        assert!(ResourceName::parse(":path").is_err());
        assert!(ResourceName::parse("ns:").is_err());
        assert!(ResourceName::parse(":").is_err());
    }

    #[test]
    fn reject_forbidden_characters() {
        assert!(ResourceName::parse("Pack:path").is_err());
        assert!(ResourceName::parse("pack:Path").is_err());
        assert!(ResourceName::parse("pa ck:path").is_err());
        assert!(ResourceName::parse("pack:pa th").is_err());
        // A second colon lands in the path, which forbids it.
        assert!(ResourceName::parse("pack:a:b").is_err());
    }

    #[test]
    fn slash_valid_in_path_only() {
        assert!(ResourceName::parse("pack:a/b/c").is_ok());
        assert!(ResourceName::parse("pa/ck:a").is_err());
    }

    #[test]
    fn names_are_case_sensitive_keys() {
        // Only lowercase is valid, so distinct spellings never collide;
        // equality is exact string equality on both parts.
        let a = ResourceName::parse("pack:stone").unwrap();
        let b = ResourceName::parse("pack:stone").unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn ordering_is_namespace_then_path() {
        let mut names = vec![
            ResourceName::parse("b:a").unwrap(),
            ResourceName::parse("a:z").unwrap(),
            ResourceName::parse("a:b").unwrap(),
        ];
        names.sort();
        let rendered: Vec<String> = names.iter().map(ToString::to_string).collect();
        assert_eq!(rendered, ["a:b", "a:z", "b:a"]);
    }

    #[test]
    fn serde_uses_string_form() {
        let name = ResourceName::parse("pack:items/ruby").unwrap();
        let json = serde_json::to_string(&name).unwrap();
        assert_eq!(json, "\"pack:items/ruby\"");
        let back: ResourceName = serde_json::from_str(&json).unwrap();
        assert_eq!(back, name);
    }

    #[test]
    fn serde_rejects_invalid_string() {
        let result: Result<ResourceName, _> = serde_json::from_str("\"no_separator\"");
        assert!(result.is_err());
    }
}
