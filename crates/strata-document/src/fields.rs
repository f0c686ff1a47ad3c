//! Object member access.
//!
//! An explicit `null` member is treated as absent, matching how optional
//! fields are authored in practice.

use serde_json::{Map, Value};

use strata_types::ResourceName;

use crate::convert;
use crate::error::{DocumentError, DocumentResult};
use crate::path::child_path;

/// A required member; absence reports the member's full path.
pub fn field<'a>(
    object: &'a Map<String, Value>,
    path: &str,
    key: &str,
) -> DocumentResult<&'a Value> {
    opt_field(object, key).ok_or_else(|| DocumentError::missing(child_path(path, key)))
}

/// An optional member; `None` when missing or explicitly `null`.
pub fn opt_field<'a>(object: &'a Map<String, Value>, key: &str) -> Option<&'a Value> {
    object.get(key).filter(|v| !v.is_null())
}

/// A required string member.
pub fn field_str<'a>(
    object: &'a Map<String, Value>,
    path: &str,
    key: &str,
) -> DocumentResult<&'a str> {
    convert::as_str(field(object, path, key)?, &child_path(path, key))
}

/// A required resource-name member.
pub fn field_name(
    object: &Map<String, Value>,
    path: &str,
    key: &str,
) -> DocumentResult<ResourceName> {
    convert::as_name(field(object, path, key)?, &child_path(path, key))
}
