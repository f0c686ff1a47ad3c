//! Typed, path-qualified access to authored documents.
//!
//! A document is a parsed JSON tree (`serde_json::Value`, built with
//! `preserve_order` so object keys keep their authored order). This crate
//! layers typed accessors over that tree: every conversion takes the field
//! path of the node it is inspecting and produces a [`DocumentError`]
//! naming that path, so a malformed file reports `pages[2].title` rather
//! than a bare type mismatch.
//!
//! Documents are authored input. Failures here are recoverable: the caller
//! logs the error and skips the offending file, while other content keeps
//! loading.
//!
//! # Modules
//!
//! - [`convert`] — node-to-type conversions (`as_object`, `as_int`, ...)
//! - [`fields`] — object member access with missing-field diagnostics
//! - [`path`] — field-path building (`parent.key`, `parent[3]`)

pub mod convert;
pub mod error;
pub mod fields;
pub mod path;

pub use convert::type_name;
pub use error::{DocumentError, DocumentResult};
