//! Foundation types for the Strata data framework.
//!
//! This crate provides the core identifier and value types used throughout
//! the Strata system. Every other Strata crate depends on `strata-types`.
//!
//! # Key Types
//!
//! - [`ResourceName`] — Namespaced `namespace:path` identifier for registered content
//! - [`Color`] — 32-bit ARGB color with hex-string parsing
//! - [`TypeError`] — Validation errors for the above

pub mod color;
pub mod error;
pub mod name;

pub use color::Color;
pub use error::TypeError;
pub use name::ResourceName;
