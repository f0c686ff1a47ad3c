//! Batch generation of on-disk data files.
//!
//! A [`DataProvider`] turns values into canonical pretty-printed JSON
//! files under `root/<namespace>/<category>/<path>.json`. Every rendered
//! output is content-digested; a file whose digest matches the previous
//! run's is skipped entirely, so repeated generation over an unchanged
//! input touches nothing and downstream tooling sees no spurious
//! modifications.
//!
//! Outputs are independent: an I/O failure on one file is logged and
//! isolated, and the provider keeps accepting the rest of the batch.
//!
//! # Key Types
//!
//! - [`DataProvider`] — the per-category output front
//! - [`SaveOutcome`] — what happened to one output
//! - [`DigestCache`] — the digest map persisted between runs
//! - [`ContentDigest`] — BLAKE3 digest of one rendered output

pub mod cache;
pub mod digest;
pub mod error;
pub mod provider;

pub use cache::DigestCache;
pub use digest::ContentDigest;
pub use error::{DatagenError, DatagenResult};
pub use provider::{DataProvider, SaveOutcome};
