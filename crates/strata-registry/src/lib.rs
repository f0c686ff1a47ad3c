//! Bidirectional name-to-component registries.
//!
//! A registry maps resource names to components and back, letting
//! independently contributed content refer to each other's entries by
//! name. Registries follow a two-phase lifecycle: a [`RegistryBuilder`]
//! accepts registrations from any number of contributors during a bounded
//! initialization window (registration is guarded by one lock per
//! builder), then freezes into an immutable [`NamedComponentRegistry`]
//! whose lookups are plain lock-free map reads. Registration after the
//! freeze is unrepresentable: the builder is consumed.
//!
//! Registries are explicit instances passed by reference to the code that
//! needs them, never process-wide state.
//!
//! # Key Types
//!
//! - [`NamedComponentRegistry`] / [`RegistryBuilder`] — the registry and
//!   its init-phase front
//! - [`ComponentHandle`] — identity-keyed shared handle, the component
//!   form for trait objects and structurally equal definitions
//! - [`RegistryCodec`] — a codec that reads and writes registry entries
//!   by name
//!
//! # Invariants
//!
//! - Names are unique, and so are values: the mapping is bidirectional.
//! - A duplicate registration is a fatal configuration defect, not a
//!   runtime condition. It panics.
//! - Looking up an unknown name is recoverable (`Option`); asking for the
//!   key of an unregistered value is a defect and panics.

pub mod codec;
pub mod handle;
pub mod registry;

pub use codec::RegistryCodec;
pub use handle::ComponentHandle;
pub use registry::{NamedComponentRegistry, RegistryBuilder};
