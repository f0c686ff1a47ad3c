//! Identity-keyed component handles.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::ops::Deref;
use std::sync::Arc;

/// A shared handle to a component, equal by identity rather than by
/// structure.
///
/// Registries key their inverse direction on the component value, which
/// breaks down when two distinct components compare structurally equal
/// (two tiles with identical schemas) or when the component is a trait
/// object with no equality at all. A handle restores a usable key: two
/// handles are equal exactly when they share one allocation, so every
/// registered component is its own identity.
pub struct ComponentHandle<T: ?Sized>(Arc<T>);

impl<T> ComponentHandle<T> {
    pub fn new(value: T) -> Self {
        ComponentHandle(Arc::new(value))
    }
}

impl<T: ?Sized> ComponentHandle<T> {
    /// Wrap an existing allocation, e.g. an unsized `Arc<dyn Trait>`.
    pub fn from_arc(value: Arc<T>) -> Self {
        ComponentHandle(value)
    }

    pub fn as_arc(&self) -> &Arc<T> {
        &self.0
    }

    fn key(&self) -> *const () {
        Arc::as_ptr(&self.0) as *const ()
    }
}

impl<T: ?Sized> Clone for ComponentHandle<T> {
    fn clone(&self) -> Self {
        ComponentHandle(Arc::clone(&self.0))
    }
}

impl<T: ?Sized> Deref for ComponentHandle<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T: ?Sized> PartialEq for ComponentHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl<T: ?Sized> Eq for ComponentHandle<T> {}

impl<T: ?Sized> Hash for ComponentHandle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        (self.key() as usize).hash(state);
    }
}

impl<T: ?Sized> fmt::Debug for ComponentHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ComponentHandle({:p})", self.key())
    }
}
