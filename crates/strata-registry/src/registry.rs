//! The registry and its init-phase builder.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::Mutex;

use strata_types::ResourceName;

/// Accepts registrations during the initialization window.
///
/// `register` takes `&self` so concurrent contributors can share one
/// builder; a single mutex serializes their insertions. The builder is
/// consumed by [`RegistryBuilder::build`], after which no further
/// registration is possible.
pub struct RegistryBuilder<T> {
    what: &'static str,
    inner: Mutex<Maps<T>>,
}

struct Maps<T> {
    forward: HashMap<ResourceName, T>,
    inverse: HashMap<T, ResourceName>,
}

impl<T: Clone + Eq + Hash> RegistryBuilder<T> {
    /// Register a component under a name.
    ///
    /// # Panics
    ///
    /// Panics when the name or the value is already registered. Both
    /// directions of the mapping must stay unique, and a collision during
    /// init is a configuration defect to surface immediately, not a
    /// condition to tolerate.
    pub fn register(&self, name: ResourceName, value: T) {
        let mut maps = self.inner.lock().expect("registry lock poisoned");
        if maps.forward.contains_key(&name) {
            panic!("duplicate {} registration: {name}", self.what);
        }
        if let Some(existing) = maps.inverse.get(&value) {
            panic!(
                "{} value already registered as {existing}, rejected for {name}",
                self.what
            );
        }
        maps.inverse.insert(value.clone(), name.clone());
        maps.forward.insert(name, value);
    }

    /// Freeze the builder into an immutable registry.
    pub fn build(self) -> NamedComponentRegistry<T> {
        let maps = self.inner.into_inner().expect("registry lock poisoned");
        NamedComponentRegistry {
            what: self.what,
            forward: maps.forward,
            inverse: maps.inverse,
        }
    }
}

/// An immutable bidirectional mapping between names and components.
///
/// Constructed once via [`NamedComponentRegistry::builder`]; every lookup
/// afterward is a lock-free read, safe to share across threads by
/// reference.
pub struct NamedComponentRegistry<T> {
    what: &'static str,
    forward: HashMap<ResourceName, T>,
    inverse: HashMap<T, ResourceName>,
}

impl<T: Clone + Eq + Hash> NamedComponentRegistry<T> {
    /// Start building a registry. `what` labels the component kind in
    /// diagnostics, e.g. `"page type"` or `"tile"`.
    pub fn builder(what: &'static str) -> RegistryBuilder<T> {
        RegistryBuilder {
            what,
            inner: Mutex::new(Maps {
                forward: HashMap::new(),
                inverse: HashMap::new(),
            }),
        }
    }

    /// The component kind this registry holds, for diagnostics.
    pub fn what(&self) -> &'static str {
        self.what
    }

    /// Look up a component by name. Absence is an ordinary outcome: the
    /// name may belong to content that is not installed.
    pub fn get_value(&self, name: &ResourceName) -> Option<&T> {
        self.forward.get(name)
    }

    /// The name a component was registered under.
    ///
    /// # Panics
    ///
    /// Panics when the value was never registered. Serialization paths
    /// rely on this being total for every legitimately obtained
    /// component; an unregistered value here is a defect upstream.
    pub fn get_key(&self, value: &T) -> &ResourceName {
        match self.inverse.get(value) {
            Some(name) => name,
            None => panic!("unregistered {} value passed to get_key", self.what),
        }
    }

    /// The name a component was registered under, or `None` when the
    /// value is unknown.
    pub fn get_optional_key(&self, value: &T) -> Option<&ResourceName> {
        self.inverse.get(value)
    }

    pub fn contains(&self, name: &ResourceName) -> bool {
        self.forward.contains_key(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &ResourceName> {
        self.forward.keys()
    }

    pub fn values(&self) -> impl Iterator<Item = &T> {
        self.forward.values()
    }

    pub fn len(&self) -> usize {
        self.forward.len()
    }

    pub fn is_empty(&self) -> bool {
        self.forward.is_empty()
    }
}
