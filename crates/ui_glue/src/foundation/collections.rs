//! Specialized collection types

use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

use slotmap::{DefaultKey, SlotMap};

/// Typed handle for type-safe resource references
///
/// The tag type `T` only distinguishes handle kinds; a file handle can never be
/// passed where a texture handle is expected.
pub struct TypedHandle<T> {
    key: DefaultKey,
    _phantom: PhantomData<fn() -> T>,
}

impl<T> TypedHandle<T> {
    /// Create a new typed handle from a key
    pub const fn new(key: DefaultKey) -> Self {
        Self {
            key,
            _phantom: PhantomData,
        }
    }

    /// Get the underlying key
    pub const fn key(&self) -> DefaultKey {
        self.key
    }
}

// Manual impls: derives would needlessly require `T: Clone` etc.
impl<T> Clone for TypedHandle<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for TypedHandle<T> {}

impl<T> PartialEq for TypedHandle<T> {
    fn eq(&self, other: &Self) -> bool {
        self.key == other.key
    }
}

impl<T> Eq for TypedHandle<T> {}

impl<T> Hash for TypedHandle<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.key.hash(state);
    }
}

impl<T> fmt::Debug for TypedHandle<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = std::any::type_name::<T>();
        let short = name.rsplit("::").next().unwrap_or(name);
        write!(f, "{short}Handle({:?})", self.key)
    }
}

/// Generational table storing `V`s behind [`TypedHandle<Tag>`]s
///
/// Removed handles stay invalid even after their slot is reused.
pub struct HandleMap<Tag, V> {
    slots: SlotMap<DefaultKey, V>,
    _tag: PhantomData<fn() -> Tag>,
}

impl<Tag, V> HandleMap<Tag, V> {
    /// Create an empty table
    pub fn new() -> Self {
        Self {
            slots: SlotMap::new(),
            _tag: PhantomData,
        }
    }

    /// Insert a value and return its handle
    pub fn insert(&mut self, value: V) -> TypedHandle<Tag> {
        TypedHandle::new(self.slots.insert(value))
    }

    /// Remove a value by handle
    pub fn remove(&mut self, handle: TypedHandle<Tag>) -> Option<V> {
        self.slots.remove(handle.key())
    }

    /// Get a value by handle
    pub fn get(&self, handle: TypedHandle<Tag>) -> Option<&V> {
        self.slots.get(handle.key())
    }

    /// Get a mutable reference to a value by handle
    pub fn get_mut(&mut self, handle: TypedHandle<Tag>) -> Option<&mut V> {
        self.slots.get_mut(handle.key())
    }

    /// Check whether a handle is still live
    pub fn contains(&self, handle: TypedHandle<Tag>) -> bool {
        self.slots.contains_key(handle.key())
    }

    /// Number of live entries
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// True when no entries are live
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Remove every entry, yielding the values
    pub fn drain(&mut self) -> impl Iterator<Item = V> + '_ {
        self.slots.drain().map(|(_, value)| value)
    }
}

impl<Tag, V> Default for HandleMap<Tag, V> {
    fn default() -> Self {
        Self::new()
    }
}
