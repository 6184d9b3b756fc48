//! Object value type.

use core::cell::RefCell;
use core::fmt::{self, Display, Formatter};
use std::rc::Rc;

use indexmap::IndexMap;

use crate::value::Value;

/// What an object inherits from.
///
/// Only objects with a [`Base`](Prototype::Base) or [`Null`](Prototype::Null)
/// prototype are plain mappings. A [`Class`](Prototype::Class) object carries
/// behavior the cloner knows nothing about.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Prototype {
    /// The ordinary object prototype
    #[default]
    Base,
    /// No prototype at all
    Null,
    /// An instance of a named class
    Class(Rc<str>),
}

impl Prototype {
    /// Creates a class prototype.
    pub fn class(name: &str) -> Self {
        Prototype::Class(Rc::from(name))
    }

    /// Whether objects with this prototype are plain key-value mappings.
    pub fn is_plain(&self) -> bool {
        matches!(self, Prototype::Base | Prototype::Null)
    }
}

impl Display for Prototype {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Prototype::Base => f.write_str("Object"),
            Prototype::Null => f.write_str("null"),
            Prototype::Class(name) => f.write_str(name),
        }
    }
}

#[derive(Default)]
struct ObjectData {
    prototype: Prototype,
    entries: IndexMap<String, Value>,
}

/// A shared, mutable key-value mapping that enumerates keys in insertion
/// order.
#[derive(Clone, Default)]
pub struct VObject(Rc<RefCell<ObjectData>>);

impl VObject {
    /// Creates an empty object with the base prototype.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty object with the given prototype.
    #[must_use]
    pub fn with_prototype(prototype: Prototype) -> Self {
        VObject(Rc::new(RefCell::new(ObjectData {
            prototype,
            entries: IndexMap::new(),
        })))
    }

    /// Returns the prototype.
    #[must_use]
    pub fn prototype(&self) -> Prototype {
        self.0.borrow().prototype.clone()
    }

    /// Number of keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().entries.len()
    }

    /// Returns `true` if the object has no keys.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Inserts a key. An existing key keeps its position.
    pub fn insert(&self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.0.borrow_mut().entries.insert(key.into(), value.into())
    }

    /// Returns the value under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<Value> {
        self.0.borrow().entries.get(key).cloned()
    }

    /// Whether `key` is present.
    #[must_use]
    pub fn contains_key(&self, key: &str) -> bool {
        self.0.borrow().entries.contains_key(key)
    }

    /// Removes `key`, preserving the order of the remaining keys.
    pub fn remove(&self, key: &str) -> Option<Value> {
        self.0.borrow_mut().entries.shift_remove(key)
    }

    /// Snapshot of the keys in enumeration order.
    #[must_use]
    pub fn keys(&self) -> Vec<String> {
        self.0.borrow().entries.keys().cloned().collect()
    }

    /// Snapshot of the entries in enumeration order. Values are shared handles.
    #[must_use]
    pub fn entries(&self) -> Vec<(String, Value)> {
        self.0
            .borrow()
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    /// Whether both handles refer to the same object.
    #[must_use]
    pub fn ptr_eq(&self, other: &VObject) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for VObject {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let obj = VObject::new();
        for (k, v) in iter {
            obj.insert(k, v);
        }
        obj
    }
}
