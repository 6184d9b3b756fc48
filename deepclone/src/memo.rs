//! Identity map from visited originals to their clones.
//!
//! The memo is what keeps shared sub-objects shared and cycles finite: the
//! cloner records each composite it meets, and any later encounter of the
//! same allocation resolves to the recorded clone. Entries hold on to the
//! original value so its address stays reserved for as long as the memo
//! lives.

use core::fmt::{self, Debug, Formatter};

use indexmap::IndexMap;

use crate::error::{CloneError, Result};
use crate::value::{Value, ValueType};

/// Reference identity of a composite value: its kind plus the address of the
/// shared allocation behind the handle.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Identity {
    kind: ValueType,
    addr: usize,
}

impl Identity {
    /// Identity of a composite value, or `None` for scalars.
    #[must_use]
    pub fn of(value: &Value) -> Option<Identity> {
        let (kind, addr) = match value {
            Value::Array(arr) => (ValueType::Array, arr.addr()),
            Value::Object(obj) => (ValueType::Object, obj.addr()),
            Value::Host(host) => (ValueType::Host, host.addr()),
            _ => return None,
        };
        Some(Identity { kind, addr })
    }
}

struct MemoEntry {
    original: Value,
    clone: Value,
}

/// Maps original composite values, by identity, to their clones.
///
/// One memo normally lives for a single top-level clone call. A caller can
/// also keep one across several calls, to share clones between them or to
/// look up afterwards which clone belongs to which original.
#[derive(Default)]
pub struct Memo {
    entries: IndexMap<Identity, MemoEntry>,
}

impl Memo {
    /// Creates an empty memo.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of originals recorded.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if nothing has been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `original` has been recorded. Always false for scalars.
    #[must_use]
    pub fn has(&self, original: &Value) -> bool {
        Identity::of(original).is_some_and(|id| self.entries.contains_key(&id))
    }

    /// The clone recorded for `original`. Always `None` for scalars.
    #[must_use]
    pub fn get(&self, original: &Value) -> Option<&Value> {
        Identity::of(original).and_then(|id| self.lookup(id))
    }

    /// Records `clone` as the clone of `original`, returning the clone it
    /// replaces. The original keeps its position in visit order.
    pub fn set(&mut self, original: &Value, clone: Value) -> Result<Option<Value>> {
        let id = Identity::of(original).ok_or(CloneError::NoIdentity {
            value_type: original.value_type(),
        })?;
        Ok(self.insert(id, original, clone))
    }

    /// Owned copy of the clone recorded for `original`.
    #[must_use]
    pub fn clone_of(&self, original: &Value) -> Option<Value> {
        self.get(original).cloned()
    }

    /// `(original, clone)` pairs in the order the originals were first seen.
    pub fn iter(&self) -> impl Iterator<Item = (&Value, &Value)> {
        self.entries
            .values()
            .map(|entry| (&entry.original, &entry.clone))
    }

    /// The recorded originals in visit order.
    pub fn originals(&self) -> impl Iterator<Item = &Value> {
        self.entries.values().map(|entry| &entry.original)
    }

    pub(crate) fn lookup(&self, id: Identity) -> Option<&Value> {
        self.entries.get(&id).map(|entry| &entry.clone)
    }

    pub(crate) fn insert(&mut self, id: Identity, original: &Value, clone: Value) -> Option<Value> {
        match self.entries.get_mut(&id) {
            Some(entry) => Some(core::mem::replace(&mut entry.clone, clone)),
            None => {
                self.entries.insert(
                    id,
                    MemoEntry {
                        original: original.clone(),
                        clone,
                    },
                );
                None
            }
        }
    }
}

impl Debug for Memo {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("Memo")
            .field("entries", &self.entries.len())
            .finish()
    }
}
