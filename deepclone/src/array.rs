//! Array value type.
//!
//! Arrays may be sparse. Each slot is either occupied or a hole, and a hole
//! is distinct from an occupied slot holding `undefined` or `null`.

use core::cell::RefCell;
use std::rc::Rc;

use crate::value::Value;

/// A shared, mutable, possibly sparse array.
///
/// Cloning a `VArray` handle shares the underlying storage.
#[derive(Clone, Default)]
pub struct VArray(Rc<RefCell<Vec<Option<Value>>>>);

impl VArray {
    /// Creates a new empty array.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an array of `len` holes.
    #[must_use]
    pub fn with_len(len: usize) -> Self {
        VArray(Rc::new(RefCell::new(vec![None; len])))
    }

    /// Creates an empty array with room for `cap` slots.
    #[must_use]
    pub fn with_capacity(cap: usize) -> Self {
        VArray(Rc::new(RefCell::new(Vec::with_capacity(cap))))
    }

    /// Number of slots, holes included.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.borrow().len()
    }

    /// Returns `true` if the array has no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Number of occupied slots.
    #[must_use]
    pub fn present_len(&self) -> usize {
        self.0.borrow().iter().filter(|slot| slot.is_some()).count()
    }

    /// Appends an element.
    pub fn push(&self, value: impl Into<Value>) {
        self.0.borrow_mut().push(Some(value.into()));
    }

    /// Appends a hole.
    pub fn push_hole(&self) {
        self.0.borrow_mut().push(None);
    }

    /// Stores `value` at `index`, padding with holes if `index` is past the end.
    ///
    /// # Panics
    ///
    /// Panics with a capacity overflow if `index` is `usize::MAX`, since no
    /// array can hold `usize::MAX + 1` slots. Like [`Vec::resize`], growing to
    /// an index too large to allocate also panics or aborts.
    pub fn set(&self, index: usize, value: impl Into<Value>) {
        let mut slots = self.0.borrow_mut();
        if index >= slots.len() {
            let Some(len) = index.checked_add(1) else {
                panic!("capacity overflow: array index {index} has no room for a slot");
            };
            slots.resize(len, None);
        }
        slots[index] = Some(value.into());
    }

    /// Returns the element at `index`. Holes and out-of-bounds both yield `None`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Value> {
        self.0.borrow().get(index).cloned().flatten()
    }

    /// Whether slot `index` exists and is occupied.
    #[must_use]
    pub fn has(&self, index: usize) -> bool {
        matches!(self.0.borrow().get(index), Some(Some(_)))
    }

    /// Empties slot `index`, leaving a hole. The length is unchanged.
    pub fn remove(&self, index: usize) -> Option<Value> {
        self.0.borrow_mut().get_mut(index).and_then(Option::take)
    }

    /// Snapshot of every slot. The elements are shared handles.
    #[must_use]
    pub fn slots(&self) -> Vec<Option<Value>> {
        self.0.borrow().clone()
    }

    /// Snapshot of the occupied slots with their indices.
    #[must_use]
    pub fn entries(&self) -> Vec<(usize, Value)> {
        self.0
            .borrow()
            .iter()
            .enumerate()
            .filter_map(|(i, slot)| slot.clone().map(|v| (i, v)))
            .collect()
    }

    /// Whether both handles refer to the same array.
    #[must_use]
    pub fn ptr_eq(&self, other: &VArray) -> bool {
        Rc::ptr_eq(&self.0, &other.0)
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl<T: Into<Value>> FromIterator<T> for VArray {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        VArray(Rc::new(RefCell::new(
            iter.into_iter().map(|v| Some(v.into())).collect(),
        )))
    }
}
