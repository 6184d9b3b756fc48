//! Structural comparison of value graphs.
//!
//! Comparison is coinductive: a pair of composites that is already being
//! compared further up the stack is assumed equal, which is what lets two
//! cyclic graphs of the same shape compare equal instead of recursing
//! forever.

use std::collections::HashSet;

use crate::memo::Identity;
use crate::value::Value;

/// Whether `a` and `b` have the same shape and scalar contents.
///
/// Scalars compare by value (`Int` and `Float` numerically), functions and
/// host objects by identity unless the host type implements
/// [`HostObject::host_eq`](crate::HostObject::host_eq), objects by prototype
/// and key set regardless of key order, and arrays slot by slot with holes
/// only matching holes.
#[must_use]
pub fn structural_eq(a: &Value, b: &Value) -> bool {
    let mut assumed = HashSet::new();
    eq_inner(a, b, &mut assumed)
}

fn eq_inner(a: &Value, b: &Value, assumed: &mut HashSet<(Identity, Identity)>) -> bool {
    if Value::same(a, b) {
        return true;
    }

    if let (Some(ia), Some(ib)) = (Identity::of(a), Identity::of(b)) {
        if !assumed.insert((ia, ib)) {
            return true;
        }
    }

    match (a, b) {
        (Value::Float(x), Value::Float(y)) => x.is_nan() && y.is_nan(),
        (Value::Object(x), Value::Object(y)) => {
            if x.prototype() != y.prototype() || x.len() != y.len() {
                return false;
            }
            x.entries().iter().all(|(key, left)| match y.get(key) {
                Some(right) => eq_inner(left, &right, assumed),
                None => false,
            })
        }
        (Value::Array(x), Value::Array(y)) => {
            let (left, right) = (x.slots(), y.slots());
            left.len() == right.len()
                && left.iter().zip(&right).all(|pair| match pair {
                    (Some(l), Some(r)) => eq_inner(l, r, assumed),
                    (None, None) => true,
                    _ => false,
                })
        }
        (Value::Host(x), Value::Host(y)) => x.object().host_eq(y.object()),
        _ => false,
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        structural_eq(self, other)
    }
}
