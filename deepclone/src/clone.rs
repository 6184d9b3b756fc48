//! The deep clone algorithm.

use crate::array::VArray;
use crate::depth::Depth;
use crate::error::{Result, UnclonableValueError};
use crate::memo::{Identity, Memo};
use crate::object::VObject;
use crate::tracing_macros::{debug, trace};
use crate::value::Value;

/// Deep-clones `value` with unbounded depth and a fresh memo.
///
/// ```
/// use deepclone::{Value, deep_clone, value};
///
/// let original = value!({ "list": [1, 2, 3] });
/// let copy = deep_clone(&original).unwrap();
/// assert_eq!(copy, original);
/// assert!(!Value::same(&copy, &original));
/// ```
pub fn deep_clone(value: &Value) -> Result<Value> {
    deep_clone_to_depth(value, Depth::Unbounded)
}

/// Deep-clones at most `depth` levels of `value` with a fresh memo.
///
/// At depth `0` the value itself is returned. At depth `1` the root is copied
/// but its children are shared with the original, and so on.
pub fn deep_clone_to_depth(value: &Value, depth: impl Into<Depth>) -> Result<Value> {
    let depth = depth.into();
    let mut memo = Memo::new();
    debug!(%depth, value_type = %value.value_type(), "deep clone");
    deep_clone_with(value, depth, &mut memo)
}

/// Deep-clones `value` recording every copied composite in `memo`.
///
/// Anything already in `memo` resolves to its recorded clone instead of being
/// copied again. This is the entry point [`SelfClone`](crate::SelfClone)
/// implementations recurse through.
pub fn deep_clone_with(value: &Value, depth: Depth, memo: &mut Memo) -> Result<Value> {
    let coerced;
    let value = match value.as_host().and_then(|host| host.object().as_coerce()) {
        Some(coerce) => {
            coerced = coerce.to_scalar()?;
            &coerced
        }
        None => value,
    };

    if depth.is_exhausted() {
        trace!(value_type = %value.value_type(), "depth exhausted, sharing value");
        return Ok(value.clone());
    }

    let Some(id) = Identity::of(value) else {
        return Ok(value.clone());
    };

    if let Some(existing) = memo.lookup(id) {
        trace!(?id, "memo hit");
        return Ok(existing.clone());
    }

    let fresh = match value {
        Value::Object(obj) if obj.prototype().is_plain() => clone_object(value, obj, id, depth, memo)?,
        Value::Array(arr) => clone_array(value, arr, id, depth, memo)?,
        Value::Host(host) => match host.object().as_self_clone() {
            Some(cloneable) => {
                trace!(type_name = host.type_name(), %depth, "delegating to self clone");
                let cloned = cloneable.self_clone(host, depth, memo)?;
                memo.insert(id, value, cloned.clone());
                cloned
            }
            None => return Err(UnclonableValueError::new(host.type_name(), value.clone()).into()),
        },
        Value::Object(obj) => {
            return Err(UnclonableValueError::new(obj.prototype().to_string(), value.clone()).into());
        }
        _ => return Ok(value.clone()),
    };

    Ok(memo.lookup(id).cloned().unwrap_or(fresh))
}

fn clone_object(
    original: &Value,
    obj: &VObject,
    id: Identity,
    depth: Depth,
    memo: &mut Memo,
) -> Result<Value> {
    let copy = VObject::with_prototype(obj.prototype());
    // Registered before the children so a cycle back here finds the copy.
    memo.insert(id, original, copy.clone().into());
    trace!(?id, keys = obj.len(), "copying object");

    let child_depth = depth.descend();
    for (key, child) in obj.entries() {
        let child = deep_clone_with(&child, child_depth, memo)?;
        copy.insert(key, child);
    }
    Ok(copy.into())
}

fn clone_array(
    original: &Value,
    arr: &VArray,
    id: Identity,
    depth: Depth,
    memo: &mut Memo,
) -> Result<Value> {
    let slots = arr.slots();
    let copy = VArray::with_capacity(slots.len());
    memo.insert(id, original, copy.clone().into());
    trace!(?id, len = slots.len(), "copying array");

    let child_depth = depth.descend();
    for slot in slots {
        match slot {
            Some(child) => copy.push(deep_clone_with(&child, child_depth, memo)?),
            None => copy.push_hole(),
        }
    }
    Ok(copy.into())
}

impl Value {
    /// Deep-clones this value with unbounded depth. See [`deep_clone`].
    pub fn deep_clone(&self) -> Result<Value> {
        deep_clone(self)
    }
}
