//! Foreign objects and the capabilities they can opt into.
//!
//! A host object is any Rust type the embedding program wants to place in a
//! value graph. By default the cloner refuses to copy it. A host type opts
//! into cloning by implementing [`SelfClone`] and returning itself from
//! [`HostObject::as_self_clone`], and into scalar collapse by implementing
//! [`CoerceToScalar`] and returning itself from [`HostObject::as_coerce`].

use core::any::Any;
use core::fmt::{self, Debug, Formatter};
use std::rc::Rc;

use crate::depth::Depth;
use crate::error::Result;
use crate::memo::Memo;
use crate::value::Value;

/// A foreign object that can live inside a [`Value`].
pub trait HostObject: Any {
    /// Name of the host type, used in diagnostics and errors.
    fn type_name(&self) -> &str;

    /// Returns the object as `Any` for downcasting.
    fn as_any(&self) -> &dyn Any;

    /// Exposes the scalar coercion capability, if this type has one.
    fn as_coerce(&self) -> Option<&dyn CoerceToScalar> {
        None
    }

    /// Exposes the self-clone capability, if this type has one.
    fn as_self_clone(&self) -> Option<&dyn SelfClone> {
        None
    }

    /// Structural equality against another host object. Identity is checked
    /// before this is called.
    fn host_eq(&self, _other: &dyn HostObject) -> bool {
        false
    }
}

/// Collapses a wrapper object to the value it stands for.
///
/// The cloner calls this once per visited value, before anything else, and
/// does not coerce the result again.
pub trait CoerceToScalar {
    /// Returns the wrapped value. Errors propagate out of the clone call as-is.
    fn to_scalar(&self) -> Result<Value>;
}

/// A host object that knows how to copy itself.
pub trait SelfClone {
    /// Produces the clone of `this`.
    ///
    /// `depth` is the depth this object was reached with; children should be
    /// cloned through [`deep_clone_with`](crate::deep_clone_with) with
    /// `depth.descend()` and the same `memo`. Implementations that can reach
    /// themselves again should register their clone with [`Memo::set`] before
    /// recursing. Returning `this` unchanged declares the object shared.
    fn self_clone(&self, this: &VHost, depth: Depth, memo: &mut Memo) -> Result<Value>;
}

/// A shared handle to a host object.
#[derive(Clone)]
pub struct VHost(Rc<dyn HostObject>);

impl VHost {
    /// Wraps a host object.
    pub fn new<T: HostObject>(object: T) -> Self {
        VHost(Rc::new(object))
    }

    /// Returns the host object.
    pub fn object(&self) -> &dyn HostObject {
        &*self.0
    }

    /// Name of the host type.
    pub fn type_name(&self) -> &str {
        self.0.type_name()
    }

    /// Downcasts to the concrete host type.
    pub fn downcast_ref<T: HostObject>(&self) -> Option<&T> {
        self.0.as_any().downcast_ref::<T>()
    }

    /// Whether both handles refer to the same host object.
    pub fn ptr_eq(&self, other: &VHost) -> bool {
        self.addr() == other.addr()
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.0) as *const () as usize
    }
}

impl Debug for VHost {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<host {}>", self.type_name())
    }
}
