use std::any::Any;
use std::cell::RefCell;

use deepclone::{
    CloneError, CoerceToScalar, Depth, HostObject, Memo, Result, SelfClone, VHost, VObject, Value,
    deep_clone, deep_clone_to_depth, deep_clone_with, value,
};
use deepclone_testhelpers::test;

use crate::fixtures::field;

/// Records what the cloner handed it.
#[derive(Default)]
struct Recorder {
    parent: RefCell<Option<Value>>,
    seen: RefCell<Option<(Depth, bool)>>,
}

impl HostObject for Recorder {
    fn type_name(&self) -> &str {
        "Recorder"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_self_clone(&self) -> Option<&dyn SelfClone> {
        Some(self)
    }
}

impl SelfClone for Recorder {
    fn self_clone(&self, _this: &VHost, depth: Depth, memo: &mut Memo) -> Result<Value> {
        let parent_known = self.parent.borrow().as_ref().is_some_and(|p| memo.has(p));
        *self.seen.borrow_mut() = Some((depth, parent_known));
        Ok("hello".into())
    }
}

#[test]
fn delegates_to_self_clone_with_less_depth() {
    let object = VObject::new();
    let recorder = VHost::new(Recorder::default());
    object.insert("child", recorder.clone());
    let object: Value = object.into();
    *recorder.downcast_ref::<Recorder>().unwrap().parent.borrow_mut() = Some(object.clone());

    let copy = deep_clone_to_depth(&object, 2).unwrap();
    assert_eq!(field(&copy, "child").as_str(), Some("hello"));

    let seen = *recorder.downcast_ref::<Recorder>().unwrap().seen.borrow();
    assert_eq!(seen, Some((Depth::Limited(1), true)));
}

#[test]
fn self_clone_result_is_memoized() {
    let recorder = VHost::new(Recorder::default());
    let root = value!([recorder, recorder]);
    let mut memo = Memo::new();
    let copy = deep_clone_with(&root, Depth::Unbounded, &mut memo).unwrap();
    assert_eq!(copy, value!(["hello", "hello"]));
    assert_eq!(memo.get(&recorder.into()).and_then(Value::as_str), Some("hello"));
}

/// A linked node that copies itself and its successor.
struct Node {
    label: &'static str,
    next: RefCell<Option<Value>>,
}

impl Node {
    fn new(label: &'static str) -> VHost {
        VHost::new(Node {
            label,
            next: RefCell::new(None),
        })
    }

    fn of(host: &VHost) -> &Node {
        host.downcast_ref::<Node>().unwrap()
    }
}

impl HostObject for Node {
    fn type_name(&self) -> &str {
        "Node"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_self_clone(&self) -> Option<&dyn SelfClone> {
        Some(self)
    }

    fn host_eq(&self, other: &dyn HostObject) -> bool {
        other
            .as_any()
            .downcast_ref::<Node>()
            .is_some_and(|other| other.label == self.label)
    }
}

impl SelfClone for Node {
    fn self_clone(&self, this: &VHost, depth: Depth, memo: &mut Memo) -> Result<Value> {
        let copy = Node::new(self.label);
        memo.set(&this.clone().into(), copy.clone().into())?;
        let next = self.next.borrow().clone();
        if let Some(next) = next {
            let next = deep_clone_with(&next, depth.descend(), memo)?;
            *Node::of(&copy).next.borrow_mut() = Some(next);
        }
        Ok(copy.into())
    }
}

#[test]
fn self_clone_can_recurse_through_a_cycle() {
    let a = Node::new("a");
    let b = Node::new("b");
    *Node::of(&a).next.borrow_mut() = Some(b.clone().into());
    *Node::of(&b).next.borrow_mut() = Some(a.clone().into());

    let copy = deep_clone(&a.clone().into()).unwrap();
    let copy_a = copy.as_host().unwrap();
    assert!(!copy_a.ptr_eq(&a));
    assert_eq!(Node::of(copy_a).label, "a");

    let copy_b = Node::of(copy_a).next.borrow().clone().unwrap();
    let copy_b = copy_b.as_host().unwrap().clone();
    assert!(!copy_b.ptr_eq(&b));
    assert_eq!(Node::of(&copy_b).label, "b");

    let back = Node::of(&copy_b).next.borrow().clone().unwrap();
    assert!(Value::same(&back, &copy));
}

#[test]
fn self_clone_children_respect_depth() {
    let a = Node::new("a");
    let b = Node::new("b");
    *Node::of(&a).next.borrow_mut() = Some(b.clone().into());

    let copy = deep_clone_to_depth(&a.into(), 1).unwrap();
    let next = Node::of(copy.as_host().unwrap()).next.borrow().clone().unwrap();
    assert!(next.as_host().unwrap().ptr_eq(&b));
}

/// A boxed number.
struct Boxed(i64);

impl HostObject for Boxed {
    fn type_name(&self) -> &str {
        "Boxed"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_coerce(&self) -> Option<&dyn CoerceToScalar> {
        Some(self)
    }
}

impl CoerceToScalar for Boxed {
    fn to_scalar(&self) -> Result<Value> {
        Ok(Value::from(self.0))
    }
}

#[test]
fn boxed_scalars_collapse() {
    let root = VObject::new();
    root.insert("n", VHost::new(Boxed(5)));
    let copy = deep_clone(&root.into()).unwrap();
    assert_eq!(field(&copy, "n").as_int(), Some(5));
}

#[test]
fn coercion_runs_before_the_depth_check() {
    let boxed: Value = VHost::new(Boxed(5)).into();
    let copy = deep_clone_to_depth(&boxed, 0).unwrap();
    assert_eq!(copy.as_int(), Some(5));
}

/// Coerces to whatever value it wraps.
struct Wrapper(Value);

impl HostObject for Wrapper {
    fn type_name(&self) -> &str {
        "Wrapper"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_coerce(&self) -> Option<&dyn CoerceToScalar> {
        Some(self)
    }
}

impl CoerceToScalar for Wrapper {
    fn to_scalar(&self) -> Result<Value> {
        Ok(self.0.clone())
    }
}

#[test]
fn coerced_composites_are_cloned() {
    let inner = value!({ "x": [1, 2] });
    let wrapped: Value = VHost::new(Wrapper(inner.clone())).into();
    let copy = deep_clone(&wrapped).unwrap();
    assert_eq!(copy, inner);
    assert!(!Value::same(&copy, &inner));
}

#[test]
fn coercion_is_not_reapplied() {
    let twice: Value = VHost::new(Wrapper(VHost::new(Wrapper(Value::from(1))).into())).into();
    let err = deep_clone(&twice).unwrap_err();
    assert_eq!(err.as_unclonable().map(|e| e.type_name()), Some("Wrapper"));
}

#[derive(Debug)]
struct Poisoned;

impl core::fmt::Display for Poisoned {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str("poisoned")
    }
}

impl core::error::Error for Poisoned {}

struct Faulty;

impl HostObject for Faulty {
    fn type_name(&self) -> &str {
        "Faulty"
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_coerce(&self) -> Option<&dyn CoerceToScalar> {
        Some(self)
    }
}

impl CoerceToScalar for Faulty {
    fn to_scalar(&self) -> Result<Value> {
        Err(CloneError::host(Poisoned))
    }
}

#[test]
fn coercion_errors_propagate_unmodified() {
    let root = value!({ "ok": 1 });
    root.as_object().unwrap().insert("bad", VHost::new(Faulty));
    let err = deep_clone(&root).unwrap_err();
    let CloneError::Host(inner) = &err else {
        panic!("expected a host error");
    };
    assert!(inner.downcast_ref::<Poisoned>().is_some());
    assert_eq!(err.to_string(), "host object failed: poisoned");
}
