use deepclone::{Depth, Memo, Value, deep_clone_to_depth, deep_clone_with, value};
use deepclone_testhelpers::test;

use crate::fixtures::{self, field};

#[test]
fn zero_levels_of_the_graph() {
    let graph: Value = fixtures::graph().into();
    let copy = deep_clone_to_depth(&graph, 0).unwrap();
    assert!(Value::same(&copy, &graph));
}

#[test]
fn one_level_of_the_graph() {
    let graph: Value = fixtures::graph().into();
    let copy = deep_clone_to_depth(&graph, 1).unwrap();
    assert_eq!(copy, graph);
    assert!(!Value::same(&copy, &graph));
    assert!(Value::same(&field(&copy, "object"), &field(&graph, "object")));
}

#[test]
fn two_levels_of_the_graph() {
    let graph: Value = fixtures::graph().into();
    let copy = deep_clone_to_depth(&graph, 2).unwrap();
    assert_eq!(copy, graph);
    assert!(!Value::same(&field(&copy, "object"), &field(&graph, "object")));
    assert_eq!(field(&copy, "object"), field(&graph, "object"));

    let nested_copy = field(&copy, "nestedObject");
    let nested_orig = field(&graph, "nestedObject");
    assert!(Value::same(&field(&nested_copy, "a"), &field(&nested_orig, "a")));
}

#[test]
fn two_levels_of_nested_arrays() {
    let graph: Value = fixtures::graph().into();
    let copy = deep_clone_to_depth(&graph, 2).unwrap();
    let rows = field(&copy, "nestedArray");
    let original_rows = field(&graph, "nestedArray");
    assert!(!Value::same(&rows, &original_rows));
    assert!(Value::same(&rows.at(0).unwrap(), &original_rows.at(0).unwrap()));
}

#[test]
fn zero_levels() {
    let object = fixtures::two_levels();
    assert!(Value::same(&deep_clone_to_depth(&object, 0).unwrap(), &object));
}

#[test]
fn one_level() {
    let object = fixtures::two_levels();
    let copy = deep_clone_to_depth(&object, 1).unwrap();
    assert_eq!(copy, object);
    assert!(!Value::same(&copy, &object));
    assert!(Value::same(&field(&copy, "a"), &field(&object, "a")));
}

#[test]
fn two_levels() {
    let object = fixtures::two_levels();
    let copy = deep_clone_to_depth(&object, 2).unwrap();
    assert_eq!(copy, object);
    assert!(!Value::same(&copy, &object));
    assert!(!Value::same(&field(&copy, "a"), &field(&object, "a")));
    assert_eq!(field(&copy, "a"), field(&object, "a"));
}

#[test]
fn boundary_values_are_not_memoized() {
    let object = fixtures::two_levels();
    let mut memo = Memo::new();
    deep_clone_with(&object, Depth::Limited(1), &mut memo).unwrap();
    assert_eq!(memo.len(), 1);
    assert!(memo.has(&object));
    assert!(!memo.has(&field(&object, "a")));
}

#[test]
fn unset_depth_is_unbounded() {
    let deep = value!({ "l1": { "l2": { "l3": { "l4": [1] } } } });
    let copy = deep_clone_to_depth(&deep, None::<usize>).unwrap();
    let leaf = |v: &Value| field(&field(&field(&field(v, "l1"), "l2"), "l3"), "l4");
    assert!(!Value::same(&leaf(&copy), &leaf(&deep)));
    assert_eq!(copy, deep);
}
