//! The dynamic `Value` handle and its scalar payloads.
//!
//! A `Value` is a handle: calling [`Clone::clone`] on it copies the handle and
//! shares whatever composite it points at. Copying the graph itself is the
//! job of [`deep_clone`](crate::deep_clone).
//!
//! Every value falls into exactly one category:
//!
//! | Category              | Variants                                              |
//! |-----------------------|-------------------------------------------------------|
//! | scalar                | `Undefined`, `Null`, `Bool`, `Int`, `Float`, `String`, `Function` |
//! | plain container       | `Array`, `Object` with a base or null prototype       |
//! | self-cloning          | `Host` whose type implements [`SelfClone`](crate::SelfClone) |
//! | unsupported composite | `Object` with a class prototype, other `Host`s        |

use core::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;

use crate::array::VArray;
use crate::host::VHost;
use crate::object::VObject;

/// Enum distinguishing the value types.
#[derive(Debug, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ValueType {
    /// The absence of a value
    Undefined,
    /// Null value
    Null,
    /// Boolean value
    Bool,
    /// Signed integer
    Int,
    /// Floating point number
    Float,
    /// Immutable UTF-8 text
    String,
    /// Callable, shared by reference
    Function,
    /// Ordered sequence, possibly with holes
    Array,
    /// Key-value mapping
    Object,
    /// Foreign object supplied by the embedding program
    Host,
}

impl ValueType {
    /// Whether values of this type have reference identity and get copied.
    pub const fn is_composite(self) -> bool {
        matches!(self, ValueType::Array | ValueType::Object | ValueType::Host)
    }
}

impl Display for ValueType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueType::Undefined => "undefined",
            ValueType::Null => "null",
            ValueType::Bool => "bool",
            ValueType::Int => "int",
            ValueType::Float => "float",
            ValueType::String => "string",
            ValueType::Function => "function",
            ValueType::Array => "array",
            ValueType::Object => "object",
            ValueType::Host => "host",
        };
        f.write_str(name)
    }
}

/// Immutable shared text.
#[derive(Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VString(Rc<str>);

impl VString {
    /// Creates a string value.
    pub fn new(s: &str) -> Self {
        VString(Rc::from(s))
    }

    /// Returns the text.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Debug for VString {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Debug::fmt(self.as_str(), f)
    }
}

impl From<&str> for VString {
    fn from(s: &str) -> Self {
        VString::new(s)
    }
}

impl From<String> for VString {
    fn from(s: String) -> Self {
        VString(Rc::from(s))
    }
}

type NativeFn = dyn Fn(&[Value]) -> Value;

/// A callable value. Functions are treated like scalars by the cloner: they
/// are returned as-is and keep their identity.
#[derive(Clone)]
pub struct VFunction {
    name: Rc<str>,
    func: Rc<NativeFn>,
}

impl VFunction {
    /// Wraps a closure under a display name.
    pub fn new(name: &str, func: impl Fn(&[Value]) -> Value + 'static) -> Self {
        Self {
            name: Rc::from(name),
            func: Rc::new(func),
        }
    }

    /// Returns the function's display name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Invokes the function.
    pub fn call(&self, args: &[Value]) -> Value {
        (self.func)(args)
    }

    /// Whether both handles refer to the same function.
    pub fn ptr_eq(&self, other: &VFunction) -> bool {
        Rc::ptr_eq(&self.func, &other.func)
    }
}

impl Debug for VFunction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "<fn {}>", self.name)
    }
}

/// A dynamic value that can represent scalars, functions, arrays, objects or
/// host objects.
#[derive(Clone, Default)]
pub enum Value {
    /// No value at all
    #[default]
    Undefined,
    /// Explicit null
    Null,
    /// `true` or `false`
    Bool(bool),
    /// A signed integer
    Int(i64),
    /// A floating point number
    Float(f64),
    /// Immutable text
    String(VString),
    /// A callable
    Function(VFunction),
    /// An ordered sequence
    Array(VArray),
    /// A key-value mapping
    Object(VObject),
    /// A foreign object
    Host(VHost),
}

impl Value {
    /// Returns the type of this value.
    #[must_use]
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Undefined => ValueType::Undefined,
            Value::Null => ValueType::Null,
            Value::Bool(_) => ValueType::Bool,
            Value::Int(_) => ValueType::Int,
            Value::Float(_) => ValueType::Float,
            Value::String(_) => ValueType::String,
            Value::Function(_) => ValueType::Function,
            Value::Array(_) => ValueType::Array,
            Value::Object(_) => ValueType::Object,
            Value::Host(_) => ValueType::Host,
        }
    }

    /// Returns `true` for arrays, objects and host objects.
    #[must_use]
    pub fn is_composite(&self) -> bool {
        self.value_type().is_composite()
    }

    /// Strict sameness: composites compare by identity, scalars by value.
    ///
    /// `NaN` is never the same as itself, matching IEEE comparison.
    #[must_use]
    pub fn same(a: &Value, b: &Value) -> bool {
        match (a, b) {
            (Value::Undefined, Value::Undefined) | (Value::Null, Value::Null) => true,
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a == b,
            (Value::Int(a), Value::Float(b)) | (Value::Float(b), Value::Int(a)) => {
                int_equals_float(*a, *b)
            }
            (Value::String(a), Value::String(b)) => a == b,
            (Value::Function(a), Value::Function(b)) => a.ptr_eq(b),
            (Value::Array(a), Value::Array(b)) => a.ptr_eq(b),
            (Value::Object(a), Value::Object(b)) => a.ptr_eq(b),
            (Value::Host(a), Value::Host(b)) => a.ptr_eq(b),
            _ => false,
        }
    }

    /// Returns the boolean, if this is one.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer, if this is one.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the number as a float, for both `Int` and `Float`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Returns the text, if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Returns the function, if this is one.
    pub fn as_function(&self) -> Option<&VFunction> {
        match self {
            Value::Function(func) => Some(func),
            _ => None,
        }
    }

    /// Returns the array handle, if this is an array.
    pub fn as_array(&self) -> Option<&VArray> {
        match self {
            Value::Array(arr) => Some(arr),
            _ => None,
        }
    }

    /// Returns the object handle, if this is an object.
    pub fn as_object(&self) -> Option<&VObject> {
        match self {
            Value::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Returns the host handle, if this is a host object.
    pub fn as_host(&self) -> Option<&VHost> {
        match self {
            Value::Host(host) => Some(host),
            _ => None,
        }
    }

    /// Looks up `key` if this is an object.
    pub fn get(&self, key: &str) -> Option<Value> {
        self.as_object().and_then(|obj| obj.get(key))
    }

    /// Looks up slot `index` if this is an array. Holes yield `None`.
    pub fn at(&self, index: usize) -> Option<Value> {
        self.as_array().and_then(|arr| arr.get(index))
    }
}

/// Exact comparison: no rounding of `i` through `f64`.
fn int_equals_float(i: i64, f: f64) -> bool {
    // `i64::MAX as f64` rounds up to 2^63, which is itself out of range.
    f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 && f as i64 == i
}

impl Debug for Value {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&crate::format::format_value(self))
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<u32> for Value {
    fn from(u: u32) -> Self {
        Value::Int(i64::from(u))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(VString::new(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(VString::from(s))
    }
}

impl From<VString> for Value {
    fn from(s: VString) -> Self {
        Value::String(s)
    }
}

impl From<VFunction> for Value {
    fn from(func: VFunction) -> Self {
        Value::Function(func)
    }
}

impl From<VArray> for Value {
    fn from(arr: VArray) -> Self {
        Value::Array(arr)
    }
}

impl From<VObject> for Value {
    fn from(obj: VObject) -> Self {
        Value::Object(obj)
    }
}

impl From<VHost> for Value {
    fn from(host: VHost) -> Self {
        Value::Host(host)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(opt: Option<T>) -> Self {
        opt.map_or(Value::Null, Into::into)
    }
}
