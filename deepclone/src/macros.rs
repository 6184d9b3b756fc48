/// Builds a [`Value`](crate::Value) from JSON-like syntax.
///
/// Object keys are string literals. Any other token tree is converted with
/// `Value::from`, after cloning it, so existing handles can be placed in
/// several positions to build shared structure:
///
/// ```
/// use deepclone::{Value, value};
///
/// let shared = value!({ "x": 1 });
/// let root = value!({ "p": shared, "q": shared, "list": [1, "two", null] });
/// assert!(Value::same(&root.get("p").unwrap(), &root.get("q").unwrap()));
/// ```
///
/// Negative numbers span two tokens and must be wrapped in parentheses,
/// e.g. `(-1)`.
#[macro_export]
macro_rules! value {
    (null) => {
        $crate::Value::Null
    };
    (undefined) => {
        $crate::Value::Undefined
    };
    ([ $($elem:tt),* $(,)? ]) => {{
        let arr = $crate::VArray::new();
        $( arr.push($crate::value!($elem)); )*
        $crate::Value::from(arr)
    }};
    ({ $($key:literal : $val:tt),* $(,)? }) => {{
        let obj = $crate::VObject::new();
        $( obj.insert($key, $crate::value!($val)); )*
        $crate::Value::from(obj)
    }};
    ($other:expr) => {
        $crate::Value::from(::core::clone::Clone::clone(&$other))
    };
}
