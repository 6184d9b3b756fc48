//! `deepclone` copies dynamic value graphs: objects, arrays, scalars and
//! foreign host objects, linked together with shared references and cycles.
//!
//! # Features
//!
//! - **Identity preserving**: two positions that share a sub-object in the
//!   original share one copy in the clone, and cycles stay cycles
//! - **Depth bounded**: copy only the first `n` levels and share the rest
//! - **Sparse arrays**: holes survive the copy as holes
//! - **Extensible**: host objects can clone themselves or collapse to a
//!   scalar through explicit capabilities
//!
//! # Example
//!
//! ```
//! use deepclone::{Value, VObject, deep_clone};
//!
//! let node = VObject::new();
//! node.insert("name", "root");
//! node.insert("self", node.clone());
//!
//! let copy = deep_clone(&node.clone().into()).unwrap();
//! let copy_self = copy.get("self").unwrap();
//! assert!(Value::same(&copy_self, &copy));
//! assert!(!Value::same(&copy, &node.into()));
//! ```
//!
//! Anything the cloner does not know how to copy, such as a class instance
//! or a host object without [`SelfClone`], makes the whole call fail with
//! [`CloneError::Unclonable`].
//!
//! # Cycles and memory
//!
//! Arrays and objects are strong `Rc` handles, so a cyclic graph is a
//! reference cycle and is never freed on its own. Cloning a cyclic graph
//! produces another one. Break a cycle when you are done with it, for
//! example by calling [`VObject::remove`] or [`VArray::remove`] on a
//! back-edge, or the graph leaks.

#![warn(missing_docs)]
#![warn(clippy::std_instead_of_core)]
#![forbid(unsafe_code)]

mod macros;
mod tracing_macros;

mod value;
pub use value::*;

mod array;
pub use array::*;

mod object;
pub use object::*;

mod host;
pub use host::*;

mod depth;
pub use depth::*;

mod memo;
pub use memo::*;

mod error;
pub use error::*;

mod clone;
pub use clone::*;

mod eq;
pub use eq::structural_eq;

mod format;
pub use format::format_value;
