use core::fmt;

use crate::value::{Value, ValueType};

/// Errors that can occur while deep-cloning a value graph.
#[derive(Debug)]
pub enum CloneError {
    /// A composite value was neither a plain container nor self-cloning.
    Unclonable(UnclonableValueError),

    /// A scalar was used as a memo key. Scalars have no identity.
    NoIdentity {
        /// The type of the offending key.
        value_type: ValueType,
    },

    /// A host capability (coercion or self-clone) failed. The inner error is
    /// passed through untouched.
    Host(Box<dyn core::error::Error>),
}

impl CloneError {
    /// Wrap an error raised by a host object's own logic.
    pub fn host(err: impl core::error::Error + 'static) -> Self {
        CloneError::Host(Box::new(err))
    }

    /// Returns the unclonable-value details, if that is what this error is.
    pub fn as_unclonable(&self) -> Option<&UnclonableValueError> {
        match self {
            CloneError::Unclonable(err) => Some(err),
            _ => None,
        }
    }
}

impl fmt::Display for CloneError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CloneError::Unclonable(err) => fmt::Display::fmt(err, f),
            CloneError::NoIdentity { value_type } => {
                write!(f, "{value_type} values have no identity and cannot key a memo")
            }
            CloneError::Host(err) => write!(f, "host object failed: {err}"),
        }
    }
}

impl core::error::Error for CloneError {
    fn source(&self) -> Option<&(dyn core::error::Error + 'static)> {
        match self {
            CloneError::Unclonable(err) => Some(err),
            CloneError::NoIdentity { .. } => None,
            CloneError::Host(err) => Some(err.as_ref()),
        }
    }
}

impl From<UnclonableValueError> for CloneError {
    fn from(err: UnclonableValueError) -> Self {
        CloneError::Unclonable(err)
    }
}

/// A composite value that has no cloning strategy: it is not a plain
/// object or array, and it does not implement [`SelfClone`](crate::SelfClone).
pub struct UnclonableValueError {
    type_name: String,
    value: Value,
}

impl UnclonableValueError {
    pub(crate) fn new(type_name: impl Into<String>, value: Value) -> Self {
        Self {
            type_name: type_name.into(),
            value,
        }
    }

    /// Name of the class or host type that could not be cloned.
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// The offending value itself, so callers can compare identities.
    pub fn value(&self) -> &Value {
        &self.value
    }
}

// The offending value may be cyclic, so Debug only names it.
impl fmt::Debug for UnclonableValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("UnclonableValueError")
            .field("type_name", &self.type_name)
            .field("value_type", &self.value.value_type())
            .finish()
    }
}

impl fmt::Display for UnclonableValueError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "can't clone {} value of type `{}`",
            self.value.value_type(),
            self.type_name
        )
    }
}

impl core::error::Error for UnclonableValueError {}

/// Result type for clone operations.
pub type Result<T, E = CloneError> = core::result::Result<T, E>;
