//! Runtime type tags for dynamic data
//!
//! These predicates are meant for boundary data whose shape is only known at
//! runtime, such as decoded JSON or values handed over by a plugin. A
//! [`Dynamic`] is either plain JSON data or a callable.

use super::predicates::{Emptiness, Nil, Truthy};
use serde_json::{Map, Value};
use std::fmt;
use std::sync::Arc;

/// A callable stored inside a [`Dynamic`]
pub type Callable = Arc<dyn Fn(Value) -> Value + Send + Sync>;

/// A runtime-typed value: JSON data or a function over JSON data
#[derive(Clone)]
pub enum Dynamic {
    Data(Value),
    Function(Callable),
}

impl Dynamic {
    /// Wrap a closure as a dynamic function value
    pub fn function<F>(f: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self::Function(Arc::new(f))
    }

    /// Call the value if it is a function
    pub fn call(&self, arg: Value) -> Option<Value> {
        match self {
            Self::Function(f) => Some(f(arg)),
            Self::Data(_) => None,
        }
    }

    /// Borrow the data if this is not a function
    pub fn as_data(&self) -> Option<&Value> {
        match self {
            Self::Data(value) => Some(value),
            Self::Function(_) => None,
        }
    }
}

impl fmt::Debug for Dynamic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Data(value) => f.debug_tuple("Data").field(value).finish(),
            Self::Function(_) => f.write_str("Function(..)"),
        }
    }
}

impl From<Value> for Dynamic {
    fn from(value: Value) -> Self {
        Self::Data(value)
    }
}

/// The fixed set of runtime type categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Kind {
    Null,
    Bool,
    Number,
    String,
    Array,
    Map,
    Function,
}

impl Kind {
    /// Lowercase name of the category
    pub fn name(self) -> &'static str {
        match self {
            Kind::Null => "null",
            Kind::Bool => "bool",
            Kind::Number => "number",
            Kind::String => "string",
            Kind::Array => "array",
            Kind::Map => "map",
            Kind::Function => "function",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Values that carry a runtime type tag
pub trait Typed {
    fn kind(&self) -> Kind;
}

impl Typed for Value {
    fn kind(&self) -> Kind {
        match self {
            Value::Null => Kind::Null,
            Value::Bool(_) => Kind::Bool,
            Value::Number(_) => Kind::Number,
            Value::String(_) => Kind::String,
            Value::Array(_) => Kind::Array,
            Value::Object(_) => Kind::Map,
        }
    }
}

impl Typed for Map<String, Value> {
    fn kind(&self) -> Kind {
        Kind::Map
    }
}

impl Typed for Dynamic {
    fn kind(&self) -> Kind {
        match self {
            Dynamic::Data(value) => value.kind(),
            Dynamic::Function(_) => Kind::Function,
        }
    }
}

impl<T: Typed + ?Sized> Typed for &T {
    fn kind(&self) -> Kind {
        (**self).kind()
    }
}

impl Emptiness for Dynamic {
    fn is_empty_value(&self) -> bool {
        self.as_data().is_some_and(Emptiness::is_empty_value)
    }
}

impl Nil for Dynamic {
    fn is_nil(&self) -> bool {
        self.as_data().is_some_and(Value::is_null)
    }
}

impl Truthy for Dynamic {
    fn is_truthy(&self) -> bool {
        match self {
            Dynamic::Data(value) => value.is_truthy(),
            Dynamic::Function(_) => true,
        }
    }
}

/// Runtime type tag of a value
pub fn kind_of<T: Typed + ?Sized>(value: &T) -> Kind {
    value.kind()
}

/// True for callables (`Dynamic::Function`)
pub fn is_function<T: Typed + ?Sized>(value: &T) -> bool {
    value.kind() == Kind::Function
}

/// True for numbers, integer or floating point
pub fn is_number<T: Typed + ?Sized>(value: &T) -> bool {
    value.kind() == Kind::Number
}

/// True for strings
pub fn is_string<T: Typed + ?Sized>(value: &T) -> bool {
    value.kind() == Kind::String
}

/// True for arrays
pub fn is_array<T: Typed + ?Sized>(value: &T) -> bool {
    value.kind() == Kind::Array
}

/// True for key-value records
///
/// JSON objects count as maps: there is no separate plain-object kind, so
/// `is_map(&json!({}))` is `true`.
pub fn is_map<T: Typed + ?Sized>(value: &T) -> bool {
    value.kind() == Kind::Map
}
