use crate::any_value::AnyValue;
use crate::dict::Dict;
use crate::list::List;
use std::any::Any;
use std::fmt;

/// A dynamically typed value
///
/// `Value` is the element type of both containers and the target of
/// [`set_item`](crate::set_item). Besides the built-in scalars and the two
/// containers it can carry any `Send + Sync` Rust value through
/// [`Value::opaque`], so the domain stays open.
///
/// # Examples
///
/// ```
/// use sovran_setitem::{Dict, List, Value};
///
/// let nested = Value::from(List::from(vec![Value::from("a"), Value::from(Dict::new())]));
/// assert_eq!(nested.to_string(), "[a map[]]");
///
/// #[derive(Debug, PartialEq)]
/// struct Port(u16);
///
/// let opaque = Value::opaque(Port(8080));
/// assert_eq!(opaque.downcast_ref::<Port>(), Some(&Port(8080)));
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Str(String),
    Dict(Dict),
    List(List),
    Opaque(AnyValue),
}

impl Value {
    /// Wraps an arbitrary value
    pub fn opaque<T: 'static + Any + Send + Sync>(value: T) -> Self {
        Value::Opaque(AnyValue::new(value))
    }

    /// Name of the variant, used in rejection reasons and logs
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Str(_) => "string",
            Value::Dict(_) => "dict",
            Value::List(_) => "list",
            Value::Opaque(_) => "opaque",
        }
    }

    /// Returns true for `Value::Null`
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the boolean if this is a `Bool`
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Returns the integer if this is an `Int`
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Returns the string slice if this is a `Str`
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Str(s) => Some(s),
            _ => None,
        }
    }

    /// Returns the dictionary if this is a `Dict`
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_setitem::{Dict, Value};
    ///
    /// let value = Value::from([("foo", "bar")].into_iter().collect::<Dict>());
    /// assert_eq!(value.as_dict().map(Dict::len), Some(1));
    /// assert!(Value::from(42).as_dict().is_none());
    /// ```
    pub fn as_dict(&self) -> Option<&Dict> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Mutable form of [`Value::as_dict`]
    pub fn as_dict_mut(&mut self) -> Option<&mut Dict> {
        match self {
            Value::Dict(d) => Some(d),
            _ => None,
        }
    }

    /// Returns the list if this is a `List`
    pub fn as_list(&self) -> Option<&List> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Mutable form of [`Value::as_list`]
    pub fn as_list_mut(&mut self) -> Option<&mut List> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    /// Get a reference to an opaque payload if it is of type T
    pub fn downcast_ref<T: 'static>(&self) -> Option<&T> {
        match self {
            Value::Opaque(any) => any.downcast_ref::<T>(),
            _ => None,
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => f.write_str("<nil>"),
            Value::Bool(b) => write!(f, "{}", b),
            Value::Int(i) => write!(f, "{}", i),
            Value::Str(s) => f.write_str(s),
            Value::Dict(d) => write!(f, "{}", d),
            Value::List(l) => write!(f, "{}", l),
            Value::Opaque(_) => f.write_str("<opaque>"),
        }
    }
}

impl From<()> for Value {
    fn from(_: ()) -> Self {
        Value::Null
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

macro_rules! impl_from_int {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(i: $t) -> Self {
                    Value::Int(i64::from(i))
                }
            }
        )*
    };
}

impl_from_int!(i8, i16, i32, i64, u8, u16, u32);

// Unsigned values past i64::MAX saturate, matching `Key::from(usize)`.
impl From<u64> for Value {
    fn from(i: u64) -> Self {
        Value::Int(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

impl From<usize> for Value {
    fn from(i: usize) -> Self {
        Value::Int(i64::try_from(i).unwrap_or(i64::MAX))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<Dict> for Value {
    fn from(d: Dict) -> Self {
        Value::Dict(d)
    }
}

impl From<List> for Value {
    fn from(l: List) -> Self {
        Value::List(l)
    }
}

impl From<AnyValue> for Value {
    fn from(any: AnyValue) -> Self {
        Value::Opaque(any)
    }
}

/// The address of an item inside a container
///
/// Dictionaries are addressed by [`Key::Str`], lists by [`Key::Int`]. A key of
/// the wrong kind is rejected, never converted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Key {
    Str(String),
    Int(i64),
}

impl Key {
    /// Name of the key kind, `"string"` or `"integer"`
    pub fn kind(&self) -> &'static str {
        match self {
            Key::Str(_) => "string",
            Key::Int(_) => "integer",
        }
    }
}

impl fmt::Display for Key {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Key::Str(s) => f.write_str(s),
            Key::Int(i) => write!(f, "{}", i),
        }
    }
}

impl From<&str> for Key {
    fn from(s: &str) -> Self {
        Key::Str(s.to_string())
    }
}

impl From<String> for Key {
    fn from(s: String) -> Self {
        Key::Str(s)
    }
}

impl From<i32> for Key {
    fn from(i: i32) -> Self {
        Key::Int(i64::from(i))
    }
}

impl From<i64> for Key {
    fn from(i: i64) -> Self {
        Key::Int(i)
    }
}

impl From<usize> for Key {
    fn from(i: usize) -> Self {
        // Anything past i64::MAX is out of bounds for every list anyway.
        Key::Int(i64::try_from(i).unwrap_or(i64::MAX))
    }
}
