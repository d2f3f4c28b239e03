use crate::error::SetError;
use crate::value::{Key, Value};
use tracing::debug;

/// The capability to store a value at a key
///
/// Implementors decide which keys address them; any other key is rejected
/// without touching the container.
pub trait SetItem {
    /// Attempts the store, reporting why it was rejected
    fn try_set_item(&mut self, key: Key, value: Value) -> Result<(), SetError>;

    /// Attempts the store, returning whether it happened
    fn set_item(&mut self, key: Key, value: Value) -> bool {
        self.try_set_item(key, value).is_ok()
    }
}

/// Sets an item on whatever container `target` holds
///
/// Dictionaries and lists delegate to their [`SetItem`] impl; every other
/// variant is left alone and yields `false`.
///
/// # Examples
///
/// ```
/// use sovran_setitem::{set_item, Dict, List, Value};
///
/// let mut d = Value::from(Dict::new());
/// assert!(set_item(&mut d, "foo", "bar"));
/// assert_eq!(d.to_string(), "map[foo:bar]");
///
/// let mut l = Value::from(["1", "2"].into_iter().collect::<List>());
/// assert!(set_item(&mut l, 1, "bar"));
/// assert_eq!(l.to_string(), "[1 bar]");
///
/// let mut n = Value::from(42);
/// assert!(!set_item(&mut n, "foo", "bar"));
/// ```
pub fn set_item(target: &mut Value, key: impl Into<Key>, value: impl Into<Value>) -> bool {
    try_set_item(target, key, value).is_ok()
}

/// Like [`set_item`], but names the reason for a rejection
///
/// # Errors
///
/// - Returns `SetError::NotAContainer` if `target` is neither a dict nor a list
/// - Returns whatever the container's [`SetItem::try_set_item`] rejects with
pub fn try_set_item(
    target: &mut Value,
    key: impl Into<Key>,
    value: impl Into<Value>,
) -> Result<(), SetError> {
    match target {
        Value::Dict(dict) => dict.try_set_item(key.into(), value.into()),
        Value::List(list) => list.try_set_item(key.into(), value.into()),
        other => {
            debug!(kind = other.kind(), "set_item target is not a container");
            Err(SetError::NotAContainer(other.kind()))
        }
    }
}
