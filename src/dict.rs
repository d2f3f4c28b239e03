use crate::error::SetError;
use crate::set_item::SetItem;
use crate::value::{Key, Value};
use std::collections::HashMap;
use std::fmt;
use tracing::{debug, trace};

/// A string-keyed mapping of dynamic values
///
/// Iteration and display walk the keys in sorted order; the underlying
/// storage keeps no order.
///
/// # Examples
///
/// ```
/// use sovran_setitem::{Dict, SetItem};
///
/// let mut dict = Dict::new();
/// assert!(dict.set_item("foo".into(), "bar".into()));
/// assert!(!dict.set_item(42.into(), "bar".into()));
///
/// assert_eq!(dict.get("foo").and_then(|v| v.as_str()), Some("bar"));
/// assert_eq!(dict.to_string(), "map[foo:bar]");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Dict {
    items: HashMap<String, Value>,
}

impl Dict {
    /// Creates a new, empty Dict
    pub fn new() -> Self {
        Self {
            items: HashMap::new(),
        }
    }

    /// Stores a value, returning the one it replaced
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) -> Option<Value> {
        self.items.insert(key.into(), value.into())
    }

    /// Returns the value stored under `key`
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_setitem::{Dict, Value};
    ///
    /// let mut dict = Dict::new();
    /// dict.insert("foo", "bar");
    ///
    /// assert_eq!(dict.get("foo"), Some(&Value::from("bar")));
    /// assert_eq!(dict.get("missing"), None);
    /// ```
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.items.get(key)
    }

    /// Returns true if the dict contains the specified key
    pub fn contains_key(&self, key: &str) -> bool {
        self.items.contains_key(key)
    }

    /// Returns the number of entries
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the dict has no entries
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns all keys, sorted
    pub fn keys(&self) -> Vec<&str> {
        let mut keys: Vec<&str> = self.items.keys().map(String::as_str).collect();
        keys.sort_unstable();
        keys
    }

    /// Iterates over the entries in sorted key order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        let mut entries: Vec<(&str, &Value)> =
            self.items.iter().map(|(k, v)| (k.as_str(), v)).collect();
        entries.sort_unstable_by(|a, b| a.0.cmp(b.0));
        entries.into_iter()
    }
}

impl SetItem for Dict {
    fn try_set_item(&mut self, key: Key, value: Value) -> Result<(), SetError> {
        match key {
            Key::Str(key) => {
                trace!(key = %key, value = value.kind(), "dict item set");
                self.items.insert(key, value);
                Ok(())
            }
            other => {
                debug!(key = %other, kind = other.kind(), "dict rejected non-string key");
                Err(SetError::KeyType {
                    expected: "string",
                    found: other.kind(),
                })
            }
        }
    }
}

impl<K, V> FromIterator<(K, V)> for Dict
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            items: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl fmt::Display for Dict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("map[")?;
        for (i, (key, value)) in self.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}:{}", key, value)?;
        }
        f.write_str("]")
    }
}
