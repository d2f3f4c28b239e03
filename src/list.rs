use crate::error::SetError;
use crate::set_item::SetItem;
use crate::value::{Key, Value};
use std::fmt;
use tracing::{debug, trace};

/// An integer-indexed sequence of dynamic values
///
/// Setting an item never changes the length: only positions in `0..len` are
/// writable, and negative indexes do not count from the end.
///
/// # Examples
///
/// ```
/// use sovran_setitem::{List, SetItem};
///
/// let mut list: List = ["1", "2"].into_iter().collect();
/// assert!(list.set_item(1.into(), "bar".into()));
/// assert!(!list.set_item(5.into(), "bar".into()));
/// assert!(!list.set_item((-1).into(), "bar".into()));
///
/// assert_eq!(list.to_string(), "[1 bar]");
/// ```
#[derive(Debug, Clone, PartialEq, Default)]
pub struct List {
    items: Vec<Value>,
}

impl List {
    /// Creates a new, empty List
    ///
    /// An empty list rejects every index; build populated lists with
    /// `From<Vec<Value>>` or `collect`.
    pub fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Returns the value at `index`
    ///
    /// # Examples
    ///
    /// ```
    /// use sovran_setitem::{List, Value};
    ///
    /// let list: List = ["1", "2"].into_iter().collect();
    /// assert_eq!(list.get(1), Some(&Value::from("2")));
    /// assert_eq!(list.get(2), None);
    /// ```
    pub fn get(&self, index: usize) -> Option<&Value> {
        self.items.get(index)
    }

    /// Returns the number of elements
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the list has no elements
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over the elements in order
    pub fn iter(&self) -> std::slice::Iter<'_, Value> {
        self.items.iter()
    }

    /// Borrows the elements as a slice
    pub fn as_slice(&self) -> &[Value] {
        &self.items
    }
}

impl SetItem for List {
    fn try_set_item(&mut self, key: Key, value: Value) -> Result<(), SetError> {
        let index = match key {
            Key::Int(index) => index,
            other => {
                debug!(key = %other, kind = other.kind(), "list rejected non-integer key");
                return Err(SetError::KeyType {
                    expected: "integer",
                    found: other.kind(),
                });
            }
        };

        let len = self.items.len();
        match usize::try_from(index).ok().and_then(|i| self.items.get_mut(i)) {
            Some(slot) => {
                trace!(index, value = value.kind(), "list item set");
                *slot = value;
                Ok(())
            }
            None => {
                debug!(index, len, "list rejected out of bounds index");
                Err(SetError::OutOfBounds { index, len })
            }
        }
    }
}

impl From<Vec<Value>> for List {
    fn from(items: Vec<Value>) -> Self {
        Self { items }
    }
}

impl<V: Into<Value>> FromIterator<V> for List {
    fn from_iter<I: IntoIterator<Item = V>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a List {
    type Item = &'a Value;
    type IntoIter = std::slice::Iter<'a, Value>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

impl fmt::Display for List {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[")?;
        for (i, value) in self.items.iter().enumerate() {
            if i > 0 {
                f.write_str(" ")?;
            }
            write!(f, "{}", value)?;
        }
        f.write_str("]")
    }
}
