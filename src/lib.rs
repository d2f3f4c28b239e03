//! # sovran-setitem
//!
//! Polymorphic set-by-key over heterogeneous containers.
//!
//! `sovran-setitem` stores dynamically typed [`Value`]s in two kinds of
//! container, a string-keyed [`Dict`] and an integer-indexed [`List`], and
//! lets you write into either one through a single function that looks at
//! the target at runtime.
//!
//! ## Key Features
//!
//! - **One entry point**: [`set_item`] dispatches on whatever the target holds
//! - **No coercion**: dictionaries only take string keys, lists only take
//!   in-bounds integer indexes
//! - **No panics**: a rejected store is just `false`
//! - **Open values**: [`Value::opaque`] carries any `Send + Sync` type
//!
//! ## Usage Examples
//!
//! ### Basic Usage
//!
//! ```rust
//! use sovran_setitem::{set_item, Dict, List, Value};
//!
//! let mut d = Value::from(Dict::new());
//! let mut l = Value::from(List::from(vec![Value::from("1"), Value::from("2")]));
//!
//! assert!(set_item(&mut d, "foo", "bar"));
//! assert!(set_item(&mut l, 1, "bar"));
//!
//! println!("d:'{}'", d); // d:'map[foo:bar]'
//! println!("l:'{}'", l); // l:'[1 bar]'
//! ```
//!
//! ### Rejections
//!
//! ```rust
//! use sovran_setitem::{set_item, Dict, List, Value};
//!
//! let mut d = Value::from(Dict::new());
//! let mut l = Value::from(List::from(vec![Value::from("1"), Value::from("2")]));
//! let mut n = Value::from(42);
//!
//! assert!(!set_item(&mut d, 42, "bar"));    // wrong key kind
//! assert!(!set_item(&mut l, 5, "bar"));     // past the end
//! assert!(!set_item(&mut l, -1, "bar"));    // no negative indexing
//! assert!(!set_item(&mut n, "foo", "bar")); // not a container
//!
//! assert_eq!(d.to_string(), "map[]");
//! assert_eq!(l.to_string(), "[1 2]");
//! ```
//!
//! ### Finding Out Why
//!
//! ```rust
//! use sovran_setitem::{try_set_item, List, SetError, Value};
//!
//! let mut l = Value::from(List::from(vec![Value::from("1"), Value::from("2")]));
//!
//! match try_set_item(&mut l, 5, "bar") {
//!     Ok(()) => println!("stored"),
//!     Err(SetError::OutOfBounds { index, len }) => println!("{} is not below {}", index, len),
//!     Err(e) => println!("Other rejection: {}", e),
//! }
//! ```

mod any_value;
mod dict;
mod error;
mod list;
mod set_item;
mod value;

pub use any_value::AnyValue;
pub use dict::Dict;
pub use error::SetError;
pub use list::List;
pub use set_item::{set_item, try_set_item, SetItem};
pub use value::{Key, Value};
