use std::fmt;

/// Why a set-by-key was rejected
///
/// The public contract only reports success or failure; this names the failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetError {
    /// The key was not the kind the container is addressed by
    KeyType {
        expected: &'static str,
        found: &'static str,
    },
    /// The integer index was outside `0..len`
    OutOfBounds { index: i64, len: usize },
    /// The target was neither a dictionary nor a list
    NotAContainer(&'static str),
}

impl fmt::Display for SetError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            SetError::KeyType { expected, found } => {
                write!(f, "Expected a {} key, found {}", expected, found)
            }
            SetError::OutOfBounds { index, len } => {
                write!(f, "Index {} out of bounds for length {}", index, len)
            }
            SetError::NotAContainer(kind) => write!(f, "Cannot set an item on {}", kind),
        }
    }
}

impl std::error::Error for SetError {}
