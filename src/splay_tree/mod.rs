//! Self-adjusting binary search tree with the additional property that recently accessed elements
//! are quick to access again.

mod node;
mod record;
mod set;
mod tree;

pub use self::record::{Record, Traverse};
pub use self::set::{SplaySet, SplaySetIntoIter, SplaySetIter};

use std::error;
use std::fmt;
use std::result;

/// Errors reported by `SplaySet<T>`.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Error {
    /// A new node was required, but the set already holds as many nodes as its limit allows.
    NodeLimitReached { limit: usize },
}

impl error::Error for Error {}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Error::NodeLimitReached { limit } => {
                write!(f, "cannot allocate node: limit of {} nodes reached", limit)
            },
        }
    }
}

pub type Result<T> = result::Result<T, Error>;
