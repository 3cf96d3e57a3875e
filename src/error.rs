use std::fmt::{Debug, Display};

#[derive(Clone, PartialEq, Eq)]
pub enum Error {
    /// A disjoint set was constructed with a negative number of elements.
    InvalidSize(isize),
    /// An element id outside the universe was used. Contains the offending id
    /// and the size of the universe.
    IndexOutOfRange(usize, usize),
}

impl Debug for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Error::*;
        match self {
            InvalidSize(n) => f.debug_tuple("InvalidSize").field(n).finish(),
            IndexOutOfRange(index, len) => f
                .debug_tuple("IndexOutOfRange")
                .field(index)
                .field(len)
                .finish(),
        }
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use Error::*;
        match self {
            InvalidSize(n) => write!(f, "Cannot create a disjoint set with {n} elements"),
            IndexOutOfRange(index, len) => {
                write!(f, "Element {index} is outside the universe [0, {len})")
            }
        }
    }
}

impl std::error::Error for Error {}
