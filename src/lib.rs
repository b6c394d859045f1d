#![cfg_attr(not(test), no_std)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(unsafe_op_in_unsafe_fn)]
#![doc = include_str!("../README.md")]

#[cfg(feature = "alloc")]
extern crate alloc;

use core::fmt::{self, Display, Formatter};

pub mod prelude;
mod storage;
mod units;
mod view;

pub use storage::{make_view, make_view_mut, ContiguousStorage, ContiguousStorageMut};
pub use units::{BitCount, BitPosition, ByteCount};
pub use view::{validate_raw_parts, BufferView, BufferViewMut};

/// The error type for checked view construction and element access.
///
/// The three construction kinds classify the shape of a `(pointer, size)`
/// pair; [`InvalidIndex`](Self::InvalidIndex) is raised only by checked
/// element access. Uncategorized error values reaching this crate's
/// callers through generic glue should be treated as
/// [`Unknown`](Self::Unknown), never coerced to one of the other kinds.
#[derive(Clone, Copy, Debug, Hash, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// The data pointer is null but the size is nonzero.
    NullData,
    /// The data pointer is non-null but the size is zero.
    ZeroSize,
    /// The data pointer is null and the size is zero at the same time.
    ///
    /// Kept distinct from the two single-cause kinds: it indicates an
    /// uninitialized descriptor rather than a one-field omission.
    NullDataAndZeroSize,
    /// An indexed access was not less than the view's element count.
    InvalidIndex,
    /// An error value that matches none of the categorized kinds.
    Unknown,
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            Self::NullData => write!(f, "data pointer is null"),
            Self::ZeroSize => write!(f, "size is zero"),
            Self::NullDataAndZeroSize => write!(f, "data pointer is null and size is zero"),
            Self::InvalidIndex => write!(f, "index out of range for buffer view"),
            Self::Unknown => write!(f, "unknown buffer error"),
        }
    }
}

/// The result type for every fallible operation in this crate.
pub type Result<T> = core::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use crate::{BitCount, BitPosition, ByteCount, Error};

    #[test]
    fn test_error_display() {
        assert_eq!(format!("{}", Error::NullData), "data pointer is null");
        assert_eq!(format!("{}", Error::ZeroSize), "size is zero");
        assert_eq!(
            format!("{}", Error::NullDataAndZeroSize),
            "data pointer is null and size is zero"
        );
        assert_eq!(
            format!("{}", Error::InvalidIndex),
            "index out of range for buffer view"
        );
        assert_eq!(format!("{}", Error::Unknown), "unknown buffer error");
    }

    #[test]
    fn test_debug() {
        assert_eq!(format!("{:?}", ByteCount::new(10)), "ByteCount(10)");
        assert_eq!(format!("{:?}", BitCount::new(7)), "BitCount(7)");
        assert_eq!(format!("{:?}", BitPosition::new(19)), "BitPosition(19)");
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", ByteCount::new(10)), "10");
        assert_eq!(format!("{}", BitCount::new(7)), "7");
        assert_eq!(format!("{}", BitPosition::new(19)), "19");
    }
}
