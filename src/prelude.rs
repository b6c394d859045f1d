//! Convenience re-exports.

#[doc(no_inline)]
pub use crate::{
    make_view, make_view_mut, BitCount, BitPosition, BufferView, BufferViewMut, ByteCount,
    ContiguousStorage, ContiguousStorageMut, Error,
};
