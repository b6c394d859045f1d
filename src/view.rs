//! The view types [`BufferView`] and [`BufferViewMut`].

use core::fmt::{self, Debug, Formatter};
use core::mem::size_of;
use core::slice;

use crate::units::{BitCount, ByteCount};
use crate::{Error, Result};

/// Checks a `(pointer, size)` pair for the three invalid shapes.
///
/// This is a total, pure function over all null/zero combinations. It is
/// the sole gate for the checked raw-parts construction paths: a shape
/// failure is reported before any view is materialized, so failure never
/// produces a partially constructed view.
pub fn validate_raw_parts<T>(data: *const T, size: usize) -> Result<()> {
    match (data.is_null(), size == 0) {
        (false, false) => Ok(()),
        (true, true) => Err(Error::NullDataAndZeroSize),
        (true, false) => Err(Error::NullData),
        (false, true) => Err(Error::ZeroSize),
    }
}

/// A read-only, non-owning view over a contiguous range of elements.
///
/// The view borrows its backing storage for `'a` and never outlives it.
/// It is a plain value type: freely copyable, no destructor, no interior
/// mutability. A failed checked access reports [`Error::InvalidIndex`]
/// and leaves the view fully usable.
///
/// # Examples
///
/// ```
/// use buffer_view::BufferView;
///
/// let storage = [1u8, 2, 3];
/// let view = BufferView::from_array(&storage);
/// assert_eq!(view.read(1), Ok(2));
/// assert!(view.read(3).is_err());
/// ```
///
/// There is no mutating accessor on a read-only view:
///
/// ```compile_fail
/// use buffer_view::BufferView;
///
/// let storage = [1u8, 2, 3];
/// let view = BufferView::from_array(&storage);
/// *view.get_mut(0).unwrap() = 9;
/// ```
#[derive(Clone, Copy)]
pub struct BufferView<'a, T> {
    data: &'a [T],
}

impl<'a, T> BufferView<'a, T> {
    /// Creates a view over a slice.
    ///
    /// A reference cannot be null, so the only reportable shape is
    /// [`Error::ZeroSize`], for an empty slice.
    pub fn new(data: &'a [T]) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::ZeroSize);
        }
        Ok(Self { data })
    }

    /// Creates a view over `size` elements starting at `data`.
    ///
    /// The pair is validated with [`validate_raw_parts`] first; null or
    /// zero-size shapes are reported, not dereferenced, so calling this
    /// with such arguments is sound.
    ///
    /// # Safety
    ///
    /// When `data` is non-null and `size` is nonzero, `data` must point
    /// to `size` consecutive initialized elements of `T` that stay valid
    /// and unmodified-through-other-mutable-references for `'a`.
    pub unsafe fn from_raw_parts(data: *const T, size: usize) -> Result<Self> {
        validate_raw_parts(data, size)?;
        // SAFETY: The shape is valid, and the caller asserts pointer
        // validity and lifetime.
        Ok(Self {
            data: unsafe { slice::from_raw_parts(data, size) },
        })
    }

    /// Creates a view over a fixed-size array, deriving the element count
    /// from the declared length.
    ///
    /// # Panics
    ///
    /// Panics if `N` is zero. A zero-length array here is a programming
    /// error, not a runtime condition to recover from.
    #[must_use]
    pub fn from_array<const N: usize>(data: &'a [T; N]) -> Self {
        assert!(N != 0, "a buffer view cannot be empty");
        Self { data }
    }

    /// Returns the raw data pointer. No bounds are involved.
    #[inline(always)]
    #[must_use]
    pub const fn as_ptr(self) -> *const T {
        self.data.as_ptr()
    }

    /// Returns the viewed elements as a slice.
    #[inline(always)]
    #[must_use]
    pub const fn as_slice(self) -> &'a [T] {
        self.data
    }

    /// Returns the element count.
    #[inline(always)]
    #[must_use]
    pub const fn len(self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the view holds no elements. Always false for a
    /// view built through a checked constructor.
    #[inline(always)]
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.data.is_empty()
    }

    /// Returns the viewed range's length in bytes.
    #[inline(always)]
    #[must_use]
    pub fn byte_size(self) -> ByteCount {
        ByteCount::new(self.data.len() * size_of::<T>())
    }

    /// Returns a reference to the element at `index`, or
    /// [`Error::InvalidIndex`] if `index` is not less than
    /// [`len`](Self::len).
    #[inline]
    pub fn get(self, index: usize) -> Result<&'a T> {
        self.data.get(index).ok_or(Error::InvalidIndex)
    }

    /// Returns a reference to the element at `index` without a bounds
    /// test.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    #[must_use]
    pub unsafe fn get_unchecked(self, index: usize) -> &'a T {
        debug_assert!(index < self.data.len());
        // SAFETY: The caller has proven the index is in range.
        unsafe { self.data.get_unchecked(index) }
    }

    /// Reads the element at `index` by value.
    #[inline]
    pub fn read(self, index: usize) -> Result<T>
    where
        T: Copy,
    {
        self.get(index).map(|value| *value)
    }
}

impl<'a> BufferView<'a, u8> {
    /// Returns the size of the viewed range.
    #[inline(always)]
    #[must_use]
    pub fn size(self) -> ByteCount {
        ByteCount::new(self.data.len())
    }

    /// Returns the bit length of the viewed range, eight bits per byte.
    #[inline(always)]
    #[must_use]
    pub fn bit_size(self) -> BitCount {
        BitCount::new(self.data.len() * 8)
    }

    /// Reads the byte at `index`.
    #[inline]
    pub fn byte(self, index: ByteCount) -> Result<u8> {
        self.read(index.as_usize())
    }
}

impl<T> Debug for BufferView<'_, T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("BufferView")
            .field("data", &self.data.as_ptr())
            .field("size", &self.data.len())
            .finish()
    }
}

/// A mutable, non-owning view over a contiguous range of elements.
///
/// Writes through the view land directly in the backing storage; the
/// view holds no private copy. Unlike [`BufferView`] this type is not
/// `Copy` — aliasing two mutable views over the same storage is exactly
/// what the borrow checker exists to rule out. Reborrow with
/// [`as_view`](Self::as_view) or [`as_mut_slice`](Self::as_mut_slice)
/// where the original would have copied the handle.
///
/// # Examples
///
/// ```
/// use buffer_view::BufferViewMut;
///
/// let mut storage = [0u8; 3];
/// let mut view = BufferViewMut::from_array(&mut storage);
/// view.write(1, 0x7f)?;
/// assert_eq!(view.read(1), Ok(0x7f));
/// drop(view);
/// assert_eq!(storage, [0, 0x7f, 0]);
/// # Ok::<(), buffer_view::Error>(())
/// ```
pub struct BufferViewMut<'a, T> {
    data: &'a mut [T],
}

impl<'a, T> BufferViewMut<'a, T> {
    /// Creates a mutable view over a slice.
    ///
    /// A reference cannot be null, so the only reportable shape is
    /// [`Error::ZeroSize`], for an empty slice.
    pub fn new(data: &'a mut [T]) -> Result<Self> {
        if data.is_empty() {
            return Err(Error::ZeroSize);
        }
        Ok(Self { data })
    }

    /// Creates a mutable view over `size` elements starting at `data`.
    ///
    /// The pair is validated with [`validate_raw_parts`] first; null or
    /// zero-size shapes are reported, not dereferenced, so calling this
    /// with such arguments is sound.
    ///
    /// # Safety
    ///
    /// When `data` is non-null and `size` is nonzero, `data` must point
    /// to `size` consecutive initialized elements of `T` that stay valid
    /// for `'a` and are reachable through no other reference while the
    /// view lives.
    pub unsafe fn from_raw_parts(data: *mut T, size: usize) -> Result<Self> {
        validate_raw_parts(data as *const T, size)?;
        // SAFETY: The shape is valid, and the caller asserts pointer
        // validity, exclusivity, and lifetime.
        Ok(Self {
            data: unsafe { slice::from_raw_parts_mut(data, size) },
        })
    }

    /// Creates a mutable view over a fixed-size array, deriving the
    /// element count from the declared length.
    ///
    /// # Panics
    ///
    /// Panics if `N` is zero. A zero-length array here is a programming
    /// error, not a runtime condition to recover from.
    #[must_use]
    pub fn from_array<const N: usize>(data: &'a mut [T; N]) -> Self {
        assert!(N != 0, "a buffer view cannot be empty");
        Self { data }
    }

    /// Returns the raw data pointer. No bounds are involved.
    #[inline(always)]
    #[must_use]
    pub fn as_ptr(&self) -> *const T {
        self.data.as_ptr()
    }

    /// Returns the raw mutable data pointer. No bounds are involved.
    #[inline(always)]
    #[must_use]
    pub fn as_mut_ptr(&mut self) -> *mut T {
        self.data.as_mut_ptr()
    }

    /// Returns the viewed elements as a slice.
    #[inline(always)]
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        self.data
    }

    /// Returns the viewed elements as a mutable slice.
    #[inline(always)]
    #[must_use]
    pub fn as_mut_slice(&mut self) -> &mut [T] {
        self.data
    }

    /// Returns the element count.
    #[inline(always)]
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Returns `true` if the view holds no elements. Always false for a
    /// view built through a checked constructor.
    #[inline(always)]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Returns the viewed range's length in bytes.
    #[inline(always)]
    #[must_use]
    pub fn byte_size(&self) -> ByteCount {
        ByteCount::new(self.data.len() * size_of::<T>())
    }

    /// Returns a reference to the element at `index`, or
    /// [`Error::InvalidIndex`] if `index` is not less than
    /// [`len`](Self::len).
    #[inline]
    pub fn get(&self, index: usize) -> Result<&T> {
        self.data.get(index).ok_or(Error::InvalidIndex)
    }

    /// Returns a mutable reference to the element at `index`, or
    /// [`Error::InvalidIndex`] if `index` is not less than
    /// [`len`](Self::len).
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        self.data.get_mut(index).ok_or(Error::InvalidIndex)
    }

    /// Returns a reference to the element at `index` without a bounds
    /// test.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    #[must_use]
    pub unsafe fn get_unchecked(&self, index: usize) -> &T {
        debug_assert!(index < self.data.len());
        // SAFETY: The caller has proven the index is in range.
        unsafe { self.data.get_unchecked(index) }
    }

    /// Returns a mutable reference to the element at `index` without a
    /// bounds test.
    ///
    /// # Safety
    ///
    /// `index` must be less than [`len`](Self::len).
    #[inline]
    #[must_use]
    pub unsafe fn get_unchecked_mut(&mut self, index: usize) -> &mut T {
        debug_assert!(index < self.data.len());
        // SAFETY: The caller has proven the index is in range.
        unsafe { self.data.get_unchecked_mut(index) }
    }

    /// Reads the element at `index` by value.
    #[inline]
    pub fn read(&self, index: usize) -> Result<T>
    where
        T: Copy,
    {
        self.get(index).map(|value| *value)
    }

    /// Writes `value` to the element at `index`. The write goes through
    /// to the backing storage.
    #[inline]
    pub fn write(&mut self, index: usize, value: T) -> Result<()> {
        *self.get_mut(index)? = value;
        Ok(())
    }

    /// Reborrows as a read-only view over the identical range.
    #[inline(always)]
    #[must_use]
    pub fn as_view(&self) -> BufferView<'_, T> {
        BufferView { data: &*self.data }
    }
}

impl<'a> BufferViewMut<'a, u8> {
    /// Returns the size of the viewed range.
    #[inline(always)]
    #[must_use]
    pub fn size(&self) -> ByteCount {
        ByteCount::new(self.data.len())
    }

    /// Returns the bit length of the viewed range, eight bits per byte.
    #[inline(always)]
    #[must_use]
    pub fn bit_size(&self) -> BitCount {
        BitCount::new(self.data.len() * 8)
    }

    /// Reads the byte at `index`.
    #[inline]
    pub fn byte(&self, index: ByteCount) -> Result<u8> {
        self.read(index.as_usize())
    }

    /// Returns a mutable reference to the byte at `index`.
    #[inline]
    pub fn byte_mut(&mut self, index: ByteCount) -> Result<&mut u8> {
        self.get_mut(index.as_usize())
    }

    /// Writes `value` to the byte at `index`.
    #[inline]
    pub fn set_byte(&mut self, index: ByteCount, value: u8) -> Result<()> {
        self.write(index.as_usize(), value)
    }
}

/// The one-directional view conversion: mutable to read-only, total and
/// lossless. The reverse direction does not exist.
impl<'a, T> From<BufferViewMut<'a, T>> for BufferView<'a, T> {
    #[inline(always)]
    fn from(view: BufferViewMut<'a, T>) -> Self {
        Self { data: view.data }
    }
}

impl<T> Debug for BufferViewMut<'_, T> {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.debug_struct("BufferViewMut")
            .field("data", &self.data.as_ptr())
            .field("size", &self.data.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use core::ptr;

    use super::{validate_raw_parts, BufferView, BufferViewMut};
    use crate::Error;

    #[test]
    fn validate_all_shapes() {
        let storage = [0u8; 4];
        assert_eq!(validate_raw_parts(storage.as_ptr(), storage.len()), Ok(()));
        assert_eq!(
            validate_raw_parts::<u8>(ptr::null(), 0),
            Err(Error::NullDataAndZeroSize)
        );
        assert_eq!(
            validate_raw_parts::<u8>(ptr::null(), 4),
            Err(Error::NullData)
        );
        assert_eq!(
            validate_raw_parts(storage.as_ptr(), 0),
            Err(Error::ZeroSize)
        );
    }

    #[test]
    fn get_in_and_out_of_range() {
        let storage = [10u8, 11, 12];
        let view = BufferView::from_array(&storage);
        assert_eq!(view.get(0), Ok(&10));
        assert_eq!(view.get(2), Ok(&12));
        assert_eq!(view.get(3), Err(Error::InvalidIndex));
        // A failed access leaves the view usable.
        assert_eq!(view.get(1), Ok(&11));
    }

    #[test]
    fn write_through() {
        let mut storage = [0u8; 3];
        let mut view = BufferViewMut::from_array(&mut storage);
        view.write(2, 9).unwrap();
        assert_eq!(view.read(2), Ok(9));
        assert_eq!(view.write(3, 1), Err(Error::InvalidIndex));
        drop(view);
        assert_eq!(storage, [0, 0, 9]);
    }

    #[test]
    fn unchecked_access() {
        let storage = [5u8, 6];
        let view = BufferView::from_array(&storage);
        for i in 0..view.len() {
            // SAFETY: The loop is bounded by the view's length.
            assert_eq!(unsafe { *view.get_unchecked(i) }, storage[i]);
        }
    }

    #[test]
    #[should_panic(expected = "cannot be empty")]
    fn from_empty_array_panics() {
        let storage: [u8; 0] = [];
        let _ = BufferView::from_array(&storage);
    }
}
