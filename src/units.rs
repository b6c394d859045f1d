//! The strong unit types [`ByteCount`], [`BitCount`], and [`BitPosition`].

use core::cmp::Ordering;
use core::fmt::{self, Display, Formatter};
use core::ops::{Add, AddAssign, Div, Rem, Sub, SubAssign};

use num_traits::Zero;
use paste::paste;

macro_rules! define_count_type {
    ($prefix:ident: $unit:literal) => {
        paste! {
            #[doc = concat!(
                "A non-negative count of ", $unit, ".",
                "\n\n",
                "Construction from a raw integer is explicit, so call sites name ",
                "which unit they mean. Arithmetic and comparison are defined only ",
                "within the unit; combining a count with a [`BitPosition`] goes ",
                "through the named conversions on that type.",
                "\n\n",
                "Arithmetic performs no overflow checking of its own. Counts are ",
                "assumed to fit the platform's address space, and results follow ",
                "the build's primitive overflow semantics.",
            )]
            #[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
            #[repr(transparent)]
            pub struct [<$prefix Count>](usize);

            impl [<$prefix Count>] {
                #[doc = concat!("The count of zero ", $unit, ".")]
                pub const ZERO: Self = Self(0);
                #[doc = concat!(
                    "The count of one ", $unit, ", the increment step for this type.",
                )]
                pub const ONE: Self = Self(1);

                #[doc = concat!("Creates a count of `value` ", $unit, ".")]
                #[inline(always)]
                #[must_use]
                pub const fn new(value: usize) -> Self {
                    Self(value)
                }

                /// Returns the raw value.
                #[inline(always)]
                #[must_use]
                pub const fn as_usize(self) -> usize {
                    self.0
                }

                /// Returns `true` if the count is zero.
                ///
                /// This method is a `const` variant of
                /// [`num_traits::Zero::is_zero`].
                #[inline(always)]
                #[must_use]
                pub const fn is_zero(self) -> bool {
                    self.0 == 0
                }
            }

            impl Add for [<$prefix Count>] {
                type Output = Self;

                #[inline(always)]
                fn add(self, rhs: Self) -> Self {
                    Self(self.0 + rhs.0)
                }
            }

            impl AddAssign for [<$prefix Count>] {
                #[inline(always)]
                fn add_assign(&mut self, rhs: Self) {
                    self.0 += rhs.0;
                }
            }

            impl Sub for [<$prefix Count>] {
                type Output = Self;

                #[inline(always)]
                fn sub(self, rhs: Self) -> Self {
                    Self(self.0 - rhs.0)
                }
            }

            impl SubAssign for [<$prefix Count>] {
                #[inline(always)]
                fn sub_assign(&mut self, rhs: Self) {
                    self.0 -= rhs.0;
                }
            }

            impl Div<usize> for [<$prefix Count>] {
                type Output = Self;

                #[inline(always)]
                fn div(self, rhs: usize) -> Self {
                    Self(self.0 / rhs)
                }
            }

            impl Rem<usize> for [<$prefix Count>] {
                type Output = Self;

                #[inline(always)]
                fn rem(self, rhs: usize) -> Self {
                    Self(self.0 % rhs)
                }
            }

            impl Zero for [<$prefix Count>] {
                fn zero() -> Self {
                    Self::ZERO
                }

                fn is_zero(&self) -> bool {
                    self.0 == 0
                }
            }

            impl Display for [<$prefix Count>] {
                fn fmt(&self, f: &mut Formatter) -> fmt::Result {
                    write!(f, "{}", self.0)
                }
            }

            impl From<[<$prefix Count>]> for usize {
                #[inline(always)]
                fn from(count: [<$prefix Count>]) -> Self {
                    count.0
                }
            }
        }
    };
}

define_count_type!(Byte: "bytes");
define_count_type!(Bit: "bits");

impl ByteCount {
    /// Converts the count to the equivalent count of bits, eight per byte.
    #[inline(always)]
    #[must_use]
    pub const fn to_bit_count(self) -> BitCount {
        BitCount::new(self.0 * 8)
    }
}

impl BitCount {
    /// Returns the position of the last bit occupied by this many bits,
    /// or `None` for a zero count.
    ///
    /// A count of `n` bits occupies positions `0..n`; converting the count
    /// with [`BitPosition::from`] yields the position one past the end,
    /// while this accessor yields position `n - 1`.
    #[inline(always)]
    #[must_use]
    pub const fn position_of_last_bit(self) -> Option<BitPosition> {
        match self.0.checked_sub(1) {
            Some(last) => Some(BitPosition::new(last)),
            None => None,
        }
    }
}

/// An absolute zero-based bit index within some buffer.
///
/// A `BitPosition` is derived from either count type through an explicit,
/// named conversion: a [`BitCount`] converts on the numeric value itself
/// (a count of `n` bits places the position one past the last occupied
/// bit), and a [`ByteCount`] scales by eight. Byte operands in position
/// arithmetic scale by eight the same way.
///
/// Position arithmetic performs no overflow checking; the buffer the
/// position addresses is assumed to fit the platform's address space.
///
/// # Examples
///
/// ```
/// use buffer_view::{BitCount, BitPosition, ByteCount};
///
/// let pos = BitPosition::from(BitCount::new(10));
/// assert_eq!(pos.byte_index(), ByteCount::new(1));
/// assert_eq!(pos.bit_offset(), BitCount::new(2));
/// assert_eq!(pos.bytes_used(), ByteCount::new(2));
///
/// assert_eq!(BitPosition::from(BitCount::new(80)), BitPosition::from(ByteCount::new(10)));
/// ```
///
/// Counts of different units never interoperate without a named
/// conversion:
///
/// ```compile_fail
/// use buffer_view::{BitCount, ByteCount};
///
/// let _ = ByteCount::new(1) + BitCount::new(8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(transparent)]
pub struct BitPosition(usize);

impl BitPosition {
    /// The position of the first bit in a buffer.
    pub const ZERO: Self = Self(0);

    /// Creates a position at the given zero-based bit index.
    #[inline(always)]
    #[must_use]
    pub const fn new(value: usize) -> Self {
        Self(value)
    }

    /// Returns the raw bit index.
    #[inline(always)]
    #[must_use]
    pub const fn as_usize(self) -> usize {
        self.0
    }

    /// Returns the index of the byte containing this bit.
    #[inline(always)]
    #[must_use]
    pub const fn byte_index(self) -> ByteCount {
        ByteCount::new(self.0 / 8)
    }

    /// Returns the offset of this bit within its byte, in the range
    /// `0..8`. Bit zero is the least significant.
    #[inline(always)]
    #[must_use]
    pub const fn bit_offset(self) -> BitCount {
        BitCount::new(self.0 % 8)
    }

    /// Returns the number of whole bytes needed to contain every position
    /// up to and including this one.
    #[inline(always)]
    #[must_use]
    pub const fn bytes_used(self) -> ByteCount {
        ByteCount::new(self.0 / 8 + (self.0 % 8 != 0) as usize)
    }

    /// Sets the position back to zero in place.
    ///
    /// This is the only in-place mutator on any unit type.
    #[inline(always)]
    pub fn reset(&mut self) {
        self.0 = 0;
    }
}

impl From<BitCount> for BitPosition {
    #[inline(always)]
    fn from(count: BitCount) -> Self {
        Self(count.as_usize())
    }
}

impl From<ByteCount> for BitPosition {
    #[inline(always)]
    fn from(count: ByteCount) -> Self {
        Self(count.as_usize() * 8)
    }
}

impl Add<BitCount> for BitPosition {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: BitCount) -> Self {
        Self(self.0 + rhs.as_usize())
    }
}

impl AddAssign<BitCount> for BitPosition {
    #[inline(always)]
    fn add_assign(&mut self, rhs: BitCount) {
        self.0 += rhs.as_usize();
    }
}

impl Sub<BitCount> for BitPosition {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: BitCount) -> Self {
        Self(self.0 - rhs.as_usize())
    }
}

impl SubAssign<BitCount> for BitPosition {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: BitCount) {
        self.0 -= rhs.as_usize();
    }
}

impl Add<ByteCount> for BitPosition {
    type Output = Self;

    #[inline(always)]
    fn add(self, rhs: ByteCount) -> Self {
        Self(self.0 + rhs.as_usize() * 8)
    }
}

impl AddAssign<ByteCount> for BitPosition {
    #[inline(always)]
    fn add_assign(&mut self, rhs: ByteCount) {
        self.0 += rhs.as_usize() * 8;
    }
}

impl Sub<ByteCount> for BitPosition {
    type Output = Self;

    #[inline(always)]
    fn sub(self, rhs: ByteCount) -> Self {
        Self(self.0 - rhs.as_usize() * 8)
    }
}

impl SubAssign<ByteCount> for BitPosition {
    #[inline(always)]
    fn sub_assign(&mut self, rhs: ByteCount) {
        self.0 -= rhs.as_usize() * 8;
    }
}

impl PartialEq<BitCount> for BitPosition {
    #[inline(always)]
    fn eq(&self, other: &BitCount) -> bool {
        self.0 == other.as_usize()
    }
}

impl PartialEq<BitPosition> for BitCount {
    #[inline(always)]
    fn eq(&self, other: &BitPosition) -> bool {
        self.as_usize() == other.0
    }
}

impl PartialOrd<BitCount> for BitPosition {
    #[inline(always)]
    fn partial_cmp(&self, other: &BitCount) -> Option<Ordering> {
        Some(self.0.cmp(&other.as_usize()))
    }
}

impl PartialOrd<BitPosition> for BitCount {
    #[inline(always)]
    fn partial_cmp(&self, other: &BitPosition) -> Option<Ordering> {
        Some(self.as_usize().cmp(&other.0))
    }
}

impl PartialEq<ByteCount> for BitPosition {
    #[inline(always)]
    fn eq(&self, other: &ByteCount) -> bool {
        self.0 == other.as_usize() * 8
    }
}

impl PartialEq<BitPosition> for ByteCount {
    #[inline(always)]
    fn eq(&self, other: &BitPosition) -> bool {
        self.as_usize() * 8 == other.0
    }
}

impl PartialOrd<ByteCount> for BitPosition {
    #[inline(always)]
    fn partial_cmp(&self, other: &ByteCount) -> Option<Ordering> {
        Some(self.0.cmp(&(other.as_usize() * 8)))
    }
}

impl PartialOrd<BitPosition> for ByteCount {
    #[inline(always)]
    fn partial_cmp(&self, other: &BitPosition) -> Option<Ordering> {
        Some((self.as_usize() * 8).cmp(&other.0))
    }
}

impl Display for BitPosition {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
