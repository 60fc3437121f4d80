use num::{PrimInt, Unsigned};
use std::fmt;
use std::mem::size_of;

/// Backing storage for a shift register.
///
/// Implemented for every unsigned primitive integer. Signed and floating
/// point types do not satisfy `Unsigned`/`PrimInt`, so registers over them
/// are rejected at compile time.
pub trait Register:
    PrimInt + Unsigned + fmt::Debug + fmt::LowerHex + fmt::Binary
{
}

impl<T> Register for T where
    T: PrimInt + Unsigned + fmt::Debug + fmt::LowerHex + fmt::Binary
{
}

/// Number of bits in the storage type `T`.
pub fn type_bits<T>() -> u32 {
    (size_of::<T>() * 8) as u32
}

/// Mask with the low `width` bits set.
///
/// # Examples
///
/// ```
/// use lfsr_rs::util::bits;
///
/// assert_eq!(bits::width_mask::<u8>(5), 0b1_1111);
/// assert_eq!(bits::width_mask::<u16>(16), 0xffff);
/// ```
pub fn width_mask<T>(width: u32) -> T
where
    T: PrimInt + Unsigned,
{
    if width >= type_bits::<T>() {
        T::max_value()
    } else {
        (T::one() << width as usize) - T::one()
    }
}

/// Reverses the order of the low `width` bits of `value`.
///
/// Bits at or above `width` are discarded.
///
/// # Examples
///
/// ```
/// use lfsr_rs::util::bits;
///
/// assert_eq!(bits::bit_reverse(0b1100_u8, 4), 0b0011);
/// assert_eq!(bits::bit_reverse(0b001_u8, 3), 0b100);
/// ```
pub fn bit_reverse<T>(value: T, width: u32) -> T
where
    T: PrimInt + Unsigned,
{
    let width = width as usize;
    (0..width).fold(T::zero(), |acc, i| {
        if (value >> i) & T::one() == T::one() {
            acc | (T::one() << (width - 1 - i))
        } else {
            acc
        }
    })
}

/// Rotates a `width`-bit value right by one position. Bit 0 wraps around to
/// bit `width - 1`.
///
/// `value` must not have any bits set at or above `width`.
pub fn rotate_right_one<T>(value: T, width: u32) -> T
where
    T: PrimInt + Unsigned,
{
    (value >> 1) | ((value & T::one()) << (width as usize - 1))
}

/// Parity of `value`, 1 when an odd number of bits are set.
pub fn parity<T>(value: T) -> T
where
    T: PrimInt + Unsigned,
{
    if value.count_ones() & 1 == 1 {
        T::one()
    } else {
        T::zero()
    }
}

/// Returns the low `count` bits of `value` as a `u64`. `count` is at most 64.
pub fn low_bits_u64<T>(value: T, count: u32) -> u64
where
    T: PrimInt + Unsigned,
{
    debug_assert!(count <= 64);
    // At most 64 bits survive the mask, so the conversion never fails.
    (value & width_mask::<T>(count)).to_u64().unwrap_or(0)
}
