//! Known maximal-length tap polynomials.
//!
//! Tap values are in the form `Lfsr::new` expects: bit `W - 1` always set,
//! and a tap mask `t` corresponds to the characteristic polynomial
//! `x^W + sum(x^(W - 1 - q))` over the set bits `q` of `t`. Every entry has
//! been checked to be primitive, so a register using it runs through all
//! `2^W - 1` nonzero states. Widths 2 through 24 are the widely published
//! values; the rest are low-weight primitive polynomials.

/// Tap masks for widths 2 through 64, indexed by `width - MIN_WIDTH`.
const MAXIMAL_TAPS: [u64; 63] = [
    0x3, // 2
    0x6, // 3
    0xC, // 4
    0x14, // 5
    0x30, // 6
    0x60, // 7
    0xB8, // 8
    0x110, // 9
    0x240, // 10
    0x500, // 11
    0x829, // 12
    0x100D, // 13
    0x2015, // 14
    0x6000, // 15
    0xD008, // 16
    0x12000, // 17
    0x20400, // 18
    0x40023, // 19
    0x90000, // 20
    0x140000, // 21
    0x300000, // 22
    0x420000, // 23
    0xE10000, // 24
    0x1200000, // 25
    0x3880000, // 26
    0x7200000, // 27
    0x9000000, // 28
    0x14000000, // 29
    0x38000040, // 30
    0x48000000, // 31
    0xE0000200, // 32
    0x100080000, // 33
    0x380000040, // 34
    0x500000000, // 35
    0x801000000, // 36
    0x1C08000000, // 37
    0x3401000000, // 38
    0x4400000000, // 39
    0xE000000010, // 40
    0x12000000000, // 41
    0x38000001000, // 42
    0x70040000000, // 43
    0xD0000000020, // 44
    0x1B0000000000, // 45
    0x341000000000, // 46
    0x420000000000, // 47
    0xD00000080000, // 48
    0x1008000000000, // 49
    0x3800200000000, // 50
    0x7000000400000, // 51
    0x9000000000000, // 52
    0x1C400000000000, // 53
    0x38001000000000, // 54
    0x40000040000000, // 55
    0xE0000000002000, // 56
    0x102000000000000, // 57
    0x200004000000000, // 58
    0x700000400000000, // 59
    0xC00000000000000, // 60
    0x1C80000000000000, // 61
    0x3400000200000000, // 62
    0x6000000000000000, // 63
    0xE010000000000000, // 64
];

/// Smallest register width with a table entry.
pub const MIN_WIDTH: u32 = 2;
/// Largest register width with a table entry.
pub const MAX_WIDTH: u32 = 64;

/// Returns maximal-length taps for a `width`-bit register, or `None` when the
/// width is outside `MIN_WIDTH..=MAX_WIDTH`.
///
/// # Examples
///
/// ```
/// use lfsr_rs::taps;
///
/// assert_eq!(taps::maximal(8), Some(0xB8));
/// assert_eq!(taps::maximal(1), None);
/// assert_eq!(taps::maximal(65), None);
/// ```
pub fn maximal(width: u32) -> Option<u64> {
    if width < MIN_WIDTH || width > MAX_WIDTH {
        return None;
    }
    Some(MAXIMAL_TAPS[(width - MIN_WIDTH) as usize])
}
