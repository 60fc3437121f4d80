//! Generates pseudorandom sequences using a linear-feedback shift register.
//!
//! An LFSR is a register whose next state is a linear (XOR) function of a
//! subset of its current bits. With the right feedback polynomial the register
//! walks through every one of its `2^W - 1` nonzero states before repeating,
//! which makes it a cheap source of maximal-length sequences for things like
//! PRBS test patterns, scramblers and spreading codes.
//!
//! As usual,
//! [the Wiki](https://en.wikipedia.org/wiki/Linear-feedback_shift_register)
//! is an excellent reference for further details. The register here shifts to
//! the right: the feedback bit, the parity of the tapped state bits, is
//! placed in bit 0 and the whole register is then rotated right by one, so it
//! lands in the top bit. The tap mask is given in the usual "bit `W-1` is the
//! output stage" form and is stored bit-reversed internally.
//!
//! The register width is a const parameter, so registers narrower than any
//! native integer are supported: `Lfsr<u8, 4>` is a 4-bit register stored in
//! a `u8`. Be careful to pick the width you actually want, `Lfsr<u32, 32>`
//! and `Lfsr<u32, 8>` run very different sequences for the same seed.

use crate::taps;
use crate::util::bits::{self, Register};
use log::{debug, trace, warn};
use num_traits::NumCast;
use std::error;
use std::fmt;
use std::mem::size_of;

/// Serial bit output of the register
pub mod prbs;
/// `rand::RngCore` over the register output
pub mod rng;

/// Errors produced when constructing an `Lfsr`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum LfsrError {
    /// The seed was zero. Zero maps to itself under the feedback step, so a
    /// zero register never leaves that state.
    SeedIsZero,
    /// The tap mask did not include the register's top bit.
    TapsMustHaveMsbSet,
    /// No maximal-length tap polynomial is known for the requested width.
    NoKnownTaps(u32),
}

impl fmt::Display for LfsrError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match *self {
            LfsrError::SeedIsZero => {
                write!(f, "LFSR error: seed must be non-zero")
            }
            LfsrError::TapsMustHaveMsbSet => write!(
                f,
                "LFSR error: taps must have the most significant bit set"
            ),
            LfsrError::NoKnownTaps(width) => write!(
                f,
                "LFSR error: no known maximal taps for a {}-bit register",
                width
            ),
        }
    }
}

impl error::Error for LfsrError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        None
    }
}

/// A `W`-bit linear-feedback shift register stored in a `T`.
///
/// # Examples
///
/// ```
/// use lfsr_rs::Lfsr;
///
/// let mut lfsr = Lfsr::<u8, 4>::new(1, 0b1101).unwrap();
///
/// assert_eq!(lfsr.next_value(), 0b1000);
/// assert_eq!(lfsr.next_value(), 0b1100);
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Lfsr<T, const W: u32> {
    taps: T,
    state: T,
}

/// An 8-bit register.
pub type Lfsr8 = Lfsr<u8, 8>;
/// A 16-bit register.
pub type Lfsr16 = Lfsr<u16, 16>;
/// A 32-bit register.
pub type Lfsr32 = Lfsr<u32, 32>;
/// A 64-bit register.
pub type Lfsr64 = Lfsr<u64, 64>;

impl<T: Register, const W: u32> Lfsr<T, W> {
    const WIDTH_CHECK: () = assert!(
        W >= 2 && W as usize <= size_of::<T>() * 8,
        "LFSR width must be at least 2 and fit in the storage type"
    );

    /// Creates a new `Lfsr` and steps it once.
    ///
    /// The first value returned by `next_value` is therefore the seed after
    /// one feedback step, not the seed itself. Bits of `seed` and `taps` at or
    /// above `W` are dropped.
    ///
    /// # Arguments
    ///
    /// * `seed` - Initial state of the register. Must be non-zero.
    /// * `taps` - Polynomial bit mask defining the feedback taps. A 1 marks a
    /// state bit that takes part in the XOR producing the next bit. Bit
    /// `W - 1` must be set.
    ///
    /// # Examples
    ///
    /// ```
    /// use lfsr_rs::{Lfsr, LfsrError};
    ///
    /// assert!(Lfsr::<u8, 8>::new(1, 0xB8).is_ok());
    /// assert_eq!(Lfsr::<u8, 8>::new(0, 0xB8), Err(LfsrError::SeedIsZero));
    /// assert_eq!(
    ///     Lfsr::<u8, 8>::new(1, 0x38),
    ///     Err(LfsrError::TapsMustHaveMsbSet)
    /// );
    /// ```
    #[allow(clippy::let_unit_value)]
    pub fn new(seed: T, taps: T) -> Result<Self, LfsrError> {
        let () = Self::WIDTH_CHECK;

        let mask = bits::width_mask::<T>(W);
        if (seed | taps) & !mask != T::zero() {
            warn!(
                "Truncating seed {:#x} / taps {:#x} to {} bits",
                seed, taps, W
            );
        }
        let seed = seed & mask;
        let taps = taps & mask;

        if seed == T::zero() {
            debug!("Rejecting zero seed for {}-bit LFSR", W);
            return Err(LfsrError::SeedIsZero);
        }

        let reversed = bits::bit_reverse(taps, W);
        if reversed & T::one() == T::zero() {
            debug!("Rejecting taps {:#x} for {}-bit LFSR, MSB unset", taps, W);
            return Err(LfsrError::TapsMustHaveMsbSet);
        }

        let mut lfsr = Lfsr {
            taps: reversed,
            state: seed,
        };
        lfsr.step();
        trace!(
            "New {}-bit LFSR: seed {:#x}, taps {:#x}, state {:#x}",
            W,
            seed,
            taps,
            lfsr.state
        );
        Ok(lfsr)
    }

    /// Creates a new `Lfsr` using the maximal-length taps from
    /// `taps::maximal` for this width.
    ///
    /// # Examples
    ///
    /// ```
    /// use lfsr_rs::{Lfsr, LfsrError};
    ///
    /// let lfsr = Lfsr::<u16, 16>::maximal(1).unwrap();
    /// assert_eq!(lfsr.taps(), 0xD008);
    ///
    /// let err = Lfsr::<u128, 100>::maximal(1).unwrap_err();
    /// assert_eq!(err, LfsrError::NoKnownTaps(100));
    /// ```
    pub fn maximal(seed: T) -> Result<Self, LfsrError> {
        let taps = taps::maximal(W)
            .and_then(|t| <T as NumCast>::from(t))
            .ok_or(LfsrError::NoKnownTaps(W))?;
        Self::new(seed, taps)
    }

    /// Returns the current register value and advances the register by one
    /// step.
    pub fn next_value(&mut self) -> T {
        let value = self.state;
        self.step();
        value
    }

    /// The value the next call to `next_value` will return.
    pub fn state(&self) -> T {
        self.state
    }

    /// The tap mask in the same form it was passed to `new`.
    pub fn taps(&self) -> T {
        bits::bit_reverse(self.taps, W)
    }

    /// Register width in bits.
    pub fn width() -> u32 {
        W
    }

    /// Longest possible period for this width, `2^W - 1`. Only reached with
    /// maximal taps.
    pub fn period_bound() -> u128 {
        1_u128
            .checked_shl(W)
            .map_or(u128::max_value(), |bound| bound - 1)
    }

    fn step(&mut self) {
        let previous = self.state;
        let feedback = bits::parity(previous & self.taps);
        let masked = (previous & !T::one()) | feedback;
        self.state = bits::rotate_right_one(masked, W);
    }
}

/// Never returns `None`, the register cycles forever.
impl<T: Register, const W: u32> Iterator for Lfsr<T, W> {
    type Item = T;

    fn next(&mut self) -> Option<T> {
        Some(self.next_value())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::max_value(), None)
    }
}
