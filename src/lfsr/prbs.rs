//! Serial output of the register as a pseudorandom binary sequence (PRBS).
//!
//! Each clock of the register shifts one bit out of the bottom stage. Reading
//! that bit on every step gives the classic PRBS bit stream; for maximal taps
//! one period of it holds `2^(W-1)` ones and `2^(W-1) - 1` zeros.

use crate::lfsr::Lfsr;
use crate::util::bits::Register;

/// Iterator over the output bits of an `Lfsr`.
///
/// Created by `Lfsr::bits`. Yields `0` or `1` forever.
pub struct PrbsBits<'a, T, const W: u32> {
    lfsr: &'a mut Lfsr<T, W>,
}

impl<T: Register, const W: u32> Lfsr<T, W> {
    /// Get the next bit of the sequence, bit 0 of `next_value`.
    ///
    /// # Examples
    ///
    /// ```
    /// use lfsr_rs::Lfsr8;
    ///
    /// let mut lfsr = Lfsr8::new(1, 0xB8).unwrap();
    /// let bits: Vec<u8> = (0..8).map(|_| lfsr.next_bit()).collect();
    ///
    /// assert_eq!(bits, vec![0, 0, 0, 0, 0, 0, 0, 1]);
    /// ```
    pub fn next_bit(&mut self) -> u8 {
        if self.next_value() & T::one() == T::one() {
            1
        } else {
            0
        }
    }

    /// Borrows the register as an iterator over its output bits.
    pub fn bits(&mut self) -> PrbsBits<'_, T, W> {
        PrbsBits { lfsr: self }
    }
}

impl<'a, T: Register, const W: u32> Iterator for PrbsBits<'a, T, W> {
    type Item = u8;

    fn next(&mut self) -> Option<u8> {
        Some(self.lfsr.next_bit())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::max_value(), None)
    }
}

#[cfg(test)]
mod test {
    use crate::lfsr::{Lfsr, Lfsr8};

    #[test]
    fn test_prbs8_bits() {
        let mut lfsr = Lfsr8::new(1, 0xB8).unwrap();
        let bits: Vec<u8> = lfsr.bits().take(16).collect();
        assert_eq!(bits, vec![0, 0, 0, 0, 0, 0, 0, 1, 0, 0, 0, 1, 1, 1, 0, 0]);
    }

    #[test]
    fn test_bits_track_register() {
        let mut lfsr = Lfsr::<u16, 11>::maximal(0x2a).unwrap();
        let mut shadow = lfsr.clone();
        for bit in lfsr.bits().take(500) {
            assert_eq!(u16::from(bit), shadow.next_value() & 1);
        }
        assert_eq!(lfsr, shadow);
    }

    #[test]
    fn test_prbs_balance() {
        // One full period of a maximal sequence has exactly one more 1 than
        // 0.
        let mut lfsr = Lfsr::<u16, 12>::maximal(1).unwrap();
        let period = Lfsr::<u16, 12>::period_bound() as usize;
        let ones: usize =
            lfsr.bits().take(period).map(usize::from).sum();
        assert_eq!(ones, 1 << 11);
        assert_eq!(period - ones, (1 << 11) - 1);

        let mut lfsr = Lfsr8::new(0x3c, 0xB8).unwrap();
        let ones: usize = lfsr.bits().take(255).map(usize::from).sum();
        assert_eq!(ones, 128);
    }
}
