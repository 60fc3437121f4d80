//! Lets an `Lfsr` stand in anywhere a `rand::RngCore` is accepted.
//!
//! Words are built from successive register values, least significant first,
//! each value contributing its low `W` bits (or whatever is left of the
//! word). A 64-bit word from an 8-bit register is eight values, from a 4-bit
//! register sixteen. None of this is cryptographically secure, so `CryptoRng`
//! is deliberately not implemented.

use crate::lfsr::Lfsr;
use crate::util::bits::{self, Register};
use byteorder::{ByteOrder, LittleEndian};
use rand::{Error, RngCore};
use std::cmp;

impl<T: Register, const W: u32> Lfsr<T, W> {
    fn next_word(&mut self, word_bits: u32) -> u64 {
        let mut word = 0_u64;
        let mut filled = 0;
        while filled < word_bits {
            let take = cmp::min(W, word_bits - filled);
            word |= bits::low_bits_u64(self.next_value(), take) << filled;
            filled += take;
        }
        word
    }
}

impl<T: Register, const W: u32> RngCore for Lfsr<T, W> {
    fn next_u32(&mut self) -> u32 {
        self.next_word(32) as u32
    }

    fn next_u64(&mut self) -> u64 {
        self.next_word(64)
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        let mut buf = [0_u8; 8];
        for chunk in dest.chunks_mut(8) {
            LittleEndian::write_u64(&mut buf, self.next_u64());
            chunk.copy_from_slice(&buf[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

#[cfg(test)]
mod test {
    use crate::lfsr::{Lfsr, Lfsr16, Lfsr64, Lfsr8};
    use rand::{Rng, RngCore};

    #[test]
    fn test_next_u32_packs_values() {
        let mut lfsr = Lfsr8::new(1, 0xB8).unwrap();
        assert_eq!(lfsr.next_u32(), 0x1020_4080);

        let mut lfsr = Lfsr::<u8, 4>::new(1, 0b1101).unwrap();
        assert_eq!(lfsr.next_u32(), 0xc813_7ec8);
    }

    #[test]
    fn test_next_u64_packs_values() {
        let mut lfsr = Lfsr8::new(1, 0xB8).unwrap();
        assert_eq!(lfsr.next_u64(), 0x71e2_c488_1020_4080);

        let mut lfsr = Lfsr16::new(1, 0xD008).unwrap();
        assert_eq!(lfsr.next_u64(), 0x1000_2000_4000_8000);
    }

    #[test]
    fn test_next_u64_full_width() {
        let mut lfsr = Lfsr64::maximal(0x0123_4567_89ab_cdef).unwrap();
        let mut shadow = lfsr.clone();
        for _ in 0..100 {
            assert_eq!(lfsr.next_u64(), shadow.next_value());
        }
    }

    #[test]
    fn test_fill_bytes() {
        let mut lfsr = Lfsr8::new(1, 0xB8).unwrap();
        let mut buf = [0_u8; 10];
        lfsr.fill_bytes(&mut buf);
        assert_eq!(buf, [128, 64, 32, 16, 136, 196, 226, 113, 56, 28]);

        let mut lfsr = Lfsr8::new(1, 0xB8).unwrap();
        let mut buf = [0_u8; 10];
        assert!(lfsr.try_fill_bytes(&mut buf).is_ok());
        assert_eq!(buf[..8], [128, 64, 32, 16, 136, 196, 226, 113]);
    }

    #[test]
    fn test_rng_adaptor() {
        let mut lfsr = Lfsr::<u32, 31>::maximal(7).unwrap();
        for _ in 0..1000 {
            let x = lfsr.gen_range(10, 20);
            assert!(x >= 10 && x < 20);
        }
    }
}
