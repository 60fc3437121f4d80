//! Generic linear-feedback shift registers.
//!
//! `Lfsr<T, W>` is a `W`-bit register stored in the unsigned integer `T`.
//! It produces a deterministic, cyclic sequence of nonzero values; with one
//! of the tap polynomials from `taps::maximal` the cycle covers all `2^W - 1`
//! nonzero states. The register output can also be read one bit at a time as
//! a PRBS, or used as a `rand::RngCore`. It is not a cryptographic generator.
//!
//! # Example
//!
//! ```
//! use lfsr_rs::prelude::*;
//!
//! let mut lfsr = Lfsr::<u8, 8>::new(1, 0xB8).unwrap();
//! let first: Vec<u8> = lfsr.by_ref().take(4).collect();
//! assert_eq!(first, vec![0x80, 0x40, 0x20, 0x10]);
//!
//! let prbs: Vec<u8> = lfsr.bits().take(4).collect();
//! assert_eq!(prbs, vec![0, 0, 0, 1]);
//! ```

pub mod lfsr;
pub mod prelude;
pub mod taps;
pub mod util;

pub use crate::lfsr::{Lfsr, Lfsr16, Lfsr32, Lfsr64, Lfsr8, LfsrError};
