//! This module provides an easy single import for those using this crate.

pub use crate::lfsr::prbs::PrbsBits;
pub use crate::lfsr::{Lfsr, LfsrError};
pub use crate::taps;
pub use crate::util::bits::Register;
pub use rand::RngCore;
