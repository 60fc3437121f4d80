//! Helper functions for working with registers narrower than their storage
//! type.

/// Width-parameterized bit manipulation used by the register step
pub mod bits;
