//! Fixed-precision binary floating point used for the final assembly of π.

pub mod float;

pub use float::{precision_for_digits, BigFloat};
