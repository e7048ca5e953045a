//! Tooling for testing the crate and crates built on top of it.

#[cfg(feature = "arbitrary")]
pub mod arbitrary;
#[cfg(feature = "proptest")]
pub mod proptest;
pub mod testing;
