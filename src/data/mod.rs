//! Synthetic employee record generation.

pub mod sample;

pub use sample::*;
