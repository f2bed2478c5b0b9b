//! Feature alignment: from a raw employee record to model-ready vectors.
//!
//! - one-hot encoding of categorical fields (`encode`)
//! - schema alignment with explicit zero-fill, plus scaling (`align`)

pub mod align;
pub mod encode;

pub use align::*;
pub use encode::*;
