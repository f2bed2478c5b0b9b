//! Input/output helpers.
//!
//! - model bundle loading + startup validation (`bundle`)
//! - employee record JSON input (`record`)
//! - analysis export JSON (`export`)

pub mod bundle;
pub mod export;
pub mod record;

pub use bundle::*;
pub use export::*;
pub use record::*;
