//! Model evaluation: the attrition classifier and the ELTV regressor.

pub mod model;

pub use model::*;
