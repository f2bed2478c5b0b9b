//! Schema alignment and scaling.
//!
//! Each model carries the ordered column list it was trained on. Alignment
//! walks that list and looks each column up in the encoded record, filling
//! `0.0` for anything absent. The lookup-or-zero is a deliberate, total
//! rule: an indicator column for a category the record did not choose is a
//! legitimate zero, and a category the training set never saw simply has no
//! column to land in and contributes no signal. Lossy by design; never an
//! error.
//!
//! Only the classifier's vector is standardized with the stored scaler; the
//! value model consumes its vector raw.

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

use crate::features::encode::EncodedColumns;

/// Ordered list of column names a model was trained on.
///
/// Fixed at training time, loaded once, never re-derived from request data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeatureSchema(pub Vec<String>);

impl FeatureSchema {
    pub fn columns(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Training-time standardization statistics for the classifier inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScalingParameters {
    pub mean: Vec<f64>,
    pub scale: Vec<f64>,
}

/// Build the aligned vector for one schema: schema order, schema length,
/// zero for any column the encoded record does not provide.
pub fn align(encoded: &EncodedColumns, schema: &FeatureSchema) -> DVector<f64> {
    DVector::from_iterator(
        schema.len(),
        schema
            .columns()
            .iter()
            .map(|col| encoded.get(col).copied().unwrap_or(0.0)),
    )
}

/// Standardize an aligned classifier vector per column: `(x - mean) / scale`.
///
/// # Panics
/// Panics if the scaler vectors are shorter than `x`. The bundle loader
/// checks both against the classifier schema length at startup.
pub fn scale_in_place(x: &mut DVector<f64>, params: &ScalingParameters) {
    for i in 0..x.len() {
        x[i] = (x[i] - params.mean[i]) / params.scale[i];
    }
}
