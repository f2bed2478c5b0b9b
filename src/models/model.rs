//! Pre-trained model evaluation.
//!
//! Both models are linear in their inputs and evaluate in one dot product:
//!
//! - the attrition classifier is a logistic model; its positive-class
//!   probability is `sigmoid(w · x + b)`
//! - the ELTV regressor is a plain linear model, `c · x + b`
//!
//! Evaluation is a pure function of the loaded parameters and the aligned
//! vector: no I/O, no state, no randomness. The parameters come from the
//! training pipeline and are treated as opaque (see `io::bundle`).

use nalgebra::DVector;
use serde::{Deserialize, Serialize};

/// Binary probabilistic classifier (logistic regression form).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogisticModel {
    pub weights: Vec<f64>,
    pub intercept: f64,
}

impl LogisticModel {
    /// Positive-class probability for an aligned, scaled feature vector.
    ///
    /// # Panics
    /// Panics if `x.len() != self.weights.len()`. The bundle loader verifies
    /// the weight count against the classifier schema, and alignment always
    /// produces schema-length vectors, so callers uphold this by construction.
    pub fn predict_proba(&self, x: &DVector<f64>) -> f64 {
        let w = DVector::from_column_slice(&self.weights);
        sigmoid(w.dot(x) + self.intercept)
    }
}

/// Linear regressor for employee lifetime value.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinearModel {
    pub coefficients: Vec<f64>,
    pub intercept: f64,
}

impl LinearModel {
    /// Predicted value for an aligned (unscaled) feature vector.
    ///
    /// # Panics
    /// Panics if `x.len() != self.coefficients.len()` (same contract as
    /// [`LogisticModel::predict_proba`]).
    pub fn predict(&self, x: &DVector<f64>) -> f64 {
        let c = DVector::from_column_slice(&self.coefficients);
        c.dot(x) + self.intercept
    }
}

/// Numerically stable logistic function.
///
/// Splitting on the sign avoids `exp` overflow for large |z|; both branches
/// are algebraically identical.
pub fn sigmoid(z: f64) -> f64 {
    if z >= 0.0 {
        1.0 / (1.0 + (-z).exp())
    } else {
        let e = z.exp();
        e / (1.0 + e)
    }
}
