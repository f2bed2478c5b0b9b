//! The analysis pipeline: one record in, one result out.
//!
//! This is the single entry point the front-end calls:
//! validate -> one-hot encode -> align/scale -> classify, align -> regress
//! -> threshold decision.
//!
//! The pipeline holds no state of its own. Everything long-lived comes in
//! through `&Bundle` (loaded once in `app::run`); the record and both
//! aligned vectors live only for the duration of the call.

use rayon::prelude::*;

use crate::domain::{AnalysisResult, EmployeeRecord};
use crate::error::AppError;
use crate::features::{align, one_hot_encode, scale_in_place};
use crate::io::bundle::Bundle;
use crate::strategy;

/// Analyze a single employee record.
pub fn analyze(bundle: &Bundle, record: &EmployeeRecord) -> Result<AnalysisResult, AppError> {
    record.validate()?;

    let encoded = one_hot_encode(record);

    // Classifier path: aligned, then standardized with the stored scaler.
    let mut clf_input = align(&encoded, &bundle.classifier_schema);
    scale_in_place(&mut clf_input, &bundle.scaler);
    let risk_probability = bundle.classifier.predict_proba(&clf_input);
    if !risk_probability.is_finite() {
        return Err(AppError::internal("Non-finite risk probability from classifier."));
    }

    // Value path: aligned only; the regressor consumes raw features.
    let eltv_input = align(&encoded, &bundle.value_schema);
    let eltv = bundle.value_model.predict(&eltv_input);
    if !eltv.is_finite() {
        return Err(AppError::internal("Non-finite ELTV prediction from value model."));
    }

    Ok(AnalysisResult {
        risk_probability,
        is_flight_risk: strategy::is_flight_risk(risk_probability),
        eltv,
        value_category: strategy::value_category(eltv, bundle.q75),
        recommendation: strategy::recommend(risk_probability, eltv, bundle.q75, bundle.q90),
    })
}

/// Analyze many records in parallel, preserving input order.
///
/// The bundle is read-only, so records score independently; the first
/// per-record error aborts the batch.
pub fn analyze_batch(
    bundle: &Bundle,
    records: &[EmployeeRecord],
) -> Result<Vec<AnalysisResult>, AppError> {
    records
        .par_iter()
        .map(|record| analyze(bundle, record))
        .collect()
}
