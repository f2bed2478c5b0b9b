//! Threshold-based strategy selection.
//!
//! A stateless decision table over the two model outputs: the attrition
//! probability `p` and the predicted ELTV `v`. Rules are evaluated top to
//! bottom, first match wins, and the final arm is unconditional, so every
//! `(p, v)` pair maps to exactly one recommendation.
//!
//! Two independent display facts are derived alongside the table:
//!
//! - `is_flight_risk` uses `p >= RISK_CUTOFF` (inclusive)
//! - `value_category` uses a *strict* `v > q75`
//!
//! The strict/non-strict split against `q75` is intentional reference
//! behavior: `v == q75` satisfies the STRATEGIC RETENTION arm of the table
//! but is still reported as Standard Value.

use crate::domain::{Recommendation, ValueCategory};

/// Attrition probability at or above which an employee counts as a flight
/// risk. Fixed at training/calibration time, not loaded from the bundle.
pub const RISK_CUTOFF: f64 = 0.26;

/// Pick the recommendation for one `(probability, value)` pair.
pub fn recommend(p: f64, v: f64, q75: f64, q90: f64) -> Recommendation {
    if p >= RISK_CUTOFF && v >= q90 {
        Recommendation::CriticalAssetIntervention
    } else if p >= RISK_CUTOFF && v >= q75 {
        Recommendation::StrategicRetention
    } else if p >= RISK_CUTOFF {
        Recommendation::OperationalMonitoring
    } else {
        Recommendation::StableAndGrowing
    }
}

/// Inclusive cutoff: `p == RISK_CUTOFF` is a flight risk.
pub fn is_flight_risk(p: f64) -> bool {
    p >= RISK_CUTOFF
}

/// Strict threshold: `v == q75` is still Standard Value.
pub fn value_category(v: f64, q75: f64) -> ValueCategory {
    if v > q75 {
        ValueCategory::HighValue
    } else {
        ValueCategory::StandardValue
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const Q75: f64 = 100_000.0;
    const Q90: f64 = 150_000.0;

    #[test]
    fn decision_table_all_four_arms() {
        assert_eq!(
            recommend(0.30, 200_000.0, Q75, Q90),
            Recommendation::CriticalAssetIntervention
        );
        assert_eq!(
            recommend(0.30, 120_000.0, Q75, Q90),
            Recommendation::StrategicRetention
        );
        assert_eq!(
            recommend(0.30, 50_000.0, Q75, Q90),
            Recommendation::OperationalMonitoring
        );
        assert_eq!(
            recommend(0.10, 200_000.0, Q75, Q90),
            Recommendation::StableAndGrowing
        );
    }

    #[test]
    fn low_risk_wins_regardless_of_value() {
        // Below the cutoff, value never changes the outcome.
        for v in [0.0, Q75, Q90, 1e9] {
            assert_eq!(recommend(0.2599, v, Q75, Q90), Recommendation::StableAndGrowing);
        }
    }

    #[test]
    fn risk_cutoff_is_inclusive() {
        assert!(is_flight_risk(0.26));
        assert!(!is_flight_risk(0.2599999));
        assert_eq!(
            recommend(0.26, 0.0, Q75, Q90),
            Recommendation::OperationalMonitoring
        );
    }

    #[test]
    fn q90_boundary_is_inclusive() {
        // v exactly at q90 takes the top arm.
        assert_eq!(
            recommend(0.30, Q90, Q75, Q90),
            Recommendation::CriticalAssetIntervention
        );
    }

    #[test]
    fn q75_boundary_splits_table_and_category() {
        // v == q75 meets the >= q75 arm of the table...
        assert_eq!(
            recommend(0.30, Q75, Q75, Q90),
            Recommendation::StrategicRetention
        );
        // ...but is NOT High Value, which needs a strict >.
        assert_eq!(value_category(Q75, Q75), ValueCategory::StandardValue);
        assert_eq!(
            value_category(Q75 + f64::EPSILON * Q75, Q75),
            ValueCategory::HighValue
        );
    }

    #[test]
    fn table_is_total_and_mutually_exclusive() {
        // Sweep a grid straddling every threshold; each cell must land on
        // exactly one arm and agree with a straightforward re-derivation.
        for &p in &[0.0, 0.25, 0.26, 0.27, 0.5, 1.0] {
            for &v in &[0.0, Q75 - 1.0, Q75, Q75 + 1.0, Q90 - 1.0, Q90, Q90 + 1.0] {
                let got = recommend(p, v, Q75, Q90);
                let expected = if p < RISK_CUTOFF {
                    Recommendation::StableAndGrowing
                } else if v >= Q90 {
                    Recommendation::CriticalAssetIntervention
                } else if v >= Q75 {
                    Recommendation::StrategicRetention
                } else {
                    Recommendation::OperationalMonitoring
                };
                assert_eq!(got, expected, "p={p} v={v}");
            }
        }
    }
}
