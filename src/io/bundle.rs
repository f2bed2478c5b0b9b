//! Model bundle loading.
//!
//! The training pipeline exports eight discrete artifacts into a bundle
//! directory; this module deserializes them into one immutable [`Bundle`]
//! and cross-validates them. Any missing or malformed artifact is a fatal
//! startup failure: the process must not score anything with a partial
//! bundle.
//!
//! The bundle is loaded exactly once in `app::run` and passed by shared
//! reference into every handler. It is immutable and `Sync`, so a
//! multi-threaded host can share `&Bundle` freely without further
//! synchronization.

use std::collections::BTreeMap;
use std::fs::File;
use std::path::Path;

use serde::de::DeserializeOwned;

use crate::domain::{CATEGORICAL_FIELDS, NUMERIC_FIELDS};
use crate::error::AppError;
use crate::features::{FeatureSchema, ScalingParameters};
use crate::models::{LinearModel, LogisticModel};

/// Categorical field name → ordered list of legal values.
///
/// Exposed to the presentation layer for populating choice widgets, and used
/// at load time to verify that every one-hot schema column is resolvable.
pub type CategoricalOptions = BTreeMap<String, Vec<String>>;

/// Everything the pipeline needs, loaded once, read-only thereafter.
#[derive(Debug, Clone)]
pub struct Bundle {
    pub classifier: LogisticModel,
    pub value_model: LinearModel,
    pub scaler: ScalingParameters,
    pub classifier_schema: FeatureSchema,
    pub value_schema: FeatureSchema,
    /// 75th percentile of historical value-model outputs.
    pub q75: f64,
    /// 90th percentile of historical value-model outputs.
    pub q90: f64,
    pub options: CategoricalOptions,
}

impl Bundle {
    /// Load and cross-validate all eight artifacts from `dir`.
    pub fn load(dir: &Path) -> Result<Self, AppError> {
        let bundle = Self {
            classifier: read_artifact(dir, "attrition_model.json")?,
            value_model: read_artifact(dir, "eltv_model.json")?,
            scaler: read_artifact(dir, "scaler.json")?,
            classifier_schema: read_artifact(dir, "clf_features.json")?,
            value_schema: read_artifact(dir, "eltv_features.json")?,
            q75: read_artifact(dir, "eltv_q75.json")?,
            q90: read_artifact(dir, "eltv_q90.json")?,
            options: read_artifact(dir, "cat_options.json")?,
        };
        bundle.validate()?;
        Ok(bundle)
    }

    /// Startup cross-validation of the loaded artifacts.
    ///
    /// The schemas are the contract between training and inference; checking
    /// them here (instead of re-deriving anything per request) keeps every
    /// later step a pure lookup.
    pub fn validate(&self) -> Result<(), AppError> {
        let n_clf = self.classifier_schema.len();
        if self.classifier.weights.len() != n_clf {
            return Err(AppError::startup(format!(
                "Classifier has {} weights but its schema lists {} columns.",
                self.classifier.weights.len(),
                n_clf
            )));
        }
        if self.scaler.mean.len() != n_clf || self.scaler.scale.len() != n_clf {
            return Err(AppError::startup(format!(
                "Scaler statistics ({} means, {} scales) do not match the {} classifier columns.",
                self.scaler.mean.len(),
                self.scaler.scale.len(),
                n_clf
            )));
        }
        if let Some(i) = self
            .scaler
            .scale
            .iter()
            .position(|s| !s.is_finite() || *s == 0.0)
        {
            return Err(AppError::startup(format!(
                "Scaler scale for column '{}' is zero or non-finite.",
                self.classifier_schema.columns()[i]
            )));
        }

        if self.value_model.coefficients.len() != self.value_schema.len() {
            return Err(AppError::startup(format!(
                "Value model has {} coefficients but its schema lists {} columns.",
                self.value_model.coefficients.len(),
                self.value_schema.len()
            )));
        }

        if !(self.q75.is_finite() && self.q90.is_finite()) || self.q75 > self.q90 {
            return Err(AppError::startup(format!(
                "Invalid quantile thresholds: q75={} q90={}.",
                self.q75, self.q90
            )));
        }

        for field in CATEGORICAL_FIELDS {
            match self.options.get(field) {
                Some(values) if !values.is_empty() => {}
                _ => {
                    return Err(AppError::startup(format!(
                        "Bundle options are missing values for categorical field '{field}'."
                    )));
                }
            }
        }

        for (label, schema) in [
            ("classifier", &self.classifier_schema),
            ("value model", &self.value_schema),
        ] {
            for col in schema.columns() {
                if !self.column_is_resolvable(col) {
                    return Err(AppError::startup(format!(
                        "{label} schema column '{col}' matches no known numeric field or \
                         categorical option."
                    )));
                }
            }
        }

        Ok(())
    }

    /// A schema column is resolvable if it is a numeric field name, or a
    /// `Field_Value` indicator whose value appears in that field's options.
    fn column_is_resolvable(&self, col: &str) -> bool {
        if NUMERIC_FIELDS.contains(&col) {
            return true;
        }
        for field in CATEGORICAL_FIELDS {
            if let Some(value) = col.strip_prefix(&format!("{field}_")) {
                if self
                    .options
                    .get(field)
                    .is_some_and(|values| values.iter().any(|v| v == value))
                {
                    return true;
                }
            }
        }
        false
    }
}

fn read_artifact<T: DeserializeOwned>(dir: &Path, name: &str) -> Result<T, AppError> {
    let path = dir.join(name);
    let file = File::open(&path).map_err(|e| {
        AppError::startup(format!("Failed to open model artifact '{}': {e}", path.display()))
    })?;
    serde_json::from_reader(file).map_err(|e| {
        AppError::startup(format!("Invalid model artifact '{}': {e}", path.display()))
    })
}

#[cfg(test)]
pub fn test_bundle() -> Bundle {
    let mut options = CategoricalOptions::new();
    options.insert("Gender".into(), vec!["Female".into(), "Male".into()]);
    options.insert(
        "MaritalStatus".into(),
        vec!["Divorced".into(), "Married".into(), "Single".into()],
    );
    options.insert(
        "EducationField".into(),
        vec!["Life Sciences".into(), "Medical".into(), "Other".into()],
    );
    options.insert(
        "Department".into(),
        vec![
            "Human Resources".into(),
            "Research & Development".into(),
            "Sales".into(),
        ],
    );
    options.insert(
        "JobRole".into(),
        vec![
            "Manager".into(),
            "Research Scientist".into(),
            "Sales Executive".into(),
        ],
    );
    options.insert(
        "BusinessTravel".into(),
        vec![
            "Non-Travel".into(),
            "Travel_Frequently".into(),
            "Travel_Rarely".into(),
        ],
    );
    options.insert("OverTime".into(), vec!["No".into(), "Yes".into()]);

    Bundle {
        classifier: LogisticModel {
            weights: vec![0.0, 0.0, 0.0],
            intercept: 0.0,
        },
        value_model: LinearModel {
            coefficients: vec![0.0, 0.0],
            intercept: 0.0,
        },
        scaler: ScalingParameters {
            mean: vec![0.0, 0.0, 0.0],
            scale: vec![1.0, 1.0, 1.0],
        },
        classifier_schema: FeatureSchema(vec![
            "Age".into(),
            "MonthlyIncome".into(),
            "OverTime_Yes".into(),
        ]),
        value_schema: FeatureSchema(vec!["MonthlyIncome".into(), "OverTime_Yes".into()]),
        q75: 100_000.0,
        q90: 150_000.0,
        options,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_dir(tag: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "retention-advisor-test-{tag}-{}",
            std::process::id()
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write_artifacts(dir: &Path, bundle: &Bundle) {
        let write = |name: &str, json: serde_json::Value| {
            fs::write(dir.join(name), serde_json::to_string_pretty(&json).unwrap()).unwrap();
        };
        write("attrition_model.json", serde_json::to_value(&bundle.classifier).unwrap());
        write("eltv_model.json", serde_json::to_value(&bundle.value_model).unwrap());
        write("scaler.json", serde_json::to_value(&bundle.scaler).unwrap());
        write(
            "clf_features.json",
            serde_json::to_value(&bundle.classifier_schema).unwrap(),
        );
        write(
            "eltv_features.json",
            serde_json::to_value(&bundle.value_schema).unwrap(),
        );
        write("eltv_q75.json", serde_json::to_value(bundle.q75).unwrap());
        write("eltv_q90.json", serde_json::to_value(bundle.q90).unwrap());
        write("cat_options.json", serde_json::to_value(&bundle.options).unwrap());
    }

    #[test]
    fn load_round_trips_a_valid_bundle() {
        let dir = scratch_dir("load-ok");
        let bundle = test_bundle();
        write_artifacts(&dir, &bundle);

        let loaded = Bundle::load(&dir).unwrap();
        assert_eq!(loaded.classifier_schema, bundle.classifier_schema);
        assert_eq!(loaded.q75, bundle.q75);
        assert_eq!(loaded.options, bundle.options);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn missing_artifact_is_a_startup_failure() {
        let dir = scratch_dir("load-missing");
        let bundle = test_bundle();
        write_artifacts(&dir, &bundle);
        fs::remove_file(dir.join("eltv_q90.json")).unwrap();

        let err = Bundle::load(&dir).unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("eltv_q90.json"));

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn corrupt_artifact_is_a_startup_failure() {
        let dir = scratch_dir("load-corrupt");
        let bundle = test_bundle();
        write_artifacts(&dir, &bundle);
        fs::write(dir.join("scaler.json"), "{not json").unwrap();

        let err = Bundle::load(&dir).unwrap_err();
        assert_eq!(err.exit_code(), 2);

        let _ = fs::remove_dir_all(&dir);
    }

    #[test]
    fn weight_schema_length_mismatch_is_rejected() {
        let mut bundle = test_bundle();
        bundle.classifier.weights.push(1.0);
        let err = bundle.validate().unwrap_err();
        assert_eq!(err.exit_code(), 2);
        assert!(err.to_string().contains("weights"));
    }

    #[test]
    fn zero_scale_is_rejected() {
        let mut bundle = test_bundle();
        bundle.scaler.scale[1] = 0.0;
        let err = bundle.validate().unwrap_err();
        assert!(err.to_string().contains("MonthlyIncome"));
    }

    #[test]
    fn inverted_quantiles_are_rejected() {
        let mut bundle = test_bundle();
        bundle.q75 = bundle.q90 + 1.0;
        assert!(bundle.validate().is_err());
    }

    #[test]
    fn unresolvable_schema_column_is_rejected() {
        let mut bundle = test_bundle();
        bundle.classifier.weights.push(0.0);
        bundle.scaler.mean.push(0.0);
        bundle.scaler.scale.push(1.0);
        bundle
            .classifier_schema
            .0
            .push("Department_Quantum Relations".into());
        let err = bundle.validate().unwrap_err();
        assert!(err.to_string().contains("Quantum Relations"));
    }

    #[test]
    fn indicator_columns_resolve_against_options() {
        let bundle = test_bundle();
        assert!(bundle.column_is_resolvable("Age"));
        assert!(bundle.column_is_resolvable("OverTime_Yes"));
        assert!(bundle.column_is_resolvable("JobRole_Sales Executive"));
        assert!(!bundle.column_is_resolvable("OverTime_Maybe"));
        assert!(!bundle.column_is_resolvable("FavouriteColor_Blue"));
    }
}
