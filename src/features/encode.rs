//! One-hot encoding of a single employee record.
//!
//! Categorical field `F` with chosen value `V` becomes the indicator column
//! `F_V = 1.0`; the other possible values of `F` emit nothing (they are
//! implicitly absent and become zeros during alignment). Numeric fields pass
//! through unchanged under their own name.
//!
//! The output is keyed by column name, so it carries no ordering of its own;
//! ordering is imposed later by each model's schema (`align`).

use std::collections::BTreeMap;

use crate::domain::EmployeeRecord;

/// Encoded record: column name → numeric value.
pub type EncodedColumns = BTreeMap<String, f64>;

/// Encode one record into named numeric columns.
pub fn one_hot_encode(record: &EmployeeRecord) -> EncodedColumns {
    let mut columns = EncodedColumns::new();

    for (name, value) in record.numeric_columns() {
        columns.insert(name.to_string(), value);
    }
    for (field, value) in record.categorical_columns() {
        columns.insert(format!("{field}_{value}"), 1.0);
    }

    columns
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::sample::test_record;

    #[test]
    fn numeric_fields_pass_through_under_their_own_name() {
        let record = test_record();
        let cols = one_hot_encode(&record);
        assert_eq!(cols.get("Age"), Some(&f64::from(record.age)));
        assert_eq!(cols.get("MonthlyIncome"), Some(&f64::from(record.monthly_income)));
        assert_eq!(
            cols.get("PerformanceRating"),
            Some(&f64::from(record.performance_rating))
        );
    }

    #[test]
    fn chosen_category_emits_a_single_indicator() {
        let mut record = test_record();
        record.over_time = "Yes".to_string();
        let cols = one_hot_encode(&record);

        assert_eq!(cols.get("OverTime_Yes"), Some(&1.0));
        // The unchosen value is absent, not zero.
        assert!(!cols.contains_key("OverTime_No"));
    }

    #[test]
    fn every_categorical_field_is_represented() {
        let record = test_record();
        let cols = one_hot_encode(&record);
        for (field, value) in record.categorical_columns() {
            assert_eq!(cols.get(&format!("{field}_{value}")), Some(&1.0));
        }
        // 20 numeric + 7 indicators.
        assert_eq!(cols.len(), 27);
    }
}
