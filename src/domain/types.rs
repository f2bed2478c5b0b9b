//! Shared domain types.
//!
//! These types are intentionally kept lightweight and serializable so they can be:
//!
//! - used in-memory during scoring
//! - read from / written to JSON
//! - reused by alternative front-ends (the CLI report is just one consumer)

use serde::{Deserialize, Serialize};

use crate::error::AppError;

/// Numeric record fields, under their trained column names.
pub const NUMERIC_FIELDS: [&str; 20] = [
    "Age",
    "Education",
    "DistanceFromHome",
    "JobLevel",
    "MonthlyIncome",
    "NumCompaniesWorked",
    "TotalWorkingYears",
    "StockOptionLevel",
    "EnvironmentSatisfaction",
    "JobInvolvement",
    "JobSatisfaction",
    "RelationshipSatisfaction",
    "WorkLifeBalance",
    "PerformanceRating",
    "PercentSalaryHike",
    "TrainingTimesLastYear",
    "YearsAtCompany",
    "YearsInCurrentRole",
    "YearsSinceLastPromotion",
    "YearsWithCurrManager",
];

/// Categorical record fields, one-hot encoded during alignment.
pub const CATEGORICAL_FIELDS: [&str; 7] = [
    "Gender",
    "MaritalStatus",
    "EducationField",
    "Department",
    "JobRole",
    "BusinessTravel",
    "OverTime",
];

/// One employee profile, as captured by the input layer.
///
/// Field names on the wire are the `PascalCase` column names the models were
/// trained against (`Age`, `MaritalStatus`, `OverTime`, ...). Every field is
/// required: an incomplete record fails at deserialization and never reaches
/// the pipeline.
///
/// Categorical fields are free-form strings on purpose. A value outside the
/// bundle's option set is legal input; it simply contributes no signal after
/// alignment (see `features::align`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase", deny_unknown_fields)]
pub struct EmployeeRecord {
    pub age: u32,
    pub gender: String,
    pub marital_status: String,
    pub education: u32,
    pub education_field: String,
    pub distance_from_home: u32,
    pub department: String,
    pub job_role: String,
    pub job_level: u32,
    pub monthly_income: u32,
    pub business_travel: String,
    pub over_time: String,
    pub num_companies_worked: u32,
    pub total_working_years: u32,
    pub stock_option_level: u32,
    pub environment_satisfaction: u32,
    pub job_involvement: u32,
    pub job_satisfaction: u32,
    pub relationship_satisfaction: u32,
    pub work_life_balance: u32,
    pub performance_rating: u32,
    pub percent_salary_hike: u32,
    pub training_times_last_year: u32,
    pub years_at_company: u32,
    pub years_in_current_role: u32,
    pub years_since_last_promotion: u32,
    pub years_with_curr_manager: u32,
}

impl EmployeeRecord {
    /// Numeric columns under their trained names, in a fixed order.
    ///
    /// `PerformanceRating` is numeric here (domain {3,4}) because the models
    /// were trained on it as an integer column, not as indicator columns.
    pub fn numeric_columns(&self) -> [(&'static str, f64); 20] {
        [
            ("Age", f64::from(self.age)),
            ("Education", f64::from(self.education)),
            ("DistanceFromHome", f64::from(self.distance_from_home)),
            ("JobLevel", f64::from(self.job_level)),
            ("MonthlyIncome", f64::from(self.monthly_income)),
            ("NumCompaniesWorked", f64::from(self.num_companies_worked)),
            ("TotalWorkingYears", f64::from(self.total_working_years)),
            ("StockOptionLevel", f64::from(self.stock_option_level)),
            ("EnvironmentSatisfaction", f64::from(self.environment_satisfaction)),
            ("JobInvolvement", f64::from(self.job_involvement)),
            ("JobSatisfaction", f64::from(self.job_satisfaction)),
            ("RelationshipSatisfaction", f64::from(self.relationship_satisfaction)),
            ("WorkLifeBalance", f64::from(self.work_life_balance)),
            ("PerformanceRating", f64::from(self.performance_rating)),
            ("PercentSalaryHike", f64::from(self.percent_salary_hike)),
            ("TrainingTimesLastYear", f64::from(self.training_times_last_year)),
            ("YearsAtCompany", f64::from(self.years_at_company)),
            ("YearsInCurrentRole", f64::from(self.years_in_current_role)),
            ("YearsSinceLastPromotion", f64::from(self.years_since_last_promotion)),
            ("YearsWithCurrManager", f64::from(self.years_with_curr_manager)),
        ]
    }

    /// Categorical columns under their trained names, in a fixed order.
    pub fn categorical_columns(&self) -> [(&'static str, &str); 7] {
        [
            ("Gender", self.gender.as_str()),
            ("MaritalStatus", self.marital_status.as_str()),
            ("EducationField", self.education_field.as_str()),
            ("Department", self.department.as_str()),
            ("JobRole", self.job_role.as_str()),
            ("BusinessTravel", self.business_travel.as_str()),
            ("OverTime", self.over_time.as_str()),
        ]
    }

    /// Check every numeric field against its declared inclusive domain.
    ///
    /// Categorical values are *not* checked here: an unseen category is an
    /// accepted approximation, not a validation failure.
    pub fn validate(&self) -> Result<(), AppError> {
        for (name, value, min, max) in self.numeric_domains() {
            if value < min || value > max {
                return Err(AppError::validation(format!(
                    "{name} = {value} is outside the legal range [{min}, {max}]."
                )));
            }
        }
        Ok(())
    }

    fn numeric_domains(&self) -> [(&'static str, u32, u32, u32); 20] {
        [
            ("Age", self.age, 18, 60),
            ("Education", self.education, 1, 5),
            ("DistanceFromHome", self.distance_from_home, 1, 30),
            ("JobLevel", self.job_level, 1, 5),
            ("MonthlyIncome", self.monthly_income, 1000, 20000),
            ("NumCompaniesWorked", self.num_companies_worked, 0, 9),
            ("TotalWorkingYears", self.total_working_years, 0, 40),
            ("StockOptionLevel", self.stock_option_level, 0, 3),
            ("EnvironmentSatisfaction", self.environment_satisfaction, 1, 4),
            ("JobInvolvement", self.job_involvement, 1, 4),
            ("JobSatisfaction", self.job_satisfaction, 1, 4),
            ("RelationshipSatisfaction", self.relationship_satisfaction, 1, 4),
            ("WorkLifeBalance", self.work_life_balance, 1, 4),
            ("PerformanceRating", self.performance_rating, 3, 4),
            ("PercentSalaryHike", self.percent_salary_hike, 0, 25),
            ("TrainingTimesLastYear", self.training_times_last_year, 0, 6),
            ("YearsAtCompany", self.years_at_company, 0, 40),
            ("YearsInCurrentRole", self.years_in_current_role, 0, 20),
            ("YearsSinceLastPromotion", self.years_since_last_promotion, 0, 15),
            ("YearsWithCurrManager", self.years_with_curr_manager, 0, 20),
        ]
    }
}

/// Recommended HR strategy, derived per request (never stored).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Recommendation {
    CriticalAssetIntervention,
    StrategicRetention,
    OperationalMonitoring,
    StableAndGrowing,
}

impl Recommendation {
    /// Human-readable label for terminal output.
    pub fn display_name(self) -> &'static str {
        match self {
            Recommendation::CriticalAssetIntervention => "CRITICAL ASSET INTERVENTION",
            Recommendation::StrategicRetention => "STRATEGIC RETENTION",
            Recommendation::OperationalMonitoring => "OPERATIONAL MONITORING",
            Recommendation::StableAndGrowing => "STABLE & GROWING",
        }
    }

    /// Advisory copy shown alongside the recommendation.
    pub fn advice(self) -> &'static str {
        match self {
            Recommendation::CriticalAssetIntervention => {
                "High-value employee at high risk. Recommend immediate retention bonus, \
                 stock options, and a career roadmap discussion."
            }
            Recommendation::StrategicRetention => {
                "Above-average value with high risk. Schedule a 'Stay Interview' and \
                 review project alignment."
            }
            Recommendation::OperationalMonitoring => {
                "High risk of leaving. Review role fit and provide standard engagement \
                 feedback."
            }
            Recommendation::StableAndGrowing => {
                "Low risk. Continue standard performance rewards and engagement."
            }
        }
    }
}

/// Value band relative to the historical ELTV distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueCategory {
    HighValue,
    StandardValue,
}

impl ValueCategory {
    pub fn display_name(self) -> &'static str {
        match self {
            ValueCategory::HighValue => "High Value",
            ValueCategory::StandardValue => "Standard Value",
        }
    }
}

/// Full output of one analysis request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    /// Positive-class probability that the employee leaves, in [0, 1].
    pub risk_probability: f64,
    /// `risk_probability >= strategy::RISK_CUTOFF`.
    pub is_flight_risk: bool,
    /// Predicted employee lifetime value (currency units).
    pub eltv: f64,
    /// High value iff `eltv` is strictly above the 75th percentile.
    pub value_category: ValueCategory,
    pub recommendation: Recommendation,
}
