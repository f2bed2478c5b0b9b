//! Seeded synthetic employee record generation.
//!
//! Useful for smoke-testing a bundle end to end and for demos: every field
//! is drawn from its declared domain, and categorical values come from the
//! bundle's own option sets, so generated records exercise exactly the
//! vocabulary the models were trained on.
//!
//! Generation is deterministic per seed.

use rand::prelude::*;
use rand::rngs::StdRng;
use rand_distr::Normal;

use crate::domain::EmployeeRecord;
use crate::error::AppError;
use crate::io::bundle::CategoricalOptions;

/// Rough center/spread of the monthly income distribution. Draws are
/// clamped to the legal [1000, 20000] domain.
const INCOME_MEAN: f64 = 6_500.0;
const INCOME_STDDEV: f64 = 3_500.0;

/// Generate `count` random valid records from the bundle's option sets.
pub fn generate_records(
    options: &CategoricalOptions,
    seed: u64,
    count: usize,
) -> Result<Vec<EmployeeRecord>, AppError> {
    if count == 0 {
        return Err(AppError::validation("Sample count must be > 0."));
    }

    let mut rng = StdRng::seed_from_u64(seed);
    let income_dist = Normal::new(INCOME_MEAN, INCOME_STDDEV)
        .map_err(|e| AppError::internal(format!("Income distribution error: {e}")))?;

    let mut records = Vec::with_capacity(count);
    for _ in 0..count {
        records.push(generate_one(options, &mut rng, income_dist)?);
    }
    Ok(records)
}

fn generate_one(
    options: &CategoricalOptions,
    rng: &mut StdRng,
    income_dist: Normal<f64>,
) -> Result<EmployeeRecord, AppError> {
    let total_working_years = rng.gen_range(0..=40);
    let years_at_company = rng.gen_range(0..=total_working_years.min(40));
    let income = income_dist.sample(rng).clamp(1000.0, 20000.0).round() as u32;

    Ok(EmployeeRecord {
        age: rng.gen_range(18..=60),
        gender: pick(options, "Gender", rng)?,
        marital_status: pick(options, "MaritalStatus", rng)?,
        education: rng.gen_range(1..=5),
        education_field: pick(options, "EducationField", rng)?,
        distance_from_home: rng.gen_range(1..=30),
        department: pick(options, "Department", rng)?,
        job_role: pick(options, "JobRole", rng)?,
        job_level: rng.gen_range(1..=5),
        monthly_income: income,
        business_travel: pick(options, "BusinessTravel", rng)?,
        over_time: pick(options, "OverTime", rng)?,
        num_companies_worked: rng.gen_range(0..=9),
        total_working_years,
        stock_option_level: rng.gen_range(0..=3),
        environment_satisfaction: rng.gen_range(1..=4),
        job_involvement: rng.gen_range(1..=4),
        job_satisfaction: rng.gen_range(1..=4),
        relationship_satisfaction: rng.gen_range(1..=4),
        work_life_balance: rng.gen_range(1..=4),
        performance_rating: rng.gen_range(3..=4),
        percent_salary_hike: rng.gen_range(0..=25),
        training_times_last_year: rng.gen_range(0..=6),
        years_at_company,
        years_in_current_role: rng.gen_range(0..=years_at_company.min(20)),
        years_since_last_promotion: rng.gen_range(0..=years_at_company.min(15)),
        years_with_curr_manager: rng.gen_range(0..=years_at_company.min(20)),
    })
}

fn pick(options: &CategoricalOptions, field: &str, rng: &mut StdRng) -> Result<String, AppError> {
    options
        .get(field)
        .and_then(|values| values.choose(rng))
        .cloned()
        .ok_or_else(|| AppError::internal(format!("No options available for field '{field}'.")))
}

/// A fixed, fully valid record for tests across the crate.
#[cfg(test)]
pub fn test_record() -> EmployeeRecord {
    EmployeeRecord {
        age: 30,
        gender: "Male".to_string(),
        marital_status: "Single".to_string(),
        education: 3,
        education_field: "Life Sciences".to_string(),
        distance_from_home: 5,
        department: "Research & Development".to_string(),
        job_role: "Research Scientist".to_string(),
        job_level: 2,
        monthly_income: 5000,
        business_travel: "Travel_Rarely".to_string(),
        over_time: "No".to_string(),
        num_companies_worked: 1,
        total_working_years: 10,
        stock_option_level: 0,
        environment_satisfaction: 3,
        job_involvement: 3,
        job_satisfaction: 3,
        relationship_satisfaction: 3,
        work_life_balance: 3,
        performance_rating: 3,
        percent_salary_hike: 12,
        training_times_last_year: 2,
        years_at_company: 5,
        years_in_current_role: 2,
        years_since_last_promotion: 1,
        years_with_curr_manager: 2,
    }
}
