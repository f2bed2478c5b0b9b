//! Terminal formatting for analysis output.

use crate::domain::{AnalysisResult, EmployeeRecord, Recommendation};
use crate::io::bundle::CategoricalOptions;

/// Format the full analysis block for a single record.
pub fn format_analysis(result: &AnalysisResult) -> String {
    let mut out = String::new();

    out.push_str("=== retain - HR Retention Strategy ===\n");
    out.push_str("\nAttrition Risk Assessment\n");
    out.push_str(&format!(
        "- Flight Risk: {}\n",
        if result.is_flight_risk { "YES" } else { "NO" }
    ));
    out.push_str(&format!(
        "- Risk Probability: {}\n",
        fmt_percent(result.risk_probability)
    ));

    out.push_str("\nEconomic Value Assessment\n");
    out.push_str(&format!("- Predicted ELTV: {}\n", fmt_money(result.eltv)));
    out.push_str(&format!("- Category: {}\n", result.value_category.display_name()));

    out.push_str("\nRecommended HR Strategy\n");
    out.push_str(&format!("- {}\n", result.recommendation.display_name()));
    out.push_str(&format!("  {}\n", result.recommendation.advice()));

    out
}

/// Format a compact table plus per-strategy counts for a batch run.
pub fn format_batch(results: &[(EmployeeRecord, AnalysisResult)]) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{:<4} {:>8} {:>6} {:>14} {:<14} {:<28}\n",
        "#", "risk", "flag", "eltv", "category", "recommendation"
    ));
    out.push_str(&format!(
        "{:-<4} {:-<8} {:-<6} {:-<14} {:-<14} {:-<28}\n",
        "", "", "", "", "", ""
    ));

    for (i, (_, result)) in results.iter().enumerate() {
        out.push_str(
            format!(
                "{:<4} {:>8} {:>6} {:>14} {:<14} {:<28}\n",
                i + 1,
                fmt_percent(result.risk_probability),
                if result.is_flight_risk { "YES" } else { "NO" },
                fmt_money(result.eltv),
                result.value_category.display_name(),
                result.recommendation.display_name(),
            )
            .trim_end(),
        );
        out.push('\n');
    }

    out.push('\n');
    for kind in [
        Recommendation::CriticalAssetIntervention,
        Recommendation::StrategicRetention,
        Recommendation::OperationalMonitoring,
        Recommendation::StableAndGrowing,
    ] {
        let n = results.iter().filter(|(_, r)| r.recommendation == kind).count();
        out.push_str(&format!("{:<28} {n}\n", kind.display_name()));
    }

    out
}

/// List the categorical option sets (what a form layer would render).
pub fn format_options(options: &CategoricalOptions) -> String {
    let mut out = String::new();
    out.push_str("Categorical options:\n");
    for (field, values) in options {
        out.push_str(&format!("- {field}: {}\n", values.join(", ")));
    }
    out
}

/// Format a probability as a percentage with one decimal (`0.31` -> `31.0%`).
pub fn fmt_percent(p: f64) -> String {
    format!("{:.1}%", p * 100.0)
}

/// Format a currency amount with thousands separators (`12345.678` -> `$12,345.68`).
pub fn fmt_money(v: f64) -> String {
    let sign = if v < 0.0 { "-" } else { "" };
    let cents = (v.abs() * 100.0).round() as u64;
    let whole = cents / 100;
    let frac = cents % 100;

    let digits = whole.to_string();
    let mut grouped = String::new();
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(ch);
    }

    format!("{sign}${grouped}.{frac:02}")
}
