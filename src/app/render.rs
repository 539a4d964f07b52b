use {
    crate::{
        data::ParamsRegistry,
        models::{ConfidenceInterval, FitSummary, InvestmentRange, Scenario, ThresholdOutcome},
    },
    strum::IntoEnumIterator,
    tabled::{Table, Tabled, settings::Style},
};

fn money(val: f64) -> String {
    format!("{:.2}", val)
}

fn opt(val: Option<f64>, decimals: usize) -> String {
    match val {
        Some(v) => format!("{:.1$}", v, decimals),
        None => "n/a".to_string(),
    }
}

#[derive(Tabled)]
struct ThresholdTableRow {
    #[tabled(rename = "Step")]
    step: usize,
    #[tabled(rename = "Daily base conversions")]
    daily_base: String,
    #[tabled(rename = "Daily new conversions")]
    daily_new: String,
    #[tabled(rename = "Actual CPC")]
    actual_cpc: String,
    #[tabled(rename = "Threshold")]
    threshold: String,
    #[tabled(rename = "")]
    marker: &'static str,
}

/// The profitability walk, with the closest step marked.
pub(crate) fn threshold_table(outcome: &ThresholdOutcome) -> String {
    let rows = outcome
        .annotated
        .iter()
        .enumerate()
        .map(|(i, row)| ThresholdTableRow {
            step: i,
            daily_base: format!("{:.2}", row.record.daily_base),
            daily_new: format!("{:.2}", row.record.daily_new),
            actual_cpc: money(row.record.marginal_cost),
            threshold: money(row.threshold),
            marker: if i == outcome.closest_index { "<" } else { "" },
        });
    Table::new(rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
struct RangeTableRow {
    #[tabled(rename = "Scenario")]
    scenario: Scenario,
    #[tabled(rename = "Daily cost")]
    daily_cost: String,
    #[tabled(rename = "Monthly cost")]
    monthly_cost: String,
}

pub(crate) fn range_table(range: &InvestmentRange) -> String {
    let rows = Scenario::iter().map(|scenario| {
        let cost = range.get(scenario);
        RangeTableRow {
            scenario,
            daily_cost: money(cost.daily_cost),
            monthly_cost: money(cost.monthly_cost),
        }
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

#[derive(Tabled)]
struct CoefficientTableRow {
    #[tabled(rename = "Term")]
    term: &'static str,
    #[tabled(rename = "Estimate")]
    estimate: String,
    #[tabled(rename = "Std error")]
    std_error: String,
    #[tabled(rename = "Lower")]
    lower: String,
    #[tabled(rename = "Upper")]
    upper: String,
}

/// Coefficient table plus a one-line fit footer.
pub(crate) fn summary_table(summary: &FitSummary, interval: Option<&ConfidenceInterval>) -> String {
    let se = summary.std_errors;
    let rows = [
        CoefficientTableRow {
            term: "const",
            estimate: format!("{:.4}", summary.coefficients.intercept),
            std_error: opt(se.map(|s| s.intercept), 4),
            lower: opt(interval.map(|ci| ci.pessimistic.intercept), 4),
            upper: opt(interval.map(|ci| ci.optimistic.intercept), 4),
        },
        CoefficientTableRow {
            term: "sqrt(investment)",
            estimate: format!("{:.4}", summary.coefficients.slope),
            std_error: opt(se.map(|s| s.slope), 4),
            lower: opt(interval.map(|ci| ci.pessimistic.slope), 4),
            upper: opt(interval.map(|ci| ci.optimistic.slope), 4),
        },
    ];

    format!(
        "{}\nObservations: {}  Df residuals: {}  R-squared: {}",
        Table::new(rows).with(Style::rounded()),
        summary.n_obs,
        summary.df_resid,
        opt(summary.r_squared, 4)
    )
}

#[derive(Tabled)]
struct RegistryTableRow {
    #[tabled(rename = "Product")]
    product: String,
    #[tabled(rename = "Platform")]
    platform: String,
    #[tabled(rename = "Intercept")]
    intercept: String,
    #[tabled(rename = "Slope")]
    slope: String,
}

pub(crate) fn registry_table(registry: &ParamsRegistry) -> String {
    let rows = registry.iter().map(|(key, c)| RegistryTableRow {
        product: key.product().to_string(),
        platform: key.platform().to_string(),
        intercept: format!("{:.4}", c.intercept),
        slope: format!("{:.4}", c.slope),
    });
    Table::new(rows).with(Style::rounded()).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        ChannelKey, Coefficients,
        models::{MarginalCost, ScenarioCost, ThresholdRow},
    };

    #[test]
    fn range_table_lists_both_scenarios() {
        let range = InvestmentRange {
            optimistic: ScenarioCost {
                daily_cost: 10.0,
                monthly_cost: 300.0,
            },
            pessimistic: ScenarioCost {
                daily_cost: 20.0,
                monthly_cost: 600.0,
            },
        };
        let table = range_table(&range);
        assert!(table.contains("Optimistic"));
        assert!(table.contains("Pessimistic"));
        assert!(table.contains("600.00"));
    }

    #[test]
    fn threshold_table_marks_closest_step() {
        let record = MarginalCost {
            daily_base: 1.0,
            daily_new: 2.0,
            daily_cost_base: 1.0,
            daily_cost_new: 4.0,
            marginal_cost: 3.0,
        };
        let outcome = ThresholdOutcome {
            annotated: vec![ThresholdRow {
                record,
                threshold: 3.0,
            }],
            closest_index: 0,
            closest: record,
            warning: None,
        };
        let table = threshold_table(&outcome);
        assert!(table.contains("Actual CPC"));
        assert!(table.contains('<'));
    }

    #[test]
    fn registry_table_has_one_row_per_entry() {
        let registry: ParamsRegistry = [
            (ChannelKey::new("Product1", "Platform1"), Coefficients::new(1.0, 0.5)),
            (ChannelKey::new("Product2", "Platform3"), Coefficients::new(0.2, 0.1)),
        ]
        .into_iter()
        .collect();
        let table = registry_table(&registry);
        assert!(table.contains("Product2"));
        assert!(table.contains("0.5000"));
    }
}
