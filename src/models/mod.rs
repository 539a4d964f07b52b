mod coefficients;
mod costs;
mod fitted_model;
mod threshold;

pub use {
    coefficients::{Coefficients, InversionPolicy},
    costs::{GoalCost, InvestmentRange, MarginalCost, ScenarioCost},
    fitted_model::{ConfidenceInterval, FitSummary, FittedModel, Scenario, StdErrors},
    threshold::{ThresholdOutcome, ThresholdRow, ThresholdWarning},
};
