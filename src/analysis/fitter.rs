use crate::{
    domain::{MissingPolicy, Observation, ObservationSet},
    errors::{PlanError, PlanResult},
    models::{Coefficients, FittedModel},
    utils::{mean, sum_sq_dev},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Fits `conversions = intercept + slope * sqrt(investment)` with zero-as-missing filtering.
pub fn fit(observations: &ObservationSet) -> PlanResult<FittedModel> {
    fit_with(observations, MissingPolicy::default())
}

/// Ordinary least squares on the square-root transformed investment, explicit intercept.
/// Rows the `policy` flags as missing are dropped first.
pub fn fit_with(observations: &ObservationSet, policy: MissingPolicy) -> PlanResult<FittedModel> {
    let usable: Vec<&Observation> = observations.usable(policy).collect();

    for obs in &usable {
        if !obs.investment.is_finite() || obs.investment < 0.0 {
            return Err(PlanError::InvalidArgument(format!(
                "investment must be finite and non-negative (got {})",
                obs.investment
            )));
        }
        if !obs.conversions.is_finite() {
            return Err(PlanError::InvalidArgument(format!(
                "conversions must be finite (got {})",
                obs.conversions
            )));
        }
    }

    let n = usable.len();
    if n < 2 {
        return Err(PlanError::InsufficientData {
            usable_rows: n,
            reason: "need at least 2 rows to fit a line with an intercept".to_string(),
        });
    }

    let x: Vec<f64> = usable.iter().map(|obs| obs.investment.sqrt()).collect();
    let y: Vec<f64> = usable.iter().map(|obs| obs.conversions).collect();

    if x.iter().all(|&v| v == x[0]) {
        return Err(PlanError::InsufficientData {
            usable_rows: n,
            reason: "investment never varies, the slope is not identified".to_string(),
        });
    }

    let x_mean = mean(&x);
    let y_mean = mean(&y);
    let sxx = sum_sq_dev(&x, x_mean);
    let sxy: f64 = x
        .iter()
        .zip(&y)
        .map(|(xi, yi)| (xi - x_mean) * (yi - y_mean))
        .sum();

    let slope = sxy / sxx;
    let intercept = y_mean - slope * x_mean;
    let coefficients = Coefficients::new(intercept, slope);

    let sse: f64 = x
        .iter()
        .zip(&y)
        .map(|(&xi, &yi)| {
            let resid = yi - (intercept + slope * xi);
            resid * resid
        })
        .sum();
    let sst = sum_sq_dev(&y, y_mean);

    let model = FittedModel::new(coefficients, n, x_mean, sxx, sse, sst);

    #[cfg(debug_assertions)]
    if DF.log_fitting {
        log::info!(
            "fit(): kept {} of {} rows, intercept {:.4}, slope {:.4}, r2 {:?}",
            n,
            observations.len(),
            intercept,
            slope,
            model.r_squared()
        );
    }

    Ok(model)
}
