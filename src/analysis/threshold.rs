use crate::{
    config::PLANNING,
    errors::{PlanError, PlanResult},
    models::{MarginalCost, ThresholdOutcome, ThresholdRow, ThresholdWarning},
    utils::{get_min_max, round_to},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Finds where the marginal cost of conversions meets a conversion value.
///
/// The closest record is the first one with the smallest `|marginal_cost - target|`.
/// The scan is linear and does not rely on the sequence being monotonic.
/// Every marginal cost must be finite.
pub fn locate_threshold(sequence: &[MarginalCost], target: f64) -> PlanResult<ThresholdOutcome> {
    if !target.is_finite() {
        return Err(PlanError::InvalidArgument(format!(
            "threshold value must be finite (got {})",
            target
        )));
    }

    let costs: Vec<f64> = sequence.iter().map(|r| r.marginal_cost).collect();
    if let Some(bad) = costs.iter().position(|c| !c.is_finite()) {
        return Err(PlanError::InvalidArgument(format!(
            "marginal cost at step {} is not finite ({})",
            bad, costs[bad]
        )));
    }
    let Some((min_cost, max_cost)) = get_min_max(&costs) else {
        return Err(PlanError::InvalidArgument(
            "marginal-cost sequence is empty".to_string(),
        ));
    };

    let warning = if target < min_cost {
        Some(ThresholdWarning::BelowMinimum {
            threshold: target,
            minimum: round_to(min_cost, PLANNING.warning_decimals),
        })
    } else if target > max_cost {
        Some(ThresholdWarning::AboveMaximum {
            threshold: target,
            maximum: round_to(max_cost, PLANNING.warning_decimals),
        })
    } else {
        None
    };

    let mut closest_index = 0;
    let mut closest_diff = f64::INFINITY;
    for (i, cost) in costs.iter().enumerate() {
        let diff = (cost - target).abs();
        // strict: ties keep the earlier record
        if diff < closest_diff {
            closest_diff = diff;
            closest_index = i;
        }
    }

    let annotated = sequence
        .iter()
        .map(|&record| ThresholdRow {
            record,
            threshold: target,
        })
        .collect();

    #[cfg(debug_assertions)]
    if DF.log_threshold {
        log::info!(
            "locate_threshold(): target {} closest index {} (cpc {:.4}) warning {:?}",
            target,
            closest_index,
            costs[closest_index],
            warning
        );
    }

    Ok(ThresholdOutcome {
        annotated,
        closest_index,
        closest: sequence[closest_index],
        warning,
    })
}
