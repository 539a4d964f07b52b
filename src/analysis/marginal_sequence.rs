use crate::{
    analysis::cost_calculator::marginal_cost_between,
    domain::GoalPeriod,
    errors::{PlanError, PlanResult, ensure_conversions},
    models::{Coefficients, InversionPolicy, MarginalCost},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Walks the baseline upward in `step_size` increments and records the marginal cost
/// of each step. Record `i` covers `base + i * step_size` to `base + (i + 1) * step_size`,
/// all in daily units.
pub fn marginal_cost_sequence(
    coefficients: &Coefficients,
    base_conversions: f64,
    steps: usize,
    step_size: f64,
    period: GoalPeriod,
) -> PlanResult<Vec<MarginalCost>> {
    marginal_cost_sequence_with(
        coefficients,
        base_conversions,
        steps,
        step_size,
        period,
        InversionPolicy::default(),
    )
}

pub fn marginal_cost_sequence_with(
    coefficients: &Coefficients,
    base_conversions: f64,
    steps: usize,
    step_size: f64,
    period: GoalPeriod,
    policy: InversionPolicy,
) -> PlanResult<Vec<MarginalCost>> {
    if steps < 1 {
        return Err(PlanError::InvalidArgument(
            "steps must be at least 1".to_string(),
        ));
    }
    if !step_size.is_finite() || step_size <= 0.0 {
        return Err(PlanError::InvalidArgument(format!(
            "step size must be positive (got {})",
            step_size
        )));
    }
    ensure_conversions("base conversions", base_conversions)?;

    // Only conversion point; the walk itself is daily.
    let daily_start = period.to_daily(base_conversions);

    let sequence = (0..steps)
        .map(|i| {
            let daily_base = daily_start + i as f64 * step_size;
            let daily_new = daily_base + step_size;
            marginal_cost_between(coefficients, daily_base, daily_new, policy)
        })
        .collect::<PlanResult<Vec<_>>>()?;

    #[cfg(debug_assertions)]
    if DF.log_sequence {
        log::info!(
            "marginal_cost_sequence(): {} steps of {} from {:.2}/day, cpc {:.2} -> {:.2}",
            steps,
            step_size,
            daily_start,
            sequence.first().map(|r| r.marginal_cost).unwrap_or_default(),
            sequence.last().map(|r| r.marginal_cost).unwrap_or_default()
        );
    }

    Ok(sequence)
}

#[cfg(test)]
mod tests {
    use super::*;

    const UNIT: Coefficients = Coefficients::new(0.0, 1.0);

    #[test]
    fn produces_exactly_steps_records_in_order() {
        let seq = marginal_cost_sequence(&UNIT, 0.0, 5, 1.0, GoalPeriod::Daily).unwrap();
        assert_eq!(seq.len(), 5);
        for (i, record) in seq.iter().enumerate() {
            assert_eq!(record.daily_base, i as f64);
            assert_eq!(record.daily_new, i as f64 + 1.0);
            // ((i + 1)^2 - i^2) / 1 = 2i + 1
            assert_eq!(record.marginal_cost, 2.0 * i as f64 + 1.0);
        }
    }

    #[test]
    fn monthly_base_is_converted_once() {
        // 300 a month = 10 a day, then steps of 2 daily conversions
        let seq = marginal_cost_sequence(&UNIT, 300.0, 3, 2.0, GoalPeriod::Monthly).unwrap();
        let bases: Vec<f64> = seq.iter().map(|r| r.daily_base).collect();
        let news: Vec<f64> = seq.iter().map(|r| r.daily_new).collect();
        assert_eq!(bases, vec![10.0, 12.0, 14.0]);
        assert_eq!(news, vec![12.0, 14.0, 16.0]);
    }

    #[test]
    fn first_record_matches_incremental_tool() {
        let c = Coefficients::new(0.8, 0.25);
        let seq = marginal_cost_sequence(&c, 4.0, 10, 0.5, GoalPeriod::Daily).unwrap();
        let single =
            crate::analysis::incremental_cost(&c, 4.0, 0.5, GoalPeriod::Daily).unwrap();
        assert_eq!(seq[0], single);
    }

    #[test]
    fn rejects_zero_steps_and_non_positive_step_size() {
        assert!(matches!(
            marginal_cost_sequence(&UNIT, 0.0, 0, 1.0, GoalPeriod::Daily),
            Err(PlanError::InvalidArgument(_))
        ));
        for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
            assert!(matches!(
                marginal_cost_sequence(&UNIT, 0.0, 3, bad, GoalPeriod::Daily),
                Err(PlanError::InvalidArgument(_))
            ));
        }
    }

    #[test]
    fn walk_starting_under_the_floor_is_infeasible_when_strict() {
        let c = Coefficients::new(3.0, 1.0);
        assert!(matches!(
            marginal_cost_sequence(&c, 0.0, 10, 1.0, GoalPeriod::Daily),
            Err(PlanError::InfeasibleGoal { .. })
        ));
        let seq = marginal_cost_sequence_with(
            &c,
            0.0,
            10,
            1.0,
            GoalPeriod::Daily,
            InversionPolicy::PassThrough,
        )
        .unwrap();
        assert_eq!(seq.len(), 10);
        // mirrored parabola: cost falls until the floor at 3, then rises
        assert!(seq[0].marginal_cost < 0.0);
        assert!(seq[9].marginal_cost > 0.0);
    }

    #[test]
    fn overflowing_walk_fails_instead_of_yielding_nan() {
        let unit = Coefficients::new(0.0, 1.0);
        assert!(matches!(
            marginal_cost_sequence(&unit, 1e200, 3, 1e190, GoalPeriod::Daily),
            Err(PlanError::InvalidArgument(_))
        ));
    }
}
