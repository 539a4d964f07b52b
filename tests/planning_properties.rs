//! Property tests for the inversion, the marginal-cost walk, the threshold
//! locator and the investment range.

use conversion_planner::{
    ChannelKey, Coefficients, GoalPeriod, InversionPolicy, PlanError,
    analysis::{
        goal_cost, incremental_cost, locate_threshold, marginal_cost_sequence, range_from_interval,
    },
    models::{ConfidenceInterval, ThresholdWarning},
    utils::round_to,
};
use proptest::prelude::*;
use proptest::test_runner::Config as ProptestConfig;

const REL_TOL: f64 = 1e-9;

fn relative_close(actual: f64, expected: f64) -> bool {
    (actual - expected).abs() <= REL_TOL * (1.0 + expected.abs())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(512))]

    #[test]
    fn inversion_round_trips_through_the_forward_model(
        intercept in -50.0f64..50.0,
        slope in 0.01f64..5.0,
        above_floor in 0.1f64..500.0,
    ) {
        let c = Coefficients::new(intercept, slope);
        let goal = intercept.max(0.0) + above_floor;
        let cost = goal_cost(&c, goal, GoalPeriod::Daily).unwrap();

        prop_assert!(cost.daily_cost >= 0.0);
        prop_assert!(relative_close(c.conversions_at(cost.daily_cost), goal));
        prop_assert!(relative_close(cost.monthly_cost, cost.daily_cost * 30.0));
    }

    #[test]
    fn zero_intercept_goal_cost_agrees_with_incremental_from_zero(
        slope in 0.01f64..5.0,
        goal in 0.1f64..500.0,
    ) {
        let c = Coefficients::new(0.0, slope);
        let cost = goal_cost(&c, goal, GoalPeriod::Daily).unwrap();
        let mc = incremental_cost(&c, 0.0, goal, GoalPeriod::Daily).unwrap();

        prop_assert_eq!(mc.daily_cost_new, cost.daily_cost);
        prop_assert!(relative_close(mc.marginal_cost * goal, cost.daily_cost));
    }

    #[test]
    fn sequence_positions_follow_the_step_grid(
        intercept in -20.0f64..5.0,
        slope in 0.05f64..3.0,
        base in 5.0f64..200.0,
        steps in 1usize..200,
        step_size in 0.1f64..10.0,
    ) {
        let c = Coefficients::new(intercept, slope);
        let seq = marginal_cost_sequence(&c, base, steps, step_size, GoalPeriod::Daily).unwrap();

        prop_assert_eq!(seq.len(), steps);
        for (i, record) in seq.iter().enumerate() {
            prop_assert_eq!(record.daily_base, base + i as f64 * step_size);
            prop_assert_eq!(record.daily_new, record.daily_base + step_size);
        }
        // convex cost curve: marginal cost is non-decreasing
        for pair in seq.windows(2) {
            prop_assert!(pair[1].marginal_cost >= pair[0].marginal_cost - 1e-9);
        }
    }

    #[test]
    fn threshold_warns_exactly_outside_the_observed_range(
        slope in 0.05f64..3.0,
        base in 1.0f64..100.0,
        steps in 2usize..100,
        position in 0.0f64..1.0,
        outside in 0.01f64..100.0,
    ) {
        let c = Coefficients::new(0.0, slope);
        let seq = marginal_cost_sequence(&c, base, steps, 1.0, GoalPeriod::Daily).unwrap();
        let min = seq.iter().map(|r| r.marginal_cost).fold(f64::INFINITY, f64::min);
        let max = seq.iter().map(|r| r.marginal_cost).fold(f64::NEG_INFINITY, f64::max);

        let inside = (min + position * (max - min)).clamp(min, max);
        prop_assert!(locate_threshold(&seq, inside).unwrap().warning.is_none());

        let below = locate_threshold(&seq, min - outside).unwrap();
        prop_assert_eq!(below.closest_index, 0);
        match below.warning {
            Some(ThresholdWarning::BelowMinimum { minimum, .. }) => {
                prop_assert_eq!(minimum, round_to(min, 2));
            }
            other => prop_assert!(false, "expected BelowMinimum, got {:?}", other),
        }

        let above = locate_threshold(&seq, max + outside).unwrap();
        prop_assert_eq!(above.closest_index, steps - 1);
        match above.warning {
            Some(ThresholdWarning::AboveMaximum { maximum, .. }) => {
                prop_assert_eq!(maximum, round_to(max, 2));
            }
            other => prop_assert!(false, "expected AboveMaximum, got {:?}", other),
        }
    }

    #[test]
    fn steeper_optimistic_bounds_never_cost_more(
        pess_intercept in -10.0f64..10.0,
        intercept_gap in 0.0f64..5.0,
        pess_slope in 0.01f64..3.0,
        slope_gap in 0.001f64..3.0,
        above_floor in 0.1f64..300.0,
        monthly in any::<bool>(),
    ) {
        let optimistic = Coefficients::new(pess_intercept + intercept_gap, pess_slope + slope_gap);
        let pessimistic = Coefficients::new(pess_intercept, pess_slope);
        let interval = ConfidenceInterval { alpha: 0.05, t_critical: 2.0, optimistic, pessimistic };

        let daily_goal = optimistic.intercept.max(0.0) + above_floor;
        let period = GoalPeriod::from_monthly_flag(monthly);
        let goal = if monthly { daily_goal * 30.0 } else { daily_goal };

        let band = range_from_interval(&interval, goal, period, InversionPolicy::Strict).unwrap();
        prop_assert!(band.optimistic.monthly_cost <= band.pessimistic.monthly_cost);
    }
}

#[test]
fn unit_curve_scenarios() {
    let unit = Coefficients::new(0.0, 1.0);

    let cost = goal_cost(&unit, 9.0, GoalPeriod::Daily).unwrap();
    assert_eq!(
        (cost.daily_cost, cost.monthly_cost, cost.cost_per_conversion),
        (81.0, 2430.0, 9.0)
    );

    let mc = incremental_cost(&unit, 9.0, 7.0, GoalPeriod::Daily).unwrap();
    assert_eq!(
        (mc.daily_base, mc.daily_new, mc.daily_cost_base, mc.daily_cost_new, mc.marginal_cost),
        (9.0, 16.0, 81.0, 256.0, 25.0)
    );
}

#[test]
fn zero_extra_conversions_raise_division_by_zero() {
    let c = Coefficients::new(1.0, 2.0);
    for period in [GoalPeriod::Daily, GoalPeriod::Monthly] {
        assert!(matches!(
            incremental_cost(&c, 10.0, 0.0, period),
            Err(PlanError::DivisionByZero(_))
        ));
    }
}

#[test]
fn key_not_found_displays_the_combination() {
    let err = PlanError::KeyNotFound(ChannelKey::new("Product3", "Platform3"));
    assert_eq!(err.to_string(), "Product3 in Platform3 does not exist");
}
