use {
    crate::{
        analysis::fitter::fit_with,
        config::PLANNING,
        domain::{GoalPeriod, MissingPolicy, ObservationSet, daily_to_monthly},
        errors::{PlanResult, ensure_conversions},
        models::{ConfidenceInterval, InversionPolicy, InvestmentRange, Scenario, ScenarioCost},
    },
    serde::{Deserialize, Serialize},
};

/// Knobs for the investment range. Defaults: 95% interval, zero-as-missing, strict inversion.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RangeOptions {
    pub alpha: f64,
    pub missing: MissingPolicy,
    pub policy: InversionPolicy,
}

impl Default for RangeOptions {
    fn default() -> Self {
        Self {
            alpha: PLANNING.default_alpha,
            missing: MissingPolicy::default(),
            policy: InversionPolicy::default(),
        }
    }
}

/// Optimistic / pessimistic investment needed to reach a goal, from a fresh fit.
pub fn investment_range(
    observations: &ObservationSet,
    goal_conversions: f64,
    period: GoalPeriod,
) -> PlanResult<InvestmentRange> {
    investment_range_with(observations, goal_conversions, period, &RangeOptions::default())
}

pub fn investment_range_with(
    observations: &ObservationSet,
    goal_conversions: f64,
    period: GoalPeriod,
    options: &RangeOptions,
) -> PlanResult<InvestmentRange> {
    ensure_conversions("goal conversions", goal_conversions)?;
    let interval = fit_with(observations, options.missing)?.confidence_interval(options.alpha)?;
    range_from_interval(&interval, goal_conversions, period, options.policy)
}

/// Pushes a goal through both ends of an interval the caller already holds.
pub fn range_from_interval(
    interval: &ConfidenceInterval,
    goal_conversions: f64,
    period: GoalPeriod,
    policy: InversionPolicy,
) -> PlanResult<InvestmentRange> {
    ensure_conversions("goal conversions", goal_conversions)?;
    let daily_goal = period.to_daily(goal_conversions);

    let cost_for = |scenario: Scenario| -> PlanResult<ScenarioCost> {
        let daily_cost = interval
            .get(scenario)
            .daily_investment_for(daily_goal, policy)?;
        Ok(ScenarioCost {
            daily_cost,
            monthly_cost: daily_to_monthly(daily_cost),
        })
    };

    Ok(InvestmentRange {
        optimistic: cost_for(Scenario::Optimistic)?,
        pessimistic: cost_for(Scenario::Pessimistic)?,
    })
}
