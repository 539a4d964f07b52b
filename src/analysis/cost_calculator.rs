use crate::{
    domain::{GoalPeriod, daily_to_monthly},
    errors::{PlanError, PlanResult, ensure_conversions},
    models::{Coefficients, GoalCost, InversionPolicy, MarginalCost},
};

/// What reaching `goal_conversions` costs per day and per month.
pub fn goal_cost(
    coefficients: &Coefficients,
    goal_conversions: f64,
    period: GoalPeriod,
) -> PlanResult<GoalCost> {
    goal_cost_with(coefficients, goal_conversions, period, InversionPolicy::default())
}

pub fn goal_cost_with(
    coefficients: &Coefficients,
    goal_conversions: f64,
    period: GoalPeriod,
    policy: InversionPolicy,
) -> PlanResult<GoalCost> {
    ensure_conversions("goal conversions", goal_conversions)?;

    let daily_goal = period.to_daily(goal_conversions);
    if daily_goal == 0.0 {
        return Err(PlanError::DivisionByZero(
            "cost per conversion of a zero conversions goal".to_string(),
        ));
    }

    let daily_cost = coefficients.daily_investment_for(daily_goal, policy)?;

    Ok(GoalCost {
        daily_cost,
        monthly_cost: daily_to_monthly(daily_cost),
        cost_per_conversion: daily_cost / daily_goal,
    })
}

/// Marginal cost of `extra_conversions` on top of `base_conversions`.
/// `extra` is in the same unit as `base`; both are moved to daily together.
pub fn incremental_cost(
    coefficients: &Coefficients,
    base_conversions: f64,
    extra_conversions: f64,
    period: GoalPeriod,
) -> PlanResult<MarginalCost> {
    incremental_cost_with(
        coefficients,
        base_conversions,
        extra_conversions,
        period,
        InversionPolicy::default(),
    )
}

pub fn incremental_cost_with(
    coefficients: &Coefficients,
    base_conversions: f64,
    extra_conversions: f64,
    period: GoalPeriod,
    policy: InversionPolicy,
) -> PlanResult<MarginalCost> {
    ensure_conversions("base conversions", base_conversions)?;
    ensure_conversions("extra conversions", extra_conversions)?;

    let new_conversions = base_conversions + extra_conversions;
    let daily_base = period.to_daily(base_conversions);
    let daily_new = period.to_daily(new_conversions);

    marginal_cost_between(coefficients, daily_base, daily_new, policy)
}

/// Shared by the incremental tool and the sequence walk. Inputs are daily.
pub(crate) fn marginal_cost_between(
    coefficients: &Coefficients,
    daily_base: f64,
    daily_new: f64,
    policy: InversionPolicy,
) -> PlanResult<MarginalCost> {
    let conversions_change = daily_new - daily_base;
    if conversions_change == 0.0 {
        return Err(PlanError::DivisionByZero(
            "marginal cost of zero extra conversions".to_string(),
        ));
    }

    let daily_cost_base = coefficients.daily_investment_for(daily_base, policy)?;
    let daily_cost_new = coefficients.daily_investment_for(daily_new, policy)?;

    let marginal_cost = (daily_cost_new - daily_cost_base) / conversions_change;
    if !marginal_cost.is_finite() {
        return Err(PlanError::InvalidArgument(format!(
            "marginal cost between {} and {} daily conversions overflows",
            daily_base, daily_new
        )));
    }

    Ok(MarginalCost {
        daily_base,
        daily_new,
        daily_cost_base,
        daily_cost_new,
        marginal_cost,
    })
}
