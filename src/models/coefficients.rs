use {
    crate::errors::{PlanError, PlanResult},
    serde::{Deserialize, Serialize},
};

/// What to do when a target sits below the floor of the square-root curve.
///
/// `((x - intercept) / slope)^2` squares away the sign of an infeasible ratio, so a
/// goal under the intercept (positive slope) would otherwise come back as a valid cost.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InversionPolicy {
    /// Reject targets the curve cannot reach with `InfeasibleGoal`.
    #[default]
    Strict,
    /// Square the ratio regardless of its sign (legacy behaviour).
    PassThrough,
}

/// Point estimate of `conversions = intercept + slope * sqrt(investment)`, daily units.
/// Free-standing once copied out of a fit: no link back to the observations.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coefficients {
    pub intercept: f64,
    pub slope: f64,
}

impl Coefficients {
    pub const fn new(intercept: f64, slope: f64) -> Self {
        Self { intercept, slope }
    }

    /// Daily conversions the model expects for a daily investment.
    pub fn conversions_at(&self, daily_investment: f64) -> f64 {
        self.intercept + self.slope * daily_investment.sqrt()
    }

    /// Daily investment needed to reach `daily_conversions`: the algebraic inverse of the model.
    pub fn daily_investment_for(
        &self,
        daily_conversions: f64,
        policy: InversionPolicy,
    ) -> PlanResult<f64> {
        if !self.intercept.is_finite() || !self.slope.is_finite() {
            return Err(PlanError::InvalidArgument(format!(
                "coefficients must be finite (intercept {}, slope {})",
                self.intercept, self.slope
            )));
        }
        if self.slope == 0.0 {
            return Err(PlanError::DivisionByZero(
                "slope is zero, investment has no effect on conversions".to_string(),
            ));
        }

        let ratio = (daily_conversions - self.intercept) / self.slope;
        if ratio < 0.0 && policy == InversionPolicy::Strict {
            return Err(PlanError::InfeasibleGoal {
                conversions: daily_conversions,
                floor: self.intercept,
            });
        }

        let investment = ratio * ratio;
        if !investment.is_finite() {
            return Err(PlanError::InvalidArgument(format!(
                "investment for {} daily conversions overflows",
                daily_conversions
            )));
        }

        Ok(investment)
    }
}
