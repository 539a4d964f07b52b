use {
    crate::{
        errors::{PlanError, PlanResult},
        models::Coefficients,
    },
    serde::{Deserialize, Serialize},
    statrs::distribution::{ContinuousCDF, StudentsT},
    strum_macros::{Display, EnumIter},
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Side of the confidence interval used to bracket an investment.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, PartialOrd, Ord,
)]
pub enum Scenario {
    /// Upper bounds of both coefficients: more conversions per dollar.
    #[strum(to_string = "Optimistic")]
    Optimistic,
    /// Lower bounds of both coefficients.
    #[strum(to_string = "Pessimistic")]
    Pessimistic,
}

/// Standard errors of the two OLS estimates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StdErrors {
    pub intercept: f64,
    pub slope: f64,
}

/// Coefficient pairs at the two ends of a `(1 - alpha)` interval.
/// Bounds are paired side-for-side (upper with upper, lower with lower).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConfidenceInterval {
    pub alpha: f64,
    pub t_critical: f64,
    pub optimistic: Coefficients,
    pub pessimistic: Coefficients,
}

impl ConfidenceInterval {
    pub fn get(&self, scenario: Scenario) -> Coefficients {
        match scenario {
            Scenario::Optimistic => self.optimistic,
            Scenario::Pessimistic => self.pessimistic,
        }
    }
}

/// Diagnostics worth showing next to a fit.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FitSummary {
    pub coefficients: Coefficients,
    pub n_obs: usize,
    pub df_resid: usize,
    pub std_errors: Option<StdErrors>,
    pub residual_variance: Option<f64>,
    pub r_squared: Option<f64>,
}

/// Result of fitting the square-root model to one product/platform.
///
/// Holds the sufficient statistics of the regression, not the observations, so
/// intervals can be recomputed at any `alpha` without refitting.
#[derive(Debug, Clone, PartialEq)]
pub struct FittedModel {
    coefficients: Coefficients,
    n_obs: usize,
    /// Mean of sqrt(investment) over the rows used.
    x_mean: f64,
    /// Sum of squared deviations of sqrt(investment).
    sxx: f64,
    /// Residual sum of squares.
    sse: f64,
    /// Centered total sum of squares of conversions.
    sst: f64,
}

impl FittedModel {
    pub(crate) fn new(
        coefficients: Coefficients,
        n_obs: usize,
        x_mean: f64,
        sxx: f64,
        sse: f64,
        sst: f64,
    ) -> Self {
        Self {
            coefficients,
            n_obs,
            x_mean,
            sxx,
            sse,
            sst,
        }
    }

    pub fn coefficients(&self) -> Coefficients {
        self.coefficients
    }

    pub fn n_obs(&self) -> usize {
        self.n_obs
    }

    /// Residual degrees of freedom (two parameters estimated).
    pub fn df_resid(&self) -> usize {
        self.n_obs.saturating_sub(2)
    }

    /// None when conversions never vary (R² is undefined).
    pub fn r_squared(&self) -> Option<f64> {
        if self.sst > 0.0 {
            Some(1.0 - self.sse / self.sst)
        } else {
            None
        }
    }

    pub fn residual_variance(&self) -> PlanResult<f64> {
        let df = self.df_resid();
        if df == 0 {
            return Err(PlanError::InsufficientData {
                usable_rows: self.n_obs,
                reason: "no residual degrees of freedom, need at least 3 rows for an interval"
                    .to_string(),
            });
        }
        Ok(self.sse / df as f64)
    }

    pub fn std_errors(&self) -> PlanResult<StdErrors> {
        let sigma2 = self.residual_variance()?;
        let n = self.n_obs as f64;
        Ok(StdErrors {
            intercept: (sigma2 * (1.0 / n + self.x_mean * self.x_mean / self.sxx)).sqrt(),
            slope: (sigma2 / self.sxx).sqrt(),
        })
    }

    /// Student-t interval at significance `alpha` (0.05 gives 95%).
    pub fn confidence_interval(&self, alpha: f64) -> PlanResult<ConfidenceInterval> {
        if !(alpha > 0.0 && alpha < 1.0) {
            return Err(PlanError::InvalidArgument(format!(
                "alpha must lie in (0, 1) (got {})",
                alpha
            )));
        }

        let se = self.std_errors()?;
        let t_dist = StudentsT::new(0.0, 1.0, self.df_resid() as f64)
            .map_err(|e| PlanError::InvalidArgument(e.to_string()))?;
        let t_critical = t_dist.inverse_cdf(1.0 - alpha / 2.0);

        let c = self.coefficients;
        let interval = ConfidenceInterval {
            alpha,
            t_critical,
            optimistic: Coefficients::new(
                c.intercept + t_critical * se.intercept,
                c.slope + t_critical * se.slope,
            ),
            pessimistic: Coefficients::new(
                c.intercept - t_critical * se.intercept,
                c.slope - t_critical * se.slope,
            ),
        };

        #[cfg(debug_assertions)]
        if DF.log_confidence_interval {
            log::info!(
                "confidence_interval(): alpha {} t {:.4} optimistic {:?} pessimistic {:?}",
                alpha,
                t_critical,
                interval.optimistic,
                interval.pessimistic
            );
        }

        Ok(interval)
    }

    pub fn summary(&self) -> FitSummary {
        FitSummary {
            coefficients: self.coefficients,
            n_obs: self.n_obs,
            df_resid: self.df_resid(),
            std_errors: self.std_errors().ok(),
            residual_variance: self.residual_variance().ok(),
            r_squared: self.r_squared(),
        }
    }
}
