//! Planning and estimation configuration

/// Defaults for the marginal-cost walk (the profitability tool)
pub struct SequenceDefaults {
    /// How many increases to evaluate
    pub steps: usize,
    /// Daily conversions added per increase
    pub step_size: f64,
}

/// The Master Planning Configuration
pub struct PlanningConfig {
    /// Fixed month length. No calendar awareness: monthly = 30 x daily.
    pub days_per_month: f64,

    /// Significance level for the investment range (0.05 = 95% interval)
    pub default_alpha: f64,

    pub sequence: SequenceDefaults,

    /// Decimal places kept when a threshold warning reports the CPC bound
    pub warning_decimals: usize,
}

pub const PLANNING: PlanningConfig = PlanningConfig {
    days_per_month: 30.0,
    default_alpha: 0.05,

    sequence: SequenceDefaults {
        steps: 100,
        step_size: 1.0,
    },

    warning_decimals: 2,
};
