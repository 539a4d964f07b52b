use {
    crate::config::PLANNING,
    serde::{Deserialize, Serialize},
    strum_macros::{Display, EnumIter},
};

/// Unit a caller expresses conversion targets in.
/// The model itself is daily; monthly figures use a fixed 30-day month.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, Default,
)]
pub enum GoalPeriod {
    #[default]
    #[strum(to_string = "daily")]
    Daily,
    #[strum(to_string = "monthly")]
    Monthly,
}

impl GoalPeriod {
    pub fn from_monthly_flag(monthly: bool) -> Self {
        if monthly { Self::Monthly } else { Self::Daily }
    }

    /// Converts a quantity in this period's unit into a daily quantity.
    pub fn to_daily(self, value: f64) -> f64 {
        match self {
            Self::Daily => value,
            Self::Monthly => value / PLANNING.days_per_month,
        }
    }
}

/// Scales a daily amount to the fixed 30-day month.
#[inline]
pub fn daily_to_monthly(daily: f64) -> f64 {
    daily * PLANNING.days_per_month
}
