use {
    crate::domain::ChannelKey,
    std::{error::Error, fmt},
};

pub type PlanResult<T> = Result<T, PlanError>;

/// Every way a planning computation can fail.
/// The core never recovers from these; each one aborts the computation it occurred in.
#[derive(Debug, Clone, PartialEq)]
pub enum PlanError {
    /// No fitted coefficients are stored for this product/platform.
    KeyNotFound(ChannelKey),
    /// Not enough usable rows to fit (or to build an interval from) the model.
    InsufficientData { usable_rows: usize, reason: String },
    /// A ratio would divide by zero (zero goal, zero extra conversions, flat slope).
    DivisionByZero(String),
    /// Rejected scalar input (negative targets, bad step size, alpha outside (0, 1), ...).
    InvalidArgument(String),
    /// The target sits on the wrong side of the model's floor, so no investment reaches it.
    InfeasibleGoal { conversions: f64, floor: f64 },
}

impl fmt::Display for PlanError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            PlanError::KeyNotFound(key) => write!(f, "{} does not exist", key),
            PlanError::InsufficientData {
                usable_rows,
                reason,
            } => write!(
                f,
                "Insufficient data: {} usable row{} ({})",
                usable_rows,
                if *usable_rows == 1 { "" } else { "s" },
                reason
            ),
            PlanError::DivisionByZero(what) => write!(f, "Division by zero: {}", what),
            PlanError::InvalidArgument(what) => write!(f, "Invalid argument: {}", what),
            PlanError::InfeasibleGoal { conversions, floor } => write!(
                f,
                "Infeasible goal: {:.2} daily conversions is on the wrong side of the model floor {:.2}",
                conversions, floor
            ),
        }
    }
}

impl Error for PlanError {}

/// Rejects negative or non-finite conversion counts.
pub(crate) fn ensure_conversions(name: &str, value: f64) -> PlanResult<()> {
    if !value.is_finite() {
        return Err(PlanError::InvalidArgument(format!(
            "{} must be finite (got {})",
            name, value
        )));
    }
    if value < 0.0 {
        return Err(PlanError::InvalidArgument(format!(
            "{} must not be negative (got {})",
            name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_not_found_reads_like_the_app_message() {
        let err = PlanError::KeyNotFound(ChannelKey::new("Product4", "Platform2"));
        assert_eq!(err.to_string(), "Product4 in Platform2 does not exist");
    }

    #[test]
    fn insufficient_data_pluralises_rows() {
        let one = PlanError::InsufficientData {
            usable_rows: 1,
            reason: "need at least 2".to_string(),
        };
        assert_eq!(one.to_string(), "Insufficient data: 1 usable row (need at least 2)");
    }

    #[test]
    fn conversions_guard_rejects_negative_and_nan() {
        assert!(ensure_conversions("goal", 0.0).is_ok());
        assert!(matches!(
            ensure_conversions("goal", -1.0),
            Err(PlanError::InvalidArgument(_))
        ));
        assert!(matches!(
            ensure_conversions("goal", f64::NAN),
            Err(PlanError::InvalidArgument(_))
        ));
    }
}
