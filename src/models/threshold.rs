use {
    crate::models::MarginalCost,
    serde::{Deserialize, Serialize},
    std::fmt,
};

/// A sequence record paired with the conversion value it is compared against.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ThresholdRow {
    pub record: MarginalCost,
    pub threshold: f64,
}

/// Raised when the conversion value lies outside the sequence's marginal costs,
/// i.e. no profitable crossing exists within the walked range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ThresholdWarning {
    /// `minimum` is rounded for display.
    BelowMinimum { threshold: f64, minimum: f64 },
    /// `maximum` is rounded for display.
    AboveMaximum { threshold: f64, maximum: f64 },
}

impl fmt::Display for ThresholdWarning {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            ThresholdWarning::BelowMinimum { threshold, minimum } => write!(
                f,
                "WARNING: Chosen threshold value {} is lower than CPC minimum {}.",
                threshold, minimum
            ),
            ThresholdWarning::AboveMaximum { threshold, maximum } => write!(
                f,
                "WARNING: Chosen threshold value {} is higher than CPC maximum {}.",
                threshold, maximum
            ),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ThresholdOutcome {
    pub annotated: Vec<ThresholdRow>,
    /// Position of `closest` in the sequence.
    pub closest_index: usize,
    pub closest: MarginalCost,
    pub warning: Option<ThresholdWarning>,
}
