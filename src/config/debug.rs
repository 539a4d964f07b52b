//! Debugging feature flags.

#[allow(dead_code)]
pub struct LogFlags {
    /// Emit fit diagnostics (rows kept, coefficients, R²) every time a series is fitted.
    pub log_fitting: bool,

    /// Log confidence-interval bounds and the t critical value used.
    pub log_confidence_interval: bool,

    /// Log each marginal-cost sequence as it is generated.
    pub log_sequence: bool,

    /// Log threshold matches and out-of-range warnings.
    pub log_threshold: bool,

    /// Log registry / dataset loads and saves.
    pub log_persistence: bool,
}

pub const DF: LogFlags = LogFlags {
    log_persistence: true,

    log_fitting: false,
    log_confidence_interval: false,
    log_sequence: false,
    log_threshold: false,
};
