//! File persistence configuration

/// Configuration for the fitted-coefficient registry
pub struct ParamsPersistenceConfig {
    /// Path of the JSON registry written by `fit` and read by every planning command
    pub path: &'static str,
}

/// Configuration for the observation dataset
pub struct DatasetPersistenceConfig {
    /// Path of the JSON dataset (investment / conversions per product and platform)
    pub path: &'static str,
}

/// The Master Persistence Configuration
pub struct PersistenceConfig {
    pub params: ParamsPersistenceConfig,
    pub dataset: DatasetPersistenceConfig,
}

pub const PERSISTENCE: PersistenceConfig = PersistenceConfig {
    params: ParamsPersistenceConfig {
        path: "params_dict.json",
    },
    dataset: DatasetPersistenceConfig {
        path: "conversions_dataset.json",
    },
};
