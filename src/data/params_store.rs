use {
    crate::{
        analysis::fit_with,
        data::ConversionsDataset,
        domain::{ChannelKey, MissingPolicy},
        errors::{PlanError, PlanResult},
        models::Coefficients,
    },
    anyhow::{Context, Result},
    serde::{Deserialize, Serialize},
    std::{
        collections::BTreeMap,
        fs::File,
        io::{BufReader, BufWriter, Write},
        path::Path,
    },
};

#[cfg(debug_assertions)]
use crate::config::DF;

// --- TRAIT DEFINITION ---

/// Resolves a product/platform to the coefficients fitted for it.
pub trait ParameterStore {
    fn lookup(&self, key: &ChannelKey) -> PlanResult<Coefficients>;
}

// --- JSON-BACKED IMPLEMENTATION ---

#[derive(Serialize, Deserialize, Debug, Clone)]
struct ParamsEntry {
    #[serde(flatten)]
    key: ChannelKey,
    #[serde(flatten)]
    coefficients: Coefficients,
}

#[derive(Serialize, Deserialize, Debug, Clone, Default)]
struct ParamsFile {
    entries: Vec<ParamsEntry>,
}

/// In-memory coefficient registry, persisted as JSON.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParamsRegistry {
    entries: BTreeMap<ChannelKey, Coefficients>,
}

impl ParamsRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: ChannelKey, coefficients: Coefficients) -> Option<Coefficients> {
        self.entries.insert(key, coefficients)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&ChannelKey, &Coefficients)> {
        self.entries.iter()
    }

    /// Fits every series in the dataset. Series that cannot be fitted are returned
    /// alongside the registry instead of aborting the batch.
    pub fn fit_dataset(
        dataset: &ConversionsDataset,
        policy: MissingPolicy,
    ) -> (Self, Vec<(ChannelKey, PlanError)>) {
        let mut registry = Self::new();
        let mut failures = Vec::new();

        for series in &dataset.series {
            match fit_with(&series.observations, policy) {
                Ok(model) => {
                    registry.insert(series.key.clone(), model.coefficients());
                }
                Err(e) => {
                    log::warn!("Skipping {}: {}", series.key, e);
                    failures.push((series.key.clone(), e));
                }
            }
        }

        (registry, failures)
    }
}

impl ParameterStore for ParamsRegistry {
    fn lookup(&self, key: &ChannelKey) -> PlanResult<Coefficients> {
        self.entries
            .get(key)
            .copied()
            .ok_or_else(|| PlanError::KeyNotFound(key.clone()))
    }
}

impl FromIterator<(ChannelKey, Coefficients)> for ParamsRegistry {
    fn from_iter<I: IntoIterator<Item = (ChannelKey, Coefficients)>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().collect(),
        }
    }
}

pub fn save_params(registry: &ParamsRegistry, path: &Path) -> Result<()> {
    let file_contents = ParamsFile {
        entries: registry
            .iter()
            .map(|(key, coefficients)| ParamsEntry {
                key: key.clone(),
                coefficients: *coefficients,
            })
            .collect(),
    };

    let file = File::create(path)
        .with_context(|| format!("Failed to create params file {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, &file_contents)?;
    writer
        .flush()
        .with_context(|| format!("Failed to write params file {}", path.display()))?;

    #[cfg(debug_assertions)]
    if DF.log_persistence {
        log::info!(
            "PARAMS: Saved {} entries to {}",
            registry.len(),
            path.display()
        );
    }

    Ok(())
}

pub fn load_params(path: &Path) -> Result<ParamsRegistry> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open params file {}. Run `fit` first?", path.display()))?;
    let reader = BufReader::new(file);
    let file_contents: ParamsFile = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse params file {}", path.display()))?;

    let registry: ParamsRegistry = file_contents
        .entries
        .into_iter()
        .map(|entry| (entry.key, entry.coefficients))
        .collect();

    #[cfg(debug_assertions)]
    if DF.log_persistence {
        log::info!(
            "PARAMS: Loaded {} entries from {}",
            registry.len(),
            path.display()
        );
    }

    Ok(registry)
}
