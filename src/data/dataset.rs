use {
    crate::{
        domain::{ChannelKey, ObservationSet},
        errors::{PlanError, PlanResult},
    },
    anyhow::{Context, Result},
    serde::{Deserialize, Serialize},
    std::{
        fs::File,
        io::{BufReader, BufWriter, Write},
        path::Path,
    },
};

#[cfg(debug_assertions)]
use crate::config::DF;

/// Daily observations for one product/platform.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct ChannelSeries {
    #[serde(flatten)]
    pub key: ChannelKey,
    pub observations: ObservationSet,
}

/// Every series the planner can fit, supplied wholesale.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ConversionsDataset {
    pub series: Vec<ChannelSeries>,
}

impl ConversionsDataset {
    /// Adds a series, replacing any existing one for the same key.
    pub fn insert(&mut self, key: ChannelKey, observations: ObservationSet) {
        match self.series.iter_mut().find(|s| s.key == key) {
            Some(existing) => existing.observations = observations,
            None => self.series.push(ChannelSeries { key, observations }),
        }
    }

    pub fn observations(&self, key: &ChannelKey) -> PlanResult<&ObservationSet> {
        self.series
            .iter()
            .find(|s| &s.key == key)
            .map(|s| &s.observations)
            .ok_or_else(|| PlanError::KeyNotFound(key.clone()))
    }
}

pub fn load_dataset(path: &Path) -> Result<ConversionsDataset> {
    let file = File::open(path)
        .with_context(|| format!("Failed to open dataset {}", path.display()))?;
    let reader = BufReader::new(file);
    let dataset: ConversionsDataset = serde_json::from_reader(reader)
        .with_context(|| format!("Failed to parse dataset {}", path.display()))?;

    #[cfg(debug_assertions)]
    if DF.log_persistence {
        log::info!(
            "DATASET: Loaded {} series from {}",
            dataset.series.len(),
            path.display()
        );
    }

    Ok(dataset)
}

pub fn save_dataset(dataset: &ConversionsDataset, path: &Path) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create dataset {}", path.display()))?;
    let mut writer = BufWriter::new(file);
    serde_json::to_writer_pretty(&mut writer, dataset)?;
    writer
        .flush()
        .with_context(|| format!("Failed to write dataset {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_flat_product_platform_entries() {
        let json = r#"{
            "series": [
                {
                    "product": "Product1",
                    "platform": "Platform2",
                    "observations": [
                        {"investment": 100.0, "conversions": 6.0},
                        {"investment": 0.0, "conversions": 0.0}
                    ]
                }
            ]
        }"#;
        let dataset: ConversionsDataset = serde_json::from_str(json).unwrap();
        let key = ChannelKey::new("Product1", "Platform2");
        let obs = dataset.observations(&key).unwrap();
        assert_eq!(obs.len(), 2);
        assert_eq!(obs.rows()[0].conversions, 6.0);
    }

    #[test]
    fn unknown_key_is_key_not_found() {
        let dataset = ConversionsDataset::default();
        let key = ChannelKey::new("Product6", "Platform3");
        assert_eq!(dataset.observations(&key), Err(PlanError::KeyNotFound(key)));
    }

    #[test]
    fn insert_replaces_existing_series() {
        let key = ChannelKey::new("P", "Q");
        let mut dataset = ConversionsDataset::default();
        dataset.insert(key.clone(), ObservationSet::from_columns(&[1.0], &[1.0]));
        dataset.insert(key.clone(), ObservationSet::from_columns(&[1.0, 4.0], &[1.0, 2.0]));
        assert_eq!(dataset.series.len(), 1);
        assert_eq!(dataset.observations(&key).unwrap().len(), 2);
    }

    #[cfg(target_os = "linux")]
    #[test]
    fn failed_final_write_is_reported() {
        let mut dataset = ConversionsDataset::default();
        dataset.insert(ChannelKey::new("P", "Q"), ObservationSet::from_columns(&[1.0], &[1.0]));
        // small enough to sit in the buffer until the flush
        assert!(save_dataset(&dataset, Path::new("/dev/full")).is_err());
    }
}
