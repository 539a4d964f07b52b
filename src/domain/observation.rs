use serde::{Deserialize, Serialize};

/// One period (day) of spend and outcome for a single product/platform.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
pub struct Observation {
    pub investment: f64,
    pub conversions: f64,
}

impl Observation {
    pub fn new(investment: f64, conversions: f64) -> Self {
        Self {
            investment,
            conversions,
        }
    }
}

/// Which rows count as "no data" and are dropped before fitting.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MissingPolicy {
    /// A day where either investment or conversions is exactly zero was not recorded.
    #[default]
    ZeroIsMissing,
    /// Every row is real data.
    KeepAll,
}

impl MissingPolicy {
    pub fn is_missing(&self, obs: &Observation) -> bool {
        match self {
            Self::ZeroIsMissing => obs.investment == 0.0 || obs.conversions == 0.0,
            Self::KeepAll => false,
        }
    }
}

/// Observations for one product/platform, in period order.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(transparent)]
pub struct ObservationSet {
    rows: Vec<Observation>,
}

impl ObservationSet {
    /// Builds a set from parallel investment / conversions columns (shortest wins).
    pub fn from_columns(investment: &[f64], conversions: &[f64]) -> Self {
        let rows = investment
            .iter()
            .zip(conversions)
            .map(|(&i, &c)| Observation::new(i, c))
            .collect();
        Self { rows }
    }

    pub fn rows(&self) -> &[Observation] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Rows that survive the missing-data policy.
    pub fn usable<'a>(&'a self, policy: MissingPolicy) -> impl Iterator<Item = &'a Observation> + 'a {
        self.rows.iter().filter(move |obs| !policy.is_missing(obs))
    }
}
