use {
    crate::models::Scenario,
    serde::{Deserialize, Serialize},
};

/// Cost of reaching a conversions goal.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GoalCost {
    pub daily_cost: f64,
    pub monthly_cost: f64,
    /// Average cost of each daily conversion in the goal.
    pub cost_per_conversion: f64,
}

/// Marginal cost of moving from one daily conversion level to a higher one.
/// Also the record type of a marginal-cost sequence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MarginalCost {
    pub daily_base: f64,
    pub daily_new: f64,
    pub daily_cost_base: f64,
    pub daily_cost_new: f64,
    /// Extra daily cost per extra daily conversion ("actual CPC").
    pub marginal_cost: f64,
}

/// Daily and monthly investment for one side of the interval.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScenarioCost {
    pub daily_cost: f64,
    pub monthly_cost: f64,
}

/// Investment band for a goal under coefficient uncertainty.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InvestmentRange {
    pub optimistic: ScenarioCost,
    pub pessimistic: ScenarioCost,
}

impl InvestmentRange {
    pub fn get(&self, scenario: Scenario) -> ScenarioCost {
        match scenario {
            Scenario::Optimistic => self.optimistic,
            Scenario::Pessimistic => self.pessimistic,
        }
    }
}
