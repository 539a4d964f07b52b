#![allow(clippy::too_many_arguments)]

// Core modules
pub mod analysis;
pub mod app;
pub mod config;
pub mod data;
pub mod domain;
pub mod errors;
pub mod models;
pub mod utils;

// Re-export commonly used types outside of crate
pub use analysis::{
    fit, goal_cost, incremental_cost, investment_range, locate_threshold, marginal_cost_sequence,
};
pub use data::{ParameterStore, ParamsRegistry};
pub use domain::{ChannelKey, GoalPeriod, MissingPolicy, Observation, ObservationSet};
pub use errors::{PlanError, PlanResult};
pub use models::{Coefficients, FittedModel, InversionPolicy};

// CLI argument parsing
use {
    crate::config::{PERSISTENCE, PLANNING},
    clap::{Args, Parser, Subcommand},
    std::path::PathBuf,
};

#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Fitted coefficient registry (JSON)
    #[arg(long, global = true, default_value = PERSISTENCE.params.path)]
    pub params: PathBuf,

    /// Investment / conversions dataset (JSON)
    #[arg(long, global = true, default_value = PERSISTENCE.dataset.path)]
    pub dataset: PathBuf,

    /// Square the inversion ratio even when a goal is below the model floor (legacy behaviour)
    #[arg(long, global = true, default_value_t = false)]
    pub allow_infeasible: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Args, Debug, Clone)]
pub struct ChannelArgs {
    #[arg(long)]
    pub product: String,
    #[arg(long)]
    pub platform: String,
}

impl ChannelArgs {
    pub fn key(&self) -> ChannelKey {
        ChannelKey::new(self.product.as_str(), self.platform.as_str())
    }
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Fit every product/platform in the dataset and write the coefficient registry
    Fit {
        /// Treat zero investment / conversions as real data instead of missing days
        #[arg(long, default_value_t = false)]
        keep_zeros: bool,
    },

    /// How much will X conversions cost?
    GoalCost {
        #[command(flatten)]
        channel: ChannelArgs,
        #[arg(long)]
        goal: f64,
        /// Goal is per month (30 days) instead of per day
        #[arg(long, default_value_t = false)]
        monthly: bool,
    },

    /// Cost per conversion of X extra conversions on top of a baseline
    Incremental {
        #[command(flatten)]
        channel: ChannelArgs,
        #[arg(long)]
        base: f64,
        #[arg(long)]
        extra: f64,
        #[arg(long, default_value_t = false)]
        monthly: bool,
    },

    /// Up to which conversion level is one extra conversion still worth its value?
    Profitable {
        #[command(flatten)]
        channel: ChannelArgs,
        #[arg(long)]
        base: f64,
        /// Value of one conversion, in dollars
        #[arg(long)]
        value: f64,
        #[arg(long, default_value_t = PLANNING.sequence.steps)]
        steps: usize,
        #[arg(long, default_value_t = PLANNING.sequence.step_size)]
        step_size: f64,
        #[arg(long, default_value_t = false)]
        monthly: bool,
    },

    /// Investment range that should reach a goal given model uncertainty
    Range {
        #[command(flatten)]
        channel: ChannelArgs,
        #[arg(long)]
        goal: f64,
        #[arg(long, default_value_t = false)]
        monthly: bool,
        /// Significance level of the coefficient interval
        #[arg(long, default_value_t = PLANNING.default_alpha)]
        alpha: f64,
    },

    /// Fit statistics for one product/platform
    Summary {
        #[command(flatten)]
        channel: ChannelArgs,
        #[arg(long, default_value_t = PLANNING.default_alpha)]
        alpha: f64,
    },
}

impl Cli {
    pub fn inversion_policy(&self) -> InversionPolicy {
        if self.allow_infeasible {
            InversionPolicy::PassThrough
        } else {
            InversionPolicy::Strict
        }
    }
}
