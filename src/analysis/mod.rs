// Planning core: fitting, inversion, marginal costs and threshold search
pub mod cost_calculator;
pub mod fitter;
pub mod investment_range;
pub mod marginal_sequence;
pub mod threshold;

pub use {
    cost_calculator::{goal_cost, goal_cost_with, incremental_cost, incremental_cost_with},
    fitter::{fit, fit_with},
    investment_range::{RangeOptions, investment_range, investment_range_with, range_from_interval},
    marginal_sequence::{marginal_cost_sequence, marginal_cost_sequence_with},
    threshold::locate_threshold,
};
