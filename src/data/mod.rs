mod dataset;
mod params_store;

pub use {
    dataset::{ChannelSeries, ConversionsDataset, load_dataset, save_dataset},
    params_store::{ParameterStore, ParamsRegistry, load_params, save_params},
};
