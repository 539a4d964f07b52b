// Domain types and value objects
mod channel_key;
mod goal_period;
mod observation;

// Re-export commonly used types to the world
pub use channel_key::ChannelKey;
pub use goal_period::{GoalPeriod, daily_to_monthly};
pub use observation::{MissingPolicy, Observation, ObservationSet};
