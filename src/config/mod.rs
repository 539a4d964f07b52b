//! Configuration module for the conversion planner.

// Can all be private now because we have a public re-export.
mod debug;
mod persistence;
mod planning;

// Re-export commonly used items
pub use debug::DF;
pub use persistence::{PERSISTENCE, PersistenceConfig};
pub use planning::{PLANNING, PlanningConfig, SequenceDefaults};
