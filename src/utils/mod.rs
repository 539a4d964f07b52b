mod maths_utils;

pub use maths_utils::round_to;

pub(crate) use maths_utils::{get_min_max, mean, sum_sq_dev};
