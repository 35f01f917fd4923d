pub mod median_of_medians;
mod partition;
pub mod randomized_quickselect;
pub mod selection;

pub use median_of_medians::deterministic_select;
pub use randomized_quickselect::{randomized_quickselect, randomized_quickselect_with_rng};
pub use selection::{median, select, Algorithm, Selector};
