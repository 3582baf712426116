// Dynamic Programming problems module
// Add problem modules here as they are implemented

pub mod boundary_pairs;
pub mod min_count_subset_sum;

use crate::TaskGroup;

pub fn tasks() -> TaskGroup {
    TaskGroup::new("dynamic_programming")
        .add("boundary_pairs", boundary_pairs::solve)
        .add("min_count_subset_sum", min_count_subset_sum::solve)
}
