//! Prints the minimum count for each target in a fixed range over a fixed list of scores.
use std::ops::RangeInclusive;

use clap::ValueEnum;
use log::info;

use crate::dynamic_programming::boundary_pairs::boundary_pairs;
use crate::dynamic_programming::min_count_subset_sum::{MinCountSubsetSum, wire_count};
use crate::{SubsetSumError, Writer};

pub const SCORES: [i64; 10] = [1, 2, 3, 4, 3, 1, 1, 2, 3, 4];

pub const TARGETS: RangeInclusive<i64> = 0..=14;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum Algorithm {
    /// Full (items x sum) table
    Table,
    /// Single tally line, same answers as `table`
    #[default]
    Rolling,
    /// Greedy heuristic over the pairs at both ends; not exact
    BoundaryPairs,
}

impl Algorithm {
    pub fn run(
        self,
        solver: &MinCountSubsetSum,
        target: i64,
        values: &[i64],
    ) -> Result<Option<usize>, SubsetSumError> {
        match self {
            Algorithm::Table => Ok(solver.table(target, values)?.min_count()),
            Algorithm::Rolling => solver.compute(target, values),
            Algorithm::BoundaryPairs => boundary_pairs(target, values),
        }
    }
}

pub fn demo(
    out: &mut Writer,
    algorithm: Algorithm,
    solver: &MinCountSubsetSum,
) -> Result<(), SubsetSumError> {
    info!("running {:?} over {} targets", algorithm, TARGETS.count());

    for target in TARGETS {
        let count = algorithm.run(solver, target, &SCORES)?;
        out.println(format!(
            "For Q = {}, minimum students required: {}",
            target,
            wire_count(count)
        ));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn demo_lines(algorithm: Algorithm) -> Vec<String> {
        let mut out = Writer::new();
        demo(&mut out, algorithm, &MinCountSubsetSum::new()).unwrap();
        out.into_string()
            .unwrap()
            .lines()
            .map(str::to_string)
            .collect()
    }

    #[test]
    fn test_demo_output() {
        let lines = demo_lines(Algorithm::Rolling);
        assert_eq!(lines.len(), 15);
        assert_eq!(lines[0], "For Q = 0, minimum students required: 0");
        assert_eq!(lines[8], "For Q = 8, minimum students required: 2");
        assert_eq!(lines[14], "For Q = 14, minimum students required: 4");
    }

    #[test]
    fn test_table_matches_rolling() {
        assert_eq!(demo_lines(Algorithm::Table), demo_lines(Algorithm::Rolling));
    }

    #[test]
    fn test_boundary_pairs_demo() {
        let lines = demo_lines(Algorithm::BoundaryPairs);
        assert_eq!(lines[2], "For Q = 2, minimum students required: -1");
        assert_eq!(lines[14], "For Q = 14, minimum students required: 7");
    }
}
