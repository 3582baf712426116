// Minimum number of values summing exactly to a target, each index used at most once.
use log::debug;

use crate::{Error, Result, Scanner, SubsetSumError, Writer};

/// Input: `n q` on the first line, the `n` values on the second.
/// Output: the minimum count, or -1 when no subset sums to `q`.
pub fn solve(input: &mut Scanner, out: &mut Writer) -> Result<()> {
    let (target, values) = read_problem(input)?;

    let result = min_count(target, &values)?;

    out.println(wire_count(result));
    Ok(())
}

pub(crate) fn read_problem(input: &mut Scanner) -> Result<(i64, Vec<i64>)> {
    let parts: Vec<i64> = input.parse_vec()?;

    let [n, target] = parts[..] else {
        return Err(Error::Input(format!(
            "expected `n q` on the first line, got {} values",
            parts.len()
        )));
    };

    let values: Vec<i64> = input.parse_vec()?;
    if usize::try_from(n).ok() != Some(values.len()) {
        return Err(Error::Input(format!(
            "expected {} values, got {}",
            n,
            values.len()
        )));
    }

    Ok((target, values))
}

/// Printed form of a solver result: the count, or -1 when infeasible.
pub fn wire_count(count: Option<usize>) -> i64 {
    count.map_or(-1, |count| count as i64)
}

/// Check the preconditions shared by every solver: a non-negative target and strictly positive
/// values. Offending values are reported with their index.
pub fn validate(target: i64, values: &[i64]) -> Result<(u64, Vec<u64>), SubsetSumError> {
    let target = u64::try_from(target).map_err(|_| SubsetSumError::NegativeTarget(target))?;

    let values = values
        .iter()
        .enumerate()
        .map(|(index, &value)| {
            if value > 0 {
                Ok(value as u64)
            } else {
                Err(SubsetSumError::NonPositiveValue { index, value })
            }
        })
        .collect::<Result<Vec<_>, _>>()?;

    Ok((target, values))
}

/// Minimum count using the default solver configuration.
pub fn min_count(target: i64, values: &[i64]) -> Result<Option<usize>, SubsetSumError> {
    MinCountSubsetSum::new().compute(target, values)
}

// Sentinel value representing an unreachable sum.
const UNREACHABLE: usize = usize::MAX;

fn reachable(count: usize) -> Option<usize> {
    (count != UNREACHABLE).then_some(count)
}

// Values wider than the platform can never fit under a target that does.
fn to_index(value: u64) -> usize {
    usize::try_from(value).unwrap_or(usize::MAX)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SolverConfig {
    /// Upper bound on the number of cells a single query may allocate.
    pub max_table_cells: usize,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            max_table_cells: 1 << 25,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct MinCountSubsetSum {
    config: SolverConfig,
}

impl MinCountSubsetSum {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Minimum number of values summing exactly to `target`, or `None` when no subset does.
    ///
    /// Keeps a single tally line of minimum counts per partial sum. Each value is merged into the
    /// line back to front, so `tally[j - value]` still describes the subsets that don't use it
    /// and every index is counted at most once:
    ///   tally[j] = min(tally[j], tally[j - value] + 1)
    pub fn compute(&self, target: i64, values: &[i64]) -> Result<Option<usize>, SubsetSumError> {
        let (target, values) = validate(target, values)?;
        let columns = self.columns(target, 1)?;

        let mut tally = vec![UNREACHABLE; columns];
        // the empty selection reaches sum 0
        tally[0] = 0;

        for value in values.into_iter().map(to_index) {
            // for a value larger than the target the range is empty.
            for j in (value..columns).rev() {
                let remainder = tally[j - value];
                if remainder != UNREACHABLE {
                    tally[j] = tally[j].min(remainder + 1);
                }
            }
        }

        Ok(reachable(tally[columns - 1]))
    }

    /// Build the full table of minimum counts, one row per prefix of `values`.
    pub fn table(&self, target: i64, values: &[i64]) -> Result<DpTable, SubsetSumError> {
        let (target, values) = validate(target, values)?;
        let rows = values.len() + 1;
        let columns = self.columns(target, rows)?;
        debug!("building min count table: {} rows x {} columns", rows, columns);

        let values: Vec<usize> = values.into_iter().map(to_index).collect();
        let mut cells = vec![UNREACHABLE; rows * columns];
        cells[0] = 0;

        for (i, &value) in values.iter().enumerate() {
            let (done, rest) = cells.split_at_mut((i + 1) * columns);
            let prev = &done[i * columns..];
            let row = &mut rest[..columns];

            for j in 0..columns {
                // best count without this item
                row[j] = prev[j];
                // unlike a plain overwrite, keep whichever of skip/use is smaller
                if j >= value && prev[j - value] != UNREACHABLE {
                    row[j] = row[j].min(prev[j - value] + 1);
                }
            }
        }

        Ok(DpTable {
            values,
            columns,
            cells,
        })
    }

    fn columns(&self, target: u64, rows: usize) -> Result<usize, SubsetSumError> {
        let limit = self.config.max_table_cells;
        let too_large = |columns| SubsetSumError::TableTooLarge {
            rows,
            columns,
            limit,
        };

        let columns = usize::try_from(target)
            .ok()
            .and_then(|target| target.checked_add(1))
            .ok_or_else(|| too_large(usize::MAX))?;

        match rows.checked_mul(columns) {
            Some(cells) if cells <= limit => Ok(columns),
            _ => Err(too_large(columns)),
        }
    }
}

/// Minimum counts indexed by (items considered, partial sum).
#[derive(Debug, Clone)]
pub struct DpTable {
    values: Vec<usize>,
    columns: usize,
    cells: Vec<usize>,
}

impl DpTable {
    pub fn rows(&self) -> usize {
        self.values.len() + 1
    }

    pub fn columns(&self) -> usize {
        self.columns
    }

    pub fn target(&self) -> usize {
        self.columns - 1
    }

    fn at(&self, items: usize, sum: usize) -> usize {
        self.cells[items * self.columns + sum]
    }

    /// Minimum count of the first `items` values reaching exactly `sum`.
    pub fn cell(&self, items: usize, sum: usize) -> Option<usize> {
        if items >= self.rows() || sum >= self.columns {
            return None;
        }
        reachable(self.at(items, sum))
    }

    pub fn min_count(&self) -> Option<usize> {
        self.cell(self.values.len(), self.target())
    }

    /// Indices (ascending) of a minimum size subset summing to the target.
    pub fn selection(&self) -> Option<Vec<usize>> {
        self.min_count()?;

        let mut sum = self.target();
        let mut picked = Vec::new();
        for items in (1..self.rows()).rev() {
            // a cell that differs from the row above could only have come from using the item
            if self.at(items, sum) != self.at(items - 1, sum) {
                picked.push(items - 1);
                sum -= self.values[items - 1];
            }
        }
        debug_assert_eq!(sum, 0);

        picked.reverse();
        Some(picked)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::driver::SCORES;
    use crate::testing;
    use std::io::Cursor;

    #[test]
    fn test_sample_scores() {
        // Q = 0..=14 over [1, 2, 3, 4, 3, 1, 1, 2, 3, 4]
        let expected = [0, 1, 1, 1, 1, 2, 2, 2, 2, 3, 3, 3, 4, 4, 4];
        for (q, &count) in expected.iter().enumerate() {
            assert_eq!(min_count(q as i64, &SCORES), Ok(Some(count)), "Q = {}", q);
        }
    }

    #[test]
    fn test_keeps_smaller_count() {
        // 4 + 4 = 8. Overwriting with the "use item" branch unconditionally ends on 3 here.
        assert_eq!(min_count(8, &SCORES), Ok(Some(2)));
        let table = MinCountSubsetSum::new().table(8, &SCORES).unwrap();
        assert_eq!(table.min_count(), Some(2));
        assert_eq!(table.selection(), Some(vec![3, 9]));
    }

    #[test]
    fn test_whole_array_and_beyond() {
        let total: i64 = SCORES.iter().sum();
        assert_eq!(min_count(total, &SCORES), Ok(Some(SCORES.len())));
        assert_eq!(min_count(total + 1, &SCORES), Ok(None));
    }

    #[test]
    fn test_empty_values() {
        assert_eq!(min_count(0, &[]), Ok(Some(0)));
        assert_eq!(min_count(3, &[]), Ok(None));

        let table = MinCountSubsetSum::new().table(0, &[]).unwrap();
        assert_eq!(table.rows(), 1);
        assert_eq!(table.selection(), Some(vec![]));
    }

    #[test]
    fn test_gap_is_infeasible() {
        // only even sums are reachable
        assert_eq!(min_count(5, &[2, 4, 6]), Ok(None));
        assert_eq!(min_count(6, &[2, 4, 6]), Ok(Some(1)));
        assert_eq!(min_count(12, &[2, 4, 6]), Ok(Some(3)));
    }

    #[test]
    fn test_each_index_used_once() {
        // 3 + 3 would need the single 3 twice
        assert_eq!(min_count(6, &[3, 1, 2]), Ok(Some(3)));
        assert_eq!(min_count(6, &[3]), Ok(None));
    }

    #[test]
    fn test_rejects_invalid_input() {
        assert_eq!(min_count(-1, &[1]), Err(SubsetSumError::NegativeTarget(-1)));
        assert_eq!(
            min_count(3, &[1, 0, 2]),
            Err(SubsetSumError::NonPositiveValue { index: 1, value: 0 })
        );
        assert_eq!(
            MinCountSubsetSum::new().table(3, &[2, -5]).unwrap_err(),
            SubsetSumError::NonPositiveValue {
                index: 1,
                value: -5
            }
        );
    }

    #[test]
    fn test_rejects_oversized_table() {
        let solver = MinCountSubsetSum::with_config(SolverConfig {
            max_table_cells: 100,
        });
        // 11 x 10 cells for the full table, 10 for a single line
        assert_eq!(
            solver.table(9, &SCORES).unwrap_err(),
            SubsetSumError::TableTooLarge {
                rows: 11,
                columns: 10,
                limit: 100
            }
        );
        assert_eq!(solver.compute(9, &SCORES), Ok(Some(3)));
        assert!(matches!(
            solver.compute(100, &SCORES),
            Err(SubsetSumError::TableTooLarge { columns: 101, .. })
        ));
    }

    #[test]
    fn test_table_cells() {
        let table = MinCountSubsetSum::new().table(6, &[1, 2, 3]).unwrap();
        for items in 0..table.rows() {
            assert_eq!(table.cell(items, 0), Some(0));
        }
        assert_eq!(table.cell(0, 1), None);
        assert_eq!(table.cell(2, 3), Some(2));
        assert_eq!(table.cell(3, 3), Some(1));
        assert_eq!(table.cell(3, 6), Some(3));
        assert_eq!(table.cell(4, 0), None);
        assert_eq!(table.cell(0, 7), None);
    }

    #[test]
    fn test_solve() {
        let mut input = Scanner::new(Cursor::new("10 8\n1 2 3 4 3 1 1 2 3 4\n".to_string()));
        let mut out = Writer::new();
        solve(&mut input, &mut out).unwrap();
        assert_eq!(out.into_string().unwrap(), "2\n");
    }

    #[test]
    fn test_solve_rejects_count_mismatch() {
        let mut input = Scanner::new(Cursor::new("3 8\n1 2\n".to_string()));
        let mut out = Writer::new();
        assert!(matches!(solve(&mut input, &mut out), Err(Error::Input(_))));
    }

    #[test]
    fn test_data() {
        testing::verify_all_tests("dynamic_programming", "min_count_subset_sum", solve);
    }
}
