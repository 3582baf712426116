// Greedy heuristic for the minimum count problem that only ever looks at the two ends of the
// remaining values. It is not exact: prefer `min_count_subset_sum` for feasibility or
// minimality. Kept for output compatibility with the earlier scripts.
use crate::dynamic_programming::min_count_subset_sum::{read_problem, validate, wire_count};
use crate::{Result, Scanner, SubsetSumError, Writer};

pub fn solve(input: &mut Scanner, out: &mut Writer) -> Result<()> {
    let (target, values) = read_problem(input)?;

    let result = boundary_pairs(target, &values)?;

    out.println(wire_count(result));
    Ok(())
}

/// Sums of the pairs at the ends of a window, in tie-breaking order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pair {
    Begin,
    End,
    LeftRight,
}

impl Pair {
    const ALL: [Pair; 3] = [Pair::Begin, Pair::End, Pair::LeftRight];

    fn sum(self, window: &[u64]) -> u64 {
        let last = window.len() - 1;
        match self {
            Pair::Begin => window[0] + window[1],
            Pair::End => window[last] + window[last - 1],
            Pair::LeftRight => window[0] + window[last],
        }
    }

    /// The window left after the pair's two values are used.
    fn rest(self, window: &[u64]) -> &[u64] {
        let len = window.len();
        match self {
            Pair::Begin => &window[2..],
            Pair::End => &window[..len - 2],
            Pair::LeftRight => &window[1..len - 1],
        }
    }
}

/// Count of values the heuristic picks to reach `target`, or `None` when it gives up.
///
/// At each step:
/// * a single remaining value must equal the target,
/// * either end equal to the target finishes with one more value,
/// * any of the three end pair sums equal to the target finishes with two more,
/// * every pair sum above the target gives up,
/// * otherwise the largest pair sum below the target is taken and its values dropped.
pub fn boundary_pairs(target: i64, values: &[i64]) -> Result<Option<usize>, SubsetSumError> {
    let (target, values) = validate(target, values)?;

    if values.is_empty() {
        return Ok((target == 0).then_some(0));
    }

    let mut remaining = target;
    let mut window = &values[..];
    let mut count = 0;

    loop {
        match window {
            // ran out of values with part of the target left over
            [] => return Ok(None),
            [only] => return Ok((*only == remaining).then_some(count + 1)),
            [first, .., last] if *first == remaining || *last == remaining => {
                return Ok(Some(count + 1));
            }
            _ => {}
        }

        let sums = Pair::ALL.map(|pair| (pair, pair.sum(window)));
        if sums.iter().any(|&(_, sum)| sum == remaining) {
            return Ok(Some(count + 2));
        }

        // first of the largest sums below the target
        let mut best: Option<(Pair, u64)> = None;
        for (pair, sum) in sums {
            if sum < remaining && best.is_none_or(|(_, best_sum)| sum > best_sum) {
                best = Some((pair, sum));
            }
        }
        let Some((pair, sum)) = best else {
            return Ok(None);
        };

        count += 2;
        remaining -= sum;
        window = pair.rest(window);
    }
}
