use thiserror::Error;

/// Precondition violations for the subset-sum solvers.
///
/// An infeasible target is not an error: solvers report it as `Ok(None)`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SubsetSumError {
    #[error("target must be non-negative, got {0}")]
    NegativeTarget(i64),
    #[error("value at index {index} must be positive, got {value}")]
    NonPositiveValue { index: usize, value: i64 },
    #[error("table of {rows} x {columns} cells exceeds the limit of {limit} cells")]
    TableTooLarge {
        rows: usize,
        columns: usize,
        limit: usize,
    },
}

#[derive(Error, Debug)]
pub enum Error {
    #[error("failed to read input: {0}")]
    Io(#[from] std::io::Error),
    #[error("malformed input: {0}")]
    Input(String),
    #[error("unknown problem: {0}")]
    UnknownProblem(String),
    #[error(transparent)]
    SubsetSum(#[from] SubsetSumError),
}

pub type Result<T, E = Error> = std::result::Result<T, E>;
