use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Malformed instance: mismatched item count or a missing, non-numeric or negative field.
    #[error("invalid instance: {0}")]
    InvalidInstance(String),

    /// A negative capacity reached the exact solver.
    #[error("capacity {capacity} is negative ({items} items)")]
    CapacityOverflow { capacity: i64, items: usize },

    /// The exact table for this capacity has more cells than the host can address or allocate.
    #[error("exact table for capacity {capacity} and {items} items is too large")]
    TableTooLarge { capacity: u64, items: usize },

    #[error("invalid solution: {0}")]
    InvalidSolution(String),
}

pub type Result<T> = std::result::Result<T, Error>;
