use thiserror::Error;

/// Reasons a k-th largest selection cannot produce a value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectError {
    /// `k` is zero or larger than the number of values available.
    #[error("invalid rank k={k} for {len} value(s): k must be in 1..={len}")]
    InvalidArgument { k: usize, len: usize },

    /// There were no values to select from.
    #[error("cannot select rank k={k} from an empty input")]
    EmptyInput { k: usize },
}

impl SelectError {
    /// Returns the rank that was requested.
    pub fn k(&self) -> usize {
        match *self {
            SelectError::InvalidArgument { k, .. } | SelectError::EmptyInput { k } => k,
        }
    }
}
