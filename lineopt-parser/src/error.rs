use core::fmt;

/// Fewer tokens remained on the line than a fixed-arity request needed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ArityError {
    /// The number of tokens that were requested
    pub expected: usize,

    /// The number of tokens that were actually available before the line
    /// ran out
    pub available: usize,
}

impl fmt::Display for ArityError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.expected {
            1 => write!(f, "expected a value, but the line ended"),
            expected => write!(
                f,
                "expected {expected} values, but only {available} remained",
                available = self.available
            ),
        }
    }
}

impl core::error::Error for ArityError {}
