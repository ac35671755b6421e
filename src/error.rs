use std::error::Error;
use std::fmt::{Display, Formatter};

/// A coordinate had a different number of components than the grid has dimensions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DimensionMismatch {
    expected: usize,
    found: usize,
}

impl DimensionMismatch {
    #[inline]
    pub const fn new(expected: usize, found: usize) -> Self {
        Self { expected, found }
    }

    /// Returns the dimensionality of the grid.
    #[inline]
    pub const fn expected(&self) -> usize {
        self.expected
    }

    /// Returns the number of components the coordinate had.
    #[inline]
    pub const fn found(&self) -> usize {
        self.found
    }
}

impl Display for DimensionMismatch {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "coordinate has {} components but the grid has {} dimensions",
            self.found, self.expected
        )
    }
}

impl Error for DimensionMismatch {}
