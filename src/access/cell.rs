use std::{
    fmt,
    ops::{Deref, DerefMut},
};

use crate::grid::{Coord, Grid};

/// A fully indexed cell of a [`Grid`].
///
/// The accessor caches the cell's value when it is created and has two ways
/// of assigning to it:
///
/// - [`cache`](CellAccessor::cache) (and [`DerefMut`]) only change the cached
///   value. This is how a named accessor is used to inspect and tentatively
///   change a cell without touching the grid.
/// - [`commit`](CellAccessor::commit) changes the cached value and writes it
///   through to the grid, releasing the cell when the value is the default.
///   It consumes and returns the accessor, so commits chain.
///
/// ```
/// use sparse_grid::Grid;
///
/// let mut grid = Grid::<i32>::new(5);
///
/// let mut cell = grid.at(0).at(1);
/// cell.cache(7);
/// assert_eq!(*cell, 7);
/// assert_eq!(*cell.stored(), 5);
///
/// let cell = cell.commit_cached();
/// assert_eq!(*cell.stored(), 7);
/// ```
pub struct CellAccessor<'g, T, const D: usize> {
    grid: &'g mut Grid<T, D>,
    coord: Coord<D>,
    value: T,
}

impl<'g, T: Clone, const D: usize> CellAccessor<'g, T, D> {
    #[inline]
    pub(crate) fn new(grid: &'g mut Grid<T, D>, coord: Coord<D>) -> Self {
        let value = grid.get(coord).clone();

        Self { grid, coord, value }
    }
}

impl<'g, T, const D: usize> CellAccessor<'g, T, D> {
    /// Returns the coordinate of the cell.
    #[inline]
    pub fn coord(&self) -> Coord<D> {
        self.coord
    }

    /// Returns the cached value.
    #[inline]
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns the value currently held by the grid, which may differ from
    /// the cached value.
    #[inline]
    pub fn stored(&self) -> &T {
        self.grid.get(self.coord)
    }

    /// Sets the cached value without writing it to the grid.
    #[inline]
    pub fn cache(&mut self, value: T) -> &mut Self {
        self.value = value;
        self
    }

    /// Consumes the accessor, returning the cached value.
    #[inline]
    pub fn into_value(self) -> T {
        self.value
    }
}

impl<'g, T: PartialEq, const D: usize> CellAccessor<'g, T, D> {
    /// Returns `true` if the cached value is the grid's default.
    #[inline]
    pub fn is_default(&self) -> bool {
        self.value == *self.grid.default_value()
    }
}

impl<'g, T: Clone + PartialEq, const D: usize> CellAccessor<'g, T, D> {
    /// Sets the cached value and writes it to the grid.
    ///
    /// Writing the default releases the cell, or does nothing if the cell is
    /// not stored. Any other value is inserted or overwrites the stored one.
    #[inline]
    pub fn commit(mut self, value: T) -> Self {
        self.value = value;
        self.commit_cached()
    }

    /// Writes the cached value to the grid.
    #[inline]
    pub fn commit_cached(self) -> Self {
        self.grid.set(self.coord, self.value.clone());
        self
    }

    /// Assigns the cached value to the cell at `coord` of the same grid,
    /// committing it there.
    ///
    /// ```
    /// use sparse_grid::Grid;
    ///
    /// let mut grid = Grid::<i32>::new(0);
    /// grid.at(1).at(2).commit(9).commit_into([2, 1]);
    ///
    /// assert_eq!(grid[[1, 2]], 9);
    /// assert_eq!(grid[[2, 1]], 9);
    /// ```
    #[inline]
    pub fn commit_into(self, coord: Coord<D>) -> Self {
        let Self { grid, value, .. } = self;

        Self {
            grid,
            coord,
            value,
        }
        .commit_cached()
    }
}

impl<'g, T, const D: usize> Deref for CellAccessor<'g, T, D> {
    type Target = T;

    #[inline]
    fn deref(&self) -> &Self::Target {
        &self.value
    }
}

/// Mutates the cached value only.
impl<'g, T, const D: usize> DerefMut for CellAccessor<'g, T, D> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.value
    }
}

/// Compares cached values only.
///
/// Two accessors of the same grid cannot be alive at once, so this compares
/// cells of different grids. Compare against a plain value with `*cell == value`.
impl<'g, 'h, T: PartialEq, const D: usize> PartialEq<CellAccessor<'h, T, D>>
    for CellAccessor<'g, T, D>
{
    #[inline]
    fn eq(&self, other: &CellAccessor<'h, T, D>) -> bool {
        self.value == other.value
    }
}

impl<'g, T: fmt::Debug, const D: usize> fmt::Debug for CellAccessor<'g, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CellAccessor")
            .field("coord", &self.coord)
            .field("value", &self.value)
            .finish()
    }
}
