use std::{fmt, ops::Index};

use crate::{
    access::Locator,
    error::DimensionMismatch,
    storage::{EntryStore, IntoIter, Iter, IterMut},
};

use super::{coord_from_slice, Coord, Dim, Dimension};

/// A sparse `D`-dimensional grid.
///
/// Every cell holds the grid's default value unless it has been explicitly
/// set to something else, and only those cells consume storage.
///
/// Cells are addressed either with a full [`Coord`] through
/// [`get`](Grid::get) and [`set`](Grid::set), or one component at a time
/// through [`at`](Grid::at), which ends in a
/// [`CellAccessor`](crate::access::CellAccessor).
///
/// `D` must be between 2 and 16.
///
/// Two grids are equal when they have the same default and read the same
/// value at every coordinate. Entries left at the default by
/// [`iter_mut`](Grid::iter_mut) are ignored.
///
/// ```
/// use sparse_grid::Grid;
///
/// let mut grid = Grid::<i32>::new(5);
/// grid.at(3).at(60).commit(4);
///
/// assert_eq!(grid[[3, 60]], 4);
/// assert_eq!(grid[[60, 3]], 5);
/// assert_eq!(grid.len(), 1);
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Grid<T, const D: usize = 2> {
    store: EntryStore<T, D>,
}

impl<T, const D: usize> Grid<T, D>
where
    Dim<D>: Dimension,
{
    /// Creates an empty grid where every cell holds `default`.
    #[inline]
    pub const fn new(default: T) -> Self {
        Self {
            store: EntryStore::new(default),
        }
    }

    /// Begins indexing the cell whose first coordinate component is `index`.
    ///
    /// The dimensionality must be known where the chain is written, since it
    /// decides whether the next step yields a [`Locator`] or a
    /// [`CellAccessor`](crate::access::CellAccessor). Name it when creating
    /// the grid, e.g. `Grid::<u32>::new(0)` or `Grid::<u32, 3>::new(0)`.
    #[inline]
    pub fn at(&mut self, index: usize) -> Locator<'_, T, <Dim<D> as Dimension>::Chain, D> {
        let mut coord = [0; D];
        coord[0] = index;

        Locator::new(self, coord, 1)
    }
}

impl<T: PartialEq, const D: usize> Grid<T, D>
where
    Dim<D>: Dimension,
{
    /// Creates a grid from `entries`, skipping any entry equal to `default`.
    pub fn from_entries(default: T, entries: impl IntoIterator<Item = (Coord<D>, T)>) -> Self {
        let mut grid = Self::new(default);
        grid.extend(entries);
        grid
    }
}

impl<T, const D: usize> Grid<T, D> {
    /// Returns the value held by every cell that has not been set.
    #[inline]
    pub fn default_value(&self) -> &T {
        self.store.default_value()
    }

    /// Returns the number of cells that differ from the default.
    #[inline]
    pub fn len(&self) -> usize {
        self.store.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    /// Returns `true` if the cell at `coord` is stored.
    #[inline]
    pub fn contains(&self, coord: Coord<D>) -> bool {
        self.store.contains(&coord)
    }

    /// Returns the value at `coord`.
    ///
    /// Reading never allocates, absent cells yield the default.
    #[inline]
    pub fn get(&self, coord: Coord<D>) -> &T {
        self.store.get(&coord)
    }

    /// Returns the value at a coordinate of runtime length.
    #[inline]
    pub fn get_slice(&self, coord: &[usize]) -> Result<&T, DimensionMismatch> {
        Ok(self.get(coord_from_slice(coord)?))
    }

    /// Returns the stored cell with the smallest coordinate.
    #[inline]
    pub fn first(&self) -> Option<(Coord<D>, &T)> {
        self.store.first()
    }

    /// Returns the stored cell with the largest coordinate.
    #[inline]
    pub fn last(&self) -> Option<(Coord<D>, &T)> {
        self.store.last()
    }

    /// Resets the cell at `coord` to the default, returning the stored value.
    #[inline]
    pub fn remove(&mut self, coord: Coord<D>) -> Option<T> {
        self.store.remove(&coord)
    }

    /// Resets every cell to the default.
    #[inline]
    pub fn clear(&mut self) {
        self.store.clear();
    }

    /// Iterates the stored cells in ascending coordinate order.
    #[inline]
    pub fn iter(&self) -> Iter<'_, T, D> {
        self.store.iter()
    }

    /// Iterates the stored cells in ascending coordinate order, allowing
    /// their values to be changed in place.
    ///
    /// Setting a value to the default through this iterator does **not**
    /// release the cell. It still reads as the default, but it is counted by
    /// [`len`](Grid::len) until [`prune`](Grid::prune) is called.
    /// Use [`update_each`](Grid::update_each) to have that done automatically.
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, D> {
        self.store.iter_mut()
    }
}

impl<T: PartialEq, const D: usize> Grid<T, D> {
    /// Writes `value` at `coord`, returning the previously stored value.
    ///
    /// Writing the default releases the cell.
    #[inline]
    pub fn set(&mut self, coord: Coord<D>, value: T) -> Option<T> {
        self.store.commit(coord, value)
    }

    /// Writes `value` at a coordinate of runtime length.
    #[inline]
    pub fn set_slice(
        &mut self,
        coord: &[usize],
        value: T,
    ) -> Result<Option<T>, DimensionMismatch> {
        Ok(self.set(coord_from_slice(coord)?, value))
    }

    /// Releases every stored cell whose value equals the default.
    ///
    /// Returns the number of cells released.
    #[inline]
    pub fn prune(&mut self) -> usize {
        self.store.prune()
    }

    /// Calls `f` on every stored cell, then releases those left at the default.
    pub fn update_each(&mut self, mut f: impl FnMut(Coord<D>, &mut T)) {
        for (coord, value) in self.store.iter_mut() {
            f(coord, value);
        }

        self.store.prune();
    }
}

impl<T: Default, const D: usize> Default for Grid<T, D>
where
    Dim<D>: Dimension,
{
    #[inline]
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T, const D: usize> Index<Coord<D>> for Grid<T, D> {
    type Output = T;

    #[inline]
    fn index(&self, coord: Coord<D>) -> &Self::Output {
        self.get(coord)
    }
}

impl<T: PartialEq, const D: usize> Extend<(Coord<D>, T)> for Grid<T, D> {
    #[inline]
    fn extend<I: IntoIterator<Item = (Coord<D>, T)>>(&mut self, iter: I) {
        for (coord, value) in iter {
            self.set(coord, value);
        }
    }
}

impl<T: Default + PartialEq, const D: usize> FromIterator<(Coord<D>, T)> for Grid<T, D>
where
    Dim<D>: Dimension,
{
    #[inline]
    fn from_iter<I: IntoIterator<Item = (Coord<D>, T)>>(iter: I) -> Self {
        Self::from_entries(T::default(), iter)
    }
}

impl<T, const D: usize> IntoIterator for Grid<T, D> {
    type Item = (Coord<D>, T);
    type IntoIter = IntoIter<T, D>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.store.into_iter()
    }
}

impl<'a, T, const D: usize> IntoIterator for &'a Grid<T, D> {
    type Item = (Coord<D>, &'a T);
    type IntoIter = Iter<'a, T, D>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl<'a, T, const D: usize> IntoIterator for &'a mut Grid<T, D> {
    type Item = (Coord<D>, &'a mut T);
    type IntoIter = IterMut<'a, T, D>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        self.iter_mut()
    }
}

impl<T: fmt::Debug, const D: usize> fmt::Debug for Grid<T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Grid")
            .field("default", self.default_value())
            .field("entries", &DebugEntries(self))
            .finish()
    }
}

struct DebugEntries<'a, T, const D: usize>(&'a Grid<T, D>);

impl<'a, T: fmt::Debug, const D: usize> fmt::Debug for DebugEntries<'a, T, D> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map().entries(self.0.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn direct_access() {
        let mut grid = Grid::<i32, 3>::new(5);

        assert_eq!(grid.set([1, 2, 3], 7), None);
        assert_eq!(grid[[1, 2, 3]], 7);
        assert_eq!(grid[[3, 2, 1]], 5);
        assert!(grid.contains([1, 2, 3]));
        assert!(!grid.contains([3, 2, 1]));

        assert_eq!(grid.remove([1, 2, 3]), Some(7));
        assert_eq!(grid.remove([1, 2, 3]), None);
        assert!(grid.is_empty());
    }

    #[test]
    fn slice_access() {
        let mut grid = Grid::<i32, 3>::new(0);

        assert_eq!(grid.set_slice(&[1, 2, 3], 9), Ok(None));
        assert_eq!(grid.get_slice(&[1, 2, 3]), Ok(&9));
        assert_eq!(
            grid.get_slice(&[1, 2]),
            Err(DimensionMismatch::new(3, 2))
        );
        assert_eq!(
            grid.set_slice(&[1, 2, 3, 4], 1),
            Err(DimensionMismatch::new(3, 4))
        );
        assert_eq!(grid.len(), 1);
    }

    #[test]
    fn collect_skips_default() {
        let grid: Grid<i32> = vec![([0, 0], 1), ([0, 1], 0), ([2, 2], 3)]
            .into_iter()
            .collect();

        assert_eq!(grid.len(), 2);
        assert!(!grid.contains([0, 1]));
    }

    #[test]
    fn extend_overwrites_and_releases() {
        let mut grid = Grid::from_entries(5, [([0, 0], 1), ([1, 1], 2)]);
        grid.extend([([0, 0], 5), ([1, 1], 3)]);

        assert_eq!(grid.len(), 1);
        assert_eq!(grid[[1, 1]], 3);
    }

    #[test]
    fn update_each_releases_defaults() {
        let mut grid = Grid::from_entries(5, [([0, 0], 3), ([3, 60], 4), ([10, 50], 10)]);

        grid.update_each(|coord, value| {
            if coord[0] < 5 {
                *value = 5;
            }
        });

        assert_eq!(grid.len(), 1);
        assert_eq!(grid.first(), Some(([10, 50], &10)));
    }

    #[test]
    fn equality() {
        let a = Grid::from_entries(5, [([0, 0], 3)]);
        let b = Grid::from_entries(5, [([0, 0], 3), ([1, 1], 5)]);
        let c = Grid::from_entries(6, [([0, 0], 3)]);

        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn equality_ignores_stale_defaults() {
        let mut a = Grid::<i32>::new(5);
        let b = Grid::<i32>::new(5);
        a.set([0, 0], 3);

        for (_, value) in a.iter_mut() {
            *value = 5;
        }

        assert_eq!(a.len(), 1);
        assert_eq!(a, b);
        assert_eq!(b, a);

        a.set([1, 1], 4);
        assert_ne!(a, b);
    }

    #[test]
    fn debug() {
        let grid = Grid::from_entries(5, [([3, 60], 4), ([0, 0], 3)]);

        assert_eq!(
            format!("{:?}", grid),
            "Grid { default: 5, entries: {[0, 0]: 3, [3, 60]: 4} }"
        );
    }
}
