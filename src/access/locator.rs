use std::marker::PhantomData;

use crate::grid::{Coord, Grid, Remaining};

/// A partially indexed cell of a [`Grid`].
///
/// Produced by [`Grid::at`] and by every [`at`](Locator::at) call before the
/// last coordinate component is supplied. `R` counts the components still
/// missing. A locator is consumed by indexing it, so a partial coordinate
/// cannot be reused.
#[must_use = "a locator does nothing until it is fully indexed"]
pub struct Locator<'g, T, R, const D: usize> {
    grid: &'g mut Grid<T, D>,
    coord: Coord<D>,
    filled: usize,
    _remaining: PhantomData<R>,
}

impl<'g, T, R: Remaining, const D: usize> Locator<'g, T, R, D> {
    #[inline]
    pub(crate) fn new(grid: &'g mut Grid<T, D>, coord: Coord<D>, filled: usize) -> Self {
        debug_assert_eq!(filled + R::COUNT, D);

        Self {
            grid,
            coord,
            filled,
            _remaining: PhantomData,
        }
    }

    /// Returns the coordinate components supplied so far.
    #[inline]
    pub fn prefix(&self) -> &[usize] {
        &self.coord[..self.filled]
    }
}

impl<'g, T: Clone, R: Remaining, const D: usize> Locator<'g, T, R, D> {
    /// Supplies the next coordinate component.
    ///
    /// Produces the next [`Locator`] while components remain, and the
    /// [`CellAccessor`](super::CellAccessor) once the last one is supplied.
    #[inline]
    pub fn at(self, index: usize) -> R::Output<'g, T, D> {
        let Self {
            grid,
            mut coord,
            filled,
            ..
        } = self;
        coord[filled] = index;

        R::step(grid, coord, filled + 1)
    }
}

#[cfg(test)]
mod tests {
    use crate::grid::{Grid, Remaining};

    use super::Locator;

    fn step<'g, R: Remaining>(
        locator: Locator<'g, i32, R, 3>,
        index: usize,
    ) -> R::Output<'g, i32, 3> {
        locator.at(index)
    }

    #[test]
    fn single_at_for_every_level() {
        let mut grid = Grid::<i32, 3>::new(0);

        let cell = step(step(grid.at(1), 2), 3);
        assert_eq!(cell.coord(), [1, 2, 3]);
        cell.commit(4);

        assert_eq!(grid[[1, 2, 3]], 4);
    }

    #[test]
    fn build_in_loop() {
        fn build(edges: &[(usize, usize, u32)]) -> Grid<u32> {
            let mut graph = Grid::<u32>::new(0);

            for &(from, to, weight) in edges {
                graph.at(from).at(to).commit(weight);
            }

            graph
        }

        let graph = build(&[(0, 1, 4), (1, 2, 0), (1_000_000, 3, 9)]);

        assert_eq!(graph.len(), 2);
        assert_eq!(graph[[1_000_000, 3]], 9);
    }

    #[test]
    fn prefix_accumulates() {
        let mut grid = Grid::<i32, 4>::new(0);

        let locator = grid.at(7);
        assert_eq!(locator.prefix(), [7]);

        let locator = locator.at(8);
        assert_eq!(locator.prefix(), [7, 8]);

        let locator = locator.at(9);
        assert_eq!(locator.prefix(), [7, 8, 9]);

        let cell = locator.at(10);
        assert_eq!(cell.coord(), [7, 8, 9, 10]);
    }

    #[test]
    fn indexing_does_not_allocate() {
        let mut grid = Grid::<i32, 3>::new(0);

        let _ = grid.at(1).at(2).at(3);

        assert!(grid.is_empty());
    }
}
