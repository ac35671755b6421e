//! Compile-time dimensionality of a [`Grid`](super::Grid).

use std::marker::PhantomData;

use crate::{
    access::{CellAccessor, Locator},
    error::DimensionMismatch,
};

use super::Grid;

/// A coordinate of a `D`-dimensional grid.
pub type Coord<const D: usize> = [usize; D];

/// Marker for the dimensionality `D` of a grid.
///
/// [`Dimension`] is implemented for `Dim<2>` through `Dim<16>`.
pub struct Dim<const D: usize>;

/// Exactly one coordinate component remains to be supplied.
pub struct Last;

/// More than one coordinate component remains, `R` describes the rest.
pub struct Next<R>(PhantomData<R>);

mod sealed {
    pub trait Sealed {}

    impl<const D: usize> Sealed for super::Dim<D> {}
    impl Sealed for super::Last {}
    impl<R> Sealed for super::Next<R> {}
}

/// The number of chain steps still to be taken after a coordinate component
/// has been supplied, encoded as a type.
///
/// `Output` is what supplying the next component produces: another
/// [`Locator`] while components remain, the [`CellAccessor`] after the last.
pub trait Remaining: sealed::Sealed {
    const COUNT: usize;

    type Output<'g, T, const D: usize>
    where
        T: 'g;

    #[doc(hidden)]
    fn step<'g, T: Clone, const D: usize>(
        grid: &'g mut Grid<T, D>,
        coord: Coord<D>,
        filled: usize,
    ) -> Self::Output<'g, T, D>;
}

impl Remaining for Last {
    const COUNT: usize = 1;

    type Output<'g, T, const D: usize> = CellAccessor<'g, T, D>
    where
        T: 'g;

    #[inline]
    fn step<'g, T: Clone, const D: usize>(
        grid: &'g mut Grid<T, D>,
        coord: Coord<D>,
        _filled: usize,
    ) -> Self::Output<'g, T, D> {
        CellAccessor::new(grid, coord)
    }
}

impl<R: Remaining> Remaining for Next<R> {
    const COUNT: usize = R::COUNT + 1;

    type Output<'g, T, const D: usize> = Locator<'g, T, R, D>
    where
        T: 'g;

    #[inline]
    fn step<'g, T: Clone, const D: usize>(
        grid: &'g mut Grid<T, D>,
        coord: Coord<D>,
        filled: usize,
    ) -> Self::Output<'g, T, D> {
        Locator::new(grid, coord, filled)
    }
}

/// A supported grid dimensionality.
///
/// `Chain` is what remains to be indexed after the first component.
pub trait Dimension: sealed::Sealed {
    type Chain: Remaining;
}

impl Dimension for Dim<2> {
    type Chain = Last;
}

macro_rules! impl_dimension {
    ($($prev:literal => $dim:literal),* $(,)?) => {
        $(
            impl Dimension for Dim<$dim> {
                type Chain = Next<<Dim<$prev> as Dimension>::Chain>;
            }
        )*
    };
}

impl_dimension! {
    2 => 3,
    3 => 4,
    4 => 5,
    5 => 6,
    6 => 7,
    7 => 8,
    8 => 9,
    9 => 10,
    10 => 11,
    11 => 12,
    12 => 13,
    13 => 14,
    14 => 15,
    15 => 16,
}

/// Converts a coordinate of runtime length into a [`Coord`].
#[inline]
pub fn coord_from_slice<const D: usize>(
    slice: &[usize],
) -> Result<Coord<D>, DimensionMismatch> {
    <Coord<D>>::try_from(slice).map_err(|_| DimensionMismatch::new(D, slice.len()))
}
