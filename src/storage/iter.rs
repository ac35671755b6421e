use std::{collections::btree_map, iter::FusedIterator};

use crate::grid::Coord;

macro_rules! impl_entry_iter {
    (
        $iter:ident<$($lt:lifetime,)? T>,
        $inner:ty,
        $item:ty,
        |$coord:pat_param, $value:ident| $map:expr
    ) => {
        impl<$($lt,)? T, const D: usize> $iter<$($lt,)? T, D> {
            #[inline]
            pub(crate) fn new(inner: $inner) -> Self {
                Self { inner }
            }
        }

        impl<$($lt,)? T, const D: usize> Iterator for $iter<$($lt,)? T, D> {
            type Item = $item;

            #[inline]
            fn next(&mut self) -> Option<Self::Item> {
                self.inner.next().map(|($coord, $value)| $map)
            }

            #[inline]
            fn size_hint(&self) -> (usize, Option<usize>) {
                self.inner.size_hint()
            }
        }

        impl<$($lt,)? T, const D: usize> DoubleEndedIterator for $iter<$($lt,)? T, D> {
            #[inline]
            fn next_back(&mut self) -> Option<Self::Item> {
                self.inner.next_back().map(|($coord, $value)| $map)
            }
        }

        impl<$($lt,)? T, const D: usize> ExactSizeIterator for $iter<$($lt,)? T, D> {
            #[inline]
            fn len(&self) -> usize {
                self.inner.len()
            }
        }

        impl<$($lt,)? T, const D: usize> FusedIterator for $iter<$($lt,)? T, D> {}
    };
}

/// Read-only iterator over the entries of a grid, in ascending coordinate order.
pub struct Iter<'a, T, const D: usize> {
    inner: btree_map::Iter<'a, Coord<D>, T>,
}

impl<'a, T, const D: usize> Clone for Iter<'a, T, D> {
    #[inline]
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl_entry_iter!(
    Iter<'a, T>,
    btree_map::Iter<'a, Coord<D>, T>,
    (Coord<D>, &'a T),
    |&coord, value| (coord, value)
);

/// Iterator over the entries of a grid with mutable access to the stored values.
///
/// Changes are visible in the grid immediately. Setting a value to the
/// default keeps the entry in place until the grid is pruned.
pub struct IterMut<'a, T, const D: usize> {
    inner: btree_map::IterMut<'a, Coord<D>, T>,
}

impl_entry_iter!(
    IterMut<'a, T>,
    btree_map::IterMut<'a, Coord<D>, T>,
    (Coord<D>, &'a mut T),
    |&coord, value| (coord, value)
);

/// Owning iterator over the entries of a grid.
pub struct IntoIter<T, const D: usize> {
    inner: btree_map::IntoIter<Coord<D>, T>,
}

impl_entry_iter!(
    IntoIter<T>,
    btree_map::IntoIter<Coord<D>, T>,
    (Coord<D>, T),
    |coord, value| (coord, value)
);
