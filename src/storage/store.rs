use std::collections::BTreeMap;

use crate::grid::Coord;

use super::{IntoIter, Iter, IterMut};

/// Ordered backing store of a [`Grid`](crate::grid::Grid).
///
/// Entries are keyed by coordinate and ordered lexicographically.
/// A value equal to the default is never written, so every entry
/// represents a cell that differs from the default.
#[derive(Clone)]
pub struct EntryStore<T, const D: usize> {
    entries: BTreeMap<Coord<D>, T>,
    default: T,
}

impl<T, const D: usize> EntryStore<T, D> {
    #[inline]
    pub const fn new(default: T) -> Self {
        Self {
            entries: BTreeMap::new(),
            default,
        }
    }

    /// Returns the value implicitly held by every absent coordinate.
    #[inline]
    pub fn default_value(&self) -> &T {
        &self.default
    }

    /// Returns the number of stored entries.
    #[inline]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[inline]
    pub fn contains(&self, coord: &Coord<D>) -> bool {
        self.entries.contains_key(coord)
    }

    /// Returns the stored value at `coord`, or the default if there is none.
    #[inline]
    pub fn get(&self, coord: &Coord<D>) -> &T {
        self.entries.get(coord).unwrap_or(&self.default)
    }

    /// Returns the stored entry at `coord` without falling back to the default.
    #[inline]
    pub fn get_stored(&self, coord: &Coord<D>) -> Option<&T> {
        self.entries.get(coord)
    }

    #[inline]
    pub fn first(&self) -> Option<(Coord<D>, &T)> {
        self.entries
            .first_key_value()
            .map(|(&coord, value)| (coord, value))
    }

    #[inline]
    pub fn last(&self) -> Option<(Coord<D>, &T)> {
        self.entries
            .last_key_value()
            .map(|(&coord, value)| (coord, value))
    }

    /// Removes the entry at `coord`, returning the stored value.
    #[inline]
    pub fn remove(&mut self, coord: &Coord<D>) -> Option<T> {
        let removed = self.entries.remove(coord);

        #[cfg(feature = "tracing")]
        if removed.is_some() {
            tracing::trace!(?coord, "retracted entry");
        }

        removed
    }

    #[inline]
    pub fn clear(&mut self) {
        #[cfg(feature = "tracing")]
        tracing::debug!(entries = self.entries.len(), "clearing store");

        self.entries.clear();
    }

    #[inline]
    pub fn iter(&self) -> Iter<'_, T, D> {
        Iter::new(self.entries.iter())
    }

    /// Iterates entries with mutable access to their values.
    ///
    /// Writing the default through this iterator does not retract the entry,
    /// see [`EntryStore::prune`].
    #[inline]
    pub fn iter_mut(&mut self) -> IterMut<'_, T, D> {
        IterMut::new(self.entries.iter_mut())
    }
}

impl<T: PartialEq, const D: usize> EntryStore<T, D> {
    /// Iterates the entries whose value differs from the default.
    #[inline]
    fn live(&self) -> impl Iterator<Item = (&Coord<D>, &T)> + '_ {
        self.entries
            .iter()
            .filter(move |(_, value)| **value != self.default)
    }
}

/// Stores are equal when they read the same at every coordinate.
impl<T: PartialEq, const D: usize> PartialEq for EntryStore<T, D> {
    fn eq(&self, other: &Self) -> bool {
        self.default == other.default && self.live().eq(other.live())
    }
}

impl<T: Eq, const D: usize> Eq for EntryStore<T, D> {}

impl<T, const D: usize> IntoIterator for EntryStore<T, D> {
    type Item = (Coord<D>, T);
    type IntoIter = IntoIter<T, D>;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        IntoIter::new(self.entries.into_iter())
    }
}

impl<T: PartialEq, const D: usize> EntryStore<T, D> {
    /// Writes `value` at `coord`, eliding the default.
    ///
    /// A default value erases the entry if one exists and is a no-op otherwise,
    /// any other value is inserted or overwrites the existing entry.
    /// Returns the previously stored value.
    #[inline]
    pub fn commit(&mut self, coord: Coord<D>, value: T) -> Option<T> {
        if value == self.default {
            return self.remove(&coord);
        }

        #[cfg(feature = "tracing")]
        tracing::trace!(?coord, "upserted entry");

        self.entries.insert(coord, value)
    }

    /// Removes every entry whose value equals the default.
    ///
    /// Returns the number of entries removed.
    pub fn prune(&mut self) -> usize {
        let before = self.entries.len();
        let default = &self.default;
        self.entries.retain(|_, value| *value != *default);
        let pruned = before - self.entries.len();

        #[cfg(feature = "tracing")]
        if pruned > 0 {
            tracing::debug!(pruned, "pruned default entries");
        }

        pruned
    }
}
