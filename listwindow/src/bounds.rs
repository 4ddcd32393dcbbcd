use alloc::vec::Vec;

use crate::size::ResolvedSize;
use crate::{Bounds, IndexError};

/// A lazily grown, append-only table of item bounds.
///
/// Entries are computed strictly in index order (each offset depends on its predecessor) and
/// memoized, so touching index `k` costs `O(k - len)` the first time and `O(1)` afterwards.
///
/// The table is never patched in place when its inputs change: the owner drops it and builds a
/// new one.
#[derive(Clone, Debug)]
pub struct CachedBounds<P = ()> {
    entries: Vec<Bounds>,
    item_count: usize,
    item_size: ResolvedSize<P>,
    item_props: P,
}

impl<P> CachedBounds<P> {
    pub fn new(item_count: usize, item_size: ResolvedSize<P>, item_props: P) -> Self {
        Self {
            entries: Vec::new(),
            item_count,
            item_size,
            item_props,
        }
    }

    pub fn item_count(&self) -> usize {
        self.item_count
    }

    /// Number of memoized entries.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// The memoized prefix, in index order.
    pub fn memoized(&self) -> &[Bounds] {
        &self.entries
    }

    pub fn last_memoized(&self) -> Option<Bounds> {
        self.entries.last().copied()
    }

    /// `Some(size)` when every item has the same size.
    pub fn constant_size(&self) -> Option<f64> {
        self.item_size.constant()
    }

    pub fn item_props(&self) -> &P {
        &self.item_props
    }

    pub fn get(&mut self, index: usize) -> Result<Bounds, IndexError> {
        self.check_index(index)?;
        self.grow_to(index);
        Ok(self.entries[index])
    }

    /// Seeds a known value for `index`.
    ///
    /// Entries before `index` are materialized first; memoized entries after it are dropped
    /// because their offsets were derived from the old value.
    pub fn set(&mut self, index: usize, bounds: Bounds) -> Result<(), IndexError> {
        self.check_index(index)?;
        if index > 0 {
            self.grow_to(index - 1);
        }
        self.entries.truncate(index);
        self.entries.push(bounds);
        Ok(())
    }

    fn check_index(&self, index: usize) -> Result<(), IndexError> {
        if index >= self.item_count {
            return Err(IndexError {
                index,
                count: self.item_count,
            });
        }
        Ok(())
    }

    /// Computes entries up to and including `index` (clamped to the last item).
    pub(crate) fn grow_to(&mut self, index: usize) {
        if self.item_count == 0 {
            return;
        }
        let index = index.min(self.item_count - 1);
        if index < self.entries.len() {
            return;
        }
        self.entries.reserve(index + 1 - self.entries.len());
        while self.entries.len() <= index {
            self.push_next();
        }
    }

    fn push_next(&mut self) {
        let n = self.entries.len();
        debug_assert!(n < self.item_count, "CachedBounds grown past item_count");
        let offset = self.entries.last().map_or(0.0, Bounds::end);
        let raw = self.item_size.size_of(n, &self.item_props);
        // `f64::max` maps NaN to 0.0 as well.
        let size = raw.max(0.0);
        if size != raw {
            lwarn!(index = n, size = raw, "item size function returned a negative or NaN size");
        }
        self.entries.push(Bounds { offset, size });
    }

    /// Index of the item covering `offset`: the first item whose end lies past it.
    ///
    /// Offsets before the first item map to `0`; offsets past the last item map to the last
    /// index. Requires a non-empty collection.
    pub(crate) fn index_at_offset(&mut self, offset: f64) -> usize {
        debug_assert!(self.item_count > 0, "index_at_offset on an empty collection");
        let offset = offset.max(0.0);
        while self.entries.len() < self.item_count
            && self.entries.last().is_none_or(|b| b.end() <= offset)
        {
            self.push_next();
        }
        let index = self.entries.partition_point(|b| b.end() <= offset);
        index.min(self.item_count - 1)
    }

    /// Index of the last item starting before `end`, never less than `start_index`.
    pub(crate) fn last_index_before(&mut self, start_index: usize, end: f64) -> usize {
        debug_assert!(start_index < self.item_count, "start_index out of bounds");
        self.grow_to(start_index);
        while self.entries.len() < self.item_count
            && self.entries.last().is_some_and(|b| b.offset < end)
        {
            self.push_next();
        }
        let starts_before = self.entries.partition_point(|b| b.offset < end);
        starts_before.saturating_sub(1).max(start_index)
    }
}
