use std::borrow::Borrow;
use std::cmp;
use std::hash::{BuildHasher, Hash};
use std::mem;

use super::RawIter;
use crate::util::error::{CapacityOverflow, ReserveError};
use crate::util::ext::{OptionExtension, ResultExtension};

const MIN_ALLOCATED_CAP: usize = 2;

const GROWTH_FACTOR: usize = 2;

const LOAD_FACTOR_NUMERATOR: usize = 4;
const LOAD_FACTOR_DENOMINATOR: usize = 5;

pub(crate) type Bucket<T> = Option<T>;

/// An array of buckets using linear probing, storing each item in the first free bucket at or after
/// `hash % cap`.
///
/// The table keeps its load under 4/5, so once any memory is allocated at least one bucket is
/// empty and every probe sequence terminates. Removal shifts displaced items back instead of
/// leaving tombstones, which means an empty bucket always ends a probe sequence.
///
/// It is a logic error for an item to be modified in a way that changes its hash or equality while
/// it is in the table.
#[derive(Clone)]
pub(crate) struct RawTable<T, B> {
    pub(crate) arr: Box<[Bucket<T>]>,
    pub(crate) len: usize,
    pub(crate) hasher: B,
}

impl<T, B> RawTable<T, B> {
    pub(crate) fn with_hasher(hasher: B) -> RawTable<T, B> {
        RawTable {
            arr: Box::default(),
            len: 0,
            hasher,
        }
    }

    /// # Panics
    /// Panics if the buckets can't be allocated.
    pub(crate) fn with_cap_and_hasher(cap: usize, hasher: B) -> RawTable<T, B> {
        RawTable {
            arr: Self::alloc_buckets(cap).throw(),
            len: 0,
            hasher,
        }
    }

    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    pub(crate) fn cap(&self) -> usize {
        self.arr.len()
    }

    pub(crate) fn iter(&self) -> RawIter<'_, T> {
        self.into_iter()
    }

    /// Drops every item, keeping the allocated buckets.
    pub(crate) fn clear(&mut self) {
        self.arr.iter_mut().for_each(|bucket| *bucket = None);
        self.len = 0;
    }

    /// Allocates `cap` empty buckets, reporting failure instead of aborting.
    fn alloc_buckets(cap: usize) -> Result<Box<[Bucket<T>]>, ReserveError> {
        let mut buckets = Vec::new();
        buckets.try_reserve_exact(cap)?;
        buckets.resize_with(cap, || None);
        Ok(buckets.into_boxed_slice())
    }

    /// The number of items that fit in `cap` buckets without exceeding the load factor.
    const fn load_cap(cap: usize) -> usize {
        cap / LOAD_FACTOR_DENOMINATOR * LOAD_FACTOR_NUMERATOR
            + cap % LOAD_FACTOR_DENOMINATOR * LOAD_FACTOR_NUMERATOR / LOAD_FACTOR_DENOMINATOR
    }
}

impl<T: Hash + Eq, B: BuildHasher> RawTable<T, B> {
    /// Inserts `item` unless an equal item is already present, growing first if the table is at
    /// its load capacity. Returns true if the item was inserted.
    ///
    /// # Panics
    /// Panics if the table needs to grow and the new buckets can't be allocated.
    pub(crate) fn insert(&mut self, item: T) -> bool {
        if self.should_grow() {
            self.grow();
        }

        self.insert_within_cap(item)
    }

    /// Inserts `item` without checking the load. Callers must have made room already.
    fn insert_within_cap(&mut self, item: T) -> bool {
        // UNREACHABLE: Room has been made, so the capacity isn't 0.
        let index = self.find_index_for_key(&item).unreachable();

        // The bucket at index is either empty or contains an equal item, which is kept.
        match &self.arr[index] {
            Some(_) => false,
            None => {
                self.arr[index] = Some(item);
                self.len += 1;
                true
            },
        }
    }

    pub(crate) fn get<Q>(&self, key: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let index = self.find_index_for_key(key)?;
        self.arr[index].as_ref()
    }

    pub(crate) fn contains<Q>(&self, key: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.get(key).is_some()
    }

    /// Removes the item equal to `key`, returning it if it was present.
    pub(crate) fn remove<Q>(&mut self, key: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut hole = self.find_index_for_key(key)?;
        let removed = self.arr[hole].take()?;
        self.len -= 1;

        // UNCHECKED: find_index_for_key returned Some, so the cap is not 0.
        let cap = self.cap();
        let mut next = (hole + 1) % cap;

        // Walk the rest of the probe run. An item whose ideal bucket isn't between the hole and
        // its current bucket would become unreachable, so it moves into the hole.
        while let Some(item) = &self.arr[next] {
            // UNREACHABLE: The cap is not 0.
            let ideal = self.index_from_key(item).unreachable();
            let displacement = (next + cap - ideal) % cap;
            let hole_distance = (next + cap - hole) % cap;

            if displacement >= hole_distance {
                self.arr[hole] = self.arr[next].take();
                hole = next;
            }
            next = (next + 1) % cap;
        }

        Some(removed)
    }

    /// Keeps only the items for which `keep` returns true.
    pub(crate) fn retain<F: FnMut(&T) -> bool>(&mut self, mut keep: F) {
        let items: Vec<T> = self.arr.iter_mut().filter_map(Option::take).collect();
        self.len = 0;

        for item in items.into_iter().filter(|item| keep(item)) {
            self.insert_within_cap(item);
        }
    }

    /// Ensures that `extra` more items can be inserted without reallocating.
    pub(crate) fn try_reserve(&mut self, extra: usize) -> Result<(), ReserveError> {
        let required = self.len.checked_add(extra).ok_or(CapacityOverflow)?;
        let new_cap = required
            .checked_mul(LOAD_FACTOR_DENOMINATOR)
            .ok_or(CapacityOverflow)?
            .div_ceil(LOAD_FACTOR_NUMERATOR);

        if new_cap <= self.cap() {
            return Ok(());
        }

        self.realloc_with_cap(new_cap)
    }

    /// Determines whether the table's length has reached its load capacity, meaning that it should
    /// grow before inserting a new item.
    pub(crate) fn should_grow(&self) -> bool {
        self.len >= Self::load_cap(self.cap())
    }

    /// Grows the table by the growth factor.
    ///
    /// # Panics
    /// Panics if the capacity overflows or the new buckets can't be allocated.
    fn grow(&mut self) {
        let new_cap = self.cap()
            .checked_mul(GROWTH_FACTOR)
            .ok_or(ReserveError::from(CapacityOverflow))
            .throw();

        self.realloc_with_cap(cmp::max(new_cap, MIN_ALLOCATED_CAP)).throw()
    }

    /// Moves every item into `new_cap` fresh buckets. Shrinking below the current length isn't
    /// possible without dropping items, so it is ignored.
    fn realloc_with_cap(&mut self, new_cap: usize) -> Result<(), ReserveError> {
        if Self::load_cap(new_cap) < self.len {
            return Ok(());
        }

        // Allocate before touching the old buckets, so a failure leaves the table intact.
        let new_arr = Self::alloc_buckets(new_cap)?;
        let old_arr = mem::replace(&mut self.arr, new_arr);
        self.len = 0;

        for item in Vec::from(old_arr).into_iter().flatten() {
            self.insert_within_cap(item);
        }

        Ok(())
    }

    /// Calculates the ideal bucket for `hashable`, or None if the table has no buckets. Collisions
    /// aren't considered here, see [`RawTable::find_index_for_key`] for that.
    pub(crate) fn index_from_key<H: Hash + ?Sized>(&self, hashable: &H) -> Option<usize> {
        let hash = self.hasher.hash_one(hashable);
        hash.checked_rem(self.cap() as u64).map(|i| i as usize)
    }

    /// Finds the bucket that either holds an item equal to `key` or is the empty bucket where it
    /// would be inserted. Returns None if the table has no buckets.
    pub(crate) fn find_index_for_key<Q>(&self, key: &Q) -> Option<usize>
    where
        // Q is a borrowed form of T, where hashing and equality carry over the borrow.
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        let mut index = self.index_from_key(key)?;

        // Can't loop forever, the load factor keeps at least one bucket empty.
        while let Some(existing) = &self.arr[index]
            && existing.borrow() != key
        {
            index = (index + 1) % self.cap();
        }

        Some(index)
    }
}
