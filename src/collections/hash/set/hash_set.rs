use std::borrow::Borrow;
use std::fmt::{self, Debug, Display, Formatter};
use std::hash::{BuildHasher, Hash, RandomState};
use std::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Sub, SubAssign};

use super::Iter;
use crate::collections::hash::table::RawTable;
use crate::collections::traits::set::Set;
use crate::util::error::ReserveError;
use crate::util::ext::ResultExtension;
use crate::util::fmt::{DebugWith, write_set};

/// A set of unique items, which relies on the items implementing [`Hash`] and [`Eq`].
///
/// Items are stored in an open-addressing table with linear probing, kept under a load factor of
/// 4/5. Inserting an item equal to one already present leaves the set unchanged.
///
/// The set operations ([`union`](Set::union), [`intersection`](Set::intersection),
/// [`difference`](Set::difference), [`symmetric_difference`](Set::symmetric_difference)) come from
/// the [`Set`] trait and are lazy. To get a new, independently owned set instead, use the operators
/// on references: `&a | &b`, `&a & &b`, `&a - &b` and `&a ^ &b`.
///
/// The iteration order is unspecified. With the default hasher it changes between runs, so nothing
/// should rely on it.
///
/// It is a logic error for an item to be modified in a way that changes its hash or equality while
/// it is in the set. Because of this, HashSet's API never provides mutable access to its items.
///
/// # Time Complexity
/// For this analysis of time complexity, variables are defined as follows:
/// - `n`: The number of items in the HashSet.
/// - `m`: The number of items in the other HashSet.
///
/// | Method | Complexity |
/// |-|-|
/// | `len` | `O(1)` |
/// | `insert` | `O(1)`*, `O(n)`** |
/// | `remove` | `O(1)`* |
/// | `contains` | `O(1)`* |
/// | `is_subset` | `O(n)`* |
/// | `&a \| &b` | `O(n + m)`* |
/// | `&a & &b`, `&a - &b` | `O(n)`* |
/// | `to_vec` | `O(n)` |
///
/// \* Hash collisions add the time taken to probe past the colliding items. The load factor keeps
/// this short.
///
/// \** If the HashSet is at its load capacity, `insert` reallocates and rehashes every item.
pub struct HashSet<T: Hash + Eq, B: BuildHasher = RandomState> {
    pub(crate) inner: RawTable<T, B>,
}

impl<T: Hash + Eq, B: BuildHasher + Default> HashSet<T, B> {
    /// Creates a new, empty HashSet with capacity 0 and the default value for `B`. Memory will be
    /// allocated on the first insertion.
    pub fn new() -> HashSet<T, B> {
        HashSet::with_hasher(B::default())
    }

    /// Creates a new, empty HashSet with `cap` buckets, using the default hasher.
    ///
    /// # Panics
    /// Panics if the buckets can't be allocated.
    pub fn with_cap(cap: usize) -> HashSet<T, B> {
        HashSet::with_cap_and_hasher(cap, B::default())
    }
}

impl<T: Hash + Eq, B: BuildHasher> HashSet<T, B> {
    /// Creates a new, empty HashSet with capacity 0 and the provided `hasher`.
    pub fn with_hasher(hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: RawTable::with_hasher(hasher),
        }
    }

    /// Creates a new, empty HashSet with `cap` buckets and the provided `hasher`.
    ///
    /// # Panics
    /// Panics if the buckets can't be allocated.
    pub fn with_cap_and_hasher(cap: usize, hasher: B) -> HashSet<T, B> {
        HashSet {
            inner: RawTable::with_cap_and_hasher(cap, hasher),
        }
    }

    /// Returns the number of items in the HashSet.
    pub const fn len(&self) -> usize {
        self.inner.len()
    }

    /// Returns true if the HashSet contains no items.
    pub const fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the number of buckets currently allocated. Only 4/5 of them are filled before the
    /// HashSet grows.
    pub fn cap(&self) -> usize {
        self.inner.cap()
    }

    /// Returns a reference to the HashSet's hasher.
    pub const fn hasher(&self) -> &B {
        &self.inner.hasher
    }

    /// Adds `item` to the HashSet, returning true if it wasn't already present. If an equal item is
    /// already present, the set is left unchanged and `item` is dropped.
    ///
    /// # Panics
    /// Panics if the HashSet needs to grow and the new buckets can't be allocated.
    pub fn insert(&mut self, item: T) -> bool {
        self.inner.insert(item)
    }

    /// Removes the item equal to `item` from the HashSet, returning true if it was present.
    pub fn remove<Q>(&mut self, item: &Q) -> bool
    where
        // Q is any borrowed form of T, where hashing and equality carry over the borrow.
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(item).is_some()
    }

    /// Removes the item equal to `item` from the HashSet and returns it, if it was present.
    pub fn take<Q>(&mut self, item: &Q) -> Option<T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.remove(item)
    }

    /// Returns true if the HashSet contains an item equal to `item`.
    pub fn contains<Q>(&self, item: &Q) -> bool
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.contains(item)
    }

    /// Returns a reference to the stored item equal to `item`, if there is one.
    pub fn get<Q>(&self, item: &Q) -> Option<&T>
    where
        T: Borrow<Q>,
        Q: Hash + Eq + ?Sized,
    {
        self.inner.get(item)
    }

    /// Removes every item, keeping the allocated capacity.
    pub fn clear(&mut self) {
        self.inner.clear()
    }

    /// Keeps only the items for which `keep` returns true.
    pub fn retain<F: FnMut(&T) -> bool>(&mut self, keep: F) {
        self.inner.retain(keep)
    }

    /// Increases the capacity of the HashSet so that `extra` more items can be inserted without
    /// reallocating.
    ///
    /// # Panics
    /// Panics if the new capacity overflows or the buckets can't be allocated.
    pub fn reserve(&mut self, extra: usize) {
        self.try_reserve(extra).throw()
    }

    /// Tries to increase the capacity of the HashSet so that `extra` more items can be inserted
    /// without reallocating. On failure, the HashSet is left unchanged.
    pub fn try_reserve(&mut self, extra: usize) -> Result<(), ReserveError> {
        self.inner.try_reserve(extra)
    }

    /// Returns an iterator over all items in the HashSet, as references.
    pub fn iter(&self) -> Iter<'_, T> {
        self.into_iter()
    }

    /// Clones every item into a [`Vec`]. The order is unspecified.
    pub fn to_vec(&self) -> Vec<T>
    where
        T: Clone,
    {
        self.iter().cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Set<T> for HashSet<T, B> {
    type Iter<'a> = Iter<'a, T> where Self: 'a, T: 'a;

    fn len(&self) -> usize {
        HashSet::len(self)
    }

    fn contains(&self, item: &T) -> bool {
        HashSet::contains(self, item)
    }

    fn iter<'a>(&'a self) -> Self::Iter<'a> {
        HashSet::iter(self)
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default> Default for HashSet<T, B> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Clone> Clone for HashSet<T, B> {
    fn clone(&self) -> Self {
        HashSet {
            inner: self.inner.clone(),
        }
    }
}

impl<T: Hash + Eq, B: BuildHasher> PartialEq for HashSet<T, B> {
    /// Two HashSets are equal if they contain equal items, regardless of capacity or the order in
    /// which the items are stored.
    fn eq(&self, other: &Self) -> bool {
        self.len() == other.len() && self.is_subset(other)
    }
}

impl<T: Hash + Eq, B: BuildHasher> Eq for HashSet<T, B> {}

impl<T: Hash + Eq, B: BuildHasher + Default> FromIterator<T> for HashSet<T, B> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut set = HashSet::new();
        set.extend(iter);
        set
    }
}

impl<T: Hash + Eq, B: BuildHasher + Default, const N: usize> From<[T; N]> for HashSet<T, B> {
    fn from(value: [T; N]) -> Self {
        value.into_iter().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> Extend<T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        let iter = iter.into_iter();
        // Duplicates may make this an overestimate, which only costs some unused buckets.
        self.reserve(iter.size_hint().0);

        for item in iter {
            self.insert(item);
        }
    }
}

impl<'a, T: Hash + Eq + Copy + 'a, B: BuildHasher> Extend<&'a T> for HashSet<T, B> {
    fn extend<I: IntoIterator<Item = &'a T>>(&mut self, iter: I) {
        self.extend(iter.into_iter().copied())
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitOr for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    /// Returns a new set with the items of both `self` and `rhs`. (`self ∪ rhs`)
    fn bitor(self, rhs: Self) -> Self::Output {
        self.union(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitOrAssign for HashSet<T, B> {
    /// Moves every item of `rhs` into `self`.
    fn bitor_assign(&mut self, rhs: Self) {
        self.extend(rhs)
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitAnd for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    /// Returns a new set with the items that are in both `self` and `rhs`. (`self ∩ rhs`)
    fn bitand(self, rhs: Self) -> Self::Output {
        self.intersection(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitAndAssign for HashSet<T, B> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.retain(|item| rhs.contains(item))
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> BitXor for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    /// Returns a new set with the items that are in `self` or `rhs` but not both. (`self △ rhs`)
    fn bitxor(self, rhs: Self) -> Self::Output {
        self.symmetric_difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> BitXorAssign for HashSet<T, B> {
    fn bitxor_assign(&mut self, rhs: Self) {
        for item in rhs {
            if !self.remove(&item) {
                self.insert(item);
            }
        }
    }
}

impl<T: Hash + Eq + Clone, B: BuildHasher + Default> Sub for &HashSet<T, B> {
    type Output = HashSet<T, B>;

    /// Returns a new set with the items that are in `self` but not `rhs`. (`self \ rhs`)
    fn sub(self, rhs: Self) -> Self::Output {
        self.difference(rhs).cloned().collect()
    }
}

impl<T: Hash + Eq, B: BuildHasher> SubAssign for HashSet<T, B> {
    fn sub_assign(&mut self, rhs: Self) {
        for item in rhs {
            self.remove(&item);
        }
    }
}

impl<T: Hash + Eq + Debug, B: BuildHasher + Debug> Debug for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.debug_struct("HashSet")
            .field("contents", &DebugWith(|f: &mut Formatter<'_>| {
                write_set(f, self.iter(), |f, i| write!(f, "{i:?}"))
            }))
            .field("len", &self.len())
            .field("cap", &self.cap())
            .field("hasher", self.hasher())
            .finish()
    }
}

impl<T: Hash + Eq + Display, B: BuildHasher> Display for HashSet<T, B> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write_set(f, self.iter(), |f, i| write!(f, "{i}"))
    }
}
