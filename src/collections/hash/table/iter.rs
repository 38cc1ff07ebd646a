use std::iter::FusedIterator;
use std::{slice, vec};

use super::{Bucket, RawTable};

impl<T, B> IntoIterator for RawTable<T, B> {
    type Item = T;

    type IntoIter = RawIntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        RawIntoIter {
            len: self.len,
            inner: Vec::from(self.arr).into_iter(),
        }
    }
}

/// Owned iteration over the occupied buckets of a [`RawTable`], in bucket order.
pub(crate) struct RawIntoIter<T> {
    pub(crate) inner: vec::IntoIter<Bucket<T>>,
    pub(crate) len: usize,
}

impl<T> Iterator for RawIntoIter<T> {
    type Item = T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.find_map(|bucket| bucket)?;
        self.len -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for RawIntoIter<T> {}

impl<T> FusedIterator for RawIntoIter<T> {}

impl<'a, T, B> IntoIterator for &'a RawTable<T, B> {
    type Item = &'a T;

    type IntoIter = RawIter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        RawIter {
            len: self.len,
            inner: self.arr.iter(),
        }
    }
}

/// Borrowed iteration over the occupied buckets of a [`RawTable`], in bucket order.
pub(crate) struct RawIter<'a, T> {
    pub(crate) inner: slice::Iter<'a, Bucket<T>>,
    pub(crate) len: usize,
}

impl<'a, T> Iterator for RawIter<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.inner.find_map(Option::as_ref)?;
        self.len -= 1;
        Some(item)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.len, Some(self.len))
    }
}

impl<T> ExactSizeIterator for RawIter<'_, T> {}

impl<T> FusedIterator for RawIter<'_, T> {}

impl<T> Clone for RawIter<'_, T> {
    fn clone(&self) -> Self {
        RawIter {
            inner: self.inner.clone(),
            len: self.len,
        }
    }
}
