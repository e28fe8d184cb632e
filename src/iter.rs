//! Bridges between cursors and [`std::iter::Iterator`].
//!
//! [`CursorIter`] lets any cursor drive `for` loops and std adapters.
//! [`IterCursor`] goes the other way and is the cursor behind
//! [`iterable`](crate::iterable) and [`single_use`](crate::single_use).
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let squares = map(vec![1, 2, 3], |v, _| v * v);
//! let mut total = 0;
//! for v in squares.to_iter() {
//!     total += v;
//! }
//! assert_eq!(total, 14);
//! ```

use std::iter::FusedIterator;

use crate::{cursor::Cursor, step::Step};

/// Iterator adapter for a [`Cursor`].
///
/// Both `CursorIter` and `&mut CursorIter` implement `Iterator`, so a partially
/// drained adapter can be resumed, or unwrapped with [`CursorIter::into_inner`].
pub struct CursorIter<C> {
    cursor: Option<C>,
}

impl<C> CursorIter<C>
where
    C: Cursor,
{
    /// Wrap a cursor.
    pub fn new(cursor: C) -> Self {
        Self { cursor: Some(cursor) }
    }

    /// Check whether the underlying cursor has reported exhaustion.
    pub fn is_complete(&self) -> bool {
        self.cursor.is_none()
    }

    /// Recover the cursor, or `None` if it was already exhausted and dropped.
    pub fn into_inner(self) -> Option<C> {
        self.cursor
    }
}

impl<C> Iterator for CursorIter<C>
where
    C: Cursor,
{
    type Item = C::Item;

    fn next(&mut self) -> Option<Self::Item> {
        match self.cursor.as_mut()?.next() {
            Step::Yielded(v) => Some(v),
            Step::Complete(()) => {
                self.cursor = None;
                None
            }
        }
    }
}

impl<C> FusedIterator for CursorIter<C> where C: Cursor {}

/// Cursor over a std iterator. Drops the iterator the first time it returns `None`.
pub struct IterCursor<I> {
    iter: Option<I>,
}

impl<I> IterCursor<I>
where
    I: Iterator,
{
    /// Wrap a std iterator.
    pub fn new(iter: I) -> Self {
        Self { iter: Some(iter) }
    }
}

impl<I> Cursor for IterCursor<I>
where
    I: Iterator,
{
    type Item = I::Item;

    fn next(&mut self) -> Step<Self::Item> {
        let Some(iter) = self.iter.as_mut() else {
            return Step::done();
        };
        match iter.next() {
            Some(v) => Step::Yielded(v),
            None => {
                self.iter = None;
                Step::done()
            }
        }
    }
}
