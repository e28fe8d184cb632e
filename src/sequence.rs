//! The re-iterable sequence abstraction.
//!
//! A [`Sequence`] is a value that can hand out any number of independent
//! [`Cursor`]s. Every combinator in this crate takes sequences and returns a new
//! sequence without pulling anything; values are only computed when a cursor
//! obtained from the result is advanced.
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let evens_squared = vec![1, 2, 3, 4, 5, 6]
//!     .filter(|v, _| v % 2 == 0)
//!     .map(|v, _| v * v);
//!
//! assert_eq!(evens_squared.to_array(), vec![4, 16, 36]);
//! // a second traversal starts over from the source
//! assert_eq!(evens_squared.sum(), 56);
//! ```

use std::rc::Rc;

use crate::{
    aggregate,
    combinators::{
        Chain, Entries, Filter, FilterMap, FlatMap, Map, TakeWhile, Zip, chain, entries, filter,
        filter_map, flat_map, map, take_while, zip,
    },
    cursor::{BoxCursor, Cursor},
    iter::CursorIter,
};

/// A lazily produced, possibly unbounded, ordered source of values.
///
/// `cursor` may be called any number of times. Whether two cursors observe the
/// same values is a property of the source: the sources in this crate are
/// re-iterable except [`single_use`](crate::single_use). Nothing is cached.
pub trait Sequence {
    /// Type of the values produced
    type Item;

    /// Cursor handed out by [`Sequence::cursor`]
    type Cursor: Cursor<Item = Self::Item>;

    /// Obtain a fresh cursor positioned before the first value.
    fn cursor(&self) -> Self::Cursor;

    /// Consume the sequence into a cursor.
    ///
    /// Behaves like [`Sequence::cursor`]; owned sources override it to avoid a copy.
    fn into_cursor(self) -> Self::Cursor
    where
        Self: Sized,
    {
        self.cursor()
    }

    /// Traverse with a std iterator.
    fn to_iter(&self) -> CursorIter<Self::Cursor> {
        CursorIter::new(self.cursor())
    }

    /// Pair every value with its 0-based position. See [`entries`].
    fn entries(self) -> Entries<Self>
    where
        Self: Sized,
    {
        entries(self)
    }

    /// Lazily transform every value. See [`map`].
    fn map<T, F>(self, f: F) -> Map<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item, usize) -> T + Clone,
    {
        map(self, f)
    }

    /// Map every value to a sequence and concatenate the results. See [`flat_map`].
    fn flat_map<T, F>(self, f: F) -> FlatMap<Self, F>
    where
        Self: Sized,
        T: Sequence,
        F: FnMut(Self::Item, usize) -> T + Clone,
    {
        flat_map(self, f)
    }

    /// Keep the present results of `f`. See [`filter_map`].
    fn filter_map<T, F>(self, f: F) -> FilterMap<Self, F>
    where
        Self: Sized,
        F: FnMut(Self::Item, usize) -> Option<T> + Clone,
    {
        filter_map(self, f)
    }

    /// Keep the values accepted by `f`. See [`filter`].
    fn filter<F>(self, f: F) -> Filter<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item, usize) -> bool + Clone,
    {
        filter(self, f)
    }

    /// Yield values until `f` first rejects one. See [`take_while`].
    fn take_while<F>(self, f: F) -> TakeWhile<Self, F>
    where
        Self: Sized,
        F: FnMut(&Self::Item, usize) -> bool + Clone,
    {
        take_while(self, f)
    }

    /// Yield all of `self`, then all of `other`. See [`chain`].
    fn chain<S>(self, other: S) -> Chain<Self, S>
    where
        Self: Sized,
        S: Sequence<Item = Self::Item>,
    {
        chain(self, other)
    }

    /// Pair up values with those of `other`. See [`zip`].
    fn zip<S>(self, other: S) -> Zip<Self, S>
    where
        Self: Sized,
        S: Sequence,
    {
        zip(self, other)
    }

    /// Erase the concrete sequence type.
    fn boxed<'a>(self) -> BoxSequence<'a, Self::Item>
    where
        Self: Sized + 'a,
        Self::Cursor: 'a,
    {
        BoxSequence(Rc::new(move || self.cursor().boxed()))
    }

    /// Left fold over all values. See [`fold`](aggregate::fold).
    fn fold<A, F>(&self, f: F, init: A) -> A
    where
        Self: Sized,
        F: FnMut(A, Self::Item, usize) -> A,
    {
        aggregate::fold(self, f, init)
    }

    /// Fold seeded with the first value. See [`reduce`](aggregate::reduce).
    fn reduce<F>(&self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(Self::Item, Self::Item, usize) -> Self::Item,
    {
        aggregate::reduce(self, f)
    }

    /// The final value, if any. See [`last`](aggregate::last).
    ///
    /// Named apart from `last` so that `slice::last` stays reachable on
    /// `Vec` and arrays with this trait in scope.
    fn last_value(&self) -> Option<Self::Item>
    where
        Self: Sized,
    {
        aggregate::last(self)
    }

    /// First value accepted by `f`. See [`find`](aggregate::find).
    fn find<F>(&self, f: F) -> Option<Self::Item>
    where
        Self: Sized,
        F: FnMut(&Self::Item, usize) -> bool,
    {
        aggregate::find(self, f)
    }

    /// Whether any value is accepted by `f`.
    fn some<F>(&self, f: F) -> bool
    where
        Self: Sized,
        F: FnMut(&Self::Item, usize) -> bool,
    {
        aggregate::some(self, f)
    }

    /// Whether every value is accepted by `f`.
    fn every<F>(&self, f: F) -> bool
    where
        Self: Sized,
        F: FnMut(&Self::Item, usize) -> bool,
    {
        aggregate::every(self, f)
    }

    /// Drain all values for side effects.
    fn for_each<F>(&self, f: F)
    where
        Self: Sized,
        F: FnMut(Self::Item, usize),
    {
        aggregate::for_each(self, f)
    }

    /// Sum of all values; the additive identity when empty.
    fn sum(&self) -> Self::Item
    where
        Self: Sized,
        Self::Item: std::iter::Sum,
    {
        aggregate::sum(self)
    }

    /// Smallest value, or the type's upper identity when empty.
    /// See [`Extremum`](aggregate::Extremum).
    fn min(&self) -> Self::Item
    where
        Self: Sized,
        Self::Item: aggregate::Extremum,
    {
        aggregate::min(self)
    }

    /// Largest value, or the type's lower identity when empty.
    fn max(&self) -> Self::Item
    where
        Self: Sized,
        Self::Item: aggregate::Extremum,
    {
        aggregate::max(self)
    }

    /// Collect all values in order.
    fn to_array(&self) -> Vec<Self::Item>
    where
        Self: Sized,
    {
        aggregate::to_array(self)
    }
}

impl<S> Sequence for &S
where
    S: Sequence,
{
    type Item = S::Item;
    type Cursor = S::Cursor;

    fn cursor(&self) -> Self::Cursor {
        (**self).cursor()
    }
}

/// A type-erased sequence. Clones share the underlying sequence.
///
/// Useful for concatenating sequences of different concrete types:
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let parts = vec![
///     vec![1, 2].boxed(),
///     repeat(7, Some(2)).boxed(),
///     empty().boxed(),
/// ];
/// assert_eq!(concat(parts).to_array(), vec![1, 2, 7, 7]);
/// ```
pub struct BoxSequence<'a, T>(Rc<dyn Fn() -> BoxCursor<'a, T> + 'a>);

impl<T> Clone for BoxSequence<'_, T> {
    fn clone(&self) -> Self {
        BoxSequence(Rc::clone(&self.0))
    }
}

impl<'a, T> Sequence for BoxSequence<'a, T> {
    type Item = T;
    type Cursor = BoxCursor<'a, T>;

    fn cursor(&self) -> Self::Cursor {
        (self.0)()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::step::Step;

    #[test]
    fn test_cursors_are_independent() {
        let source = vec![1, 2, 3];
        let mut a = source.cursor();
        let mut b = source.cursor();

        assert_eq!(a.next(), Step::Yielded(1));
        assert_eq!(a.next(), Step::Yielded(2));
        assert_eq!(b.next(), Step::Yielded(1));
        assert_eq!(a.next(), Step::Yielded(3));
        assert!(a.next().is_complete());
        assert_eq!(b.next(), Step::Yielded(2));
    }

    #[test]
    fn test_reference_is_a_sequence() {
        let source = vec!["a", "b"];
        let shared = &source;
        assert_eq!(shared.to_array(), vec!["a", "b"]);
        assert_eq!(map(shared, |s, i| format!("{i}{s}")).to_array(), vec!["0a", "1b"]);
        // still usable afterwards
        assert_eq!(source.len(), 2);
    }

    #[test]
    fn test_boxed_sequence_reiterates() {
        let boxed = vec![3, 4].map(|v, _| v + 1).boxed();
        assert_eq!(boxed.to_array(), vec![4, 5]);
        assert_eq!(boxed.to_array(), vec![4, 5]);
    }
}
