use super::entries::EntriesCursor;
use crate::{Cursor, Sequence, Step};

/// Yields the present results of a projection.
///
/// Equivalent to flat-mapping over a zero-or-one element `Option`, without
/// requiring the projected type to be `Clone`.
#[derive(Debug, Clone)]
pub struct FilterMap<S, F> {
    source: S,
    f: F,
}

/// Create a sequence of the present results of `f(value, index)`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let parsed = filter_map(vec!["1", "x", "3"], |s, _| s.parse::<u8>().ok());
/// assert_eq!(parsed.to_array(), vec![1, 3]);
/// ```
pub fn filter_map<S, T, F>(input: S, f: F) -> FilterMap<S, F>
where
    S: Sequence,
    F: FnMut(S::Item, usize) -> Option<T> + Clone,
{
    FilterMap { source: input, f }
}

impl<S, T, F> Sequence for FilterMap<S, F>
where
    S: Sequence,
    F: FnMut(S::Item, usize) -> Option<T> + Clone,
{
    type Item = T;
    type Cursor = FilterMapCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        FilterMapCursor {
            entries: EntriesCursor::new(self.source.cursor()),
            f: self.f.clone(),
        }
    }

    fn into_cursor(self) -> Self::Cursor {
        FilterMapCursor {
            entries: EntriesCursor::new(self.source.into_cursor()),
            f: self.f,
        }
    }
}

pub struct FilterMapCursor<C, F> {
    entries: EntriesCursor<C>,
    f: F,
}

impl<C, T, F> Cursor for FilterMapCursor<C, F>
where
    C: Cursor,
    F: FnMut(C::Item, usize) -> Option<T>,
{
    type Item = T;

    fn next(&mut self) -> Step<T> {
        while let Step::Yielded((index, v)) = self.entries.next() {
            if let Some(out) = (self.f)(v, index) {
                return Step::Yielded(out);
            }
        }
        Step::done()
    }
}

/// Yields only the values accepted by a predicate.
#[derive(Debug, Clone)]
pub struct Filter<S, F> {
    source: S,
    f: F,
}

/// Create a sequence of the values of `input` for which `f(&value, index)` holds.
///
/// Relative order is preserved. `index` is the position in `input`, not in the
/// filtered output.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let evens = filter(vec![1, 2, 3, 4], |v, _| v % 2 == 0);
/// assert_eq!(evens.to_array(), vec![2, 4]);
/// ```
pub fn filter<S, F>(input: S, f: F) -> Filter<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item, usize) -> bool + Clone,
{
    Filter { source: input, f }
}

impl<S, F> Sequence for Filter<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item, usize) -> bool + Clone,
{
    type Item = S::Item;
    type Cursor = FilterCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        FilterCursor {
            entries: EntriesCursor::new(self.source.cursor()),
            f: self.f.clone(),
        }
    }

    fn into_cursor(self) -> Self::Cursor {
        FilterCursor {
            entries: EntriesCursor::new(self.source.into_cursor()),
            f: self.f,
        }
    }
}

pub struct FilterCursor<C, F> {
    entries: EntriesCursor<C>,
    f: F,
}

impl<C, F> Cursor for FilterCursor<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item, usize) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Step<C::Item> {
        loop {
            match self.entries.next() {
                Step::Yielded((index, v)) => {
                    if (self.f)(&v, index) {
                        return Step::Yielded(v);
                    }
                }
                Step::Complete(()) => return Step::done(),
            }
        }
    }
}
