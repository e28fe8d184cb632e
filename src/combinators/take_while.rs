use tracing::trace;

use super::entries::EntriesCursor;
use crate::{Cursor, Sequence, Step};

/// Yields values while a predicate holds, then stops for good.
#[derive(Debug, Clone)]
pub struct TakeWhile<S, F> {
    source: S,
    f: F,
}

/// Create a sequence of the leading values of `input` accepted by `f(&value, index)`.
///
/// The first rejected value is not yielded, and the source is never pulled again
/// after it, so `take_while` is the usual way to bound an infinite sequence.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let small = take_while(vec![1, 2, 3, 4, 1], |v, _| *v < 3);
/// assert_eq!(small.to_array(), vec![1, 2]);
///
/// let first_five = take_while(infinite(), |_, i| i < 5);
/// assert_eq!(first_five.to_array().len(), 5);
/// ```
pub fn take_while<S, F>(input: S, f: F) -> TakeWhile<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item, usize) -> bool + Clone,
{
    TakeWhile { source: input, f }
}

impl<S, F> Sequence for TakeWhile<S, F>
where
    S: Sequence,
    F: FnMut(&S::Item, usize) -> bool + Clone,
{
    type Item = S::Item;
    type Cursor = TakeWhileCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        TakeWhileCursor {
            entries: Some(EntriesCursor::new(self.source.cursor())),
            f: self.f.clone(),
        }
    }

    fn into_cursor(self) -> Self::Cursor {
        TakeWhileCursor {
            entries: Some(EntriesCursor::new(self.source.into_cursor())),
            f: self.f,
        }
    }
}

pub struct TakeWhileCursor<C, F> {
    entries: Option<EntriesCursor<C>>,
    f: F,
}

impl<C, F> Cursor for TakeWhileCursor<C, F>
where
    C: Cursor,
    F: FnMut(&C::Item, usize) -> bool,
{
    type Item = C::Item;

    fn next(&mut self) -> Step<C::Item> {
        let Some(entries) = self.entries.as_mut() else {
            return Step::done();
        };
        match entries.next() {
            Step::Yielded((index, v)) if (self.f)(&v, index) => Step::Yielded(v),
            Step::Yielded((index, _)) => {
                trace!(index, "take_while rejected value, releasing source");
                self.entries = None;
                Step::done()
            }
            Step::Complete(()) => {
                self.entries = None;
                Step::done()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{cursor_fn, from_fn};
    use std::cell::Cell;

    #[test]
    fn test_take_while_never_tests_past_first_failure() {
        let tested = Cell::new(Vec::new());
        let small = take_while(vec![1, 2, 3, 4, 1], |v, i| {
            let mut seen = tested.take();
            seen.push(i);
            tested.set(seen);
            *v < 3
        });

        assert_eq!(small.to_array(), vec![1, 2]);
        assert_eq!(tested.take(), vec![0, 1, 2]);
    }

    #[test]
    fn test_take_while_stops_pulling_source() {
        let pulls = Cell::new(0);
        let counter = &pulls;
        let naturals = from_fn(|| {
            let mut n = 0u32;
            cursor_fn(move || {
                counter.set(counter.get() + 1);
                n += 1;
                Step::Yielded(n)
            })
        });

        let mut cursor = take_while(&naturals, |v, _| *v < 3).cursor();
        assert_eq!(cursor.next(), Step::Yielded(1));
        assert_eq!(cursor.next(), Step::Yielded(2));
        assert!(cursor.next().is_complete());
        assert!(cursor.next().is_complete());
        assert_eq!(pulls.get(), 3);
    }

    #[test]
    fn test_take_while_all_accepted() {
        let all = take_while(vec![1, 2], |_, _| true);
        assert_eq!(all.to_array(), vec![1, 2]);
    }
}
