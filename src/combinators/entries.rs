use crate::{Cursor, Sequence, Step};

/// Pairs each value with its 0-based pull position.
///
/// This is the indexing primitive the other index-aware combinators are built on.
#[derive(Debug, Clone)]
pub struct Entries<S> {
    source: S,
}

/// Create a sequence of `(index, value)` pairs.
///
/// The index is counted as values are pulled; the length of `input` is never
/// computed up front and nothing is pulled ahead.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(entries(vec!['a', 'b']).to_array(), vec![(0, 'a'), (1, 'b')]);
/// ```
pub fn entries<S>(input: S) -> Entries<S>
where
    S: Sequence,
{
    Entries { source: input }
}

impl<S> Sequence for Entries<S>
where
    S: Sequence,
{
    type Item = (usize, S::Item);
    type Cursor = EntriesCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        EntriesCursor::new(self.source.cursor())
    }

    fn into_cursor(self) -> Self::Cursor {
        EntriesCursor::new(self.source.into_cursor())
    }
}

/// Cursor for [`Entries`]. Releases its source on the first `Complete`.
pub struct EntriesCursor<C> {
    cursor: Option<C>,
    index: usize,
}

impl<C> EntriesCursor<C> {
    pub(crate) fn new(cursor: C) -> Self {
        Self {
            cursor: Some(cursor),
            index: 0,
        }
    }

    /// Number of values pulled so far.
    pub fn pulled(&self) -> usize {
        self.index
    }
}

impl<C> Cursor for EntriesCursor<C>
where
    C: Cursor,
{
    type Item = (usize, C::Item);

    fn next(&mut self) -> Step<Self::Item> {
        let Some(cursor) = self.cursor.as_mut() else {
            return Step::done();
        };
        match cursor.next() {
            Step::Yielded(v) => {
                let index = self.index;
                self.index += 1;
                Step::Yielded((index, v))
            }
            Step::Complete(()) => {
                self.cursor = None;
                Step::done()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cursor_fn;

    /// A hand-written cursor that resumes after reporting exhaustion.
    struct Resuming<'a> {
        pulls: &'a mut usize,
    }

    impl Cursor for Resuming<'_> {
        type Item = i32;

        fn next(&mut self) -> Step<i32> {
            *self.pulls += 1;
            match *self.pulls {
                2 => Step::done(),
                n => Step::Yielded(n as i32),
            }
        }
    }

    fn resuming(pulls: &mut usize) -> Resuming<'_> {
        Resuming { pulls }
    }

    #[test]
    fn test_entries_counts_pulls() {
        let mut cursor = entries(vec![10, 20, 30]).into_cursor();
        assert_eq!(cursor.pulled(), 0);
        assert_eq!(cursor.next(), Step::Yielded((0, 10)));
        assert_eq!(cursor.next(), Step::Yielded((1, 20)));
        assert_eq!(cursor.pulled(), 2);
        assert_eq!(cursor.next(), Step::Yielded((2, 30)));
        assert!(cursor.next().is_complete());
        assert_eq!(cursor.pulled(), 3);
    }

    #[test]
    fn test_entries_does_not_pull_ahead() {
        let mut pulls = 0;
        let mut cursor = EntriesCursor::new(cursor_fn(|| {
            pulls += 1;
            Step::Yielded('x')
        }));
        assert_eq!(cursor.next(), Step::Yielded((0, 'x')));
        assert_eq!(cursor.next(), Step::Yielded((1, 'x')));
        drop(cursor);
        assert_eq!(pulls, 2);
    }

    #[test]
    fn test_entries_never_pulls_after_done() {
        // yields 1, reports done, then would yield 3 if asked again
        let mut pulls = 0;
        let mut cursor = EntriesCursor::new(resuming(&mut pulls));
        assert_eq!(cursor.next(), Step::Yielded((0, 1)));
        assert!(cursor.next().is_complete());
        assert!(cursor.next().is_complete());
        drop(cursor);
        assert_eq!(pulls, 2);
    }

    #[test]
    fn test_entries_of_empty() {
        assert!(entries(Vec::<u8>::new()).to_array().is_empty());
    }
}
