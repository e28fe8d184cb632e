use crate::{Cursor, Sequence, Step};

/// Yields every value of the first sequence, then every value of the second.
///
/// Created via [`chain`]. Unlike [`concat`](crate::concat), the two sides may be
/// different sequence types as long as they produce the same item type.
#[derive(Debug, Clone)]
pub struct Chain<A, B> {
    first: A,
    second: B,
}

/// Create a sequence that drains `first` and then `second`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let both = chain(vec![1, 2], generate(|i| 10 * i, Some(2)));
/// assert_eq!(both.to_array(), vec![1, 2, 0, 10]);
/// ```
pub fn chain<A, B>(first: A, second: B) -> Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    Chain { first, second }
}

impl<A, B> Sequence for Chain<A, B>
where
    A: Sequence,
    B: Sequence<Item = A::Item>,
{
    type Item = A::Item;
    type Cursor = ChainCursor<A::Cursor, B::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        ChainCursor(Some(self.first.cursor()), Some(self.second.cursor()))
    }

    fn into_cursor(self) -> Self::Cursor {
        ChainCursor(Some(self.first.into_cursor()), Some(self.second.into_cursor()))
    }
}

/// Cursor for [`Chain`]. Each side is dropped as soon as it is exhausted.
pub struct ChainCursor<A, B>(Option<A>, Option<B>);

impl<A, B> Cursor for ChainCursor<A, B>
where
    A: Cursor,
    B: Cursor<Item = A::Item>,
{
    type Item = A::Item;

    fn next(&mut self) -> Step<Self::Item> {
        if let Some(first) = self.0.as_mut() {
            match first.next() {
                Step::Yielded(v) => return Step::Yielded(v),
                Step::Complete(()) => self.0 = None,
            }
        }
        let Some(second) = self.1.as_mut() else {
            return Step::done();
        };
        match second.next() {
            Step::Yielded(v) => Step::Yielded(v),
            Step::Complete(()) => {
                self.1 = None;
                Step::done()
            }
        }
    }
}
