use super::map::{Map, map};
use crate::{Cursor, Sequence, Step};

/// Concatenates a sequence of sequences.
#[derive(Debug, Clone)]
pub struct Flatten<S> {
    source: S,
}

/// [`map`] followed by [`flatten`].
pub type FlatMap<S, F> = Flatten<Map<S, F>>;

/// Create a sequence yielding every value of every inner sequence, in order.
///
/// Each inner sequence is fully drained before the next outer value is pulled;
/// inner sequences are never fetched ahead.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let nested = vec![vec![1, 2], vec![], vec![3]];
/// assert_eq!(flatten(nested).to_array(), vec![1, 2, 3]);
/// ```
pub fn flatten<S>(input: S) -> Flatten<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    Flatten { source: input }
}

/// Create a sequence concatenating the sequences `f(value, index)` returns.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let stutter = flat_map(vec!['a', 'b'], |c, i| repeat(c, Some(i + 1)));
/// assert_eq!(stutter.to_array(), vec!['a', 'b', 'b']);
/// ```
pub fn flat_map<S, T, F>(input: S, f: F) -> FlatMap<S, F>
where
    S: Sequence,
    T: Sequence,
    F: FnMut(S::Item, usize) -> T + Clone,
{
    flatten(map(input, f))
}

/// Create a sequence concatenating every sequence in `inputs`.
///
/// An empty `inputs` gives an empty sequence. Sequences of different types can be
/// concatenated after [`boxed`](crate::Sequence::boxed), or two at a time with
/// [`chain`](crate::chain).
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(concat([vec![1], vec![2, 3]]).to_array(), vec![1, 2, 3]);
/// assert!(concat(Vec::<Vec<u8>>::new()).to_array().is_empty());
/// ```
pub fn concat<S>(inputs: S) -> Flatten<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    flatten(inputs)
}

impl<S> Sequence for Flatten<S>
where
    S: Sequence,
    S::Item: Sequence,
{
    type Item = <S::Item as Sequence>::Item;
    type Cursor = FlattenCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        FlattenCursor::new(self.source.cursor())
    }

    fn into_cursor(self) -> Self::Cursor {
        FlattenCursor::new(self.source.into_cursor())
    }
}

pub struct FlattenCursor<C>
where
    C: Cursor,
    C::Item: Sequence,
{
    outer: Option<C>,
    inner: Option<<C::Item as Sequence>::Cursor>,
}

impl<C> FlattenCursor<C>
where
    C: Cursor,
    C::Item: Sequence,
{
    fn new(outer: C) -> Self {
        Self {
            outer: Some(outer),
            inner: None,
        }
    }
}

impl<C> Cursor for FlattenCursor<C>
where
    C: Cursor,
    C::Item: Sequence,
{
    type Item = <C::Item as Sequence>::Item;

    fn next(&mut self) -> Step<Self::Item> {
        loop {
            if let Some(inner) = self.inner.as_mut() {
                match inner.next() {
                    Step::Yielded(v) => return Step::Yielded(v),
                    Step::Complete(()) => self.inner = None,
                }
            }

            let Some(outer) = self.outer.as_mut() else {
                return Step::done();
            };
            match outer.next() {
                Step::Yielded(seq) => self.inner = Some(seq.into_cursor()),
                Step::Complete(()) => {
                    self.outer = None;
                    return Step::done();
                }
            }
        }
    }
}
