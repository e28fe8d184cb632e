//! Lockstep traversal of several sequences.
//!
//! Every zip pulls one value from each input per emitted row, in input order.
//! A row ends the traversal as soon as one input reports done: the inputs after
//! it are not pulled, the values already pulled for that row are dropped, and
//! every cursor is released.
//!
//! With zero inputs there is nothing to run out, so [`zip_all`] and [`zip_vec`]
//! yield empty rows forever. Bound them explicitly, e.g. with
//! [`take_while`](crate::take_while).

use tracing::{debug, trace};

use crate::{Cursor, Sequence, Step};

/// Pairs up two sequences of possibly different item types.
#[derive(Debug, Clone)]
pub struct Zip<A, B> {
    a: A,
    b: B,
}

/// Create a sequence of `(a, b)` pairs, as long as the shorter input.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let pairs = zip(vec![1, 2, 3], vec!["a", "b"]);
/// assert_eq!(pairs.to_array(), vec![(1, "a"), (2, "b")]);
/// ```
pub fn zip<A, B>(a: A, b: B) -> Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    Zip { a, b }
}

impl<A, B> Sequence for Zip<A, B>
where
    A: Sequence,
    B: Sequence,
{
    type Item = (A::Item, B::Item);
    type Cursor = ZipCursor<A::Cursor, B::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        ZipCursor {
            cursors: Some((self.a.cursor(), self.b.cursor())),
            round: 0,
        }
    }

    fn into_cursor(self) -> Self::Cursor {
        ZipCursor {
            cursors: Some((self.a.into_cursor(), self.b.into_cursor())),
            round: 0,
        }
    }
}

pub struct ZipCursor<A, B> {
    cursors: Option<(A, B)>,
    round: usize,
}

impl<A, B> Cursor for ZipCursor<A, B>
where
    A: Cursor,
    B: Cursor,
{
    type Item = (A::Item, B::Item);

    fn next(&mut self) -> Step<Self::Item> {
        let Some((a, b)) = self.cursors.as_mut() else {
            return Step::done();
        };
        let pair = match a.next() {
            Step::Yielded(x) => match b.next() {
                Step::Yielded(y) => Some((x, y)),
                Step::Complete(()) => {
                    trace!(input = 1, round = self.round, "zip input exhausted");
                    None
                }
            },
            Step::Complete(()) => {
                trace!(input = 0, round = self.round, "zip input exhausted");
                None
            }
        };
        match pair {
            Some(pair) => {
                self.round += 1;
                Step::Yielded(pair)
            }
            None => {
                self.cursors = None;
                Step::done()
            }
        }
    }
}

/// Zips a fixed number of same-typed sequences into arrays.
#[derive(Debug, Clone)]
pub struct ZipAll<const N: usize, S> {
    inputs: [S; N],
}

/// Create a sequence of `[T; N]` rows, one value from each input per row.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let columns = zip_all([vec![1, 2, 3], vec![4, 5], vec![6, 7, 8]]);
/// assert_eq!(columns.to_array(), vec![[1, 4, 6], [2, 5, 7]]);
/// ```
pub fn zip_all<const N: usize, S>(inputs: [S; N]) -> ZipAll<N, S>
where
    S: Sequence,
{
    ZipAll { inputs }
}

impl<const N: usize, S> Sequence for ZipAll<N, S>
where
    S: Sequence,
{
    type Item = [S::Item; N];
    type Cursor = ZipAllCursor<N, S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        ZipAllCursor::new(self.inputs.each_ref().map(|s| s.cursor()))
    }

    fn into_cursor(self) -> Self::Cursor {
        ZipAllCursor::new(self.inputs.map(|s| s.into_cursor()))
    }
}

pub struct ZipAllCursor<const N: usize, C> {
    cursors: Option<[C; N]>,
    round: usize,
}

impl<const N: usize, C> ZipAllCursor<N, C> {
    fn new(cursors: [C; N]) -> Self {
        if N == 0 {
            debug!("zip over zero inputs yields empty rows without end");
        }
        Self {
            cursors: Some(cursors),
            round: 0,
        }
    }
}

impl<const N: usize, C> Cursor for ZipAllCursor<N, C>
where
    C: Cursor,
{
    type Item = [C::Item; N];

    fn next(&mut self) -> Step<Self::Item> {
        let Some(cursors) = self.cursors.as_mut() else {
            return Step::done();
        };
        let row = match pull_row(cursors.iter_mut(), N, self.round) {
            Some(row) => <[C::Item; N]>::try_from(row).ok(),
            None => None,
        };
        match row {
            Some(row) => {
                self.round += 1;
                Step::Yielded(row)
            }
            None => {
                self.cursors = None;
                Step::done()
            }
        }
    }
}

/// Zips a runtime-determined number of same-typed sequences into vectors.
#[derive(Debug, Clone)]
pub struct ZipVec<S> {
    inputs: Vec<S>,
}

/// Create a sequence of `Vec<T>` rows, one value from each input per row.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let rows = zip_vec(vec![vec!['a', 'b'], vec!['c', 'd', 'e']]);
/// assert_eq!(rows.to_array(), vec![vec!['a', 'c'], vec!['b', 'd']]);
/// ```
pub fn zip_vec<S>(inputs: Vec<S>) -> ZipVec<S>
where
    S: Sequence,
{
    ZipVec { inputs }
}

impl<S> Sequence for ZipVec<S>
where
    S: Sequence,
{
    type Item = Vec<S::Item>;
    type Cursor = ZipVecCursor<S::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        ZipVecCursor::new(self.inputs.iter().map(Sequence::cursor).collect())
    }

    fn into_cursor(self) -> Self::Cursor {
        ZipVecCursor::new(self.inputs.into_iter().map(Sequence::into_cursor).collect())
    }
}

pub struct ZipVecCursor<C> {
    cursors: Option<Vec<C>>,
    round: usize,
}

impl<C> ZipVecCursor<C> {
    fn new(cursors: Vec<C>) -> Self {
        if cursors.is_empty() {
            debug!("zip over zero inputs yields empty rows without end");
        }
        Self {
            cursors: Some(cursors),
            round: 0,
        }
    }
}

impl<C> Cursor for ZipVecCursor<C>
where
    C: Cursor,
{
    type Item = Vec<C::Item>;

    fn next(&mut self) -> Step<Self::Item> {
        let Some(cursors) = self.cursors.as_mut() else {
            return Step::done();
        };
        let width = cursors.len();
        match pull_row(cursors.iter_mut(), width, self.round) {
            Some(row) => {
                self.round += 1;
                Step::Yielded(row)
            }
            None => {
                self.cursors = None;
                Step::done()
            }
        }
    }
}

/// Pull one value from each cursor in order, stopping at the first exhausted one.
fn pull_row<'c, C, I>(cursors: I, width: usize, round: usize) -> Option<Vec<C::Item>>
where
    C: Cursor + 'c,
    I: Iterator<Item = &'c mut C>,
{
    let mut row = Vec::with_capacity(width);
    for (input, cursor) in cursors.enumerate() {
        match cursor.next() {
            Step::Yielded(v) => row.push(v),
            Step::Complete(()) => {
                trace!(input, round, "zip input exhausted");
                return None;
            }
        }
    }
    Some(row)
}
