//! Sequences over existing data.
//!
//! Collections yield clones of their elements so that every cursor is owned
//! and independent. Prefer `&[T]` or `Rc<[T]>` for large inputs: a cursor over
//! a `Vec<T>` or `[T; N]` copies the whole collection when it is created.
//!
//! ```rust
//! use std::rc::Rc;
//! use lazyseq::prelude::*;
//!
//! let readings: Rc<[u32]> = Rc::from(vec![4, 9, 16]);
//! // each cursor clones the `Rc`, not the elements
//! assert_eq!(find(&readings, |r, _| *r > 5), Some(9));
//!
//! let local = [1, 2, 3];
//! assert_eq!(sum(&local[..]), 6);
//! ```

use std::{cell::Cell, marker::PhantomData, rc::Rc};

use either::Either;

use crate::{Cursor, Sequence, Step, iter::IterCursor};

/// Cursor over a borrowed slice.
pub struct SliceCursor<'a, T> {
    items: std::slice::Iter<'a, T>,
}

impl<'a, T> Sequence for &'a [T]
where
    T: Clone,
{
    type Item = T;
    type Cursor = SliceCursor<'a, T>;

    fn cursor(&self) -> Self::Cursor {
        SliceCursor { items: self.iter() }
    }
}

impl<T> Cursor for SliceCursor<'_, T>
where
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Step<T> {
        self.items.next().cloned().into()
    }
}

impl<T> Sequence for Vec<T>
where
    T: Clone,
{
    type Item = T;
    type Cursor = IterCursor<std::vec::IntoIter<T>>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor::new(self.clone().into_iter())
    }

    fn into_cursor(self) -> Self::Cursor {
        IterCursor::new(self.into_iter())
    }
}

impl<T, const N: usize> Sequence for [T; N]
where
    T: Clone,
{
    type Item = T;
    type Cursor = IterCursor<std::array::IntoIter<T, N>>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor::new(self.clone().into_iter())
    }

    fn into_cursor(self) -> Self::Cursor {
        IterCursor::new(self.into_iter())
    }
}

/// Cursor over a shared slice. Cheap to create: only the `Rc` is cloned.
pub struct RcSliceCursor<T> {
    items: Rc<[T]>,
    position: usize,
}

impl<T> Sequence for Rc<[T]>
where
    T: Clone,
{
    type Item = T;
    type Cursor = RcSliceCursor<T>;

    fn cursor(&self) -> Self::Cursor {
        RcSliceCursor {
            items: Rc::clone(self),
            position: 0,
        }
    }
}

impl<T> Cursor for RcSliceCursor<T>
where
    T: Clone,
{
    type Item = T;

    fn next(&mut self) -> Step<T> {
        match self.items.get(self.position) {
            Some(v) => {
                self.position += 1;
                Step::Yielded(v.clone())
            }
            None => Step::done(),
        }
    }
}

/// `Some(v)` is the one-element sequence `[v]`, `None` is empty.
impl<T> Sequence for Option<T>
where
    T: Clone,
{
    type Item = T;
    type Cursor = IterCursor<std::option::IntoIter<T>>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor::new(self.clone().into_iter())
    }

    fn into_cursor(self) -> Self::Cursor {
        IterCursor::new(self.into_iter())
    }
}

impl<L, R> Sequence for Either<L, R>
where
    L: Sequence,
    R: Sequence<Item = L::Item>,
{
    type Item = L::Item;
    type Cursor = Either<L::Cursor, R::Cursor>;

    fn cursor(&self) -> Self::Cursor {
        match self {
            Either::Left(l) => Either::Left(l.cursor()),
            Either::Right(r) => Either::Right(r.cursor()),
        }
    }

    fn into_cursor(self) -> Self::Cursor {
        self.map_either(Sequence::into_cursor, Sequence::into_cursor)
    }
}

/// Re-iterable sequence over any cloneable [`IntoIterator`].
#[derive(Debug, Clone)]
pub struct Iterable<I>(I);

/// Adapt a cloneable iterable (a range, a `BTreeMap`, a `HashSet`, ...).
///
/// Each cursor iterates a fresh clone.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let odd = iterable(0..10).filter(|v, _| v % 2 == 1);
/// assert_eq!(odd.to_array(), vec![1, 3, 5, 7, 9]);
/// ```
pub fn iterable<I>(source: I) -> Iterable<I>
where
    I: IntoIterator + Clone,
{
    Iterable(source)
}

impl<I> Sequence for Iterable<I>
where
    I: IntoIterator + Clone,
{
    type Item = I::Item;
    type Cursor = IterCursor<I::IntoIter>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor::new(self.0.clone().into_iter())
    }

    fn into_cursor(self) -> Self::Cursor {
        IterCursor::new(self.0.into_iter())
    }
}

/// The one-element sequence `[value]`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let framed = chain(once(0), chain(vec![5, 6], once(0)));
/// assert_eq!(framed.to_array(), vec![0, 5, 6, 0]);
/// ```
pub fn once<T>(value: T) -> Option<T>
where
    T: Clone,
{
    Some(value)
}

/// Sequence backed by a one-shot iterator.
///
/// The first cursor takes the iterator; every later cursor is immediately done.
pub struct SingleUse<I>(Cell<Option<I>>);

/// Adapt an iterator that can only be traversed once.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let lines = single_use("a\nb".lines());
/// assert_eq!(lines.to_array(), vec!["a", "b"]);
/// assert!(lines.to_array().is_empty());
/// ```
pub fn single_use<I>(source: I) -> SingleUse<I::IntoIter>
where
    I: IntoIterator,
{
    SingleUse(Cell::new(Some(source.into_iter())))
}

impl<I> Sequence for SingleUse<I>
where
    I: Iterator,
{
    type Item = I::Item;
    type Cursor = IterCursor<std::iter::Flatten<std::option::IntoIter<I>>>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor::new(self.0.take().into_iter().flatten())
    }
}

/// Sequence whose cursors come from a factory closure.
#[derive(Clone)]
pub struct FromFn<F>(F);

/// Create a sequence from a closure producing a fresh cursor per traversal.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let countdown = from_fn(|| {
///     let mut n = 3;
///     cursor_fn(move || {
///         if n == 0 { return Step::done(); }
///         n -= 1;
///         Step::Yielded(n)
///     })
/// });
/// assert_eq!(countdown.to_array(), vec![2, 1, 0]);
/// ```
pub fn from_fn<C, F>(factory: F) -> FromFn<F>
where
    F: Fn() -> C,
    C: Cursor,
{
    FromFn(factory)
}

impl<C, F> Sequence for FromFn<F>
where
    F: Fn() -> C,
    C: Cursor,
{
    type Item = C::Item;
    type Cursor = C;

    fn cursor(&self) -> C {
        (self.0)()
    }
}

/// The sequence with no values.
pub struct Empty<T>(PhantomData<fn() -> T>);

/// A sequence that completes on the first pull.
pub fn empty<T>() -> Empty<T> {
    Empty(PhantomData)
}

impl<T> Clone for Empty<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Empty<T> {}

impl<T> Sequence for Empty<T> {
    type Item = T;
    type Cursor = IterCursor<std::iter::Empty<T>>;

    fn cursor(&self) -> Self::Cursor {
        IterCursor::new(std::iter::empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    #[test]
    fn test_slice_yields_clones() {
        let words = [String::from("a"), String::from("b")];
        let slice: &[String] = &words;
        assert_eq!(slice.to_array(), vec!["a", "b"]);
        assert_eq!(words.len(), 2);
    }

    #[test]
    fn test_rc_slice_shares_storage() {
        let shared: Rc<[u32]> = Rc::from(vec![1, 2, 3]);
        let mut a = shared.cursor();
        let mut b = shared.cursor();
        assert_eq!(Rc::strong_count(&shared), 3);
        assert_eq!(a.next(), Step::Yielded(1));
        assert_eq!(b.next(), Step::Yielded(1));
        assert_eq!(a.next(), Step::Yielded(2));
    }

    #[test]
    fn test_option_is_zero_or_one() {
        assert_eq!(Some(4).to_array(), vec![4]);
        assert!(None::<u8>.to_array().is_empty());
    }

    #[test]
    fn test_once_reiterates() {
        let one = once("x");
        assert_eq!(one.to_array(), vec!["x"]);
        assert_eq!(one.to_array(), vec!["x"]);
    }

    #[test]
    fn test_either_sequence() {
        let pick = |short: bool| -> Either<Vec<u8>, [u8; 3]> {
            if short { Either::Left(vec![1]) } else { Either::Right([1, 2, 3]) }
        };
        assert_eq!(pick(true).to_array(), vec![1]);
        assert_eq!(pick(false).to_array(), vec![1, 2, 3]);
    }

    #[test]
    fn test_iterable_over_btree_map() {
        let scores = BTreeMap::from([("b", 2), ("a", 1)]);
        let keys = iterable(&scores).map(|(k, _), _| *k);
        assert_eq!(keys.to_array(), vec!["a", "b"]);
    }

    #[test]
    fn test_single_use_second_cursor_is_empty() {
        let once = single_use(vec![1, 2]);
        let mut first = once.cursor();
        let mut second = once.cursor();
        assert!(second.next().is_complete());
        assert_eq!(first.next(), Step::Yielded(1));
        assert_eq!(first.next(), Step::Yielded(2));
        assert!(first.next().is_complete());
    }

    #[test]
    fn test_empty() {
        assert!(empty::<String>().to_array().is_empty());
    }
}
