//! The pull handle every sequence hands out.
//!
//! A [`Cursor`] is a single-pass, stateful, one-directional handle. Each call to
//! [`Cursor::next`] either yields the next value or reports exhaustion with
//! [`Step::Complete`]. Cursors built by this crate are fused: once exhausted they
//! stay exhausted and never pull from their source again.
//!
//! ```rust
//! use lazyseq::prelude::*;
//!
//! let mut n = 0;
//! let mut counter = cursor_fn(move || {
//!     n += 1;
//!     if n <= 2 { Step::Yielded(n) } else { Step::done() }
//! });
//!
//! assert_eq!(counter.next(), Step::Yielded(1));
//! assert_eq!(counter.next(), Step::Yielded(2));
//! assert!(counter.next().is_complete());
//! assert!(counter.next().is_complete());
//! ```

use either::Either;

use crate::{iter::CursorIter, step::Step};

/// Single-pass pull handle over a sequence.
///
/// Implementations must keep returning [`Step::Complete`] once they have
/// returned it the first time. Advancing a cursor from two places at once is
/// not supported; a cursor has exactly one owner.
pub trait Cursor {
    /// Type of the values produced
    type Item;

    /// Advance, yielding the next value or reporting exhaustion.
    fn next(&mut self) -> Step<Self::Item>;

    /// Adapt this cursor into a [`std::iter::Iterator`].
    fn iter(self) -> CursorIter<Self>
    where
        Self: Sized,
    {
        CursorIter::new(self)
    }

    /// Erase the concrete cursor type.
    fn boxed<'a>(self) -> BoxCursor<'a, Self::Item>
    where
        Self: Sized + 'a,
    {
        Box::new(self)
    }
}

/// A type-erased cursor.
pub type BoxCursor<'a, T> = Box<dyn Cursor<Item = T> + 'a>;

impl<C> Cursor for &'_ mut C
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    fn next(&mut self) -> Step<Self::Item> {
        (**self).next()
    }
}

impl<C> Cursor for Box<C>
where
    C: Cursor + ?Sized,
{
    type Item = C::Item;

    fn next(&mut self) -> Step<Self::Item> {
        (**self).next()
    }
}

impl<L, R> Cursor for Either<L, R>
where
    L: Cursor,
    R: Cursor<Item = L::Item>,
{
    type Item = L::Item;

    fn next(&mut self) -> Step<Self::Item> {
        match self {
            Either::Left(l) => l.next(),
            Either::Right(r) => r.next(),
        }
    }
}

/// Cursor driven by a closure. Stops calling the closure after its first `Complete`.
pub struct FnCursor<F>(Option<F>);

/// Create a cursor from a closure returning [`Step`].
pub fn cursor_fn<T, F>(f: F) -> FnCursor<F>
where
    F: FnMut() -> Step<T>,
{
    FnCursor(Some(f))
}

impl<T, F> Cursor for FnCursor<F>
where
    F: FnMut() -> Step<T>,
{
    type Item = T;

    fn next(&mut self) -> Step<T> {
        let Some(f) = self.0.as_mut() else {
            return Step::done();
        };
        match f() {
            Step::Yielded(v) => Step::Yielded(v),
            Step::Complete(()) => {
                // drop the closure along with anything it captured
                self.0 = None;
                Step::done()
            }
        }
    }
}
