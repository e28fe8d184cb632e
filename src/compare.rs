//! Structural equality between sequences.

use std::ptr;

use tracing::trace;

use crate::{Cursor, Sequence, Step};

/// Element-wise equality using `PartialEq`. See [`is_equal_by`].
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert!(is_equal(&vec![1, 2], &vec![1, 2]));
/// assert!(!is_equal(&vec![1, 2], &vec![1, 2, 3]));
/// ```
pub fn is_equal<S>(a: &S, b: &S) -> bool
where
    S: Sequence,
    S::Item: PartialEq,
{
    is_equal_by(a, b, |x, y| x == y)
}

/// Element-wise equality under `eq`.
///
/// If `a` and `b` are the same value, returns `true` without pulling anything.
/// Otherwise walks both in lockstep and returns `false` at the first unequal
/// pair or as soon as one side is exhausted before the other.
pub fn is_equal_by<S, F>(a: &S, b: &S, eq: F) -> bool
where
    S: Sequence,
    F: FnMut(&S::Item, &S::Item) -> bool,
{
    if ptr::eq(a, b) {
        return true;
    }
    cursors_equal_by(a.cursor(), b.cursor(), eq)
}

/// Lockstep comparison of two cursors, possibly over different item types.
///
/// Pulls one value from `a` and one from `b` per step and stops at the first
/// difference. Use this to compare sequences of different concrete types.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let squares = generate(|i| i * i, Some(3));
/// assert!(cursors_equal_by(squares.cursor(), vec![0, 1, 4].cursor(), |x, y| x == y));
/// ```
pub fn cursors_equal_by<A, B, F>(mut a: A, mut b: B, mut eq: F) -> bool
where
    A: Cursor,
    B: Cursor,
    F: FnMut(&A::Item, &B::Item) -> bool,
{
    let mut index = 0usize;
    loop {
        match (a.next(), b.next()) {
            (Step::Yielded(x), Step::Yielded(y)) => {
                if !eq(&x, &y) {
                    trace!(index, "sequences differ");
                    return false;
                }
            }
            (Step::Complete(()), Step::Complete(())) => return true,
            _ => {
                trace!(index, "sequences differ in length");
                return false;
            }
        }
        index += 1;
    }
}
