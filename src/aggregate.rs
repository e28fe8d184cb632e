//! Terminal consumers.
//!
//! Each function here obtains one cursor from its input and pulls from it,
//! either until exhaustion or, for the short-circuiting ones ([`find`],
//! [`some`], [`every`] and the `try_*` family), until the answer is known.
//!
//! A panic raised by a callback unwinds straight through these functions; the
//! `try_*` variants hand back the callback's first `Err` unchanged.

use std::iter::Sum;

use tracing::trace;

use crate::{Cursor, Sequence, Step, combinators::EntriesCursor};

/// Left fold: `f(acc, value, index)` threaded through every value in pull order.
///
/// Returns `init` unchanged for an empty input.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let digits = fold(vec![1, 2, 3], |acc, d, _| acc * 10 + d, 0);
/// assert_eq!(digits, 123);
/// ```
pub fn fold<S, A, F>(input: S, mut f: F, init: A) -> A
where
    S: Sequence,
    F: FnMut(A, S::Item, usize) -> A,
{
    let mut entries = EntriesCursor::new(input.into_cursor());
    let mut acc = init;
    while let Step::Yielded((index, v)) = entries.next() {
        acc = f(acc, v, index);
    }
    trace!(pulled = entries.pulled(), "fold drained input");
    acc
}

/// Fold seeded with the first value.
///
/// Returns `None` for an empty input. Otherwise `f(acc, value, index)` is called
/// for the second value onward, so the first call sees `index == 1`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(reduce(vec![1, 2, 3], |a, b, _| a + b), Some(6));
/// assert_eq!(reduce(Vec::<i32>::new(), |a, b, _| a + b), None);
/// ```
pub fn reduce<S, F>(input: S, mut f: F) -> Option<S::Item>
where
    S: Sequence,
    F: FnMut(S::Item, S::Item, usize) -> S::Item,
{
    let mut entries = EntriesCursor::new(input.into_cursor());
    let Step::Yielded((_, mut acc)) = entries.next() else {
        return None;
    };
    while let Step::Yielded((index, v)) = entries.next() {
        acc = f(acc, v, index);
    }
    trace!(pulled = entries.pulled(), "reduce drained input");
    Some(acc)
}

/// The final value, or `None` for an empty input.
pub fn last<S>(input: S) -> Option<S::Item>
where
    S: Sequence,
{
    reduce(input, |_, v, _| v)
}

/// First value (in pull order) accepted by `f(&value, index)`.
///
/// Stops pulling as soon as a value is accepted. Pass a slice rather than a
/// `Vec` to avoid copying the collection up front.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let ids = vec![7, 12, 30];
/// assert_eq!(find(&ids[..], |id, _| id % 2 == 0), Some(12));
/// ```
pub fn find<S, F>(input: S, mut f: F) -> Option<S::Item>
where
    S: Sequence,
    F: FnMut(&S::Item, usize) -> bool,
{
    let mut entries = EntriesCursor::new(input.into_cursor());
    while let Step::Yielded((index, v)) = entries.next() {
        if f(&v, index) {
            trace!(index, "find matched");
            return Some(v);
        }
    }
    trace!(pulled = entries.pulled(), "find found no match");
    None
}

/// Whether any value is accepted by `f`. `false` for an empty input.
pub fn some<S, F>(input: S, f: F) -> bool
where
    S: Sequence,
    F: FnMut(&S::Item, usize) -> bool,
{
    find(input, f).is_some()
}

/// Whether every value is accepted by `f`. `true` for an empty input.
pub fn every<S, F>(input: S, mut f: F) -> bool
where
    S: Sequence,
    F: FnMut(&S::Item, usize) -> bool,
{
    find(input, |v, i| !f(v, i)).is_none()
}

/// Drain `input`, calling `f(value, index)` for each value in pull order.
pub fn for_each<S, F>(input: S, mut f: F)
where
    S: Sequence,
    F: FnMut(S::Item, usize),
{
    fold(input, |(), v, i| f(v, i), ())
}

/// Sum of all values; the additive identity for an empty input.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(sum(vec![1, 2, 3]), 6);
/// assert_eq!(sum(Vec::<i64>::new()), 0);
/// ```
pub fn sum<S>(input: S) -> S::Item
where
    S: Sequence,
    S::Item: Sum,
{
    let mut entries = EntriesCursor::new(input.into_cursor());
    let total: S::Item = (&mut entries).iter().map(|(_, v)| v).sum();
    trace!(pulled = entries.pulled(), "sum drained input");
    total
}

/// Identity elements for [`min`] and [`max`].
///
/// Floats use the infinities; integers use their representable bounds.
pub trait Extremum: PartialOrd + Sized {
    /// Value no element is greater than; result of `min` on an empty input
    fn upper() -> Self;
    /// Value no element is less than; result of `max` on an empty input
    fn lower() -> Self;
}

macro_rules! extremum_float {
    ($($t:ty),*) => {$(
        impl Extremum for $t {
            fn upper() -> Self { <$t>::INFINITY }
            fn lower() -> Self { <$t>::NEG_INFINITY }
        }
    )*};
}

macro_rules! extremum_int {
    ($($t:ty),*) => {$(
        impl Extremum for $t {
            fn upper() -> Self { <$t>::MAX }
            fn lower() -> Self { <$t>::MIN }
        }
    )*};
}

extremum_float!(f32, f64);
extremum_int!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

/// Smallest value, or [`Extremum::upper`] for an empty input.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(min(vec![3.0, 1.0, 2.0]), 1.0);
/// assert_eq!(min(Vec::<f64>::new()), f64::INFINITY);
/// ```
pub fn min<S>(input: S) -> S::Item
where
    S: Sequence,
    S::Item: Extremum,
{
    fold(input, |acc, v, _| if v < acc { v } else { acc }, <S::Item as Extremum>::upper())
}

/// Largest value, or [`Extremum::lower`] for an empty input.
pub fn max<S>(input: S) -> S::Item
where
    S: Sequence,
    S::Item: Extremum,
{
    fold(input, |acc, v, _| if v > acc { v } else { acc }, <S::Item as Extremum>::lower())
}

/// Collect every value, in pull order.
pub fn to_array<S>(input: S) -> Vec<S::Item>
where
    S: Sequence,
{
    let mut entries = EntriesCursor::new(input.into_cursor());
    let out: Vec<S::Item> = (&mut entries).iter().map(|(_, v)| v).collect();
    trace!(pulled = entries.pulled(), "to_array drained input");
    out
}

/// Fallible left fold. Stops at, and returns, the first `Err` from `f`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let checked = try_fold(vec![100u8, 100, 100], |acc: u8, v, _| acc.checked_add(v).ok_or("overflow"), 0);
/// assert_eq!(checked, Err("overflow"));
/// ```
pub fn try_fold<S, A, E, F>(input: S, mut f: F, init: A) -> Result<A, E>
where
    S: Sequence,
    F: FnMut(A, S::Item, usize) -> Result<A, E>,
{
    let mut entries = EntriesCursor::new(input.into_cursor());
    let mut acc = init;
    while let Step::Yielded((index, v)) = entries.next() {
        acc = f(acc, v, index)?;
    }
    Ok(acc)
}

/// Fallible [`for_each`]. Stops at, and returns, the first `Err` from `f`.
pub fn try_for_each<S, E, F>(input: S, mut f: F) -> Result<(), E>
where
    S: Sequence,
    F: FnMut(S::Item, usize) -> Result<(), E>,
{
    try_fold(input, |(), v, i| f(v, i), ())
}

/// Collect a sequence of results, stopping at the first `Err`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let parsed = map(vec!["1", "2", "x", "4"], |s, _| s.parse::<u32>());
/// assert!(try_to_array(&parsed).is_err());
/// ```
pub fn try_to_array<S, T, E>(input: S) -> Result<Vec<T>, E>
where
    S: Sequence<Item = Result<T, E>>,
{
    let mut out = Vec::new();
    try_for_each(input, |v, _| v.map(|v| out.push(v)))?;
    Ok(out)
}
