use crate::{Cursor, Sequence, Step, map, take_while};

/// Unbounded sequence of `()` placeholders.
///
/// Only its positions carry information; bound it with
/// [`take_while`](crate::take_while) and give it values with [`map`](crate::map).
#[derive(Debug, Clone, Copy, Default)]
pub struct Infinite;

/// Create an unbounded sequence of `()`.
pub fn infinite() -> Infinite {
    Infinite
}

impl Sequence for Infinite {
    type Item = ();
    type Cursor = InfiniteCursor;

    fn cursor(&self) -> Self::Cursor {
        InfiniteCursor
    }
}

#[derive(Debug, Clone, Copy, Default)]
pub struct InfiniteCursor;

impl Cursor for InfiniteCursor {
    type Item = ();

    fn next(&mut self) -> Step<()> {
        Step::Yielded(())
    }
}

/// Create a sequence of `f(0), f(1), ...`.
///
/// With `Some(count)` exactly `count` values are produced; with `None` the
/// sequence is unbounded.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(generate(|i| i * i, Some(4)).to_array(), vec![0, 1, 4, 9]);
/// ```
pub fn generate<T, F>(mut f: F, count: Option<usize>) -> impl Sequence<Item = T> + Clone
where
    F: FnMut(usize) -> T + Clone,
{
    map(
        take_while(infinite(), move |_, i| Some(i) != count),
        move |(), i| f(i),
    )
}

/// Create a sequence of `count` clones of `value`, or unboundedly many with `None`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// assert_eq!(repeat("x", Some(3)).to_array(), vec!["x", "x", "x"]);
/// ```
pub fn repeat<T>(value: T, count: Option<usize>) -> impl Sequence<Item = T> + Clone
where
    T: Clone,
{
    generate(move |_| value.clone(), count)
}
