use super::entries::EntriesCursor;
use crate::{Cursor, Sequence, Step};

/// Lazily transforms every value of the wrapped sequence.
#[derive(Debug, Clone)]
pub struct Map<S, F> {
    source: S,
    f: F,
}

/// Create a sequence applying `f(value, index)` to every value of `input`.
///
/// `f` runs exactly once per value, only when that output position is pulled.
/// Each cursor works on its own clone of `f`.
///
/// ```rust
/// use lazyseq::prelude::*;
///
/// let labelled = map(vec!["a", "b"], |s, i| format!("{i}:{s}"));
/// assert_eq!(labelled.to_array(), vec!["0:a", "1:b"]);
/// ```
pub fn map<S, T, F>(input: S, f: F) -> Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item, usize) -> T + Clone,
{
    Map { source: input, f }
}

impl<S, T, F> Sequence for Map<S, F>
where
    S: Sequence,
    F: FnMut(S::Item, usize) -> T + Clone,
{
    type Item = T;
    type Cursor = MapCursor<S::Cursor, F>;

    fn cursor(&self) -> Self::Cursor {
        MapCursor {
            entries: EntriesCursor::new(self.source.cursor()),
            f: self.f.clone(),
        }
    }

    fn into_cursor(self) -> Self::Cursor {
        MapCursor {
            entries: EntriesCursor::new(self.source.into_cursor()),
            f: self.f,
        }
    }
}

pub struct MapCursor<C, F> {
    entries: EntriesCursor<C>,
    f: F,
}

impl<C, T, F> Cursor for MapCursor<C, F>
where
    C: Cursor,
    F: FnMut(C::Item, usize) -> T,
{
    type Item = T;

    fn next(&mut self) -> Step<T> {
        self.entries.next().map_yielded(|(index, v)| (self.f)(v, index))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_map_is_lazy() {
        let calls = Cell::new(0);
        let doubled = map(vec![1, 2, 3], |v, _| {
            calls.set(calls.get() + 1);
            v * 2
        });
        assert_eq!(calls.get(), 0);

        let mut cursor = doubled.cursor();
        assert_eq!(calls.get(), 0);
        assert_eq!(cursor.next(), Step::Yielded(2));
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn test_map_passes_indices() {
        let indexed = map(vec!['x', 'y', 'z'], |_, i| i);
        assert_eq!(indexed.to_array(), vec![0, 1, 2]);
    }

    #[test]
    fn test_map_cursors_restart_indices() {
        let indexed = map(vec![(); 2], |(), i| i * 10);
        assert_eq!(indexed.to_array(), vec![0, 10]);
        assert_eq!(indexed.to_array(), vec![0, 10]);
    }

    #[test]
    fn test_map_stateful_closure_is_per_cursor() {
        let mut running = 0;
        let prefix_sums = map(vec![1, 2, 3], move |v, _| {
            running += v;
            running
        });
        assert_eq!(prefix_sums.to_array(), vec![1, 3, 6]);
        assert_eq!(prefix_sums.to_array(), vec![1, 3, 6]);
    }
}
