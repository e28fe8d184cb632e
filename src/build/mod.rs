//! Building sequences from scratch
//!
//! Sources adapt existing data and iterators; generators produce values from
//! nothing but an index.

mod generate;
mod source;

pub use generate::{Infinite, InfiniteCursor, generate, infinite, repeat};
pub use source::{
    Empty, FromFn, Iterable, RcSliceCursor, SingleUse, SliceCursor, empty, from_fn, iterable,
    once, single_use,
};
