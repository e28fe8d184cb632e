//! Commonly used imports
//!
//! Use `use lazyseq::prelude::*;` for quick access to the traits and functions.

// Core types
pub use crate::{BoxSequence, Cursor, Sequence, Step};

// Sources
pub use crate::{
    cursor_fn, empty, from_fn, generate, infinite, iterable, once, repeat, single_use,
};

// Transformers
pub use crate::{
    chain, concat, entries, filter, filter_map, flat_map, flatten, map, take_while, zip, zip_all,
    zip_vec,
};

// Terminal consumers
pub use crate::{
    every, find, fold, for_each, last, max, min, reduce, some, sum, to_array, try_fold,
    try_for_each, try_to_array,
};

// Comparison
pub use crate::{cursors_equal_by, is_equal, is_equal_by};

// Object-as-map bridging
pub use crate::object::{self, ObjectMap, group_by};
