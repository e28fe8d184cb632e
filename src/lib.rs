//! # lazyseq: Composable Lazy Sequences
//!
//! Build multi-stage data pipelines that compute values only when they are
//! pulled, without materializing intermediate collections.
//!
//! ## Core Traits
//!
//! - **[`Cursor`]**: A single-use, fused pull handle returning [`Step::Yielded`]
//!   until it reports [`Step::Complete`]
//! - **[`Sequence`]**: A re-iterable source that hands out independent cursors
//!
//! ## Key Features
//!
//! - **Lazy**: Building a pipeline calls no user callback; values are computed on pull
//! - **Short-circuiting**: `take_while`, `find`, `some`, `every`, `zip` and
//!   `is_equal` stop pulling their sources as soon as the answer is known
//! - **Re-iterable**: Every derived sequence can be traversed again from the start
//!
//! ## Example
//!
//! ```
//! use lazyseq::prelude::*;
//!
//! let words = vec!["apple", "avocado", "banana", "blueberry", "cherry"];
//! let by_initial = group_by(
//!     map(&words[..], |w, _| (w[..1].to_string(), 1)),
//!     |count, one| count + one,
//! );
//! assert_eq!(by_initial.get("b"), Some(&2));
//!
//! let pairs = zip(generate(|i| i, None), take_while(&words[..], |w, _| w.starts_with('a')));
//! assert_eq!(pairs.to_array(), vec![(0, "apple"), (1, "avocado")]);
//! ```
//!
//! ## Common Functions
//!
//! **Building Sequences:**
//! - [`generate(f, count)`] - `f(0), f(1), ...`, bounded or not
//! - [`repeat(value, count)`] - Clones of one value
//! - [`iterable(x)`] - Any cloneable `IntoIterator`
//! - [`from_fn(factory)`] - A closure producing fresh cursors
//!
//! **Transforming:**
//! - [`map`], [`flat_map`], [`filter`], [`filter_map`], [`take_while`]
//! - [`flatten`] / [`concat`], [`chain`], [`zip`] / [`zip_all`] / [`zip_vec`]
//!
//! **Consuming:**
//! - [`fold`], [`reduce`], [`sum`], [`min`], [`max`], [`to_array`]
//! - [`find`], [`some`], [`every`], [`is_equal`]
//! - [`group_by`] into an [`ObjectMap`]

mod aggregate;
mod build;
mod combinators;
mod compare;
mod cursor;
mod iter;
pub mod object;
pub mod prelude;
mod sequence;
mod step;

pub use aggregate::*;
pub use build::*;
pub use combinators::*;
pub use compare::*;
pub use cursor::*;
pub use iter::*;
pub use object::{ObjectMap, group_by};
pub use sequence::*;
pub use step::*;
