//! Lazy sequence transformers.
//!
//! Every function here only wraps its inputs; nothing is pulled until a cursor
//! of the returned sequence is advanced.

mod chain;
mod entries;
mod filter;
mod flatten;
mod map;
mod take_while;
mod zip;

pub use chain::{Chain, ChainCursor, chain};
pub use entries::{Entries, EntriesCursor, entries};
pub use filter::{Filter, FilterCursor, FilterMap, FilterMapCursor, filter, filter_map};
pub use flatten::{FlatMap, Flatten, FlattenCursor, concat, flat_map, flatten};
pub use map::{Map, MapCursor, map};
pub use take_while::{TakeWhile, TakeWhileCursor, take_while};
pub use zip::{Zip, ZipAll, ZipAllCursor, ZipCursor, ZipVec, ZipVecCursor, zip, zip_all, zip_vec};
