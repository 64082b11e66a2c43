//! An ordered set based on a red-black tree.
//!
//! [`Set`](set/struct.Set.html) keeps at most one item per equivalence class of a caller-supplied
//! comparator, rebalancing after every insertion so that lookups, insertions, and the depth of
//! in-order traversal stay logarithmic in the number of items. Items are released through a
//! [`Dispose`](trait.Dispose.html) capability when the set is torn down.

#![deny(missing_docs)]

pub mod analyzer;
mod dispose;
mod error;
mod node;
#[cfg(feature = "ordered_iter")]
mod ordered_iter;
#[cfg(feature = "quickcheck")]
mod quickcheck;
pub mod set;

pub use dispose::{Discard, Dispose};
pub use error::InsertError;
pub use set::Set;
