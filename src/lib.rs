//! A closed integer interval that can be walked forward or in reverse, with
//! values removed along the way. Removals are shared by every later pass.

mod direction;
mod range;
mod traversal;

pub use direction::Direction;
pub use range::Range;
pub use traversal::{InvalidState, Traversal, TraversalError};
