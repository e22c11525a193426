//! Supporting collections.
//!
//! - `stack`: fixed-capacity stack used by graph traversals

pub mod stack;

pub use stack::{BoundedStack, StackError, EMPTY_TOP};
