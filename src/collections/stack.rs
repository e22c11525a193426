//! `BoundedStack` - a fixed-capacity LIFO stack.
//!
//! Traversals built atop the graph push vertex ids here. The capacity is fixed
//! at construction; pushing past it or popping an empty stack fails with a
//! [`StackError`] instead of touching memory outside the buffer.
//!
//! The top position follows the usual sentinel convention: [`BoundedStack::top`]
//! is `-1` exactly when the stack is empty.

use core::fmt;

/// Sentinel top index of an empty stack.
pub const EMPTY_TOP: isize = -1;

/// Bounds violations reported by [`BoundedStack`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StackError {
    /// A push was attempted on a full stack.
    Overflow {
        /// The fixed capacity of the stack.
        capacity: usize,
    },
    /// A pop was attempted on an empty stack.
    Underflow,
}

impl fmt::Display for StackError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Overflow { capacity } => write!(f, "stack overflow (capacity {capacity})"),
            Self::Underflow => f.write_str("stack underflow"),
        }
    }
}

impl std::error::Error for StackError {}

/// A fixed-capacity stack.
#[derive(Debug, Clone)]
pub struct BoundedStack<T> {
    items: Vec<T>,
    capacity: usize,
}

impl<T> BoundedStack<T> {
    /// Creates an empty stack that holds at most `capacity` items.
    ///
    /// Storage for `capacity` items is reserved up front when possible;
    /// otherwise the buffer grows as items are pushed.
    pub fn new(capacity: usize) -> Self {
        let mut items = Vec::new();
        let _ = items.try_reserve(capacity);
        Self { items, capacity }
    }

    /// Returns the fixed capacity.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Returns the number of items on the stack.
    #[inline]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the top index is the empty sentinel.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.top() == EMPTY_TOP
    }

    /// Returns `true` if another push would overflow.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.items.len() == self.capacity
    }

    /// Returns the index of the top item, or [`EMPTY_TOP`] when empty.
    #[inline]
    #[allow(clippy::cast_possible_wrap)]
    pub fn top(&self) -> isize {
        self.items.len() as isize - 1
    }

    /// Pushes `item` and returns the new top index.
    ///
    /// # Errors
    /// Returns [`StackError::Overflow`] if the stack is full; the stack is unchanged.
    pub fn push(&mut self, item: T) -> Result<isize, StackError> {
        if self.is_full() {
            return Err(StackError::Overflow {
                capacity: self.capacity,
            });
        }
        self.items.push(item);
        Ok(self.top())
    }

    /// Removes and returns the top item.
    ///
    /// # Errors
    /// Returns [`StackError::Underflow`] if the stack is empty.
    pub fn pop(&mut self) -> Result<T, StackError> {
        self.items.pop().ok_or(StackError::Underflow)
    }

    /// Returns the top item without removing it.
    #[inline]
    pub fn peek(&self) -> Option<&T> {
        self.items.last()
    }

    /// Removes every item; the capacity is kept.
    pub fn clear(&mut self) {
        self.items.clear();
    }
}
