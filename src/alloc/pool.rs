//! `Pool` - a slot arena with free-list reuse.
//!
//! Stores values of type `T` in a single backing vector and hands out stable
//! `usize` slot indices. Freed slots are threaded onto a free list and reused
//! by later allocations, so an index stays valid until the value it names is
//! taken out of the pool.
//!
//! Linked structures (vertex lists, edge lists) are built on top of this by
//! storing slot indices instead of pointers.
//!
//! # Features
//! - **Stable indices**: a slot keeps its index for as long as it is occupied.
//! - **Free list reuse**: freed slots are reused in O(1).
//! - **Fallible growth**: `try_alloc` surfaces allocation failure as [`AllocError`]
//!   instead of aborting.

use super::AllocError;

/// A slot in the pool.
#[derive(Debug, Clone)]
enum Slot<T> {
    Occupied(T),
    /// Index of the next free slot, if any.
    Free(Option<usize>),
}

/// A slot arena with free-list reuse.
#[derive(Debug, Clone)]
pub struct Pool<T> {
    slots: Vec<Slot<T>>,
    free_head: Option<usize>,
    len: usize,
    /// Growth past this many slots fails, to exercise allocation failure paths.
    #[cfg(test)]
    slot_limit: Option<usize>,
}

impl<T> Pool<T> {
    /// Creates a new empty pool.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            len: 0,
            #[cfg(test)]
            slot_limit: None,
        }
    }

    /// Creates a new pool, reserving room for `capacity` values if possible.
    ///
    /// The reservation is best-effort: if it cannot be made the pool starts
    /// empty and grows on demand.
    pub fn with_capacity(capacity: usize) -> Self {
        let mut pool = Self::new();
        let _ = pool.slots.try_reserve(capacity);
        pool
    }

    #[cfg(test)]
    pub(crate) fn set_slot_limit(&mut self, limit: usize) {
        self.slot_limit = Some(limit);
    }

    /// Returns the number of occupied slots.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if no slot is occupied.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the number of slots ever handed out (occupied or free).
    #[inline]
    pub fn slot_count(&self) -> usize {
        self.slots.len()
    }

    /// Stores `value` in the pool and returns its slot index.
    ///
    /// A free slot is reused when one exists; otherwise the backing vector grows.
    ///
    /// # Errors
    /// Returns `AllocError` if the backing vector cannot grow. The pool is left unchanged.
    pub fn try_alloc(&mut self, value: T) -> Result<usize, AllocError> {
        if let Some(idx) = self.free_head {
            if let Slot::Free(next_free) = self.slots[idx] {
                self.free_head = next_free;
                self.slots[idx] = Slot::Occupied(value);
                self.len += 1;
                return Ok(idx);
            }
        }

        #[cfg(test)]
        if self.slot_limit.is_some_and(|limit| self.slots.len() >= limit) {
            return Err(AllocError);
        }
        self.slots.try_reserve(1).map_err(|_| AllocError)?;
        let idx = self.slots.len();
        self.slots.push(Slot::Occupied(value));
        self.len += 1;
        Ok(idx)
    }

    /// Removes the value at `index` and returns it, putting the slot on the free list.
    ///
    /// Returns `None` if the slot is free or out of bounds.
    pub fn take(&mut self, index: usize) -> Option<T> {
        let slot = self.slots.get_mut(index)?;
        if matches!(slot, Slot::Free(_)) {
            return None;
        }
        let old = core::mem::replace(slot, Slot::Free(self.free_head));
        self.free_head = Some(index);
        self.len -= 1;
        match old {
            Slot::Occupied(value) => Some(value),
            Slot::Free(_) => None,
        }
    }

    /// Returns a shared reference to the value at `index`.
    ///
    /// Returns `None` if the slot is free or out of bounds.
    #[inline]
    pub fn get(&self, index: usize) -> Option<&T> {
        match self.slots.get(index)? {
            Slot::Occupied(value) => Some(value),
            Slot::Free(_) => None,
        }
    }

    /// Returns a mutable reference to the value at `index`.
    #[inline]
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        match self.slots.get_mut(index)? {
            Slot::Occupied(value) => Some(value),
            Slot::Free(_) => None,
        }
    }

    /// Returns `true` if `index` names an occupied slot.
    #[inline]
    pub fn contains(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Iterates over occupied slots as `(index, &value)` in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (usize, &T)> + '_ {
        self.slots.iter().enumerate().filter_map(|(i, slot)| match slot {
            Slot::Occupied(value) => Some((i, value)),
            Slot::Free(_) => None,
        })
    }

    /// Iterates mutably over occupied slots as `(index, &mut value)` in slot order.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = (usize, &mut T)> + '_ {
        self.slots.iter_mut().enumerate().filter_map(|(i, slot)| match slot {
            Slot::Occupied(value) => Some((i, value)),
            Slot::Free(_) => None,
        })
    }

    /// Drops every value and releases the free list.
    pub fn clear(&mut self) {
        self.slots.clear();
        self.free_head = None;
        self.len = 0;
    }
}

impl<T> Default for Pool<T> {
    fn default() -> Self {
        Self::new()
    }
}
