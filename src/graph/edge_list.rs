//! Per-vertex adjacency lists.
//!
//! Every vertex owns one [`EdgeList`]: a singly linked list of outgoing edges
//! whose nodes live in the graph's shared edge arena. The list itself is only
//! a head/tail pair plus a length, so it is `Copy` and cheap to store inline in
//! a vertex record. All operations take the arena explicitly.
//!
//! New edges are appended at the tail. Edges to the same destination are not
//! deduplicated; the list may hold several edges to one vertex.

use serde::{Deserialize, Serialize};

use super::{VertexId, Weight};
use crate::alloc::{AllocError, Pool};
use crate::macros::trace_detail;

/// A weighted, directed edge as seen from its origin vertex.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Edge {
    /// Destination vertex id.
    pub dest: VertexId,
    /// Edge weight.
    pub weight: Weight,
}

impl Edge {
    /// Creates an edge to `dest` with `weight`.
    #[inline]
    pub const fn new(dest: VertexId, weight: Weight) -> Self {
        Self { dest, weight }
    }
}

/// Arena node of an edge list.
#[derive(Debug, Clone)]
pub(crate) struct EdgeNode {
    edge: Edge,
    next: Option<usize>,
}

/// Arena holding the edge nodes of every list in a graph.
pub(crate) type EdgePool = Pool<EdgeNode>;

/// An ordered list of outgoing edges stored in an [`EdgePool`].
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct EdgeList {
    head: Option<usize>,
    tail: Option<usize>,
    len: usize,
}

impl EdgeList {
    /// Creates an empty list.
    pub const fn new() -> Self {
        Self {
            head: None,
            tail: None,
            len: 0,
        }
    }

    /// Number of edges in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Returns `true` if the list holds no edges.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.head.is_none()
    }

    /// Appends an edge to `dest` at the tail.
    ///
    /// Existing edges to `dest` are left in place.
    pub(crate) fn insert(
        &mut self,
        pool: &mut EdgePool,
        dest: VertexId,
        weight: Weight,
    ) -> Result<(), AllocError> {
        let idx = pool.try_alloc(EdgeNode {
            edge: Edge::new(dest, weight),
            next: None,
        })?;

        match self.tail {
            Some(tail) => {
                if let Some(node) = pool.get_mut(tail) {
                    node.next = Some(idx);
                }
            }
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.len += 1;
        Ok(())
    }

    /// Removes the first edge to `dest` and returns it.
    ///
    /// Returns `None` and leaves the list untouched if no such edge exists.
    pub(crate) fn delete(&mut self, pool: &mut EdgePool, dest: VertexId) -> Option<Edge> {
        let mut prev = None;
        let mut current = self.head;
        while let Some(idx) = current {
            let node = pool.get(idx)?;
            if node.edge.dest == dest {
                return self.unlink(pool, prev, idx);
            }
            prev = Some(idx);
            current = node.next;
        }
        None
    }

    /// Removes every edge to `dest`, returning how many were released.
    pub(crate) fn purge(&mut self, pool: &mut EdgePool, dest: VertexId) -> usize {
        let mut removed = 0;
        let mut prev = None;
        let mut current = self.head;
        while let Some(idx) = current {
            let Some(node) = pool.get(idx) else { break };
            let (next, matches) = (node.next, node.edge.dest == dest);
            if matches {
                self.unlink(pool, prev, idx);
                removed += 1;
            } else {
                prev = Some(idx);
            }
            current = next;
        }
        removed
    }

    /// Releases every edge in the list and leaves it empty.
    ///
    /// Returns the number of edges released.
    pub(crate) fn delete_all(&mut self, pool: &mut EdgePool) -> usize {
        let mut released = 0;
        let mut current = self.head;
        while let Some(idx) = current {
            current = pool.take(idx).and_then(|node| node.next);
            released += 1;
        }
        *self = Self::new();
        released
    }

    /// Returns `true` if at least one edge targets `dest`.
    pub(crate) fn contains(&self, pool: &EdgePool, dest: VertexId) -> bool {
        self.iter(pool).any(|edge| edge.dest == dest)
    }

    /// Iterates over the edges in insertion order.
    pub(crate) fn iter<'a>(&self, pool: &'a EdgePool) -> Edges<'a> {
        Edges {
            pool,
            current: self.head,
            remaining: self.len,
        }
    }

    /// Unlinks the node at `idx`, whose predecessor is `prev`, and frees its slot.
    fn unlink(&mut self, pool: &mut EdgePool, prev: Option<usize>, idx: usize) -> Option<Edge> {
        let node = pool.take(idx)?;
        match prev {
            Some(p) => {
                if let Some(prev_node) = pool.get_mut(p) {
                    prev_node.next = node.next;
                }
            }
            None => self.head = node.next,
        }
        if self.tail == Some(idx) {
            self.tail = prev;
        }
        self.len -= 1;
        trace_detail!(dest = node.edge.dest, weight = node.edge.weight, "edge released");
        Some(node.edge)
    }
}

/// Iterator over the edges of one vertex, in insertion order.
#[derive(Clone)]
pub struct Edges<'a> {
    pool: &'a EdgePool,
    current: Option<usize>,
    remaining: usize,
}

impl Iterator for Edges<'_> {
    type Item = Edge;

    fn next(&mut self) -> Option<Self::Item> {
        let node = self.pool.get(self.current?)?;
        self.current = node.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(node.edge)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Edges<'_> {}

impl core::fmt::Debug for Edges<'_> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
