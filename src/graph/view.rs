//! Borrowed views of vertices and the graph enumeration iterator.

use core::fmt;

use super::edge_list::{EdgePool, Edges};
use super::vertex_list::{Vertex, VertexIter};
use super::VertexId;

/// A shared reference to one vertex and its adjacency list.
#[derive(Clone, Copy)]
pub struct VertexRef<'a> {
    vertex: &'a Vertex,
    edges: &'a EdgePool,
}

impl<'a> VertexRef<'a> {
    pub(crate) fn new(vertex: &'a Vertex, edges: &'a EdgePool) -> Self {
        Self { vertex, edges }
    }

    /// The vertex id.
    #[inline]
    pub fn id(&self) -> VertexId {
        self.vertex.id
    }

    /// Outgoing edges in insertion order.
    pub fn edges(&self) -> Edges<'a> {
        self.vertex.edges.iter(self.edges)
    }

    /// Number of outgoing edges.
    #[inline]
    pub fn out_degree(&self) -> usize {
        self.vertex.edges.len()
    }

    /// The traversal scratch flag.
    #[inline]
    pub fn is_visited(&self) -> bool {
        self.vertex.visited
    }
}

impl fmt::Debug for VertexRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Vertex")
            .field("id", &self.id())
            .field("edges", &self.edges())
            .finish()
    }
}

/// A mutable reference to one vertex.
///
/// Only the traversal flag is writable; edges are changed through the graph so
/// that destination checks and auto-creation stay in one place.
pub struct VertexMut<'a> {
    vertex: &'a mut Vertex,
    edges: &'a EdgePool,
}

impl<'a> VertexMut<'a> {
    pub(crate) fn new(vertex: &'a mut Vertex, edges: &'a EdgePool) -> Self {
        Self { vertex, edges }
    }

    /// The vertex id.
    #[inline]
    pub fn id(&self) -> VertexId {
        self.vertex.id
    }

    /// Outgoing edges in insertion order.
    pub fn edges(&self) -> Edges<'_> {
        self.vertex.edges.iter(self.edges)
    }

    /// The traversal scratch flag.
    #[inline]
    pub fn is_visited(&self) -> bool {
        self.vertex.visited
    }

    /// Sets the traversal scratch flag.
    #[inline]
    pub fn set_visited(&mut self, visited: bool) {
        self.vertex.visited = visited;
    }
}

/// Iterator over every vertex of a graph, in insertion order.
///
/// Created by [`LinkedGraph::iter`](super::LinkedGraph::iter). Read-only; it
/// does not touch visited flags and can be recreated at any time.
#[derive(Clone)]
pub struct Vertices<'a> {
    inner: VertexIter<'a>,
    edges: &'a EdgePool,
}

impl<'a> Vertices<'a> {
    pub(crate) fn new(inner: VertexIter<'a>, edges: &'a EdgePool) -> Self {
        Self { inner, edges }
    }
}

impl<'a> Iterator for Vertices<'a> {
    type Item = VertexRef<'a>;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.inner.next()?;
        Some(VertexRef::new(vertex, self.edges))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl ExactSizeIterator for Vertices<'_> {}

impl fmt::Debug for Vertices<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
