//! `LinkedGraph` - a directed, weighted graph over linked vertex and edge lists.
//!
//! The graph owns two arenas: one for vertex records (linked in insertion
//! order) and one for edge records (linked per origin vertex). Edges name
//! their destination by id, never by slot, so removing a vertex cannot leave a
//! dangling reference behind; the referential sweep in
//! [`LinkedGraph::delete_vertex`] removes every edge that names it.
//!
//! # Complexity
//! - `insert_vertex`, `exists_vertex`, `find_vertex`: O(1) expected
//! - `insert_edge`: O(out-degree of origin) (append walks to the list tail)
//! - `delete_edge`: O(out-degree of origin)
//! - `delete_vertex`: O(V + E) (sweeps every adjacency list)

use core::fmt;

use super::edge_list::{Edge, EdgePool, Edges};
use super::error::{EdgeStatus, GraphError, InsertStatus};
use super::vertex_list::VertexList;
use super::view::{VertexMut, VertexRef, Vertices};
use super::{VertexId, Weight};
use crate::macros::{trace_detail, trace_event};

/// A directed, weighted graph with insertion-ordered vertices.
///
/// Vertex ids are unique and non-negative. Edges are not deduplicated: two
/// edges from the same origin to the same destination may coexist.
#[derive(Clone, Default)]
pub struct LinkedGraph {
    vertices: VertexList,
    edges: EdgePool,
}

#[inline]
fn check_id(id: VertexId) -> Result<(), GraphError> {
    if id < 0 {
        return Err(GraphError::InvalidVertex(id));
    }
    Ok(())
}

impl LinkedGraph {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: VertexList::new(),
            edges: EdgePool::new(),
        }
    }

    /// Creates an empty graph with room for `vertex_hint` vertices.
    ///
    /// The hint only sizes the arenas; [`vertex_count`](Self::vertex_count)
    /// always reports the number of vertices actually present.
    pub fn with_capacity(vertex_hint: usize) -> Self {
        Self {
            vertices: VertexList::with_capacity(vertex_hint),
            edges: EdgePool::with_capacity(vertex_hint),
        }
    }

    /// Number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges across all adjacency lists.
    #[inline]
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Returns `true` if a vertex with `id` exists.
    #[inline]
    pub fn exists_vertex(&self, id: VertexId) -> bool {
        self.vertices.exists(id)
    }

    /// Adds a vertex with `id` at the end of the vertex list.
    ///
    /// # Errors
    /// - [`GraphError::InvalidVertex`] if `id` is negative.
    /// - [`GraphError::Alloc`] if the vertex arena cannot grow.
    ///
    /// A duplicate id is not an error: it yields [`InsertStatus::AlreadyExists`]
    /// and leaves the graph unchanged.
    pub fn insert_vertex(&mut self, id: VertexId) -> Result<InsertStatus, GraphError> {
        check_id(id)?;
        if self.vertices.insert(id)? {
            trace_event!(vertex = id, "vertex inserted");
            Ok(InsertStatus::Inserted)
        } else {
            trace_detail!(vertex = id, "vertex already present");
            Ok(InsertStatus::AlreadyExists)
        }
    }

    /// Removes the vertex with `id`, its outgoing edges, and every edge from
    /// another vertex that targets it.
    ///
    /// Returns the total number of edges released (outgoing plus incoming).
    ///
    /// # Errors
    /// [`GraphError::VertexNotFound`] if no such vertex exists; nothing changes.
    pub fn delete_vertex(&mut self, id: VertexId) -> Result<usize, GraphError> {
        let released = self
            .vertices
            .delete(id, &mut self.edges)
            .ok_or(GraphError::VertexNotFound(id))?;

        let mut purged = 0;
        for vertex in self.vertices.iter_mut() {
            purged += vertex.edges.purge(&mut self.edges, id);
        }

        trace_event!(
            vertex = id,
            outgoing = released,
            incoming = purged,
            "vertex deleted"
        );
        Ok(released + purged)
    }

    /// Returns a view of the vertex with `id`.
    pub fn find_vertex(&self, id: VertexId) -> Option<VertexRef<'_>> {
        self.vertices
            .find(id)
            .map(|vertex| VertexRef::new(vertex, &self.edges))
    }

    /// Returns a mutable view of the vertex with `id`.
    pub fn find_vertex_mut(&mut self, id: VertexId) -> Option<VertexMut<'_>> {
        let edges = &self.edges;
        self.vertices
            .find_mut(id)
            .map(|vertex| VertexMut::new(vertex, edges))
    }

    /// Appends an edge `origin -> dest` with `weight` to the origin's list.
    ///
    /// If `dest` does not exist yet it is created first and appended to the
    /// vertex list; this is the only way an edge operation grows the vertex set.
    ///
    /// # Errors
    /// - [`GraphError::VertexNotFound`] if `origin` does not exist.
    /// - [`GraphError::InvalidVertex`] if `dest` is negative.
    /// - [`GraphError::Alloc`] if an arena cannot grow. A destination created
    ///   by this call is removed again, so the graph is unchanged.
    pub fn insert_edge(
        &mut self,
        origin: VertexId,
        dest: VertexId,
        weight: Weight,
    ) -> Result<EdgeStatus, GraphError> {
        if !self.vertices.exists(origin) {
            return Err(GraphError::VertexNotFound(origin));
        }
        check_id(dest)?;

        let created = self.vertices.insert(dest)?;
        if created {
            trace_event!(vertex = dest, origin = origin, "destination vertex created");
        }

        let appended = match self.vertices.find_mut(origin) {
            Some(vertex) => vertex.edges.insert(&mut self.edges, dest, weight),
            None => return Err(GraphError::VertexNotFound(origin)),
        };
        if let Err(err) = appended {
            if created {
                self.vertices.delete(dest, &mut self.edges);
            }
            return Err(err.into());
        }

        trace_event!(origin = origin, dest = dest, weight = weight, "edge inserted");
        Ok(if created {
            EdgeStatus::DestinationCreated
        } else {
            EdgeStatus::Appended
        })
    }

    /// Removes the first edge `origin -> dest` and returns it.
    ///
    /// # Errors
    /// - [`GraphError::VertexNotFound`] if either endpoint does not exist.
    /// - [`GraphError::EdgeNotFound`] if the origin has no edge to `dest`.
    ///
    /// On error the graph is unchanged.
    pub fn delete_edge(&mut self, origin: VertexId, dest: VertexId) -> Result<Edge, GraphError> {
        if !self.vertices.exists(dest) {
            return Err(GraphError::VertexNotFound(dest));
        }
        let vertex = self
            .vertices
            .find_mut(origin)
            .ok_or(GraphError::VertexNotFound(origin))?;
        let edge = vertex
            .edges
            .delete(&mut self.edges, dest)
            .ok_or(GraphError::EdgeNotFound { origin, dest })?;

        trace_event!(origin = origin, dest = dest, weight = edge.weight, "edge deleted");
        Ok(edge)
    }

    /// Returns `true` if `origin` has at least one edge to `dest`.
    pub fn contains_edge(&self, origin: VertexId, dest: VertexId) -> bool {
        self.vertices
            .find(origin)
            .is_some_and(|vertex| vertex.edges.contains(&self.edges, dest))
    }

    /// Outgoing edges of `id`, or `None` if the vertex does not exist.
    pub fn edges(&self, id: VertexId) -> Option<Edges<'_>> {
        self.vertices
            .find(id)
            .map(|vertex| vertex.edges.iter(&self.edges))
    }

    /// Iterates over all vertices in insertion order.
    pub fn iter(&self) -> Vertices<'_> {
        Vertices::new(self.vertices.iter(), &self.edges)
    }

    /// Clears the traversal flag of every vertex.
    pub fn reset_visited(&mut self) {
        for vertex in self.vertices.iter_mut() {
            vertex.visited = false;
        }
    }

    /// Removes every vertex and edge.
    pub fn clear(&mut self) {
        self.vertices.clear();
        self.edges.clear();
        trace_event!("graph cleared");
    }
}

impl<'a> IntoIterator for &'a LinkedGraph {
    type Item = VertexRef<'a>;
    type IntoIter = Vertices<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Debug for LinkedGraph {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_map()
            .entries(self.iter().map(|v| (v.id(), v.edges())))
            .finish()
    }
}
