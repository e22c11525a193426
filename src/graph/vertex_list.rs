//! The ordered vertex list of a graph.
//!
//! Vertex records live in a [`Pool`] and are linked in insertion order
//! (`prev`/`next` slot indices), so enumeration always follows the order in
//! which vertices were added. Lookup by id goes through a separate hash index;
//! the index never influences enumeration order.

use std::collections::HashMap;

use super::edge_list::{EdgeList, EdgePool};
use super::VertexId;
use crate::alloc::{AllocError, Pool};

/// A vertex record: id, owned adjacency list, traversal scratch flag, list links.
#[derive(Debug, Clone)]
pub(crate) struct Vertex {
    pub(crate) id: VertexId,
    pub(crate) edges: EdgeList,
    pub(crate) visited: bool,
    prev: Option<usize>,
    next: Option<usize>,
}

impl Vertex {
    fn new(id: VertexId) -> Self {
        Self {
            id,
            edges: EdgeList::new(),
            visited: false,
            prev: None,
            next: None,
        }
    }
}

/// Vertices in insertion order, with an id index for O(1) lookup.
#[derive(Debug, Clone, Default)]
pub(crate) struct VertexList {
    pool: Pool<Vertex>,
    index: HashMap<VertexId, usize>,
    head: Option<usize>,
    tail: Option<usize>,
}

impl VertexList {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    /// Reserves room for `capacity` vertices where possible; the hint never fails.
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        let mut index = HashMap::new();
        let _ = index.try_reserve(capacity);
        Self {
            pool: Pool::with_capacity(capacity),
            index,
            head: None,
            tail: None,
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.pool.len()
    }

    #[inline]
    pub(crate) fn exists(&self, id: VertexId) -> bool {
        self.index.contains_key(&id)
    }

    /// Appends a new vertex with `id` at the tail.
    ///
    /// Returns `Ok(false)` without touching the list if `id` is already present.
    pub(crate) fn insert(&mut self, id: VertexId) -> Result<bool, AllocError> {
        if self.exists(id) {
            return Ok(false);
        }
        self.index.try_reserve(1).map_err(|_| AllocError)?;

        let mut vertex = Vertex::new(id);
        vertex.prev = self.tail;
        let idx = self.pool.try_alloc(vertex)?;

        match self.tail.and_then(|tail| self.pool.get_mut(tail)) {
            Some(tail) => tail.next = Some(idx),
            None => self.head = Some(idx),
        }
        self.tail = Some(idx);
        self.index.insert(id, idx);
        Ok(true)
    }

    /// Removes the vertex with `id`, releasing its whole edge list first.
    ///
    /// Returns the number of outgoing edges released, or `None` if no such
    /// vertex exists (the list is left untouched). Edges held by other vertices
    /// that point at `id` are not touched here.
    pub(crate) fn delete(&mut self, id: VertexId, edges: &mut EdgePool) -> Option<usize> {
        let idx = self.index.remove(&id)?;
        let mut vertex = self.pool.take(idx)?;
        let released = vertex.edges.delete_all(edges);

        match vertex.prev.and_then(|p| self.pool.get_mut(p)) {
            Some(prev) => prev.next = vertex.next,
            None => self.head = vertex.next,
        }
        match vertex.next.and_then(|n| self.pool.get_mut(n)) {
            Some(next) => next.prev = vertex.prev,
            None => self.tail = vertex.prev,
        }
        Some(released)
    }

    pub(crate) fn find(&self, id: VertexId) -> Option<&Vertex> {
        self.index.get(&id).and_then(|&idx| self.pool.get(idx))
    }

    pub(crate) fn find_mut(&mut self, id: VertexId) -> Option<&mut Vertex> {
        let idx = *self.index.get(&id)?;
        self.pool.get_mut(idx)
    }

    /// Iterates over vertices in insertion order.
    pub(crate) fn iter(&self) -> VertexIter<'_> {
        VertexIter {
            pool: &self.pool,
            current: self.head,
            remaining: self.pool.len(),
        }
    }

    /// Visits every vertex mutably, in no particular order.
    pub(crate) fn iter_mut(&mut self) -> impl Iterator<Item = &mut Vertex> + '_ {
        self.pool.iter_mut().map(|(_, vertex)| vertex)
    }

    pub(crate) fn clear(&mut self) {
        self.pool.clear();
        self.index.clear();
        self.head = None;
        self.tail = None;
    }
}

/// Insertion-order iterator over vertex records.
#[derive(Clone)]
pub(crate) struct VertexIter<'a> {
    pool: &'a Pool<Vertex>,
    current: Option<usize>,
    remaining: usize,
}

impl<'a> Iterator for VertexIter<'a> {
    type Item = &'a Vertex;

    fn next(&mut self) -> Option<Self::Item> {
        let vertex = self.pool.get(self.current?)?;
        self.current = vertex.next;
        self.remaining = self.remaining.saturating_sub(1);
        Some(vertex)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ids(list: &VertexList) -> Vec<VertexId> {
        list.iter().map(|v| v.id).collect()
    }

    #[test]
    fn test_first_insert_becomes_head() {
        let mut list = VertexList::new();
        assert_eq!(list.insert(5), Ok(true));
        assert_eq!(ids(&list), vec![5]);
        assert!(list.exists(5));
    }

    #[test]
    fn test_insert_appends_and_rejects_duplicates() {
        let mut list = VertexList::with_capacity(4);
        assert_eq!(list.insert(3), Ok(true));
        assert_eq!(list.insert(1), Ok(true));
        assert_eq!(list.insert(2), Ok(true));
        assert_eq!(list.insert(1), Ok(false));

        assert_eq!(ids(&list), vec![3, 1, 2]);
        assert_eq!(list.len(), 3);
    }

    #[test]
    fn test_delete_head_middle_tail() {
        let mut edges = EdgePool::new();
        let mut list = VertexList::new();
        for id in 1..=5 {
            list.insert(id).unwrap();
        }

        assert_eq!(list.delete(1, &mut edges), Some(0));
        assert_eq!(ids(&list), vec![2, 3, 4, 5]);

        assert_eq!(list.delete(3, &mut edges), Some(0));
        assert_eq!(ids(&list), vec![2, 4, 5]);

        assert_eq!(list.delete(5, &mut edges), Some(0));
        assert_eq!(ids(&list), vec![2, 4]);

        // New vertices still append after the current tail, reusing freed slots.
        list.insert(6).unwrap();
        assert_eq!(ids(&list), vec![2, 4, 6]);
        assert!(!list.exists(1));
        assert!(list.find(3).is_none());
    }

    #[test]
    fn test_delete_only_vertex_empties_list() {
        let mut edges = EdgePool::new();
        let mut list = VertexList::new();
        list.insert(1).unwrap();
        assert_eq!(list.delete(1, &mut edges), Some(0));
        assert_eq!(list.len(), 0);
        assert!(list.iter().next().is_none());

        list.insert(2).unwrap();
        assert_eq!(ids(&list), vec![2]);
    }

    #[test]
    fn test_delete_absent_is_noop() {
        let mut edges = EdgePool::new();
        let mut list = VertexList::new();
        assert_eq!(list.delete(1, &mut edges), None);

        list.insert(1).unwrap();
        assert_eq!(list.delete(2, &mut edges), None);
        assert_eq!(ids(&list), vec![1]);
    }

    #[test]
    fn test_delete_releases_owned_edges() {
        let mut edges = EdgePool::new();
        let mut list = VertexList::new();
        list.insert(1).unwrap();
        list.insert(2).unwrap();
        {
            let v1 = list.find_mut(1).unwrap();
            v1.edges.insert(&mut edges, 2, 10).unwrap();
            v1.edges.insert(&mut edges, 2, 11).unwrap();
        }
        list.find_mut(2).unwrap().edges.insert(&mut edges, 1, 3).unwrap();

        assert_eq!(list.delete(1, &mut edges), Some(2));
        assert_eq!(edges.len(), 1);
    }

    #[test]
    fn test_find_mut_reaches_vertex_state() {
        let mut list = VertexList::new();
        list.insert(9).unwrap();
        list.find_mut(9).unwrap().visited = true;
        assert!(list.find(9).unwrap().visited);
        assert!(list.find_mut(10).is_none());
    }
}
