//! # `linkgraph` - Linked Weighted Digraphs
//!
//! A directed, weighted graph built from linked structures: an insertion-ordered
//! list of vertex records, each owning a list of weighted outgoing edges.
//!
//! ## Storage Model
//!
//! Vertex and edge records live in slot arenas ([`alloc::Pool`]) and link to
//! each other by slot index. Edges name their destination by vertex id, never
//! by slot, so no operation can leave an edge pointing at freed storage:
//!
//! - Deleting a vertex releases its own edge list and then sweeps every other
//!   adjacency list for edges targeting it.
//! - Deleting an edge or vertex frees its slot immediately; freed slots are
//!   reused by later insertions.
//! - The vertex count is the number of occupied vertex slots, so it cannot
//!   drift from the real size of the list.
//!
//! ## Key Behaviors
//!
//! - **Unique vertices**: inserting an existing id reports
//!   [`InsertStatus::AlreadyExists`] and changes nothing.
//! - **Auto-created destinations**: [`LinkedGraph::insert_edge`] creates a
//!   missing destination vertex before appending the edge.
//! - **Parallel edges**: edges are not deduplicated.
//! - **Failure is local**: every failing operation leaves the graph unchanged.
//!
//! ## Example
//!
//! ```rust
//! use linkgraph::{EdgeStatus, LinkedGraph};
//!
//! let mut graph = LinkedGraph::new();
//! graph.insert_vertex(1).unwrap();
//! graph.insert_vertex(2).unwrap();
//! graph.insert_edge(1, 2, 10).unwrap();
//!
//! // Vertex 3 does not exist yet; the edge creates it.
//! assert_eq!(graph.insert_edge(1, 3, 5), Ok(EdgeStatus::DestinationCreated));
//! assert_eq!(graph.vertex_count(), 3);
//!
//! graph.delete_vertex(1).unwrap();
//! assert_eq!(graph.vertex_count(), 2);
//! assert_eq!(graph.edge_count(), 0);
//! ```
//!
//! ## Features
//!
//! - `tracing`: emit structured events for every mutation and every load/save.

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

mod macros;

pub mod alloc;
pub mod collections;
pub mod graph;
pub mod persist;

pub use collections::{BoundedStack, StackError};
pub use graph::{
    Edge, EdgeStatus, GraphError, InsertStatus, LinkedGraph, VertexId, VertexMut, VertexRecord,
    VertexRef, Weight,
};
pub use persist::{PersistError, TextFormat};

// Compile-time assertions for record layout
const _: () = {
    use core::mem;

    // An edge is just two ids' worth of data.
    assert!(mem::size_of::<Edge>() == 2 * mem::size_of::<i32>());

    // An empty adjacency list is inline in the vertex record: head, tail, len.
    assert!(mem::size_of::<graph::EdgeList>() <= mem::size_of::<usize>() * 5);
};
