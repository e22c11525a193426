//! Directed, weighted graphs over linked vertex and edge lists.
//!
//! The graph is organized bottom-up:
//! - `edge_list`: per-vertex adjacency lists stored in a shared edge arena
//! - `vertex_list`: insertion-ordered vertex records with an id index
//! - `linked`: [`LinkedGraph`], the public mutation and query surface
//! - `view`: borrowed vertex views and the enumeration iterator
//! - `record`: serializable records for persistence
//! - `traversal`: stack-driven walks using the visited flags

pub mod edge_list;
pub mod error;
pub mod linked;
pub mod record;
pub mod traversal;
pub(crate) mod vertex_list;
pub mod view;

/// Vertex identifier. Valid ids are non-negative.
pub type VertexId = i32;

/// Edge weight.
pub type Weight = i32;

pub use edge_list::{Edge, EdgeList, Edges};
pub use error::{EdgeStatus, GraphError, InsertStatus};
pub use linked::LinkedGraph;
pub use record::VertexRecord;
pub use traversal::{depth_first, has_path};
pub use view::{VertexMut, VertexRef, Vertices};
