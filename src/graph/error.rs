//! Status and error types reported by graph operations.

use core::fmt;

use super::VertexId;
use crate::alloc::AllocError;
use crate::collections::StackError;

/// Outcome of a vertex insertion that did not fail.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InsertStatus {
    /// The vertex was appended to the vertex list.
    Inserted,
    /// A vertex with the same id is already present; nothing changed.
    AlreadyExists,
}

impl InsertStatus {
    /// Returns `true` if the graph grew.
    #[inline]
    pub fn is_inserted(self) -> bool {
        matches!(self, Self::Inserted)
    }
}

/// Outcome of a successful edge insertion.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EdgeStatus {
    /// The edge was appended; both endpoints already existed.
    Appended,
    /// The destination vertex did not exist and was created before appending.
    DestinationCreated,
}

/// Errors reported by graph mutations and traversals.
///
/// A failed operation never leaves a partial mutation behind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GraphError {
    /// The id is outside the accepted range (negative ids are reserved).
    InvalidVertex(VertexId),
    /// No vertex with this id exists.
    VertexNotFound(VertexId),
    /// The origin vertex has no edge to `dest`.
    EdgeNotFound {
        /// Origin vertex id.
        origin: VertexId,
        /// Destination vertex id.
        dest: VertexId,
    },
    /// Arena growth failed.
    Alloc(AllocError),
    /// A traversal stack ran out of room or underflowed.
    Stack(StackError),
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidVertex(id) => write!(f, "invalid vertex id {id}"),
            Self::VertexNotFound(id) => write!(f, "vertex {id} not found"),
            Self::EdgeNotFound { origin, dest } => {
                write!(f, "no edge from vertex {origin} to vertex {dest}")
            }
            Self::Alloc(err) => err.fmt(f),
            Self::Stack(err) => err.fmt(f),
        }
    }
}

impl std::error::Error for GraphError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Alloc(err) => Some(err),
            Self::Stack(err) => Some(err),
            _ => None,
        }
    }
}

impl From<AllocError> for GraphError {
    fn from(err: AllocError) -> Self {
        Self::Alloc(err)
    }
}

impl From<StackError> for GraphError {
    fn from(err: StackError) -> Self {
        Self::Stack(err)
    }
}
