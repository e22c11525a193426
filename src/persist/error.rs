use core::fmt;
use std::io;

use crate::graph::{GraphError, VertexId};

/// What went wrong on a line of the text format.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseErrorKind {
    /// A field is not a valid integer.
    InvalidInteger(String),
    /// A destination field has no weight after it.
    MissingWeight(VertexId),
    /// The vertex was already declared on an earlier line.
    DuplicateVertex(VertexId),
    /// A vertex or destination id is negative.
    InvalidVertex(VertexId),
}

impl fmt::Display for ParseErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidInteger(field) => write!(f, "invalid integer {field:?}"),
            Self::MissingWeight(dest) => write!(f, "edge to vertex {dest} has no weight"),
            Self::DuplicateVertex(id) => write!(f, "vertex {id} declared twice"),
            Self::InvalidVertex(id) => write!(f, "invalid vertex id {id}"),
        }
    }
}

/// Errors reported while loading or storing a graph.
#[derive(Debug)]
pub enum PersistError {
    /// Reading or writing the underlying file failed.
    Io(io::Error),
    /// The text input is malformed.
    Parse {
        /// 1-based line number.
        line: usize,
        /// The problem found on that line.
        kind: ParseErrorKind,
    },
    /// The JSON snapshot could not be encoded or decoded.
    Json(serde_json::Error),
    /// The records were well-formed but the graph rejected them.
    Graph(GraphError),
}

impl fmt::Display for PersistError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "i/o error: {err}"),
            Self::Parse { line, kind } => write!(f, "line {line}: {kind}"),
            Self::Json(err) => write!(f, "snapshot error: {err}"),
            Self::Graph(err) => write!(f, "graph error: {err}"),
        }
    }
}

impl std::error::Error for PersistError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Json(err) => Some(err),
            Self::Graph(err) => Some(err),
            Self::Parse { .. } => None,
        }
    }
}

impl From<io::Error> for PersistError {
    fn from(err: io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_json::Error> for PersistError {
    fn from(err: serde_json::Error) -> Self {
        Self::Json(err)
    }
}

impl From<GraphError> for PersistError {
    fn from(err: GraphError) -> Self {
        Self::Graph(err)
    }
}
