//! Loading and storing graphs.
//!
//! Two on-disk forms are supported:
//! - the delimited text format ([`TextFormat`]), read by [`import_data`] and
//!   written by [`export_data`];
//! - a JSON snapshot of [`VertexRecord`]s, written by [`save_graph`] and read
//!   by [`open_graph`].
//!
//! Both preserve the vertex set and each vertex's edges in list order.
//!
//! The two forms treat a repeated vertex id differently: the text reader
//! rejects it with [`ParseErrorKind::DuplicateVertex`], while a snapshot read
//! by [`open_graph`] or [`from_json`] merges the records, appending the later
//! record's edges to the earlier one.

mod error;
pub mod text;

use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::graph::{LinkedGraph, VertexRecord};
use crate::macros::trace_event;

pub use error::{ParseErrorKind, PersistError};
pub use text::TextFormat;

#[derive(Serialize, Deserialize)]
struct Snapshot {
    vertices: Vec<VertexRecord>,
}

/// Reads a graph from a text file in the default [`TextFormat`].
///
/// # Errors
/// [`PersistError::Io`] if the file cannot be read, [`PersistError::Parse`]
/// for malformed lines.
pub fn import_data(path: impl AsRef<Path>) -> Result<LinkedGraph, PersistError> {
    let path = path.as_ref();
    let file = File::open(path)?;
    let graph = TextFormat::default().read(BufReader::new(file))?;
    trace_event!(
        path = %path.display(),
        vertices = graph.vertex_count(),
        edges = graph.edge_count(),
        "graph imported"
    );
    Ok(graph)
}

/// Writes `graph` to a text file in the default [`TextFormat`].
///
/// # Errors
/// [`PersistError::Io`] if the file cannot be written.
pub fn export_data(path: impl AsRef<Path>, graph: &LinkedGraph) -> Result<(), PersistError> {
    let path = path.as_ref();
    let file = File::create(path)?;
    TextFormat::default().write(graph, BufWriter::new(file))?;
    trace_event!(path = %path.display(), vertices = graph.vertex_count(), "graph exported");
    Ok(())
}

/// Encodes `graph` as a JSON snapshot.
///
/// # Errors
/// [`PersistError::Json`] if encoding fails.
pub fn to_json(graph: &LinkedGraph) -> Result<String, PersistError> {
    let snapshot = Snapshot {
        vertices: graph.to_records(),
    };
    Ok(serde_json::to_string_pretty(&snapshot)?)
}

/// Decodes a graph from a JSON snapshot.
///
/// # Errors
/// [`PersistError::Json`] for malformed JSON, [`PersistError::Graph`] if the
/// records are rejected (for example a negative id).
pub fn from_json(input: &str) -> Result<LinkedGraph, PersistError> {
    let snapshot: Snapshot = serde_json::from_str(input)?;
    Ok(LinkedGraph::from_records(snapshot.vertices)?)
}

/// Saves `graph` to `path` as a JSON snapshot.
///
/// # Errors
/// [`PersistError::Io`] or [`PersistError::Json`].
pub fn save_graph(path: impl AsRef<Path>, graph: &LinkedGraph) -> Result<(), PersistError> {
    let path = path.as_ref();
    let mut writer = BufWriter::new(File::create(path)?);
    let snapshot = Snapshot {
        vertices: graph.to_records(),
    };
    serde_json::to_writer_pretty(&mut writer, &snapshot)?;
    writer.flush()?;
    trace_event!(path = %path.display(), vertices = graph.vertex_count(), "graph saved");
    Ok(())
}

/// Opens a graph previously written by [`save_graph`].
///
/// # Errors
/// [`PersistError::Io`], [`PersistError::Json`] or [`PersistError::Graph`].
pub fn open_graph(path: impl AsRef<Path>) -> Result<LinkedGraph, PersistError> {
    let path = path.as_ref();
    let reader = BufReader::new(File::open(path)?);
    let snapshot: Snapshot = serde_json::from_reader(reader)?;
    let graph = LinkedGraph::from_records(snapshot.vertices)?;
    trace_event!(path = %path.display(), vertices = graph.vertex_count(), "graph opened");
    Ok(graph)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphError;

    #[test]
    fn test_json_snapshot_round_trip() {
        let graph = TextFormat::default().parse("1;2;10;3;5\n2;3;1\n").unwrap();
        let json = to_json(&graph).unwrap();
        let back = from_json(&json).unwrap();
        assert_eq!(back.to_records(), graph.to_records());
    }

    #[test]
    fn test_json_snapshot_shape() {
        let graph = TextFormat::default().parse("1;2;4\n").unwrap();
        let value: serde_json::Value = serde_json::from_str(&to_json(&graph).unwrap()).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "vertices": [
                    { "id": 1, "edges": [{ "dest": 2, "weight": 4 }] },
                    { "id": 2 }
                ]
            })
        );
    }

    #[test]
    fn test_json_rejects_negative_ids() {
        let err = from_json(r#"{ "vertices": [{ "id": -2 }] }"#).unwrap_err();
        assert!(matches!(err, PersistError::Graph(GraphError::InvalidVertex(-2))));
    }

    #[test]
    fn test_repeated_id_merges_in_json_but_fails_in_text() {
        let json = r#"{ "vertices": [
            { "id": 1, "edges": [{ "dest": 2, "weight": 4 }] },
            { "id": 1, "edges": [{ "dest": 3, "weight": 5 }] }
        ] }"#;
        let graph = from_json(json).unwrap();
        assert_eq!(graph.vertex_count(), 3);
        let edges: Vec<_> = graph.edges(1).unwrap().map(|e| (e.dest, e.weight)).collect();
        assert_eq!(edges, vec![(2, 4), (3, 5)]);

        let err = TextFormat::default().parse("1;2;4\n1;3;5\n").unwrap_err();
        assert!(matches!(
            err,
            PersistError::Parse {
                line: 2,
                kind: ParseErrorKind::DuplicateVertex(1)
            }
        ));
    }

    #[test]
    fn test_json_malformed() {
        assert!(matches!(from_json("{"), Err(PersistError::Json(_))));
    }

    #[test]
    fn test_missing_file() {
        let path = std::env::temp_dir().join("linkgraph-does-not-exist.txt");
        assert!(matches!(import_data(&path), Err(PersistError::Io(_))));
        assert!(matches!(open_graph(&path), Err(PersistError::Io(_))));
    }
}
