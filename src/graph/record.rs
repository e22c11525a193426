//! Plain records for moving a graph in and out of storage.
//!
//! A graph flattens into one [`VertexRecord`] per vertex, in insertion order,
//! each carrying that vertex's edges in list order. Rebuilding from records
//! declares every listed vertex first and then appends edges, so destinations
//! that were never declared are created on the fly.

use serde::{Deserialize, Serialize};

use super::edge_list::Edge;
use super::error::GraphError;
use super::linked::LinkedGraph;
use super::VertexId;

/// One vertex and its outgoing edges.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VertexRecord {
    /// Vertex id.
    pub id: VertexId,
    /// Outgoing edges in list order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub edges: Vec<Edge>,
}

impl VertexRecord {
    /// A record for a vertex with no edges.
    pub fn new(id: VertexId) -> Self {
        Self {
            id,
            edges: Vec::new(),
        }
    }
}

impl LinkedGraph {
    /// Flattens the graph into records, in vertex insertion order.
    pub fn to_records(&self) -> Vec<VertexRecord> {
        self.iter()
            .map(|vertex| VertexRecord {
                id: vertex.id(),
                edges: vertex.edges().collect(),
            })
            .collect()
    }

    /// Builds a graph from records.
    ///
    /// Records naming the same id are merged: their edges are appended in order.
    ///
    /// # Errors
    /// Propagates the first [`GraphError`] raised while inserting.
    pub fn from_records<I>(records: I) -> Result<Self, GraphError>
    where
        I: IntoIterator<Item = VertexRecord>,
    {
        let records: Vec<VertexRecord> = records.into_iter().collect();
        let mut graph = Self::with_capacity(records.len());

        for record in &records {
            graph.insert_vertex(record.id)?;
        }
        for record in &records {
            for edge in &record.edges {
                graph.insert_edge(record.id, edge.dest, edge.weight)?;
            }
        }
        Ok(graph)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_follow_list_order() {
        let mut graph = LinkedGraph::new();
        graph.insert_vertex(3).unwrap();
        graph.insert_vertex(1).unwrap();
        graph.insert_edge(3, 1, 7).unwrap();
        graph.insert_edge(3, 2, 8).unwrap();

        let records = graph.to_records();
        assert_eq!(
            records,
            vec![
                VertexRecord {
                    id: 3,
                    edges: vec![Edge::new(1, 7), Edge::new(2, 8)],
                },
                VertexRecord::new(1),
                VertexRecord::new(2),
            ]
        );
    }

    #[test]
    fn test_from_records_rebuilds_graph() {
        let records = vec![
            VertexRecord {
                id: 1,
                edges: vec![Edge::new(2, 10), Edge::new(3, 5)],
            },
            VertexRecord::new(2),
        ];
        let graph = LinkedGraph::from_records(records.clone()).unwrap();

        // Vertex 3 was never declared, so it lands after the declared ones.
        let ids: Vec<_> = graph.iter().map(|v| v.id()).collect();
        assert_eq!(ids, vec![1, 2, 3]);
        assert_eq!(graph.edge_count(), 2);

        let again = LinkedGraph::from_records(graph.to_records()).unwrap();
        assert_eq!(again.to_records(), graph.to_records());
    }

    #[test]
    fn test_from_records_merges_repeated_ids() {
        let records = vec![
            VertexRecord {
                id: 1,
                edges: vec![Edge::new(2, 1)],
            },
            VertexRecord {
                id: 1,
                edges: vec![Edge::new(2, 2)],
            },
        ];
        let graph = LinkedGraph::from_records(records).unwrap();
        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edges(1).unwrap().count(), 2);
    }

    #[test]
    fn test_from_records_rejects_negative_ids() {
        let err = LinkedGraph::from_records([VertexRecord::new(-3)]).unwrap_err();
        assert_eq!(err, GraphError::InvalidVertex(-3));
    }
}
