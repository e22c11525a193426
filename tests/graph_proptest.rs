use linkgraph::{
    Edge, EdgeStatus, GraphError, InsertStatus, LinkedGraph, VertexId, VertexRecord,
};
use proptest::prelude::*;

#[derive(Debug, Clone)]
enum Operation {
    InsertVertex(VertexId),
    DeleteVertex(VertexId),
    InsertEdge(VertexId, VertexId, i32),
    DeleteEdge(VertexId, VertexId),
}

/// Reference model: vertices in insertion order, each with its edge list.
#[derive(Default)]
struct Model {
    vertices: Vec<(VertexId, Vec<Edge>)>,
}

impl Model {
    fn position(&self, id: VertexId) -> Option<usize> {
        self.vertices.iter().position(|(v, _)| *v == id)
    }

    fn insert_vertex(&mut self, id: VertexId) -> InsertStatus {
        if self.position(id).is_some() {
            return InsertStatus::AlreadyExists;
        }
        self.vertices.push((id, Vec::new()));
        InsertStatus::Inserted
    }

    fn delete_vertex(&mut self, id: VertexId) -> Result<usize, GraphError> {
        let pos = self.position(id).ok_or(GraphError::VertexNotFound(id))?;
        let (_, own) = self.vertices.remove(pos);
        let mut released = own.len();
        for (_, edges) in &mut self.vertices {
            let before = edges.len();
            edges.retain(|e| e.dest != id);
            released += before - edges.len();
        }
        Ok(released)
    }

    fn insert_edge(
        &mut self,
        origin: VertexId,
        dest: VertexId,
        weight: i32,
    ) -> Result<EdgeStatus, GraphError> {
        if self.position(origin).is_none() {
            return Err(GraphError::VertexNotFound(origin));
        }
        let created = self.insert_vertex(dest) == InsertStatus::Inserted;
        let pos = self.position(origin).unwrap();
        self.vertices[pos].1.push(Edge::new(dest, weight));
        Ok(if created {
            EdgeStatus::DestinationCreated
        } else {
            EdgeStatus::Appended
        })
    }

    fn delete_edge(&mut self, origin: VertexId, dest: VertexId) -> Result<Edge, GraphError> {
        if self.position(dest).is_none() {
            return Err(GraphError::VertexNotFound(dest));
        }
        let pos = self.position(origin).ok_or(GraphError::VertexNotFound(origin))?;
        let edges = &mut self.vertices[pos].1;
        let idx = edges
            .iter()
            .position(|e| e.dest == dest)
            .ok_or(GraphError::EdgeNotFound { origin, dest })?;
        Ok(edges.remove(idx))
    }

    fn records(&self) -> Vec<VertexRecord> {
        self.vertices
            .iter()
            .map(|(id, edges)| VertexRecord {
                id: *id,
                edges: edges.clone(),
            })
            .collect()
    }
}

fn operation() -> impl Strategy<Value = Operation> {
    let id = 0..12i32;
    prop_oneof![
        id.clone().prop_map(Operation::InsertVertex),
        id.clone().prop_map(Operation::DeleteVertex),
        (id.clone(), id.clone(), -50..50i32)
            .prop_map(|(o, d, w)| Operation::InsertEdge(o, d, w)),
        (id.clone(), id).prop_map(|(o, d)| Operation::DeleteEdge(o, d)),
    ]
}

proptest! {
    #[test]
    fn test_graph_matches_model(ops in proptest::collection::vec(operation(), 1..200)) {
        let mut graph = LinkedGraph::new();
        let mut model = Model::default();

        for op in ops {
            match op {
                Operation::InsertVertex(id) => {
                    prop_assert_eq!(graph.insert_vertex(id), Ok(model.insert_vertex(id)));
                }
                Operation::DeleteVertex(id) => {
                    prop_assert_eq!(graph.delete_vertex(id), model.delete_vertex(id));
                    prop_assert!(graph.find_vertex(id).is_none());
                }
                Operation::InsertEdge(o, d, w) => {
                    prop_assert_eq!(graph.insert_edge(o, d, w), model.insert_edge(o, d, w));
                }
                Operation::DeleteEdge(o, d) => {
                    prop_assert_eq!(graph.delete_edge(o, d), model.delete_edge(o, d));
                }
            }

            prop_assert_eq!(graph.vertex_count(), model.vertices.len());
        }

        prop_assert_eq!(graph.to_records(), model.records());
        let total_edges: usize = model.vertices.iter().map(|(_, e)| e.len()).sum();
        prop_assert_eq!(graph.edge_count(), total_edges);
    }

    #[test]
    fn test_no_dangling_edges(ops in proptest::collection::vec(operation(), 1..200)) {
        let mut graph = LinkedGraph::new();
        for op in ops {
            match op {
                Operation::InsertVertex(id) => {
                    let _ = graph.insert_vertex(id);
                }
                Operation::DeleteVertex(id) => {
                    let _ = graph.delete_vertex(id);
                }
                Operation::InsertEdge(o, d, w) => {
                    let _ = graph.insert_edge(o, d, w);
                }
                Operation::DeleteEdge(o, d) => {
                    let _ = graph.delete_edge(o, d);
                }
            }
        }
        for vertex in &graph {
            for edge in vertex.edges() {
                prop_assert!(
                    graph.exists_vertex(edge.dest),
                    "edge {} -> {} dangles",
                    vertex.id(),
                    edge.dest
                );
            }
        }
    }

    #[test]
    fn test_vertex_ids_stay_unique(ids in proptest::collection::vec(0..20i32, 0..100)) {
        let mut graph = LinkedGraph::new();
        for id in &ids {
            let before = graph.vertex_count();
            let status = graph.insert_vertex(*id).unwrap();
            let expected = if status == InsertStatus::Inserted {
                before + 1
            } else {
                before
            };
            prop_assert_eq!(graph.vertex_count(), expected);
        }

        let mut seen: Vec<_> = graph.iter().map(|v| v.id()).collect();
        let listed = seen.len();
        seen.sort_unstable();
        seen.dedup();
        prop_assert_eq!(seen.len(), listed);
    }

    #[test]
    fn test_delete_edge_on_absent_endpoint_is_noop(
        ops in proptest::collection::vec(operation(), 0..60),
        origin in 0..12i32,
        dest in 0..12i32,
    ) {
        let mut graph = LinkedGraph::new();
        for op in ops {
            if let Operation::InsertEdge(o, d, w) = op {
                let _ = graph.insert_vertex(o);
                let _ = graph.insert_edge(o, d, w);
            }
        }
        prop_assume!(!graph.exists_vertex(origin) || !graph.exists_vertex(dest));

        let before = graph.to_records();
        prop_assert!(graph.delete_edge(origin, dest).is_err());
        prop_assert_eq!(graph.to_records(), before);
    }
}

#[test]
fn test_auto_vivification_adds_exactly_one_vertex() {
    let mut graph = LinkedGraph::new();
    graph.insert_vertex(1).unwrap();
    let before = graph.vertex_count();

    assert_eq!(graph.insert_edge(1, 2, 9), Ok(EdgeStatus::DestinationCreated));
    assert_eq!(graph.vertex_count(), before + 1);
    assert!(graph.exists_vertex(2));
    assert_eq!(graph.edges(1).unwrap().collect::<Vec<_>>(), vec![Edge::new(2, 9)]);
}
