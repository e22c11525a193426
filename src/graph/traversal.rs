//! Stack-driven traversals over a [`LinkedGraph`].
//!
//! Both walks use the per-vertex visited flag as scratch state and a
//! [`BoundedStack`] sized to the vertex count. A vertex is marked when it is
//! pushed, so it is pushed at most once and the stack can never overflow.

use core::ops::ControlFlow;

use super::error::GraphError;
use super::linked::LinkedGraph;
use super::VertexId;
use crate::collections::BoundedStack;
use crate::macros::trace_detail;

/// Visits every vertex reachable from `start`, in the order they are popped.
///
/// All visited flags are cleared before the walk; afterwards exactly the
/// reachable vertices are marked. Neighbors are pushed in reverse edge-list
/// order so the first edge of a vertex is explored first.
///
/// # Errors
/// [`GraphError::VertexNotFound`] if `start` does not exist.
pub fn depth_first(
    graph: &mut LinkedGraph,
    start: VertexId,
) -> Result<Vec<VertexId>, GraphError> {
    let mut order = Vec::new();
    walk(graph, start, |id| {
        order.push(id);
        ControlFlow::<()>::Continue(())
    })?;
    Ok(order)
}

/// Returns `true` if `to` is reachable from `from` along directed edges.
///
/// A vertex always reaches itself.
///
/// # Errors
/// [`GraphError::VertexNotFound`] if either endpoint does not exist.
pub fn has_path(
    graph: &mut LinkedGraph,
    from: VertexId,
    to: VertexId,
) -> Result<bool, GraphError> {
    if !graph.exists_vertex(to) {
        return Err(GraphError::VertexNotFound(to));
    }
    let found = walk(graph, from, |id| {
        if id == to {
            ControlFlow::Break(())
        } else {
            ControlFlow::Continue(())
        }
    })?;
    Ok(found.is_break())
}

fn walk<B, F>(
    graph: &mut LinkedGraph,
    start: VertexId,
    mut visit: F,
) -> Result<ControlFlow<B>, GraphError>
where
    F: FnMut(VertexId) -> ControlFlow<B>,
{
    if !graph.exists_vertex(start) {
        return Err(GraphError::VertexNotFound(start));
    }
    graph.reset_visited();

    let mut stack = BoundedStack::new(graph.vertex_count());
    let mut successors = Vec::new();
    mark(graph, start);
    stack.push(start)?;

    while !stack.is_empty() {
        let id = stack.pop()?;
        trace_detail!(vertex = id, depth = stack.len(), "visit");
        if let ControlFlow::Break(value) = visit(id) {
            return Ok(ControlFlow::Break(value));
        }

        successors.clear();
        if let Some(edges) = graph.edges(id) {
            successors.extend(edges.map(|edge| edge.dest));
        }
        for &dest in successors.iter().rev() {
            if mark(graph, dest) {
                stack.push(dest)?;
            }
        }
    }
    Ok(ControlFlow::Continue(()))
}

/// Marks `id` visited, returning `true` if it was not marked before.
fn mark(graph: &mut LinkedGraph, id: VertexId) -> bool {
    match graph.find_vertex_mut(id) {
        Some(mut vertex) if !vertex.is_visited() => {
            vertex.set_visited(true);
            true
        }
        _ => false,
    }
}
