use super::visits::{depth_first, Sequential, StoppedWhenDone};
use crate::graph::view::Direct;
use crate::graph::{Graph, VertexId};
use dsi_progress_logger::ProgressLog;

/// Returns whether `target` can be reached from `source` through a directed
/// path of length at least one.
///
/// False if either vertex is absent from the graph. For `source == target`
/// the answer is true exactly when a self-loop exists at the vertex: being
/// trivially "reachable from itself" does not count.
///
/// The underlying depth-first walk stops as soon as `target` is discovered.
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use relgraph::algo::reachable;
/// use relgraph::graph::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex(());
/// let b = graph.add_vertex(());
/// let c = graph.add_vertex(());
/// graph.add_edge(a, b, ());
/// graph.add_edge(b, c, ());
///
/// assert!(reachable(&graph, a, c, no_logging![]));
/// assert!(!reachable(&graph, c, a, no_logging![]));
/// assert!(!reachable(&graph, a, a, no_logging![]));
/// ```
pub fn reachable<V, E>(
    graph: &Graph<V, E>,
    source: VertexId,
    target: VertexId,
    pl: &mut impl ProgressLog,
) -> bool {
    if !graph.contains(source) || !graph.contains(target) {
        return false;
    }

    if source == target {
        return graph
            .out_edges(source)
            .iter()
            .any(|&e| graph.target(e) == source);
    }

    let mut visit = depth_first::SeqNoPath::new(Direct::new(graph));
    visit
        .visit(
            source,
            |event| match event {
                depth_first::Event::Previsit { curr, .. } if curr == target => {
                    Err(StoppedWhenDone)
                }
                _ => Ok(()),
            },
            pl,
        )
        .is_err()
}
