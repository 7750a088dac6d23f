use super::visits::{depth_first, Sequential};
use crate::graph::view::Direct;
use crate::graph::{Graph, VertexId};
use dsi_progress_logger::ProgressLog;
use thiserror::Error;

/// The error returned by [`top_sort`] on a graph containing a directed cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("the graph is not a DAG")]
pub struct NotADag;

/// Returns a topological order of `graph`, or [`NotADag`] if it contains a
/// directed cycle.
///
/// Vertices are recorded in reverse order of completion of a whole-graph
/// depth-first visit, so for every edge `(u, v)` the position of `u` precedes
/// the position of `v`. A back edge aborts the sort immediately: no partial
/// order is ever returned.
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use relgraph::algo::top_sort;
/// use relgraph::graph::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex(());
/// let b = graph.add_vertex(());
/// let c = graph.add_vertex(());
/// graph.add_edge(a, b, ());
/// graph.add_edge(b, c, ());
///
/// assert_eq!(
///     top_sort(&graph, no_logging![]).unwrap(),
///     vec![a, b, c].into_boxed_slice()
/// );
///
/// graph.add_edge(c, a, ());
/// assert!(top_sort(&graph, no_logging![]).is_err());
/// ```
pub fn top_sort<V, E>(
    graph: &Graph<V, E>,
    pl: &mut impl ProgressLog,
) -> Result<Box<[VertexId]>, NotADag> {
    let num_vertices = graph.num_vertices();
    pl.item_name("vertex");
    pl.expected_updates(Some(num_vertices));
    pl.start("Computing topological sort");

    let mut visit = depth_first::SeqPath::new(Direct::new(graph));
    let mut order = vec![VertexId::new(0); num_vertices].into_boxed_slice();
    let mut pos = num_vertices;

    let completed = visit.visit_all(
        |event| match event {
            depth_first::Event::Revisit { on_stack: true, .. } => Err(NotADag),
            depth_first::Event::Postvisit { curr, .. } => {
                pos -= 1;
                order[pos] = curr;
                Ok(())
            }
            _ => Ok(()),
        },
        pl,
    );

    pl.done();
    completed?;
    Ok(order)
}
