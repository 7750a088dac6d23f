use super::visits::{undirected, Sequential};
use crate::graph::view::Undirected;
use crate::graph::Graph;
use crate::utils::VertexSet;
use dsi_progress_logger::ProgressLog;
use std::convert::Infallible;

/// Partitions the vertices of `graph` into weakly-connected components,
/// treating every edge as undirected.
///
/// Components are returned in discovery order. With no `seeds`, the result is
/// the full partition of the vertex set and `include_singletons` is ignored.
/// With seeds, only the components containing at least one seed are returned;
/// a seed that is not a vertex of the graph becomes a verbatim singleton set,
/// and when `include_singletons` is false both those and the size-one seeded
/// components are dropped.
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use relgraph::algo::components;
/// use relgraph::graph::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex(());
/// let b = graph.add_vertex(());
/// let isolated = graph.add_vertex(());
/// graph.add_edge(a, b, ());
///
/// let comps = components(&graph, None, true, no_logging![]);
/// assert_eq!(comps.len(), 2);
/// assert!(comps.iter().any(|c| c.contains(a) && c.contains(b)));
/// assert!(comps.iter().any(|c| c.len() == 1 && c.contains(isolated)));
/// ```
pub fn components<V, E>(
    graph: &Graph<V, E>,
    seeds: Option<&VertexSet>,
    include_singletons: bool,
    pl: &mut impl ProgressLog,
) -> Vec<VertexSet> {
    let num_vertices = graph.num_vertices();
    pl.item_name("vertex");
    pl.expected_updates(Some(num_vertices));
    pl.start("Computing connected components");

    // Component id of each vertex, in discovery order of the whole-graph
    // undirected walk.
    let mut labels = vec![usize::MAX; num_vertices];
    let mut comps: Vec<VertexSet> = Vec::new();

    let mut visit = undirected::Seq::new(Undirected::new(graph));
    visit
        .visit_all::<Infallible, _>(
            |event| {
                match event {
                    undirected::Event::Init { .. } => comps.push(VertexSet::new()),
                    undirected::Event::Previsit { curr, .. } => {
                        labels[curr.index()] = comps.len() - 1;
                        // An Init always precedes the first previsit.
                        if let Some(component) = comps.last_mut() {
                            component.insert(curr);
                        }
                    }
                    _ => {}
                }
                Ok(())
            },
            pl,
        )
        .unwrap_or_else(|e| match e {});

    pl.done();

    let Some(seeds) = seeds else {
        return comps;
    };

    let mut enabled = vec![false; comps.len()];
    let mut missing = Vec::new();
    for seed in seeds.iter() {
        if graph.contains(seed) {
            enabled[labels[seed.index()]] = true;
        } else if include_singletons {
            missing.push([seed].into_iter().collect());
        }
    }

    let mut result: Vec<VertexSet> = comps
        .into_iter()
        .enumerate()
        .filter(|(id, component)| enabled[*id] && (include_singletons || component.len() > 1))
        .map(|(_, component)| component)
        .collect();
    result.extend(missing);
    result
}
