use super::visits::{depth_first, Sequential};
use crate::graph::view::{Directed, NeighborView};
use crate::graph::VertexId;
use crate::utils::VertexSet;
use dsi_progress_logger::ProgressLog;
use std::convert::Infallible;

/// Groups the vertices of a view by reachability from a set of seeds.
///
/// One depth-first walk is run per seed, over a color map shared by all
/// walks, and the vertices discovered by a walk form that seed's group. A
/// seed landing in territory already discovered by an earlier walk opens no
/// new group: its vertices stay merged in the earlier one, so the result may
/// hold fewer groups than seeds. With no `seeds`, the roots of the view (the
/// vertices with no inbound adjacency) are used instead.
///
/// Groups of size one are dropped unless `include_singletons` is set. A seed
/// that is not a vertex of the graph becomes a verbatim singleton group,
/// subject to the same policy.
///
/// Over the [`Reverse`](crate::graph::view::Reverse) view this groups
/// vertices by the seeds they can reach, and the default seeds are the sinks
/// of the stored graph.
///
/// # Examples
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use relgraph::algo::generated_subgraphs;
/// use relgraph::graph::view::Direct;
/// use relgraph::graph::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex(());
/// let b = graph.add_vertex(());
/// let c = graph.add_vertex(());
/// graph.add_edge(a, b, ());
///
/// // Roots are a and c; their reachable groups partition the graph.
/// let groups = generated_subgraphs(Direct::new(&graph), None, true, no_logging![]);
/// assert_eq!(groups.len(), 2);
/// assert!(groups.iter().any(|g| g.contains(a) && g.contains(b)));
/// assert!(groups.iter().any(|g| g.len() == 1 && g.contains(c)));
/// ```
pub fn generated_subgraphs<G, P>(
    view: G,
    seeds: Option<&VertexSet>,
    include_singletons: bool,
    pl: &mut P,
) -> Vec<VertexSet>
where
    G: NeighborView + Directed,
    P: ProgressLog,
{
    pl.item_name("vertex");
    pl.expected_updates(Some(view.num_vertices()));
    pl.start("Computing generated subgraphs");

    let seed_list: Vec<VertexId> = match seeds {
        Some(seeds) => seeds.iter().collect(),
        None => (0..view.num_vertices())
            .map(VertexId::new)
            .filter(|&v| !view.has_incoming(v))
            .collect(),
    };

    let mut visit = depth_first::SeqNoPath::new(view);
    let mut result = Vec::new();

    for seed in seed_list {
        if !view.contains(seed) {
            if include_singletons {
                result.push([seed].into_iter().collect());
            }
            continue;
        }

        let mut group = VertexSet::new();
        visit
            .visit::<Infallible, _>(
                seed,
                |event| {
                    if let depth_first::Event::Previsit { curr, .. } = event {
                        group.insert(curr);
                    }
                    Ok(())
                },
                pl,
            )
            .unwrap_or_else(|e| match e {});

        // An empty group means the seed was already reached by an earlier
        // walk and belongs to that group.
        if group.is_empty() {
            continue;
        }
        if group.len() > 1 || include_singletons {
            result.push(group);
        }
    }

    pl.done();
    result
}
