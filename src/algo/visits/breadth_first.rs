//! Breadth-first visits.
//!
//! The callback is invoked when a walk starts ([`Init`](Event::Init)), when a
//! vertex is discovered ([`Unknown`](Event::Unknown)) and when an edge leads
//! to an already visited vertex ([`Known`](Event::Known)). A level-order walk
//! cannot tell back edges from forward or cross edges, so revisits carry no
//! further classification.

use super::{Pruner, Sequential};
use crate::graph::view::NeighborView;
use crate::graph::{EdgeId, VertexId};
use dsi_progress_logger::ProgressLog;
use nonmax::NonMaxUsize;
use std::collections::VecDeque;
use sux::bits::BitVec;

/// Types of callback events generated during a breadth-first visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Start of a single-source walk. Fired once per walk, before the root
    /// discovery.
    Init {
        /// The root of the walk.
        root: VertexId,
    },
    /// The vertex has been encountered for the first time. Unless `curr` is
    /// the root, we are traversing a tree edge.
    Unknown {
        /// The newly discovered vertex.
        curr: VertexId,
        /// The parent of `curr` in the visit tree (the root itself for the
        /// root).
        pred: VertexId,
        /// The edge that discovered `curr`; `None` for the root.
        edge: Option<EdgeId>,
        /// The root of the current walk.
        root: VertexId,
        /// The distance of `curr` from the root.
        distance: usize,
    },
    /// The vertex has been encountered before: we are traversing a non-tree
    /// edge.
    Known {
        /// The vertex the edge leads to.
        curr: VertexId,
        /// The vertex the edge was examined from.
        pred: VertexId,
        /// The edge being examined.
        edge: EdgeId,
        /// The root of the current walk.
        root: VertexId,
    },
}

/// A sequential breadth-first visit over a view.
///
/// Parents and distances are not stored: they are computed on the fly and
/// passed to the callback when vertices are discovered. To keep track of
/// distances compactly, the queue stores vertices as [`NonMaxUsize`] and uses
/// the `None` variant of `Option<NonMaxUsize>` as a level separator.
///
/// The cancellation token is consulted when a vertex is dequeued: a signalled
/// token finishes that vertex without enumerating its neighbors.
///
/// # Examples
///
/// Computing distances from a root:
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use relgraph::algo::visits::breadth_first::{Event, Seq};
/// use relgraph::algo::visits::Sequential;
/// use relgraph::graph::view::Direct;
/// use relgraph::graph::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex(());
/// let b = graph.add_vertex(());
/// let c = graph.add_vertex(());
/// let d = graph.add_vertex(());
/// graph.add_edge(a, b, ());
/// graph.add_edge(b, c, ());
/// graph.add_edge(a, d, ());
/// graph.add_edge(d, c, ());
///
/// let mut distance = [0; 4];
/// let mut visit = Seq::new(Direct::new(&graph));
/// visit
///     .visit::<std::convert::Infallible, _>(
///         a,
///         |event| {
///             if let Event::Unknown { curr, distance: d, .. } = event {
///                 distance[curr.index()] = d;
///             }
///             Ok(())
///         },
///         no_logging![],
///     )
///     .unwrap_or_else(|e| match e {});
/// assert_eq!(distance, [0, 1, 2, 1]);
/// ```
pub struct Seq<G: NeighborView> {
    view: G,
    visited: BitVec,
    /// The visit queue; to avoid storing distances, `None` is used as a
    /// separator between levels.
    queue: VecDeque<Option<NonMaxUsize>>,
}

impl<G: NeighborView> Seq<G> {
    /// Creates a new sequential visit over `view`, with all vertices
    /// unvisited.
    pub fn new(view: G) -> Self {
        let num_vertices = view.num_vertices();
        Self {
            view,
            visited: BitVec::new(num_vertices),
            queue: VecDeque::new(),
        }
    }
}

impl<G: NeighborView> Sequential<Event> for Seq<G> {
    fn visit_pruned<E, C: FnMut(Event) -> Result<(), E>>(
        &mut self,
        root: VertexId,
        pruner: &Pruner,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        if !self.view.contains(root) || self.visited[root.index()] {
            return Ok(());
        }

        callback(Event::Init { root })?;

        self.visited.set(root.index(), true);
        callback(Event::Unknown {
            curr: root,
            pred: root,
            edge: None,
            root,
            distance: 0,
        })?;

        self.queue.push_back(Some(
            NonMaxUsize::new(root.index()).expect("vertex index should never be usize::MAX"),
        ));
        self.queue.push_back(None);

        let mut distance = 1;

        while let Some(entry) = self.queue.pop_front() {
            match entry {
                Some(index) => {
                    let curr = VertexId::new(index.into());
                    if pruner.take() {
                        // curr is finished without enumerating its neighbors.
                        pl.light_update();
                        continue;
                    }
                    for (edge, succ) in self.view.neighbors(curr) {
                        if !self.visited[succ.index()] {
                            callback(Event::Unknown {
                                curr: succ,
                                pred: curr,
                                edge: Some(edge),
                                root,
                                distance,
                            })?;
                            self.visited.set(succ.index(), true);
                            self.queue.push_back(Some(
                                NonMaxUsize::new(succ.index())
                                    .expect("vertex index should never be usize::MAX"),
                            ));
                        } else {
                            callback(Event::Known {
                                curr: succ,
                                pred: curr,
                                edge,
                                root,
                            })?;
                        }
                    }
                    pl.light_update();
                }
                None => {
                    // End of the current level: bump the distance and put
                    // back a separator.
                    if !self.queue.is_empty() {
                        distance += 1;
                        self.queue.push_back(None);
                    }
                }
            }
        }

        Ok(())
    }

    fn visit_all_pruned<E, C: FnMut(Event) -> Result<(), E>>(
        &mut self,
        pruner: &Pruner,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        for index in 0..self.view.num_vertices() {
            self.visit_pruned(VertexId::new(index), pruner, &mut callback, pl)?;
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.queue.clear();
        self.visited.fill(false);
    }
}
