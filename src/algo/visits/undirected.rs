//! Depth-first visits over the undirected view of a graph.
//!
//! The generic [depth-first kernel](super::depth_first) cannot classify edges
//! over the [`Undirected`] view: the same stored edge is reachable from both
//! endpoints, so a tree edge would later be reported again as a spurious back
//! edge from its far end. This kernel keeps, next to the usual vertex colors,
//! one bit per edge recording whether the edge has already been examined.
//! Every examined edge is marked; an edge leading to a vertex on the visit
//! path is reported as a back edge only if it was unmarked, which yields
//! exactly one back-edge report per stored edge.
//!
//! Events are the same as in the generic kernel, with the proviso that a
//! revisit of an already marked edge towards a vertex on the visit path is
//! not reported at all.

use super::depth_first::{ThreeStates, VertexStates};
use super::{Pruner, Sequential};

pub use super::depth_first::Event;
use crate::graph::view::{NeighborView, Undirected};
use crate::graph::VertexId;
use dsi_progress_logger::ProgressLog;
use sux::bits::BitVec;

/// Iterative sequential depth-first visit of the undirected view of a graph,
/// with per-edge colors.
pub struct Seq<'g, V, E> {
    view: Undirected<'g, V, E>,
    stack: Vec<(
        <Undirected<'g, V, E> as NeighborView>::Neighbors,
        VertexId,
    )>,
    state: ThreeStates,
    /// One bit per edge, set when the edge is first examined from either
    /// endpoint.
    seen_edges: BitVec,
}

impl<'g, V, E> Seq<'g, V, E> {
    /// Creates a new sequential visit over `view`, with all vertices and
    /// edges uncolored.
    pub fn new(view: Undirected<'g, V, E>) -> Self {
        Self {
            view,
            stack: Vec::with_capacity(16),
            state: ThreeStates::new(view.num_vertices()),
            seen_edges: BitVec::new(view.num_edges()),
        }
    }
}

impl<V, E> Sequential<Event> for Seq<'_, V, E> {
    fn visit_pruned<Err, C: FnMut(Event) -> Result<(), Err>>(
        &mut self,
        root: VertexId,
        pruner: &Pruner,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), Err> {
        let state = &mut self.state;

        if !self.view.contains(root) || state.known(root) {
            return Ok(());
        }

        callback(Event::Init { root })?;

        state.set_known(root);

        callback(Event::Previsit {
            curr: root,
            pred: root,
            edge: None,
            root,
            depth: 0,
        })?;

        if pruner.take() {
            callback(Event::Postvisit {
                curr: root,
                pred: root,
                root,
                depth: 0,
            })?;
            pl.light_update();
            callback(Event::Done { root })?;
            return Ok(());
        }

        state.set_on_stack(root);

        let mut current = root;
        let mut parent = root;
        let mut iter = self.view.neighbors(current);

        'recurse: loop {
            let depth = self.stack.len();

            while let Some((edge, succ)) = iter.next() {
                let seen = self.seen_edges[edge.index()];
                self.seen_edges.set(edge.index(), true);

                if !state.known(succ) {
                    state.set_known(succ);

                    callback(Event::Previsit {
                        curr: succ,
                        pred: current,
                        edge: Some(edge),
                        root,
                        depth: depth + 1,
                    })?;

                    if pruner.take() {
                        callback(Event::Postvisit {
                            curr: succ,
                            pred: current,
                            root,
                            depth: depth + 1,
                        })?;
                        pl.light_update();
                        continue;
                    }

                    state.set_on_stack(succ);
                    self.stack.push((iter, parent));
                    parent = current;
                    current = succ;
                    iter = self.view.neighbors(current);

                    continue 'recurse;
                } else if state.on_stack(succ) {
                    // A marked edge towards the visit path was already
                    // classified from its other endpoint: stay silent.
                    if !seen {
                        callback(Event::Revisit {
                            curr: succ,
                            pred: current,
                            edge,
                            root,
                            depth: depth + 1,
                            on_stack: true,
                        })?;
                    }
                } else {
                    callback(Event::Revisit {
                        curr: succ,
                        pred: current,
                        edge,
                        root,
                        depth: depth + 1,
                        on_stack: false,
                    })?;
                }
            }

            callback(Event::Postvisit {
                curr: current,
                pred: parent,
                root,
                depth,
            })?;

            pl.light_update();

            state.set_off_stack(current);

            if let Some((suspended, grandparent)) = self.stack.pop() {
                current = parent;
                parent = grandparent;
                iter = suspended;
            } else {
                break;
            }
        }

        callback(Event::Done { root })?;
        Ok(())
    }

    fn visit_all_pruned<Err, C: FnMut(Event) -> Result<(), Err>>(
        &mut self,
        pruner: &Pruner,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), Err> {
        for index in 0..self.view.num_vertices() {
            self.visit_pruned(VertexId::new(index), pruner, &mut callback, pl)?;
        }

        Ok(())
    }

    fn reset(&mut self) {
        self.stack.clear();
        self.state.reset();
        self.seen_edges.fill(false);
    }
}
