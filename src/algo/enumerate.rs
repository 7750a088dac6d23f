//! Edge enumeration in visit order, with classification and event masking.
//!
//! These are the boundary operations built on the visit kernels: each edge
//! examined during a walk is delivered to a visitor as an [`EdgeArgs`] value,
//! subject to an [`EventMask`] filter. Masking is observational only and
//! never alters the walk. The visitor also receives the walk's [`Pruner`], so
//! it can cancel descent into the branch being discovered.

use super::visits::{
    breadth_first, depth_first, undirected, EdgeKind, EventMask, InvalidEventMask, Pruner,
    Sequential,
};
use crate::graph::view::{Directed, NeighborView, Undirected};
use crate::graph::VertexId;
use dsi_progress_logger::ProgressLog;
use std::convert::Infallible;

/// The arguments of an edge visitor: one examined edge and its
/// classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeArgs<'a, E> {
    /// The vertex the edge was traversed from.
    ///
    /// Over the [`Reverse`](crate::graph::view::Reverse) and
    /// [`Undirected`] views this is the traversal direction, not the stored
    /// orientation of the edge.
    pub source: VertexId,
    /// The vertex the edge leads to.
    pub target: VertexId,
    /// The payload of the edge.
    pub info: &'a E,
    /// The classification of the edge.
    pub kind: EdgeKind,
}

/// Enumerates the edges of a directed view in depth-first order, starting
/// from `root`.
///
/// Edges are classified as [`Tree`](EdgeKind::Tree), [`Back`](EdgeKind::Back)
/// or [`ForwardOrCross`](EdgeKind::ForwardOrCross); only kinds selected by
/// `mask` are delivered. An absent root is a no-op.
///
/// Calling [`Pruner::prune`] from the visitor marks the branch being
/// discovered for cancellation: the most recently discovered vertex is
/// finished without descending into its subtree, while siblings and ancestors
/// continue normally.
pub fn each_dfs<G, C>(
    view: G,
    root: VertexId,
    mask: EventMask,
    mut visitor: C,
    pl: &mut impl ProgressLog,
) where
    G: NeighborView + Directed,
    C: FnMut(EdgeArgs<'_, G::Info>, &Pruner),
{
    let pruner = Pruner::new();
    let mut visit = depth_first::SeqPath::new(view);
    visit
        .visit_pruned(
            root,
            &pruner,
            |event| {
                let (source, target, edge, kind) = match event {
                    depth_first::Event::Previsit {
                        curr,
                        pred,
                        edge: Some(edge),
                        ..
                    } => (pred, curr, edge, EdgeKind::Tree),
                    depth_first::Event::Revisit {
                        curr,
                        pred,
                        edge,
                        on_stack,
                        ..
                    } => (
                        pred,
                        curr,
                        edge,
                        if on_stack {
                            EdgeKind::Back
                        } else {
                            EdgeKind::ForwardOrCross
                        },
                    ),
                    _ => return Ok(()),
                };
                if mask.accepts(kind) {
                    visitor(
                        EdgeArgs {
                            source,
                            target,
                            info: view.info(edge),
                            kind,
                        },
                        &pruner,
                    );
                }
                Ok(())
            },
            pl,
        )
        .unwrap_or_else(|e: Infallible| match e {});
}

/// Enumerates the edges of the undirected view of a graph in depth-first
/// order, starting from `root`.
///
/// Each stored edge is traversable from either endpoint; the specialized
/// [edge-coloring kernel](undirected) guarantees that no edge is classified
/// as a back edge twice. Edges are delivered as [`Tree`](EdgeKind::Tree) or
/// [`NonTree`](EdgeKind::NonTree): the back versus forward-or-cross
/// distinction is not part of the undirected surface. Pruning and masking
/// work as in [`each_dfs`].
pub fn each_dfs_undirected<V, E, C>(
    view: Undirected<'_, V, E>,
    root: VertexId,
    mask: EventMask,
    mut visitor: C,
    pl: &mut impl ProgressLog,
) where
    C: FnMut(EdgeArgs<'_, E>, &Pruner),
{
    let pruner = Pruner::new();
    let mut visit = undirected::Seq::new(view);
    visit
        .visit_pruned(
            root,
            &pruner,
            |event| {
                let (source, target, edge, kind) = match event {
                    depth_first::Event::Previsit {
                        curr,
                        pred,
                        edge: Some(edge),
                        ..
                    } => (pred, curr, edge, EdgeKind::Tree),
                    depth_first::Event::Revisit {
                        curr, pred, edge, ..
                    } => (pred, curr, edge, EdgeKind::NonTree),
                    _ => return Ok(()),
                };
                if mask.accepts(kind) {
                    visitor(
                        EdgeArgs {
                            source,
                            target,
                            info: view.info(edge),
                            kind,
                        },
                        &pruner,
                    );
                }
                Ok(())
            },
            pl,
        )
        .unwrap_or_else(|e: Infallible| match e {});
}

/// Enumerates the edges of a view in breadth-first order, starting from
/// `root`.
///
/// Edges are delivered as [`Tree`](EdgeKind::Tree) or
/// [`NonTree`](EdgeKind::NonTree). A mask selecting only one of
/// [`BACK`](EventMask::BACK) and
/// [`FORWARD_OR_CROSS`](EventMask::FORWARD_OR_CROSS) is rejected before any
/// traversal starts, as the two cannot be told apart in level order.
///
/// The pruner is consulted when a vertex is dequeued, so a visitor calling
/// [`Pruner::prune`] cancels the expansion of the next vertex extracted from
/// the queue.
pub fn each_bfs<G, C>(
    view: G,
    root: VertexId,
    mask: EventMask,
    mut visitor: C,
    pl: &mut impl ProgressLog,
) -> Result<(), InvalidEventMask>
where
    G: NeighborView,
    C: FnMut(EdgeArgs<'_, G::Info>, &Pruner),
{
    if mask.bits() & EventMask::NON_TREE.bits() != 0 && !mask.contains(EventMask::NON_TREE) {
        return Err(InvalidEventMask);
    }

    let pruner = Pruner::new();
    let mut visit = breadth_first::Seq::new(view);
    visit
        .visit_pruned(
            root,
            &pruner,
            |event| {
                let (source, target, edge, kind) = match event {
                    breadth_first::Event::Unknown {
                        curr,
                        pred,
                        edge: Some(edge),
                        ..
                    } => (pred, curr, edge, EdgeKind::Tree),
                    breadth_first::Event::Known {
                        curr, pred, edge, ..
                    } => (pred, curr, edge, EdgeKind::NonTree),
                    _ => return Ok(()),
                };
                if mask.accepts(kind) {
                    visitor(
                        EdgeArgs {
                            source,
                            target,
                            info: view.info(edge),
                            kind,
                        },
                        &pruner,
                    );
                }
                Ok(())
            },
            pl,
        )
        .unwrap_or_else(|e: Infallible| match e {});

    Ok(())
}
