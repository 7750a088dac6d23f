//! Depth-first visits.
//!
//! The callback is invoked at the [start of a visit](Event::Init), [every time
//! a new vertex is discovered](Event::Previsit), [every time a vertex is seen
//! again](Event::Revisit), [every time the enumeration of the neighbors of a
//! vertex is completed](Event::Postvisit) and [at the end of the
//! visit](Event::Done).
//!
//! Since events carry the edge that triggered them, they map directly onto
//! the classical edge classification: a non-root previsit traverses a tree
//! edge, a revisit of a vertex on the visit path traverses a back edge, and a
//! revisit of a finished vertex traverses a forward or cross edge.

use super::{Pruner, Sequential};
use crate::graph::view::NeighborView;
use crate::graph::{EdgeId, VertexId};
use dsi_progress_logger::ProgressLog;
use sealed::sealed;
use sux::bits::BitVec;
use sux::traits::BitFieldSliceMut;

/// A depth-first visit that keeps track of the vertices on the visit path.
///
/// [`Revisit`](Event::Revisit) events carry a meaningful
/// [`on_stack`](Event::Revisit::on_stack) flag, at the price of two bits of
/// state per vertex.
pub type SeqPath<G> = SeqIter<ThreeStates, G>;

/// A depth-first visit that does not keep track of the vertices on the visit
/// path.
///
/// It uses one bit of state per vertex, and the
/// [`on_stack`](Event::Revisit::on_stack) flag of
/// [`Revisit`](Event::Revisit) events is always false. Sufficient for
/// reachability and component collection.
pub type SeqNoPath<G> = SeqIter<TwoStates, G>;

/// Types of callback events generated during a depth-first visit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Event {
    /// Start of a single-source walk. Fired once per walk, before the root
    /// previsit.
    Init {
        /// The root of the walk.
        root: VertexId,
    },
    /// The vertex has been encountered for the first time. Unless `curr` is
    /// the root, we are traversing a tree edge.
    Previsit {
        /// The newly discovered vertex.
        curr: VertexId,
        /// The parent of `curr` in the visit tree (the root itself for the
        /// root).
        pred: VertexId,
        /// The edge that discovered `curr`; `None` for the root.
        edge: Option<EdgeId>,
        /// The root of the current walk.
        root: VertexId,
        /// The length of the visit path from `root` to `curr`.
        depth: usize,
    },
    /// The vertex has been encountered before: we are traversing a back,
    /// forward or cross edge.
    Revisit {
        /// The vertex the edge leads to.
        curr: VertexId,
        /// The vertex the edge was examined from.
        pred: VertexId,
        /// The edge being examined.
        edge: EdgeId,
        /// The root of the current walk.
        root: VertexId,
        /// The length of the visit path from `root` to `pred`, plus one.
        depth: usize,
        /// Whether `curr` is on the visit path. True exactly for back edges;
        /// always false for [`SeqNoPath`].
        on_stack: bool,
    },
    /// The enumeration of the neighbors of the vertex has been completed.
    Postvisit {
        /// The vertex being finished.
        curr: VertexId,
        /// The parent of `curr` in the visit tree.
        pred: VertexId,
        /// The root of the current walk.
        root: VertexId,
        /// The length of the visit path from `root` to `curr`.
        depth: usize,
    },
    /// End of a single-source walk.
    Done {
        /// The root of the walk.
        root: VertexId,
    },
}

/// Per-vertex color state of a depth-first visit.
///
/// White, gray and black map onto `!known`, `known && on_stack` and
/// `known && !on_stack`.
#[sealed]
pub trait VertexStates {
    /// Allocates state for `n` vertices, all white.
    fn new(n: usize) -> Self;
    /// Marks a vertex as being on the visit path.
    fn set_on_stack(&mut self, v: VertexId);
    /// Marks a vertex as no longer being on the visit path.
    fn set_off_stack(&mut self, v: VertexId);
    /// Returns whether a vertex is on the visit path.
    fn on_stack(&self, v: VertexId) -> bool;
    /// Marks a vertex as discovered.
    fn set_known(&mut self, v: VertexId);
    /// Returns whether a vertex has been discovered.
    fn known(&self, v: VertexId) -> bool;
    /// Makes all vertices white again.
    fn reset(&mut self);
}

/// A state selector remembering discovery and visit-path membership.
pub struct ThreeStates(BitVec);

#[sealed]
impl VertexStates for ThreeStates {
    fn new(n: usize) -> ThreeStates {
        ThreeStates(BitVec::new(2 * n))
    }
    #[inline(always)]
    fn set_on_stack(&mut self, v: VertexId) {
        self.0.set(v.index() * 2 + 1, true);
    }
    #[inline(always)]
    fn set_off_stack(&mut self, v: VertexId) {
        self.0.set(v.index() * 2 + 1, false);
    }
    #[inline(always)]
    fn on_stack(&self, v: VertexId) -> bool {
        self.0.get(v.index() * 2 + 1)
    }
    #[inline(always)]
    fn set_known(&mut self, v: VertexId) {
        self.0.set(v.index() * 2, true);
    }
    #[inline(always)]
    fn known(&self, v: VertexId) -> bool {
        self.0.get(v.index() * 2)
    }
    #[inline(always)]
    fn reset(&mut self) {
        self.0.reset();
    }
}

/// A state selector remembering discovery only.
pub struct TwoStates(BitVec);

#[sealed]
impl VertexStates for TwoStates {
    fn new(n: usize) -> TwoStates {
        TwoStates(BitVec::new(n))
    }
    #[inline(always)]
    fn set_on_stack(&mut self, _v: VertexId) {}
    #[inline(always)]
    fn set_off_stack(&mut self, _v: VertexId) {}
    #[inline(always)]
    fn on_stack(&self, _v: VertexId) -> bool {
        false
    }
    #[inline(always)]
    fn set_known(&mut self, v: VertexId) {
        self.0.set(v.index(), true);
    }
    #[inline(always)]
    fn known(&self, v: VertexId) -> bool {
        self.0.get(v.index())
    }
    #[inline(always)]
    fn reset(&mut self) {
        self.0.reset();
    }
}

/// Iterative sequential depth-first visit over a view.
///
/// This implementation uses an explicit stack of neighbor iterators, so it
/// does not need a large machine stack. Use it through the [`SeqPath`] and
/// [`SeqNoPath`] aliases.
///
/// # Examples
///
/// Collecting the reverse of a topological order of an acyclic graph:
///
/// ```
/// use dsi_progress_logger::no_logging;
/// use relgraph::algo::visits::depth_first::{Event, SeqPath};
/// use relgraph::algo::visits::Sequential;
/// use relgraph::graph::view::Direct;
/// use relgraph::graph::Graph;
///
/// let mut graph = Graph::new();
/// let a = graph.add_vertex("a");
/// let b = graph.add_vertex("b");
/// let c = graph.add_vertex("c");
/// graph.add_edge(a, b, ());
/// graph.add_edge(b, c, ());
///
/// let mut order = Vec::new();
/// let mut visit = SeqPath::new(Direct::new(&graph));
/// visit
///     .visit_all::<std::convert::Infallible, _>(
///         |event| {
///             if let Event::Postvisit { curr, .. } = event {
///                 order.push(curr);
///             }
///             Ok(())
///         },
///         no_logging![],
///     )
///     .unwrap_or_else(|e| match e {});
/// assert_eq!(order, vec![c, b, a]);
/// ```
pub struct SeqIter<S, G: NeighborView> {
    view: G,
    /// Entries hold the suspended neighbor iterator of an ancestor and the
    /// parent of that ancestor; the iterator of the vertex being expanded
    /// lives in a local of the visit loop.
    stack: Vec<(G::Neighbors, VertexId)>,
    state: S,
}

impl<S: VertexStates, G: NeighborView> SeqIter<S, G> {
    /// Creates a new sequential visit over `view`, with all vertices white.
    pub fn new(view: G) -> SeqIter<S, G> {
        let num_vertices = view.num_vertices();
        Self {
            view,
            stack: Vec::with_capacity(16),
            state: S::new(num_vertices),
        }
    }
}

impl<S: VertexStates, G: NeighborView> Sequential<Event> for SeqIter<S, G> {
    fn visit_pruned<E, C: FnMut(Event) -> Result<(), E>>(
        &mut self,
        root: VertexId,
        pruner: &Pruner,
        mut callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
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
            // The root is finished without expanding its neighbors.
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
                if state.known(succ) {
                    callback(Event::Revisit {
                        curr: succ,
                        pred: current,
                        edge,
                        root,
                        depth: depth + 1,
                        on_stack: state.on_stack(succ),
                    })?;
                } else {
                    state.set_known(succ);

                    callback(Event::Previsit {
                        curr: succ,
                        pred: current,
                        edge: Some(edge),
                        root,
                        depth: depth + 1,
                    })?;

                    if pruner.take() {
                        // succ is finished without expanding its neighbors:
                        // it goes black without ever being on the stack, and
                        // the walk resumes at its next sibling.
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

            // Go up one stack level, resuming the suspended iterator of the
            // parent.
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
        self.stack.clear();
        self.state.reset();
    }
}
