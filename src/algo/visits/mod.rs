//! Visit kernels.
//!
//! A visit walks a [view](crate::graph::view::NeighborView) of a graph and
//! invokes a callback with events describing the walk. Callbacks return
//! `Result<(), E>`, and an error interrupts the visit and propagates to the
//! caller; visits that cannot be interrupted run with
//! `E = core::convert::Infallible`. Interruption on purpose is conventionally
//! signalled with [`StoppedWhenDone`].
//!
//! Each visit object owns its color state, zeroed at construction; the public
//! operations in [`algo`](crate::algo) create a fresh visit per call, so no
//! coloring ever leaks between calls. [`Sequential::reset`] allows explicit
//! reuse of a visit object.

pub mod breadth_first;
pub mod depth_first;
pub mod undirected;

use crate::graph::VertexId;
use dsi_progress_logger::ProgressLog;
use std::cell::Cell;
use thiserror::Error;

/// The error used to stop a visit early once the caller has what it needs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("stopped when done")]
pub struct StoppedWhenDone;

/// The classification of an enumerated edge.
///
/// The discriminants are part of the public surface and must not change:
/// they interoperate with serialized event masks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum EdgeKind {
    /// The edge led to a previously unvisited vertex.
    Tree = 1,
    /// The edge led to a vertex still in progress: a cycle.
    Back = 2,
    /// The edge led to an already finished vertex (depth-first visits of
    /// directed views only).
    ForwardOrCross = 4,
    /// The edge led to an already visited vertex, without distinguishing
    /// back from forward-or-cross (breadth-first and undirected visits).
    NonTree = 6,
}

impl EdgeKind {
    /// Returns the bit pattern of this kind.
    pub const fn bits(self) -> u8 {
        self as u8
    }
}

/// A bitmask selecting which [`EdgeKind`]s a visitor wants delivered.
///
/// Filtering is observational only: it never alters the walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct EventMask(u8);

impl EventMask {
    /// Tree edges.
    pub const TREE: Self = Self(1);
    /// Back edges.
    pub const BACK: Self = Self(2);
    /// Forward or cross edges.
    pub const FORWARD_OR_CROSS: Self = Self(4);
    /// Back and forward-or-cross edges.
    pub const NON_TREE: Self = Self(6);
    /// All edges.
    pub const ALL: Self = Self(7);

    /// Returns the bit pattern of this mask.
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Builds a mask from a bit pattern, ignoring bits outside
    /// [`ALL`](Self::ALL).
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits & Self::ALL.0)
    }

    /// Returns whether events of kind `kind` should be delivered.
    pub const fn accepts(self, kind: EdgeKind) -> bool {
        self.0 & kind.bits() != 0
    }

    /// Returns whether all bits of `other` are set in this mask.
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }
}

impl std::ops::BitOr for EventMask {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

/// The error returned by a breadth-first enumeration whose mask selects only
/// part of [`NON_TREE`](EventMask::NON_TREE).
///
/// A level-order walk cannot tell back edges from forward or cross edges, so
/// the two must be requested together or not at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot request BACK and FORWARD_OR_CROSS separately in a breadth-first visit")]
pub struct InvalidEventMask;

/// A branch-scoped cancellation token.
///
/// The token is owned by a single traversal call. The visit consults it with
/// [`take`](Pruner::take) before expanding each discovered vertex: a signalled
/// token finishes that vertex without descending into its subtree, and the
/// signal is consumed so siblings and ancestors continue normally.
#[derive(Debug, Default)]
pub struct Pruner(Cell<bool>);

impl Pruner {
    /// Creates an unsignalled token.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the current branch for cancellation.
    pub fn prune(&self) {
        self.0.set(true);
    }

    /// Returns whether the token is currently signalled.
    pub fn pruned(&self) -> bool {
        self.0.get()
    }

    /// Clears the signal without acting on it.
    ///
    /// Useful for algorithms that let their callbacks use [`prune`](Self::prune)
    /// as a way to stop their own iteration without forwarding it to an
    /// underlying visit.
    pub fn reset(&self) {
        self.0.set(false);
    }

    /// Consumes the signal, returning whether it was set.
    pub fn take(&self) -> bool {
        self.0.replace(false)
    }
}

/// A sequential visit.
///
/// Implementations provide [`visit_pruned`](Sequential::visit_pruned), which
/// walks the graph from a given root, and
/// [`visit_all_pruned`](Sequential::visit_all_pruned), which repeats the
/// single-source walk for every vertex still unvisited, covering disconnected
/// parts of the graph. A root that is absent from the graph, or already
/// visited, is a silent no-op.
///
/// The callback receives events of type `A` and may interrupt the visit by
/// returning an error; the color state is left as is, so an interrupted visit
/// object can resume on the remaining vertices or be [reset](Sequential::reset).
pub trait Sequential<A> {
    /// Visits the graph from `root`, consulting `pruner` before each vertex
    /// expansion.
    ///
    /// # Arguments
    /// * `root`: the vertex to start from; absent or already visited roots
    ///   are a no-op.
    /// * `pruner`: the cancellation token for this walk.
    /// * `callback`: the event sink.
    /// * `pl`: a progress logger. Pass
    ///   [`no_logging![]`](dsi_progress_logger::no_logging) to disable logging.
    fn visit_pruned<E, C: FnMut(A) -> Result<(), E>>(
        &mut self,
        root: VertexId,
        pruner: &Pruner,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E>;

    /// Visits the whole graph, one single-source walk per unvisited vertex.
    ///
    /// See [`visit_pruned`](Sequential::visit_pruned) for the arguments.
    fn visit_all_pruned<E, C: FnMut(A) -> Result<(), E>>(
        &mut self,
        pruner: &Pruner,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E>;

    /// Visits the graph from `root` without cancellation.
    fn visit<E, C: FnMut(A) -> Result<(), E>>(
        &mut self,
        root: VertexId,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        self.visit_pruned(root, &Pruner::new(), callback, pl)
    }

    /// Visits the whole graph without cancellation.
    fn visit_all<E, C: FnMut(A) -> Result<(), E>>(
        &mut self,
        callback: C,
        pl: &mut impl ProgressLog,
    ) -> Result<(), E> {
        self.visit_all_pruned(&Pruner::new(), callback, pl)
    }

    /// Resets the visit status, making it possible to reuse the visit object.
    fn reset(&mut self);
}
