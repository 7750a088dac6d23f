//! Read-only neighbor-relation views over a [`Graph`].
//!
//! A view exposes, for a vertex, the sequence of `(edge, neighbor)` pairs the
//! algorithms walk over. [`Direct`] follows stored edge direction, [`Reverse`]
//! swaps source and target without copying the graph, and [`Undirected`] makes
//! every stored edge traversable from either endpoint. All views preserve edge
//! identity, so payloads are shared with the underlying storage, never
//! duplicated. Views never create vertices: descriptors are meaningful only
//! for the graph the view wraps.

use super::{EdgeId, Graph, VertexId};
use sealed::sealed;

/// The neighbor relation the visit kernels are generic over.
pub trait NeighborView: Copy {
    /// The edge payload type of the underlying graph.
    type Info;
    /// The iterator returned by [`neighbors`](NeighborView::neighbors).
    type Neighbors: Iterator<Item = (EdgeId, VertexId)>;

    /// Returns the number of vertices of the underlying graph.
    fn num_vertices(&self) -> usize;

    /// Returns the number of edges of the underlying graph.
    fn num_edges(&self) -> usize;

    /// Returns whether `v` is a vertex of the underlying graph.
    fn contains(&self, v: VertexId) -> bool;

    /// Returns whether `v` has at least one inbound edge under this view.
    ///
    /// Vertices without inbound adjacency are the roots used as default seeds
    /// by [`generated_subgraphs`](crate::algo::generated_subgraphs).
    fn has_incoming(&self, v: VertexId) -> bool;

    /// Enumerates the `(edge, neighbor)` pairs reachable from `v` in one step.
    fn neighbors(&self, v: VertexId) -> Self::Neighbors;

    /// Returns the payload of `e`.
    fn info(&self, e: EdgeId) -> &Self::Info;
}

/// Marker for views on which the tree/back/forward-or-cross classification of
/// the generic depth-first kernel is meaningful.
///
/// The [`Undirected`] view is deliberately excluded: there the same stored
/// edge is reachable from both endpoints, and only the specialized
/// edge-coloring kernel in [`undirected`](crate::algo::visits::undirected)
/// classifies it correctly.
#[sealed]
pub trait Directed: NeighborView {}

/// The native edge direction of a graph.
pub struct Direct<'g, V, E> {
    graph: &'g Graph<V, E>,
}

/// The view with all edges logically swapped.
pub struct Reverse<'g, V, E> {
    graph: &'g Graph<V, E>,
}

/// The view in which each stored edge is traversable from either endpoint.
pub struct Undirected<'g, V, E> {
    graph: &'g Graph<V, E>,
}

macro_rules! impl_view_common {
    ($name:ident) => {
        impl<'g, V, E> $name<'g, V, E> {
            /// Creates a view over `graph`.
            pub fn new(graph: &'g Graph<V, E>) -> Self {
                Self { graph }
            }

            /// Returns the underlying graph.
            pub fn graph(&self) -> &'g Graph<V, E> {
                self.graph
            }
        }

        impl<V, E> Clone for $name<'_, V, E> {
            fn clone(&self) -> Self {
                *self
            }
        }

        impl<V, E> Copy for $name<'_, V, E> {}
    };
}

impl_view_common!(Direct);
impl_view_common!(Reverse);
impl_view_common!(Undirected);

/// Iterator over the outgoing `(edge, target)` pairs of a vertex.
pub struct OutNeighbors<'g, V, E> {
    graph: &'g Graph<V, E>,
    edges: std::slice::Iter<'g, EdgeId>,
}

impl<V, E> Iterator for OutNeighbors<'_, V, E> {
    type Item = (EdgeId, VertexId);

    fn next(&mut self) -> Option<Self::Item> {
        self.edges.next().map(|&e| (e, self.graph.target(e)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

/// Iterator over the incoming `(edge, source)` pairs of a vertex.
pub struct InNeighbors<'g, V, E> {
    graph: &'g Graph<V, E>,
    edges: std::slice::Iter<'g, EdgeId>,
}

impl<V, E> Iterator for InNeighbors<'_, V, E> {
    type Item = (EdgeId, VertexId);

    fn next(&mut self) -> Option<Self::Item> {
        self.edges.next().map(|&e| (e, self.graph.source(e)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        self.edges.size_hint()
    }
}

/// Iterator over the incident `(edge, other endpoint)` pairs of a vertex,
/// outgoing edges first.
///
/// A self-loop is incident twice and is therefore yielded twice; the
/// undirected kernel's edge colors keep it from being classified twice.
pub struct IncidentNeighbors<'g, V, E> {
    graph: &'g Graph<V, E>,
    out: std::slice::Iter<'g, EdgeId>,
    inc: std::slice::Iter<'g, EdgeId>,
}

impl<V, E> Iterator for IncidentNeighbors<'_, V, E> {
    type Item = (EdgeId, VertexId);

    fn next(&mut self) -> Option<Self::Item> {
        if let Some(&e) = self.out.next() {
            return Some((e, self.graph.target(e)));
        }
        self.inc.next().map(|&e| (e, self.graph.source(e)))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let (out_lower, out_upper) = self.out.size_hint();
        let (inc_lower, inc_upper) = self.inc.size_hint();
        (
            out_lower + inc_lower,
            out_upper.zip(inc_upper).map(|(a, b)| a + b),
        )
    }
}

impl<'g, V, E> NeighborView for Direct<'g, V, E> {
    type Info = E;
    type Neighbors = OutNeighbors<'g, V, E>;

    fn num_vertices(&self) -> usize {
        self.graph.num_vertices()
    }

    fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    fn contains(&self, v: VertexId) -> bool {
        self.graph.contains(v)
    }

    fn has_incoming(&self, v: VertexId) -> bool {
        self.graph.in_degree(v) > 0
    }

    fn neighbors(&self, v: VertexId) -> Self::Neighbors {
        OutNeighbors {
            graph: self.graph,
            edges: self.graph.out_edges(v).iter(),
        }
    }

    fn info(&self, e: EdgeId) -> &E {
        self.graph.info(e)
    }
}

impl<'g, V, E> NeighborView for Reverse<'g, V, E> {
    type Info = E;
    type Neighbors = InNeighbors<'g, V, E>;

    fn num_vertices(&self) -> usize {
        self.graph.num_vertices()
    }

    fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    fn contains(&self, v: VertexId) -> bool {
        self.graph.contains(v)
    }

    fn has_incoming(&self, v: VertexId) -> bool {
        self.graph.out_degree(v) > 0
    }

    fn neighbors(&self, v: VertexId) -> Self::Neighbors {
        InNeighbors {
            graph: self.graph,
            edges: self.graph.in_edges(v).iter(),
        }
    }

    fn info(&self, e: EdgeId) -> &E {
        self.graph.info(e)
    }
}

impl<'g, V, E> NeighborView for Undirected<'g, V, E> {
    type Info = E;
    type Neighbors = IncidentNeighbors<'g, V, E>;

    fn num_vertices(&self) -> usize {
        self.graph.num_vertices()
    }

    fn num_edges(&self) -> usize {
        self.graph.num_edges()
    }

    fn contains(&self, v: VertexId) -> bool {
        self.graph.contains(v)
    }

    fn has_incoming(&self, v: VertexId) -> bool {
        self.graph.out_degree(v) + self.graph.in_degree(v) > 0
    }

    fn neighbors(&self, v: VertexId) -> Self::Neighbors {
        IncidentNeighbors {
            graph: self.graph,
            out: self.graph.out_edges(v).iter(),
            inc: self.graph.in_edges(v).iter(),
        }
    }

    fn info(&self, e: EdgeId) -> &E {
        self.graph.info(e)
    }
}

#[sealed]
impl<V, E> Directed for Direct<'_, V, E> {}

#[sealed]
impl<V, E> Directed for Reverse<'_, V, E> {}
