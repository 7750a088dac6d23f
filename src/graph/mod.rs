//! Graph storage: a directed multigraph with opaque vertex and edge payloads.
//!
//! Vertices and edges are addressed by [`VertexId`] and [`EdgeId`], which are
//! valid only for the graph they were obtained from. The storage keeps both
//! outgoing and incoming edge lists per vertex, so the [reverse](view::Reverse)
//! and [undirected](view::Undirected) views can be computed without copying.

pub mod view;

/// An opaque, graph-scoped vertex descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct VertexId(usize);

impl VertexId {
    /// Creates a descriptor from a raw index.
    ///
    /// The resulting descriptor is valid only if a vertex with this index
    /// exists in the graph it is used with; algorithms treat out-of-range
    /// descriptors as absent vertices.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index of this vertex.
    pub const fn index(self) -> usize {
        self.0
    }
}

/// An opaque, graph-scoped edge descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EdgeId(usize);

impl EdgeId {
    /// Creates a descriptor from a raw index.
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index of this edge.
    pub const fn index(self) -> usize {
        self.0
    }
}

struct VertexEntry<V> {
    payload: V,
    out: Vec<EdgeId>,
    inc: Vec<EdgeId>,
}

struct EdgeEntry<E> {
    source: VertexId,
    target: VertexId,
    info: E,
}

/// A directed multigraph with vertex payloads `V` and edge payloads `E`.
///
/// Multiple edges between the same ordered pair of vertices are allowed, and
/// each keeps its own identity and payload. Edge enumeration order for a
/// vertex is insertion order.
pub struct Graph<V, E> {
    vertices: Vec<VertexEntry<V>>,
    edges: Vec<EdgeEntry<E>>,
}

impl<V, E> Default for Graph<V, E> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V, E> Graph<V, E> {
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self {
            vertices: Vec::new(),
            edges: Vec::new(),
        }
    }

    /// Adds a vertex carrying `payload` and returns its descriptor.
    pub fn add_vertex(&mut self, payload: V) -> VertexId {
        let id = VertexId(self.vertices.len());
        self.vertices.push(VertexEntry {
            payload,
            out: Vec::new(),
            inc: Vec::new(),
        });
        id
    }

    /// Adds a directed edge from `source` to `target` carrying `info`.
    ///
    /// # Panics
    ///
    /// Panics if either endpoint is not a vertex of this graph.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, info: E) -> EdgeId {
        assert!(
            self.contains(source) && self.contains(target),
            "edge endpoints must be vertices of this graph"
        );
        let id = EdgeId(self.edges.len());
        self.edges.push(EdgeEntry {
            source,
            target,
            info,
        });
        self.vertices[source.index()].out.push(id);
        self.vertices[target.index()].inc.push(id);
        id
    }

    /// Returns the number of vertices.
    pub fn num_vertices(&self) -> usize {
        self.vertices.len()
    }

    /// Returns the number of edges.
    pub fn num_edges(&self) -> usize {
        self.edges.len()
    }

    /// Returns whether `v` is a vertex of this graph.
    pub fn contains(&self, v: VertexId) -> bool {
        v.index() < self.vertices.len()
    }

    /// Returns the payload of `v`.
    pub fn payload(&self, v: VertexId) -> &V {
        &self.vertices[v.index()].payload
    }

    /// Returns the payload of `e`.
    pub fn info(&self, e: EdgeId) -> &E {
        &self.edges[e.index()].info
    }

    /// Returns the source vertex of `e`.
    pub fn source(&self, e: EdgeId) -> VertexId {
        self.edges[e.index()].source
    }

    /// Returns the target vertex of `e`.
    pub fn target(&self, e: EdgeId) -> VertexId {
        self.edges[e.index()].target
    }

    /// Returns the endpoints of `e` as `(source, target)`.
    pub fn endpoints(&self, e: EdgeId) -> (VertexId, VertexId) {
        let entry = &self.edges[e.index()];
        (entry.source, entry.target)
    }

    /// Enumerates all vertices.
    pub fn vertices(&self) -> impl Iterator<Item = VertexId> + '_ {
        (0..self.vertices.len()).map(VertexId)
    }

    /// Enumerates all edges.
    pub fn edges(&self) -> impl Iterator<Item = EdgeId> + '_ {
        (0..self.edges.len()).map(EdgeId)
    }

    /// Returns the outgoing edges of `v` in insertion order.
    pub fn out_edges(&self, v: VertexId) -> &[EdgeId] {
        &self.vertices[v.index()].out
    }

    /// Returns the incoming edges of `v` in insertion order.
    pub fn in_edges(&self, v: VertexId) -> &[EdgeId] {
        &self.vertices[v.index()].inc
    }

    /// Returns the number of outgoing edges of `v`.
    pub fn out_degree(&self, v: VertexId) -> usize {
        self.vertices[v.index()].out.len()
    }

    /// Returns the number of incoming edges of `v`.
    pub fn in_degree(&self, v: VertexId) -> usize {
        self.vertices[v.index()].inc.len()
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn test_descriptors_and_degrees() {
        let mut graph = Graph::new();
        let a = graph.add_vertex("a");
        let b = graph.add_vertex("b");
        let e = graph.add_edge(a, b, 7);

        assert_eq!(graph.num_vertices(), 2);
        assert_eq!(graph.num_edges(), 1);
        assert!(graph.contains(a));
        assert!(!graph.contains(VertexId::new(2)));
        assert_eq!(*graph.payload(b), "b");
        assert_eq!(*graph.info(e), 7);
        assert_eq!(graph.endpoints(e), (a, b));
        assert_eq!(graph.out_degree(a), 1);
        assert_eq!(graph.in_degree(a), 0);
        assert_eq!(graph.in_degree(b), 1);
    }

    #[test]
    fn test_parallel_edges_keep_identity() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(());
        let b = graph.add_vertex(());
        let e1 = graph.add_edge(a, b, "first");
        let e2 = graph.add_edge(a, b, "second");

        assert_ne!(e1, e2);
        assert_eq!(graph.out_edges(a), &[e1, e2]);
        assert_eq!(graph.in_edges(b), &[e1, e2]);
        assert_eq!(*graph.info(e2), "second");
    }

    #[test]
    fn test_self_loop_is_both_outgoing_and_incoming() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(());
        let e = graph.add_edge(a, a, ());

        assert_eq!(graph.out_edges(a), &[e]);
        assert_eq!(graph.in_edges(a), &[e]);
    }

    #[test]
    #[should_panic(expected = "edge endpoints must be vertices of this graph")]
    fn test_edge_to_absent_vertex_panics() {
        let mut graph = Graph::new();
        let a = graph.add_vertex(());
        graph.add_edge(a, VertexId::new(3), ());
    }
}
