//! Traversal and analysis of directed multigraphs.
//!
//! The crate stores a directed multigraph with opaque vertex and edge
//! payloads ([`graph::Graph`]) and runs its algorithms over three read-only
//! [views](graph::view) of it: the native edge direction, the reverse and the
//! undirected one. On top of the [visit kernels](algo::visits) it provides
//! edge enumeration with tree/back/forward-or-cross classification and
//! branch-scoped cancellation ([`algo::each_dfs`], [`algo::each_bfs`]),
//! weakly-connected [components](algo::components), reachability
//! ([`algo::reachable`], [`algo::generated_subgraphs`]) and topological
//! sorting with cycle detection ([`algo::top_sort`]).
//!
//! All entry points take a [`dsi_progress_logger::ProgressLog`]; pass
//! [`no_logging![]`](dsi_progress_logger::no_logging) when progress reporting
//! is not wanted.

pub mod algo;
pub mod graph;
pub mod utils;

/// Use `use relgraph::prelude::*;` to import the graph types, the views, the
/// operations and the visit modules.
pub mod prelude {
    pub use crate::algo::visits::{
        breadth_first, depth_first, undirected, EdgeKind, EventMask, InvalidEventMask, Pruner,
        Sequential, StoppedWhenDone,
    };
    pub use crate::algo::{
        components, each_bfs, each_dfs, each_dfs_undirected, generated_subgraphs, reachable,
        top_sort, EdgeArgs, NotADag,
    };
    pub use crate::graph::view::{Direct, Directed, NeighborView, Reverse, Undirected};
    pub use crate::graph::{EdgeId, Graph, VertexId};
    pub use crate::utils::VertexSet;
}
