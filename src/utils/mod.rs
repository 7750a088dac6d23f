mod vertex_set;
pub use vertex_set::VertexSet;
