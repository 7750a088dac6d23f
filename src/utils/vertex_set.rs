use crate::graph::VertexId;
use std::collections::HashSet;

/// An unordered collection of vertex descriptors with constant-time
/// membership test.
///
/// Used to pass seed vertices to the analyzers and to return components and
/// reachable groups. Iteration order is unspecified.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VertexSet(HashSet<VertexId>);

impl VertexSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a vertex, returning whether it was not already present.
    pub fn insert(&mut self, v: VertexId) -> bool {
        self.0.insert(v)
    }

    /// Returns whether the set contains `v`.
    pub fn contains(&self, v: VertexId) -> bool {
        self.0.contains(&v)
    }

    /// Adds all vertices of `other` to this set.
    pub fn union_with(&mut self, other: &VertexSet) {
        self.0.extend(other.iter());
    }

    /// Returns the number of vertices in the set.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns whether the set is empty.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the vertices of the set, in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = VertexId> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<VertexId> for VertexSet {
    fn from_iter<I: IntoIterator<Item = VertexId>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl Extend<VertexId> for VertexSet {
    fn extend<I: IntoIterator<Item = VertexId>>(&mut self, iter: I) {
        self.0.extend(iter);
    }
}

impl IntoIterator for VertexSet {
    type Item = VertexId;
    type IntoIter = std::collections::hash_set::IntoIter<VertexId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a VertexSet {
    type Item = &'a VertexId;
    type IntoIter = std::collections::hash_set::Iter<'a, VertexId>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
