//! Graph edge implementation

use serde::{Deserialize, Serialize};

/// Undirected edge between two node identifiers.
///
/// The stored orientation is the one an engine proposed it in; equality on
/// the unordered pair is [`Edge::same_pair`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<N> {
    /// First endpoint
    pub u: N,
    /// Second endpoint
    pub v: N,
}

impl<N: PartialEq> Edge<N> {
    /// Create a new edge
    pub fn new(u: N, v: N) -> Self {
        Self { u, v }
    }

    /// Check whether both edges join the same two nodes, in either orientation
    pub fn same_pair(&self, other: &Edge<N>) -> bool {
        (self.u == other.u && self.v == other.v) || (self.u == other.v && self.v == other.u)
    }
}

impl<N> From<(N, N)> for Edge<N> {
    fn from((u, v): (N, N)) -> Self {
        Self { u, v }
    }
}
