//! Triangulation orchestrator: chordality check first, MCS-M only when needed

use crate::core::config::TriangulationConfig;
use crate::graph::chordal::{euler_triangle_identity, is_chordal};
use crate::graph::edge::Edge;
use crate::graph::mcs_m::{mcs_m, Completion};
use crate::graph::store::Graph;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// Result of [`triangulate_with`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Triangulation<N: Eq + Hash> {
    /// Fill edges to add; empty when the graph was already chordal
    pub fill: Vec<Edge<N>>,
    /// Elimination ranking. Identity (`position + 1`) when no completion ran.
    pub ranking: IndexMap<N, usize>,
    /// The chordality check short-circuited the completion engine
    pub already_chordal: bool,
}

/// Fill edges that make `graph` chordal, using the exact chordality test
pub fn triangulate<N: Clone + Eq + Hash + Debug>(graph: &Graph<N>) -> Vec<Edge<N>> {
    triangulate_with(graph, &TriangulationConfig::default()).fill
}

/// Fill edges and elimination ranking for `graph`
pub fn triangulate_with<N: Clone + Eq + Hash + Debug>(
    graph: &Graph<N>,
    config: &TriangulationConfig,
) -> Triangulation<N> {
    let chordal = is_chordal(graph) || (config.euler_shortcut && euler_triangle_identity(graph));
    if chordal {
        debug!(nodes = graph.node_count(), "graph already chordal");
        return Triangulation {
            fill: Vec::new(),
            ranking: graph
                .nodes()
                .cloned()
                .enumerate()
                .map(|(i, node)| (node, i + 1))
                .collect(),
            already_chordal: true,
        };
    }

    let Completion { fill, ranking } = mcs_m(graph);
    Triangulation {
        fill,
        ranking,
        already_chordal: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: u32, edges: &[(u32, u32)]) -> Graph<u32> {
        Graph::from_edges(0..n, edges.iter().copied()).unwrap()
    }

    #[test]
    fn triangle_is_left_alone_with_identity_ranking() {
        let g = graph(3, &[(0, 1), (1, 2), (2, 0)]);
        let t = triangulate_with(&g, &TriangulationConfig::default());
        assert!(t.already_chordal);
        assert!(t.fill.is_empty());
        assert_eq!(t.ranking.get(&0), Some(&1));
        assert_eq!(t.ranking.get(&2), Some(&3));
    }

    #[test]
    fn square_is_delegated_to_mcs_m() {
        let g = graph(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let t = triangulate_with(&g, &TriangulationConfig::default());
        assert!(!t.already_chordal);
        assert_eq!(t.fill, mcs_m(&g).fill);
        assert_eq!(triangulate(&g).len(), 1);
    }

    #[test]
    fn euler_shortcut_only_applies_when_enabled() {
        // Square plus a separate triangle satisfies T + V - E == 1
        let g = graph(7, &[(0, 1), (1, 2), (2, 3), (3, 0), (4, 5), (5, 6), (6, 4)]);
        assert_eq!(triangulate(&g).len(), 1);

        let shortcut = TriangulationConfig { euler_shortcut: true };
        let t = triangulate_with(&g, &shortcut);
        assert!(t.already_chordal);
        assert!(t.fill.is_empty());
    }
}
