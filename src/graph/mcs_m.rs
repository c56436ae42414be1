//! MCS-M chordal completion
//!
//! Maximum Cardinality Search with fill. Nodes are numbered from `|V|` down
//! to `1`; when `z` is numbered, every unnumbered `y` that reaches `z`
//! through unnumbered nodes of strictly smaller weight gets its weight bumped,
//! and a fill edge `(z, y)` when the two were not adjacent. The resulting
//! triangulation is minimal (no single fill edge can be dropped) but not
//! necessarily minimum.

use crate::graph::edge::Edge;
use crate::graph::store::Graph;
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

/// Output of one MCS-M run
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Completion<N: Eq + Hash> {
    /// Fill edges, oriented `(numbered node, reached node)`, in discovery order
    pub fill: Vec<Edge<N>>,
    /// Elimination ranking `1..=|V|`, listed in node insertion order
    pub ranking: IndexMap<N, usize>,
}

/// Run MCS-M over `graph`.
///
/// Ties on weight go to the earliest unnumbered node in insertion order.
/// Reachability is always tested in the original graph, never in the graph
/// extended by fill found so far.
pub fn mcs_m<N: Clone + Eq + Hash + Debug>(graph: &Graph<N>) -> Completion<N> {
    let n = graph.node_count();
    let mut weight = vec![0usize; n];
    let mut rank = vec![0usize; n];
    let mut unnumbered: Vec<usize> = (0..n).collect();
    let mut in_unnumbered = vec![true; n];
    let mut fill = Vec::new();

    for i in (1..=n).rev() {
        let mut pick = 0;
        for (k, &v) in unnumbered.iter().enumerate() {
            if weight[v] > weight[unnumbered[pick]] {
                pick = k;
            }
        }
        let z = unnumbered.remove(pick);
        in_unnumbered[z] = false;
        rank[z] = i;

        // Weights must stay frozen until every y has been tested
        let mut bumped = Vec::new();
        for &y in &unnumbered {
            if graph.is_adjacent(y, z) {
                bumped.push(y);
                continue;
            }
            let ceiling = weight[y];
            let reaches = graph.reachable_within(y, z, |v| in_unnumbered[v] && weight[v] < ceiling);
            if reaches {
                bumped.push(y);
                fill.push((z, y));
            }
        }
        for y in bumped {
            weight[y] += 1;
        }
    }

    debug!(nodes = n, fill = fill.len(), "mcs-m completed");

    Completion {
        fill: fill
            .into_iter()
            .filter_map(|(z, y)| Some(Edge::new(graph.node_at(z)?.clone(), graph.node_at(y)?.clone())))
            .collect(),
        ranking: graph.nodes().cloned().zip(rank).collect(),
    }
}
