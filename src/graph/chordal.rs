//! Chordality tests
//!
//! [`is_chordal`] is exact for every simple graph: a graph is chordal exactly
//! when the reverse of a Maximum Cardinality Search visit order is a perfect
//! elimination ordering. [`euler_triangle_identity`] is a separate shortcut
//! that only means something for maximal planar candidates.

use crate::graph::store::Graph;
use std::fmt::Debug;
use std::hash::Hash;

/// Maximum Cardinality Search visit order.
///
/// Each step visits the unvisited node with the most visited neighbours;
/// ties go to the earliest node in insertion order.
pub fn maximum_cardinality_search<N: Clone + Eq + Hash + Debug>(graph: &Graph<N>) -> Vec<N> {
    mcs_order(graph)
        .into_iter()
        .filter_map(|i| graph.node_at(i).cloned())
        .collect()
}

/// Check that `order` eliminates every node of `graph` exactly once and that
/// the neighbours of each node eliminated after it form a clique.
pub fn is_perfect_elimination_ordering<N: Clone + Eq + Hash + Debug>(
    graph: &Graph<N>,
    order: &[N],
) -> bool {
    if order.len() != graph.node_count() {
        return false;
    }
    let mut seen = vec![false; graph.node_count()];
    let mut positions = Vec::with_capacity(order.len());
    for node in order {
        match graph.index_of(node) {
            Some(i) if !seen[i] => {
                seen[i] = true;
                positions.push(i);
            }
            _ => return false,
        }
    }
    peo_holds(graph, &positions)
}

/// Exact chordality test
pub fn is_chordal<N: Clone + Eq + Hash + Debug>(graph: &Graph<N>) -> bool {
    let mut order = mcs_order(graph);
    order.reverse();
    peo_holds(graph, &order)
}

/// Number of 3-cliques
pub fn triangle_count<N: Clone + Eq + Hash + Debug>(graph: &Graph<N>) -> usize {
    let mut count = 0;
    for i in 0..graph.node_count() {
        for &j in graph.adjacent(i).iter().filter(|&&j| j > i) {
            count += graph
                .adjacent(j)
                .iter()
                .filter(|&&k| k > j && graph.is_adjacent(i, k))
                .count();
        }
    }
    count
}

/// `T + V - E == 1` with `T` the number of triangles.
///
/// Holds for triangulated discs such as maximal outerplanar graphs, fails for
/// `K4`, and holds for some non-chordal graphs too. Only use it as a fast path
/// for graphs already known to be triangulated planar candidates.
pub fn euler_triangle_identity<N: Clone + Eq + Hash + Debug>(graph: &Graph<N>) -> bool {
    triangle_count(graph) + graph.node_count() == graph.edge_count() + 1
}

pub(crate) fn mcs_order<N: Clone + Eq + Hash + Debug>(graph: &Graph<N>) -> Vec<usize> {
    let n = graph.node_count();
    let mut weight = vec![0usize; n];
    let mut visited = vec![false; n];
    let mut order = Vec::with_capacity(n);

    for _ in 0..n {
        let mut best: Option<usize> = None;
        for v in (0..n).filter(|&v| !visited[v]) {
            if best.map_or(true, |b| weight[v] > weight[b]) {
                best = Some(v);
            }
        }
        let Some(z) = best else { break };
        visited[z] = true;
        order.push(z);
        for &w in graph.adjacent(z) {
            if !visited[w] {
                weight[w] += 1;
            }
        }
    }
    order
}

/// `order` lists positions in elimination order
pub(crate) fn peo_holds<N: Clone + Eq + Hash + Debug>(graph: &Graph<N>, order: &[usize]) -> bool {
    let mut rank = vec![0usize; graph.node_count()];
    for (r, &v) in order.iter().enumerate() {
        rank[v] = r;
    }
    order.iter().all(|&v| {
        let later: Vec<usize> = graph
            .adjacent(v)
            .iter()
            .copied()
            .filter(|&w| rank[w] > rank[v])
            .collect();
        later.iter().enumerate().all(|(i, &a)| {
            later[i + 1..].iter().all(|&b| graph.is_adjacent(a, b))
        })
    })
}
