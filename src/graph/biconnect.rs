//! Biconnectivity augmentation
//!
//! For every articulation point the neighbours are walked in adjacency order
//! and each consecutive pair that shares no block gets a bypass edge, which
//! threads a ring around the cut vertex. Greedy, not minimum-cardinality.
//!
//! The weaker 2-edge-connected variant covers the bridge tree by pairing its
//! leaves, which is minimum.

use crate::graph::connectivity::BlockDecomposition;
use crate::graph::edge::Edge;
use crate::graph::store::Graph;
use indexmap::IndexSet;
use std::collections::HashSet;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{debug, warn};

/// Propose edges whose addition leaves `graph` without articulation points.
///
/// Articulation points are visited in node insertion order and their
/// neighbours in edge insertion order. A proposal `(a, n)` that turns out to
/// be an edge between a later articulation point `a` and one of its own
/// neighbours `n` is dropped again. The graph is not modified; an already
/// biconnected graph yields no edges. Components are handled one at a time
/// and never joined to each other.
pub fn augment_biconnectivity<N: Clone + Eq + Hash + Debug>(graph: &Graph<N>) -> Vec<Edge<N>> {
    let blocks = BlockDecomposition::compute(graph);
    if blocks.component_count() > 1 {
        warn!(
            components = blocks.component_count(),
            "graph is disconnected; components will not be joined"
        );
    }

    let mut proposed: IndexSet<(usize, usize)> = IndexSet::new();
    let mut redundant: HashSet<(usize, usize)> = HashSet::new();

    for cut in blocks.articulation_positions() {
        let neighbours: Vec<usize> = graph.adjacent(cut).iter().copied().collect();
        for pair in neighbours.windows(2) {
            let (x, y) = (pair[0], pair[1]);
            if blocks.share_block_at(x, y) || contains_pair(&proposed, x, y) {
                continue;
            }
            proposed.insert((x, y));
            debug!(
                cut = ?graph.node_at(cut),
                u = ?graph.node_at(x),
                v = ?graph.node_at(y),
                "bypass edge proposed"
            );

            for endpoint in [x, y] {
                if contains_pair(&proposed, cut, endpoint) {
                    redundant.insert((cut, endpoint));
                    redundant.insert((endpoint, cut));
                }
            }
        }
    }

    proposed
        .into_iter()
        .filter(|pair| !redundant.contains(pair))
        .filter_map(|(x, y)| Some(Edge::new(graph.node_at(x)?.clone(), graph.node_at(y)?.clone())))
        .collect()
}

fn contains_pair(set: &IndexSet<(usize, usize)>, a: usize, b: usize) -> bool {
    set.contains(&(a, b)) || set.contains(&(b, a))
}

/// Propose edges whose addition leaves `graph` without bridges.
///
/// Each connected component is contracted into its bridge tree, whose nodes
/// are the 2-edge-connected pieces. Leaves are listed in depth-first preorder
/// and leaf `i` is joined to leaf `i + L/2`; with an odd leaf count the last
/// leaf is also joined to the first. That is `ceil(L/2)` edges per component,
/// the minimum. A leaf piece is represented by its first node in insertion
/// order that carries no bridge, falling back to its first node.
///
/// An edge-biconnected graph yields no edges. A component that is a single
/// edge cannot be fixed in a simple graph and is skipped, as are isolated
/// nodes. Components are never joined to each other.
pub fn augment_edge_biconnectivity<N: Clone + Eq + Hash + Debug>(graph: &Graph<N>) -> Vec<Edge<N>> {
    let blocks = BlockDecomposition::compute(graph);
    if blocks.component_count() > 1 {
        warn!(
            components = blocks.component_count(),
            "graph is disconnected; components will not be joined"
        );
    }
    let bridges = blocks.bridge_positions();
    if bridges.is_empty() {
        return Vec::new();
    }

    let n = graph.node_count();
    let bridge_set: HashSet<(usize, usize)> = bridges.iter().flat_map(|&(a, b)| [(a, b), (b, a)]).collect();
    let is_bridge = |a: usize, b: usize| bridge_set.contains(&(a, b));

    // 2-edge-connected pieces: components once every bridge is removed
    const UNSET: usize = usize::MAX;
    let mut piece = vec![UNSET; n];
    let mut pieces = 0;
    for root in 0..n {
        if piece[root] != UNSET {
            continue;
        }
        piece[root] = pieces;
        let mut stack = vec![root];
        while let Some(u) = stack.pop() {
            for &w in graph.adjacent(u) {
                if piece[w] == UNSET && !is_bridge(u, w) {
                    piece[w] = pieces;
                    stack.push(w);
                }
            }
        }
        pieces += 1;
    }

    let mut tree: Vec<Vec<usize>> = vec![Vec::new(); pieces];
    let mut attached = vec![false; n];
    for &(a, b) in bridges {
        tree[piece[a]].push(piece[b]);
        tree[piece[b]].push(piece[a]);
        attached[a] = true;
        attached[b] = true;
    }

    let mut representative = vec![UNSET; pieces];
    for v in 0..n {
        let slot = &mut representative[piece[v]];
        if *slot == UNSET || (attached[*slot] && !attached[v]) {
            *slot = v;
        }
    }

    let mut proposed: Vec<(usize, usize)> = Vec::new();
    let mut seen = vec![false; pieces];
    for root in 0..pieces {
        if seen[root] || tree[root].is_empty() {
            continue;
        }
        let mut leaves = Vec::new();
        let mut stack = vec![root];
        while let Some(p) = stack.pop() {
            if seen[p] {
                continue;
            }
            seen[p] = true;
            if tree[p].len() == 1 {
                leaves.push(representative[p]);
            }
            stack.extend(tree[p].iter().rev().copied().filter(|&q| !seen[q]));
        }

        let half = leaves.len() / 2;
        let mut pairs: Vec<(usize, usize)> = (0..half).map(|i| (leaves[i], leaves[i + half])).collect();
        if leaves.len() % 2 == 1 {
            pairs.push((leaves[leaves.len() - 1], leaves[0]));
        }
        for (x, y) in pairs {
            // Only a lone bridge with two single-node ends lands here
            if graph.is_adjacent(x, y) {
                debug!(u = ?graph.node_at(x), v = ?graph.node_at(y), "single-edge component skipped");
                continue;
            }
            debug!(u = ?graph.node_at(x), v = ?graph.node_at(y), "bridge cover edge proposed");
            proposed.push((x, y));
        }
    }

    proposed
        .into_iter()
        .filter_map(|(x, y)| Some(Edge::new(graph.node_at(x)?.clone(), graph.node_at(y)?.clone())))
        .collect()
}
