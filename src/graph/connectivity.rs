//! Articulation points, biconnected blocks, and bridges
//!
//! One depth-first traversal per connected component computes discovery
//! times and low-links (Tarjan). The traversal keeps its own frame stack
//! instead of recursing, so deep graphs cannot exhaust the call stack.
//! Blocks are harvested from an edge stack every time a child's low-link
//! does not reach above its parent.

use crate::graph::edge::Edge;
use crate::graph::store::Graph;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::debug;

const UNSET: usize = usize::MAX;

/// Articulation points and block partition of one graph snapshot.
///
/// Derived and transient: recompute after every mutation of the graph.
/// Isolated nodes belong to no block.
#[derive(Debug, Clone)]
pub struct BlockDecomposition<'g, N> {
    graph: &'g Graph<N>,
    articulation: Vec<bool>,
    blocks: Vec<Vec<usize>>,
    membership: Vec<Vec<usize>>,
    bridges: Vec<(usize, usize)>,
    components: usize,
}

impl<'g, N: Clone + Eq + Hash + Debug> BlockDecomposition<'g, N> {
    /// Analyze `graph` in O(V + E)
    pub fn compute(graph: &'g Graph<N>) -> Self {
        let n = graph.node_count();
        let mut disc = vec![UNSET; n];
        let mut low = vec![0usize; n];
        let mut parent = vec![UNSET; n];
        let mut cursor = vec![0usize; n];
        let mut articulation = vec![false; n];
        let mut timer = 0usize;

        let mut blocks: Vec<Vec<usize>> = Vec::new();
        let mut bridges = Vec::new();
        let mut components = 0;
        let mut edge_stack: Vec<(usize, usize)> = Vec::new();
        let mut stamp = vec![UNSET; n];

        for root in 0..n {
            if disc[root] != UNSET {
                continue;
            }
            components += 1;
            disc[root] = timer;
            low[root] = timer;
            timer += 1;

            let mut root_children = 0;
            let mut stack = vec![root];
            while let Some(&u) = stack.last() {
                let adjacent = graph.adjacent(u);
                if cursor[u] < adjacent.len() {
                    let v = adjacent[cursor[u]];
                    cursor[u] += 1;

                    if disc[v] == UNSET {
                        // Tree edge
                        parent[v] = u;
                        if u == root {
                            root_children += 1;
                        }
                        disc[v] = timer;
                        low[v] = timer;
                        timer += 1;
                        edge_stack.push((u, v));
                        stack.push(v);
                    } else if v != parent[u] && disc[v] < disc[u] {
                        // Back edge to an ancestor
                        low[u] = low[u].min(disc[v]);
                        edge_stack.push((u, v));
                    }
                    continue;
                }

                stack.pop();
                let p = parent[u];
                if p == UNSET {
                    continue;
                }
                low[p] = low[p].min(low[u]);
                if low[u] > disc[p] {
                    bridges.push((p, u));
                }
                if low[u] >= disc[p] {
                    if p != root {
                        articulation[p] = true;
                    }
                    let id = blocks.len();
                    let mut block = Vec::new();
                    while let Some((a, b)) = edge_stack.pop() {
                        for x in [a, b] {
                            if stamp[x] != id {
                                stamp[x] = id;
                                block.push(x);
                            }
                        }
                        if (a, b) == (p, u) {
                            break;
                        }
                    }
                    block.sort_unstable();
                    blocks.push(block);
                }
            }

            if root_children >= 2 {
                articulation[root] = true;
            }
            debug_assert!(edge_stack.is_empty());
        }

        let mut membership = vec![Vec::new(); n];
        for (id, block) in blocks.iter().enumerate() {
            for &x in block {
                membership[x].push(id);
            }
        }

        debug!(
            nodes = n,
            components,
            blocks = blocks.len(),
            articulation_points = articulation.iter().filter(|&&a| a).count(),
            bridges = bridges.len(),
            "block decomposition computed"
        );

        Self {
            graph,
            articulation,
            blocks,
            membership,
            bridges,
            components,
        }
    }

    /// Articulation points in node insertion order
    pub fn articulation_points(&self) -> Vec<&'g N> {
        let graph: &'g Graph<N> = self.graph;
        self.articulation_positions()
            .filter_map(|i| graph.node_at(i))
            .collect()
    }

    /// Check whether removing `node` disconnects its component
    pub fn is_articulation_point(&self, node: &N) -> bool {
        self.graph
            .index_of(node)
            .is_some_and(|i| self.articulation[i])
    }

    /// Blocks in harvest order, each listed in node order
    pub fn blocks(&self) -> Vec<Vec<&'g N>> {
        let graph: &'g Graph<N> = self.graph;
        self.blocks
            .iter()
            .map(|block| {
                block
                    .iter()
                    .filter_map(|&i| graph.node_at(i))
                    .collect()
            })
            .collect()
    }

    /// Number of blocks
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }

    /// Number of connected components, isolated nodes included
    pub fn component_count(&self) -> usize {
        self.components
    }

    /// Check whether `u` and `v` lie in a common block
    pub fn share_block(&self, u: &N, v: &N) -> bool {
        match (self.graph.index_of(u), self.graph.index_of(v)) {
            (Some(a), Some(b)) => self.share_block_at(a, b),
            _ => false,
        }
    }

    /// Edges whose removal disconnects their component, oriented parent to child
    pub fn bridges(&self) -> Vec<Edge<N>> {
        self.bridges
            .iter()
            .filter_map(|&(a, b)| {
                Some(Edge::new(
                    self.graph.node_at(a)?.clone(),
                    self.graph.node_at(b)?.clone(),
                ))
            })
            .collect()
    }

    /// A single block spans every node. `K2` counts, a lone node does not.
    pub fn is_biconnected(&self) -> bool {
        self.graph.node_count() >= 2
            && self.blocks.len() == 1
            && self.blocks[0].len() == self.graph.node_count()
    }

    /// At least three nodes, connected, and no bridge
    pub fn is_edge_biconnected(&self) -> bool {
        self.graph.node_count() >= 3 && self.components == 1 && self.bridges.is_empty()
    }

    pub(crate) fn articulation_positions(&self) -> impl Iterator<Item = usize> + '_ {
        self.articulation
            .iter()
            .enumerate()
            .filter(|&(_, &is_cut)| is_cut)
            .map(|(i, _)| i)
    }

    pub(crate) fn bridge_positions(&self) -> &[(usize, usize)] {
        &self.bridges
    }

    pub(crate) fn share_block_at(&self, a: usize, b: usize) -> bool {
        self.membership[a]
            .iter()
            .any(|id| self.membership[b].contains(id))
    }
}

/// Articulation points of `graph` in node insertion order
pub fn articulation_points<N: Clone + Eq + Hash + Debug>(graph: &Graph<N>) -> Vec<N> {
    BlockDecomposition::compute(graph)
        .articulation_points()
        .into_iter()
        .cloned()
        .collect()
}

/// Check whether `graph` is biconnected
pub fn is_biconnected<N: Clone + Eq + Hash + Debug>(graph: &Graph<N>) -> bool {
    BlockDecomposition::compute(graph).is_biconnected()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: u32, edges: &[(u32, u32)]) -> Graph<u32> {
        Graph::from_edges(0..n, edges.iter().copied()).unwrap()
    }

    #[test]
    fn star_centre_is_the_only_cut_vertex() {
        let g = graph(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]);
        let bd = BlockDecomposition::compute(&g);
        assert_eq!(bd.articulation_points(), vec![&0]);
        assert_eq!(bd.block_count(), 4);
        assert_eq!(bd.bridges().len(), 4);
        assert!(!bd.share_block(&1, &2));
        assert!(bd.share_block(&0, &3));
        assert!(!bd.is_biconnected());
    }

    #[test]
    fn root_with_single_child_is_not_a_cut_vertex() {
        let g = graph(3, &[(0, 1), (1, 2)]);
        assert_eq!(articulation_points(&g), vec![1]);
    }

    #[test]
    fn cycle_is_one_block() {
        let g = graph(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let bd = BlockDecomposition::compute(&g);
        assert!(bd.articulation_points().is_empty());
        assert_eq!(bd.blocks(), vec![vec![&0, &1, &2, &3]]);
        assert!(bd.bridges().is_empty());
        assert!(bd.is_biconnected());
        assert!(bd.is_edge_biconnected());
    }

    #[test]
    fn bowtie_splits_at_shared_node() {
        // Two triangles sharing node 2
        let g = graph(5, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 2)]);
        let bd = BlockDecomposition::compute(&g);
        assert_eq!(bd.articulation_points(), vec![&2]);
        let mut blocks = bd.blocks();
        blocks.sort();
        assert_eq!(blocks, vec![vec![&0, &1, &2], vec![&2, &3, &4]]);
        assert!(bd.share_block(&0, &1));
        assert!(!bd.share_block(&1, &3));
        assert!(bd.is_edge_biconnected());
        assert!(!bd.is_biconnected());
    }

    #[test]
    fn blocks_cover_every_edge() {
        let g = graph(7, &[(0, 1), (1, 2), (2, 0), (2, 3), (3, 4), (4, 5), (5, 3), (5, 6)]);
        let bd = BlockDecomposition::compute(&g);
        for edge in g.edges() {
            assert!(bd.share_block(&edge.u, &edge.v), "{:?} not covered", edge);
        }
        assert_eq!(articulation_points(&g), vec![2, 3, 5]);
    }

    #[test]
    fn disconnected_components_are_analyzed_independently() {
        let g = graph(6, &[(0, 1), (1, 2), (3, 4), (4, 5)]);
        let bd = BlockDecomposition::compute(&g);
        assert_eq!(bd.component_count(), 2);
        assert_eq!(bd.articulation_points(), vec![&1, &4]);
        assert!(!bd.is_edge_biconnected());
    }

    #[test]
    fn isolated_nodes_have_no_block() {
        let g = graph(3, &[(0, 1)]);
        let bd = BlockDecomposition::compute(&g);
        assert_eq!(bd.blocks(), vec![vec![&0, &1]]);
        assert!(!bd.share_block(&2, &2));
        assert_eq!(bd.component_count(), 2);
    }

    #[test]
    fn single_edge_is_biconnected_single_node_is_not() {
        assert!(is_biconnected(&graph(2, &[(0, 1)])));
        assert!(!is_biconnected(&graph(1, &[])));
        assert!(!BlockDecomposition::compute(&graph(2, &[(0, 1)])).is_edge_biconnected());
    }

    #[test]
    fn long_path_does_not_overflow() {
        let n = 200_000u32;
        let g = Graph::from_edges(0..n, (1..n).map(|i| (i - 1, i))).unwrap();
        let bd = BlockDecomposition::compute(&g);
        assert_eq!(bd.articulation_points().len(), (n - 2) as usize);
        assert_eq!(bd.block_count(), (n - 1) as usize);
    }
}
