//! Graph store: a mutable simple undirected graph value
//!
//! Nodes live in an insertion-ordered set and every node keeps its
//! neighbours as positions in edge insertion order. That order is the single
//! total order every engine in this crate breaks ties with, so results are
//! reproducible across runs.

use crate::core::error::{GraphError, Result};
use crate::graph::edge::Edge;
use indexmap::IndexSet;
use std::collections::VecDeque;
use std::fmt::Debug;
use std::hash::Hash;

/// Simple undirected graph: no self-loops, no parallel edges, and every edge
/// joins two declared nodes.
#[derive(Debug, Clone)]
pub struct Graph<N> {
    nodes: IndexSet<N>,
    adjacency: Vec<IndexSet<usize>>,
    edge_count: usize,
}

impl<N> Default for Graph<N> {
    fn default() -> Self {
        Self {
            nodes: IndexSet::default(),
            adjacency: Vec::new(),
            edge_count: 0,
        }
    }
}

impl<N: Clone + Eq + Hash + Debug> Graph<N> {
    /// Create an empty graph
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an edgeless graph over `nodes`, in iteration order
    pub fn with_nodes(nodes: impl IntoIterator<Item = N>) -> Self {
        let mut graph = Self::new();
        for node in nodes {
            graph.add_node(node);
        }
        graph
    }

    /// Build a graph from declared nodes and an edge list.
    ///
    /// Every endpoint must be declared; self-loops and duplicate edges are
    /// rejected.
    pub fn from_edges(
        nodes: impl IntoIterator<Item = N>,
        edges: impl IntoIterator<Item = (N, N)>,
    ) -> Result<Self> {
        let mut graph = Self::with_nodes(nodes);
        for (u, v) in edges {
            graph.add_edge(u, v)?;
        }
        Ok(graph)
    }

    /// Declare a node, returning its position. Re-declaring is a no-op.
    pub fn add_node(&mut self, node: N) -> usize {
        let (index, inserted) = self.nodes.insert_full(node);
        if inserted {
            self.adjacency.push(IndexSet::new());
        }
        index
    }

    /// Add the undirected edge `{u, v}`
    pub fn add_edge(&mut self, u: N, v: N) -> Result<()> {
        if u == v {
            return Err(GraphError::SelfLoop {
                node: format!("{:?}", u),
            }
            .into());
        }
        let a = self.require(&u)?;
        let b = self.require(&v)?;
        if self.adjacency[a].contains(&b) {
            return Err(GraphError::DuplicateEdge {
                u: format!("{:?}", u),
                v: format!("{:?}", v),
            }
            .into());
        }
        self.adjacency[a].insert(b);
        self.adjacency[b].insert(a);
        self.edge_count += 1;
        Ok(())
    }

    /// Apply a proposal set. Either every edge is added or the graph is left untouched.
    pub fn extend_edges(&mut self, edges: &[Edge<N>]) -> Result<()> {
        let mut next = self.clone();
        for edge in edges {
            next.add_edge(edge.u.clone(), edge.v.clone())?;
        }
        *self = next;
        Ok(())
    }

    /// Number of nodes
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Number of undirected edges
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Nodes in insertion order
    pub fn nodes(&self) -> impl Iterator<Item = &N> + '_ {
        self.nodes.iter()
    }

    /// Position of `node` in insertion order
    pub fn index_of(&self, node: &N) -> Option<usize> {
        self.nodes.get_index_of(node)
    }

    /// Node at insertion position `index`
    pub fn node_at(&self, index: usize) -> Option<&N> {
        self.nodes.get_index(index)
    }

    /// Symmetric edge existence test
    pub fn has_edge(&self, u: &N, v: &N) -> bool {
        match (self.index_of(u), self.index_of(v)) {
            (Some(a), Some(b)) => self.is_adjacent(a, b),
            _ => false,
        }
    }

    /// Neighbours of `node` in edge insertion order; empty for undeclared nodes
    pub fn neighbors<'a>(&'a self, node: &N) -> impl Iterator<Item = &'a N> + 'a {
        self.index_of(node)
            .into_iter()
            .flat_map(move |i| self.adjacency[i].iter().map(move |&j| &self.nodes[j]))
    }

    /// Number of neighbours of `node`
    pub fn degree(&self, node: &N) -> usize {
        self.index_of(node).map_or(0, |i| self.adjacency[i].len())
    }

    /// Every edge once, ordered by the earlier endpoint's position and then
    /// by neighbour insertion order
    pub fn edges(&self) -> Vec<Edge<N>> {
        let mut edges = Vec::with_capacity(self.edge_count);
        for (i, adjacent) in self.adjacency.iter().enumerate() {
            for &j in adjacent {
                if i < j {
                    edges.push(Edge::new(self.nodes[i].clone(), self.nodes[j].clone()));
                }
            }
        }
        edges
    }

    /// Subgraph induced by `keep`. Undeclared nodes in `keep` are ignored and
    /// the original node order is preserved.
    pub fn induced_subgraph(&self, keep: &[N]) -> Graph<N> {
        let mut mask = vec![false; self.node_count()];
        for node in keep {
            if let Some(i) = self.index_of(node) {
                mask[i] = true;
            }
        }

        let mut sub = Graph::with_nodes(
            self.nodes
                .iter()
                .enumerate()
                .filter(|(i, _)| mask[*i])
                .map(|(_, node)| node.clone()),
        );
        for (i, adjacent) in self.adjacency.iter().enumerate() {
            if !mask[i] {
                continue;
            }
            for &j in adjacent {
                if i < j && mask[j] {
                    let a = sub.add_node(self.nodes[i].clone());
                    let b = sub.add_node(self.nodes[j].clone());
                    sub.adjacency[a].insert(b);
                    sub.adjacency[b].insert(a);
                    sub.edge_count += 1;
                }
            }
        }
        sub
    }

    /// Check whether `from` and `to` lie in the same connected component
    pub fn has_path(&self, from: &N, to: &N) -> bool {
        match (self.index_of(from), self.index_of(to)) {
            (Some(a), Some(b)) => self.reachable_within(a, b, |_| true),
            _ => false,
        }
    }

    /// Connected components, each listed in node order, ordered by their first node
    pub fn connected_components(&self) -> Vec<Vec<N>> {
        let (labels, count) = self.component_labels();
        let mut components = vec![Vec::new(); count];
        for (i, &label) in labels.iter().enumerate() {
            components[label].push(self.nodes[i].clone());
        }
        components
    }

    fn require(&self, node: &N) -> Result<usize> {
        self.index_of(node).ok_or_else(|| {
            GraphError::UnknownNode {
                node: format!("{:?}", node),
            }
            .into()
        })
    }

    pub(crate) fn adjacent(&self, index: usize) -> &IndexSet<usize> {
        &self.adjacency[index]
    }

    pub(crate) fn is_adjacent(&self, a: usize, b: usize) -> bool {
        self.adjacency[a].contains(&b)
    }

    /// Breadth-first reachability from `from` to `to` through nodes accepted by
    /// `allowed`. Both endpoints are always admitted.
    pub(crate) fn reachable_within(
        &self,
        from: usize,
        to: usize,
        allowed: impl Fn(usize) -> bool,
    ) -> bool {
        if from == to {
            return true;
        }
        let mut seen = vec![false; self.node_count()];
        let mut queue = VecDeque::from([from]);
        seen[from] = true;
        while let Some(u) = queue.pop_front() {
            for &w in &self.adjacency[u] {
                if w == to {
                    return true;
                }
                if !seen[w] && allowed(w) {
                    seen[w] = true;
                    queue.push_back(w);
                }
            }
        }
        false
    }

    /// Component label per node position, plus the number of components
    pub(crate) fn component_labels(&self) -> (Vec<usize>, usize) {
        const UNSET: usize = usize::MAX;
        let mut labels = vec![UNSET; self.node_count()];
        let mut count = 0;
        for root in 0..self.node_count() {
            if labels[root] != UNSET {
                continue;
            }
            labels[root] = count;
            let mut stack = vec![root];
            while let Some(u) = stack.pop() {
                for &w in &self.adjacency[u] {
                    if labels[w] == UNSET {
                        labels[w] = count;
                        stack.push(w);
                    }
                }
            }
            count += 1;
        }
        (labels, count)
    }
}
