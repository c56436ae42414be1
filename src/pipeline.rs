//! Augmentation pipeline
//!
//! The caller-side control flow: propose bypass edges, apply them, triangulate
//! the result, apply the fill edges. The input graph is never mutated; the
//! augmented copy is returned next to a serializable report.

use crate::core::{Config, Result};
use crate::graph::{
    articulation_points, augment_biconnectivity, is_biconnected, is_chordal, triangulate_with,
    Edge, Graph,
};
use crate::system::metrics::{Metrics, Timer};
use indexmap::IndexMap;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;
use tracing::{info, info_span};

/// Summary of one pipeline run, ready for downstream floorplan tooling
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AugmentationReport<N: Eq + Hash> {
    /// Node count
    pub nodes: usize,
    /// Edge count of the input graph
    pub edges_before: usize,
    /// Articulation points of the input graph
    pub articulation_points: Vec<N>,
    /// Bypass edges applied by the biconnectivity pass
    pub bypass_edges: Vec<Edge<N>>,
    /// Fill edges applied by the triangulation pass
    pub fill_edges: Vec<Edge<N>>,
    /// Elimination ranking, when the triangulation pass ran
    pub ranking: Option<IndexMap<N, usize>>,
    /// Edge count after both passes
    pub edges_after: usize,
    /// The augmented graph is biconnected
    pub biconnected: bool,
    /// The augmented graph is chordal
    pub chordal: bool,
    /// Every edge of the augmented graph
    pub edges: Vec<Edge<N>>,
}

/// Augmented graph plus its report
#[derive(Debug, Clone)]
pub struct Augmented<N: Eq + Hash> {
    /// Input graph with bypass and fill edges applied
    pub graph: Graph<N>,
    /// Run summary
    pub report: AugmentationReport<N>,
}

/// Run the passes enabled in `config` over a copy of `graph`
pub fn augment<N: Clone + Eq + Hash + Debug>(graph: &Graph<N>, config: &Config) -> Result<Augmented<N>> {
    let span = info_span!("augment", nodes = graph.node_count(), edges = graph.edge_count());
    let _enter = span.enter();

    let metrics = Metrics::global();
    let timer = Timer::start(metrics.augmentation_duration.clone());
    let mut augmented = graph.clone();

    let cut_vertices = articulation_points(graph);
    let bypass_edges = if config.augment.biconnect {
        augment_biconnectivity(graph)
    } else {
        Vec::new()
    };
    augmented.extend_edges(&bypass_edges)?;
    info!(
        articulation_points = cut_vertices.len(),
        bypass_edges = bypass_edges.len(),
        "biconnectivity pass finished"
    );

    let triangulation = config
        .augment
        .triangulate
        .then(|| triangulate_with(&augmented, &config.triangulation));
    let fill_edges = triangulation
        .as_ref()
        .map(|t| t.fill.clone())
        .unwrap_or_default();
    augmented.extend_edges(&fill_edges)?;
    info!(
        fill_edges = fill_edges.len(),
        already_chordal = triangulation.as_ref().map(|t| t.already_chordal),
        "triangulation pass finished"
    );

    metrics.graphs_processed.inc();
    metrics.articulation_points.inc_by(cut_vertices.len() as u64);
    metrics.bypass_edges.inc_by(bypass_edges.len() as u64);
    metrics.fill_edges.inc_by(fill_edges.len() as u64);
    timer.finish();

    let report = AugmentationReport {
        nodes: graph.node_count(),
        edges_before: graph.edge_count(),
        articulation_points: cut_vertices,
        bypass_edges,
        fill_edges,
        ranking: triangulation.map(|t| t.ranking),
        edges_after: augmented.edge_count(),
        biconnected: is_biconnected(&augmented),
        chordal: is_chordal(&augmented),
        edges: augmented.edges(),
    };

    Ok(Augmented {
        graph: augmented,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn graph(n: u32, edges: &[(u32, u32)]) -> Graph<u32> {
        Graph::from_edges(0..n, edges.iter().copied()).unwrap()
    }

    #[test]
    fn star_becomes_biconnected_and_chordal() {
        let g = graph(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]);
        let out = augment(&g, &Config::default()).unwrap();
        let report = &out.report;

        assert_eq!(report.articulation_points, vec![0]);
        assert_eq!(report.bypass_edges.len(), 3);
        assert!(report.fill_edges.is_empty());
        assert!(report.biconnected);
        assert!(report.chordal);
        assert_eq!(report.edges_after, 7);
        assert_eq!(out.graph.edge_count(), 7);
        assert_eq!(g.edge_count(), 4);
    }

    #[test]
    fn path_comes_out_biconnected_and_chordal() {
        let g = graph(6, &[(0, 1), (1, 2), (2, 3), (3, 4), (4, 5)]);
        let out = augment(&g, &Config::default()).unwrap();
        assert_eq!(out.report.bypass_edges.len(), 4);
        assert!(out.report.biconnected);
        assert!(out.report.chordal);
    }

    #[test]
    fn disabled_passes_are_skipped() {
        let g = graph(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
        let mut config = Config::default();
        config.augment.triangulate = false;

        let out = augment(&g, &config).unwrap();
        assert!(out.report.fill_edges.is_empty());
        assert!(out.report.ranking.is_none());
        assert!(!out.report.chordal);

        config.augment.triangulate = true;
        let out = augment(&g, &config).unwrap();
        assert_eq!(out.report.fill_edges.len(), 1);
        assert_eq!(out.report.ranking.as_ref().map(|r| r.len()), Some(4));
    }

    #[test]
    fn report_serializes_to_json() {
        let g = graph(3, &[(0, 1), (1, 2), (2, 0)]);
        let out = augment(&g, &Config::default()).unwrap();
        let json = serde_json::to_value(&out.report).unwrap();
        assert_eq!(json["edges_after"], 3);
        assert_eq!(json["bypass_edges"].as_array().map(Vec::len), Some(0));
        assert_eq!(json["ranking"]["0"], 1);
    }
}
