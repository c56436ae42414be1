//! End-to-end scenarios through the public API

use floorplan_augment::core::TriangulationConfig;
use floorplan_augment::graph::{
    articulation_points, is_biconnected, is_chordal, parse_edge_list, triangulate_with,
};
use floorplan_augment::{augment, augment_biconnectivity, triangulate, Config, Edge, Graph};

fn graph(n: u32, edges: &[(u32, u32)]) -> Graph<u32> {
    Graph::from_edges(0..n, edges.iter().copied()).unwrap()
}

fn apply(g: &Graph<u32>, extra: &[Edge<u32>]) -> Graph<u32> {
    let mut out = g.clone();
    out.extend_edges(extra).unwrap();
    out
}

#[test]
fn star_articulation_gets_a_ring() {
    let g = graph(5, &[(0, 1), (0, 2), (0, 3), (0, 4)]);
    assert_eq!(articulation_points(&g), vec![0]);

    let bypass = augment_biconnectivity(&g);
    assert_eq!(
        bypass,
        vec![Edge::new(1, 2), Edge::new(2, 3), Edge::new(3, 4)]
    );
    assert!(articulation_points(&apply(&g, &bypass)).is_empty());
}

#[test]
fn square_gets_exactly_one_diagonal() {
    let g = graph(4, &[(0, 1), (1, 2), (2, 3), (3, 0)]);
    assert!(augment_biconnectivity(&g).is_empty());

    let fill = triangulate(&g);
    assert_eq!(fill.len(), 1);
    assert!(fill[0].same_pair(&Edge::new(0, 2)) || fill[0].same_pair(&Edge::new(1, 3)));

    let chordal = apply(&g, &fill);
    assert_eq!(chordal.edge_count(), 5);
    assert!(is_chordal(&chordal));
}

#[test]
fn triangle_needs_nothing() {
    let g = graph(3, &[(0, 1), (1, 2), (2, 0)]);
    assert!(augment_biconnectivity(&g).is_empty());
    assert!(triangulate(&g).is_empty());
}

#[test]
fn wide_cut_vertex_feeding_other_cut_vertices() {
    // 0 has degree 4; 1 and 2 are cut vertices hanging pendant paths
    let g = graph(8, &[(0, 1), (0, 2), (0, 3), (0, 4), (1, 5), (2, 6), (6, 7)]);
    assert_eq!(articulation_points(&g), vec![0, 1, 2, 6]);

    let augmented = apply(&g, &augment_biconnectivity(&g));
    assert!(articulation_points(&augmented).is_empty());
    assert!(is_biconnected(&augmented));
}

#[test]
fn euler_shortcut_is_opt_in() {
    // A square next to a separate triangle satisfies T + V - E == 1
    let g = graph(7, &[(0, 1), (1, 2), (2, 3), (3, 0), (4, 5), (5, 6), (6, 4)]);

    let exact = triangulate_with(&g, &TriangulationConfig::default());
    assert_eq!(exact.fill.len(), 1);
    assert!(!exact.already_chordal);

    let shortcut = triangulate_with(&g, &TriangulationConfig { euler_shortcut: true });
    assert!(shortcut.fill.is_empty());
    assert!(shortcut.already_chordal);
}

#[test]
fn edge_list_through_the_pipeline() {
    let g = parse_edge_list("6 5\n0 1\n1 2\n2 3\n3 4\n4 5\n").unwrap();
    let out = augment(&g, &Config::default()).unwrap();

    assert_eq!(out.report.articulation_points, vec![1, 2, 3, 4]);
    assert!(out.report.biconnected);
    assert!(out.report.chordal);
    assert_eq!(
        out.report.edges_after,
        out.report.edges_before + out.report.bypass_edges.len() + out.report.fill_edges.len()
    );
    assert_eq!(out.graph.edge_count(), out.report.edges.len());
}

#[test]
fn disconnected_input_keeps_its_components() {
    let g = graph(6, &[(0, 1), (1, 2), (3, 4), (4, 5)]);
    let out = augment(&g, &Config::default()).unwrap();

    assert_eq!(out.graph.connected_components().len(), 2);
    assert!(articulation_points(&out.graph).is_empty());
    assert!(!out.report.biconnected);
}
