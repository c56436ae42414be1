//! Graph data structures and augmentation engines
//!
//! The store holds a simple undirected graph; every engine reads a snapshot
//! of it and returns edge proposals for the caller to apply.

pub mod store;
pub mod edge;
pub mod parse;
pub mod connectivity;
pub mod biconnect;
pub mod chordal;
pub mod mcs_m;
pub mod triangulate;

// Re-export main graph types
pub use store::Graph;
pub use edge::Edge;
pub use parse::parse_edge_list;
pub use connectivity::{articulation_points, is_biconnected, BlockDecomposition};
pub use biconnect::{augment_biconnectivity, augment_edge_biconnectivity};
pub use chordal::{
    euler_triangle_identity, is_chordal, is_perfect_elimination_ordering,
    maximum_cardinality_search, triangle_count,
};
pub use mcs_m::{mcs_m, Completion};
pub use triangulate::{triangulate, triangulate_with, Triangulation};
