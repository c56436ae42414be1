//! Edge-list text format
//!
//! Whitespace separated integers: the vertex count `V`, the edge count `E`,
//! then `E` pairs `u v` using 0-based node numbers. Nodes `0..V` are declared
//! up front so isolated nodes survive. Lines starting with `#` are ignored.

use crate::core::error::{Error, Result};
use crate::graph::store::Graph;

/// Parse an edge list into a graph over `0..V`
pub fn parse_edge_list(text: &str) -> Result<Graph<u32>> {
    let mut tokens = text
        .lines()
        .filter(|line| !line.trim_start().starts_with('#'))
        .flat_map(str::split_whitespace);

    let vertex_count = next_number(&mut tokens, "vertex count")?;
    let edge_count = next_number(&mut tokens, "edge count")?;

    let mut graph = Graph::with_nodes(0..vertex_count);
    for i in 0..edge_count {
        let u = next_number(&mut tokens, &format!("edge {} source", i + 1))?;
        let v = next_number(&mut tokens, &format!("edge {} target", i + 1))?;
        graph.add_edge(u, v)?;
    }

    if let Some(extra) = tokens.next() {
        return Err(Error::invalid_input(format!(
            "unexpected trailing token {:?} after {} edges",
            extra, edge_count
        )));
    }
    Ok(graph)
}

fn next_number<'a>(tokens: &mut impl Iterator<Item = &'a str>, what: &str) -> Result<u32> {
    let token = tokens
        .next()
        .ok_or_else(|| Error::invalid_input(format!("missing {}", what)))?;
    token
        .parse()
        .map_err(|e| Error::invalid_input(format!("invalid {} {:?}: {}", what, token, e)))
}
