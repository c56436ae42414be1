//! Error types and handling for floorplan graph augmentation
//!
//! Graph validation happens once, at the graph store boundary. The
//! augmentation engines themselves never fail; they only ever return
//! (possibly empty) edge proposals.

use thiserror::Error;

/// Main result type used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the augmentation toolkit
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// Graph construction or mutation rejected
    #[error("Invalid graph: {0}")]
    Graph(#[from] GraphError),

    /// Malformed input text or arguments
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// I/O errors from std
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization errors
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Prometheus metrics errors
    #[error("Metrics error: {0}")]
    Metrics(#[from] prometheus::Error),
}

/// Violations of the simple undirected graph invariants
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    /// Edge with identical endpoints
    #[error("self-loop on node {node}")]
    SelfLoop {
        /// Offending node
        node: String,
    },

    /// Edge already present, in either orientation
    #[error("duplicate edge ({u}, {v})")]
    DuplicateEdge {
        /// First endpoint
        u: String,
        /// Second endpoint
        v: String,
    },

    /// Edge endpoint that was never declared as a node
    #[error("edge references undeclared node {node}")]
    UnknownNode {
        /// Missing node
        node: String,
    },
}

impl Error {
    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create an invalid input error
    pub fn invalid_input(msg: impl Into<String>) -> Self {
        Self::InvalidInput(msg.into())
    }

    /// Check if the error was caused by the caller's input rather than the environment
    pub fn is_client_error(&self) -> bool {
        matches!(
            self,
            Error::Config(_) | Error::Graph(_) | Error::InvalidInput(_)
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn graph_errors_convert_and_render() {
        let err: Error = GraphError::SelfLoop { node: "3".into() }.into();
        assert!(err.is_client_error());
        assert_eq!(err.to_string(), "Invalid graph: self-loop on node 3");
    }

    #[test]
    fn io_errors_are_not_client_errors() {
        let err: Error = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert!(!err.is_client_error());
    }
}
