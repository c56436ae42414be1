//! Core system types and foundations
//!
//! Error handling and configuration shared by the graph engines, the
//! pipeline, and the command line front end.

pub mod error;
pub mod config;

// Re-export commonly used items
pub use error::{Error, GraphError, Result};
pub use config::{AugmentConfig, Config, LoggingConfig, MetricsConfig, TriangulationConfig};
