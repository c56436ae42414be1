//! Floorplan Augment - graph preparation for rectangular floorplan duals
//!
//! A graph can only serve as the dual of a rectangular floorplan once it is
//! biconnected and triangulated. This crate proposes the extra edges for
//! both: bypass edges around every articulation point, then a minimal
//! chordal completion computed with MCS-M. Engines never mutate their input;
//! callers decide when to apply the proposals.
#![warn(missing_docs)]

// Core foundational modules
pub mod core;

// Main functional modules
pub mod graph;
pub mod pipeline;
pub mod system;

// Re-export commonly used items for convenience
pub use crate::core::{Config, Error, GraphError, LoggingConfig, Result};
pub use graph::{augment_biconnectivity, triangulate, Edge, Graph};
pub use pipeline::{augment, AugmentationReport, Augmented};

/// Crate version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");

/// Install the global tracing subscriber.
///
/// `RUST_LOG` wins over the configured level. Logs go to stderr so reports on
/// stdout stay machine readable.
pub fn init_logging(config: &LoggingConfig) -> Result<()> {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(&config.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    let installed = match config.format.as_str() {
        "json" => builder.json().try_init(),
        _ => builder.try_init(),
    };
    installed.map_err(|e| Error::config(format!("Failed to install logger: {}", e)))?;

    tracing::info!("Initializing {} v{}", NAME, VERSION);
    system::metrics::init_registry();
    Ok(())
}
