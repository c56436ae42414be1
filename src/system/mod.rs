//! System utilities and monitoring
//!
//! Prometheus metrics for augmentation runs.

pub mod metrics;
