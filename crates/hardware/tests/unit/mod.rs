//! # Unit Components
//!
//! This module serves as the central hub for the component tests. It mirrors
//! the crate layout, from single gates up to whole programs on the pipeline.



/// Core processor tests.
///
/// ALU, control decode, the trap unit and end-to-end pipeline behavior.
pub mod core;



/// Configuration parsing and validation.
pub mod config;

/// Statistics counters driven by real programs.
pub mod stats;
