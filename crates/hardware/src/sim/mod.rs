//! Simulation utilities and program loading.
//!
//! Provides the program-file loader and a batch simulator that builds a
//! machine from a configuration and runs it to completion.

/// Program text parsing and placement.
pub mod loader;

/// Configured machine and batch run loop.
pub mod simulator;

pub use simulator::{RunSummary, Simulator};
