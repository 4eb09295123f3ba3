//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Constants:** Architectural widths, register counts and fixed shift amounts.
//! 2. **Error Handling:** Logic-level contract violations and simulator-level errors.
//! 3. **Randomness:** A seeded xorshift generator for power-up garbage.

/// Architectural widths and fixed values.
pub mod constants;

/// Error types for the gate substrate and the simulator.
pub mod error;

/// Xorshift generator for randomized power-up state.
pub mod rng;

pub use error::{LogicError, LogicResult, SimError, SimResult};
