//! Instruction pipeline implementation.
//!
//! This module contains the five-stage pipeline. It includes:
//! 1. **Hazards:** The forwarding unit and load-use detection.
//! 2. **Latches:** IF/ID, ID/EX, EX/MEM and MEM/WB with clocked capture and flush.
//! 3. **Signals:** Control lines produced by decode.
//! 4. **Stages:** Fetch, Decode, Execute, Memory and Writeback.
//! 5. **Traits:** The latch entry interface.
//! 6. **Wires:** Redirect and register-commit signals travelling backward.

/// Forwarding unit and hazard detection.
pub mod hazards;

/// Inter-stage pipeline latches (IF/ID, ID/EX, EX/MEM, MEM/WB).
pub mod latches;

/// Control signals generated during instruction decode.
pub mod signals;

/// Pipeline stage implementations.
pub mod stages;

/// Latch entry interface.
pub mod traits;

/// Backward-travelling combinational wires.
pub mod wires;
